//! Distances, neighbors, projection and alignment

pub mod align;
pub mod classify;
pub mod distance;
pub mod neighbors;
pub mod pipeline;
pub mod reducer;
pub mod sweep;
pub mod umap;

pub use align::{procrustes_align, Procrustes};
pub use distance::{
	category_distance, ingredient_flavor_distance, recipe_distance, recipe_distance_matrix,
	recipe_distance_parts, RecipeDistance,
};
pub use neighbors::{nearest_neighbors, rank_neighbors, Neighbor, NeighborLists};
pub use reducer::{identity_relations, AlignedReducer, Reducer, Relation};
pub use sweep::{alpha_sweep, alpha_values, tau_sweep, tau_values, Frame, Point, PointSet};
pub use umap::{AlignedUmap, UmapReducer};
