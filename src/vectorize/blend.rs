//! Alpha blend of unit flavor and unit structure

use crate::core::vector::normalize;
use crate::core::{DataContext, Recipe};

use super::flavor::blend_vector;
use super::structural::structural_vector;

/// Unit-length flavor blend and unit-length structural vector.
///
/// Each half is normalized on its own; a zero half stays zero.
pub fn blend_struct_pair(ctx: &DataContext, recipe: &Recipe) -> (Vec<f64>, Vec<f64>) {
	let flavor = normalize(&blend_vector(ctx, recipe));
	let structure = normalize(&structural_vector(recipe));
	(flavor, structure)
}

/// `flavor_unit * alpha` followed by `structural_unit * (1 - alpha)`.
///
/// `alpha = 1` is pure taste, `alpha = 0` pure structure. Both halves are
/// unit length before scaling, so alpha interpolates between the two views
/// instead of letting the larger raw magnitude win.
pub fn blend_struct_vector(ctx: &DataContext, recipe: &Recipe, alpha: f64) -> Vec<f64> {
	let (flavor, structure) = blend_struct_pair(ctx, recipe);
	flavor
		.iter()
		.map(|v| v * alpha)
		.chain(structure.iter().map(|v| v * (1.0 - alpha)))
		.collect()
}
