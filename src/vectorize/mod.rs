//! # Recipe Vectorization
//!
//! Each strategy turns a recipe into one numeric vector under a different
//! notion of similarity: taste only, structure only, a blend of both, or
//! intensity-weighted taste.

pub mod blend;
pub mod flavor;
pub mod perceptual;
pub mod role_slot;
pub mod structural;

use rayon::prelude::*;

use crate::core::{DataContext, Recipe};

pub use blend::{blend_struct_pair, blend_struct_vector};
pub use flavor::{blend_vector, flavor_vector};
pub use perceptual::{perceptual_vector, sharpened_softmax, softmax_perceptual_vector};
pub use role_slot::role_slot_vector;
pub use structural::{grouped_role_proportions, structural_vector, RoleGroup, STRUCTURAL_WIDTH};

/// A vectorization and its parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
	/// Volume-weighted flavor blend
	Blend,
	/// Unit flavor and unit structure mixed by alpha
	BlendStruct { alpha: f64 },
	/// Flavor profile per role slot
	RoleSlot,
	/// Fixed-punch perceptual blend
	Perceptual,
	/// Softmax-sharpened perceptual blend
	Softmax { tau: f64 },
}

impl Strategy {
	pub fn vectorize(&self, ctx: &DataContext, recipe: &Recipe) -> Vec<f64> {
		match *self {
			Strategy::Blend => blend_vector(ctx, recipe),
			Strategy::BlendStruct { alpha } => blend_struct_vector(ctx, recipe, alpha),
			Strategy::RoleSlot => role_slot_vector(ctx, recipe),
			Strategy::Perceptual => perceptual_vector(ctx, recipe),
			Strategy::Softmax { tau } => softmax_perceptual_vector(ctx, recipe, tau),
		}
	}

	/// Output width for a corpus with `dims` flavor dimensions
	pub fn width(&self, dims: usize) -> usize {
		match self {
			Strategy::Blend | Strategy::Perceptual | Strategy::Softmax { .. } => dims,
			Strategy::BlendStruct { .. } => dims + STRUCTURAL_WIDTH,
			Strategy::RoleSlot => dims * RoleGroup::ALL.len(),
		}
	}

	/// Stable key, e.g. `blend_struct_a050` or `softmax_t1.000`
	pub fn label(&self) -> String {
		match self {
			Strategy::Blend => "blend".to_string(),
			Strategy::BlendStruct { alpha } => {
				format!("blend_struct_a{:03}", (alpha * 100.0).round() as i64)
			}
			Strategy::RoleSlot => "role_slot".to_string(),
			Strategy::Perceptual => "perceptual".to_string(),
			Strategy::Softmax { tau } => format!("softmax_t{:.3}", tau),
		}
	}

	pub fn description(&self) -> String {
		match self {
			Strategy::Blend => {
				"Proportion-weighted flavor blend. Pure taste, no structure.".to_string()
			}
			Strategy::BlendStruct { alpha } => format!(
				"Taste + structure (alpha={:.2}). Unit flavor and unit structure, mixed linearly.",
				alpha
			),
			Strategy::RoleSlot => {
				"Flavor profile per role slot. Close only when the same slots taste alike."
					.to_string()
			}
			Strategy::Perceptual => {
				"Fixed-punch perceptual blend. Intense ingredients pull above their volume."
					.to_string()
			}
			Strategy::Softmax { tau } => format!(
				"Softmax perceptual blend (tau={:.3}). Low tau lets the most intense ingredient dominate.",
				tau
			),
		}
	}
}

/// Vectorize every recipe in corpus order
pub fn vectorize_corpus(ctx: &DataContext, strategy: Strategy) -> Vec<Vec<f64>> {
	ctx.recipes()
		.par_iter()
		.map(|recipe| strategy.vectorize(ctx, recipe))
		.collect()
}
