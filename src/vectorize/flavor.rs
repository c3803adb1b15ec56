//! Ingredient flavor lookup and the volume-weighted recipe blend

use crate::config::{GARNISH_WEIGHT, SEASONING_WEIGHT};
use crate::core::vector::add_scaled;
use crate::core::{DataContext, Recipe, RecipeComponent};

/// Flavor vector of an ingredient, or the zero vector when it is not in the corpus
pub fn flavor_vector(ctx: &DataContext, ingredient: &str) -> Vec<f64> {
	match ctx.ingredient(ingredient) {
		Some(ing) => ing.flavor.clone(),
		None => ctx.dimensions().zeros(),
	}
}

/// Weight of a component in a blend: its volume share, or the seasoning weight
pub(crate) fn volume_weight(component: &RecipeComponent, total_ml: f64) -> f64 {
	match component.ml {
		Some(ml) if total_ml > 0.0 => ml / total_ml,
		_ => SEASONING_WEIGHT,
	}
}

/// Volume-weighted sum of component flavors plus a fixed share of each garnish.
///
/// Not normalized.
pub fn blend_vector(ctx: &DataContext, recipe: &Recipe) -> Vec<f64> {
	let total_ml = recipe.total_ml();
	let mut blended = ctx.dimensions().zeros();

	for component in &recipe.components {
		if let Some(ing) = ctx.ingredient(&component.ingredient) {
			add_scaled(&mut blended, &ing.flavor, volume_weight(component, total_ml));
		}
	}

	for garnish in &recipe.garnish {
		if let Some(ing) = ctx.ingredient(garnish) {
			add_scaled(&mut blended, &ing.flavor, GARNISH_WEIGHT);
		}
	}

	blended
}
