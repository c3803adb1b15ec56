//! Ingredient and recipe distances

use std::collections::BTreeSet;

use ndarray::Array2;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::{
	METHOD_PENALTY, SERVED_EITHER_PENALTY, SERVED_PENALTY, STRUCTURAL_DISTANCE_CAP,
};
use crate::core::vector::cosine_distance;
use crate::core::{DataContext, Recipe, Served};
use crate::vectorize::{blend_vector, flavor_vector, grouped_role_proportions};

/// Cosine distance between two ingredients' flavor profiles (1.0 if either is all-zero)
pub fn ingredient_flavor_distance(ctx: &DataContext, a: &str, b: &str) -> f64 {
	cosine_distance(&flavor_vector(ctx, a), &flavor_vector(ctx, b))
}

/// Taxonomy hops between two ingredients: edges from each leaf up to their common ancestor.
///
/// An ingredient outside the corpus has an empty path.
pub fn category_distance(ctx: &DataContext, a: &str, b: &str) -> usize {
	let empty: &[String] = &[];
	let path_a = ctx.ingredient(a).map_or(empty, |i| i.category_path.as_slice());
	let path_b = ctx.ingredient(b).map_or(empty, |i| i.category_path.as_slice());

	let common = path_a
		.iter()
		.zip(path_b.iter())
		.take_while(|(x, y)| x == y)
		.count();

	(path_a.len() - common) + (path_b.len() - common)
}

/// Breakdown of a recipe-to-recipe comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecipeDistance {
	/// Cosine distance between blend vectors
	pub flavor: f64,
	/// Penalties plus role distance, capped at 1.0
	pub structural: f64,
	pub method_penalty: f64,
	pub served_penalty: f64,
	/// Euclidean distance between grouped role proportions
	pub role: f64,
}

impl RecipeDistance {
	/// `alpha * flavor + beta * structural`; weights need not sum to 1
	pub fn combined(&self, alpha: f64, beta: f64) -> f64 {
		alpha * self.flavor + beta * self.structural
	}
}

fn served_penalty(a: &Served, b: &Served) -> f64 {
	if a == b {
		0.0
	} else if *a == Served::Either || *b == Served::Either {
		SERVED_EITHER_PENALTY
	} else {
		SERVED_PENALTY
	}
}

fn role_distance(a: &Recipe, b: &Recipe) -> f64 {
	let ga = grouped_role_proportions(a);
	let gb = grouped_role_proportions(b);
	let groups: BTreeSet<_> = ga.keys().chain(gb.keys()).collect();

	groups
		.into_iter()
		.map(|g| {
			let diff = ga.get(g).copied().unwrap_or(0.0) - gb.get(g).copied().unwrap_or(0.0);
			diff * diff
		})
		.sum::<f64>()
		.sqrt()
}

pub fn recipe_distance_parts(ctx: &DataContext, a: &Recipe, b: &Recipe) -> RecipeDistance {
	let flavor = cosine_distance(&blend_vector(ctx, a), &blend_vector(ctx, b));

	let method_penalty = if a.method == b.method { 0.0 } else { METHOD_PENALTY };
	let served_penalty = served_penalty(&a.served, &b.served);
	let role = role_distance(a, b);
	let structural = (method_penalty + served_penalty + role).min(STRUCTURAL_DISTANCE_CAP);

	RecipeDistance {
		flavor,
		structural,
		method_penalty,
		served_penalty,
		role,
	}
}

/// Weighted flavor + structural distance.
///
/// Not a metric unless `alpha == beta`; only the structural half is capped.
pub fn recipe_distance(ctx: &DataContext, a: &Recipe, b: &Recipe, alpha: f64, beta: f64) -> f64 {
	recipe_distance_parts(ctx, a, b).combined(alpha, beta)
}

/// Pairwise recipe distances over the whole corpus, rows in corpus order
pub fn recipe_distance_matrix(ctx: &DataContext, alpha: f64, beta: f64) -> Array2<f64> {
	let recipes = ctx.recipes();
	let n = recipes.len();

	let rows: Vec<Vec<f64>> = recipes
		.par_iter()
		.map(|a| {
			recipes
				.iter()
				.map(|b| recipe_distance(ctx, a, b, alpha, beta))
				.collect()
		})
		.collect();

	let mut matrix = Array2::<f64>::zeros((n, n));
	for (i, row) in rows.iter().enumerate() {
		for (j, &d) in row.iter().enumerate() {
			matrix[[i, j]] = d;
		}
	}
	matrix
}
