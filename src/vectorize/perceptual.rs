//! Intensity-aware blends where punchy ingredients outweigh their volume

use crate::config::{GARNISH_WEIGHT, PUNCH_WEIGHT};
use crate::core::vector::{add_scaled, norm};
use crate::core::{DataContext, Recipe};

use super::flavor::{blend_vector, flavor_vector, volume_weight};

/// Every component and garnish as (flavor vector, volume weight)
fn weighted_parts(ctx: &DataContext, recipe: &Recipe) -> Vec<(Vec<f64>, f64)> {
	let total_ml = recipe.total_ml();

	recipe
		.components
		.iter()
		.map(|c| (flavor_vector(ctx, &c.ingredient), volume_weight(c, total_ml)))
		.chain(
			recipe
				.garnish
				.iter()
				.map(|g| (flavor_vector(ctx, g), GARNISH_WEIGHT)),
		)
		.collect()
}

/// Softmax of `values / tau`, shifted by the max before exponentiating.
///
/// `tau <= 0` (or an overflow in the scaled values) is the zero-temperature
/// limit: all mass on the first maximum.
pub fn sharpened_softmax(values: &[f64], tau: f64) -> Vec<f64> {
	if values.is_empty() {
		return Vec::new();
	}

	let scaled: Vec<f64> = values.iter().map(|v| v / tau).collect();
	if tau <= 0.0 || scaled.iter().any(|s| !s.is_finite()) {
		return one_hot_max(values);
	}

	let max = scaled.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
	let exp: Vec<f64> = scaled.iter().map(|s| (s - max).exp()).collect();
	let sum: f64 = exp.iter().sum();
	exp.iter().map(|e| e / sum).collect()
}

fn one_hot_max(values: &[f64]) -> Vec<f64> {
	let mut best = 0;
	for (idx, v) in values.iter().enumerate() {
		if *v > values[best] {
			best = idx;
		}
	}
	let mut boost = vec![0.0; values.len()];
	boost[best] = 1.0;
	boost
}

/// Flavor blend where `tau` sets how much the most intense ingredient dominates.
///
/// Intensity is the L2 norm of an ingredient's flavor. The softmax boost is
/// multiplied by volume weight and renormalized, so a large `tau` collapses to
/// the plain volume blend and a tiny `tau` to the single most intense part.
pub fn softmax_perceptual_vector(ctx: &DataContext, recipe: &Recipe, tau: f64) -> Vec<f64> {
	let parts = weighted_parts(ctx, recipe);
	let mut result = ctx.dimensions().zeros();
	if parts.is_empty() {
		return result;
	}

	let intensities: Vec<f64> = parts.iter().map(|(fv, _)| norm(fv)).collect();
	let boost = sharpened_softmax(&intensities, tau);

	let mut weights: Vec<f64> = boost
		.iter()
		.zip(parts.iter())
		.map(|(b, (_, vw))| b * vw)
		.collect();
	let weight_sum: f64 = weights.iter().sum();
	if weight_sum > 0.0 {
		for w in &mut weights {
			*w /= weight_sum;
		}
	}

	for ((fv, _), w) in parts.iter().zip(weights.iter()) {
		add_scaled(&mut result, fv, *w);
	}

	result
}

/// Fixed-punch blend: a share of the element-wise max flavor mixed into the volume blend
pub fn perceptual_vector(ctx: &DataContext, recipe: &Recipe) -> Vec<f64> {
	let mut peaks: Vec<Vec<f64>> = recipe
		.components
		.iter()
		.map(|c| flavor_vector(ctx, &c.ingredient))
		.collect();
	for garnish in &recipe.garnish {
		peaks.push(
			flavor_vector(ctx, garnish)
				.into_iter()
				.map(|v| v * GARNISH_WEIGHT)
				.collect(),
		);
	}

	if peaks.is_empty() {
		return ctx.dimensions().zeros();
	}

	let mut max_vec = vec![f64::NEG_INFINITY; ctx.dimensions().len()];
	for peak in &peaks {
		for (m, v) in max_vec.iter_mut().zip(peak.iter()) {
			*m = m.max(*v);
		}
	}

	let blend = blend_vector(ctx, recipe);
	max_vec
		.iter()
		.zip(blend.iter())
		.map(|(m, b)| PUNCH_WEIGHT * m + (1.0 - PUNCH_WEIGHT) * b)
		.collect()
}
