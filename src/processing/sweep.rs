//! Parameter sweeps producing sequences of comparable 2-D frames

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use ndarray::Array2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{TAU_LOG_MAX, TAU_LOG_MIN};
use crate::core::DataContext;
use crate::processing::align::Procrustes;
use crate::processing::neighbors::{nearest_neighbors, NeighborLists};
use crate::processing::reducer::{identity_relations, AlignedReducer, Reducer};
use crate::ui;
use crate::vectorize::{vectorize_corpus, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
	pub x: f32,
	pub y: f32,
}

pub type PointSet = BTreeMap<String, Point>;

/// One projected view of the corpus
#[derive(Debug, Clone)]
pub struct Frame {
	pub strategy: Strategy,
	/// Projected coordinates, rows in corpus order
	pub coords: Array2<f32>,
	/// Neighbors in the high-dimensional space of this strategy
	pub neighbors: NeighborLists,
}

impl Frame {
	pub fn label(&self) -> String {
		self.strategy.label()
	}

	/// The swept parameter, if this strategy has one
	pub fn parameter(&self) -> Option<f64> {
		match self.strategy {
			Strategy::BlendStruct { alpha } => Some(alpha),
			Strategy::Softmax { tau } => Some(tau),
			_ => None,
		}
	}

	pub fn points(&self, names: &[String]) -> PointSet {
		names
			.iter()
			.zip(self.coords.rows())
			.map(|(name, row)| (name.clone(), Point { x: row[0], y: row[1] }))
			.collect()
	}

	pub fn transform(&mut self, procrustes: &Procrustes) -> Result<()> {
		self.coords = procrustes.apply(&self.coords)?;
		Ok(())
	}
}

/// `steps` evenly spaced alphas from 0.0 to 1.0
pub fn alpha_values(steps: usize) -> Vec<f64> {
	match steps {
		0 => Vec::new(),
		1 => vec![1.0],
		_ => (0..steps)
			.map(|i| round_to(i as f64 / (steps - 1) as f64, 4))
			.collect(),
	}
}

/// `steps` log-spaced taus from 10^TAU_LOG_MIN to 10^TAU_LOG_MAX, rounded to 3 decimals
pub fn tau_values(steps: usize) -> Vec<f64> {
	match steps {
		0 => Vec::new(),
		1 => vec![round_to(10f64.powf(TAU_LOG_MIN), 3)],
		_ => (0..steps)
			.map(|i| {
				let exponent =
					TAU_LOG_MIN + (TAU_LOG_MAX - TAU_LOG_MIN) * i as f64 / (steps - 1) as f64;
				round_to(10f64.powf(exponent), 3)
			})
			.collect(),
	}
}

fn round_to(value: f64, decimals: i32) -> f64 {
	let scale = 10f64.powi(decimals);
	(value * scale).round() / scale
}

/// Rows of f64 vectors as an f32 matrix for the reducer
pub fn to_matrix(vectors: &[Vec<f64>]) -> Array2<f32> {
	let n_cols = vectors.first().map_or(0, Vec::len);
	Array2::from_shape_fn((vectors.len(), n_cols), |(i, j)| {
		vectors[i].get(j).copied().unwrap_or(0.0) as f32
	})
}

fn build_frame(
	strategy: Strategy,
	names: &[String],
	vectors: &[Vec<f64>],
	coords: Array2<f32>,
	top_k: usize,
) -> Result<Frame> {
	if coords.nrows() != names.len() || coords.ncols() < 2 {
		bail!(
			"Reducer returned {:?} for {} items under {}",
			coords.dim(),
			names.len(),
			strategy.label()
		);
	}

	Ok(Frame {
		strategy,
		coords,
		neighbors: nearest_neighbors(names, vectors, top_k),
	})
}

/// Project one strategy on its own
pub fn project_strategy<R: Reducer + ?Sized>(
	ctx: &DataContext,
	strategy: Strategy,
	reducer: &R,
	top_k: usize,
) -> Result<Frame> {
	let names = ctx.recipe_names();
	let vectors = vectorize_corpus(ctx, strategy);
	let coords = reducer
		.reduce(&to_matrix(&vectors), None)
		.with_context(|| format!("Projection failed for {}", strategy.label()))?;
	build_frame(strategy, &names, &vectors, coords, top_k)
}

/// Jointly projected alpha frames, one per alpha, sharing row identity
pub fn alpha_sweep<A: AlignedReducer + ?Sized>(
	ctx: &DataContext,
	alphas: &[f64],
	reducer: &A,
	top_k: usize,
) -> Result<Vec<Frame>> {
	if alphas.is_empty() {
		bail!("No alpha values to sweep");
	}

	let names = ctx.recipe_names();
	ui::info(&format!("Alpha sweep over {} steps", alphas.len()));

	let vectors: Vec<Vec<Vec<f64>>> = alphas
		.par_iter()
		.map(|&alpha| vectorize_corpus(ctx, Strategy::BlendStruct { alpha }))
		.collect();
	let matrices: Vec<Array2<f32>> = vectors.iter().map(|v| to_matrix(v)).collect();
	let relations = identity_relations(names.len(), matrices.len());

	let projections = reducer
		.reduce_aligned(&matrices, &relations)
		.context("Aligned projection of the alpha sweep failed")?;
	if projections.len() != alphas.len() {
		bail!(
			"Aligned reducer returned {} frames for {} alphas",
			projections.len(),
			alphas.len()
		);
	}

	alphas
		.iter()
		.zip(vectors.iter())
		.zip(projections)
		.map(|((&alpha, v), coords)| {
			build_frame(Strategy::BlendStruct { alpha }, &names, v, coords, top_k)
		})
		.collect()
}

type Step = (usize, Vec<Vec<f64>>, Array2<f32>);

/// Tau frames by incremental warm start outward from the central tau.
///
/// Each step is initialized from the previous step's output, so each
/// direction is strictly sequential; the two directions run concurrently.
/// Continuity is softer than the jointly optimized alpha sweep.
pub fn tau_sweep<R: Reducer + ?Sized>(
	ctx: &DataContext,
	taus: &[f64],
	reducer: &R,
	top_k: usize,
) -> Result<Vec<Frame>> {
	if taus.is_empty() {
		bail!("No tau values to sweep");
	}

	let names = ctx.recipe_names();
	let center = taus.len() / 2;
	ui::info(&format!(
		"Tau sweep over {} steps from tau={}",
		taus.len(),
		taus[center]
	));

	let project = |idx: usize, init: Option<&Array2<f32>>| -> Result<Step> {
		let vectors = vectorize_corpus(ctx, Strategy::Softmax { tau: taus[idx] });
		let coords = reducer
			.reduce(&to_matrix(&vectors), init)
			.with_context(|| format!("Projection failed at tau={}", taus[idx]))?;
		ui::debug(&format!("Projected tau={}", taus[idx]));
		Ok((idx, vectors, coords))
	};

	let central = project(center, None)?;

	let walk = |order: Vec<usize>| -> Result<Vec<Step>> {
		let mut prev = central.2.clone();
		let mut steps = Vec::with_capacity(order.len());
		for idx in order {
			let step = project(idx, Some(&prev))?;
			prev = step.2.clone();
			steps.push(step);
		}
		Ok(steps)
	};

	let (down, up) = rayon::join(
		|| walk((0..center).rev().collect()),
		|| walk((center + 1..taus.len()).collect()),
	);

	let mut steps = down?;
	steps.push(central);
	steps.extend(up?);
	steps.sort_by_key(|(idx, _, _)| *idx);

	steps
		.into_iter()
		.map(|(idx, vectors, coords)| {
			build_frame(Strategy::Softmax { tau: taus[idx] }, &names, &vectors, coords, top_k)
		})
		.collect()
}
