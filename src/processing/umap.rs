//! UMAP-backed implementations of the reduction contract

use std::panic::{catch_unwind, AssertUnwindSafe};

use anyhow::{anyhow, bail, Context, Result};
use ndarray::Array2;
use rayon::prelude::*;

use crate::config::{
	ALIGNMENT_PASSES, ALIGNMENT_PULL, ALIGNMENT_WINDOW, INIT_RANGE, UMAP_COMPONENTS,
	UMAP_NEIGHBORS, UMAP_SEED,
};
use crate::processing::align::Procrustes;
use crate::processing::neighbors::rank_neighbors;
use crate::processing::reducer::{validate_frames, AlignedReducer, Reducer, Relation};
use crate::ui;

/// Single-frame UMAP over a brute-force cosine k-NN graph
#[derive(Debug, Clone, Copy)]
pub struct UmapReducer {
	pub n_neighbors: usize,
	pub n_components: usize,
	/// Seed for the random layout of cold starts
	pub seed: u64,
}

impl Default for UmapReducer {
	fn default() -> Self {
		Self {
			n_neighbors: UMAP_NEIGHBORS,
			n_components: UMAP_COMPONENTS,
			seed: UMAP_SEED,
		}
	}
}

impl UmapReducer {
	pub fn new(n_neighbors: usize) -> Self {
		Self {
			n_neighbors,
			..Self::default()
		}
	}
}

impl Reducer for UmapReducer {
	fn reduce(&self, data: &Array2<f32>, init: Option<&Array2<f32>>) -> Result<Array2<f32>> {
		let n_samples = data.nrows();
		let n_features = data.ncols();
		let n_components = self.n_components;

		if n_samples < 3 {
			bail!("UMAP needs at least 3 items, got {}", n_samples);
		}
		if n_features == 0 {
			bail!("UMAP input has no features");
		}

		let n_neighbors = self.n_neighbors.clamp(2, n_samples - 1);
		ui::debug(&format!(
			"Reducing {} x {}D to {}D (neighbors: {})",
			n_samples, n_features, n_components, n_neighbors
		));

		let (knn_indices, knn_distances) = compute_knn(data, n_neighbors);

		// umap-rs uses u32 for indices
		let mut knn_indices_array = Array2::<u32>::zeros((n_samples, n_neighbors));
		let mut knn_dists_array = Array2::<f32>::zeros((n_samples, n_neighbors));
		for i in 0..n_samples {
			for j in 0..n_neighbors {
				knn_indices_array[[i, j]] = knn_indices[i][j] as u32;
				knn_dists_array[[i, j]] = knn_distances[i][j];
			}
		}

		let init = match init {
			Some(init) => {
				if init.dim() != (n_samples, n_components) {
					bail!(
						"Initialization has shape {:?}, expected ({}, {})",
						init.dim(),
						n_samples,
						n_components
					);
				}
				init.clone()
			}
			None => initialize_embedding(n_samples, n_components, self.seed),
		};

		let config = umap_rs::UmapConfig {
			n_components,
			graph: umap_rs::GraphParams {
				n_neighbors,
				..Default::default()
			},
			..Default::default()
		};

		let embedding = catch_unwind(AssertUnwindSafe(|| {
			let umap = umap_rs::Umap::new(config);
			let fitted_model = umap.fit(
				data.view(),
				knn_indices_array.view(),
				knn_dists_array.view(),
				init.view(),
			);
			let embedding = fitted_model.embedding();
			Array2::from_shape_fn((n_samples, n_components), |(i, j)| embedding[[i, j]])
		}))
		.map_err(|_| anyhow!("UMAP optimization aborted"))?;

		if embedding.iter().any(|v| !v.is_finite()) {
			bail!("UMAP produced non-finite coordinates");
		}

		Ok(embedding)
	}
}

type KnnResult = (Vec<Vec<usize>>, Vec<Vec<f32>>);

/// Cosine k-nearest neighbors by brute force
fn compute_knn(data: &Array2<f32>, k: usize) -> KnnResult {
	let rows: Vec<Vec<f64>> = data
		.rows()
		.into_iter()
		.map(|r| r.iter().map(|&v| v as f64).collect())
		.collect();

	let results: Vec<(Vec<usize>, Vec<f32>)> = (0..rows.len())
		.into_par_iter()
		.map(|i| {
			let ranked = rank_neighbors(&rows, i, k);
			let indices = ranked.iter().map(|(j, _)| *j).collect();
			let dists = ranked.iter().map(|(_, d)| *d as f32).collect();
			(indices, dists)
		})
		.collect();

	results.into_iter().unzip()
}

/// Random initialization in [-INIT_RANGE, INIT_RANGE]
pub fn initialize_embedding(n_samples: usize, n_components: usize, seed: u64) -> Array2<f32> {
	use rand::rngs::StdRng;
	use rand::{RngExt, SeedableRng};
	let mut rng = StdRng::seed_from_u64(seed);

	let mut init = Array2::<f32>::zeros((n_samples, n_components));
	for v in init.iter_mut() {
		*v = rng.random_range(-INIT_RANGE..INIT_RANGE);
	}
	init
}

/// Multi-frame UMAP that keeps adjacent frames continuous.
///
/// Frames are first fitted outward from the middle, each warm-started from
/// its neighbor. Refinement passes then refit every frame from a layout
/// pulled toward its Procrustes-aligned neighbors inside the window, and a
/// final pass rotates each frame onto its predecessor. Every frame stays a
/// genuine fit of its own matrix by the wrapped reducer.
#[derive(Debug, Clone, Copy)]
pub struct AlignedUmap<R: Reducer = UmapReducer> {
	pub reducer: R,
	pub window: usize,
	pub passes: usize,
	pub pull: f32,
	/// Seed for rows that no relation carries into a frame
	pub seed: u64,
}

impl Default for AlignedUmap {
	fn default() -> Self {
		Self::new(UmapReducer::default())
	}
}

impl<R: Reducer> AlignedUmap<R> {
	pub fn new(reducer: R) -> Self {
		Self {
			reducer,
			window: ALIGNMENT_WINDOW,
			passes: ALIGNMENT_PASSES,
			pull: ALIGNMENT_PULL,
			seed: UMAP_SEED,
		}
	}

	/// Layout of frame `from` moved into frame `to`, uncovered rows seeded per target frame
	fn carry(
		&self,
		layout: &Array2<f32>,
		from: usize,
		to: usize,
		relations: &[Relation],
		n_rows: usize,
	) -> (Array2<f32>, Vec<bool>) {
		carry(layout, from, to, relations, n_rows, self.seed.wrapping_add(to as u64))
	}

	fn fit_frame(
		&self,
		frames: &[Array2<f32>],
		idx: usize,
		init: Option<&Array2<f32>>,
	) -> Result<Array2<f32>> {
		self.reducer
			.reduce(&frames[idx], init)
			.with_context(|| format!("Aligned UMAP failed on frame {}", idx))
	}

	/// Walk away from `start`, warm-starting each frame from the previous one
	fn walk(
		&self,
		frames: &[Array2<f32>],
		relations: &[Relation],
		start: &Array2<f32>,
		start_idx: usize,
		order: Vec<usize>,
	) -> Result<Vec<(usize, Array2<f32>)>> {
		let mut prev = start.clone();
		let mut prev_idx = start_idx;
		let mut out = Vec::with_capacity(order.len());

		for idx in order {
			let (init, _) = self.carry(&prev, prev_idx, idx, relations, frames[idx].nrows());
			let layout = self.fit_frame(frames, idx, Some(&init))?;
			prev = layout.clone();
			prev_idx = idx;
			out.push((idx, layout));
		}

		Ok(out)
	}

	/// Initialization for frame `idx`: its layout pulled toward aligned neighbors
	fn pulled_init(
		&self,
		layouts: &[Array2<f32>],
		relations: &[Relation],
		idx: usize,
	) -> Result<Array2<f32>> {
		let current = &layouts[idx];
		let n_rows = current.nrows();
		let lo = idx.saturating_sub(self.window);
		let hi = (idx + self.window).min(layouts.len() - 1);

		let mut sum = Array2::<f32>::zeros(current.raw_dim());
		let mut count = vec![0usize; n_rows];

		for other in (lo..=hi).filter(|&j| j != idx) {
			let (carried, covered) = self.carry(&layouts[other], other, idx, relations, n_rows);
			let rows: Vec<usize> = (0..n_rows).filter(|&r| covered[r]).collect();
			if rows.len() < 2 {
				continue;
			}

			let source = current.select(ndarray::Axis(0), &rows);
			let carried_rows = carried.select(ndarray::Axis(0), &rows);
			// Rotate the neighbor into this frame's orientation before averaging
			let aligned = Procrustes::fit(&carried_rows, &source)?.apply(&carried)?;

			for &r in &rows {
				for c in 0..current.ncols() {
					sum[[r, c]] += aligned[[r, c]];
				}
				count[r] += 1;
			}
		}

		let mut init = current.clone();
		for r in 0..n_rows {
			if count[r] > 0 {
				for c in 0..current.ncols() {
					let mean = sum[[r, c]] / count[r] as f32;
					init[[r, c]] = (1.0 - self.pull) * current[[r, c]] + self.pull * mean;
				}
			}
		}

		Ok(init)
	}
}

impl<R: Reducer> AlignedReducer for AlignedUmap<R> {
	fn reduce_aligned(
		&self,
		frames: &[Array2<f32>],
		relations: &[Relation],
	) -> Result<Vec<Array2<f32>>> {
		validate_frames(frames, relations)?;
		if frames.is_empty() {
			return Ok(Vec::new());
		}

		let n_frames = frames.len();
		let center = n_frames / 2;
		ui::debug(&format!(
			"Aligned UMAP over {} frames (center {}, window {}, passes {})",
			n_frames, center, self.window, self.passes
		));

		let center_layout = self.fit_frame(frames, center, None)?;

		let (down, up) = rayon::join(
			|| self.walk(frames, relations, &center_layout, center, (0..center).rev().collect()),
			|| self.walk(frames, relations, &center_layout, center, (center + 1..n_frames).collect()),
		);

		let mut slots: Vec<Option<Array2<f32>>> = vec![None; n_frames];
		slots[center] = Some(center_layout);
		for (idx, layout) in down?.into_iter().chain(up?) {
			slots[idx] = Some(layout);
		}
		let mut layouts: Vec<Array2<f32>> = slots
			.into_iter()
			.enumerate()
			.map(|(idx, slot)| slot.ok_or_else(|| anyhow!("Frame {} was never projected", idx)))
			.collect::<Result<_>>()?;

		for pass in 0..self.passes {
			ui::debug(&format!("Alignment pass {}/{}", pass + 1, self.passes));
			for idx in 0..n_frames {
				let init = self.pulled_init(&layouts, relations, idx)?;
				layouts[idx] = self.fit_frame(frames, idx, Some(&init))?;
			}
		}

		for idx in 1..n_frames {
			let (carried, covered) =
				self.carry(&layouts[idx - 1], idx - 1, idx, relations, layouts[idx].nrows());
			let rows: Vec<usize> = (0..covered.len()).filter(|&r| covered[r]).collect();
			if rows.len() < 2 {
				continue;
			}
			let source = layouts[idx].select(ndarray::Axis(0), &rows);
			let target = carried.select(ndarray::Axis(0), &rows);
			layouts[idx] = Procrustes::fit(&source, &target)?.apply(&layouts[idx])?;
		}

		Ok(layouts)
	}
}

/// Move a layout from frame `from` into the row space of frame `to`.
///
/// Rows reached through the relation chain take the carried position; the
/// rest get a seeded random position and are reported as uncovered.
fn carry(
	layout: &Array2<f32>,
	from: usize,
	to: usize,
	relations: &[Relation],
	n_rows: usize,
	seed: u64,
) -> (Array2<f32>, Vec<bool>) {
	let n_cols = layout.ncols();
	let mut positions: Vec<Option<Vec<f32>>> = layout
		.rows()
		.into_iter()
		.map(|r| Some(r.to_vec()))
		.collect();

	let mut step = from;
	while step != to {
		let (next, relation, forward) = if to > step {
			(step + 1, &relations[step], true)
		} else {
			(step - 1, &relations[step - 1], false)
		};

		let next_rows = if next == to { n_rows } else { max_row(relation, forward) };
		let mut moved: Vec<Option<Vec<f32>>> = vec![None; next_rows];
		for &(a, b) in relation {
			let (src, dst) = if forward { (a, b) } else { (b, a) };
			if let (Some(Some(pos)), true) = (positions.get(src), dst < next_rows) {
				moved[dst] = Some(pos.clone());
			}
		}

		positions = moved;
		step = next;
	}

	let mut out = initialize_embedding(n_rows, n_cols, seed);
	let mut covered = vec![false; n_rows];
	for (r, pos) in positions.into_iter().enumerate().take(n_rows) {
		if let Some(pos) = pos {
			for (c, v) in pos.into_iter().enumerate() {
				out[[r, c]] = v;
			}
			covered[r] = true;
		}
	}

	(out, covered)
}

fn max_row(relation: &Relation, forward: bool) -> usize {
	relation
		.iter()
		.map(|&(a, b)| if forward { b } else { a })
		.max()
		.map_or(0, |m| m + 1)
}
