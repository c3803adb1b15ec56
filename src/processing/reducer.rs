//! Contract with the dimensionality-reduction service
//!
//! The pipeline only ever hands over numeric matrices and gets 2-D point
//! sets back. Any reduction algorithm that can honor these two traits can be
//! swapped in.

use anyhow::{bail, Result};
use ndarray::Array2;

/// Row correspondences `(row in frame i, row in frame i + 1)` between two consecutive frames
pub type Relation = Vec<(usize, usize)>;

/// Single-matrix projection, optionally warm-started from a previous layout
pub trait Reducer: Sync {
	/// Project `data` (rows = items) to a low-dimensional point set with the same row count.
	fn reduce(&self, data: &Array2<f32>, init: Option<&Array2<f32>>) -> Result<Array2<f32>>;
}

/// Joint projection of a sequence of related matrices.
///
/// Every returned frame must be a valid embedding of its own input, and
/// adjacent frames must stay visually continuous (no arbitrary rotation,
/// reflection or jump between neighbors in the sequence).
pub trait AlignedReducer: Sync {
	fn reduce_aligned(
		&self,
		frames: &[Array2<f32>],
		relations: &[Relation],
	) -> Result<Vec<Array2<f32>>>;
}

/// Relations for frames that all share the same rows in the same order
pub fn identity_relations(n_rows: usize, n_frames: usize) -> Vec<Relation> {
	let identity: Relation = (0..n_rows).map(|i| (i, i)).collect();
	vec![identity; n_frames.saturating_sub(1)]
}

/// Check the shape contract shared by aligned reducers
pub fn validate_frames(frames: &[Array2<f32>], relations: &[Relation]) -> Result<()> {
	if frames.is_empty() {
		return Ok(());
	}

	if relations.len() != frames.len() - 1 {
		bail!(
			"Expected {} relations for {} frames, got {}",
			frames.len() - 1,
			frames.len(),
			relations.len()
		);
	}

	let n_rows = frames[0].nrows();
	if let Some((idx, frame)) = frames.iter().enumerate().find(|(_, f)| f.nrows() != n_rows) {
		bail!(
			"Frame {} has {} rows, expected {}",
			idx,
			frame.nrows(),
			n_rows
		);
	}

	for (idx, relation) in relations.iter().enumerate() {
		let (from, to) = (frames[idx].nrows(), frames[idx + 1].nrows());
		if let Some(&(a, b)) = relation.iter().find(|&&(a, b)| a >= from || b >= to) {
			bail!("Relation {} maps row {} -> {} out of range", idx, a, b);
		}
	}

	Ok(())
}
