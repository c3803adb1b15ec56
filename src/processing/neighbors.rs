//! Brute-force cosine nearest neighbors over a vectorization

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::vector::cosine_distance;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
	pub name: String,
	pub distance: f64,
}

pub type NeighborLists = BTreeMap<String, Vec<Neighbor>>;

/// The `k` items closest to item `i`, excluding `i` itself.
///
/// Ties keep their original order (stable sort). O(n) per query.
pub fn rank_neighbors<V: AsRef<[f64]>>(vectors: &[V], i: usize, k: usize) -> Vec<(usize, f64)> {
	let query = vectors[i].as_ref();
	let mut distances: Vec<(usize, f64)> = vectors
		.iter()
		.enumerate()
		.filter(|&(j, _)| j != i)
		.map(|(j, other)| (j, cosine_distance(query, other.as_ref())))
		.collect();

	distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
	distances.truncate(k);
	distances
}

/// Ranked neighbors of every item by cosine distance.
///
/// O(n²) overall, sized for corpora of a few hundred recipes.
pub fn nearest_neighbors<V>(names: &[String], vectors: &[V], top_k: usize) -> NeighborLists
where
	V: AsRef<[f64]> + Sync,
{
	let n = names.len().min(vectors.len());
	let vectors = &vectors[..n];

	(0..n)
		.into_par_iter()
		.map(|i| {
			let ranked: Vec<Neighbor> = rank_neighbors(vectors, i, top_k)
				.into_iter()
				.map(|(j, distance)| Neighbor {
					name: names[j].clone(),
					distance,
				})
				.collect();
			(names[i].clone(), ranked)
		})
		.collect()
}
