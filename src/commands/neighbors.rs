//! Neighbors command - closest recipes under one vectorization

use std::path::Path;

use anyhow::{bail, Result};
use colored::*;

use crate::core::DataContext;
use crate::processing::neighbors::{nearest_neighbors, NeighborLists};
use crate::storage::write_json;
use crate::ui;
use crate::vectorize::{vectorize_corpus, Strategy};

pub fn run(
	ctx: &DataContext,
	recipe: Option<&str>,
	strategy: Strategy,
	top_k: usize,
	export: Option<&Path>,
) -> Result<()> {
	if let Some(name) = recipe {
		if ctx.recipe(name).is_none() {
			bail!("Unknown recipe '{}'", name);
		}
	}

	let names = ctx.recipe_names();
	let vectors = vectorize_corpus(ctx, strategy);
	ui::debug(&format!(
		"Vectorized {} recipes with {} ({} dims)",
		names.len(),
		strategy.label(),
		strategy.width(ctx.dimensions().len())
	));

	let mut lists = nearest_neighbors(&names, &vectors, top_k);
	if let Some(name) = recipe {
		lists.retain(|k, _| k == name);
	}

	if let Some(path) = export {
		return write_json(&lists, path);
	}

	print_neighbors(&lists, strategy);
	Ok(())
}

fn print_neighbors(lists: &NeighborLists, strategy: Strategy) {
	ui::header(&strategy.description());

	let (min, max) = lists
		.values()
		.flatten()
		.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), n| {
			(lo.min(n.distance), hi.max(n.distance))
		});

	for (name, neighbors) in lists {
		println!("{}", name.bright_white().bold());
		if neighbors.is_empty() {
			println!("  {}", "no other recipes".dimmed());
		}
		for (rank, n) in neighbors.iter().enumerate() {
			println!(
				"  {:>2}. {:24} {}",
				(rank + 1).to_string().dimmed(),
				n.name,
				ui::distance_gradient(n.distance, min, max)
			);
		}
	}
}
