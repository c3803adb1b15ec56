//! Embed command - every projection of the corpus, exported as one document

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::core::DataContext;
use crate::processing::pipeline::{self, PipelineOptions};
use crate::processing::umap::{AlignedUmap, UmapReducer};
use crate::storage::{build_document, write_json};
use crate::ui;

pub fn run(
	ctx: &DataContext,
	options: PipelineOptions,
	umap_neighbors: usize,
	export: &Path,
) -> Result<()> {
	let start = Instant::now();
	ui::debug(&format!(
		"Embedding: alpha_steps={}, tau_steps={}, umap_neighbors={}, top_k={}",
		options.alpha_steps, options.tau_steps, umap_neighbors, options.top_k
	));

	let reducer = UmapReducer::new(umap_neighbors);
	let aligned = AlignedUmap::new(reducer);

	let views = pipeline::run(ctx, &options, &reducer, &aligned)?;
	let document = build_document(ctx, &views);

	ui::debug(&format!(
		"{} views in {:.2}s",
		document.strategies.len(),
		start.elapsed().as_secs_f32()
	));
	write_json(&document, export)
}
