//! JSON export of projected views, neighbor lists and recipe metadata

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{DataContext, RecipeComponent};
use crate::processing::classify::{base_spirit, family};
use crate::processing::pipeline::MultiView;
use crate::processing::sweep::{Frame, PointSet};
use crate::processing::NeighborLists;
use crate::ui;
use crate::vectorize::blend_vector;

#[derive(Debug, Serialize)]
pub struct RecipeMeta {
	pub method: String,
	pub served: String,
	pub components: Vec<RecipeComponent>,
	pub garnish: Vec<String>,
	pub base_spirit: String,
	pub family: String,
	pub flavor_vector: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct FrameExport {
	pub description: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parameter: Option<f64>,
	pub points: PointSet,
	pub neighbors: NeighborLists,
}

#[derive(Debug, Serialize)]
pub struct EmbeddingDocument {
	pub generated_at: String,
	pub flavor_dimensions: Vec<String>,
	pub recipes: BTreeMap<String, RecipeMeta>,
	pub strategies: BTreeMap<String, FrameExport>,
}

pub fn recipe_meta(ctx: &DataContext) -> BTreeMap<String, RecipeMeta> {
	ctx.recipes()
		.iter()
		.map(|recipe| {
			let meta = RecipeMeta {
				method: recipe.method.to_string(),
				served: recipe.served.to_string(),
				components: recipe.components.clone(),
				garnish: recipe.garnish.clone(),
				base_spirit: base_spirit(ctx, recipe),
				family: family(recipe).to_string(),
				flavor_vector: blend_vector(ctx, recipe),
			};
			(recipe.name.clone(), meta)
		})
		.collect()
}

pub fn frame_export(frame: &Frame, names: &[String]) -> FrameExport {
	FrameExport {
		description: frame.strategy.description(),
		parameter: frame.parameter(),
		points: frame.points(names),
		neighbors: frame.neighbors.clone(),
	}
}

pub fn build_document(ctx: &DataContext, views: &MultiView) -> EmbeddingDocument {
	let strategies = views
		.frames()
		.map(|frame| (frame.label(), frame_export(frame, &views.names)))
		.collect();

	EmbeddingDocument {
		generated_at: chrono::Utc::now().to_rfc3339(),
		flavor_dimensions: ctx.dimensions().names().to_vec(),
		recipes: recipe_meta(ctx),
		strategies,
	}
}

/// Write pretty JSON to `path`, or to stdout when `path` is `-`
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
	let json = serde_json::to_string_pretty(value).context("Failed to serialize export")?;

	if path.to_str() == Some("-") || path.as_os_str().is_empty() {
		println!("{}", json);
	} else {
		std::fs::write(path, json)
			.with_context(|| format!("Failed to write {}", path.display()))?;
		ui::success(&format!("Exported to {}", ui::path_link(path, 60)));
	}

	Ok(())
}
