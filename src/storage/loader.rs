//! Load the ingredient and recipe corpus from JSON
//!
//! Malformed records are rejected here, before anything reaches the core.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::config::{INGREDIENTS_FILE, RECIPES_FILE};
use crate::core::{DataContext, FlavorDimensions, Ingredient, Method, Recipe, RecipeComponent, Served};
use crate::ui;

#[derive(Debug, Deserialize)]
struct IngredientFile {
	flavor_dimensions: Vec<String>,
	ingredients: BTreeMap<String, RawIngredient>,
}

/// Category path as a list or as a single `root|...|leaf` string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryPath {
	List(Vec<String>),
	Joined(String),
}

impl CategoryPath {
	fn into_vec(self) -> Vec<String> {
		match self {
			CategoryPath::List(parts) => parts,
			CategoryPath::Joined(joined) => joined
				.split('|')
				.map(str::trim)
				.filter(|s| !s.is_empty())
				.map(String::from)
				.collect(),
		}
	}
}

#[derive(Debug, Deserialize)]
struct RawIngredient {
	category_path: CategoryPath,
	abv: f64,
	flavor: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct RawRecipe {
	method: Method,
	#[serde(default)]
	served: Served,
	components: Vec<RecipeComponent>,
	#[serde(default)]
	garnish: Vec<String>,
}

/// Parse `ingredients.json` contents into ordered dimensions and flavor vectors
pub fn parse_ingredients(json: &str) -> Result<(FlavorDimensions, Vec<Ingredient>)> {
	let file: IngredientFile =
		serde_json::from_str(json).context("Failed to parse ingredients")?;

	if file.flavor_dimensions.is_empty() {
		bail!("No flavor dimensions declared");
	}
	let mut seen = HashSet::new();
	for dim in &file.flavor_dimensions {
		if !seen.insert(dim.as_str()) {
			bail!("Flavor dimension '{}' declared twice", dim);
		}
	}
	let dimensions = FlavorDimensions::new(file.flavor_dimensions.iter().cloned());

	let mut ingredients = Vec::with_capacity(file.ingredients.len());
	for (name, raw) in file.ingredients {
		if !raw.abv.is_finite() || raw.abv < 0.0 {
			bail!("Ingredient '{}' has invalid abv {}", name, raw.abv);
		}

		if let Some(unknown) = raw.flavor.keys().find(|k| dimensions.index_of(k).is_none()) {
			bail!("Ingredient '{}' has unknown flavor dimension '{}'", name, unknown);
		}

		let flavor = dimensions
			.names()
			.iter()
			.map(|dim| {
				raw.flavor
					.get(dim)
					.copied()
					.with_context(|| format!("Ingredient '{}' is missing flavor '{}'", name, dim))
			})
			.collect::<Result<Vec<f64>>>()?;

		if flavor.iter().any(|v| !v.is_finite()) {
			bail!("Ingredient '{}' has a non-finite flavor value", name);
		}

		ingredients.push(Ingredient::new(
			name,
			raw.category_path.into_vec(),
			raw.abv,
			flavor,
		));
	}

	Ok((dimensions, ingredients))
}

/// Parse `recipes.json` contents; recipes come back sorted by name
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>> {
	let raw: BTreeMap<String, RawRecipe> =
		serde_json::from_str(json).context("Failed to parse recipes")?;

	let mut recipes = Vec::with_capacity(raw.len());
	for (name, recipe) in raw {
		for component in &recipe.components {
			if let Some(ml) = component.ml {
				if !ml.is_finite() || ml < 0.0 {
					bail!(
						"Recipe '{}' has invalid volume {} for '{}'",
						name,
						ml,
						component.ingredient
					);
				}
			}
		}

		recipes.push(Recipe::new(
			name,
			recipe.method,
			recipe.served,
			recipe.components,
			recipe.garnish,
		));
	}

	Ok(recipes)
}

/// Load the whole corpus from a data directory
pub fn load(dir: &Path) -> Result<DataContext> {
	let ingredients_path = dir.join(INGREDIENTS_FILE);
	let recipes_path = dir.join(RECIPES_FILE);

	let ingredients_json = fs::read_to_string(&ingredients_path)
		.with_context(|| format!("Failed to read {}", ingredients_path.display()))?;
	let recipes_json = fs::read_to_string(&recipes_path)
		.with_context(|| format!("Failed to read {}", recipes_path.display()))?;

	let (dimensions, ingredients) = parse_ingredients(&ingredients_json)
		.with_context(|| format!("Invalid {}", ingredients_path.display()))?;
	let recipes = parse_recipes(&recipes_json)
		.with_context(|| format!("Invalid {}", recipes_path.display()))?;

	ui::debug(&format!(
		"Loaded {} ingredients over {} flavor dimensions, {} recipes",
		ingredients.len(),
		dimensions.len(),
		recipes.len()
	));

	let ctx = DataContext::new(dimensions, ingredients, recipes)?;

	let missing: Vec<&str> = ctx
		.recipes()
		.iter()
		.flat_map(|r| {
			r.components
				.iter()
				.map(|c| c.ingredient.as_str())
				.chain(r.garnish.iter().map(String::as_str))
		})
		.filter(|name| ctx.ingredient(name).is_none())
		.collect();
	if !missing.is_empty() {
		ui::debug(&format!(
			"{} references to ingredients outside the corpus (zero flavor): {}",
			missing.len(),
			missing.join(", ")
		));
	}

	Ok(ctx)
}
