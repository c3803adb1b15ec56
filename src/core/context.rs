//! Immutable corpus handed to every vectorization and distance call

use std::collections::HashMap;

use anyhow::{bail, Result};

use super::ingredient::{FlavorDimensions, Ingredient};
use super::recipe::Recipe;

/// Ingredients and recipes loaded once and only read afterwards.
///
/// Recipes keep the order they were supplied in; that order is the row order
/// of every feature matrix and point set derived from the corpus.
#[derive(Debug, Clone)]
pub struct DataContext {
	dimensions: FlavorDimensions,
	ingredients: HashMap<String, Ingredient>,
	recipes: Vec<Recipe>,
	recipe_index: HashMap<String, usize>,
}

impl DataContext {
	pub fn new(
		dimensions: FlavorDimensions,
		ingredients: Vec<Ingredient>,
		recipes: Vec<Recipe>,
	) -> Result<Self> {
		let mut by_name = HashMap::with_capacity(ingredients.len());
		for ingredient in ingredients {
			if ingredient.flavor.len() != dimensions.len() {
				bail!(
					"Ingredient '{}' has {} flavor values, expected {}",
					ingredient.name,
					ingredient.flavor.len(),
					dimensions.len()
				);
			}
			if by_name.contains_key(&ingredient.name) {
				bail!("Duplicate ingredient '{}'", ingredient.name);
			}
			by_name.insert(ingredient.name.clone(), ingredient);
		}

		let mut recipe_index = HashMap::with_capacity(recipes.len());
		for (idx, recipe) in recipes.iter().enumerate() {
			if recipe_index.insert(recipe.name.clone(), idx).is_some() {
				bail!("Duplicate recipe '{}'", recipe.name);
			}
		}

		Ok(Self {
			dimensions,
			ingredients: by_name,
			recipes,
			recipe_index,
		})
	}

	pub fn dimensions(&self) -> &FlavorDimensions {
		&self.dimensions
	}

	pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
		self.ingredients.get(name)
	}

	pub fn ingredient_count(&self) -> usize {
		self.ingredients.len()
	}

	pub fn recipe(&self, name: &str) -> Option<&Recipe> {
		self.recipe_index.get(name).map(|&idx| &self.recipes[idx])
	}

	/// Recipes in corpus order
	pub fn recipes(&self) -> &[Recipe] {
		&self.recipes
	}

	pub fn recipe_names(&self) -> Vec<String> {
		self.recipes.iter().map(|r| r.name.clone()).collect()
	}
}
