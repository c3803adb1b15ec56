//! Ingredients and the flavor-dimension axis set

use serde::{Deserialize, Serialize};

/// Ordered set of named flavor axes. Order fixes vector component order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorDimensions(Vec<String>);

impl FlavorDimensions {
	pub fn new<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(names.into_iter().map(Into::into).collect())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn names(&self) -> &[String] {
		&self.0
	}

	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.0.iter().position(|d| d == name)
	}

	/// All-zero vector with one component per dimension
	pub fn zeros(&self) -> Vec<f64> {
		vec![0.0; self.0.len()]
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
	pub name: String,
	/// Taxonomy path from root to leaf, e.g. ["spirit", "whiskey", "rye"]
	pub category_path: Vec<String>,
	pub abv: f64,
	/// One value per flavor dimension, in dimension order
	pub flavor: Vec<f64>,
}

impl Ingredient {
	pub fn new<S: Into<String>>(
		name: S,
		category_path: Vec<String>,
		abv: f64,
		flavor: Vec<f64>,
	) -> Self {
		Self {
			name: name.into(),
			category_path,
			abv,
			flavor,
		}
	}

	pub fn top_category(&self) -> Option<&str> {
		self.category_path.first().map(String::as_str)
	}

	/// Second taxonomy level (e.g. "whiskey"), falling back to the top level
	pub fn sub_category(&self) -> Option<&str> {
		self.category_path
			.get(1)
			.or_else(|| self.category_path.first())
			.map(String::as_str)
	}
}
