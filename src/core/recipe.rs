//! Recipes, their components and serving attributes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural function of a component inside a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Base,
	Modifier,
	Sweetener,
	Accent,
	Citrus,
	Seasoning,
}

impl Role {
	pub fn as_str(&self) -> &'static str {
		match self {
			Role::Base => "base",
			Role::Modifier => "modifier",
			Role::Sweetener => "sweetener",
			Role::Accent => "accent",
			Role::Citrus => "citrus",
			Role::Seasoning => "seasoning",
		}
	}
}

/// Preparation method. Unknown methods are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Method {
	Shaken,
	Stirred,
	Built,
	Blended,
	Thrown,
	Swizzled,
	Other(String),
}

impl From<String> for Method {
	fn from(s: String) -> Self {
		match s.as_str() {
			"shaken" => Method::Shaken,
			"stirred" => Method::Stirred,
			"built" => Method::Built,
			"blended" => Method::Blended,
			"thrown" => Method::Thrown,
			"swizzled" => Method::Swizzled,
			_ => Method::Other(s),
		}
	}
}

impl From<&str> for Method {
	fn from(s: &str) -> Self {
		Method::from(s.to_string())
	}
}

impl From<Method> for String {
	fn from(m: Method) -> Self {
		m.to_string()
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			Method::Shaken => "shaken",
			Method::Stirred => "stirred",
			Method::Built => "built",
			Method::Blended => "blended",
			Method::Thrown => "thrown",
			Method::Swizzled => "swizzled",
			Method::Other(other) => other,
		};
		f.write_str(s)
	}
}

/// Serving style. `Either` is the wildcard that half-matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Served {
	Up,
	OnIce,
	#[default]
	Either,
	Other(String),
}

impl From<String> for Served {
	fn from(s: String) -> Self {
		match s.as_str() {
			"up" => Served::Up,
			"on_ice" => Served::OnIce,
			"either" => Served::Either,
			_ => Served::Other(s),
		}
	}
}

impl From<&str> for Served {
	fn from(s: &str) -> Self {
		Served::from(s.to_string())
	}
}

impl From<Served> for String {
	fn from(s: Served) -> Self {
		s.to_string()
	}
}

impl fmt::Display for Served {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			Served::Up => "up",
			Served::OnIce => "on_ice",
			Served::Either => "either",
			Served::Other(other) => other,
		};
		f.write_str(s)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeComponent {
	/// Ingredient name; may reference an ingredient outside the corpus
	pub ingredient: String,
	pub role: Role,
	/// Volume in ml, `None` for dashes and rinses
	pub ml: Option<f64>,
}

impl RecipeComponent {
	pub fn new<S: Into<String>>(ingredient: S, role: Role, ml: Option<f64>) -> Self {
		Self {
			ingredient: ingredient.into(),
			role,
			ml,
		}
	}

	pub fn is_seasoning(&self) -> bool {
		self.ml.is_none()
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
	pub name: String,
	pub method: Method,
	#[serde(default)]
	pub served: Served,
	pub components: Vec<RecipeComponent>,
	#[serde(default)]
	pub garnish: Vec<String>,
}

impl Recipe {
	pub fn new<S: Into<String>>(
		name: S,
		method: Method,
		served: Served,
		components: Vec<RecipeComponent>,
		garnish: Vec<String>,
	) -> Self {
		Self {
			name: name.into(),
			method,
			served,
			components,
			garnish,
		}
	}

	/// Sum of all known component volumes
	pub fn total_ml(&self) -> f64 {
		self.components.iter().filter_map(|c| c.ml).sum()
	}

	/// Share of total volume for a component, `None` when it has no countable volume
	pub fn proportion_of(&self, component: &RecipeComponent) -> Option<f64> {
		let total = self.total_ml();
		match component.ml {
			Some(ml) if total > 0.0 => Some(ml / total),
			_ => None,
		}
	}

	/// Per-component volume shares in component order
	pub fn proportions(&self) -> Vec<Option<f64>> {
		self.components.iter().map(|c| self.proportion_of(c)).collect()
	}

	pub fn has_role(&self, role: Role) -> bool {
		self.components.iter().any(|c| c.role == role)
	}
}
