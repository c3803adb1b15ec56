//! Core domain types

pub mod context;
pub mod ingredient;
pub mod recipe;
pub mod vector;

pub use context::DataContext;
pub use ingredient::{FlavorDimensions, Ingredient};
pub use recipe::{Method, Recipe, RecipeComponent, Role, Served};
