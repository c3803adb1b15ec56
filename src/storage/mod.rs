//! Corpus loading and result export

pub mod export;
pub mod loader;

pub use export::{build_document, write_json, EmbeddingDocument};
pub use loader::{load, parse_ingredients, parse_recipes};
