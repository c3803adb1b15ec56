//! # Cocktail Cortex Library
//!
//! Flavor and structure vectorization of cocktail recipes, recipe distances,
//! nearest neighbors and aligned 2-D projections across parameter sweeps.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod processing;
pub mod storage;
pub mod ui;
pub mod vectorize;
