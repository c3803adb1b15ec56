//! # User Interface
//!
//! Colored terminal output for tables, progress and file links.

pub mod log;

pub use log::{debug, distance_gradient, error, header, info, path_link, print_logo, success, warn, Log};
