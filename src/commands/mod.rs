//! # Command Implementations
//!
//! Each submodule handles one CLI command (inspect, distance, neighbors, embed).

pub mod distance;
pub mod embed;
pub mod inspect;
pub mod neighbors;
