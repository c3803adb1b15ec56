//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

// === Data Files ===
pub const DATA_DIR: &str = "data";
pub const DATA_DIR_ENV: &str = "COCKTAIL_DATA_DIR";
pub const INGREDIENTS_FILE: &str = "ingredients.json";
pub const RECIPES_FILE: &str = "recipes.json";

// === Flavor Blending ===
/// Fixed weight of a component with no known volume (dash, rinse)
pub const SEASONING_WEIGHT: f64 = 0.05;
/// Fixed weight of every garnish, never volume-weighted
pub const GARNISH_WEIGHT: f64 = 0.03;
/// Share of the element-wise max vector in the fixed-punch perceptual blend
pub const PUNCH_WEIGHT: f64 = 0.4;

// === Structural Distance ===
pub const METHOD_PENALTY: f64 = 0.15;
pub const SERVED_PENALTY: f64 = 0.15;
pub const SERVED_EITHER_PENALTY: f64 = 0.05;
pub const STRUCTURAL_DISTANCE_CAP: f64 = 1.0;

// === Distance Defaults ===
pub const DEFAULT_FLAVOR_WEIGHT: f64 = 0.5;
pub const DEFAULT_STRUCTURE_WEIGHT: f64 = 0.5;
pub const DEFAULT_TOP_K: usize = 5;

// === Sweeps ===
pub const ALPHA_STEPS: usize = 21;
pub const DEFAULT_ALPHA: f64 = 0.5;
pub const TAU_STEPS: usize = 25;
pub const TAU_LOG_MIN: f64 = -1.0;
pub const TAU_LOG_MAX: f64 = 2.5;
pub const DEFAULT_TAU: f64 = 1.0;

// === UMAP ===
pub const UMAP_NEIGHBORS: usize = 10;
pub const UMAP_COMPONENTS: usize = 2;
pub const INIT_RANGE: f32 = 10.0;
/// Fixed seed so repeated runs over one corpus give the same layouts
pub const UMAP_SEED: u64 = 42;
/// Frames on each side of a frame that pull on its initialization
pub const ALIGNMENT_WINDOW: usize = 1;
pub const ALIGNMENT_PASSES: usize = 2;
/// How far a refit frame's initialization is pulled toward its neighbors
pub const ALIGNMENT_PULL: f32 = 0.5;

pub fn set_data_dir(path: PathBuf) {
	let _ = CUSTOM_DATA_DIR.set(path);
}

/// Get data directory (--data flag, COCKTAIL_DATA_DIR, ./data, or next to executable)
pub fn data_dir() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_DATA_DIR.get() {
		crate::ui::debug(&format!("Using custom data dir: {}", custom.display()));
		return Some(custom.clone());
	}

	if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using {}: {}", DATA_DIR_ENV, env_path));
			return Some(path);
		}
	}

	let local = PathBuf::from(DATA_DIR);
	if local.join(INGREDIENTS_FILE).is_file() {
		crate::ui::debug(&format!("Found data at: {}", local.display()));
		return Some(local);
	}

	if let Ok(exe) = std::env::current_exe() {
		if let Some(dir) = exe.parent() {
			let data = dir.join(DATA_DIR);
			if data.is_dir() {
				crate::ui::debug(&format!("Found data at: {}", data.display()));
				return Some(data);
			}
		}
	}

	None
}
