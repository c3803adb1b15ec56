//! Unified logging system

use colored::*;
use rand::RngExt;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
   ______           __            _ __   ______           __
  / ____/___  _____/ /__/ /_____ (_) /  / ____/___  _____/ /____  _  __
 / /   / __ \/ ___/ //_/ __/ __ `/ / / / /   / __ \/ ___/ __/ _ \| |/_/
/ /___/ /_/ / /__/ ,< / /_/ /_/ / / / / /___/ /_/ / /  / /_/  __/>  <
\____/\____/\___/_/|_|\__/\__,_/_/_/  \____/\____/_/   \__/\___/_/|_|  "#;

const SLOGANS: &[&str] = &[
	"Stirred, not projected",
	"Cosine distance, served up",
	"A Manhattan is just a rotated Rob Roy",
	"Two dashes of linear algebra",
	"Shaken until the singular values settle",
	"Where bitters meet eigenvectors",
	"No garnish left behind (weight 0.03)",
	"Negroni, but make it orthogonal",
	"The Last Word in nearest neighbors",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::rng().random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	eprintln!("{}", LOGO.bright_magenta().bold());
	eprintln!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	eprintln!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	eprintln!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	eprintln!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		eprintln!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}

/// Distance colored from green (close) to red (far) within [min, max]
pub fn distance_gradient(value: f64, min: f64, max: f64) -> String {
	let span = max - min;
	let t = if span > 0.0 {
		((value - min) / span).clamp(0.0, 1.0)
	} else {
		0.0
	};

	let text = format!("{:.4}", value);
	if t < 0.33 {
		text.bright_green().to_string()
	} else if t < 0.66 {
		text.bright_yellow().to_string()
	} else {
		text.bright_red().to_string()
	}
}

/// Clickable file path (OSC 8 terminal hyperlink)
pub fn path_link(path: &std::path::Path, max_len: usize) -> String {
	let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

	let uri = if cfg!(windows) {
		let path_str = absolute.to_string_lossy();
		let cleaned = path_str.strip_prefix(r"\\?\").unwrap_or(&path_str);
		format!("file:///{}", cleaned.replace('\\', "/"))
	} else {
		format!("file://{}", absolute.display())
	};

	let filename = path
		.file_name()
		.and_then(|n| n.to_str())
		.unwrap_or("unknown");

	let display_name = if filename.chars().count() > max_len && max_len > 6 {
		let head: String = filename.chars().take(max_len / 2).collect();
		let tail_len = max_len / 2 - 3;
		let tail: String = filename
			.chars()
			.skip(filename.chars().count() - tail_len)
			.collect();
		format!("{}...{}", head, tail)
	} else {
		filename.to_string()
	};

	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", uri, display_name)
}
