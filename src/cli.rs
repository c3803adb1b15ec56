use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{
	ALPHA_STEPS, DEFAULT_ALPHA, DEFAULT_FLAVOR_WEIGHT, DEFAULT_STRUCTURE_WEIGHT, DEFAULT_TAU,
	DEFAULT_TOP_K, TAU_STEPS, UMAP_NEIGHBORS,
};
use crate::vectorize::Strategy;

/// Vectorization used for neighbor queries
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum StrategyKind {
	/// Volume-weighted flavor blend
	#[default]
	Blend,
	/// Unit flavor and unit structure mixed by --alpha
	BlendStruct,
	/// Flavor profile per role slot
	RoleSlot,
	/// Fixed-punch perceptual blend
	Perceptual,
	/// Softmax perceptual blend sharpened by --tau
	Softmax,
}

impl StrategyKind {
	pub fn strategy(self, alpha: f64, tau: f64) -> Strategy {
		match self {
			StrategyKind::Blend => Strategy::Blend,
			StrategyKind::BlendStruct => Strategy::BlendStruct { alpha },
			StrategyKind::RoleSlot => Strategy::RoleSlot,
			StrategyKind::Perceptual => Strategy::Perceptual,
			StrategyKind::Softmax => Strategy::Softmax { tau },
		}
	}
}

fn parse_unit(s: &str) -> Result<f64, String> {
	let val: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if !(0.0..=1.0).contains(&val) {
		Err(format!("value must be between 0.0 and 1.0, got {}", val))
	} else {
		Ok(val)
	}
}

fn parse_non_negative(s: &str) -> Result<f64, String> {
	let val: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if !val.is_finite() || val < 0.0 {
		Err(format!("value must be a non-negative number, got {}", val))
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	let blue = Some(Color::Ansi(AnsiColor::Blue));
	Styles::styled()
		.header(Style::new().bold().fg_color(blue))
		.usage(Style::new().bold().fg_color(blue))
		.literal(Style::new().fg_color(blue))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(blue))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "cocktail-cortex",
	author,
	version,
	about = "Flavor and structure similarity for cocktail recipes",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {inspect}    {inspect_args}           {inspect_desc}
  {bin} {distance}   {distance_args}  {distance_desc}
  {bin} {neighbors}  {neighbors_args}  {neighbors_desc}
  {bin} {embed}      {embed_args}      {embed_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "cocktail-cortex".bright_blue(),
		inspect = "inspect".yellow(),
		inspect_args = "manhattan",
		inspect_desc = "Show proportions and structure".dimmed(),
		distance = "distance".yellow(),
		distance_args = "manhattan martinez",
		distance_desc = "Recipe distance breakdown".dimmed(),
		neighbors = "neighbors".yellow(),
		neighbors_args = "negroni -s softmax",
		neighbors_desc = "Closest recipes under a strategy".dimmed(),
		embed = "embed".yellow(),
		embed_args = "-e out.json",
		embed_desc = "Run every projection and export".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Data directory holding ingredients.json and recipes.json
	#[arg(short = 'D', long = "data", global = true, value_name = "DIR")]
	pub data: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Show volume proportions, structure and metadata of recipes
	Inspect {
		/// Recipe names
		#[arg(value_name = "RECIPE", required = true)]
		recipes: Vec<String>,
	},

	/// Distance between two recipes (or two ingredients with --ingredients)
	Distance {
		#[arg(value_name = "A")]
		a: String,

		#[arg(value_name = "B")]
		b: String,

		/// Compare ingredients instead of recipes
		#[arg(short = 'i', long = "ingredients")]
		ingredients: bool,

		/// Weight of the flavor distance
		#[arg(short = 'a', long = "alpha", default_value_t = DEFAULT_FLAVOR_WEIGHT, value_parser = parse_non_negative)]
		alpha: f64,

		/// Weight of the structural distance
		#[arg(short = 'b', long = "beta", default_value_t = DEFAULT_STRUCTURE_WEIGHT, value_parser = parse_non_negative)]
		beta: f64,
	},

	/// Full recipe distance matrix
	Matrix {
		/// Weight of the flavor distance
		#[arg(short = 'a', long = "alpha", default_value_t = DEFAULT_FLAVOR_WEIGHT, value_parser = parse_non_negative)]
		alpha: f64,

		/// Weight of the structural distance
		#[arg(short = 'b', long = "beta", default_value_t = DEFAULT_STRUCTURE_WEIGHT, value_parser = parse_non_negative)]
		beta: f64,
	},

	/// Nearest recipes under a vectorization strategy
	Neighbors {
		/// Only show neighbors of this recipe
		#[arg(value_name = "RECIPE")]
		recipe: Option<String>,

		/// Vectorization strategy
		#[arg(short = 's', long = "strategy", default_value = "blend")]
		strategy: StrategyKind,

		/// Taste vs structure mix for blend-struct (1.0 = taste only)
		#[arg(short = 'a', long = "alpha", default_value_t = DEFAULT_ALPHA, value_parser = parse_unit)]
		alpha: f64,

		/// Sharpness for softmax (low = most intense ingredient dominates)
		#[arg(short = 't', long = "tau", default_value_t = DEFAULT_TAU)]
		tau: f64,

		/// Number of neighbors
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_TOP_K)]
		top_k: usize,

		/// Export neighbor lists as JSON ("-" for stdout)
		#[arg(short = 'e', long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// Project every strategy, the alpha sweep and the tau sweep to 2-D
	Embed {
		/// Number of alpha steps between pure structure and pure taste
		#[arg(long = "alpha-steps", default_value_t = ALPHA_STEPS)]
		alpha_steps: usize,

		/// Number of log-spaced tau steps
		#[arg(long = "tau-steps", default_value_t = TAU_STEPS)]
		tau_steps: usize,

		/// UMAP neighborhood size
		#[arg(long = "umap-neighbors", default_value_t = UMAP_NEIGHBORS)]
		umap_neighbors: usize,

		/// Neighbors listed per recipe in each view
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_TOP_K)]
		top_k: usize,

		/// Output file ("-" for stdout)
		#[arg(short = 'e', long = "export", value_name = "PATH", default_value = "embeddings.json")]
		export: PathBuf,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
