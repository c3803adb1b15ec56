//! Cocktail Cortex - flavor and structure similarity for cocktail recipes

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use cocktail_cortex::cli::{Cli, Command};
use cocktail_cortex::commands;
use cocktail_cortex::config;
use cocktail_cortex::core::DataContext;
use cocktail_cortex::processing::pipeline::PipelineOptions;
use cocktail_cortex::storage;
use cocktail_cortex::ui::{self, Log};

fn main() -> Result<()> {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);
	if let Some(dir) = cli.data {
		config::set_data_dir(dir);
	}

	match cli.command {
		Command::Inspect { recipes } => commands::inspect::run(&load_context()?, &recipes),
		Command::Distance {
			a,
			b,
			ingredients,
			alpha,
			beta,
		} => commands::distance::run(&load_context()?, &a, &b, ingredients, alpha, beta),
		Command::Matrix { alpha, beta } => {
			commands::distance::run_matrix(&load_context()?, alpha, beta)
		}
		Command::Neighbors {
			recipe,
			strategy,
			alpha,
			tau,
			top_k,
			export,
		} => commands::neighbors::run(
			&load_context()?,
			recipe.as_deref(),
			strategy.strategy(alpha, tau),
			top_k,
			export.as_deref(),
		),
		Command::Embed {
			alpha_steps,
			tau_steps,
			umap_neighbors,
			top_k,
			export,
		} => {
			ui::print_logo();
			let options = PipelineOptions {
				alpha_steps,
				tau_steps,
				top_k,
			};
			commands::embed::run(&load_context()?, options, umap_neighbors, &export)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					ui::error(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}

fn load_context() -> Result<DataContext> {
	let dir = config::data_dir().with_context(|| {
		format!(
			"No data directory found. Pass --data or set {}",
			config::DATA_DIR_ENV
		)
	})?;
	storage::load(&dir)
}
