//! Inspect command - recipe proportions, structure and derived metadata

use anyhow::{Context, Result};
use colored::*;

use crate::core::DataContext;
use crate::processing::classify::{base_spirit, family};
use crate::ui;
use crate::vectorize::{structural_vector, RoleGroup};

pub fn run(ctx: &DataContext, names: &[String]) -> Result<()> {
	for name in names {
		let recipe = ctx
			.recipe(name)
			.with_context(|| format!("Unknown recipe '{}'", name))?;

		ui::header(&format!(
			"{} ({}, served {})",
			recipe.name.to_uppercase(),
			recipe.method,
			recipe.served
		));

		for (component, share) in recipe.components.iter().zip(recipe.proportions()) {
			let known = if ctx.ingredient(&component.ingredient).is_some() {
				component.ingredient.bright_white()
			} else {
				component.ingredient.bright_yellow()
			};
			match (component.ml, share) {
				(Some(ml), Some(share)) => println!(
					"  {:22}  {:10}  {:5.1}ml  ({:.1}%)",
					known,
					component.role.as_str(),
					ml,
					share * 100.0
				),
				_ => println!(
					"  {:22}  {:10}  {}",
					known,
					component.role.as_str(),
					"seasoning".dimmed()
				),
			}
		}

		if !recipe.garnish.is_empty() {
			println!("  {} {}", "garnish:".dimmed(), recipe.garnish.join(", "));
		}

		let features = structural_vector(recipe);
		let roles: Vec<String> = RoleGroup::ALL
			.iter()
			.map(|g| format!("{}={:.2}", g.as_str(), features[g.index()]))
			.collect();
		println!("  {} {}", "structure:".dimmed(), roles.join(" "));
		println!(
			"  {} {}  {} {}",
			"base spirit:".dimmed(),
			base_spirit(ctx, recipe).bright_cyan(),
			"family:".dimmed(),
			family(recipe).bright_cyan()
		);

		let missing: Vec<&str> = recipe
			.components
			.iter()
			.map(|c| c.ingredient.as_str())
			.chain(recipe.garnish.iter().map(String::as_str))
			.filter(|n| ctx.ingredient(n).is_none())
			.collect();
		if !missing.is_empty() {
			ui::warn(&format!(
				"Not in the ingredient corpus (zero flavor): {}",
				missing.join(", ")
			));
		}
	}

	Ok(())
}
