//! Distance and matrix commands

use anyhow::{bail, Context, Result};
use colored::*;

use crate::core::DataContext;
use crate::processing::{
	category_distance, ingredient_flavor_distance, recipe_distance_matrix, recipe_distance_parts,
};
use crate::ui;

pub fn run(ctx: &DataContext, a: &str, b: &str, ingredients: bool, alpha: f64, beta: f64) -> Result<()> {
	if ingredients {
		return run_ingredients(ctx, a, b);
	}

	let ra = ctx.recipe(a).with_context(|| format!("Unknown recipe '{}'", a))?;
	let rb = ctx.recipe(b).with_context(|| format!("Unknown recipe '{}'", b))?;

	let parts = recipe_distance_parts(ctx, ra, rb);
	ui::header(&format!("{} <-> {}", ra.name, rb.name));
	println!("  {:18} {:.4}", "flavor".dimmed(), parts.flavor);
	println!("  {:18} {:.4}", "method penalty".dimmed(), parts.method_penalty);
	println!("  {:18} {:.4}", "served penalty".dimmed(), parts.served_penalty);
	println!("  {:18} {:.4}", "role distance".dimmed(), parts.role);
	println!("  {:18} {:.4}", "structural".dimmed(), parts.structural);
	println!(
		"  {:18} {}",
		format!("total (a={}, b={})", alpha, beta).bright_white(),
		format!("{:.4}", parts.combined(alpha, beta)).bright_cyan().bold()
	);

	Ok(())
}

fn run_ingredients(ctx: &DataContext, a: &str, b: &str) -> Result<()> {
	for name in [a, b] {
		if ctx.ingredient(name).is_none() {
			ui::warn(&format!("'{}' is not in the ingredient corpus, using zero flavor", name));
		}
	}

	ui::header(&format!("{} <-> {}", a, b));
	println!(
		"  {:10} {:.4}",
		"flavor".dimmed(),
		ingredient_flavor_distance(ctx, a, b)
	);
	println!("  {:10} {}", "category".dimmed(), category_distance(ctx, a, b));
	Ok(())
}

pub fn run_matrix(ctx: &DataContext, alpha: f64, beta: f64) -> Result<()> {
	let names = ctx.recipe_names();
	if names.is_empty() {
		bail!("No recipes loaded");
	}

	let matrix = recipe_distance_matrix(ctx, alpha, beta);
	let (min, max) = matrix
		.iter()
		.filter(|d| **d > 0.0)
		.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &d| (lo.min(d), hi.max(d)));

	let short: Vec<String> = names.iter().map(|n| n.chars().take(10).collect()).collect();
	print!("{:22} ", "");
	for s in &short {
		print!("{:>10} ", s.bright_blue());
	}
	println!();

	for (i, name) in names.iter().enumerate() {
		print!("{:22} ", name.bright_white());
		for j in 0..names.len() {
			let cell = ui::distance_gradient(matrix[[i, j]], min, max);
			print!("{:>10} ", cell);
		}
		println!();
	}

	ui::debug(&format!("alpha={}, beta={}", alpha, beta));
	Ok(())
}
