//! Multi-view embedding run: alpha sweep, tau sweep and standalone strategies

use anyhow::{bail, Context, Result};

use crate::config::{ALPHA_STEPS, DEFAULT_TOP_K, TAU_STEPS};
use crate::core::DataContext;
use crate::processing::align::Procrustes;
use crate::processing::reducer::{AlignedReducer, Reducer};
use crate::processing::sweep::{alpha_sweep, alpha_values, project_strategy, tau_sweep, tau_values, Frame};
use crate::ui;
use crate::vectorize::Strategy;

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
	pub alpha_steps: usize,
	pub tau_steps: usize,
	pub top_k: usize,
}

impl Default for PipelineOptions {
	fn default() -> Self {
		Self {
			alpha_steps: ALPHA_STEPS,
			tau_steps: TAU_STEPS,
			top_k: DEFAULT_TOP_K,
		}
	}
}

/// Every projected view of one corpus, all in a shared orientation
#[derive(Debug, Clone)]
pub struct MultiView {
	pub names: Vec<String>,
	/// Blend, role-slot and perceptual projections
	pub standalone: Vec<Frame>,
	pub alpha: Vec<Frame>,
	pub tau: Vec<Frame>,
}

impl MultiView {
	pub fn frames(&self) -> impl Iterator<Item = &Frame> {
		self.standalone.iter().chain(&self.alpha).chain(&self.tau)
	}
}

/// Run every view; any reducer failure aborts the whole run.
///
/// Standalone views are rotated onto the pure-taste alpha frame. The tau
/// frames share one transform, fitted from the largest tau (which converges
/// to the plain blend) onto the blend view.
pub fn run<R, A>(
	ctx: &DataContext,
	options: &PipelineOptions,
	reducer: &R,
	aligned: &A,
) -> Result<MultiView>
where
	R: Reducer + ?Sized,
	A: AlignedReducer + ?Sized,
{
	if ctx.recipes().is_empty() {
		bail!("No recipes to embed");
	}

	let alpha = alpha_sweep(ctx, &alpha_values(options.alpha_steps), aligned, options.top_k)?;
	let anchor = alpha
		.last()
		.map(|f| f.coords.clone())
		.context("Alpha sweep produced no frames")?;

	ui::info("Projecting standalone strategies");
	let mut standalone = Vec::new();
	for strategy in [Strategy::Blend, Strategy::RoleSlot, Strategy::Perceptual] {
		let mut frame = project_strategy(ctx, strategy, reducer, options.top_k)?;
		let procrustes = Procrustes::fit(&frame.coords, &anchor)
			.with_context(|| format!("Could not align {}", strategy.label()))?;
		frame.transform(&procrustes)?;
		standalone.push(frame);
	}

	let mut tau = tau_sweep(ctx, &tau_values(options.tau_steps), reducer, options.top_k)?;
	if let (Some(widest), Some(blend)) = (tau.last(), standalone.first()) {
		let procrustes = Procrustes::fit(&widest.coords, &blend.coords)
			.context("Could not align the tau sweep onto the blend view")?;
		for frame in &mut tau {
			frame.transform(&procrustes)?;
		}
	}

	ui::success(&format!(
		"Embedded {} recipes in {} views",
		ctx.recipes().len(),
		standalone.len() + alpha.len() + tau.len()
	));

	Ok(MultiView {
		names: ctx.recipe_names(),
		standalone,
		alpha,
		tau,
	})
}
