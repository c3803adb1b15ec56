//! Per-role flavor profiles: base against base, modifier against modifier

use crate::config::{GARNISH_WEIGHT, SEASONING_WEIGHT};
use crate::core::vector::add_scaled;
use crate::core::{DataContext, Recipe};

use super::flavor::flavor_vector;
use super::structural::RoleGroup;

/// Concatenated volume-weighted flavor of each role slot, `4 * |dims|` wide.
///
/// Seasonings spread a small fixed share over every slot and garnishes
/// land in the accent slot. Empty slots stay zero.
pub fn role_slot_vector(ctx: &DataContext, recipe: &Recipe) -> Vec<f64> {
	let dims = ctx.dimensions().len();
	let slots = RoleGroup::ALL.len();
	let total_ml = recipe.total_ml();

	let mut slot_vecs = vec![vec![0.0; dims]; slots];
	let mut slot_ml = vec![0.0; slots];
	let mut seasoning = vec![0.0; dims];

	for component in &recipe.components {
		let fv = flavor_vector(ctx, &component.ingredient);
		match component.ml {
			Some(ml) if total_ml > 0.0 => {
				if let Some(group) = RoleGroup::of(component.role) {
					add_scaled(&mut slot_vecs[group.index()], &fv, ml);
					slot_ml[group.index()] += ml;
				}
			}
			_ => add_scaled(&mut seasoning, &fv, SEASONING_WEIGHT / slots as f64),
		}
	}

	for (vec, ml) in slot_vecs.iter_mut().zip(slot_ml.iter()) {
		if *ml > 0.0 {
			for v in vec.iter_mut() {
				*v /= ml;
			}
		}
	}

	for vec in &mut slot_vecs {
		add_scaled(vec, &seasoning, 1.0);
	}

	let accent = RoleGroup::Accent.index();
	for garnish in &recipe.garnish {
		let fv = flavor_vector(ctx, garnish);
		add_scaled(&mut slot_vecs[accent], &fv, GARNISH_WEIGHT);
	}

	slot_vecs.into_iter().flatten().collect()
}
