//! Role-volume and serving-style features

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{Recipe, Role, Served};

pub const STRUCTURAL_WIDTH: usize = 7;

/// Role after collapsing labels that play the same structural part.
///
/// Sweet vermouth as a modifier and sugar as a sweetener both land in
/// `Modifying`, so templates that differ only in that label compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleGroup {
	Base,
	Modifying,
	Citrus,
	Accent,
}

impl RoleGroup {
	/// Slot order used by the structural and role-slot vectors
	pub const ALL: [RoleGroup; 4] = [
		RoleGroup::Base,
		RoleGroup::Modifying,
		RoleGroup::Citrus,
		RoleGroup::Accent,
	];

	/// Group of a role; seasonings have none
	pub fn of(role: Role) -> Option<Self> {
		match role {
			Role::Base => Some(RoleGroup::Base),
			Role::Modifier | Role::Sweetener => Some(RoleGroup::Modifying),
			Role::Citrus => Some(RoleGroup::Citrus),
			Role::Accent => Some(RoleGroup::Accent),
			Role::Seasoning => None,
		}
	}

	pub fn index(&self) -> usize {
		match self {
			RoleGroup::Base => 0,
			RoleGroup::Modifying => 1,
			RoleGroup::Citrus => 2,
			RoleGroup::Accent => 3,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			RoleGroup::Base => "base",
			RoleGroup::Modifying => "modifying",
			RoleGroup::Citrus => "citrus",
			RoleGroup::Accent => "accent",
		}
	}
}

/// Volume share per role group, over groups present with a known volume
pub fn grouped_role_proportions(recipe: &Recipe) -> BTreeMap<RoleGroup, f64> {
	let total_ml = recipe.total_ml();
	let mut grouped = BTreeMap::new();
	if total_ml <= 0.0 {
		return grouped;
	}

	for component in &recipe.components {
		if let (Some(ml), Some(group)) = (component.ml, RoleGroup::of(component.role)) {
			*grouped.entry(group).or_insert(0.0) += ml / total_ml;
		}
	}

	grouped
}

/// `[base, modifying, citrus, accent, has_seasoning, is_up, is_on_ice]`
pub fn structural_vector(recipe: &Recipe) -> [f64; STRUCTURAL_WIDTH] {
	let total_ml = recipe.total_ml();
	let mut features = [0.0; STRUCTURAL_WIDTH];

	for (group, share) in grouped_role_proportions(recipe) {
		features[group.index()] = share;
	}

	let has_seasoning = recipe
		.components
		.iter()
		.any(|c| c.role == Role::Seasoning || c.is_seasoning() || total_ml <= 0.0);

	features[4] = if has_seasoning { 1.0 } else { 0.0 };
	features[5] = if recipe.served == Served::Up { 1.0 } else { 0.0 };
	features[6] = if recipe.served == Served::OnIce { 1.0 } else { 0.0 };

	features
}
