//! Derived recipe metadata: base spirit and family
//!
//! Family assignment is a prioritized rule table; the first matching rule wins.

use crate::core::{DataContext, Recipe, Role, Served};

pub const FALLBACK_FAMILY: &str = "other";
const UNKNOWN_SPIRIT: &str = "other";
const MIXED_SPIRITS: &str = "mixed";

pub struct FamilyRule {
	pub family: &'static str,
	pub applies: fn(&Recipe) -> bool,
}

fn has_citrus(recipe: &Recipe) -> bool {
	recipe.has_role(Role::Citrus)
}

fn has_modifying(recipe: &Recipe) -> bool {
	recipe.has_role(Role::Modifier) || recipe.has_role(Role::Sweetener)
}

fn is_built(recipe: &Recipe) -> bool {
	recipe.served == Served::OnIce && !has_modifying(recipe)
}

/// Rules in priority order
pub const FAMILY_RULES: &[FamilyRule] = &[
	FamilyRule {
		family: "sour",
		applies: has_citrus,
	},
	FamilyRule {
		family: "built",
		applies: is_built,
	},
	FamilyRule {
		family: "spirit_forward",
		applies: has_modifying,
	},
];

pub fn family(recipe: &Recipe) -> &'static str {
	FAMILY_RULES
		.iter()
		.find(|rule| (rule.applies)(recipe))
		.map_or(FALLBACK_FAMILY, |rule| rule.family)
}

/// Spirit type of the dominant base: a single spirit, "mixed", or the top
/// category of the largest non-spirit base
pub fn base_spirit(ctx: &DataContext, recipe: &Recipe) -> String {
	let mut bases: Vec<(&str, f64)> = recipe
		.components
		.iter()
		.filter(|c| c.role == Role::Base)
		.filter_map(|c| c.ml.map(|ml| (c.ingredient.as_str(), ml)))
		.collect();
	if bases.is_empty() {
		return UNKNOWN_SPIRIT.to_string();
	}

	bases.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

	let mut spirits: Vec<&str> = Vec::new();
	for (name, _) in &bases {
		let Some(ing) = ctx.ingredient(name) else {
			continue;
		};
		if ing.top_category() == Some("spirit") {
			if let Some(sub) = ing.sub_category() {
				if !spirits.contains(&sub) {
					spirits.push(sub);
				}
			}
		}
	}

	match spirits.as_slice() {
		[] => ctx
			.ingredient(bases[0].0)
			.and_then(|ing| ing.top_category())
			.unwrap_or(UNKNOWN_SPIRIT)
			.to_string(),
		[only] => only.to_string(),
		_ => MIXED_SPIRITS.to_string(),
	}
}
