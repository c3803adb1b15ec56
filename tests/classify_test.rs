// Base spirit and family metadata

mod common;

use cocktail_cortex::core::{Method, Recipe, RecipeComponent, Role, Served};
use cocktail_cortex::processing::classify::{base_spirit, family, FALLBACK_FAMILY};

use common::context;

fn recipe(served: Served, components: Vec<RecipeComponent>) -> Recipe {
    Recipe::new("test", Method::Stirred, served, components, Vec::new())
}

#[test]
fn test_family_rules_in_priority_order() {
    let ctx = context();

    assert_eq!(family(ctx.recipe("daiquiri").unwrap()), "sour");
    assert_eq!(family(ctx.recipe("manhattan").unwrap()), "spirit_forward");
    assert_eq!(family(ctx.recipe("negroni").unwrap()), "spirit_forward");
    assert_eq!(family(ctx.recipe("rye_on_ice").unwrap()), "built");
    assert_eq!(family(ctx.recipe("gin_and_rye").unwrap()), FALLBACK_FAMILY);

    // Citrus wins over everything else
    let iced_sour = recipe(
        Served::OnIce,
        vec![
            RecipeComponent::new("rye", Role::Base, Some(60.0)),
            RecipeComponent::new("lime_juice", Role::Citrus, Some(20.0)),
        ],
    );
    assert_eq!(family(&iced_sour), "sour");
}

#[test]
fn test_base_spirit() {
    let ctx = context();

    assert_eq!(base_spirit(&ctx, ctx.recipe("manhattan").unwrap()), "whiskey");
    assert_eq!(base_spirit(&ctx, ctx.recipe("negroni").unwrap()), "gin");
    assert_eq!(base_spirit(&ctx, ctx.recipe("daiquiri").unwrap()), "rum");
    assert_eq!(base_spirit(&ctx, ctx.recipe("gin_and_rye").unwrap()), "mixed");
}

#[test]
fn test_base_spirit_fallbacks() {
    let ctx = context();

    let no_base = recipe(
        Served::Up,
        vec![RecipeComponent::new("sweet_vermouth", Role::Modifier, Some(60.0))],
    );
    assert_eq!(base_spirit(&ctx, &no_base), "other");

    let vermouth_base = recipe(
        Served::Up,
        vec![RecipeComponent::new("sweet_vermouth", Role::Base, Some(60.0))],
    );
    assert_eq!(base_spirit(&ctx, &vermouth_base), "fortified");

    let unknown_base = recipe(
        Served::Up,
        vec![RecipeComponent::new("unobtainium", Role::Base, Some(60.0))],
    );
    assert_eq!(base_spirit(&ctx, &unknown_base), "other");

    // Two whiskeys are still one spirit type
    let whiskeys = recipe(
        Served::Up,
        vec![
            RecipeComponent::new("rye", Role::Base, Some(30.0)),
            RecipeComponent::new("bourbon", Role::Base, Some(30.0)),
        ],
    );
    assert_eq!(base_spirit(&ctx, &whiskeys), "whiskey");
}
