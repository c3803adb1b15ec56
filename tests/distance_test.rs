// Ingredient and recipe distances

mod common;

use cocktail_cortex::core::{Method, Recipe, RecipeComponent, Role, Served};
use cocktail_cortex::processing::{
    category_distance, ingredient_flavor_distance, recipe_distance, recipe_distance_matrix,
    recipe_distance_parts,
};

use common::{approx_eq, context};

#[test]
fn test_ingredient_flavor_distance() {
    let ctx = context();

    assert!(ingredient_flavor_distance(&ctx, "rye", "rye").abs() < 1e-12);

    let d = ingredient_flavor_distance(&ctx, "rye", "lime_juice");
    assert!(d > 0.0 && d <= 2.0);
    assert!(approx_eq(d, ingredient_flavor_distance(&ctx, "lime_juice", "rye")));

    // Zero vectors, known or not, sit at exactly 1.0 from everything
    assert_eq!(ingredient_flavor_distance(&ctx, "water", "rye"), 1.0);
    assert_eq!(ingredient_flavor_distance(&ctx, "water", "water"), 1.0);
    assert_eq!(ingredient_flavor_distance(&ctx, "unobtainium", "rye"), 1.0);
}

#[test]
fn test_category_distance() {
    let ctx = context();

    assert_eq!(category_distance(&ctx, "rye", "rye"), 0);
    assert_eq!(category_distance(&ctx, "rye", "bourbon"), 2);
    assert_eq!(category_distance(&ctx, "rye", "gin"), 4);
    assert_eq!(category_distance(&ctx, "rye", "lime_juice"), 6);
    assert_eq!(category_distance(&ctx, "water", "rye"), 5);
    assert_eq!(category_distance(&ctx, "unobtainium", "rye"), 3);

    for (a, b) in [("rye", "gin"), ("water", "campari"), ("cherry", "unobtainium")] {
        assert_eq!(category_distance(&ctx, a, b), category_distance(&ctx, b, a));
    }
}

#[test]
fn test_recipe_self_distance_is_zero() {
    let ctx = context();
    for (alpha, beta) in [(0.5, 0.5), (1.0, 0.0), (0.0, 1.0), (2.0, 3.0), (0.3, 0.9)] {
        for recipe in ctx.recipes() {
            let d = recipe_distance(&ctx, recipe, recipe, alpha, beta);
            assert!(
                d.abs() < 1e-12,
                "{} self distance {} at ({}, {})",
                recipe.name,
                d,
                alpha,
                beta
            );
        }
    }
}

#[test]
fn test_spirit_swap_keeps_structure() {
    let ctx = context();

    let rye = ctx.recipe("rye_on_ice").unwrap();
    let bourbon = ctx.recipe("bourbon_on_ice").unwrap();
    let parts = recipe_distance_parts(&ctx, rye, bourbon);
    assert_eq!(parts.structural, 0.0);
    assert!(approx_eq(
        parts.flavor,
        ingredient_flavor_distance(&ctx, "rye", "bourbon")
    ));

    let manhattan = ctx.recipe("manhattan").unwrap();
    let bourbon_manhattan = ctx.recipe("bourbon_manhattan").unwrap();
    let parts = recipe_distance_parts(&ctx, manhattan, bourbon_manhattan);
    assert_eq!(parts.structural, 0.0);
    // Vermouth and bitters dilute the swapped spirit's share of the flavor
    let spirits = ingredient_flavor_distance(&ctx, "rye", "bourbon");
    assert!(parts.flavor > 0.0 && parts.flavor < spirits);
    assert!(approx_eq(
        recipe_distance(&ctx, manhattan, bourbon_manhattan, 0.7, 0.3),
        0.7 * parts.flavor
    ));
}

#[test]
fn test_method_and_served_penalties() {
    let ctx = context();
    let manhattan = ctx.recipe("manhattan").unwrap();

    let vs_daiquiri = recipe_distance_parts(&ctx, manhattan, ctx.recipe("daiquiri").unwrap());
    assert_eq!(vs_daiquiri.method_penalty, 0.15);
    assert_eq!(vs_daiquiri.served_penalty, 0.0);

    let vs_negroni = recipe_distance_parts(&ctx, manhattan, ctx.recipe("negroni").unwrap());
    assert_eq!(vs_negroni.method_penalty, 0.0);
    assert_eq!(vs_negroni.served_penalty, 0.15);

    let vs_either = recipe_distance_parts(&ctx, manhattan, ctx.recipe("gin_and_rye").unwrap());
    assert_eq!(vs_either.served_penalty, 0.05);
}

#[test]
fn test_structural_distance_is_capped() {
    let ctx = context();
    let lime_shot = Recipe::new(
        "lime_shot",
        Method::Shaken,
        Served::Up,
        vec![RecipeComponent::new("lime_juice", Role::Citrus, Some(30.0))],
        Vec::new(),
    );
    let rye = ctx.recipe("rye_on_ice").unwrap();

    let parts = recipe_distance_parts(&ctx, &lime_shot, rye);
    assert!(approx_eq(parts.role, 2f64.sqrt()));
    assert_eq!(parts.structural, 1.0);

    // Only the structural half is capped
    let d = recipe_distance(&ctx, &lime_shot, rye, 1.0, 1.0);
    assert!(approx_eq(d, parts.flavor + 1.0));
}

#[test]
fn test_weights_select_halves() {
    let ctx = context();
    let a = ctx.recipe("negroni").unwrap();
    let b = ctx.recipe("daiquiri").unwrap();
    let parts = recipe_distance_parts(&ctx, a, b);

    assert!(approx_eq(recipe_distance(&ctx, a, b, 1.0, 0.0), parts.flavor));
    assert!(approx_eq(recipe_distance(&ctx, a, b, 0.0, 1.0), parts.structural));
    assert!(approx_eq(
        recipe_distance(&ctx, a, b, 2.0, 3.0),
        2.0 * parts.flavor + 3.0 * parts.structural
    ));
}

#[test]
fn test_distance_matrix() {
    let ctx = context();
    let n = ctx.recipes().len();
    let matrix = recipe_distance_matrix(&ctx, 0.5, 0.5);

    assert_eq!(matrix.dim(), (n, n));
    for i in 0..n {
        assert!(matrix[[i, i]].abs() < 1e-12);
        for j in 0..n {
            assert!(approx_eq(matrix[[i, j]], matrix[[j, i]]));
            assert!(matrix[[i, j]] >= 0.0);
        }
    }

    let recipes = ctx.recipes();
    assert!(approx_eq(
        matrix[[0, 2]],
        recipe_distance(&ctx, &recipes[0], &recipes[2], 0.5, 0.5)
    ));
}
