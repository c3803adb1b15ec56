// Shared in-memory corpus for integration tests

#![allow(dead_code)]

use cocktail_cortex::core::{
    DataContext, FlavorDimensions, Ingredient, Method, Recipe, RecipeComponent, Role, Served,
};

pub const EPS: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

pub fn assert_vec_eq(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(approx_eq(*a, *e), "component {}: {} != {}", i, a, e);
    }
}

fn path(p: &str) -> Vec<String> {
    p.split('|').map(String::from).collect()
}

/// Dimensions: sweet, sour, bitter, boozy
pub fn ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::new("rye", path("spirit|whiskey|rye"), 45.0, vec![2.0, 0.0, 1.0, 8.0]),
        Ingredient::new("bourbon", path("spirit|whiskey|bourbon"), 45.0, vec![4.0, 0.0, 0.5, 8.0]),
        Ingredient::new("gin", path("spirit|gin|london_dry"), 42.0, vec![0.5, 0.5, 2.0, 8.0]),
        Ingredient::new("white_rum", path("spirit|rum|white"), 40.0, vec![3.0, 0.0, 0.0, 7.0]),
        Ingredient::new("sweet_vermouth", path("fortified|vermouth|sweet"), 16.0, vec![6.0, 1.0, 3.0, 2.0]),
        Ingredient::new("campari", path("liqueur|amaro|aperitivo"), 24.0, vec![5.0, 0.0, 9.0, 3.0]),
        Ingredient::new("lime_juice", path("juice|citrus|lime"), 0.0, vec![0.5, 9.0, 1.0, 0.0]),
        Ingredient::new("simple_syrup", path("sweetener|syrup|simple"), 0.0, vec![9.0, 0.0, 0.0, 0.0]),
        Ingredient::new("angostura", path("bitters|aromatic|angostura"), 44.0, vec![1.0, 0.0, 9.0, 4.0]),
        Ingredient::new("cherry", path("garnish|fruit|cherry"), 0.0, vec![6.0, 1.0, 0.0, 0.0]),
        Ingredient::new("water", path("mixer|water"), 0.0, vec![0.0, 0.0, 0.0, 0.0]),
    ]
}

fn c(ingredient: &str, role: Role, ml: Option<f64>) -> RecipeComponent {
    RecipeComponent::new(ingredient, role, ml)
}

fn garnish(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "manhattan",
            Method::Stirred,
            Served::Up,
            vec![
                c("rye", Role::Base, Some(60.0)),
                c("sweet_vermouth", Role::Modifier, Some(30.0)),
                c("angostura", Role::Seasoning, None),
            ],
            garnish(&["cherry"]),
        ),
        Recipe::new(
            "bourbon_manhattan",
            Method::Stirred,
            Served::Up,
            vec![
                c("bourbon", Role::Base, Some(60.0)),
                c("sweet_vermouth", Role::Modifier, Some(30.0)),
                c("angostura", Role::Seasoning, None),
            ],
            garnish(&["cherry"]),
        ),
        Recipe::new(
            "negroni",
            Method::Stirred,
            Served::OnIce,
            vec![
                c("gin", Role::Base, Some(30.0)),
                c("sweet_vermouth", Role::Modifier, Some(30.0)),
                c("campari", Role::Modifier, Some(30.0)),
            ],
            Vec::new(),
        ),
        Recipe::new(
            "daiquiri",
            Method::Shaken,
            Served::Up,
            vec![
                c("white_rum", Role::Base, Some(60.0)),
                c("lime_juice", Role::Citrus, Some(25.0)),
                c("simple_syrup", Role::Sweetener, Some(15.0)),
            ],
            Vec::new(),
        ),
        Recipe::new(
            "rye_on_ice",
            Method::Built,
            Served::OnIce,
            vec![c("rye", Role::Base, Some(60.0))],
            Vec::new(),
        ),
        Recipe::new(
            "bourbon_on_ice",
            Method::Built,
            Served::OnIce,
            vec![c("bourbon", Role::Base, Some(60.0))],
            Vec::new(),
        ),
        Recipe::new(
            "gin_and_rye",
            Method::Stirred,
            Served::Either,
            vec![
                c("rye", Role::Base, Some(30.0)),
                c("gin", Role::Base, Some(30.0)),
                c("mystery_liqueur", Role::Accent, Some(5.0)),
            ],
            Vec::new(),
        ),
    ]
}

pub fn context() -> DataContext {
    DataContext::new(
        FlavorDimensions::new(["sweet", "sour", "bitter", "boozy"]),
        ingredients(),
        recipes(),
    )
    .expect("fixture corpus is valid")
}

pub fn flavor(ctx: &DataContext, name: &str) -> Vec<f64> {
    ctx.ingredient(name).expect("fixture ingredient").flavor.clone()
}
