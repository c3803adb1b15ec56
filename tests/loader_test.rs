// Corpus loading from JSON files

use std::fs;
use std::path::Path;

use cocktail_cortex::core::{Method, Role, Served};
use cocktail_cortex::storage::{load, parse_ingredients, parse_recipes};
use tempfile::TempDir;

const INGREDIENTS: &str = r#"{
    "flavor_dimensions": ["sweet", "sour", "bitter"],
    "ingredients": {
        "rye": {"category_path": ["spirit", "whiskey", "rye"], "abv": 45, "flavor": {"sweet": 2, "sour": 0, "bitter": 1}},
        "lime_juice": {"category_path": "juice|citrus|lime", "abv": 0, "flavor": {"sweet": 0.5, "sour": 9, "bitter": 1}},
        "simple_syrup": {"category_path": ["sweetener", "syrup"], "abv": 0, "flavor": {"sweet": 9, "sour": 0, "bitter": 0}}
    }
}"#;

const RECIPES: &str = r#"{
    "whiskey_sour": {
        "method": "shaken",
        "served": "on_ice",
        "components": [
            {"ingredient": "rye", "role": "base", "ml": 60},
            {"ingredient": "lime_juice", "role": "citrus", "ml": 30},
            {"ingredient": "simple_syrup", "role": "sweetener", "ml": 20},
            {"ingredient": "angostura", "role": "seasoning", "ml": null}
        ],
        "garnish": ["cherry"]
    },
    "rye_neat": {
        "method": "poured",
        "components": [{"ingredient": "rye", "role": "base", "ml": 60}]
    }
}"#;

fn write_corpus(dir: &Path, ingredients: &str, recipes: &str) {
    fs::write(dir.join("ingredients.json"), ingredients).unwrap();
    fs::write(dir.join("recipes.json"), recipes).unwrap();
}

#[test]
fn test_load_corpus() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path(), INGREDIENTS, RECIPES);

    let ctx = load(dir.path()).unwrap();
    assert_eq!(ctx.dimensions().names(), &["sweet", "sour", "bitter"]);
    assert_eq!(ctx.ingredient_count(), 3);

    // Sorted by name
    assert_eq!(ctx.recipe_names(), vec!["rye_neat", "whiskey_sour"]);

    let lime = ctx.ingredient("lime_juice").unwrap();
    assert_eq!(lime.category_path, vec!["juice", "citrus", "lime"]);
    assert_eq!(lime.flavor, vec![0.5, 9.0, 1.0]);

    let sour = ctx.recipe("whiskey_sour").unwrap();
    assert_eq!(sour.method, Method::Shaken);
    assert_eq!(sour.served, Served::OnIce);
    assert_eq!(sour.components[3].role, Role::Seasoning);
    assert_eq!(sour.components[3].ml, None);
    assert_eq!(sour.garnish, vec!["cherry"]);

    let neat = ctx.recipe("rye_neat").unwrap();
    assert_eq!(neat.method, Method::Other("poured".to_string()));
    assert_eq!(neat.served, Served::Either);
    assert!(neat.garnish.is_empty());
}

#[test]
fn test_missing_files() {
    let dir = TempDir::new().unwrap();
    assert!(load(dir.path()).is_err());

    fs::write(dir.path().join("ingredients.json"), INGREDIENTS).unwrap();
    assert!(load(dir.path()).is_err());
}

#[test]
fn test_rejects_bad_dimensions() {
    let missing = INGREDIENTS.replace(r#""sour": 9, "#, "");
    assert!(parse_ingredients(&missing).is_err());

    let unknown = INGREDIENTS.replace(r#""bitter": 0}"#, r#""bitter": 0, "umami": 1}"#);
    assert!(parse_ingredients(&unknown).is_err());

    let duplicate = INGREDIENTS.replace(r#"["sweet", "sour", "bitter"]"#, r#"["sweet", "sour", "sweet"]"#);
    assert!(parse_ingredients(&duplicate).is_err());

    let empty = r#"{"flavor_dimensions": [], "ingredients": {}}"#;
    assert!(parse_ingredients(empty).is_err());

    let negative_abv = INGREDIENTS.replace(r#""abv": 45"#, r#""abv": -1"#);
    assert!(parse_ingredients(&negative_abv).is_err());
}

#[test]
fn test_rejects_bad_recipes() {
    let unknown_role = RECIPES.replace(r#""role": "citrus""#, r#""role": "garnish""#);
    assert!(parse_recipes(&unknown_role).is_err());

    let negative = RECIPES.replace(r#""ml": 30"#, r#""ml": -30"#);
    assert!(parse_recipes(&negative).is_err());

    assert!(parse_recipes("[]").is_err());
    assert!(parse_recipes(RECIPES).is_ok());
}

#[test]
fn test_bundled_sample_loads() {
    let ctx = load(Path::new("data")).unwrap();
    assert!(ctx.recipes().len() >= 10);
    for recipe in ctx.recipes() {
        for component in &recipe.components {
            assert!(
                ctx.ingredient(&component.ingredient).is_some(),
                "{} references unknown {}",
                recipe.name,
                component.ingredient
            );
        }
    }
}
