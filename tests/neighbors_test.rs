// Cosine nearest neighbors

mod common;

use cocktail_cortex::processing::{nearest_neighbors, rank_neighbors};
use cocktail_cortex::vectorize::{vectorize_corpus, Strategy};

use common::context;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("r{}", i)).collect()
}

#[test]
fn test_neighbors_exclude_query_and_are_sorted() {
    let ctx = context();
    let names = ctx.recipe_names();
    let vectors = vectorize_corpus(&ctx, Strategy::Blend);

    let lists = nearest_neighbors(&names, &vectors, 3);
    assert_eq!(lists.len(), names.len());

    for (name, neighbors) in &lists {
        assert!(neighbors.len() <= 3);
        assert!(neighbors.iter().all(|n| &n.name != name));
        assert!(neighbors.windows(2).all(|w| w[0].distance <= w[1].distance));
    }
}

#[test]
fn test_spirit_swap_is_nearest() {
    let ctx = context();
    let vectors = vectorize_corpus(&ctx, Strategy::BlendStruct { alpha: 0.5 });
    let lists = nearest_neighbors(&ctx.recipe_names(), &vectors, 1);

    assert_eq!(lists["manhattan"][0].name, "bourbon_manhattan");
    assert_eq!(lists["rye_on_ice"][0].name, "bourbon_on_ice");
}

#[test]
fn test_top_k_larger_than_corpus() {
    let vectors = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]];
    let lists = nearest_neighbors(&names(3), &vectors, 10);
    assert!(lists.values().all(|l| l.len() == 2));
}

#[test]
fn test_ties_keep_corpus_order() {
    let vectors = vec![
        vec![1.0, 0.0],
        vec![2.0, 0.0],
        vec![3.0, 0.0],
        vec![0.0, 1.0],
    ];

    let ranked = rank_neighbors(&vectors, 1, 3);
    let order: Vec<usize> = ranked.iter().map(|(j, _)| *j).collect();
    assert_eq!(order, vec![0, 2, 3]);
    assert!(ranked[0].1.abs() < 1e-12);
    assert!((ranked[2].1 - 1.0).abs() < 1e-12);
}

#[test]
fn test_single_item_has_no_neighbors() {
    let lists = nearest_neighbors(&names(1), &[vec![1.0, 2.0]], 5);
    assert!(lists["r0"].is_empty());
}
