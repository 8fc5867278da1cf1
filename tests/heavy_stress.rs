#![cfg(feature = "heavy")]

//! Large seeded instances: determinism and cheap sanity bounds.

use knapdp::presets::{knapsack_01, knapsack_unbounded};
use knapdp::{Engine, Item, Problem, Variant};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_instance(seed: u64, n: usize) -> (Vec<i64>, Vec<i64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights = (0..n).map(|_| rng.gen_range(1..=50)).collect();
    let values = (0..n).map(|_| rng.gen_range(0..=100)).collect();
    (weights, values)
}

#[test]
fn heavy_knapsack_is_deterministic_and_bounded() {
    let (weights, values) = random_instance(42, 2_000);
    let cap = 5_000;
    let a = knapsack_01(&weights, &values, cap).unwrap();
    let b = knapsack_01(&weights, &values, cap).unwrap();
    assert_eq!(a, b);
    let total: i64 = values.iter().sum();
    assert!(a <= total);
    assert!(a >= 0);
    assert!(knapsack_unbounded(&weights, &values, cap).unwrap() >= a);
}

#[test]
fn heavy_two_axis_fold_completes() {
    let mut rng = StdRng::seed_from_u64(7);
    let items: Vec<Item> = (0..600)
        .map(|_| {
            Item::valued(
                vec![rng.gen_range(0..=40), rng.gen_range(0..=40)],
                rng.gen_range(0..=30),
            )
        })
        .collect();
    let engine = Engine::new(Problem::new(items, vec![200, 200], Variant::Max)).unwrap();
    let best = engine.run().best().unwrap();
    assert!(best >= 0);
}
