//! Example: 0/1 knapsack through the generalized engine.
//!
//! Run with:
//! `cargo run --example knapsack`

use knapdp::{Engine, Item, Problem, Variant};

fn main() {
    let weights = [1i64, 2, 3, 5, 7];
    let values = [20i64, 30, 40, 55, 70];
    let capacity = 10;

    let items: Vec<Item> = weights
        .iter()
        .zip(&values)
        .map(|(&w, &v)| Item::valued(vec![w], v))
        .collect();

    let engine = Engine::new(Problem::new(items, vec![capacity], Variant::Max))
        .expect("well-formed instance");
    let answer = engine.run();

    println!("capacity: {capacity}");
    println!("best value: {:?}", answer.best());
}
