//! Coin-change-shaped presets: unbounded items, exact-amount targets.

use crate::error::SolveError;
use crate::item::Item;
use crate::solver::{Engine, Problem, Variant};

fn coin_items(coins: &[i64]) -> Vec<Item> {
    coins
        .iter()
        .map(|&c| Item::valued(vec![c], 1).reusable())
        .collect()
}

/// Fewest coins summing to exactly `amount`; `None` if no combination does.
pub fn coin_change_min(coins: &[i64], amount: i64) -> Result<Option<i64>, SolveError> {
    let engine = Engine::new(Problem::new(
        coin_items(coins),
        vec![amount],
        Variant::MinCost,
    ))?;
    Ok(engine.run().cost())
}

/// Number of coin multisets summing to exactly `amount` (order ignored).
pub fn coin_change_ways(coins: &[i64], amount: i64) -> Result<u64, SolveError> {
    let engine = Engine::new(Problem::new(
        coin_items(coins),
        vec![amount],
        Variant::CountCombinations { modulus: None },
    ))?;
    Ok(engine.run().count().unwrap_or(0))
}

/// Number of *sequences* of the given numbers summing to exactly `target`
/// (combination-sum style: orderings count separately).
pub fn sequence_count(nums: &[i64], target: i64) -> Result<u64, SolveError> {
    let items = nums
        .iter()
        .map(|&n| Item::valued(vec![n], 0).reusable())
        .collect();
    let engine = Engine::new(Problem::new(
        items,
        vec![target],
        Variant::CountPermutations { modulus: None },
    ))?;
    Ok(engine.run().count().unwrap_or(0))
}
