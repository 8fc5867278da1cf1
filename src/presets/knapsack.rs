//! Knapsack-shaped presets: maximize value under one or two cost axes.

use crate::error::SolveError;
use crate::item::Item;
use crate::solver::{Engine, Problem, Variant};

/// Classic 0/1 knapsack: each item usable at most once.
pub fn knapsack_01(weights: &[i64], values: &[i64], capacity: i64) -> Result<i64, SolveError> {
    assert_eq!(weights.len(), values.len(), "weights/values length mismatch");
    let items = weights
        .iter()
        .zip(values)
        .map(|(&w, &v)| Item::valued(vec![w], v))
        .collect();
    let engine = Engine::new(Problem::new(items, vec![capacity], Variant::Max))?;
    Ok(engine.run().best().unwrap_or(0))
}

/// Unbounded knapsack: each item usable any number of times.
pub fn knapsack_unbounded(
    weights: &[i64],
    values: &[i64],
    capacity: i64,
) -> Result<i64, SolveError> {
    assert_eq!(weights.len(), values.len(), "weights/values length mismatch");
    let items = weights
        .iter()
        .zip(values)
        .map(|(&w, &v)| Item::valued(vec![w], v).reusable())
        .collect();
    let engine = Engine::new(Problem::new(items, vec![capacity], Variant::Max))?;
    Ok(engine.run().best().unwrap_or(0))
}

/// "Ones and zeroes": the largest number of strings formable with at most
/// `max_zeros` zeros and `max_ones` ones. Two cost axes, value 1 per string.
pub fn ones_and_zeroes(
    strs: &[&str],
    max_zeros: i64,
    max_ones: i64,
) -> Result<i64, SolveError> {
    let items = strs
        .iter()
        .map(|s| {
            let zeros = s.bytes().filter(|&b| b == b'0').count() as i64;
            let ones = s.len() as i64 - zeros;
            Item::valued(vec![zeros, ones], 1)
        })
        .collect();
    let engine = Engine::new(Problem::new(
        items,
        vec![max_zeros, max_ones],
        Variant::Max,
    ))?;
    Ok(engine.run().best().unwrap_or(0))
}
