//! The dual-axis transform: value-indexed tables for extreme capacities.
//!
//! A 0/1 maximize-value instance with a huge capacity (say 10^9) and a small
//! total value cannot afford a capacity-indexed table, but the same instance
//! re-indexed by achievable value fits easily: the table axis becomes
//! `0..=Σvalue` and each cell holds the minimal cost required to realize that
//! value. The Optimum-max recurrence inverts into Optimum-min, and the answer
//! is a descending scan for the largest value whose minimal cost stays within
//! the capacity.

use crate::extract::scan_descending;
use crate::item::{Item, ItemWeight};
use crate::transition::{fold_all, MinCost};

/// Capacity at which the value-indexed form starts being considered.
pub const DUAL_AXIS_CAPACITY_CUTOFF: i64 = 1 << 20;

/// The value range must be at most `capacity / DUAL_AXIS_VALUE_RATIO` for the
/// swap to be worthwhile ("materially smaller").
pub const DUAL_AXIS_VALUE_RATIO: i64 = 64;

/// Whether a maximize-value solve should run capacity-indexed or
/// value-indexed. The extractor must know which axis it is reading, so the
/// plan is decided once, up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DualAxisPlan {
    /// Plain capacity-indexed table.
    Direct,
    /// Value-indexed table over `0..=value_sum`, cells hold minimal cost.
    ValueIndexed { value_sum: i64 },
}

/// Decide the plan for a single-axis maximize-value instance.
///
/// The transform applies only when every item is use-once (reuse makes the
/// achievable-value range unbounded), the capacity is past the cutoff, and
/// the total value is materially smaller than the capacity. Anything else
/// falls back to the direct table.
pub fn plan(items: &[Item], capacity: &[i64]) -> DualAxisPlan {
    if capacity.len() != 1 {
        return DualAxisPlan::Direct;
    }
    let cap = capacity[0];
    if cap < DUAL_AXIS_CAPACITY_CUTOFF {
        return DualAxisPlan::Direct;
    }
    let mut value_sum: i64 = 0;
    for item in items {
        if item.reusable {
            return DualAxisPlan::Direct;
        }
        match item.weight {
            ItemWeight::Value(v) => value_sum = value_sum.saturating_add(v),
            ItemWeight::Probability(_) => return DualAxisPlan::Direct,
        }
    }
    if value_sum <= cap / DUAL_AXIS_VALUE_RATIO {
        DualAxisPlan::ValueIndexed { value_sum }
    } else {
        DualAxisPlan::Direct
    }
}

/// Solve a single-axis 0/1 maximize-value instance via the value-indexed
/// table. `value_sum` must bound the achievable value (as computed by
/// [`plan`]).
pub fn solve_value_indexed(items: &[Item], capacity: i64, value_sum: i64) -> i64 {
    // Swap the roles: the old value becomes the axis step, the old cost
    // becomes the accumulated quantity.
    let swapped: Vec<Item> = items
        .iter()
        .map(|item| Item::valued(vec![item.value()], item.costs[0]))
        .collect();
    let table = fold_all(&MinCost, &[value_sum], &swapped);
    // Value 0 costs 0, so the scan always lands somewhere.
    scan_descending(&MinCost, &table, |cost| cost <= capacity).unwrap_or(0)
}
