//! Subset-sum-shaped presets: feasibility, partitioning, and signed targets.

use crate::error::SolveError;
use crate::extract;
use crate::item::Item;
use crate::solver::{Engine, Problem, Variant};
use crate::table::Table;
use crate::transition::{fold_all, Reach};

fn subset_items(nums: &[i64]) -> Vec<Item> {
    nums.iter().map(|&n| Item::valued(vec![n], 0)).collect()
}

/// Whether some subset of `nums` sums to exactly `target`.
pub fn subset_sum(nums: &[i64], target: i64) -> Result<bool, SolveError> {
    let engine = Engine::new(Problem::new(
        subset_items(nums),
        vec![target],
        Variant::Feasible,
    ))?;
    Ok(engine.run().feasible())
}

/// The largest subset sum not exceeding `bound` (always defined: the empty
/// subset sums to 0).
pub fn best_subset_sum_at_most(nums: &[i64], bound: i64) -> Result<i64, SolveError> {
    // Validate through the public surface, then read the projection off the
    // reachability table directly.
    let engine = Engine::new(Problem::new(
        subset_items(nums),
        vec![bound.max(0)],
        Variant::Feasible,
    ))?;
    let problem = engine.problem();
    let table = fold_all(&Reach, &problem.capacity, &problem.items);
    Ok(extract::project_at_most(&Reach, &table, bound).unwrap_or(0))
}

/// Whether `nums` splits into two subsets of equal sum.
pub fn can_partition(nums: &[i64]) -> Result<bool, SolveError> {
    let total: i64 = nums.iter().sum();
    if total % 2 != 0 {
        return Ok(false);
    }
    subset_sum(nums, total / 2)
}

/// The minimal difference between the two sides of a partition of `nums`:
/// `total - 2 * best_half`, with `best_half` the largest reachable sum not
/// exceeding `total / 2`.
pub fn min_partition_diff(nums: &[i64]) -> Result<i64, SolveError> {
    let total: i64 = nums.iter().sum();
    let best_half = best_subset_sum_at_most(nums, total / 2)?;
    Ok(total - 2 * best_half)
}

/// Number of ways to assign `+`/`-` to every number so the expression equals
/// `target`. Runs directly over the signed partial-sum domain `[-sum, +sum]`,
/// which the offset table maps onto physical storage; counts saturate at
/// `u64::MAX`.
pub fn target_sum_ways(nums: &[i64], target: i64) -> Result<u64, SolveError> {
    if let Some(index) = nums.iter().position(|&n| n < 0) {
        return Err(SolveError::NegativeCost { index, axis: 0 });
    }
    let total: i64 = nums.iter().sum();
    if target.abs() > total {
        return Ok(0);
    }
    let mut table = Table::with_bounds(&[-total], &[total], 0u64);
    table.set(&[0], 1);
    for &n in nums {
        // Every number must take a sign, so each step rebuilds the table from
        // the previous one rather than folding in place.
        let mut next = Table::with_bounds(&[-total], &[total], 0u64);
        let (lo, hi) = table.bounds(0);
        for s in lo..=hi {
            let ways = *table.get(&[s]);
            if ways == 0 {
                continue;
            }
            // Reachable partial sums stay within [-total, total].
            for signed in [s + n, s - n] {
                let cur = *next.get(&[signed]);
                next.set(&[signed], cur.saturating_add(ways));
            }
        }
        table = next;
    }
    Ok(*table.get(&[target]))
}
