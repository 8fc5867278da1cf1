//! Probability-weighted planning ("robberies"): maximize loot while the
//! chance of getting away stays at or above a floor.

use crate::error::SolveError;
use crate::item::Item;
use crate::solver::{Engine, Problem, Variant};

/// The most money stealable from banks with the given `money` hauls and
/// per-bank catch probabilities `p_caught`, keeping the overall probability
/// of being caught at most `max_caught`. Each bank is robbed at most once.
///
/// The escape-probability threshold is inclusive: a plan landing exactly on
/// `1 - max_caught` is admissible.
pub fn robberies(money: &[i64], p_caught: &[f64], max_caught: f64) -> Result<i64, SolveError> {
    assert_eq!(money.len(), p_caught.len(), "money/probability length mismatch");
    if !(0.0..=1.0).contains(&max_caught) {
        return Err(SolveError::InvalidThreshold(max_caught));
    }
    let items = money
        .iter()
        .zip(p_caught)
        .map(|(&m, &p)| Item::probabilistic(vec![m], p))
        .collect();
    let total: i64 = money.iter().map(|&m| m.max(0)).sum();
    let engine = Engine::new(Problem::new(
        items,
        vec![total],
        Variant::ProbabilitySafe {
            min_safe: 1.0 - max_caught,
        },
    ))?;
    Ok(engine.run().safe_capacity().unwrap_or(0))
}
