//! The item model: the input contract shared by every variant.
//!
//! An [`Item`] carries one or more non-negative cost coordinates (arity is
//! fixed per solve), a weight, and a reusability flag. The weight is either a
//! plain value (optimum and counting variants) or an *unsafe probability* in
//! `[0, 1]` (the probability-weighted variant); the two are never mixed
//! within one solve.

use crate::error::SolveError;

/// What an item contributes when selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemWeight {
    /// A value added to the objective (or a cost accumulated, for the
    /// minimizing form).
    Value(i64),
    /// Probability of this pick going wrong; selections multiply the
    /// complementary safe probabilities.
    Probability(f64),
}

/// One selectable item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Non-negative cost per capacity axis; length must equal the solve's
    /// capacity arity.
    pub costs: Vec<i64>,
    pub weight: ItemWeight,
    /// `false`: usable at most once (0/1). `true`: usable any number of times.
    pub reusable: bool,
}

impl Item {
    /// A use-once item with a value weight.
    pub fn valued(costs: Vec<i64>, value: i64) -> Self {
        Self {
            costs,
            weight: ItemWeight::Value(value),
            reusable: false,
        }
    }

    /// A use-once item with an unsafe-probability weight.
    pub fn probabilistic(costs: Vec<i64>, unsafe_prob: f64) -> Self {
        Self {
            costs,
            weight: ItemWeight::Probability(unsafe_prob),
            reusable: false,
        }
    }

    /// Mark the item as usable any number of times.
    pub fn reusable(mut self) -> Self {
        self.reusable = true;
        self
    }

    pub(crate) fn value(&self) -> i64 {
        match self.weight {
            ItemWeight::Value(v) => v,
            ItemWeight::Probability(_) => unreachable!("validated: value weight expected"),
        }
    }

    pub(crate) fn unsafe_prob(&self) -> f64 {
        match self.weight {
            ItemWeight::Probability(p) => p,
            ItemWeight::Value(_) => unreachable!("validated: probability weight expected"),
        }
    }

    pub(crate) fn costs_as_usize(&self) -> Vec<usize> {
        self.costs.iter().map(|&c| c as usize).collect()
    }
}

/// Which weight kind a variant expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WeightKind {
    Value,
    Probability,
}

/// Validate the full item list against the declared capacity arity and the
/// variant's expected weight kind. Called once, before any table mutation.
pub(crate) fn validate_items(
    items: &[Item],
    arity: usize,
    expect: WeightKind,
) -> Result<(), SolveError> {
    for (index, item) in items.iter().enumerate() {
        if item.costs.len() != arity {
            return Err(SolveError::ArityMismatch {
                index,
                expected: arity,
                got: item.costs.len(),
            });
        }
        for (axis, &c) in item.costs.iter().enumerate() {
            if c < 0 {
                return Err(SolveError::NegativeCost { index, axis });
            }
        }
        if item.reusable && item.costs.iter().all(|&c| c == 0) {
            return Err(SolveError::ReusableZeroCost { index });
        }
        match (expect, item.weight) {
            (WeightKind::Value, ItemWeight::Value(v)) => {
                if v < 0 {
                    return Err(SolveError::InvalidWeight {
                        index,
                        reason: "value weight must be non-negative",
                    });
                }
            }
            (WeightKind::Probability, ItemWeight::Probability(p)) => {
                if !(0.0..=1.0).contains(&p) {
                    return Err(SolveError::InvalidWeight {
                        index,
                        reason: "probability weight must lie in [0, 1]",
                    });
                }
            }
            (WeightKind::Value, ItemWeight::Probability(_)) => {
                return Err(SolveError::InvalidWeight {
                    index,
                    reason: "this variant expects a value weight",
                });
            }
            (WeightKind::Probability, ItemWeight::Value(_)) => {
                return Err(SolveError::InvalidWeight {
                    index,
                    reason: "this variant expects a probability weight",
                });
            }
        }
    }
    Ok(())
}
