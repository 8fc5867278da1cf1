//! The public solve surface: [`Problem`], [`Variant`], [`Answer`], and the
//! [`Engine`] that ties the table, transition, dual-axis, and extraction
//! pieces together.
//!
//! Every precondition is checked by [`Engine::new`]; [`Engine::run`] is
//! infallible, deterministic, and allocates one table per invocation.

use crate::dual::{self, DualAxisPlan};
use crate::error::SolveError;
use crate::extract;
use crate::item::{validate_items, Item, WeightKind};
use crate::transition::{count_sequences, fold_all, init_table, MaxValue, MinCost, Reach, SafeProb, Ways};

/// Which aggregation the solve performs. Selected once per run; payload kinds
/// are never mixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variant {
    /// Best total value achievable within the capacity.
    Max,
    /// Minimal accumulated weight to land exactly on the capacity vector
    /// (coin-change style); infeasible targets yield `None`.
    MinCost,
    /// Whether some admissible selection lands exactly on the capacity
    /// vector (subset-sum style).
    Feasible,
    /// Number of selections (as multisets) landing exactly on the capacity
    /// vector, optionally mod `modulus`.
    CountCombinations { modulus: Option<u64> },
    /// Number of selection *sequences* landing exactly on the capacity
    /// vector — orderings count separately. Requires every item reusable.
    CountPermutations { modulus: Option<u64> },
    /// Largest capacity whose best safe probability is at least `min_safe`
    /// (inclusive threshold, single axis).
    ProbabilitySafe { min_safe: f64 },
}

/// One solve instance: items, declared capacity vector, and the variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub items: Vec<Item>,
    pub capacity: Vec<i64>,
    pub variant: Variant,
}

impl Problem {
    pub fn new(items: Vec<Item>, capacity: Vec<i64>, variant: Variant) -> Self {
        Self {
            items,
            capacity,
            variant,
        }
    }
}

/// The single scalar each variant produces. Infeasibility is a value here,
/// never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Best value within capacity (`Variant::Max`).
    Best(i64),
    /// Minimal cost to hit the target exactly, `None` if unreachable.
    Cost(Option<i64>),
    /// Exact-target reachability.
    Feasible(bool),
    /// Count of ways (combinations or permutations).
    Count(u64),
    /// Largest capacity meeting the safety threshold.
    SafeCapacity(i64),
}

impl Answer {
    pub fn best(self) -> Option<i64> {
        match self {
            Answer::Best(v) => Some(v),
            _ => None,
        }
    }

    pub fn cost(self) -> Option<i64> {
        match self {
            Answer::Cost(c) => c,
            _ => None,
        }
    }

    pub fn feasible(self) -> bool {
        matches!(self, Answer::Feasible(true))
    }

    pub fn count(self) -> Option<u64> {
        match self {
            Answer::Count(n) => Some(n),
            _ => None,
        }
    }

    pub fn safe_capacity(self) -> Option<i64> {
        match self {
            Answer::SafeCapacity(c) => Some(c),
            _ => None,
        }
    }
}

/// Validated, ready-to-run solve.
#[derive(Debug, Clone)]
pub struct Engine {
    problem: Problem,
}

impl Engine {
    /// Validate every precondition. Nothing is allocated or folded until
    /// [`run`](Self::run); a run can therefore never fail.
    pub fn new(problem: Problem) -> Result<Self, SolveError> {
        if problem.capacity.is_empty() {
            return Err(SolveError::EmptyCapacity);
        }
        for (axis, &cap) in problem.capacity.iter().enumerate() {
            if cap < 0 {
                return Err(SolveError::NegativeCapacity { axis, value: cap });
            }
        }

        let arity = problem.capacity.len();
        match problem.variant {
            Variant::Max | Variant::MinCost | Variant::Feasible => {
                validate_items(&problem.items, arity, WeightKind::Value)?;
            }
            Variant::CountCombinations { modulus } => {
                validate_items(&problem.items, arity, WeightKind::Value)?;
                check_modulus(modulus)?;
            }
            Variant::CountPermutations { modulus } => {
                validate_items(&problem.items, arity, WeightKind::Value)?;
                check_modulus(modulus)?;
                if let Some(index) = problem.items.iter().position(|item| !item.reusable) {
                    return Err(SolveError::PermutationsNeedReusable { index });
                }
            }
            Variant::ProbabilitySafe { min_safe } => {
                validate_items(&problem.items, arity, WeightKind::Probability)?;
                if arity != 1 {
                    return Err(SolveError::MultiAxisProbability(arity));
                }
                if !(0.0..=1.0).contains(&min_safe) {
                    return Err(SolveError::InvalidThreshold(min_safe));
                }
            }
        }

        Ok(Self { problem })
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Run the solve: allocate the table, fold every item, extract the answer,
    /// and drop the table.
    pub fn run(&self) -> Answer {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "solve",
            variant = ?self.problem.variant,
            items = self.problem.items.len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let items = &self.problem.items;
        let cap = &self.problem.capacity;

        match self.problem.variant {
            Variant::Max => {
                if let DualAxisPlan::ValueIndexed { value_sum } = dual::plan(items, cap) {
                    return Answer::Best(dual::solve_value_indexed(items, cap[0], value_sum));
                }
                let table = fold_all(&MaxValue, cap, items);
                // The zero vector is always reachable, so the fold is Some.
                Answer::Best(extract::best_over(&MaxValue, &table).unwrap_or(0))
            }
            Variant::MinCost => {
                let table = fold_all(&MinCost, cap, items);
                Answer::Cost(extract::exact(&MinCost, &table, cap))
            }
            Variant::Feasible => {
                let table = fold_all(&Reach, cap, items);
                Answer::Feasible(extract::exact(&Reach, &table, cap).is_some())
            }
            Variant::CountCombinations { modulus } => {
                let rule = Ways { modulus };
                let table = fold_all(&rule, cap, items);
                Answer::Count(*table.get(cap))
            }
            Variant::CountPermutations { modulus } => {
                let rule = Ways { modulus };
                let mut table = init_table(&rule, cap);
                count_sequences(&rule, &mut table, items);
                Answer::Count(*table.get(cap))
            }
            Variant::ProbabilitySafe { min_safe } => {
                let table = fold_all(&SafeProb, cap, items);
                // Robbing nothing is perfectly safe, so the scan always lands.
                let best = extract::scan_descending(&SafeProb, &table, |p| p >= min_safe);
                Answer::SafeCapacity(best.unwrap_or(0))
            }
        }
    }
}

fn check_modulus(modulus: Option<u64>) -> Result<(), SolveError> {
    match modulus {
        Some(0) => Err(SolveError::InvalidModulus),
        _ => Ok(()),
    }
}
