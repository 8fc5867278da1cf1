//! Precondition errors surfaced to callers.
//!
//! Everything here is rejected synchronously by [`Engine::new`](crate::Engine::new)
//! before the first item is folded; once a solve starts it cannot fail.
//! Infeasibility (no subset reaches the target) is *not* an error — it is a
//! first-class answer (`None`, `false`, or `0` depending on the variant).

use thiserror::Error;

/// Contract violations detected before any table mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The capacity vector has no axes.
    #[error("capacity vector must have at least one axis")]
    EmptyCapacity,

    /// A capacity axis is negative.
    #[error("capacity axis {axis} is negative ({value})")]
    NegativeCapacity { axis: usize, value: i64 },

    /// An item's cost coordinate is negative.
    #[error("item {index} has a negative cost on axis {axis}")]
    NegativeCost { index: usize, axis: usize },

    /// An item's cost arity does not match the capacity arity.
    #[error("item {index} has {got} cost coordinates, expected {expected}")]
    ArityMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },

    /// An item's weight is the wrong kind or out of range for the variant.
    #[error("item {index} has an invalid weight: {reason}")]
    InvalidWeight { index: usize, reason: &'static str },

    /// A reusable item with an all-zero cost vector never consumes capacity,
    /// so "any number of uses" has no finite answer.
    #[error("reusable item {index} has an all-zero cost vector")]
    ReusableZeroCost { index: usize },

    /// The counting modulus is zero.
    #[error("counting modulus must be nonzero")]
    InvalidModulus,

    /// The safety threshold lies outside `[0, 1]`.
    #[error("safety threshold must lie in [0, 1], got {0}")]
    InvalidThreshold(f64),

    /// Permutation counting requires every item to be reusable; the
    /// capacity-major recurrence cannot express use-once semantics.
    #[error("permutation counting requires every item to be reusable (item {index} is not)")]
    PermutationsNeedReusable { index: usize },

    /// Probability-weighted solves read a single money/cost axis.
    #[error("probability-weighted solves use a single capacity axis, got {0}")]
    MultiAxisProbability(usize),
}
