//! Named formulations of the source problem family.
//!
//! Each preset is a thin mapping from a classic problem statement onto
//! [`Problem`](crate::Problem) plus the right extraction; they are both
//! ready-to-use tools and templates for formulating your own instances.
//!
//! - [`knapsack`]  : 0/1 and unbounded knapsack, "ones and zeroes".
//! - [`coins`]     : coin change (min coins, combination count), sequence
//!   counting where orderings matter.
//! - [`subsets`]   : subset-sum feasibility, partition problems, target sum.
//! - [`robberies`] : probability-weighted threshold planning.

pub mod coins;
pub mod knapsack;
pub mod robberies;
pub mod subsets;

pub use coins::{coin_change_min, coin_change_ways, sequence_count};
pub use knapsack::{knapsack_01, knapsack_unbounded, ones_and_zeroes};
pub use robberies::robberies;
pub use subsets::{
    best_subset_sum_at_most, can_partition, min_partition_diff, subset_sum, target_sum_ways,
};
