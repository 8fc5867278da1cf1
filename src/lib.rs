//! Capacity-bounded dynamic programming, generalized.
//!
//! This crate replaces the ~40 near-duplicate knapsack/subset-sum dynamic
//! programs that accumulate in any competitive-programming archive with one
//! parameterized engine:
//!
//! 1. Describe each selectable thing as an [`Item`]: non-negative cost
//!    coordinates (one per capacity axis), a weight (value or unsafe
//!    probability), and a use-once vs. reusable flag.
//! 2. Pick a [`Variant`]: maximize value, minimize cost, feasibility,
//!    combination/permutation counting (optionally mod M), or a
//!    probability-safety threshold scan.
//! 3. Let [`Engine`] allocate the state table, fold the items with the
//!    correct sweep direction, and extract the scalar [`Answer`].
//!
//! Reusability and counting mode are tagged variants consumed by one generic
//! transition, so the two silent correctness hazards of this problem family —
//! sweep direction and loop nesting — are each decided in exactly one place.
//!
//! ## Quick start
//! ```
//! use knapdp::{Answer, Engine, Item, Problem, Variant};
//!
//! let items = vec![
//!     Item::valued(vec![1], 20),
//!     Item::valued(vec![2], 30),
//!     Item::valued(vec![3], 40),
//! ];
//! let engine = Engine::new(Problem::new(items, vec![6], Variant::Max)).unwrap();
//! assert_eq!(engine.run(), Answer::Best(90));
//! ```
//!
//! ## Built-in formulations
//! The [`presets`] module maps the classic problem statements (0/1 and
//! unbounded knapsack, coin change, target sum, partition, ones-and-zeroes,
//! robberies) onto the engine; they are ready to use and serve as templates
//! for your own instances.
//!
//! Instances with an enormous capacity but a small total value are solved
//! through the [`dual`] value-indexed transform automatically.

pub mod builder;
pub mod dual;
pub mod error;
mod extract;
pub mod item;
pub mod presets;
pub mod solver;
mod table;
mod transition;

pub use crate::builder::ProblemBuilder;
pub use crate::error::SolveError;
pub use crate::item::{Item, ItemWeight};
pub use crate::solver::{Answer, Engine, Problem, Variant};
