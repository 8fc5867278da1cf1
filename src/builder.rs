//! Incremental construction of a [`Problem`] plus validation on build.

use crate::error::SolveError;
use crate::item::Item;
use crate::solver::{Engine, Problem, Variant};

/// Builder for a [`Problem`]; `build` validates and returns a ready
/// [`Engine`].
pub struct ProblemBuilder {
    items: Vec<Item>,
    capacity: Vec<i64>,
    variant: Variant,
}

impl ProblemBuilder {
    pub fn new(variant: Variant) -> Self {
        Self {
            items: Vec::new(),
            capacity: Vec::new(),
            variant,
        }
    }

    pub fn capacity(mut self, capacity: Vec<i64>) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn items<I: IntoIterator<Item = Item>>(mut self, items: I) -> Self {
        self.items.extend(items);
        self
    }

    pub fn build(self) -> Result<Engine, SolveError> {
        Engine::new(Problem::new(self.items, self.capacity, self.variant))
    }
}
