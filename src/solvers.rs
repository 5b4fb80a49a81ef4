//! Solvers for budget- and cardinality-constrained selection

use thiserror::Error;

use crate::{
    catalog::Catalog,
    selection::Selection,
    validation::{Validation, ValidationError},
};

pub mod backtracking;
pub mod observer;

/// Number of items a selection may hold when no cap is given.
pub const DEFAULT_MAX_ITEMS: usize = 6;

/// Solver Errors
#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    /// Wrapped strict validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Constraints a selection must satisfy to be feasible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total price of the selected items
    pub budget: i64,

    /// Maximum number of selected items
    pub max_items: usize,
}

impl Limits {
    /// Create limits from a budget and an item cap.
    pub fn new(budget: i64, max_items: usize) -> Self {
        Self { budget, max_items }
    }

    /// Create limits from a signed item cap, as supplied by callers that do not
    /// distinguish counts from other integers. A negative cap allows nothing.
    pub fn from_signed(budget: i64, max_items_allowed: i64) -> Self {
        Self::new(budget, usize::try_from(max_items_allowed).unwrap_or(0))
    }

    /// Limits with the default item cap.
    pub fn with_budget(budget: i64) -> Self {
        Self::new(budget, DEFAULT_MAX_ITEMS)
    }

    /// Whether a combination with this total price and size is feasible.
    pub fn admits(&self, total_price: i64, len: usize) -> bool {
        total_price <= self.budget && len <= self.max_items
    }
}

/// Trait for selecting the best combination of items from a catalog
pub trait Solver {
    /// Find the highest-weight feasible combination, exploring the catalog in
    /// the order given.
    ///
    /// Never fails: out-of-range limits degrade to the empty selection.
    fn solve(catalog: &Catalog, limits: &Limits) -> Selection;

    /// Validate the input with `validation` before solving.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the limits or any catalog item fail validation.
    fn solve_checked(
        catalog: &Catalog,
        limits: &Limits,
        validation: &Validation,
    ) -> Result<Selection, SolverError> {
        validation.check(limits, catalog)?;

        Ok(Self::solve(catalog, limits))
    }
}
