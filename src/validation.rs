//! Input validation
//!
//! The search itself accepts any input and degrades silently: a negative budget
//! or a zero cap simply yields the empty selection. These checks are opt-in for
//! callers that would rather reject such input up front.

use thiserror::Error;

use crate::{catalog::Catalog, solvers::Limits};

/// Errors raised by strict input validation.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// The budget is negative.
    #[error("budget must not be negative, got {budget}")]
    NegativeBudget {
        /// Budget supplied by the caller
        budget: i64,
    },

    /// The budget is below the configured minimum.
    #[error("budget {budget} is below the minimum of {minimum}")]
    BudgetBelowMinimum {
        /// Budget supplied by the caller
        budget: i64,
        /// Smallest accepted budget
        minimum: i64,
    },

    /// The cardinality cap is zero, so nothing could ever be selected.
    #[error("at least one item must be allowed")]
    ZeroItemCap,

    /// An item has a negative price.
    #[error("item {name:?} has negative price {price}")]
    NegativePrice {
        /// Item name
        name: String,
        /// Item price
        price: i64,
    },

    /// An item weight is NaN or infinite.
    #[error("item {name:?} has a non-finite weight")]
    NonFiniteWeight {
        /// Item name
        name: String,
    },
}

/// Strict validation rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    /// Smallest accepted budget, if any
    pub min_budget: Option<i64>,
}

impl Validation {
    /// Validation requiring at least the given budget.
    pub fn with_min_budget(min_budget: i64) -> Self {
        Self {
            min_budget: Some(min_budget),
        }
    }

    /// Check the search limits, then every item in the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, limits first.
    pub fn check(&self, limits: &Limits, catalog: &Catalog) -> Result<(), ValidationError> {
        self.check_limits(limits)?;
        self.check_catalog(catalog)
    }

    /// Check the search limits.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a negative budget, a budget below the
    /// configured minimum, or a zero item cap.
    pub fn check_limits(&self, limits: &Limits) -> Result<(), ValidationError> {
        if limits.budget < 0 {
            return Err(ValidationError::NegativeBudget {
                budget: limits.budget,
            });
        }

        if let Some(minimum) = self.min_budget
            && limits.budget < minimum
        {
            return Err(ValidationError::BudgetBelowMinimum {
                budget: limits.budget,
                minimum,
            });
        }

        if limits.max_items == 0 {
            return Err(ValidationError::ZeroItemCap);
        }

        Ok(())
    }

    /// Check every item in the catalog, reporting the first offending item.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an item with a negative price or a
    /// non-finite weight.
    pub fn check_catalog(&self, catalog: &Catalog) -> Result<(), ValidationError> {
        for item in catalog {
            if item.price() < 0 {
                return Err(ValidationError::NegativePrice {
                    name: item.name().to_string(),
                    price: item.price(),
                });
            }

            if !item.weight().is_finite() {
                return Err(ValidationError::NonFiniteWeight {
                    name: item.name().to_string(),
                });
            }
        }

        Ok(())
    }
}
