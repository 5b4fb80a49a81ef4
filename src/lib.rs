//! Loadout
//!
//! Loadout picks, from a catalog of priced items each carrying a weight, the
//! combination with the greatest total weight whose total price stays within a
//! budget and whose size stays within an item cap.
//!
//! ```
//! let (names, price, weight) =
//!     loadout::solve(4, [("A", 2, 5.0), ("B", 3, 4.0), ("C", 1, 2.0)], 2);
//!
//! assert_eq!(names, vec!["A", "C"]);
//! assert_eq!(price, 3);
//! assert!((weight - 7.0).abs() < f64::EPSILON);
//! ```

use crate::{
    catalog::Catalog,
    solvers::{Limits, Solver, backtracking::BacktrackingSolver},
};

pub mod catalog;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod selection;
pub mod solvers;
pub mod validation;
pub mod weights;

/// Select the heaviest combination of `(name, price, weight)` items whose
/// total price is at most `budget` and whose size is at most
/// `max_items_allowed`.
///
/// Returns the selected names in search order with their total price and
/// weight. Out-of-range input never fails: a negative budget, a cap of zero or
/// less, or an empty item list all yield `([], 0, 0.0)`.
pub fn solve<I, S>(budget: i64, items: I, max_items_allowed: i64) -> (Vec<String>, i64, f64)
where
    I: IntoIterator<Item = (S, i64, f64)>,
    S: Into<String>,
{
    let catalog = Catalog::from_triples(items).ranked();
    let limits = Limits::from_signed(budget, max_items_allowed);

    BacktrackingSolver::solve(&catalog, &limits).into_parts()
}
