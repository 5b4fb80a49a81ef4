//! Backtracking Solver
//!
//! Depth-first enumeration of every combination of a catalog that fits the
//! budget, keeping the heaviest one seen. Candidates are only ever skipped when
//! they would push the running price over the budget; there is no bound on the
//! weight still reachable, so the worst case visits every subset of up to
//! `max_items` items.

use std::time::Instant;

use smallvec::SmallVec;
use tracing::{debug, debug_span, trace};

use crate::{
    catalog::Catalog,
    items::Item,
    selection::Selection,
    solvers::{
        DEFAULT_MAX_ITEMS, Limits, Solver,
        observer::{NoopObserver, SearchObserver},
    },
};

/// Catalog positions on the path from the root to the current node.
type SelectionStack = SmallVec<[usize; DEFAULT_MAX_ITEMS]>;

/// Exhaustive depth-first solver.
///
/// Explores the catalog in the order given, so callers should pass a
/// [`Catalog::ranked`] catalog: trying efficient items first tends to find
/// heavy combinations early, although it never changes which weight is found.
#[derive(Debug)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Solve with an observer receiving a callback for every search event.
    pub fn solve_with_observer(
        catalog: &Catalog,
        limits: &Limits,
        observer: &mut dyn SearchObserver,
    ) -> Selection {
        let span = debug_span!(
            "backtracking_solve",
            items = catalog.len(),
            budget = limits.budget,
            max_items = limits.max_items
        );
        let _guard = span.enter();

        let start = Instant::now();

        let mut search = Search {
            items: catalog.as_slice(),
            limits,
            stack: SelectionStack::new(),
            incumbent: Incumbent::default(),
            observer,
            nodes: 0,
        };

        search.backtrack(0, 0, 0.0);

        let Search {
            incumbent, nodes, ..
        } = search;

        debug!(
            nodes,
            selected = incumbent.positions.len(),
            price = incumbent.price,
            weight = incumbent.weight,
            elapsed = ?start.elapsed(),
            "search complete"
        );

        Selection::from_indices(
            catalog,
            &incumbent.positions,
            incumbent.price,
            incumbent.weight,
        )
    }
}

impl Solver for BacktrackingSolver {
    fn solve(catalog: &Catalog, limits: &Limits) -> Selection {
        Self::solve_with_observer(catalog, limits, &mut NoopObserver)
    }
}

/// Best feasible combination seen so far.
#[derive(Debug, Default)]
struct Incumbent {
    positions: SelectionStack,
    price: i64,
    weight: f64,
}

/// Mutable state shared by every frame of one search.
struct Search<'a, 'o> {
    items: &'a [Item],
    limits: &'a Limits,
    stack: SelectionStack,
    incumbent: Incumbent,
    observer: &'o mut dyn SearchObserver,
    nodes: u64,
}

impl Search<'_, '_> {
    fn backtrack(&mut self, start: usize, price: i64, weight: f64) {
        self.nodes += 1;
        self.observer.on_node(self.stack.len());

        // Every node is a candidate answer, not only the leaves.
        if weight > self.incumbent.weight && self.limits.admits(price, self.stack.len()) {
            self.incumbent.positions.clone_from(&self.stack);
            self.incumbent.price = price;
            self.incumbent.weight = weight;

            trace!(len = self.stack.len(), price, weight, "new incumbent");
            self.observer.on_incumbent(self.stack.len(), price, weight);
        }

        if start >= self.items.len() || self.stack.len() >= self.limits.max_items {
            return;
        }

        let items = self.items;

        for (index, item) in items.iter().enumerate().skip(start) {
            let next_price = price.saturating_add(item.price());

            if next_price > self.limits.budget {
                self.observer.on_prune(index);
                continue;
            }

            self.stack.push(index);
            self.backtrack(index + 1, next_price, weight + item.weight());
            self.stack.pop();
        }
    }
}
