//! Search Observer

/// Observer trait for instrumenting a backtracking search.
///
/// Every callback has an empty default body, so observers only implement the
/// events they care about.
pub trait SearchObserver {
    /// Called on entering a search node, including the root.
    ///
    /// `depth` is the number of items selected on the path to the node.
    fn on_node(&mut self, _depth: usize) {}

    /// Called when the candidate at `index` is skipped because it would exceed
    /// the budget.
    fn on_prune(&mut self, _index: usize) {}

    /// Called when the incumbent is replaced by a strictly heavier feasible
    /// combination of `len` items.
    fn on_incumbent(&mut self, _len: usize, _price: i64, _weight: f64) {}
}

/// No-op observer for unobserved solves.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes entered, including the root
    pub nodes: u64,

    /// Candidates skipped for exceeding the budget
    pub budget_prunes: u64,

    /// Times the incumbent was replaced
    pub incumbent_updates: u64,

    /// Deepest node reached, in selected items
    pub max_depth: usize,
}

impl SearchObserver for SearchStats {
    fn on_node(&mut self, depth: usize) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    fn on_prune(&mut self, _index: usize) {
        self.budget_prunes += 1;
    }

    fn on_incumbent(&mut self, _len: usize, _price: i64, _weight: f64) {
        self.incumbent_updates += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_track_depth_and_counts() {
        let mut stats = SearchStats::default();

        stats.on_node(0);
        stats.on_node(2);
        stats.on_node(1);
        stats.on_prune(4);
        stats.on_incumbent(2, 10, 3.0);

        assert_eq!(
            stats,
            SearchStats {
                nodes: 3,
                budget_prunes: 1,
                incumbent_updates: 1,
                max_depth: 2,
            }
        );
    }
}
