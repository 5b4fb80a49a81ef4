//! Loadout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogFilter},
    fixtures::{
        CatalogFormat, Fixture, FixtureError, items::CatalogFixture, load_catalog,
        load_catalog_with_profile, load_fixture, parse_catalog, parse_fixture,
    },
    items::{Category, Item},
    selection::{Selection, SelectionError},
    solve,
    solvers::{
        DEFAULT_MAX_ITEMS, Limits, Solver, SolverError,
        backtracking::BacktrackingSolver,
        observer::{NoopObserver, SearchObserver, SearchStats},
    },
    validation::{Validation, ValidationError},
    weights::{ItemStats, WeightProfile},
};
