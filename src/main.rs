//! Loadout CLI
//!
//! Loads a catalog, selects the heaviest combination within the budget and the
//! item cap, and prints it as a table.

use std::{
    io::{self, Write},
    time::Instant,
};

use anyhow::Result;
use clap::Parser;
use humanize_duration::{Truncate, prelude::DurationExt};
use loadout::{
    fixtures::load_catalog_with_profile,
    solvers::{Limits, backtracking::BacktrackingSolver, observer::SearchStats},
};
use tracing::info;

mod config;
mod observability;

use crate::config::Cli;

/// Loadout CLI
pub fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init_subscriber(&cli.logging)?;

    let catalog = load_catalog_with_profile(&cli.catalog, cli.profile.as_deref())?
        .filtered(&cli.filter())
        .ranked();
    let limits = Limits::new(cli.budget, cli.max_items);

    if let Some(validation) = cli.validation() {
        validation.check(&limits, &catalog)?;
    }

    info!(
        catalog = %cli.catalog.display(),
        profile = cli.profile.as_deref().unwrap_or("active"),
        items = catalog.len(),
        budget = limits.budget,
        max_items = limits.max_items,
        "solving"
    );

    let mut stats = SearchStats::default();
    let start = Instant::now();

    let selection = BacktrackingSolver::solve_with_observer(&catalog, &limits, &mut stats);

    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    selection.write_to(&mut handle)?;

    if cli.stats {
        writeln!(
            handle,
            " Nodes: {}  Budget prunes: {}  Incumbent updates: {}  Max depth: {}",
            stats.nodes, stats.budget_prunes, stats.incumbent_updates, stats.max_depth
        )?;
    }

    writeln!(
        handle,
        " {} ({}s)",
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )?;

    Ok(())
}
