//! Selection

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{catalog::Catalog, items::Item};

/// Errors that can occur when rendering a selection.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Writing the rendered selection failed.
    #[error("failed to write selection: {0}")]
    Io(#[from] io::Error),
}

/// The best combination found by a solve, with its totals.
///
/// Items are kept in the order the search picked them, which is the ranked
/// catalog order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    items: Vec<Item>,
    total_price: i64,
    total_weight: f64,
}

impl Selection {
    /// Create a selection from already-chosen items and their totals.
    pub fn new(items: Vec<Item>, total_price: i64, total_weight: f64) -> Self {
        Self {
            items,
            total_price,
            total_weight,
        }
    }

    /// The empty selection: no items, zero price, zero weight.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble a selection from positions in a ranked catalog.
    ///
    /// Totals are taken as given rather than recomputed, so they match the
    /// running sums the search accumulated.
    pub fn from_indices(
        catalog: &Catalog,
        indices: &[usize],
        total_price: i64,
        total_weight: f64,
    ) -> Self {
        let items = indices
            .iter()
            .filter_map(|&index| catalog.get(index))
            .cloned()
            .collect();

        Self::new(items, total_price, total_weight)
    }

    /// Selected items in search order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Names of the selected items in search order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Item::name).collect()
    }

    /// Sum of the selected item prices
    pub fn total_price(&self) -> i64 {
        self.total_price
    }

    /// Sum of the selected item weights
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of selected items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Split into `(names, total_price, total_weight)`.
    pub fn into_parts(self) -> (Vec<String>, i64, f64) {
        let names = self
            .items
            .into_iter()
            .map(|item| item.name().to_string())
            .collect();

        (names, self.total_price, self.total_weight)
    }

    /// Render the selection as a table followed by its totals.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SelectionError> {
        if self.is_empty() {
            writeln!(out, "\nNo affordable combination found.")?;
            return Ok(());
        }

        let mut builder = Builder::default();

        builder.push_record(["#", "Item", "Category", "Price", "Weight", "Per 1k"]);

        for (position, item) in self.items.iter().enumerate() {
            builder.push_record([
                (position + 1).to_string(),
                item.name().to_string(),
                item.category().as_str().to_string(),
                item.price().to_string(),
                format!("{:.2}", item.weight()),
                format!("{:.2}", item.weight_per_1k()),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..6), Alignment::right());

        writeln!(out, "\n{table}")?;
        writeln!(out, " Items:  {}", self.len())?;
        writeln!(out, " Price:  {}", self.total_price)?;
        writeln!(out, " \x1b[1mWeight:\x1b[0m {:.2}", self.total_weight)?;

        Ok(())
    }
}
