//! Catalog

use std::slice;

use crate::items::{Category, Item};

/// Narrows a catalog before it is solved.
///
/// The search text matches item names case-insensitively as a substring. An
/// empty category list admits every category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    search: String,
    categories: Vec<Category>,
}

impl CatalogFilter {
    /// Create a filter from optional search text and the admitted categories.
    pub fn new(search: Option<&str>, categories: Vec<Category>) -> Self {
        Self {
            search: search.unwrap_or_default().trim().to_lowercase(),
            categories,
        }
    }

    /// Whether the filter admits every item
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.categories.is_empty()
    }

    /// Whether the item passes the filter
    pub fn matches(&self, item: &Item) -> bool {
        if !self.search.is_empty() && !item.name().to_lowercase().contains(&self.search) {
            return false;
        }

        self.categories.is_empty() || self.categories.contains(&item.category())
    }
}

/// An ordered sequence of items.
///
/// A freshly built catalog keeps the input order. Ranking reorders it by
/// descending efficiency, which only changes the order the search explores
/// candidates in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Create a catalog from items, keeping their order.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Build a catalog from raw `(name, price, weight)` triples in input order.
    pub fn from_triples<I, S>(triples: I) -> Self
    where
        I: IntoIterator<Item = (S, i64, f64)>,
        S: Into<String>,
    {
        triples.into_iter().map(Item::from).collect()
    }

    /// Sort the items by descending efficiency.
    ///
    /// The sort is stable, so items of equal efficiency keep their input order.
    pub fn rank(&mut self) {
        self.items
            .sort_by(|a, b| b.efficiency().total_cmp(&a.efficiency()));
    }

    /// Consume the catalog and return only the items the filter admits, in
    /// their current order.
    #[must_use]
    pub fn filtered(mut self, filter: &CatalogFilter) -> Self {
        if !filter.is_empty() {
            self.items.retain(|item| filter.matches(item));
        }

        self
    }

    /// Consume the catalog and return it ranked by descending efficiency.
    #[must_use]
    pub fn ranked(mut self) -> Self {
        self.rank();
        self
    }

    /// Iterate over the items in catalog order.
    pub fn iter(&self) -> slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Get an item by its position in the catalog.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Items in catalog order.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Get the number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Into<Item>> FromIterator<T> for Catalog {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Catalog {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
