//! Items

use serde::Deserialize;

use crate::weights::round_to_hundredths;

/// Slot an item occupies in a loadout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
pub enum Category {
    /// Weapon
    Weapon,

    /// Ability
    Ability,

    /// Survival
    Survival,

    /// No category
    #[default]
    #[serde(rename = "None")]
    #[value(name = "none")]
    Uncategorized,
}

impl Category {
    /// Display name, as written in catalog files
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Ability => "Ability",
            Self::Survival => "Survival",
            Self::Uncategorized => "None",
        }
    }
}

/// A selectable good with its precomputed efficiency.
///
/// Items are immutable once built: the efficiency ratio is derived from the
/// price and weight at construction time and never recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    name: String,
    price: i64,
    weight: f64,
    efficiency: f64,
    category: Category,
}

impl Item {
    /// Creates a new item with the given name, price and weight.
    pub fn new(name: impl Into<String>, price: i64, weight: f64) -> Self {
        Self {
            name: name.into(),
            price,
            weight,
            efficiency: efficiency(price, weight),
            category: Category::default(),
        }
    }

    /// Returns the item with its category set.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Returns the name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price of the item
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Returns the weight (benefit value) of the item
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the weight-to-price ratio used to order the search
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Returns the category of the item
    pub fn category(&self) -> Category {
        self.category
    }

    /// Weight per thousand units of price, rounded to two decimal places.
    /// Free items report zero.
    #[expect(
        clippy::cast_precision_loss,
        reason = "display figure rounded to hundredths"
    )]
    pub fn weight_per_1k(&self) -> f64 {
        if self.price == 0 {
            return 0.0;
        }

        round_to_hundredths(self.weight * 1000.0 / self.price as f64)
    }
}

impl<S: Into<String>> From<(S, i64, f64)> for Item {
    fn from((name, price, weight): (S, i64, f64)) -> Self {
        Item::new(name, price, weight)
    }
}

/// Weight-to-price ratio of an item.
///
/// Free items rank by the sign of their weight: positive weight is infinitely
/// efficient, negative weight infinitely inefficient, and zero weight is zero.
/// Negative prices are not special-cased and yield a sign-flipped ratio.
#[expect(
    clippy::cast_precision_loss,
    reason = "efficiency is a search-order heuristic, exactness is not required"
)]
pub fn efficiency(price: i64, weight: f64) -> f64 {
    if price != 0 {
        return weight / price as f64;
    }

    if weight > 0.0 {
        f64::INFINITY
    } else if weight < 0.0 {
        f64::NEG_INFINITY
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn efficiency_is_weight_over_price() {
        let item = Item::new("A", 2, 5.0);

        assert!((item.efficiency() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn free_item_with_positive_weight_is_infinitely_efficient() {
        assert_eq!(efficiency(0, 10.0), f64::INFINITY);
    }

    #[test]
    fn free_item_with_negative_weight_is_infinitely_inefficient() {
        assert_eq!(efficiency(0, -1.0), f64::NEG_INFINITY);
    }

    #[test]
    fn free_item_without_weight_has_zero_efficiency() {
        assert!(efficiency(0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_price_flips_the_ratio() {
        assert!((efficiency(-2, 4.0) + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weight_per_1k_scales_efficiency() {
        let item = Item::new("Rifle", 1500, 38.5);

        assert!((item.weight_per_1k() - 25.67).abs() < 1e-9);
        assert!(Item::new("Free", 0, 10.0).weight_per_1k().abs() < f64::EPSILON);
    }

    #[test]
    fn category_defaults_to_uncategorized() {
        let item = Item::new("Coin", 250, 1.0);

        assert_eq!(item.category(), Category::Uncategorized);
        assert_eq!(
            item.with_category(Category::Weapon).category(),
            Category::Weapon
        );
    }

    #[test]
    fn from_tuple_keeps_fields() {
        let item = Item::from(("Shield", 300, 12.5));

        assert_eq!(item.name(), "Shield");
        assert_eq!(item.price(), 300);
        assert!((item.weight() - 12.5).abs() < f64::EPSILON);
    }
}
