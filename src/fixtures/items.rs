//! Item Fixtures

use std::collections::BTreeMap;

use serde::{Deserialize, de::IgnoredAny};

use crate::{
    catalog::Catalog,
    items::{Category, Item},
    weights::{BASE_PROFILE, ItemStats, WeightProfile},
};

/// Entry keys that are stored alongside item stats but are not stats.
const NON_STAT_FIELDS: [&str; 3] = ["Effects", "Favorite", "weight_per_1k"];

/// JSON item file: either the full document or a bare map of item name ->
/// item fixture
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JsonCatalogFixture {
    /// `{ "items": { .. }, "weights": { .. }, "output_weights": { .. } }`
    Document(CatalogFixture),

    /// `{ "<name>": { .. } }`
    Items(BTreeMap<String, ItemFixture>),
}

impl From<JsonCatalogFixture> for CatalogFixture {
    fn from(fixture: JsonCatalogFixture) -> Self {
        match fixture {
            JsonCatalogFixture::Document(document) => document,
            JsonCatalogFixture::Items(items) => CatalogFixture {
                items,
                weights: None,
                output_weights: BTreeMap::new(),
            },
        }
    }
}

/// Catalog document with its weight profiles
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Map of item name -> item fixture
    pub items: BTreeMap<String, ItemFixture>,

    /// Named weight profiles, or a single legacy profile
    #[serde(default)]
    pub weights: Option<WeightsFixture>,

    /// Multipliers currently in effect
    #[serde(default)]
    pub output_weights: BTreeMap<String, FieldValue>,
}

/// Weight profiles as stored in a catalog document
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WeightsFixture {
    /// Map of profile name -> multipliers
    Profiles(BTreeMap<String, BTreeMap<String, FieldValue>>),

    /// Bare multipliers, treated as the base profile
    Legacy(BTreeMap<String, FieldValue>),
}

/// A numeric field, or anything else (flags, notes) which is skipped
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Numeric value
    Number(f64),

    /// Non-numeric value
    Other(IgnoredAny),
}

impl FieldValue {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Other(_) => None,
        }
    }
}

/// Item Fixture
///
/// Accepts both the lower-case keys used in YAML fixtures and the
/// capitalised keys of JSON item files. Numeric keys beyond the known ones are
/// item stats; other unknown keys are ignored.
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item price
    #[serde(alias = "Price")]
    pub price: i64,

    /// Stored item weight
    #[serde(default, alias = "Total Weight")]
    pub weight: Option<f64>,

    /// Flat adjustment
    #[serde(default, alias = "Adjustment")]
    pub adjustment: f64,

    /// Effect value
    #[serde(default, alias = "Effect Value")]
    pub effect_value: f64,

    /// Item category
    #[serde(default, alias = "Category")]
    pub category: Category,

    /// Remaining fields
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl ItemFixture {
    /// Stats the item weight can be derived from
    pub fn stats(&self) -> ItemStats {
        ItemStats {
            adjustment: self.adjustment,
            effect_value: self.effect_value,
            stats: numeric_fields(&self.fields)
                .filter(|(name, _)| !NON_STAT_FIELDS.contains(&name.as_str()))
                .collect(),
        }
    }

    /// Build the item, deriving its weight from `profile` when one is given.
    ///
    /// Without a profile the stored weight is used, falling back to the
    /// default profile when the entry has none.
    pub fn to_item(&self, name: &str, profile: Option<&WeightProfile>) -> Item {
        let weight = match (profile, self.weight) {
            (Some(profile), _) => profile.total_weight(&self.stats()),
            (None, Some(weight)) => weight,
            (None, None) => WeightProfile::default().total_weight(&self.stats()),
        };

        Item::new(name, self.price, weight).with_category(self.category)
    }
}

impl CatalogFixture {
    /// Named weight profiles. A legacy single profile is named [`BASE_PROFILE`].
    pub fn profiles(&self) -> BTreeMap<&str, WeightProfile> {
        match &self.weights {
            Some(WeightsFixture::Profiles(profiles)) => profiles
                .iter()
                .map(|(name, fields)| (name.as_str(), profile_from_fields(fields)))
                .collect(),
            Some(WeightsFixture::Legacy(fields)) => {
                BTreeMap::from([(BASE_PROFILE, profile_from_fields(fields))])
            }
            None => BTreeMap::new(),
        }
    }

    /// Get a weight profile by name.
    pub fn profile(&self, name: &str) -> Option<WeightProfile> {
        self.profiles().remove(name)
    }

    /// Profile in effect when none is chosen: the output weights, else the
    /// base profile, else none at all.
    pub fn active_profile(&self) -> Option<WeightProfile> {
        let output = profile_from_fields(&self.output_weights);

        if output.is_empty() {
            self.profile(BASE_PROFILE)
        } else {
            Some(output)
        }
    }

    /// Build the catalog with the active profile, in item name order.
    pub fn catalog(&self) -> Catalog {
        self.catalog_with(self.active_profile().as_ref())
    }

    /// Build the catalog, deriving every weight from `profile` when given.
    pub fn catalog_with(&self, profile: Option<&WeightProfile>) -> Catalog {
        self.items
            .iter()
            .map(|(name, fixture)| fixture.to_item(name, profile))
            .collect()
    }
}

fn numeric_fields(
    fields: &BTreeMap<String, FieldValue>,
) -> impl Iterator<Item = (String, f64)> + '_ {
    fields
        .iter()
        .filter_map(|(name, value)| value.as_f64().map(|value| (name.clone(), value)))
}

fn profile_from_fields(fields: &BTreeMap<String, FieldValue>) -> WeightProfile {
    numeric_fields(fields).collect()
}
