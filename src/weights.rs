//! Weight profiles
//!
//! An item's weight can be derived from its raw stats instead of being stored:
//! each stat is multiplied by the profile's weight for that stat and the sum is
//! rounded to two decimal places.

use std::collections::BTreeMap;

/// Name of the profile every catalog file falls back to.
pub const BASE_PROFILE: &str = "Base Weights";

/// Stat name of the flat adjustment every item carries.
pub const ADJUSTMENT: &str = "Adjustment";

/// Stat name of the effect value every item carries.
pub const EFFECT_VALUE: &str = "Effect Value";

/// Stats weighted at `1.0` by the default profile.
pub const DEFAULT_STATS: [&str; 16] = [
    ADJUSTMENT,
    EFFECT_VALUE,
    "Weapon Power",
    "Weapon Lifesteal",
    "Attack Speed",
    "Reload Speed",
    "Move Speed",
    "Critical Damage",
    "Melee Damage",
    "Max Ammo",
    "Cooldown Reduction",
    "Ability Power",
    "Ability Lifesteal",
    "Armor",
    "Shields",
    "Health",
];

/// Raw stats an item weight is derived from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemStats {
    /// Flat adjustment
    pub adjustment: f64,

    /// Effect value
    pub effect_value: f64,

    /// Optional stats keyed by stat name
    pub stats: BTreeMap<String, f64>,
}

/// Per-stat multipliers used to derive item weights.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightProfile {
    weights: BTreeMap<String, f64>,
}

impl WeightProfile {
    /// Create a profile from stat name -> multiplier pairs.
    pub fn new(weights: BTreeMap<String, f64>) -> Self {
        Self { weights }
    }

    /// Multiplier for a stat, if the profile has one.
    pub fn get(&self, stat: &str) -> Option<f64> {
        self.weights.get(stat).copied()
    }

    /// Number of weighted stats
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the profile weights nothing
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weighted sum of an item's stats, rounded to two decimal places.
    ///
    /// Adjustment and effect value count at `1.0` when the profile has no
    /// multiplier for them; optional stats only count when it does.
    pub fn total_weight(&self, stats: &ItemStats) -> f64 {
        let mut total = stats.adjustment * self.get(ADJUSTMENT).unwrap_or(1.0)
            + stats.effect_value * self.get(EFFECT_VALUE).unwrap_or(1.0);

        for (stat, value) in &stats.stats {
            if let Some(weight) = self.get(stat) {
                total += value * weight;
            }
        }

        round_to_hundredths(total)
    }
}

impl Default for WeightProfile {
    fn default() -> Self {
        DEFAULT_STATS
            .iter()
            .map(|stat| ((*stat).to_string(), 1.0))
            .collect()
    }
}

impl FromIterator<(String, f64)> for WeightProfile {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Round to two decimal places.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(adjustment: f64, effect_value: f64, extra: &[(&str, f64)]) -> ItemStats {
        ItemStats {
            adjustment,
            effect_value,
            stats: extra
                .iter()
                .map(|(stat, value)| ((*stat).to_string(), *value))
                .collect(),
        }
    }

    #[test]
    fn default_profile_weights_every_known_stat_at_one() {
        let profile = WeightProfile::default();

        assert_eq!(profile.len(), DEFAULT_STATS.len());
        assert_eq!(profile.get("Armor"), Some(1.0));
        assert_eq!(profile.get("Luck"), None);
    }

    #[test]
    fn total_weight_sums_weighted_stats() {
        let profile: WeightProfile = [
            ("Adjustment".to_string(), 2.0),
            ("Effect Value".to_string(), 0.5),
            ("Armor".to_string(), 0.2),
        ]
        .into_iter()
        .collect();

        let weight = profile.total_weight(&stats(3.0, 4.0, &[("Armor", 25.0), ("Luck", 100.0)]));

        // 3 * 2 + 4 * 0.5 + 25 * 0.2; Luck is not weighted
        assert!((weight - 13.0).abs() < 1e-9);
    }

    #[test]
    fn missing_base_multipliers_count_at_one() {
        let profile = WeightProfile::new(BTreeMap::new());

        let weight = profile.total_weight(&stats(2.0, 5.0, &[("Armor", 10.0)]));

        assert!((weight - 7.0).abs() < 1e-9);
    }

    #[test]
    fn total_weight_is_rounded_to_hundredths() {
        let profile: WeightProfile = [("Health".to_string(), 1.0 / 3.0)].into_iter().collect();

        let weight = profile.total_weight(&stats(0.0, 0.0, &[("Health", 10.0)]));

        assert!((weight - 3.33).abs() < 1e-9);
    }
}
