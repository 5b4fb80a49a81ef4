//! Fixtures
//!
//! Catalogs stored on disk, as JSON item files or YAML fixture sets, with
//! optional weight profiles.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::Catalog,
    fixtures::items::{CatalogFixture, JsonCatalogFixture},
};

pub mod items;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// File extension is not a known catalog format
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// Weight profile not found
    #[error("Weight profile not found: {0}")]
    ProfileNotFound(String),
}

/// On-disk catalog encoding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `{ "items": { .. }, "weights": { .. } }` or a bare `{ "<name>": { "Price": .. } }`
    Json,

    /// `items: { <name>: { price: .., weight: .. } }`, optionally with `weights`
    Yaml,
}

impl CatalogFormat {
    /// Detect the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::UnsupportedFormat`] for anything other than
    /// `.json`, `.yml` or `.yaml`.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yml" | "yaml") => Ok(Self::Yaml),
            _ => Err(FixtureError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a catalog document from its serialized form.
///
/// # Errors
///
/// Returns an error if the contents cannot be parsed in the given format.
pub fn parse_fixture(contents: &str, format: CatalogFormat) -> Result<CatalogFixture, FixtureError> {
    let fixture = match format {
        CatalogFormat::Json => serde_json::from_str::<JsonCatalogFixture>(contents)?.into(),
        CatalogFormat::Yaml => serde_norway::from_str::<CatalogFixture>(contents)?,
    };

    Ok(fixture)
}

/// Parse a catalog from its serialized form, weighting items with the
/// document's active profile.
///
/// Items come out in name order, not ranked.
///
/// # Errors
///
/// Returns an error if the contents cannot be parsed in the given format.
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> Result<Catalog, FixtureError> {
    Ok(parse_fixture(contents, format)?.catalog())
}

/// Load a catalog document, detecting the format from its extension.
///
/// # Errors
///
/// Returns an error if the format is unsupported or the file cannot be read or parsed.
pub fn load_fixture(path: impl AsRef<Path>) -> Result<CatalogFixture, FixtureError> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)?;
    let contents = fs::read_to_string(path)?;
    let fixture = parse_fixture(&contents, format)?;

    debug!(
        path = %path.display(),
        items = fixture.items.len(),
        profiles = fixture.profiles().len(),
        "loaded catalog"
    );

    Ok(fixture)
}

/// Load a catalog file, weighting items with its active profile.
///
/// # Errors
///
/// Returns an error if the format is unsupported or the file cannot be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, FixtureError> {
    Ok(load_fixture(path)?.catalog())
}

/// Load a catalog file, weighting items with the named profile, or with the
/// active profile when no name is given.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the profile does not exist.
pub fn load_catalog_with_profile(
    path: impl AsRef<Path>,
    profile: Option<&str>,
) -> Result<Catalog, FixtureError> {
    let fixture = load_fixture(path)?;

    let Some(name) = profile else {
        return Ok(fixture.catalog());
    };

    let profile = fixture
        .profile(name)
        .ok_or_else(|| FixtureError::ProfileNotFound(name.to_string()))?;

    Ok(fixture.catalog_with(Some(&profile)))
}

/// Named catalog fixtures under a base directory
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Fixtures in the default `./fixtures` directory
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Fixtures in a custom directory
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load the YAML catalog `catalogs/{name}.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn catalog(&self, name: &str) -> Result<Catalog, FixtureError> {
        load_catalog(self.base_path.join("catalogs").join(format!("{name}.yml")))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::items::{Category, Item};

    use super::*;

    #[test]
    fn parses_json_item_file_keys() -> TestResult {
        let contents = r#"{
            "Shield": { "Price": 700, "Total Weight": 12.5, "Category": "Survival" },
            "Blade": { "Price": 500, "Total Weight": 10.0 }
        }"#;

        let catalog = parse_catalog(contents, CatalogFormat::Json)?;
        let names: Vec<&str> = catalog.iter().map(Item::name).collect();

        assert_eq!(names, vec!["Blade", "Shield"]);
        assert_eq!(catalog.get(1).map(Item::price), Some(700));
        assert_eq!(catalog.get(1).map(Item::category), Some(Category::Survival));
        assert_eq!(catalog.get(1).map(Item::weight), Some(12.5));

        Ok(())
    }

    #[test]
    fn parses_yaml_fixture() -> TestResult {
        let contents = "items:\n  Boots:\n    price: 250\n    weight: 4.5\n";

        let catalog = parse_catalog(contents, CatalogFormat::Yaml)?;

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).map(Item::name), Some("Boots"));

        Ok(())
    }

    #[test]
    fn rejects_missing_price() {
        let result = parse_catalog(r#"{ "Blade": { "Total Weight": 5.0 } }"#, CatalogFormat::Json);

        assert!(matches!(result, Err(FixtureError::Json(_))));
    }

    #[test]
    fn parses_wrapped_document_and_recomputes_weights() -> TestResult {
        let contents = r#"{
            "items": {
                "Blade": {
                    "Price": 500, "Adjustment": 1, "Effect Value": 2, "Effects": "+5% damage",
                    "Favorite": true, "Category": "Weapon", "Total Weight": 99.0,
                    "weight_per_1k": 198.0, "Weapon Power": 10
                }
            },
            "weights": { "Base Weights": { "Adjustment": 1.0, "Effect Value": 1.0, "Weapon Power": 0.5 } },
            "output_weights": {}
        }"#;

        let catalog = parse_catalog(contents, CatalogFormat::Json)?;
        let blade = catalog.get(0).ok_or("missing item")?;

        // 1 + 2 + 10 * 0.5; the stored total weight is stale
        assert!((blade.weight() - 8.0).abs() < 1e-9);
        assert_eq!(blade.category(), Category::Weapon);

        Ok(())
    }

    #[test]
    fn output_weights_take_precedence_over_base_profile() -> TestResult {
        let contents = r#"{
            "items": { "Vest": { "Price": 100, "Armor": 10 } },
            "weights": { "Base Weights": { "Armor": 1.0 } },
            "output_weights": { "Armor": 2.0 }
        }"#;

        let catalog = parse_catalog(contents, CatalogFormat::Json)?;

        assert_eq!(catalog.get(0).map(Item::weight), Some(20.0));

        Ok(())
    }

    #[test]
    fn legacy_weights_become_the_base_profile() -> TestResult {
        let contents = r#"{
            "items": { "Vest": { "Price": 100, "Armor": 10 } },
            "weights": { "Armor": 0.5, "Health": 1.0 }
        }"#;

        let fixture = parse_fixture(contents, CatalogFormat::Json)?;

        assert_eq!(fixture.profiles().keys().copied().collect::<Vec<_>>(), vec!["Base Weights"]);
        assert_eq!(fixture.catalog().get(0).map(Item::weight), Some(5.0));

        Ok(())
    }

    #[test]
    fn profile_flags_are_ignored() -> TestResult {
        let contents = r#"{
            "items": { "Vest": { "Price": 100, "Armor": 10 } },
            "weights": {
                "Base Weights": { "Armor": 1.0 },
                "Tank": { "Armor": 3.0, "enabled": true }
            }
        }"#;

        let fixture = parse_fixture(contents, CatalogFormat::Json)?;
        let tank = fixture.profile("Tank").ok_or("missing profile")?;

        assert_eq!(tank.len(), 1);
        assert_eq!(fixture.catalog_with(Some(&tank)).get(0).map(Item::weight), Some(30.0));

        Ok(())
    }

    #[test]
    fn missing_total_weight_uses_default_profile() -> TestResult {
        let contents = r#"{ "Boots": { "Price": 600, "Adjustment": 2, "Move Speed": 4, "Luck": 9 } }"#;

        let catalog = parse_catalog(contents, CatalogFormat::Json)?;

        // Adjustment and Move Speed at 1.0; Luck is not a known stat
        assert_eq!(catalog.get(0).map(Item::weight), Some(6.0));

        Ok(())
    }

    #[test]
    fn detects_format_from_extension() -> TestResult {
        assert_eq!(
            CatalogFormat::from_path(Path::new("items.JSON"))?,
            CatalogFormat::Json
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("set.yaml"))?,
            CatalogFormat::Yaml
        );
        assert!(matches!(
            CatalogFormat::from_path(Path::new("items.csv")),
            Err(FixtureError::UnsupportedFormat(_))
        ));

        Ok(())
    }
}
