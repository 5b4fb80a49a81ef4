//! Command-line configuration

use std::path::PathBuf;

use clap::{Args, Parser};
use loadout::{
    catalog::CatalogFilter, items::Category, solvers::DEFAULT_MAX_ITEMS, validation::Validation,
};

/// Pick the heaviest affordable combination of items from a catalog
#[derive(Debug, Parser)]
#[command(name = "loadout", version, about, long_about = None)]
pub struct Cli {
    /// Catalog file (.json, .yml or .yaml)
    #[arg(short, long, env = "LOADOUT_CATALOG", default_value = "items.json")]
    pub catalog: PathBuf,

    /// Maximum total price of the selected items
    #[arg(short, long, allow_negative_numbers = true)]
    pub budget: i64,

    /// Maximum number of selected items
    #[arg(short, long, env = "LOADOUT_MAX_ITEMS", default_value_t = DEFAULT_MAX_ITEMS)]
    pub max_items: usize,

    /// Weight profile to derive item weights from, instead of the file's active one
    #[arg(short, long, env = "LOADOUT_PROFILE")]
    pub profile: Option<String>,

    /// Only consider items whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only consider items in this category; repeat to allow several
    #[arg(long, value_enum)]
    pub category: Vec<Category>,

    /// Reject negative budgets, negative prices and non-finite weights instead of solving anyway
    #[arg(long)]
    pub strict: bool,

    /// Smallest accepted budget; implies --strict
    #[arg(long, env = "LOADOUT_MIN_BUDGET", allow_negative_numbers = true)]
    pub min_budget: Option<i64>,

    /// Print search statistics after the selection
    #[arg(long)]
    pub stats: bool,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Cli {
    /// Whether input should be validated before solving
    pub fn strict(&self) -> bool {
        self.strict || self.min_budget.is_some()
    }

    /// Validation rules, when input should be validated
    pub fn validation(&self) -> Option<Validation> {
        self.strict().then_some(Validation {
            min_budget: self.min_budget,
        })
    }

    /// Catalog filter from `--search` and `--category`
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter::new(self.search.as_deref(), self.category.clone())
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_apply() -> TestResult {
        let cli = Cli::try_parse_from(["loadout", "--budget", "5000"])?;

        assert_eq!(cli.budget, 5000);
        assert_eq!(cli.max_items, DEFAULT_MAX_ITEMS);
        assert_eq!(cli.catalog, PathBuf::from("items.json"));
        assert!(!cli.strict());
        assert_eq!(cli.validation(), None);
        assert_eq!(cli.profile, None);
        assert!(cli.filter().is_empty());

        Ok(())
    }

    #[test]
    fn filter_flags_build_a_catalog_filter() -> TestResult {
        let cli = Cli::try_parse_from([
            "loadout",
            "-b",
            "5000",
            "--search",
            "Rifle",
            "--category",
            "weapon",
            "--category",
            "none",
            "--profile",
            "Tank",
        ])?;

        assert_eq!(
            cli.filter(),
            CatalogFilter::new(Some("rifle"), vec![Category::Weapon, Category::Uncategorized])
        );
        assert_eq!(cli.profile.as_deref(), Some("Tank"));

        Ok(())
    }

    #[test]
    fn rejects_unknown_category() {
        let result = Cli::try_parse_from(["loadout", "-b", "5000", "--category", "armour"]);

        assert!(result.is_err());
    }

    #[test]
    fn min_budget_implies_strict() -> TestResult {
        let cli = Cli::try_parse_from(["loadout", "-b", "4000", "--min-budget", "3500"])?;

        assert!(cli.strict());
        assert_eq!(cli.validation(), Some(Validation::with_min_budget(3500)));

        Ok(())
    }

    #[test]
    fn accepts_negative_budget() -> TestResult {
        let cli = Cli::try_parse_from(["loadout", "--budget", "-10", "-m", "0"])?;

        assert_eq!(cli.budget, -10);
        assert_eq!(cli.max_items, 0);

        Ok(())
    }
}
