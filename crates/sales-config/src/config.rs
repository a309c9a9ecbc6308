//! # Analytics Configuration
//!
//! Tunables for the seller statistics pipeline.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SALES_TOP_PRODUCTS_LIMIT=5                                         │
//! │     SALES_BONUS_TOP_RATE=0.2                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/sales-stats/analytics.toml (Linux)                       │
//! │     ~/Library/Application Support/com.sales-stats.sales-stats/… (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     top 10 products, bonus rates 0.15 / 0.10 / 0.05                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # analytics.toml
//! [report]
//! top_products_limit = 10
//!
//! [bonus]
//! top_rate = 0.15        # rank 0
//! runner_up_rate = 0.10  # ranks 1 and 2
//! middle_rate = 0.05     # every other rank except the last
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use sales_core::validation::{validate_bonus_rate, validate_top_products_limit};
use sales_core::{AnalysisOptions, BonusTiers, ProfitTierBonus, SimpleRevenue, TOP_PRODUCTS_LIMIT};

use crate::error::ConfigResult;

/// Environment variable names.
pub const ENV_TOP_PRODUCTS_LIMIT: &str = "SALES_TOP_PRODUCTS_LIMIT";
pub const ENV_BONUS_TOP_RATE: &str = "SALES_BONUS_TOP_RATE";
pub const ENV_BONUS_RUNNER_UP_RATE: &str = "SALES_BONUS_RUNNER_UP_RATE";
pub const ENV_BONUS_MIDDLE_RATE: &str = "SALES_BONUS_MIDDLE_RATE";

// =============================================================================
// Report Settings
// =============================================================================

/// Settings for the report records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Best-selling products listed per seller.
    #[serde(default = "default_top_products_limit")]
    pub top_products_limit: usize,
}

fn default_top_products_limit() -> usize {
    TOP_PRODUCTS_LIMIT
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            top_products_limit: default_top_products_limit(),
        }
    }
}

// =============================================================================
// Bonus Settings
// =============================================================================

/// Bonus rates by rank tier. The last rank never gets a bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusSettings {
    #[serde(default = "default_top_rate")]
    pub top_rate: f64,

    #[serde(default = "default_runner_up_rate")]
    pub runner_up_rate: f64,

    #[serde(default = "default_middle_rate")]
    pub middle_rate: f64,
}

fn default_top_rate() -> f64 {
    BonusTiers::default().top
}

fn default_runner_up_rate() -> f64 {
    BonusTiers::default().runner_up
}

fn default_middle_rate() -> f64 {
    BonusTiers::default().middle
}

impl Default for BonusSettings {
    fn default() -> Self {
        BonusSettings {
            top_rate: default_top_rate(),
            runner_up_rate: default_runner_up_rate(),
            middle_rate: default_middle_rate(),
        }
    }
}

// =============================================================================
// Analytics Config
// =============================================================================

/// Complete pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub report: ReportSettings,

    #[serde(default)]
    pub bonus: BonusSettings,
}

impl AnalyticsConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: AnalyticsConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (analytics.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with environment values taken from `lookup`.
    fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading analytics config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load analytics config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_top_products_limit(self.report.top_products_limit)?;
        validate_bonus_rate("top_rate", self.bonus.top_rate)?;
        validate_bonus_rate("runner_up_rate", self.bonus.runner_up_rate)?;
        validate_bonus_rate("middle_rate", self.bonus.middle_rate)?;
        Ok(())
    }

    /// Applies overrides from `lookup`. Unparseable values are ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_TOP_PRODUCTS_LIMIT) {
            match raw.trim().parse::<usize>() {
                Ok(limit) => {
                    debug!(limit, "Overriding top products limit from environment");
                    self.report.top_products_limit = limit;
                }
                Err(_) => warn!(value = %raw, "Invalid {} in environment", ENV_TOP_PRODUCTS_LIMIT),
            }
        }

        let rates = [
            (ENV_BONUS_TOP_RATE, &mut self.bonus.top_rate),
            (ENV_BONUS_RUNNER_UP_RATE, &mut self.bonus.runner_up_rate),
            (ENV_BONUS_MIDDLE_RATE, &mut self.bonus.middle_rate),
        ];
        for (key, slot) in rates {
            if let Some(raw) = lookup(key) {
                match raw.trim().parse::<f64>() {
                    Ok(rate) => {
                        debug!(key, rate, "Overriding bonus rate from environment");
                        *slot = rate;
                    }
                    Err(_) => warn!(key, value = %raw, "Invalid bonus rate in environment"),
                }
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sales-stats", "sales-stats")
            .map(|dirs| dirs.config_dir().join("analytics.toml"))
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Bonus tiers for [`ProfitTierBonus`].
    pub fn bonus_tiers(&self) -> BonusTiers {
        BonusTiers {
            top: self.bonus.top_rate,
            runner_up: self.bonus.runner_up_rate,
            middle: self.bonus.middle_rate,
        }
    }

    /// Pipeline options with the built-in strategies and these tunables.
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions::new()
            .with_revenue(SimpleRevenue)
            .with_bonus(ProfitTierBonus::new(self.bonus_tiers()))
            .with_top_products_limit(self.report.top_products_limit)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
