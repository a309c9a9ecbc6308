//! # sales-config: Pipeline Configuration
//!
//! Loads the tunables of the seller statistics pipeline and converts them
//! into [`sales_core::AnalysisOptions`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sales_config::AnalyticsConfig;
//! use sales_core::{analyze_sales_data, SalesData};
//!
//! let config = AnalyticsConfig::load_or_default(None);
//! let data = SalesData::default(); // supplied by the data loader
//! let reports = analyze_sales_data(&data, &config.analysis_options());
//! ```

pub mod config;
pub mod error;

pub use config::{AnalyticsConfig, BonusSettings, ReportSettings};
pub use error::{ConfigError, ConfigResult};
