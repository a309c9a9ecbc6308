//! # sales-core: Seller Performance Statistics
//!
//! Computes per-seller revenue, profit, bonus and best-selling products
//! from three in-memory datasets: sellers, a product catalog and purchase
//! records. Pure functions only; loading the datasets and printing the
//! reports belong to the surrounding program.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sales Stats Data Flow                            │
//! │                                                                         │
//! │  Data loader (external) ──► SalesData { sellers, products, records }    │
//! │                                   │                                     │
//! │  ┌────────────────────────────────▼────────────────────────────────┐   │
//! │  │               ★ sales-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌─────────┐  │   │
//! │  │   │ aggregator │─►│   ranker   │─►│   report   │  │strategy │  │   │
//! │  │   │ per-seller │  │ profit ↓   │  │ 2-decimal  │  │revenue  │  │   │
//! │  │   │ totals     │  │ bonus, top │  │ rounding   │  │bonus    │  │   │
//! │  │   └────────────┘  └────────────┘  └────────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • SINGLE PASS                         │   │
//! │  └────────────────────────────────┬────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │  Printer (external) ◄── Vec<SellerReport>, profit descending            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Input datasets and report records
//! - [`money`] - Cent-based amounts and the rounding rule
//! - [`error`] - Pipeline error types
//! - [`validation`] - Structural input checks
//! - [`strategy`] - Revenue and bonus strategies
//! - [`aggregator`] - Per-seller accumulation
//! - [`ranker`] - Profit ranking, bonuses, top products
//! - [`report`] - Projection to report records
//! - [`analysis`] - The whole pipeline
//!
//! ## Example Usage
//!
//! ```rust
//! use sales_core::{analyze_sales_data, AnalysisOptions, SalesData};
//!
//! let data = SalesData::default();
//! // No sellers: the run is rejected before anything is accumulated.
//! assert!(analyze_sales_data(&data, &AnalysisOptions::standard()).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregator;
pub mod analysis;
pub mod error;
pub mod money;
pub mod ranker;
pub mod report;
pub mod strategy;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use aggregator::{aggregate, SellerAccumulator, SellerStats, SoldQuantities};
pub use analysis::{analyze_sales_data, AnalysisOptions};
pub use error::{AnalysisError, AnalysisResult, StrategyKind, ValidationError};
pub use money::Money;
pub use ranker::rank;
pub use report::format_reports;
pub use strategy::{BonusStrategy, BonusTiers, ProfitTierBonus, RevenueStrategy, SimpleRevenue};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default number of best-selling products listed per seller.
pub const TOP_PRODUCTS_LIMIT: usize = 10;
