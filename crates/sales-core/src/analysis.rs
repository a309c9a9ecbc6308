//! # Analysis Module
//!
//! Entry point of the pipeline: validate, aggregate, rank, report.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  analyze_sales_data(data, options)                                      │
//! │       │                                                                 │
//! │       ├── sellers empty?            → InvalidInput                      │
//! │       ├── strategy missing?         → MissingStrategy                   │
//! │       ├── top_products_limit == 0?  → InvalidInput                      │
//! │       ▼                                                                 │
//! │  aggregate()      SellerStats       (UnknownProduct aborts here)        │
//! │       ▼                                                                 │
//! │  rank()           Vec<SellerAccumulator>, profit descending             │
//! │       ▼                                                                 │
//! │  format_reports() Vec<SellerReport>                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sales_core::{analyze_sales_data, AnalysisOptions, SalesData};
//! use sales_core::{LineItem, Product, PurchaseRecord, Seller};
//!
//! let data = SalesData {
//!     sellers: vec![Seller { id: "s1".into(), first_name: "Ann".into(), last_name: "Lee".into() }],
//!     products: vec![Product { sku: "SKU_001".into(), purchase_price: 50.0 }],
//!     purchase_records: vec![PurchaseRecord {
//!         seller_id: "s1".into(),
//!         items: vec![LineItem { sku: "SKU_001".into(), quantity: 2, sale_price: 100.0, discount: 10.0 }],
//!     }],
//! };
//!
//! let reports = analyze_sales_data(&data, &AnalysisOptions::standard()).unwrap();
//! assert_eq!(reports[0].revenue.to_string(), "180.00");
//! assert_eq!(reports[0].bonus.to_string(), "12.00");
//! ```

use std::fmt;

use tracing::info;

use crate::aggregator::aggregate;
use crate::error::{AnalysisError, AnalysisResult, StrategyKind};
use crate::ranker::rank;
use crate::report::format_reports;
use crate::strategy::{BonusStrategy, ProfitTierBonus, RevenueStrategy, SimpleRevenue};
use crate::types::{SalesData, SellerReport};
use crate::validation::{validate_sellers, validate_top_products_limit};
use crate::TOP_PRODUCTS_LIMIT;

// =============================================================================
// Analysis Options
// =============================================================================

/// Strategies and tunables for one pipeline run.
///
/// Both strategies start out unset; running without one of them fails with
/// [`AnalysisError::MissingStrategy`].
pub struct AnalysisOptions {
    calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    calculate_bonus: Option<Box<dyn BonusStrategy>>,
    top_products_limit: usize,
}

impl AnalysisOptions {
    /// Options with no strategies and the default top-products cap.
    pub fn new() -> Self {
        AnalysisOptions {
            calculate_revenue: None,
            calculate_bonus: None,
            top_products_limit: TOP_PRODUCTS_LIMIT,
        }
    }

    /// [`SimpleRevenue`] and [`ProfitTierBonus`] with default tiers.
    pub fn standard() -> Self {
        Self::new()
            .with_revenue(SimpleRevenue)
            .with_bonus(ProfitTierBonus::default())
    }

    pub fn with_revenue(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(strategy));
        self
    }

    pub fn with_bonus(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(strategy));
        self
    }

    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }

    pub fn top_products_limit(&self) -> usize {
        self.top_products_limit
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .field("top_products_limit", &self.top_products_limit)
            .finish()
    }
}

// =============================================================================
// Analyze
// =============================================================================

/// Computes per-seller statistics, ordered by profit descending.
///
/// Returns one report per input seller, including sellers with no sales.
///
/// ## Errors
/// - [`AnalysisError::InvalidInput`]: no sellers, or a zero top-products cap
/// - [`AnalysisError::MissingStrategy`]: a strategy was not set
/// - [`AnalysisError::UnknownProduct`]: a line item's SKU is not in the catalog
pub fn analyze_sales_data(
    data: &SalesData,
    options: &AnalysisOptions,
) -> AnalysisResult<Vec<SellerReport>> {
    validate_sellers(&data.sellers)?;

    let revenue_strategy = options
        .calculate_revenue
        .as_deref()
        .ok_or(AnalysisError::MissingStrategy {
            which: StrategyKind::Revenue,
        })?;
    let bonus_strategy = options
        .calculate_bonus
        .as_deref()
        .ok_or(AnalysisError::MissingStrategy {
            which: StrategyKind::Bonus,
        })?;

    validate_top_products_limit(options.top_products_limit)?;

    info!(
        sellers = data.sellers.len(),
        products = data.products.len(),
        records = data.purchase_records.len(),
        "Starting sales analysis"
    );

    let stats = aggregate(
        &data.sellers,
        &data.products,
        &data.purchase_records,
        revenue_strategy,
    )?;
    let ranked = rank(stats, bonus_strategy, options.top_products_limit);
    let reports = format_reports(ranked);

    info!(reports = reports.len(), "Sales analysis complete");

    Ok(reports)
}

// =============================================================================
// Unit Tests
// =============================================================================
