//! # Aggregator Module
//!
//! Walks the purchase records and accumulates per-seller totals.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Aggregator                                     │
//! │                                                                         │
//! │  sellers ──► SellerAccumulator per seller ──► seller index (id → slot)  │
//! │  products ─────────────────────────────────► product index (sku → &P)   │
//! │                                                                         │
//! │  for record in purchase_records:                                        │
//! │      seller index miss? ──► skip whole record (no count, no totals)     │
//! │      sales_count += 1                                                   │
//! │      for item in record.items:                                          │
//! │          product index miss? ──► UnknownProduct, abort the run          │
//! │          cost    = purchase_price × quantity                            │
//! │          revenue = round_to_cents(strategy(item, product))              │
//! │          seller.revenue += revenue                                      │
//! │          seller.profit  += revenue − cost                               │
//! │          products_sold[sku] += quantity                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The asymmetry is intentional: unknown sellers are a lenient join, an
//! unknown product is a broken catalog.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::{AnalysisError, AnalysisResult};
use crate::money::round_to_cents;
use crate::strategy::RevenueStrategy;
use crate::types::{Product, PurchaseRecord, Seller, TopProduct};
use crate::validation::validate_sellers;

// =============================================================================
// Sold Quantities
// =============================================================================

/// Cumulative quantity per SKU, in first-sold order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoldQuantities {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl SoldQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `sku`, starting from zero for an unseen SKU.
    pub fn add(&mut self, sku: &str, quantity: u64) {
        match self.index.get(sku) {
            Some(&slot) => self.entries[slot].1 += quantity,
            None => {
                self.index.insert(sku.to_string(), self.entries.len());
                self.entries.push((sku.to_string(), quantity));
            }
        }
    }

    /// Quantity sold for `sku`, zero when never sold.
    pub fn get(&self, sku: &str) -> u64 {
        self.index
            .get(sku)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct SKUs sold.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total units across all SKUs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(sku, quantity)| (sku.as_str(), *quantity))
    }
}

// =============================================================================
// Seller Accumulator
// =============================================================================

/// Running totals for one seller during a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAccumulator {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub products_sold: SoldQuantities,
    /// Assigned once by the ranker.
    pub bonus: f64,
    /// Assigned once by the ranker.
    pub top_products: Vec<TopProduct>,
}

impl SellerAccumulator {
    /// Creates an empty accumulator.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        SellerAccumulator {
            id: id.into(),
            name: name.into(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: SoldQuantities::new(),
            bonus: 0.0,
            top_products: Vec::new(),
        }
    }

    fn from_seller(seller: &Seller) -> Self {
        Self::new(seller.id.clone(), seller.full_name())
    }
}

// =============================================================================
// Seller Stats
// =============================================================================

/// Accumulators for every input seller, keyed by seller id.
///
/// Iteration follows the input seller order. When two sellers share an id,
/// both keep a slot but lookups resolve to the later one.
#[derive(Debug, Clone, Default)]
pub struct SellerStats {
    sellers: Vec<SellerAccumulator>,
    index: HashMap<String, usize>,
}

impl SellerStats {
    fn from_sellers(sellers: &[Seller]) -> Self {
        let sellers: Vec<SellerAccumulator> =
            sellers.iter().map(SellerAccumulator::from_seller).collect();
        let index = sellers
            .iter()
            .enumerate()
            .map(|(slot, seller)| (seller.id.clone(), slot))
            .collect();
        SellerStats { sellers, index }
    }

    /// Looks up the accumulator for `seller_id`.
    pub fn get(&self, seller_id: &str) -> Option<&SellerAccumulator> {
        self.index.get(seller_id).map(|&slot| &self.sellers[slot])
    }

    fn get_mut(&mut self, seller_id: &str) -> Option<&mut SellerAccumulator> {
        match self.index.get(seller_id) {
            Some(&slot) => Some(&mut self.sellers[slot]),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.sellers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sellers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SellerAccumulator> {
        self.sellers.iter()
    }

    /// Hands the accumulators over in input seller order.
    pub fn into_vec(self) -> Vec<SellerAccumulator> {
        self.sellers
    }
}

// =============================================================================
// Aggregate
// =============================================================================

/// Accumulates revenue, profit, sales count and sold quantities per seller.
///
/// ## Errors
/// - [`AnalysisError::InvalidInput`] when `sellers` is empty
/// - [`AnalysisError::UnknownProduct`] when a line item's SKU is not in
///   `products`; nothing is returned for the run
pub fn aggregate<R>(
    sellers: &[Seller],
    products: &[Product],
    purchase_records: &[PurchaseRecord],
    revenue_strategy: &R,
) -> AnalysisResult<SellerStats>
where
    R: RevenueStrategy + ?Sized,
{
    validate_sellers(sellers)?;

    let mut stats = SellerStats::from_sellers(sellers);
    let product_index: HashMap<&str, &Product> = products
        .iter()
        .map(|product| (product.sku.as_str(), product))
        .collect();

    let mut skipped = 0usize;

    for record in purchase_records {
        let Some(seller) = stats.get_mut(&record.seller_id) else {
            debug!(seller_id = %record.seller_id, "Skipping purchase record for unknown seller");
            skipped += 1;
            continue;
        };

        seller.sales_count += 1;

        for item in &record.items {
            let Some(product) = product_index.get(item.sku.as_str()) else {
                warn!(
                    sku = %item.sku,
                    seller_id = %record.seller_id,
                    "Line item references unknown product, aborting"
                );
                return Err(AnalysisError::UnknownProduct {
                    sku: item.sku.clone(),
                });
            };

            let cost = product.purchase_price * item.quantity as f64;
            let revenue = round_to_cents(revenue_strategy.revenue(item, product));

            seller.revenue += revenue;
            seller.profit += revenue - cost;
            seller.products_sold.add(&item.sku, u64::from(item.quantity));
        }
    }

    info!(
        sellers = stats.len(),
        products = product_index.len(),
        records = purchase_records.len(),
        skipped,
        "Aggregated purchase records"
    );

    Ok(stats)
}

// =============================================================================
// Unit Tests
// =============================================================================
