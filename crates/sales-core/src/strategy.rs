//! # Strategy Module
//!
//! The two pluggable calculations of the pipeline.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RevenueStrategy   (LineItem, Product)              → revenue per line  │
//! │  BonusStrategy     (rank, total, SellerAccumulator) → seller bonus      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both traits are implemented for plain closures and fn items, so callers
//! can inject a function value directly:
//!
//! ```rust
//! use sales_core::strategy::RevenueStrategy;
//! use sales_core::{LineItem, Product};
//!
//! let gross = |item: &LineItem, _product: &Product| item.sale_price * item.quantity as f64;
//!
//! let item = LineItem { sku: "SKU_001".into(), quantity: 3, sale_price: 10.0, discount: 50.0 };
//! let product = Product { sku: "SKU_001".into(), purchase_price: 4.0 };
//! assert_eq!(gross.revenue(&item, &product), 30.0);
//! ```

use crate::aggregator::SellerAccumulator;
use crate::types::{LineItem, Product};

// =============================================================================
// Strategy Traits
// =============================================================================

/// Computes the revenue of a single line item.
///
/// The aggregator rounds the returned value to cents before accumulating it.
pub trait RevenueStrategy {
    fn revenue(&self, item: &LineItem, product: &Product) -> f64;
}

/// Computes a seller's bonus from its 0-based rank after the profit sort.
pub trait BonusStrategy {
    fn bonus(&self, rank: usize, total_sellers: usize, seller: &SellerAccumulator) -> f64;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> f64,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> f64 {
        self(item, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerAccumulator) -> f64,
{
    fn bonus(&self, rank: usize, total_sellers: usize, seller: &SellerAccumulator) -> f64 {
        self(rank, total_sellers, seller)
    }
}

// =============================================================================
// Simple Revenue
// =============================================================================

/// `sale_price × quantity × (1 − discount / 100)`.
///
/// The discount is not clamped; values outside 0-100 pass straight through.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> f64 {
        let discount = 1.0 - item.discount / 100.0;
        item.sale_price * item.quantity as f64 * discount
    }
}

// =============================================================================
// Profit Tier Bonus
// =============================================================================

/// Bonus rates by rank tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusTiers {
    /// Rate for rank 0.
    pub top: f64,
    /// Rate for ranks 1 and 2.
    pub runner_up: f64,
    /// Rate for every other rank except the last.
    pub middle: f64,
}

impl Default for BonusTiers {
    fn default() -> Self {
        BonusTiers {
            top: 0.15,
            runner_up: 0.10,
            middle: 0.05,
        }
    }
}

/// Tiered bonus on accumulated profit.
///
/// ```text
/// rank 0              → profit × top        (0.15)
/// rank 1 or 2         → profit × runner_up  (0.10)
/// rank total − 1      → 0
/// any other rank      → profit × middle     (0.05)
/// ```
///
/// Branches are checked top to bottom, so a lone seller (rank 0 is also
/// the last rank) gets the top rate, and in a run of two or three sellers
/// the last one still gets the runner-up rate. With exactly three sellers
/// the default tiers pay 0.15, 0.10 and 0.10; the zero bonus for the last
/// rank first applies at four sellers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitTierBonus {
    tiers: BonusTiers,
}

impl ProfitTierBonus {
    pub fn new(tiers: BonusTiers) -> Self {
        ProfitTierBonus { tiers }
    }
}

impl BonusStrategy for ProfitTierBonus {
    fn bonus(&self, rank: usize, total_sellers: usize, seller: &SellerAccumulator) -> f64 {
        if rank == 0 {
            seller.profit * self.tiers.top
        } else if rank == 1 || rank == 2 {
            seller.profit * self.tiers.runner_up
        } else if rank + 1 == total_sellers {
            0.0
        } else {
            seller.profit * self.tiers.middle
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, sale_price: f64, discount: f64) -> LineItem {
        LineItem {
            sku: "SKU_001".to_string(),
            quantity,
            sale_price,
            discount,
        }
    }

    fn product() -> Product {
        Product {
            sku: "SKU_001".to_string(),
            purchase_price: 50.0,
        }
    }

    fn seller_with_profit(profit: f64) -> SellerAccumulator {
        let mut seller = SellerAccumulator::new("seller_1", "Ivan Ivanov");
        seller.profit = profit;
        seller
    }

    #[test]
    fn test_simple_revenue_with_discount() {
        let revenue = SimpleRevenue.revenue(&item(2, 100.0, 10.0), &product());
        assert!((revenue - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_simple_revenue_without_discount() {
        let revenue = SimpleRevenue.revenue(&item(3, 25.5, 0.0), &product());
        assert!((revenue - 76.5).abs() < 1e-9);
    }

    #[test]
    fn test_simple_revenue_full_discount() {
        let revenue = SimpleRevenue.revenue(&item(4, 99.0, 100.0), &product());
        assert_eq!(revenue, 0.0);
    }

    #[test]
    fn test_closure_as_revenue_strategy() {
        let flat = |_: &LineItem, _: &Product| 7.0;
        assert_eq!(flat.revenue(&item(1, 1.0, 0.0), &product()), 7.0);
    }

    #[test]
    fn test_fn_item_as_bonus_strategy() {
        fn nothing(_: usize, _: usize, _: &SellerAccumulator) -> f64 {
            0.0
        }
        assert_eq!(nothing.bonus(0, 1, &seller_with_profit(100.0)), 0.0);
    }

    #[test]
    fn test_bonus_tiers() {
        let strategy = ProfitTierBonus::default();
        let seller = seller_with_profit(1000.0);
        let total = 5;

        let bonuses: Vec<f64> = (0..total)
            .map(|rank| strategy.bonus(rank, total, &seller))
            .collect();

        assert!((bonuses[0] - 150.0).abs() < 1e-9);
        assert!((bonuses[1] - 100.0).abs() < 1e-9);
        assert!((bonuses[2] - 100.0).abs() < 1e-9);
        assert!((bonuses[3] - 50.0).abs() < 1e-9);
        assert_eq!(bonuses[4], 0.0);
    }

    #[test]
    fn test_single_seller_gets_top_bonus() {
        let strategy = ProfitTierBonus::default();
        let bonus = strategy.bonus(0, 1, &seller_with_profit(80.0));
        assert!((bonus - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_runner_up_wins_over_last_rank() {
        let strategy = ProfitTierBonus::default();
        let seller = seller_with_profit(200.0);

        // Two sellers: rank 1 is also the last rank.
        assert!((strategy.bonus(1, 2, &seller) - 20.0).abs() < 1e-9);
        // Three sellers: rank 2 is also the last rank.
        assert!((strategy.bonus(2, 3, &seller) - 20.0).abs() < 1e-9);
        // Four sellers: rank 3 is last and not a runner-up.
        assert_eq!(strategy.bonus(3, 4, &seller), 0.0);
    }

    #[test]
    fn test_custom_tiers() {
        let strategy = ProfitTierBonus::new(BonusTiers {
            top: 0.2,
            runner_up: 0.1,
            middle: 0.01,
        });
        let seller = seller_with_profit(100.0);

        assert!((strategy.bonus(0, 6, &seller) - 20.0).abs() < 1e-9);
        assert!((strategy.bonus(4, 6, &seller) - 1.0).abs() < 1e-9);
        assert_eq!(strategy.bonus(5, 6, &seller), 0.0);
    }

    #[test]
    fn test_negative_profit_bonus_follows_sign() {
        let strategy = ProfitTierBonus::default();
        let bonus = strategy.bonus(0, 3, &seller_with_profit(-100.0));
        assert!((bonus + 15.0).abs() < 1e-9);
    }
}
