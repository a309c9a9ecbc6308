//! # Ranker Module
//!
//! Orders sellers by profit and annotates each with its bonus and
//! best-selling products.
//!
//! ## Ordering
//! - Sellers: profit descending, stable. Equal profits keep the input
//!   seller order.
//! - Top products: quantity descending, stable. Equal quantities keep the
//!   order in which the SKUs were first sold.

use tracing::debug;

use crate::aggregator::{SellerAccumulator, SellerStats, SoldQuantities};
use crate::strategy::BonusStrategy;
use crate::types::TopProduct;

/// Sorts the accumulators by profit and assigns `bonus` and `top_products`.
///
/// `bonus_strategy` is called once per seller with its 0-based rank and the
/// total number of sellers.
pub fn rank<B>(stats: SellerStats, bonus_strategy: &B, top_limit: usize) -> Vec<SellerAccumulator>
where
    B: BonusStrategy + ?Sized,
{
    let mut sellers = stats.into_vec();
    sellers.sort_by(|a, b| b.profit.total_cmp(&a.profit));

    let total = sellers.len();
    for (position, seller) in sellers.iter_mut().enumerate() {
        seller.bonus = bonus_strategy.bonus(position, total, seller);
        seller.top_products = top_products(&seller.products_sold, top_limit);

        debug!(
            seller_id = %seller.id,
            rank = position,
            profit = seller.profit,
            bonus = seller.bonus,
            "Ranked seller"
        );
    }

    sellers
}

/// The `limit` most-sold SKUs, by cumulative quantity descending.
pub fn top_products(sold: &SoldQuantities, limit: usize) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = sold
        .iter()
        .map(|(sku, quantity)| TopProduct {
            sku: sku.to_string(),
            quantity,
        })
        .collect();

    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(limit);
    products
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::strategy::{ProfitTierBonus, SimpleRevenue};
    use crate::types::{LineItem, Product, PurchaseRecord, Seller};

    fn seller(id: &str) -> Seller {
        Seller {
            id: id.to_string(),
            first_name: "Seller".to_string(),
            last_name: id.to_string(),
        }
    }

    /// One record per seller selling `units` of SKU_001 at a 1.00 margin.
    fn stats_with_units(units: &[(&str, u32)]) -> SellerStats {
        let sellers: Vec<Seller> = units.iter().map(|(id, _)| seller(id)).collect();
        let products = vec![Product {
            sku: "SKU_001".to_string(),
            purchase_price: 1.0,
        }];
        let records: Vec<PurchaseRecord> = units
            .iter()
            .filter(|(_, qty)| *qty > 0)
            .map(|(id, qty)| PurchaseRecord {
                seller_id: id.to_string(),
                items: vec![LineItem {
                    sku: "SKU_001".to_string(),
                    quantity: *qty,
                    sale_price: 2.0,
                    discount: 0.0,
                }],
            })
            .collect();
        aggregate(&sellers, &products, &records, &SimpleRevenue).unwrap()
    }

    #[test]
    fn test_rank_sorts_by_profit_descending() {
        let stats = stats_with_units(&[("low", 1), ("high", 30), ("mid", 10)]);
        let ranked = rank(stats, &ProfitTierBonus::default(), 10);

        let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let stats = stats_with_units(&[("a", 5), ("b", 9), ("c", 5), ("d", 5)]);
        let ranked = rank(stats, &ProfitTierBonus::default(), 10);

        let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_rank_passes_position_and_total_to_bonus() {
        let stats = stats_with_units(&[("a", 1), ("b", 2), ("c", 3)]);
        let encode = |position: usize, total: usize, _: &SellerAccumulator| (position * 10 + total) as f64;
        let ranked = rank(stats, &encode, 10);

        let bonuses: Vec<f64> = ranked.iter().map(|s| s.bonus).collect();
        assert_eq!(bonuses, vec![3.0, 13.0, 23.0]);
    }

    #[test]
    fn test_three_sellers_tier_bonuses() {
        let stats = stats_with_units(&[("c", 100), ("a", 300), ("b", 200)]);
        let ranked = rank(stats, &ProfitTierBonus::default(), 10);

        assert!((ranked[0].bonus - 45.0).abs() < 1e-9);
        assert!((ranked[1].bonus - 20.0).abs() < 1e-9);
        // Rank 2 of 3 is a runner-up before it is the last rank.
        assert!((ranked[2].bonus - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_sales_seller_is_ranked_last_with_no_products() {
        let stats = stats_with_units(&[("idle", 0), ("busy", 4)]);
        let ranked = rank(stats, &ProfitTierBonus::default(), 10);

        assert_eq!(ranked[1].id, "idle");
        assert!(ranked[1].top_products.is_empty());
        assert_eq!(ranked[1].bonus, 0.0);
    }

    #[test]
    fn test_top_products_sorted_and_capped() {
        let mut sold = SoldQuantities::new();
        for n in 1..=12u64 {
            sold.add(&format!("SKU_{:03}", n), n);
        }

        let top = top_products(&sold, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].sku, "SKU_012");
        assert_eq!(top[0].quantity, 12);
        assert_eq!(top[9].sku, "SKU_003");
        assert!(top.windows(2).all(|pair| pair[0].quantity >= pair[1].quantity));
    }

    #[test]
    fn test_top_products_fewer_than_limit() {
        let mut sold = SoldQuantities::new();
        sold.add("SKU_A", 1);
        sold.add("SKU_B", 7);

        let top = top_products(&sold, 10);
        assert_eq!(
            top,
            vec![
                TopProduct {
                    sku: "SKU_B".to_string(),
                    quantity: 7
                },
                TopProduct {
                    sku: "SKU_A".to_string(),
                    quantity: 1
                },
            ]
        );
    }

    #[test]
    fn test_top_products_ties_keep_first_sold_order() {
        let mut sold = SoldQuantities::new();
        sold.add("SKU_C", 3);
        sold.add("SKU_A", 3);
        sold.add("SKU_B", 3);

        let skus: Vec<String> = top_products(&sold, 10).into_iter().map(|p| p.sku).collect();
        assert_eq!(skus, vec!["SKU_C", "SKU_A", "SKU_B"]);
    }
}
