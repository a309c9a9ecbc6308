//! # Report Module
//!
//! Projects ranked accumulators into [`SellerReport`] records.
//!
//! Revenue, profit and bonus are rounded to cents here, once, with the
//! same rule as [`Money::from_amount`]. Everything else is copied as is.

use crate::aggregator::SellerAccumulator;
use crate::money::Money;
use crate::types::SellerReport;

/// Builds the report for one ranked seller.
pub fn seller_report(seller: SellerAccumulator) -> SellerReport {
    SellerReport {
        seller_id: seller.id,
        name: seller.name,
        revenue: Money::from_amount(seller.revenue),
        profit: Money::from_amount(seller.profit),
        sales_count: seller.sales_count,
        top_products: seller.top_products,
        bonus: Money::from_amount(seller.bonus),
    }
}

/// Builds the reports, keeping the ranked order.
pub fn format_reports(ranked: Vec<SellerAccumulator>) -> Vec<SellerReport> {
    ranked.into_iter().map(seller_report).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TopProduct;

    fn ranked_seller(id: &str, revenue: f64, profit: f64, bonus: f64) -> SellerAccumulator {
        let mut seller = SellerAccumulator::new(id, format!("Name {}", id));
        seller.revenue = revenue;
        seller.profit = profit;
        seller.bonus = bonus;
        seller.sales_count = 3;
        seller.top_products = vec![TopProduct {
            sku: "SKU_001".to_string(),
            quantity: 4,
        }];
        seller
    }

    #[test]
    fn test_seller_report_rounds_money() {
        let report = seller_report(ranked_seller("seller_1", 1234.5678, 99.999, 14.99985));

        assert_eq!(report.seller_id, "seller_1");
        assert_eq!(report.name, "Name seller_1");
        assert_eq!(report.revenue.cents(), 123457);
        assert_eq!(report.profit.cents(), 10000);
        assert_eq!(report.bonus.cents(), 1500);
        assert_eq!(report.sales_count, 3);
        assert_eq!(report.top_products[0].quantity, 4);
    }

    #[test]
    fn test_seller_report_keeps_negative_profit() {
        let report = seller_report(ranked_seller("seller_1", 10.0, -25.456, -3.8184));
        assert_eq!(report.profit.cents(), -2546);
        assert_eq!(report.bonus.cents(), -382);
    }

    #[test]
    fn test_format_reports_keeps_order() {
        let reports = format_reports(vec![
            ranked_seller("b", 0.0, 20.0, 0.0),
            ranked_seller("a", 0.0, 10.0, 0.0),
        ]);

        let ids: Vec<&str> = reports.iter().map(|r| r.seller_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
