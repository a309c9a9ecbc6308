//! # Domain Types
//!
//! Input datasets and output records of the seller statistics pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT (SalesData)                                                      │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Seller      │   │     Product     │   │ PurchaseRecord  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  sku            │   │  seller_id (FK) │       │
//! │  │  first_name     │   │  purchase_price │   │  items ──┐      │       │
//! │  │  last_name      │   └─────────────────┘   └──────────┼──────┘       │
//! │  └─────────────────┘                                    ▼              │
//! │                                               ┌─────────────────┐       │
//! │                                               │    LineItem     │       │
//! │                                               │  sku (FK)       │       │
//! │                                               │  quantity       │       │
//! │                                               │  sale_price     │       │
//! │                                               │  discount (%)   │       │
//! │                                               └─────────────────┘       │
//! │                                                                         │
//! │  OUTPUT                                                                 │
//! │  ┌──────────────────────────────┐   ┌─────────────────┐                │
//! │  │        SellerReport          │   │   TopProduct    │                │
//! │  │  seller_id, name             │──►│  sku, quantity  │ (≤ 10)         │
//! │  │  revenue, profit, bonus      │   └─────────────────┘                │
//! │  │  sales_count                 │                                      │
//! │  └──────────────────────────────┘                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Inputs are deserialized by the surrounding program; extra fields such as
//! a product `name` or a record `receipt_id` are ignored.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Seller
// =============================================================================

/// A seller being ranked and scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Seller {
    /// Unique seller identifier.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Display name: first and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry with its cost basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stock Keeping Unit - unique catalog key.
    pub sku: String,

    /// Unit cost paid by the business.
    pub purchase_price: f64,
}

// =============================================================================
// Purchase Record
// =============================================================================

/// One product line within a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    /// Unit sale price before discount.
    pub sale_price: f64,
    /// Discount percentage, 0-100.
    pub discount: f64,
}

/// One checkout event by one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseRecord {
    pub seller_id: String,
    pub items: Vec<LineItem>,
}

// =============================================================================
// Sales Data
// =============================================================================

/// The three input datasets handed over by the data loader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

// =============================================================================
// Report Records
// =============================================================================

/// A best-selling product of one seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopProduct {
    pub sku: String,
    /// Cumulative quantity sold by the seller.
    #[ts(type = "number")]
    pub quantity: u64,
}

/// Final per-seller statistics, in profit-descending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    #[ts(type = "number")]
    pub revenue: Money,
    #[ts(type = "number")]
    pub profit: Money,
    /// Number of purchase records attributed to the seller.
    #[ts(type = "number")]
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    #[ts(type = "number")]
    pub bonus: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_full_name() {
        let seller = Seller {
            id: "seller_1".to_string(),
            first_name: "Alexey".to_string(),
            last_name: "Petrov".to_string(),
        };
        assert_eq!(seller.full_name(), "Alexey Petrov");
    }

    #[test]
    fn test_sales_data_ignores_extra_fields() {
        let json = r#"{
            "sellers": [
                { "id": "seller_1", "first_name": "Alexey", "last_name": "Petrov",
                  "start_date": "2024-01-01", "position": "Senior Seller" }
            ],
            "products": [
                { "name": "Coffee", "category": "Drinks", "sku": "SKU_001",
                  "purchase_price": 50.5, "sale_price": 80 }
            ],
            "purchase_records": [
                { "receipt_id": "receipt_1", "date": "2023-12-04", "seller_id": "seller_1",
                  "customer_id": "customer_1", "total_amount": 160, "total_discount": 0,
                  "items": [ { "sku": "SKU_001", "discount": 0, "quantity": 2, "sale_price": 80 } ] }
            ]
        }"#;

        let data: SalesData = serde_json::from_str(json).unwrap();
        assert_eq!(data.sellers.len(), 1);
        assert_eq!(data.products[0].purchase_price, 50.5);
        assert_eq!(data.purchase_records[0].items[0].quantity, 2);
        assert_eq!(data.purchase_records[0].items[0].sale_price, 80.0);
    }

    #[test]
    fn test_seller_report_json_shape() {
        let report = SellerReport {
            seller_id: "seller_1".to_string(),
            name: "Alexey Petrov".to_string(),
            revenue: Money::from_cents(18000),
            profit: Money::from_cents(8000),
            sales_count: 1,
            top_products: vec![TopProduct {
                sku: "SKU_001".to_string(),
                quantity: 2,
            }],
            bonus: Money::from_cents(1200),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["seller_id"], "seller_1");
        assert_eq!(value["revenue"], 180.0);
        assert_eq!(value["profit"], 80.0);
        assert_eq!(value["bonus"], 12.0);
        assert_eq!(value["sales_count"], 1);
        assert_eq!(value["top_products"][0]["sku"], "SKU_001");
        assert_eq!(value["top_products"][0]["quantity"], 2);
    }
}
