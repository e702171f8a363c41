//! Report read models
//!
//! Aggregates computed server-side; the dashboard only renders them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sales report summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub revenue: Decimal,
    pub units_sold: i64,
    pub order_count: i64,
    #[serde(default)]
    pub top_variants: Vec<TopVariant>,
}

/// Top-selling variant row inside the sales report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopVariant {
    pub product_variant_id: String,
    pub sku: String,
    pub product_name: String,
    pub units_sold: i64,
    pub revenue: Decimal,
}

/// Inventory report summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub total_variants: u64,
    pub total_quantity: i64,
    pub low_stock_count: u64,
    pub out_of_stock_count: u64,
    /// Stock valuation at unit cost
    pub valuation: Decimal,
}
