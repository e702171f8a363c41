//! Stock models
//!
//! The stock-variant listing row, its derived status, and the richer
//! per-variant detail object.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::movement::StockMovement;
use crate::types::BadgeVariant;

/// Stock status assigned by the server
///
/// Classification happens server-side against the per-warehouse
/// minimum-stock thresholds; the client only maps the delivered value
/// to display attributes. Unrecognized values fall back to `Unknown`
/// instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    #[serde(other)]
    #[default]
    Unknown,
}

impl StockStatus {
    /// Display label for the status badge
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Unknown => "Unknown",
        }
    }

    /// Badge variant for the status badge
    pub fn badge(&self) -> BadgeVariant {
        match self {
            StockStatus::InStock => BadgeVariant::Success,
            StockStatus::LowStock => BadgeVariant::Warning,
            StockStatus::OutOfStock => BadgeVariant::Destructive,
            StockStatus::Unknown => BadgeVariant::Default,
        }
    }
}

/// One row of the stock-variant listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockVariantItem {
    pub product_variant_id: String,
    pub sku: String,
    pub product_name: String,
    pub variant_name: String,
    pub category_name: Option<String>,
    /// Total on-hand quantity across warehouses
    pub total_quantity: i64,
    /// Quantity reserved by open orders
    pub total_reserved: i64,
    /// Server-computed available quantity; may be absent on older API
    /// versions
    pub total_available: Option<i64>,
    pub warehouse_count: u32,
    pub last_movement: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: StockStatus,
    pub image_url: Option<String>,
    pub cost: Option<Decimal>,
}

impl StockVariantItem {
    /// Available quantity
    ///
    /// Trusts the server-computed value when present; derives
    /// `total_quantity - total_reserved` only when the field is
    /// missing. The API is the trust boundary for the invariant
    /// `available <= quantity`.
    pub fn available(&self) -> i64 {
        self.total_available
            .unwrap_or(self.total_quantity - self.total_reserved)
    }
}

/// Per-warehouse stock row inside the variant detail
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseStock {
    pub warehouse_id: String,
    pub warehouse_name: String,
    pub quantity: i64,
    pub reserved: i64,
    /// Low-stock threshold configured for this warehouse
    pub min_stock: i64,
}

/// Richer per-variant detail object
///
/// Served by `/inventory/stocks/variant/:id/detail`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockVariantDetail {
    #[serde(flatten)]
    pub item: StockVariantItem,
    #[serde(default)]
    pub warehouses: Vec<WarehouseStock>,
    #[serde(default)]
    pub recent_movements: Vec<StockMovement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_total() {
        // Every status maps to exactly one label/badge pair
        let cases = [
            (StockStatus::InStock, "In Stock", BadgeVariant::Success),
            (StockStatus::LowStock, "Low Stock", BadgeVariant::Warning),
            (
                StockStatus::OutOfStock,
                "Out of Stock",
                BadgeVariant::Destructive,
            ),
            (StockStatus::Unknown, "Unknown", BadgeVariant::Default),
        ];
        for (status, label, badge) in cases {
            assert_eq!(status.label(), label);
            assert_eq!(status.badge(), badge);
            // Deterministic on repeated calls
            assert_eq!(status.label(), status.label());
        }
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::from_str::<StockStatus>("\"IN_STOCK\"").unwrap(),
            StockStatus::InStock
        );
        assert_eq!(
            serde_json::from_str::<StockStatus>("\"OUT_OF_STOCK\"").unwrap(),
            StockStatus::OutOfStock
        );
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let status: StockStatus = serde_json::from_str("\"BACKORDERED\"").unwrap();
        assert_eq!(status, StockStatus::Unknown);
        assert_eq!(status.badge(), BadgeVariant::Default);
    }

    #[test]
    fn test_available_prefers_server_value() {
        let mut item = sample_item();
        item.total_quantity = 10;
        item.total_reserved = 4;
        item.total_available = Some(5);
        assert_eq!(item.available(), 5);

        item.total_available = None;
        assert_eq!(item.available(), 6);
    }

    #[test]
    fn test_item_deserializes_camel_case() {
        let json = r#"{
            "productVariantId": "pv-1",
            "sku": "JRS-S",
            "productName": "Club Jersey",
            "variantName": "Small",
            "categoryName": "Apparel",
            "totalQuantity": 5,
            "totalReserved": 1,
            "totalAvailable": 4,
            "warehouseCount": 2,
            "lastMovement": null,
            "status": "IN_STOCK",
            "imageUrl": null,
            "cost": "12.50"
        }"#;
        let item: StockVariantItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.sku, "JRS-S");
        assert_eq!(item.status, StockStatus::InStock);
        assert_eq!(item.available(), 4);
    }

    fn sample_item() -> StockVariantItem {
        StockVariantItem {
            product_variant_id: "pv-1".into(),
            sku: "SKU-1".into(),
            product_name: "Product".into(),
            variant_name: "Variant".into(),
            category_name: None,
            total_quantity: 0,
            total_reserved: 0,
            total_available: None,
            warehouse_count: 0,
            last_movement: None,
            status: StockStatus::Unknown,
            image_url: None,
            cost: None,
        }
    }
}
