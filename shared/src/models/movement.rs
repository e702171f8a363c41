//! Stock movement models
//!
//! Movement history rows and the stock-operation payloads that create
//! them. Operations carry the acting user id supplied by the auth
//! context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Movement type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    Entry,
    Exit,
    Adjustment,
    Transfer,
    PhysicalCount,
}

impl MovementType {
    pub fn label(&self) -> &'static str {
        match self {
            MovementType::Entry => "Entry",
            MovementType::Exit => "Exit",
            MovementType::Adjustment => "Adjustment",
            MovementType::Transfer => "Transfer",
            MovementType::PhysicalCount => "Physical Count",
        }
    }
}

/// Stock movement history row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: String,
    pub product_variant_id: String,
    pub warehouse_id: String,
    pub movement_type: MovementType,
    /// Signed quantity delta (negative for exits)
    pub quantity: i64,
    pub performed_by: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Stock entry payload (goods received)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    pub product_variant_id: String,
    pub warehouse_id: String,
    pub quantity: i64,
    pub performed_by: String,
    pub note: Option<String>,
}

/// Stock exit payload (goods dispatched)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockExit {
    pub product_variant_id: String,
    pub warehouse_id: String,
    pub quantity: i64,
    pub performed_by: String,
    pub note: Option<String>,
}

/// Manual adjustment payload (signed delta)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjust {
    pub product_variant_id: String,
    pub warehouse_id: String,
    pub delta: i64,
    pub performed_by: String,
    pub reason: String,
}

/// Physical count payload (absolute counted quantity)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalCount {
    pub product_variant_id: String,
    pub warehouse_id: String,
    pub counted_quantity: i64,
    pub performed_by: String,
    pub note: Option<String>,
}
