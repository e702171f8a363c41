//! Warehouse models

use serde::{Deserialize, Serialize};

/// Warehouse entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub is_active: bool,
}

/// Create warehouse payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseCreate {
    pub name: String,
    pub code: String,
    pub address: Option<String>,
}

/// Update warehouse payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseUpdate {
    pub name: Option<String>,
    pub code: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}
