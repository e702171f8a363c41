//! Listing query parameters
//!
//! Ephemeral UI state serialized into the stock-variant listing
//! request. The canonical string form doubles as the cache key, so
//! field order is fixed.

use serde::{Deserialize, Serialize};

/// Sortable columns of the stock-variant listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Sku,
    #[default]
    ProductName,
    TotalQuantity,
    LastMovement,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Sku => "sku",
            SortBy::ProductName => "productName",
            SortBy::TotalQuantity => "totalQuantity",
            SortBy::LastMovement => "lastMovement",
        }
    }

    /// Column cycle order used by the dashboard sort key
    pub fn next(&self) -> Self {
        match self {
            SortBy::Sku => SortBy::ProductName,
            SortBy::ProductName => SortBy::TotalQuantity,
            SortBy::TotalQuantity => SortBy::LastMovement,
            SortBy::LastMovement => SortBy::Sku,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Query parameters for the stock-variant listing endpoint
///
/// Defaults match a fresh listing screen: page 1, 10 rows, sorted by
/// product name ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockVariantQuery {
    /// Page number (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for StockVariantQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
            warehouse_id: None,
            product_id: None,
            category_id: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl StockVariantQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: u32, limit: u32) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    pub fn order_by(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn in_warehouse(mut self, warehouse_id: impl Into<String>) -> Self {
        self.warehouse_id = Some(warehouse_id.into());
        self
    }

    /// GET query pairs, unset optionals omitted
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(id) = &self.warehouse_id {
            pairs.push(("warehouseId", id.clone()));
        }
        if let Some(id) = &self.product_id {
            pairs.push(("productId", id.clone()));
        }
        if let Some(id) = &self.category_id {
            pairs.push(("categoryId", id.clone()));
        }
        pairs.push(("sortBy", self.sort_by.as_str().to_string()));
        pairs.push(("sortOrder", self.sort_order.as_str().to_string()));
        pairs
    }

    /// Canonical serialized parameter tuple
    ///
    /// Identical parameter sets always produce identical keys; the
    /// query cache relies on this.
    pub fn cache_key(&self) -> String {
        self.to_query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Query parameters for the movement-history listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_variant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<String>,
}

impl Default for MovementQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            product_variant_id: None,
            warehouse_id: None,
        }
    }
}

impl MovementQuery {
    pub fn for_variant(variant_id: impl Into<String>) -> Self {
        Self {
            product_variant_id: Some(variant_id.into()),
            ..Self::default()
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(id) = &self.product_variant_id {
            pairs.push(("productVariantId", id.clone()));
        }
        if let Some(id) = &self.warehouse_id {
            pairs.push(("warehouseId", id.clone()));
        }
        pairs
    }
}
