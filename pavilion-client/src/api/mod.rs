//! Typed API surface
//!
//! One module per resource. Every API handle shares the HTTP client
//! and the injected query cache; handles are cheap to clone into
//! spawned fetch tasks.

pub mod categories;
pub mod clubs;
pub mod movements;
pub mod products;
pub mod reports;
pub mod stocks;
pub mod warehouses;

pub use categories::CategoryApi;
pub use clubs::ClubApi;
pub use movements::MovementApi;
pub use products::ProductApi;
pub use reports::ReportApi;
pub use stocks::{STOCK_VARIANTS_SCOPE, StockApi};
pub use warehouses::WarehouseApi;

use std::sync::Arc;

use crate::cache::QueryCache;
use crate::http::HttpClient;

/// Entry point to the inventory API
pub struct InventoryClient<C> {
    http: Arc<C>,
    cache: Arc<QueryCache>,
}

impl<C: HttpClient> InventoryClient<C> {
    pub fn new(http: C) -> Self {
        Self::with_cache(http, Arc::new(QueryCache::new()))
    }

    /// Use a shared cache (several clients, one cache)
    pub fn with_cache(http: C, cache: Arc<QueryCache>) -> Self {
        Self {
            http: Arc::new(http),
            cache,
        }
    }

    pub fn cache(&self) -> Arc<QueryCache> {
        self.cache.clone()
    }

    pub fn stocks(&self) -> StockApi<C> {
        StockApi::new(self.http.clone(), self.cache.clone())
    }

    pub fn warehouses(&self) -> WarehouseApi<C> {
        WarehouseApi::new(self.http.clone())
    }

    pub fn clubs(&self) -> ClubApi<C> {
        ClubApi::new(self.http.clone())
    }

    pub fn products(&self) -> ProductApi<C> {
        ProductApi::new(self.http.clone(), self.cache.clone())
    }

    pub fn categories(&self) -> CategoryApi<C> {
        CategoryApi::new(self.http.clone())
    }

    pub fn movements(&self) -> MovementApi<C> {
        MovementApi::new(self.http.clone())
    }

    pub fn reports(&self) -> ReportApi<C> {
        ReportApi::new(self.http.clone())
    }
}

impl<C> Clone for InventoryClient<C> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            cache: self.cache.clone(),
        }
    }
}
