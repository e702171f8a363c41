//! Stock endpoints
//!
//! The variants listing goes through the query cache; every identical
//! parameter tuple reuses the cached page until a stock operation
//! invalidates the scope. Stock operations post a movement and
//! invalidate on success.

use std::sync::Arc;

use shared::models::{
    PhysicalCount, StockAdjust, StockEntry, StockExit, StockMovement, StockVariantDetail,
    StockVariantItem,
};
use shared::query::StockVariantQuery;
use shared::response::{ApiResponse, Paginated};

use crate::cache::QueryCache;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

/// Cache scope for the variants listing
pub const STOCK_VARIANTS_SCOPE: &str = "stock-variants";

const VARIANTS_PATH: &str = "/inventory/stocks/variants";

pub struct StockApi<C> {
    http: Arc<C>,
    cache: Arc<QueryCache>,
}

impl<C> Clone for StockApi<C> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            cache: self.cache.clone(),
        }
    }
}

impl<C: HttpClient> StockApi<C> {
    pub(crate) fn new(http: Arc<C>, cache: Arc<QueryCache>) -> Self {
        Self { http, cache }
    }

    /// List stock variants, server-paginated and server-sorted
    pub async fn list_variants(
        &self,
        query: &StockVariantQuery,
    ) -> ClientResult<Paginated<StockVariantItem>> {
        let key = QueryCache::scoped_key(STOCK_VARIANTS_SCOPE, &query.cache_key());
        let http = self.http.clone();
        let pairs = query.to_query_pairs();

        let value = self
            .cache
            .get_or_fetch(&key, async move {
                http.get_with_query::<serde_json::Value>(VARIANTS_PATH, &pairs)
                    .await
            })
            .await
            .map_err(|e| ClientError::Fetch(e.0))?;

        serde_json::from_value((*value).clone()).map_err(Into::into)
    }

    /// Cached page for a parameter tuple, if any (stale-while-revalidate)
    pub fn peek_page(&self, query: &StockVariantQuery) -> Option<Paginated<StockVariantItem>> {
        let key = QueryCache::scoped_key(STOCK_VARIANTS_SCOPE, &query.cache_key());
        let value = self.cache.peek(&key)?;
        serde_json::from_value((*value).clone()).ok()
    }

    /// Richer per-variant detail (per-warehouse rows, recent movements)
    pub async fn variant_detail(&self, variant_id: &str) -> ClientResult<StockVariantDetail> {
        self.http
            .get(&format!("/inventory/stocks/variant/{}/detail", variant_id))
            .await
    }

    // ========== Stock operations ==========

    /// Record goods received
    pub async fn entry(&self, payload: &StockEntry) -> ClientResult<StockMovement> {
        self.mutate("/inventory/stocks/operations/entry", payload).await
    }

    /// Record goods dispatched
    pub async fn exit(&self, payload: &StockExit) -> ClientResult<StockMovement> {
        self.mutate("/inventory/stocks/operations/exit", payload).await
    }

    /// Record a manual adjustment
    pub async fn adjust(&self, payload: &StockAdjust) -> ClientResult<StockMovement> {
        self.mutate("/inventory/stocks/operations/adjust", payload).await
    }

    /// Record a physical count
    pub async fn physical_count(&self, payload: &PhysicalCount) -> ClientResult<StockMovement> {
        self.mutate("/inventory/stocks/operations/physical-count", payload)
            .await
    }

    async fn mutate<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        payload: &B,
    ) -> ClientResult<StockMovement> {
        let movement = self
            .http
            .post::<ApiResponse<StockMovement>, _>(path, payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing movement data".to_string()))?;

        // Quantities changed; listings must refetch
        self.cache.invalidate_scope(STOCK_VARIANTS_SCOPE);

        Ok(movement)
    }
}
