//! Report endpoints
//!
//! Aggregates are computed server-side; these are read-only.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::models::{InventoryReport, SalesReport};
use shared::response::ApiResponse;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

pub struct ReportApi<C> {
    http: Arc<C>,
}

impl<C> Clone for ReportApi<C> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

impl<C: HttpClient> ReportApi<C> {
    pub(crate) fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    pub async fn sales(&self, from: NaiveDate, to: NaiveDate) -> ClientResult<SalesReport> {
        self.http
            .get_with_query::<ApiResponse<SalesReport>>(
                "/reports/sales",
                &[("from", from.to_string()), ("to", to.to_string())],
            )
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing report data".to_string()))
    }

    pub async fn inventory(&self) -> ClientResult<InventoryReport> {
        self.http
            .get::<ApiResponse<InventoryReport>>("/reports/inventory")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing report data".to_string()))
    }
}
