//! Warehouse endpoints
//!
//! Consumed mainly for filter dropdowns; the listing filters by
//! warehouse id.

use std::sync::Arc;

use shared::models::{Warehouse, WarehouseCreate, WarehouseUpdate};
use shared::response::ApiResponse;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

pub struct WarehouseApi<C> {
    http: Arc<C>,
}

impl<C> Clone for WarehouseApi<C> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

impl<C: HttpClient> WarehouseApi<C> {
    pub(crate) fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Warehouse>> {
        self.http
            .get::<ApiResponse<Vec<Warehouse>>>("/inventory/warehouses")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing warehouse data".to_string()))
    }

    pub async fn get(&self, id: &str) -> ClientResult<Warehouse> {
        self.http
            .get::<ApiResponse<Warehouse>>(&format!("/inventory/warehouses/{}", id))
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing warehouse data".to_string()))
    }

    pub async fn create(&self, payload: &WarehouseCreate) -> ClientResult<Warehouse> {
        self.http
            .post::<ApiResponse<Warehouse>, _>("/inventory/warehouses", payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing warehouse data".to_string()))
    }

    pub async fn update(&self, id: &str, payload: &WarehouseUpdate) -> ClientResult<Warehouse> {
        self.http
            .put::<ApiResponse<Warehouse>, _>(&format!("/inventory/warehouses/{}", id), payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing warehouse data".to_string()))
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http
            .delete::<ApiResponse<()>>(&format!("/inventory/warehouses/{}", id))
            .await?;
        Ok(())
    }
}
