//! Category endpoints

use std::sync::Arc;

use shared::models::Category;
use shared::response::ApiResponse;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

pub struct CategoryApi<C> {
    http: Arc<C>,
}

impl<C> Clone for CategoryApi<C> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

impl<C: HttpClient> CategoryApi<C> {
    pub(crate) fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Category>> {
        self.http
            .get::<ApiResponse<Vec<Category>>>("/categories")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing category data".to_string()))
    }
}
