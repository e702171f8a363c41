//! Movement-history endpoints

use std::sync::Arc;

use shared::models::StockMovement;
use shared::query::MovementQuery;
use shared::response::Paginated;

use crate::error::ClientResult;
use crate::http::HttpClient;

pub struct MovementApi<C> {
    http: Arc<C>,
}

impl<C> Clone for MovementApi<C> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

impl<C: HttpClient> MovementApi<C> {
    pub(crate) fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &MovementQuery) -> ClientResult<Paginated<StockMovement>> {
        self.http
            .get_with_query("/inventory/stocks/movements", &query.to_query_pairs())
            .await
    }
}
