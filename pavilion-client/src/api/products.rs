//! Product and variant endpoints
//!
//! Product and variant mutations change names and SKUs that appear in
//! stock listing rows, so they invalidate the stock-variants scope.

use std::sync::Arc;

use shared::models::{
    Product, ProductCreate, ProductUpdate, ProductVariant, ProductVariantCreate,
    ProductVariantUpdate,
};
use shared::response::{ApiResponse, Paginated};

use crate::api::stocks::STOCK_VARIANTS_SCOPE;
use crate::cache::QueryCache;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

pub struct ProductApi<C> {
    http: Arc<C>,
    cache: Arc<QueryCache>,
}

impl<C> Clone for ProductApi<C> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            cache: self.cache.clone(),
        }
    }
}

impl<C: HttpClient> ProductApi<C> {
    pub(crate) fn new(http: Arc<C>, cache: Arc<QueryCache>) -> Self {
        Self { http, cache }
    }

    pub async fn list(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> ClientResult<Paginated<Product>> {
        let mut pairs = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(search) = search {
            pairs.push(("search", search.to_string()));
        }
        self.http.get_with_query("/products", &pairs).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Product> {
        self.http
            .get::<ApiResponse<Product>>(&format!("/products/{}", id))
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing product data".to_string()))
    }

    pub async fn variants_of(&self, product_id: &str) -> ClientResult<Vec<ProductVariant>> {
        self.http
            .get::<ApiResponse<Vec<ProductVariant>>>(&format!("/products/{}/variants", product_id))
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing variant data".to_string()))
    }

    pub async fn create(&self, payload: &ProductCreate) -> ClientResult<Product> {
        let product = self
            .http
            .post::<ApiResponse<Product>, _>("/products", payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing product data".to_string()))?;
        self.cache.invalidate_scope(STOCK_VARIANTS_SCOPE);
        Ok(product)
    }

    pub async fn update(&self, id: &str, payload: &ProductUpdate) -> ClientResult<Product> {
        let product = self
            .http
            .put::<ApiResponse<Product>, _>(&format!("/products/{}", id), payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing product data".to_string()))?;
        self.cache.invalidate_scope(STOCK_VARIANTS_SCOPE);
        Ok(product)
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http
            .delete::<ApiResponse<()>>(&format!("/products/{}", id))
            .await?;
        self.cache.invalidate_scope(STOCK_VARIANTS_SCOPE);
        Ok(())
    }

    pub async fn create_variant(
        &self,
        payload: &ProductVariantCreate,
    ) -> ClientResult<ProductVariant> {
        let variant = self
            .http
            .post::<ApiResponse<ProductVariant>, _>(
                &format!("/products/{}/variants", payload.product_id),
                payload,
            )
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing variant data".to_string()))?;
        self.cache.invalidate_scope(STOCK_VARIANTS_SCOPE);
        Ok(variant)
    }

    pub async fn update_variant(
        &self,
        variant_id: &str,
        payload: &ProductVariantUpdate,
    ) -> ClientResult<ProductVariant> {
        let variant = self
            .http
            .put::<ApiResponse<ProductVariant>, _>(
                &format!("/products/variants/{}", variant_id),
                payload,
            )
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing variant data".to_string()))?;
        self.cache.invalidate_scope(STOCK_VARIANTS_SCOPE);
        Ok(variant)
    }
}
