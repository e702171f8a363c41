//! Oneshot HTTP client - in-memory transport
//!
//! Uses Tower's oneshot mode to call an axum `Router` directly,
//! without a socket. Integration tests and demos run the real client
//! code paths against an in-process inventory API.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

use crate::error::{ClientError, ClientResult};
use super::http::HttpClient;

/// Oneshot HTTP client (in-memory calls)
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use pavilion_client::OneshotHttpClient;
///
/// let router: Router = build_mock_api();
/// let client = OneshotHttpClient::new(router);
/// let page: Paginated<StockVariantItem> =
///     client.get("/inventory/stocks/variants").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Arc<RwLock<Router>>,
    token: Arc<RwLock<Option<String>>>,
}

impl OneshotHttpClient {
    /// Create a new oneshot HTTP client
    ///
    /// # Arguments
    /// * `router` - An initialized axum Router (state already applied)
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(RwLock::new(router)),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the session token
    pub async fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().await;
        *guard = token;
    }

    async fn build_request(&self, method: http::Method, uri: &str) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = self.token.read().await.clone() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        builder
            .header("Content-Type", "application/json")
            .body(Body::empty())
            .expect("Failed to build request")
    }

    async fn build_request_with_body<B: serde::Serialize>(
        &self,
        method: http::Method,
        uri: &str,
        body: &B,
    ) -> Result<Request<Body>, ClientError> {
        let body_bytes = serde_json::to_vec(body)?;

        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = self.token.read().await.clone() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        Ok(builder
            .header("Content-Type", "application/json")
            .body(Body::from(body_bytes))
            .expect("Failed to build request"))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let router = self.router.read().await.clone();

        let response = router
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        serde_json::from_slice(&body_bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    fn uri_with_query(path: &str, query: &[(&str, String)]) -> String {
        if query.is_empty() {
            return path.to_string();
        }
        let qs = query
            .iter()
            .map(|(k, v)| format!("{}={}", k, encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", path, qs)
    }
}

/// Minimal percent-encoding for query values (URI must stay parseable)
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::GET, path).await;
        self.execute(request).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let uri = Self::uri_with_query(path, query);
        let request = self.build_request(http::Method::GET, &uri).await;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self
            .build_request_with_body(http::Method::POST, path, body)
            .await?;
        self.execute(request).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::POST, path).await;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self
            .build_request_with_body(http::Method::PUT, path, body)
            .await?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::DELETE, path).await;
        self.execute(request).await
    }

    fn token(&self) -> Option<String> {
        self.token.try_read().ok().and_then(|guard| guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_with_query() {
        let uri = OneshotHttpClient::uri_with_query(
            "/inventory/stocks/variants",
            &[("page", "1".to_string()), ("search", "club jersey".to_string())],
        );
        assert_eq!(
            uri,
            "/inventory/stocks/variants?page=1&search=club%20jersey"
        );
    }

    #[test]
    fn test_oneshot_client_creation() {
        let router: Router = Router::new();
        let _client = OneshotHttpClient::new(router);
    }
}
