//! Query-result cache
//!
//! Explicit cache service keyed by serialized parameter tuples,
//! injected into the API surface instead of living in module-level
//! state. Concurrent identical requests share one in-flight fetch, so
//! at most one request per distinct parameter tuple is on the wire at
//! a time. Mutation call sites invalidate whole scopes.

use dashmap::DashMap;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

use crate::error::ClientError;

/// Cloneable fetch failure
///
/// In-flight fetches are shared between awaiting callers, so the
/// error side must be `Clone`; the original error is flattened to its
/// display text. Errors are never cached.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct FetchError(pub String);

impl From<ClientError> for FetchError {
    fn from(err: ClientError) -> Self {
        Self(err.to_string())
    }
}

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<Value>, FetchError>>>;

#[derive(Default)]
struct CacheEntry {
    value: Option<Arc<Value>>,
    inflight: Option<SharedFetch>,
}

/// Parameter-tuple keyed query cache
///
/// Values are stored as raw JSON; the typed API layer deserializes on
/// the way out.
#[derive(Default)]
pub struct QueryCache {
    entries: DashMap<String, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical `scope:params` cache key
    pub fn scoped_key(scope: &str, params: &str) -> String {
        format!("{}:{}", scope, params)
    }

    /// Return the cached value without fetching, possibly stale
    ///
    /// Used for stale-while-revalidate: the listing shows the cached
    /// page while the refetch settles.
    pub fn peek(&self, key: &str) -> Option<Arc<Value>> {
        self.entries.get(key).and_then(|entry| entry.value.clone())
    }

    /// Return the cached value or run `fetch`, deduplicating against
    /// any identical in-flight request
    pub async fn get_or_fetch<F>(&self, key: &str, fetch: F) -> Result<Arc<Value>, FetchError>
    where
        F: Future<Output = Result<Value, ClientError>> + Send + 'static,
    {
        // Decide under the entry lock, await outside of it.
        let shared = {
            let mut entry = self.entries.entry(key.to_string()).or_default();
            if let Some(value) = &entry.value {
                tracing::debug!(key = %key, "query cache hit");
                return Ok(value.clone());
            }
            match &entry.inflight {
                Some(shared) => {
                    tracing::debug!(key = %key, "joining in-flight fetch");
                    shared.clone()
                }
                None => {
                    tracing::debug!(key = %key, "query cache miss, fetching");
                    let shared: SharedFetch = fetch
                        .map(|result| result.map(Arc::new).map_err(FetchError::from))
                        .boxed()
                        .shared();
                    entry.inflight = Some(shared.clone());
                    shared
                }
            }
        };

        let result = shared.await;

        // Write-back is idempotent across awaiting callers. A key
        // invalidated mid-flight stays absent, so the next read
        // refetches.
        if let Some(mut entry) = self.entries.get_mut(key) {
            entry.inflight = None;
            if let Ok(value) = &result {
                entry.value = Some(value.clone());
            }
        }

        result
    }

    /// Remove every cached key in a scope
    ///
    /// Exposed to mutation call sites: stock operations invalidate the
    /// stock-variants scope so listings refetch.
    pub fn invalidate_scope(&self, scope: &str) {
        let prefix = format!("{}:", scope);
        self.entries.retain(|key, _| !key.starts_with(&prefix));
        tracing::debug!(scope = %scope, "query cache scope invalidated");
    }

    /// Drop everything (logout, tenant switch)
    pub fn invalidate_all(&self) {
        self.entries.clear();
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}
