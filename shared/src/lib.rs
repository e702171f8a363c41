//! Shared types for the Pavilion inventory dashboard
//!
//! Common types used across the client and dashboard crates: API
//! envelopes, query parameters, and the data models served by the
//! inventory REST API.

pub mod client;
pub mod models;
pub mod query;
pub mod response;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use query::{MovementQuery, SortBy, SortOrder, StockVariantQuery};
pub use response::{ApiResponse, PageMeta, Paginated};
