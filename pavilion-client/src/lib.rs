//! Pavilion Client - HTTP client for the inventory API
//!
//! Typed endpoint surface plus the listing machinery of the admin
//! dashboard: query cache, search debouncer, and the stock-variant
//! listing state machine.

pub mod api;
pub mod cache;
pub mod config;
pub mod debounce;
pub mod error;
pub mod http;
pub mod http_oneshot;
pub mod listing;

pub use api::InventoryClient;
pub use cache::{FetchError, QueryCache};
pub use config::ClientConfig;
pub use debounce::Debouncer;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use http_oneshot::OneshotHttpClient;
pub use listing::{FetchTicket, StockListing, ViewState};

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, CurrentUserResponse, LoginResponse, UserInfo};
