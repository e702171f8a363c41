//! API Response types
//!
//! Standardized response structures shared with the inventory API.

use serde::{Deserialize, Serialize};

/// Standard API response code
pub const API_CODE_SUCCESS: &str = "E0000";

/// Unified API response structure
///
/// Auth and mutation endpoints respond in this format:
/// ```json
/// {
///     "code": "E0000",
///     "message": "Success",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (E0000 = success, others = error codes)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Request trace ID for debugging (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS.to_string(),
            message: "Success".to_string(),
            data: Some(data),
            trace_id: None,
        }
    }

    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
            trace_id: None,
        }
    }

    /// True when the response carries the success code
    pub fn is_success(&self) -> bool {
        self.code == API_CODE_SUCCESS
    }
}

/// Pagination metadata returned by listing endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total record count
    pub total: u64,
    /// Current page (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total page count
    pub total_pages: u32,
}

/// Paginated listing response
///
/// Listing endpoints respond with `{ "data": [...], "meta": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            ((total as f64) / (limit as f64)).ceil() as u32
        } else {
            1
        };

        Self {
            data,
            meta: PageMeta {
                total,
                page,
                limit,
                total_pages,
            },
        }
    }

    /// Create a single page response (for unpaginated listings)
    pub fn single_page(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            data,
            meta: PageMeta {
                total,
                page: 1,
                limit: total as u32,
                total_pages: 1,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_total_pages() {
        let resp = Paginated::new(vec!["a", "b", "c"], 101, 2, 10);
        assert_eq!(resp.meta.total, 101);
        assert_eq!(resp.meta.page, 2);
        assert_eq!(resp.meta.total_pages, 11);
    }

    #[test]
    fn test_paginated_zero_limit() {
        let resp: Paginated<&str> = Paginated::new(vec![], 0, 1, 0);
        assert_eq!(resp.meta.total_pages, 1);
    }

    #[test]
    fn test_meta_wire_names() {
        let resp = Paginated::new(vec![1, 2], 2, 1, 10);
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["meta"]["totalPages"].is_number());
    }
}
