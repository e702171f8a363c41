//! Client configuration

/// Client configuration for connecting to the inventory API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Session token for authenticated requests
    pub token: Option<String>,

    /// Request timeout in seconds (applies to every request; there is
    /// no per-request timeout)
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Read the configuration from the environment
    ///
    /// `PAVILION_API_URL` and optional `PAVILION_API_TOKEN` /
    /// `PAVILION_API_TIMEOUT`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("PAVILION_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let mut config = Self::new(base_url);
        if let Ok(token) = std::env::var("PAVILION_API_TOKEN") {
            config.token = Some(token);
        }
        if let Some(timeout) = std::env::var("PAVILION_API_TIMEOUT")
            .ok()
            .and_then(|t| t.parse().ok())
        {
            config.timeout = timeout;
        }
        config
    }

    /// Set the session token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::error::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
