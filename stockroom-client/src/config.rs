//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | STOCKROOM_API_URL | http://localhost:8090 | Backend base URL |
//! | STOCKROOM_API_TOKEN | (none) | Bearer token |
//! | STOCKROOM_TIMEOUT_SECS | 30 | Request timeout |
//! | STOCKROOM_PAGE_SIZE | 10 | Default list page size |
//! | STOCKROOM_SEARCH_DEBOUNCE_MS | 500 | Keyword search quiet period |

use std::time::Duration;

use crate::client::NetworkHttpClient;
use crate::error::ClientResult;

/// Default list page size
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default keyword search quiet period
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Client configuration for connecting to the inventory backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8090")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Default page size for list controllers
    pub page_size: u32,

    /// Quiet period before a keyword search is sent
    pub search_debounce: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }

    /// Load configuration from the environment (and `.env` if present)
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut config = Self::new(
            std::env::var("STOCKROOM_API_URL").unwrap_or_else(|_| "http://localhost:8090".into()),
        );
        config.token = std::env::var("STOCKROOM_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());
        config.timeout = std::env::var("STOCKROOM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        config.page_size = std::env::var("STOCKROOM_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        config.search_debounce = std::env::var("STOCKROOM_SEARCH_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE);
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the default page size (zero is ignored)
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    /// Set the keyword search quiet period
    pub fn with_search_debounce(mut self, debounce: Duration) -> Self {
        self.search_debounce = debounce;
        self
    }

    /// Create a network HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8090")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("http://api.local")
            .with_token("secret")
            .with_timeout(5)
            .with_page_size(0)
            .with_search_debounce(Duration::from_millis(250));

        assert_eq!(config.base_url, "http://api.local");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, 5);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.search_debounce, Duration::from_millis(250));
    }
}
