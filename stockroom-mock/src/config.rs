/// Mock server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | MOCK_HTTP_PORT | 8090 | HTTP port |
/// | MOCK_SEED_DEMO | true | Preload a small demo catalog |
/// | MOCK_LOG | stockroom_mock=info,tower_http=info | Log filter when `RUST_LOG` is unset |
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub http_port: u16,
    pub seed_demo: bool,
    pub log_filter: String,
}

impl MockConfig {
    pub const DEFAULT_LOG_FILTER: &'static str = "stockroom_mock=info,tower_http=info";

    /// Load from the environment; unset or invalid values use the defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("MOCK_HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8090),
            seed_demo: std::env::var("MOCK_SEED_DEMO")
                .map(|v| !matches!(v.trim(), "0" | "false" | "no"))
                .unwrap_or(true),
            log_filter: std::env::var("MOCK_LOG")
                .unwrap_or_else(|_| Self::DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            http_port: 8090,
            seed_demo: true,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
