//! Application state shared across handlers.
//!
//! The service is stateless between requests; the only shared pieces are the
//! parsed configuration and one reqwest client (connection pooling plus the
//! configured fetch timeout).

use std::time::Duration;

use overmark_core::Config;

pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_seconds))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            config,
            http_client,
        })
    }
}
