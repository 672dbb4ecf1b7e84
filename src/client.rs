//! High-level client — `CoinboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods. Nothing is cached:
//! every fetch reflects exactly the parameters given.

use crate::domain::market::client::Markets;
use crate::domain::price_history::client::PriceHistory;
use crate::error::CoinboardError;
use crate::http::{CoinboardHttp, RetryPolicy};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::price_history::client::PriceHistory as PriceHistoryClient;

/// Entry point for the market-data API.
///
/// Implements both [`crate::domain::market::MarketDataSource`] and
/// [`crate::domain::price_history::PriceHistorySource`], so it can be handed
/// straight to fetch tickets.
#[derive(Clone)]
pub struct CoinboardClient {
    pub(crate) http: CoinboardHttp,
}

impl CoinboardClient {
    pub fn builder() -> CoinboardClientBuilder {
        CoinboardClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn price_history(&self) -> PriceHistory<'_> {
        PriceHistory { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinboardClientBuilder {
    base_url: String,
    retry: RetryPolicy,
    timeout: Option<Duration>,
}

impl Default for CoinboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            retry: RetryPolicy::None,
            timeout: None,
        }
    }
}

impl CoinboardClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Defaults to [`RetryPolicy::None`].
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Per-request timeout (native only). Unset means requests may hang.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<CoinboardClient, CoinboardError> {
        if self.base_url.trim().is_empty() {
            return Err(CoinboardError::Config("base_url must not be empty".into()));
        }
        Ok(CoinboardClient {
            http: CoinboardHttp::new(&self.base_url, self.retry, self.timeout)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_public_api() {
        let client = CoinboardClient::builder().build().unwrap();
        assert_eq!(client.base_url(), crate::network::DEFAULT_API_URL);
    }

    #[test]
    fn test_builder_overrides_base_url() {
        let client = CoinboardClient::builder()
            .base_url("http://localhost:8080/api/v3/")
            .retry_policy(RetryPolicy::Idempotent)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/v3");
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        assert!(matches!(
            CoinboardClient::builder().base_url("  ").build(),
            Err(CoinboardError::Config(_))
        ));
    }
}
