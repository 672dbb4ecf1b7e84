//! Low-level HTTP client — `CoinboardHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). Internal to the crate — `CoinboardClient` wraps this.

use crate::domain::filter::MarketQuery;
use crate::domain::market::wire::MarketCoinResponse;
use crate::domain::price_history::wire::MarketChartResponse;
use crate::error::{CoinboardError, RemoteFetchError};
use crate::http::retry::RetryPolicy;
use crate::shared::{AssetId, Currency};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Build the market list URL for one query snapshot.
///
/// Encodes exactly the four query axes plus the fixed `sparkline=false`.
pub fn markets_url(base_url: &str, query: &MarketQuery) -> String {
    format!(
        "{}/coins/markets?vs_currency={}&order={}&per_page={}&page={}&sparkline=false",
        base_url.trim_end_matches('/'),
        query.currency.as_str(),
        query.order.as_str(),
        query.page_size,
        query.page,
    )
}

/// Build the price history URL for one asset.
pub fn market_chart_url(base_url: &str, asset_id: &AssetId, currency: Currency, days: u32) -> String {
    format!(
        "{}/coins/{}/market_chart?vs_currency={}&days={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(asset_id.as_str()),
        currency.as_str(),
        days,
    )
}

/// Low-level HTTP client for the market-data REST API.
#[derive(Clone)]
pub struct CoinboardHttp {
    base_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl CoinboardHttp {
    /// `timeout` only applies to native builds; the browser owns request
    /// lifetimes on WASM.
    pub fn new(
        base_url: &str,
        retry: RetryPolicy,
        timeout: Option<Duration>,
    ) -> Result<Self, CoinboardError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            builder = builder.pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder
            .build()
            .map_err(|e| CoinboardError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Markets ──────────────────────────────────────────────────────────

    pub async fn get_markets(
        &self,
        query: &MarketQuery,
    ) -> Result<Vec<MarketCoinResponse>, RemoteFetchError> {
        let url = markets_url(&self.base_url, query);
        self.get(&url).await
    }

    // ── Price History ────────────────────────────────────────────────────

    pub async fn get_market_chart(
        &self,
        asset_id: &AssetId,
        currency: Currency,
        days: u32,
    ) -> Result<MarketChartResponse, RemoteFetchError> {
        let url = market_chart_url(&self.base_url, asset_id, currency, days);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, RemoteFetchError> {
        let Some(config) = self.retry.config() else {
            return self.do_get(url).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) if config.should_retry(&e) && attempt < config.max_retries => {
                    let delay = config.delay_for_attempt(attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying request to {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(RemoteFetchError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, RemoteFetchError> {
        tracing::debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await?;
        let status = resp.status();

        if !status.is_success() {
            // Failure bodies are never parsed.
            return Err(RemoteFetchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(resp.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SortOrder;
    use std::num::NonZeroU32;

    fn query(currency: Currency, order: SortOrder, page: u32, page_size: u32) -> MarketQuery {
        MarketQuery {
            currency,
            order,
            page: NonZeroU32::new(page).unwrap(),
            page_size: NonZeroU32::new(page_size).unwrap(),
        }
    }

    #[test]
    fn test_markets_url_encodes_exactly_the_query() {
        let url = markets_url(
            "https://api.example.com/v3",
            &query(Currency::Eur, SortOrder::MarketCapAsc, 2, 10),
        );
        assert_eq!(
            url,
            "https://api.example.com/v3/coins/markets?vs_currency=eur&order=market_cap_asc&per_page=10&page=2&sparkline=false"
        );
    }

    #[test]
    fn test_markets_url_has_no_extra_params() {
        for currency in Currency::ALL {
            for order in SortOrder::ALL {
                let url = markets_url("http://h", &query(currency, order, 7, 25));
                let (_, qs) = url.split_once('?').unwrap();
                let keys: Vec<_> = qs.split('&').map(|kv| kv.split('=').next().unwrap()).collect();
                assert_eq!(keys, ["vs_currency", "order", "per_page", "page", "sparkline"]);
                assert!(qs.contains(&format!("vs_currency={}", currency.as_str())));
                assert!(qs.contains(&format!("order={}", order.as_str())));
                assert!(qs.ends_with("per_page=25&page=7&sparkline=false"));
            }
        }
    }

    #[test]
    fn test_trailing_slash_in_base_is_ignored() {
        let url = markets_url("http://h/", &query(Currency::Usd, SortOrder::MarketCapDesc, 1, 10));
        assert!(url.starts_with("http://h/coins/markets?"));
    }

    #[test]
    fn test_market_chart_url() {
        let url = market_chart_url("http://h", &AssetId::from("bitcoin"), Currency::Usd, 2);
        assert_eq!(url, "http://h/coins/bitcoin/market_chart?vs_currency=usd&days=2");
    }

    #[test]
    fn test_market_chart_url_encodes_asset_id() {
        let url = market_chart_url("http://h", &AssetId::from("a b/c"), Currency::Eur, 2);
        assert_eq!(url, "http://h/coins/a%20b%2Fc/market_chart?vs_currency=eur&days=2");
    }

    #[test]
    fn test_new_trims_base_url() {
        let http = CoinboardHttp::new("http://h/api/", RetryPolicy::None, None).unwrap();
        assert_eq!(http.base_url(), "http://h/api");
    }
}
