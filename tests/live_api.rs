//! Integration tests against the real market-data API.
//!
//! All tests are `#[ignore]` because they require network access (and are
//! subject to the public tier's rate limits).
//!
//! Run with:
//! ```bash
//! cargo test --features native --test live_api -- --ignored
//! ```
//!
//! Set `COINBOARD_API_URL` (or put it in `.env`) to target another base URL.

#![cfg(feature = "http")]

use coinboard::network::API_URL_ENV;
use coinboard::prelude::*;

fn client() -> CoinboardClient {
    dotenvy::dotenv().ok();
    let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    CoinboardClient::builder()
        .base_url(&base_url)
        .retry_policy(RetryPolicy::Idempotent)
        .timeout(std::time::Duration::from_secs(20))
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore]
async fn first_page_loads_into_table() {
    let client = client();
    let mut table = MarketTableController::default();

    let fetch = table.mount();
    table.run(fetch, &client).await;

    assert_eq!(table.status(), FetchStatus::Success);
    assert_eq!(table.rows().len(), 10);
    assert!(table.find(&"bitcoin".into()).is_some());
}

#[tokio::test]
#[ignore]
async fn bitcoin_history_renders_chart() {
    let client = client();
    let series = client
        .price_history()
        .recent(&"bitcoin".into(), Currency::Eur)
        .await
        .expect("history should load");

    assert!(!series.is_empty());
    let chart = to_chart_series(&series);
    assert_eq!(chart.labels.len(), series.len());
    assert_eq!(chart.values.len(), series.len());
}

#[tokio::test]
#[ignore]
async fn unknown_asset_is_a_fetch_error() {
    let client = client();
    let err = client
        .price_history()
        .recent(&"definitely-not-a-coin-xyz".into(), Currency::Usd)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}
