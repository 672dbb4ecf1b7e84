//! HTTP client layer — `CoinboardHttp` with an opt-in retry policy.

pub mod client;
pub mod retry;

pub use client::{market_chart_url, markets_url, CoinboardHttp};
pub use retry::{RetryConfig, RetryPolicy};
