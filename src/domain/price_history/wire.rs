//! Wire types for price history (REST).

use crate::shared::serde_util::timestamped_pair;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One `[timestampMillis, price]` entry.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint(#[serde(with = "timestamped_pair")] pub (DateTime<Utc>, f64));

/// `GET /coins/{id}/market_chart` response. Only `prices` is consumed;
/// `market_caps` and `total_volumes` are ignored. `prices` is required: a body
/// without it is a failed fetch, not an empty history.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct MarketChartResponse {
    pub prices: Vec<PricePoint>,
}
