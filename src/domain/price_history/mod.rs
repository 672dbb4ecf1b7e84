//! Price history domain — per-asset price series and their chart rendering.

pub mod chart;
#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::error::RemoteFetchError;
use crate::shared::{AssetId, Currency};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use chart::{to_chart_series, to_chart_series_at, to_sparkline_directive, ChartLabel, ChartSeries, Direction, SparklineDirective};

/// Lookback used for the detail chart.
pub const PRICE_HISTORY_WINDOW_DAYS: u32 = 2;

/// A single (timestamp, price) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Samples ordered by increasing timestamp. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistorySeries {
    samples: Vec<PriceSample>,
}

impl PriceHistorySeries {
    /// Sorts by timestamp; equal timestamps keep their input order.
    pub fn new(mut samples: Vec<PriceSample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        Self { samples }
    }

    pub fn samples(&self) -> &[PriceSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&PriceSample> {
        self.samples.last()
    }
}

/// Anything that can serve an asset's recent price history.
#[async_trait(?Send)]
pub trait PriceHistorySource {
    /// An empty series is a successful answer, distinct from an error.
    async fn fetch_price_history(
        &self,
        asset_id: &AssetId,
        currency: Currency,
        window_days: u32,
    ) -> Result<PriceHistorySeries, RemoteFetchError>;
}
