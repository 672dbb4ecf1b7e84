//! Conversion: MarketChartResponse → PriceHistorySeries.

use super::wire::{MarketChartResponse, PricePoint};
use super::{PriceHistorySeries, PriceSample};

impl From<PricePoint> for PriceSample {
    fn from(PricePoint((timestamp, price)): PricePoint) -> Self {
        Self { timestamp, price }
    }
}

impl From<MarketChartResponse> for PriceHistorySeries {
    fn from(resp: MarketChartResponse) -> Self {
        PriceHistorySeries::new(resp.prices.into_iter().map(PriceSample::from).collect())
    }
}
