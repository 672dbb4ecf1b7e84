//! Price history sub-client — per-asset market chart queries.

use super::{PriceHistorySeries, PriceHistorySource, PRICE_HISTORY_WINDOW_DAYS};
use crate::client::CoinboardClient;
use crate::error::RemoteFetchError;
use crate::shared::{AssetId, Currency};
use async_trait::async_trait;

/// Sub-client for price history operations.
pub struct PriceHistory<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> PriceHistory<'a> {
    pub async fn get(
        &self,
        asset_id: &AssetId,
        currency: Currency,
        window_days: u32,
    ) -> Result<PriceHistorySeries, RemoteFetchError> {
        let resp = self
            .client
            .http
            .get_market_chart(asset_id, currency, window_days)
            .await?;
        Ok(resp.into())
    }

    /// History over the dashboard's fixed lookback.
    pub async fn recent(
        &self,
        asset_id: &AssetId,
        currency: Currency,
    ) -> Result<PriceHistorySeries, RemoteFetchError> {
        self.get(asset_id, currency, PRICE_HISTORY_WINDOW_DAYS).await
    }
}

#[async_trait(?Send)]
impl PriceHistorySource for CoinboardClient {
    async fn fetch_price_history(
        &self,
        asset_id: &AssetId,
        currency: Currency,
        window_days: u32,
    ) -> Result<PriceHistorySeries, RemoteFetchError> {
        self.price_history().get(asset_id, currency, window_days).await
    }
}
