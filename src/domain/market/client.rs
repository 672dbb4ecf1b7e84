//! Markets sub-client — paginated market list.

use super::{AssetSnapshot, MarketDataSource};
use crate::client::CoinboardClient;
use crate::domain::filter::MarketQuery;
use crate::error::RemoteFetchError;
use async_trait::async_trait;

/// Sub-client for market list operations.
pub struct Markets<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> Markets<'a> {
    /// Fetch one page. Every call is a fresh request for exactly `query`.
    pub async fn page(&self, query: &MarketQuery) -> Result<Vec<AssetSnapshot>, RemoteFetchError> {
        let rows = self.client.http.get_markets(query).await?;
        Ok(rows.into_iter().map(AssetSnapshot::from).collect())
    }
}

#[async_trait(?Send)]
impl MarketDataSource for CoinboardClient {
    async fn fetch_market_page(
        &self,
        query: &MarketQuery,
    ) -> Result<Vec<AssetSnapshot>, RemoteFetchError> {
        self.markets().page(query).await
    }
}
