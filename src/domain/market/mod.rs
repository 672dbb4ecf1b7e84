//! Market domain — asset snapshots, the market page source, and the table
//! controller that keeps them in sync with the filter state.

#[cfg(feature = "http")]
pub mod client;
pub mod columns;
mod convert;
pub mod table;
pub mod wire;

use crate::domain::filter::MarketQuery;
use crate::error::RemoteFetchError;
use crate::shared::AssetId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use columns::{columns, Cell, CellRenderer, ColumnDescriptor, ColumnKey};
pub use table::{MarketFetch, MarketResolution, MarketTableController, RowRetention, TableRow, TableView};

// ─── AssetSnapshot ───────────────────────────────────────────────────────────

/// One asset's market data as of a single fetch.
///
/// Prices are denominated in the currency of the query that produced the
/// snapshot. A later fetch replaces the whole list; snapshots are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    pub id: AssetId,
    pub name: String,
    /// Icon URL.
    pub image: String,
    pub current_price: f64,
    /// Signed 24h change, in percent.
    pub price_change_percentage_24h: f64,
    pub circulating_supply: f64,
    pub total_supply: Option<f64>,
    pub total_volume: f64,
}

// ─── Source ──────────────────────────────────────────────────────────────────

/// Anything that can serve a page of market snapshots.
///
/// Implemented by [`crate::client::CoinboardClient`]; tests plug in in-memory
/// sources. Futures are `?Send` so the same code runs on the browser's
/// single-threaded executor.
#[async_trait(?Send)]
pub trait MarketDataSource {
    /// One fresh request per call; no caching, no partial data on failure.
    async fn fetch_market_page(
        &self,
        query: &MarketQuery,
    ) -> Result<Vec<AssetSnapshot>, RemoteFetchError>;
}
