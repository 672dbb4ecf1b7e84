//! # coinboard
//!
//! The data pipeline behind a "Coins & Markets" dashboard, for native and
//! WASM targets.
//!
//! ## Architecture
//!
//! 1. **Core** — Shared newtypes, domain types, chart adapters (always available, WASM-safe)
//! 2. **Controllers** — Market table and detail selection state machines that
//!    hand out generation-tagged fetch tickets and drop stale resolutions
//! 3. **HTTP API** — `CoinboardHttp` with an opt-in retry policy
//! 4. **High-Level Client** — `CoinboardClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinboard::prelude::*;
//!
//! let client = CoinboardClient::builder().build()?;
//! let mut dashboard = Dashboard::default();
//!
//! let fetch = dashboard.mount();
//! dashboard.table.run(fetch, &client).await;
//!
//! if let Some(fetch) = dashboard.set_currency(Currency::Eur).table {
//!     let resolution = fetch.execute(&client).await;
//!     dashboard.table.resolve(resolution);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, controllers.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Controllers ─────────────────────────────────────────────────────

/// Table + detail composition.
pub mod dashboard;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CoinboardClient` — the primary entry point for remote data.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Applied, AssetId, Currency, FetchStatus, Generation, SortOrder};

    // Domain types — filter
    pub use crate::domain::filter::{FilterState, MarketQuery, PaginationPatch, PaginationWindow};

    // Domain types — market
    pub use crate::domain::market::{
        columns, AssetSnapshot, Cell, ColumnDescriptor, ColumnKey, MarketDataSource, MarketFetch,
        MarketResolution, MarketTableController, RowRetention, TableRow, TableView,
    };

    // Domain types — price history
    pub use crate::domain::price_history::{
        to_chart_series, to_chart_series_at, to_sparkline_directive, ChartLabel, ChartSeries,
        Direction, PriceHistorySeries, PriceHistorySource, PriceSample, SparklineDirective,
        PRICE_HISTORY_WINDOW_DAYS,
    };

    // Detail selection
    pub use crate::domain::detail::{
        DetailFetch, DetailResolution, DetailSelectionController, DetailState, DetailView,
    };

    pub use crate::dashboard::{Dashboard, DashboardFetches};

    // Errors
    pub use crate::error::{CoinboardError, FilterError, RemoteFetchError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CoinboardClient, CoinboardClientBuilder, MarketsClient, PriceHistoryClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
