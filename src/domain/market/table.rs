//! Market table controller — filter state in, generation-tagged fetches out.
//!
//! The controller never awaits anything itself. A filter mutation returns a
//! [`MarketFetch`] ticket that owns its query snapshot; the host runs it
//! against a [`MarketDataSource`] on whatever executor it has and hands the
//! [`MarketResolution`] back to [`MarketTableController::resolve`]. Because
//! tickets do not borrow the controller, the user can keep changing filters
//! while earlier requests are still in flight; only the newest one lands.

use super::columns::{columns, Cell, ColumnDescriptor};
use super::{AssetSnapshot, MarketDataSource};
use crate::domain::filter::{FilterState, MarketQuery, PaginationPatch, PaginationWindow};
use crate::error::{FilterError, RemoteFetchError};
use crate::shared::{Applied, AssetId, Currency, FetchStatus, Generation, SortOrder};
use serde::Serialize;

/// What happens to the visible rows while a new page loads.
///
/// Applies to sort and pagination changes. A currency change always blanks
/// the table, since the previous rows are priced in the old currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowRetention {
    /// Keep showing the previous page under the loading indicator.
    #[default]
    KeepPrevious,
    /// Blank the table as soon as loading starts.
    ClearOnLoad,
}

/// A market page request captured at initiation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketFetch {
    pub generation: Generation,
    pub query: MarketQuery,
}

impl MarketFetch {
    /// Run the request. Never fails: the error travels inside the resolution.
    pub async fn execute<S>(self, source: &S) -> MarketResolution
    where
        S: MarketDataSource + ?Sized,
    {
        let result = source.fetch_market_page(&self.query).await;
        MarketResolution {
            generation: self.generation,
            query: self.query,
            result,
        }
    }
}

/// The settled outcome of a [`MarketFetch`].
#[derive(Debug)]
pub struct MarketResolution {
    pub generation: Generation,
    pub query: MarketQuery,
    pub result: Result<Vec<AssetSnapshot>, RemoteFetchError>,
}

/// A keyed, rendered table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub key: AssetId,
    pub cells: Vec<Cell>,
}

/// Everything the table widget needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<TableRow>,
    pub loading: bool,
    pub pagination: PaginationWindow,
}

#[derive(Debug, Clone, Default)]
pub struct MarketTableController {
    filter: FilterState,
    generation: Generation,
    status: FetchStatus,
    rows: Vec<AssetSnapshot>,
    retention: RowRetention,
}

impl MarketTableController {
    pub fn new(filter: FilterState) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn with_retention(mut self, retention: RowRetention) -> Self {
        self.retention = retention;
        self
    }

    // ── Triggers ─────────────────────────────────────────────────────────

    /// Initial load when the table first appears.
    pub fn mount(&mut self) -> MarketFetch {
        self.begin_fetch()
    }

    pub fn set_currency(&mut self, currency: Currency) -> Option<MarketFetch> {
        if !self.filter.set_currency(currency) {
            return None;
        }
        self.rows.clear();
        Some(self.begin_fetch())
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> Option<MarketFetch> {
        self.filter.set_sort_order(order).then(|| self.begin_fetch())
    }

    pub fn set_pagination(&mut self, window: PaginationWindow) -> Option<MarketFetch> {
        self.filter.set_pagination(window).then(|| self.begin_fetch())
    }

    /// Pagination change reported by the table widget.
    pub fn on_table_change(
        &mut self,
        patch: &PaginationPatch,
    ) -> Result<Option<MarketFetch>, FilterError> {
        let changed = self.filter.merge_pagination(patch)?;
        Ok(changed.then(|| self.begin_fetch()))
    }

    fn begin_fetch(&mut self) -> MarketFetch {
        self.generation = self.generation.next();
        self.status = FetchStatus::Loading;
        if self.retention == RowRetention::ClearOnLoad {
            self.rows.clear();
        }
        let fetch = MarketFetch {
            generation: self.generation,
            query: self.filter.query(),
        };
        tracing::debug!(generation = %fetch.generation, query = ?fetch.query, "market fetch started");
        fetch
    }

    // ── Resolution ───────────────────────────────────────────────────────

    /// Apply a settled fetch if it is still the latest one.
    ///
    /// Failures clear the table and are logged; they never propagate.
    pub fn resolve(&mut self, resolution: MarketResolution) -> Applied {
        if resolution.generation != self.generation {
            tracing::debug!(
                stale = %resolution.generation,
                latest = %self.generation,
                "discarding stale market page"
            );
            return Applied::Stale;
        }

        match resolution.result {
            Ok(rows) => {
                self.rows = rows;
                self.status = FetchStatus::Success;
            }
            Err(e) => {
                tracing::error!(error = %e, query = ?resolution.query, "Error getting market data");
                self.rows.clear();
                self.status = FetchStatus::Failed;
            }
        }
        Applied::Current
    }

    /// Run a fetch to completion and apply it, for hosts that do not
    /// interleave filter changes with in-flight requests.
    pub async fn run<S>(&mut self, fetch: MarketFetch, source: &S) -> Applied
    where
        S: MarketDataSource + ?Sized,
    {
        let resolution = fetch.execute(source).await;
        self.resolve(resolution)
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn rows(&self) -> &[AssetSnapshot] {
        &self.rows
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn find(&self, id: &AssetId) -> Option<&AssetSnapshot> {
        self.rows.iter().find(|row| &row.id == id)
    }

    pub fn columns(&self) -> Vec<ColumnDescriptor> {
        columns(self.filter.currency())
    }

    pub fn view(&self) -> TableView {
        let columns = self.columns();
        let rows = self
            .rows
            .iter()
            .map(|asset| TableRow {
                key: asset.id.clone(),
                cells: columns.iter().map(|c| c.render(asset)).collect(),
            })
            .collect();
        TableView {
            columns,
            rows,
            loading: self.is_loading(),
            pagination: self.filter.pagination(),
        }
    }
}
