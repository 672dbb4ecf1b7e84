//! Detail domain — the single asset drilled into, and its price history.
//!
//! Same ticket pattern as the market table: [`DetailSelectionController::select`]
//! hands out a [`DetailFetch`], the host runs it, and the resolution only
//! lands if the controller is still waiting on that exact request. Clearing
//! or re-selecting invalidates whatever is in flight.

use crate::domain::market::AssetSnapshot;
use crate::domain::price_history::{
    chart::{to_chart_series, to_chart_series_at},
    ChartSeries, PriceHistorySeries, PriceHistorySource, PRICE_HISTORY_WINDOW_DAYS,
};
use crate::error::RemoteFetchError;
use crate::shared::{Applied, AssetId, Currency, FetchStatus, Generation};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::Display;

/// Selection lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    NoSelection,
    /// History requested; only the fetch tagged `generation` may complete it.
    Selecting {
        asset: AssetSnapshot,
        generation: Generation,
    },
    Selected {
        asset: AssetSnapshot,
        series: PriceHistorySeries,
    },
    /// History fetch failed; the view keeps its placeholder.
    Failed { asset: AssetSnapshot },
}

impl DetailState {
    pub fn asset(&self) -> Option<&AssetSnapshot> {
        match self {
            Self::NoSelection => None,
            Self::Selecting { asset, .. } | Self::Selected { asset, .. } | Self::Failed { asset } => {
                Some(asset)
            }
        }
    }

    pub fn status(&self) -> FetchStatus {
        match self {
            Self::NoSelection => FetchStatus::Idle,
            Self::Selecting { .. } => FetchStatus::Loading,
            Self::Selected { .. } => FetchStatus::Success,
            Self::Failed { .. } => FetchStatus::Failed,
        }
    }
}

/// A price history request captured at selection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFetch {
    pub generation: Generation,
    pub asset_id: AssetId,
    pub currency: Currency,
    pub window_days: u32,
}

impl DetailFetch {
    pub async fn execute<S>(self, source: &S) -> DetailResolution
    where
        S: PriceHistorySource + ?Sized,
    {
        let result = source
            .fetch_price_history(&self.asset_id, self.currency, self.window_days)
            .await;
        DetailResolution {
            generation: self.generation,
            asset_id: self.asset_id,
            result,
        }
    }
}

#[derive(Debug)]
pub struct DetailResolution {
    pub generation: Generation,
    pub asset_id: AssetId,
    pub result: Result<PriceHistorySeries, RemoteFetchError>,
}

/// Summary card under the detail title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: Option<f64>,
}

/// Render model for the detail panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub asset_id: AssetId,
    pub name: String,
    pub cards: Vec<StatCard>,
    pub title: String,
    /// `None` while loading or after a failure: show the placeholder.
    pub chart: Option<ChartSeries>,
}

#[derive(Debug, Clone, Default)]
pub struct DetailSelectionController {
    state: DetailState,
    currency: Currency,
    generation: Generation,
}

impl DetailSelectionController {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            ..Self::default()
        }
    }

    /// Replace any selection and start loading its history.
    pub fn select(&mut self, asset: AssetSnapshot) -> DetailFetch {
        self.generation = self.generation.next();
        let fetch = DetailFetch {
            generation: self.generation,
            asset_id: asset.id.clone(),
            currency: self.currency,
            window_days: PRICE_HISTORY_WINDOW_DAYS,
        };
        tracing::debug!(asset = %asset.id, generation = %self.generation, "detail fetch started");
        self.state = DetailState::Selecting {
            asset,
            generation: self.generation,
        };
        fetch
    }

    /// Drop the selection. A fetch still in flight will resolve as stale.
    pub fn clear(&mut self) {
        self.generation = self.generation.next();
        self.state = DetailState::NoSelection;
    }

    /// Prices are currency-denominated, so a currency change reloads the
    /// selected asset's history.
    pub fn set_currency(&mut self, currency: Currency) -> Option<DetailFetch> {
        if self.currency == currency {
            return None;
        }
        self.currency = currency;
        let asset = self.state.asset()?.clone();
        Some(self.select(asset))
    }

    /// Swap in the selected asset's snapshot from a freshly loaded page.
    ///
    /// Leaves the lifecycle state and generation alone; only the figures shown
    /// in the stat cards change. Returns `true` if the snapshot was replaced.
    pub fn refresh_asset(&mut self, rows: &[AssetSnapshot]) -> bool {
        let current = match &mut self.state {
            DetailState::NoSelection => return false,
            DetailState::Selecting { asset, .. }
            | DetailState::Selected { asset, .. }
            | DetailState::Failed { asset } => asset,
        };
        match rows.iter().find(|row| row.id == current.id) {
            Some(fresh) if fresh != current => {
                *current = fresh.clone();
                true
            }
            _ => false,
        }
    }

    pub fn resolve(&mut self, resolution: DetailResolution) -> Applied {
        let current = match &self.state {
            DetailState::Selecting { asset, generation } => {
                *generation == resolution.generation && asset.id == resolution.asset_id
            }
            _ => false,
        };
        if !current {
            tracing::debug!(
                asset = %resolution.asset_id,
                stale = %resolution.generation,
                latest = %self.generation,
                "discarding stale price history"
            );
            return Applied::Stale;
        }

        let DetailState::Selecting { asset, .. } = std::mem::take(&mut self.state) else {
            return Applied::Stale;
        };
        self.state = match resolution.result {
            Ok(series) => DetailState::Selected { asset, series },
            Err(e) => {
                tracing::error!(asset = %asset.id, error = %e, "Error getting price history");
                DetailState::Failed { asset }
            }
        };
        Applied::Current
    }

    pub async fn run<S>(&mut self, fetch: DetailFetch, source: &S) -> Applied
    where
        S: PriceHistorySource + ?Sized,
    {
        let resolution = fetch.execute(source).await;
        self.resolve(resolution)
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn selected(&self) -> Option<&AssetSnapshot> {
        self.state.asset()
    }

    pub fn status(&self) -> FetchStatus {
        self.state.status()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn view(&self) -> Option<DetailView> {
        self.build_view(to_chart_series)
    }

    pub fn view_at<Tz>(&self, now: &DateTime<Tz>) -> Option<DetailView>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.build_view(|series| to_chart_series_at(series, now))
    }

    fn build_view(&self, chart: impl FnOnce(&PriceHistorySeries) -> ChartSeries) -> Option<DetailView> {
        let asset = self.state.asset()?;
        let chart = match &self.state {
            DetailState::Selected { series, .. } => Some(chart(series)),
            _ => None,
        };
        Some(DetailView {
            asset_id: asset.id.clone(),
            name: asset.name.clone(),
            cards: vec![
                StatCard {
                    title: "Total Supply",
                    value: asset.total_supply,
                },
                StatCard {
                    title: "Total Volume",
                    value: Some(asset.total_volume),
                },
            ],
            title: format!("Price History ({})", self.currency.label()),
            chart,
        })
    }
}
