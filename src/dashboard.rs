//! `Dashboard` — the market table and the detail panel behind one facade.
//!
//! The two controllers keep independent fetch statuses; the dashboard only
//! fans shared inputs (the display currency) out to both and routes row
//! selection from the table into the detail panel.

use crate::domain::detail::{DetailFetch, DetailSelectionController};
use crate::domain::filter::{FilterState, PaginationPatch, PaginationWindow};
use crate::domain::market::{
    MarketDataSource, MarketFetch, MarketResolution, MarketTableController, RowRetention,
};
use crate::error::FilterError;
use crate::shared::{Applied, AssetId, Currency, FetchStatus, SortOrder};

/// Fetches started by one dashboard action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardFetches {
    pub table: Option<MarketFetch>,
    pub detail: Option<DetailFetch>,
}

impl DashboardFetches {
    pub fn is_empty(&self) -> bool {
        self.table.is_none() && self.detail.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub table: MarketTableController,
    pub detail: DetailSelectionController,
}

impl Dashboard {
    pub fn new(filter: FilterState, retention: RowRetention) -> Self {
        Self {
            table: MarketTableController::new(filter).with_retention(retention),
            detail: DetailSelectionController::new(filter.currency()),
        }
    }

    pub fn mount(&mut self) -> MarketFetch {
        self.table.mount()
    }

    pub fn set_currency(&mut self, currency: Currency) -> DashboardFetches {
        DashboardFetches {
            table: self.table.set_currency(currency),
            detail: self.detail.set_currency(currency),
        }
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> Option<MarketFetch> {
        self.table.set_sort_order(order)
    }

    pub fn set_pagination(&mut self, window: PaginationWindow) -> Option<MarketFetch> {
        self.table.set_pagination(window)
    }

    pub fn on_table_change(
        &mut self,
        patch: &PaginationPatch,
    ) -> Result<Option<MarketFetch>, FilterError> {
        self.table.on_table_change(patch)
    }

    /// Apply a settled table fetch. When it lands, the selected asset's
    /// snapshot is refreshed from the new rows so the detail cards follow the
    /// table's currency.
    pub fn resolve_table(&mut self, resolution: MarketResolution) -> Applied {
        let applied = self.table.resolve(resolution);
        if applied == Applied::Current
            && self.table.status() == FetchStatus::Success
            && self.table.filter().currency() == self.detail.currency()
        {
            self.detail.refresh_asset(self.table.rows());
        }
        applied
    }

    pub async fn run_table<S>(&mut self, fetch: MarketFetch, source: &S) -> Applied
    where
        S: MarketDataSource + ?Sized,
    {
        let resolution = fetch.execute(source).await;
        self.resolve_table(resolution)
    }

    /// Select a row currently shown in the table. Unknown ids are ignored.
    pub fn select_row(&mut self, id: &AssetId) -> Option<DetailFetch> {
        let asset = self.table.find(id)?.clone();
        Some(self.detail.select(asset))
    }

    pub fn clear_selection(&mut self) {
        self.detail.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::AssetSnapshot;
    use crate::error::RemoteFetchError;

    fn bitcoin(total_volume: f64) -> AssetSnapshot {
        AssetSnapshot {
            id: "bitcoin".into(),
            name: "Bitcoin".into(),
            image: String::new(),
            current_price: 1.0,
            price_change_percentage_24h: 0.0,
            circulating_supply: 0.0,
            total_supply: None,
            total_volume,
        }
    }

    fn page(fetch: MarketFetch, result: Result<Vec<AssetSnapshot>, RemoteFetchError>) -> MarketResolution {
        MarketResolution {
            generation: fetch.generation,
            query: fetch.query,
            result,
        }
    }

    fn loaded() -> Dashboard {
        let mut dashboard = Dashboard::default();
        let fetch = dashboard.mount();
        dashboard.resolve_table(page(fetch, Ok(vec![bitcoin(0.0)])));
        dashboard
    }

    #[test]
    fn test_currency_fans_out_to_both_controllers() {
        let mut dashboard = loaded();
        dashboard.select_row(&"bitcoin".into()).unwrap();

        let fetches = dashboard.set_currency(Currency::Eur);
        assert_eq!(fetches.table.unwrap().query.currency, Currency::Eur);
        assert_eq!(fetches.detail.unwrap().currency, Currency::Eur);
        assert!(dashboard.set_currency(Currency::Eur).is_empty());
    }

    #[test]
    fn test_currency_without_selection_only_refetches_table() {
        let mut dashboard = loaded();
        let fetches = dashboard.set_currency(Currency::Eur);
        assert!(fetches.table.is_some());
        assert!(fetches.detail.is_none());
    }

    #[test]
    fn test_currency_switch_refreshes_selected_snapshot() {
        let mut dashboard = Dashboard::default();
        let fetch = dashboard.mount();
        dashboard.resolve_table(page(fetch, Ok(vec![bitcoin(100.0)])));
        dashboard.select_row(&"bitcoin".into()).unwrap();

        let fetches = dashboard.set_currency(Currency::Eur);
        let table_fetch = fetches.table.unwrap();
        assert_eq!(dashboard.resolve_table(page(table_fetch, Ok(vec![bitcoin(50.0)]))), Applied::Current);

        let view = dashboard.detail.view().unwrap();
        assert_eq!(view.title, "Price History (EUR)");
        assert_eq!(view.cards[1].value, Some(50.0));
        assert_eq!(dashboard.detail.status(), FetchStatus::Loading, "history still refetching");
    }

    #[test]
    fn test_stale_or_failed_page_keeps_selected_snapshot() {
        let mut dashboard = Dashboard::default();
        let fetch = dashboard.mount();
        dashboard.resolve_table(page(fetch, Ok(vec![bitcoin(100.0)])));
        dashboard.select_row(&"bitcoin".into()).unwrap();

        let old = dashboard.set_sort_order(SortOrder::MarketCapAsc).unwrap();
        let new = dashboard.set_sort_order(SortOrder::MarketCapDesc).unwrap();
        assert_eq!(dashboard.resolve_table(page(old, Ok(vec![bitcoin(1.0)]))), Applied::Stale);
        dashboard.resolve_table(page(new, Err(RemoteFetchError::Status { status: 500 })));

        assert_eq!(dashboard.detail.selected().unwrap().total_volume, 100.0);
    }

    #[test]
    fn test_select_unknown_row_is_ignored() {
        let mut dashboard = loaded();
        assert!(dashboard.select_row(&"dogecoin".into()).is_none());
        assert_eq!(dashboard.detail.status(), FetchStatus::Idle);
    }

    #[test]
    fn test_clear_selection() {
        let mut dashboard = loaded();
        dashboard.select_row(&"bitcoin".into()).unwrap();
        dashboard.clear_selection();
        assert!(dashboard.detail.selected().is_none());
    }
}
