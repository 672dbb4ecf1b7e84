//! Filter domain — currency, sort order and pagination window.
//!
//! Mutations here are the only thing that makes the market table refetch.
//! Each axis is replaced whole; the table widget's partial pagination
//! updates go through [`FilterState::merge_pagination`].

use crate::error::FilterError;
use crate::shared::{Currency, SortOrder};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Estimate handed to the pagination widget; the markets endpoint does not
/// report a total.
pub const DEFAULT_TOTAL: u64 = 10_000;

/// Current page, page size and total-count estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationWindow {
    pub current: NonZeroU32,
    pub page_size: NonZeroU32,
    pub total: u64,
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self {
            current: NonZeroU32::MIN,
            page_size: DEFAULT_PAGE_SIZE,
            total: DEFAULT_TOTAL,
        }
    }
}

/// Partial pagination update as reported by a table widget.
///
/// Absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationPatch {
    pub current: Option<u32>,
    pub page_size: Option<u32>,
    pub total: Option<u64>,
}

impl PaginationWindow {
    /// Merge a widget update field by field. Zero page or page size is rejected.
    pub fn merged(&self, patch: &PaginationPatch) -> Result<Self, FilterError> {
        let current = match patch.current {
            Some(p) => NonZeroU32::new(p).ok_or(FilterError::ZeroPage)?,
            None => self.current,
        };
        let page_size = match patch.page_size {
            Some(s) => NonZeroU32::new(s).ok_or(FilterError::ZeroPageSize)?,
            None => self.page_size,
        };
        Ok(Self {
            current,
            page_size,
            total: patch.total.unwrap_or(self.total),
        })
    }
}

/// Immutable snapshot of everything a market page request depends on.
///
/// Captured in one read of [`FilterState`], so a request can never mix the
/// currency of one state with the page of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketQuery {
    pub currency: Currency,
    pub order: SortOrder,
    pub page: NonZeroU32,
    pub page_size: NonZeroU32,
}

impl MarketQuery {
    pub fn new(
        currency: Currency,
        order: SortOrder,
        page: u32,
        page_size: u32,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            currency,
            order,
            page: NonZeroU32::new(page).ok_or(FilterError::ZeroPage)?,
            page_size: NonZeroU32::new(page_size).ok_or(FilterError::ZeroPageSize)?,
        })
    }
}

/// User-controlled filter state for the market table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    currency: Currency,
    order: SortOrder,
    pagination: PaginationWindow,
}

impl FilterState {
    pub fn new(currency: Currency, order: SortOrder, pagination: PaginationWindow) -> Self {
        Self {
            currency,
            order,
            pagination,
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn pagination(&self) -> PaginationWindow {
        self.pagination
    }

    /// Returns `true` if the value changed.
    pub fn set_currency(&mut self, currency: Currency) -> bool {
        replace(&mut self.currency, currency)
    }

    /// Returns `true` if the value changed.
    pub fn set_sort_order(&mut self, order: SortOrder) -> bool {
        replace(&mut self.order, order)
    }

    /// Replace the whole window. Returns `true` if the value changed.
    pub fn set_pagination(&mut self, window: PaginationWindow) -> bool {
        replace(&mut self.pagination, window)
    }

    /// Merge a widget update onto the current window. On error the state is
    /// left untouched.
    pub fn merge_pagination(&mut self, patch: &PaginationPatch) -> Result<bool, FilterError> {
        let merged = self.pagination.merged(patch)?;
        Ok(self.set_pagination(merged))
    }

    pub fn query(&self) -> MarketQuery {
        MarketQuery {
            currency: self.currency,
            order: self.order,
            page: self.pagination.current,
            page_size: self.pagination.page_size,
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_defaults() {
        let state = FilterState::default();
        assert_eq!(state.currency(), Currency::Usd);
        assert_eq!(state.order(), SortOrder::MarketCapDesc);
        assert_eq!(state.pagination().current.get(), 1);
        assert_eq!(state.pagination().page_size.get(), 10);
        assert_eq!(state.pagination().total, 10_000);
    }

    #[test]
    fn test_setters_report_change() {
        let mut state = FilterState::default();
        assert!(!state.set_currency(Currency::Usd));
        assert!(state.set_currency(Currency::Eur));
        assert!(state.set_sort_order(SortOrder::MarketCapAsc));
        assert!(!state.set_sort_order(SortOrder::MarketCapAsc));
    }

    #[test]
    fn test_page_size_change_keeps_current_page() {
        let mut state = FilterState::default();
        state.merge_pagination(&PaginationPatch {
            current: Some(4),
            ..Default::default()
        })
        .unwrap();

        let changed = state
            .merge_pagination(&PaginationPatch {
                page_size: Some(50),
                ..Default::default()
            })
            .unwrap();

        assert!(changed);
        assert_eq!(state.pagination().current, nz(4));
        assert_eq!(state.pagination().page_size, nz(50));
        assert_eq!(state.pagination().total, DEFAULT_TOTAL);
    }

    #[test]
    fn test_merge_applies_every_supplied_field() {
        let mut state = FilterState::default();
        state
            .merge_pagination(&PaginationPatch {
                current: Some(1),
                page_size: Some(20),
                total: Some(500),
            })
            .unwrap();
        assert_eq!(
            state.pagination(),
            PaginationWindow {
                current: nz(1),
                page_size: nz(20),
                total: 500
            }
        );
    }

    #[test]
    fn test_empty_patch_is_not_a_change() {
        let mut state = FilterState::default();
        assert!(!state.merge_pagination(&PaginationPatch::default()).unwrap());
    }

    #[test]
    fn test_zero_values_are_rejected_without_partial_update() {
        let mut state = FilterState::default();
        let before = state;
        assert_eq!(
            state.merge_pagination(&PaginationPatch {
                current: Some(3),
                page_size: Some(0),
                total: None,
            }),
            Err(FilterError::ZeroPageSize)
        );
        assert_eq!(
            state.merge_pagination(&PaginationPatch {
                current: Some(0),
                ..Default::default()
            }),
            Err(FilterError::ZeroPage)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_query_snapshots_all_axes() {
        let mut state = FilterState::default();
        state.set_currency(Currency::Eur);
        state.set_sort_order(SortOrder::MarketCapAsc);
        state.set_pagination(PaginationWindow {
            current: nz(2),
            page_size: nz(10),
            total: 100,
        });
        let query = state.query();

        state.set_currency(Currency::Usd);
        assert_eq!(query, MarketQuery::new(Currency::Eur, SortOrder::MarketCapAsc, 2, 10).unwrap());
    }

    #[test]
    fn test_market_query_validation() {
        assert_eq!(
            MarketQuery::new(Currency::Usd, SortOrder::MarketCapDesc, 0, 10),
            Err(FilterError::ZeroPage)
        );
        assert_eq!(
            MarketQuery::new(Currency::Usd, SortOrder::MarketCapDesc, 1, 0),
            Err(FilterError::ZeroPageSize)
        );
    }
}
