//! Column descriptors for the market table.
//!
//! Descriptors are a pure function of the active currency and are rebuilt on
//! every render, so a price cell can never carry a previous currency's suffix.

use super::AssetSnapshot;
use crate::domain::price_history::chart::{to_sparkline_directive, SparklineDirective};
use crate::shared::Currency;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKey {
    Name,
    CurrentPrice,
    PriceChangePercentage24h,
    CirculatingSupply,
}

impl ColumnKey {
    /// Field of the API row the column reads.
    pub fn data_index(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CurrentPrice => "current_price",
            Self::PriceChangePercentage24h => "price_change_percentage_24h",
            Self::CirculatingSupply => "circulating_supply",
        }
    }
}

/// How a column turns a snapshot into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CellRenderer {
    /// Icon followed by the asset name.
    NameWithIcon,
    /// Raw value followed by the lowercase currency code.
    PriceIn(Currency),
    /// Up/down trend glyph for the 24h change.
    Sparkline,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    pub key: ColumnKey,
    pub title: &'static str,
    pub renderer: CellRenderer,
}

/// A rendered table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    NameWithIcon { name: String, icon: String },
    Text { text: String },
    Sparkline(SparklineDirective),
}

impl ColumnDescriptor {
    pub fn render(&self, asset: &AssetSnapshot) -> Cell {
        match (self.renderer, self.key) {
            (CellRenderer::NameWithIcon, _) => Cell::NameWithIcon {
                name: asset.name.clone(),
                icon: asset.image.clone(),
            },
            (CellRenderer::PriceIn(currency), _) => Cell::Text {
                text: format!("{} {}", asset.current_price, currency.as_str()),
            },
            (CellRenderer::Sparkline, _) => {
                Cell::Sparkline(to_sparkline_directive(asset.price_change_percentage_24h))
            }
            (CellRenderer::Plain, key) => Cell::Text {
                text: plain_value(asset, key),
            },
        }
    }
}

fn plain_value(asset: &AssetSnapshot, key: ColumnKey) -> String {
    match key {
        ColumnKey::Name => asset.name.clone(),
        ColumnKey::CurrentPrice => asset.current_price.to_string(),
        ColumnKey::PriceChangePercentage24h => asset.price_change_percentage_24h.to_string(),
        ColumnKey::CirculatingSupply => asset.circulating_supply.to_string(),
    }
}

/// Column set for the given display currency.
pub fn columns(currency: Currency) -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor {
            key: ColumnKey::Name,
            title: "Name",
            renderer: CellRenderer::NameWithIcon,
        },
        ColumnDescriptor {
            key: ColumnKey::CurrentPrice,
            title: "Current Price",
            renderer: CellRenderer::PriceIn(currency),
        },
        ColumnDescriptor {
            key: ColumnKey::PriceChangePercentage24h,
            title: "24H Price Change, %",
            renderer: CellRenderer::Sparkline,
        },
        ColumnDescriptor {
            key: ColumnKey::CirculatingSupply,
            title: "Circulating Supply",
            renderer: CellRenderer::Plain,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_history::chart::Direction;

    fn asset(price: f64, change: f64) -> AssetSnapshot {
        AssetSnapshot {
            id: "ethereum".into(),
            name: "Ethereum".into(),
            image: "https://assets.example/eth.png".into(),
            current_price: price,
            price_change_percentage_24h: change,
            circulating_supply: 120_000_000.0,
            total_supply: None,
            total_volume: 1.0,
        }
    }

    fn price_cell(currency: Currency, asset: &AssetSnapshot) -> Cell {
        columns(currency)
            .into_iter()
            .find(|c| c.key == ColumnKey::CurrentPrice)
            .unwrap()
            .render(asset)
    }

    #[test]
    fn test_price_suffix_follows_currency() {
        let a = asset(3120.5, 1.0);
        assert_eq!(
            price_cell(Currency::Usd, &a),
            Cell::Text {
                text: "3120.5 usd".into()
            }
        );
        assert_eq!(
            price_cell(Currency::Eur, &a),
            Cell::Text {
                text: "3120.5 eur".into()
            }
        );
    }

    #[test]
    fn test_whole_prices_render_without_fraction() {
        assert_eq!(
            price_cell(Currency::Usd, &asset(67000.0, 0.0)),
            Cell::Text {
                text: "67000 usd".into()
            }
        );
    }

    #[test]
    fn test_column_order_and_titles() {
        let titles: Vec<_> = columns(Currency::Usd).iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            ["Name", "Current Price", "24H Price Change, %", "Circulating Supply"]
        );
        assert_eq!(ColumnKey::CurrentPrice.data_index(), "current_price");
    }

    #[test]
    fn test_change_column_renders_sparkline() {
        let cols = columns(Currency::Usd);
        let cell = cols[2].render(&asset(1.0, -0.3));
        assert!(matches!(cell, Cell::Sparkline(d) if d.direction == Direction::Down));
        let cell = cols[2].render(&asset(1.0, 0.3));
        assert!(matches!(cell, Cell::Sparkline(d) if d.direction == Direction::Up));
    }

    #[test]
    fn test_name_and_supply_cells() {
        let cols = columns(Currency::Eur);
        let a = asset(1.0, 0.0);
        assert_eq!(
            cols[0].render(&a),
            Cell::NameWithIcon {
                name: "Ethereum".into(),
                icon: "https://assets.example/eth.png".into()
            }
        );
        assert_eq!(
            cols[3].render(&a),
            Cell::Text {
                text: "120000000".into()
            }
        );
    }
}
