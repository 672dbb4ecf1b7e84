//! Wire types for market list responses (REST).

use crate::shared::AssetId;
use serde::{Deserialize, Serialize};

/// One row of `GET /coins/markets`.
///
/// Numeric fields are nullable upstream for thinly traded assets. Fields the
/// dashboard does not show (`symbol`, `market_cap`, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketCoinResponse {
    pub id: AssetId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub current_price: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub total_volume: Option<f64>,
}
