//! Conversion: MarketCoinResponse → AssetSnapshot.

use super::wire::MarketCoinResponse;
use super::AssetSnapshot;

impl From<MarketCoinResponse> for AssetSnapshot {
    /// Missing numbers render as zero. `total_supply` stays optional since
    /// uncapped assets legitimately have none.
    fn from(source: MarketCoinResponse) -> Self {
        if source.current_price.is_none() {
            tracing::debug!(asset = %source.id, "market row without a current price");
        }
        Self {
            id: source.id,
            name: source.name,
            image: source.image,
            current_price: source.current_price.unwrap_or_default(),
            price_change_percentage_24h: source.price_change_percentage_24h.unwrap_or_default(),
            circulating_supply: source.circulating_supply.unwrap_or_default(),
            total_supply: source.total_supply,
            total_volume: source.total_volume.unwrap_or_default(),
        }
    }
}
