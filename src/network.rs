//! Network URL constants.

/// Default REST API base URL (CoinGecko public API, v3).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Environment variable hosts and tests may use to point at another API base.
pub const API_URL_ENV: &str = "COINBOARD_API_URL";
