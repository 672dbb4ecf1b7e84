//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the API sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── AssetId ─────────────────────────────────────────────────────────────────

/// Newtype for asset identifiers (e.g. `"bitcoin"`, `"wrapped-steth"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AssetId(s))
    }
}

// ─── Currency ────────────────────────────────────────────────────────────────

/// Display currency; also the `vs_currency` query value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Eur];

    /// Wire value, as sent in `vs_currency` and appended to price cells.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Eur => "eur",
        }
    }

    /// Selector label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "usd" => Ok(Self::Usd),
            "eur" => Ok(Self::Eur),
            other => Err(format!("Unsupported currency: {}", other)),
        }
    }
}

// ─── SortOrder ───────────────────────────────────────────────────────────────

/// Market list ordering; transmitted verbatim as the `order` query value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "market_cap_desc")]
    MarketCapDesc,
    #[serde(rename = "market_cap_asc")]
    MarketCapAsc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::MarketCapDesc, SortOrder::MarketCapAsc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarketCapDesc => "market_cap_desc",
            Self::MarketCapAsc => "market_cap_asc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MarketCapDesc => "Market cap descending",
            Self::MarketCapAsc => "Market cap ascending",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market_cap_desc" => Ok(Self::MarketCapDesc),
            "market_cap_asc" => Ok(Self::MarketCapAsc),
            other => Err(format!("Unsupported order: {}", other)),
        }
    }
}

// ─── Generation ──────────────────────────────────────────────────────────────

/// Monotonically increasing tag attached to every fetch a controller starts.
///
/// A resolution is only applied when its generation equals the controller's
/// latest one; anything older is a stale result and gets dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ─── FetchStatus ─────────────────────────────────────────────────────────────

/// Lifecycle of the latest fetch owned by one controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Outcome of handing a resolution back to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The resolution belonged to the latest fetch and updated state.
    Current,
    /// A newer fetch (or a clear) superseded it; state is untouched.
    Stale,
}
