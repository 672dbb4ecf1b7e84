//! Custom serde helpers for API wire formats.

/// Deserializes a `[timestampMillis, value]` pair into `(DateTime<Utc>, f64)`.
///
/// The market-chart endpoint encodes every sample as a two-element JSON array
/// rather than an object. Timestamps are read as numbers of either JSON kind.
pub mod timestamped_pair {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<(DateTime<Utc>, f64), D::Error>
    where
        D: Deserializer<'de>,
    {
        let (millis, value) = <(f64, f64)>::deserialize(deserializer)?;
        let millis = millis as i64;
        let timestamp = DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis)))?;
        Ok((timestamp, value))
    }
}
