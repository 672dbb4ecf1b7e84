//! Unified error types.

use thiserror::Error;

/// Top-level crate error.
#[derive(Error, Debug)]
pub enum CoinboardError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] RemoteFetchError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure of a remote market-data request.
///
/// Carries no payload: a failed fetch means "no data", never "stale data".
#[derive(Error, Debug)]
pub enum RemoteFetchError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with status {status}")]
    Status { status: u16 },

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl RemoteFetchError {
    /// The HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            #[cfg(feature = "http")]
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::MaxRetriesExceeded { .. } => None,
        }
    }
}

/// Rejected filter or pagination update.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    #[error("Page numbers start at 1")]
    ZeroPage,

    #[error("Page size must be greater than zero")]
    ZeroPageSize,
}
