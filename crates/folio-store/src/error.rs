//! Error types for the profile store and its collaborators
//!
//! None of these escape the store's public operations: fetch and mapping
//! failures become the store's error state, persistence failures are logged.

use folio_profile::{Language, MapError};

/// Retrieving a profile document failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("profile request for {language} returned HTTP {status}")]
    Status { language: Language, status: u16 },

    /// Network or connection failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Request exceeded its deadline
    #[error("request timed out after {duration_secs}s")]
    Timeout { duration_secs: u64 },

    /// Payload is not a valid profile document
    #[error("malformed profile document: {0}")]
    Decode(String),

    /// Local document could not be read
    #[error("profile document unavailable: {0}")]
    Unavailable(String),
}

impl FetchError {
    /// Check if retrying the same request may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout { .. } => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::Decode(_) | Self::Unavailable(_) => false,
        }
    }
}

/// Why a profile load did not publish data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadFailure {
    /// The document could not be fetched
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The document contained malformed dates
    #[error("mapping failed: {0}")]
    Map(#[from] MapError),
}

impl LoadFailure {
    /// Check if the failure came from the fetch collaborator
    #[inline]
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Check if the failure came from mapping
    #[inline]
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Map(_))
    }
}

/// Key-value persistence failed
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Storage is not available in this context
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Underlying I/O failed
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be decoded
    #[error("stored preferences are corrupt: {0}")]
    Corrupt(String),
}
