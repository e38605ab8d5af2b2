//! Construction errors for the HTTP collaborators

/// A collaborator could not be created
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Configured URL does not parse or uses an unsupported scheme
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client construction failed
    #[error("HTTP client setup failed: {0}")]
    Build(#[from] reqwest::Error),
}
