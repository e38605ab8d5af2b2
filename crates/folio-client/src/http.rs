//! Shared HTTP client helpers

use crate::error::ClientError;
use folio_store::FetchError;
use reqwest::{Client, Url};
use std::time::Duration;

/// User agent sent with every request
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Build a client with a global request timeout
pub(crate) fn client(timeout: Duration) -> Result<Client, ClientError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

/// Parse an `http`/`https` URL
pub(crate) fn parse_url(url: &str) -> Result<Url, ClientError> {
    let invalid = |reason: String| ClientError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(invalid(format!("unsupported scheme {scheme:?}"))),
    }
}

/// `base` with `name` appended as the last path segment
pub(crate) fn join(base: &Url, name: &str) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(name);
    }
    url
}

/// Classify a transport-level failure
pub(crate) fn fetch_error(error: &reqwest::Error, timeout: Duration) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            duration_secs: timeout.as_secs(),
        }
    } else if error.is_decode() {
        FetchError::Decode(error.to_string())
    } else {
        FetchError::Transport(error.to_string())
    }
}
