//! Profile document sources
//!
//! Both sources look up `cv-data-<lang>.json`: one under a base URL, the
//! other in a local directory.

use crate::error::ClientError;
use crate::http;
use async_trait::async_trait;
use folio_profile::{Language, RawProfile};
use folio_store::{profile_document_name, FetchError, ProfileSource};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::path::PathBuf;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches profile documents over HTTP
#[derive(Debug, Clone)]
pub struct HttpProfileSource {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpProfileSource {
    /// Source rooted at `base_url` with the default timeout
    ///
    /// # Errors
    /// `ClientError` if the URL is invalid or the client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Source rooted at `base_url` with a request timeout
    ///
    /// # Errors
    /// `ClientError` if the URL is invalid or the client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            client: http::client(timeout)?,
            base_url: http::parse_url(base_url)?,
            timeout,
        })
    }

    /// URL of the document for `language`
    #[must_use]
    pub fn document_url(&self, language: Language) -> Url {
        http::join(&self.base_url, &profile_document_name(language))
    }

    /// Download a binary document such as the CV PDF
    ///
    /// `path` is resolved against the root of the base URL's host. Static
    /// hosts commonly answer unknown paths with the site's HTML index and a
    /// 200 status; such responses are rejected.
    ///
    /// # Errors
    /// `FetchError` on transport failure, non-success status or HTML body.
    pub async fn download_document(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = self
            .base_url
            .join(&format!("/{}", path.trim_start_matches('/')))
            .map_err(|e| FetchError::Transport(format!("invalid document path {path:?}: {e}")))?;
        tracing::debug!(%url, "Downloading document");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| http::fetch_error(&e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!("{url} returned HTTP {status}")));
        }

        let is_html = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim_start().starts_with("text/html"));
        if is_html {
            return Err(FetchError::Decode(format!(
                "{url} served an HTML page instead of the document"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| http::fetch_error(&e, self.timeout))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    async fn fetch_profile(&self, language: Language) -> Result<RawProfile, FetchError> {
        let url = self.document_url(language);
        tracing::debug!(%url, "Fetching profile document");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| http::fetch_error(&e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                language,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| http::fetch_error(&e, self.timeout))?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Reads profile documents from a local directory
#[derive(Debug, Clone)]
pub struct DirectoryProfileSource {
    dir: PathBuf,
}

impl DirectoryProfileSource {
    /// Source reading from `dir`
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the document for `language`
    #[must_use]
    pub fn document_path(&self, language: Language) -> PathBuf {
        self.dir.join(profile_document_name(language))
    }
}

#[async_trait]
impl ProfileSource for DirectoryProfileSource {
    async fn fetch_profile(&self, language: Language) -> Result<RawProfile, FetchError> {
        let path = self.document_path(language);
        tracing::debug!(path = %path.display(), "Reading profile document");

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| FetchError::Unavailable(format!("{}: {e}", path.display())))?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
