//! Profile document fetch collaborator

use crate::error::FetchError;
use async_trait::async_trait;
use folio_profile::{Language, RawProfile};
use std::fmt::Debug;
use std::sync::Arc;

/// Fetches the raw profile document for a language
///
/// Any non-success response or malformed payload is a [`FetchError`].
#[async_trait]
pub trait ProfileSource: Debug + Send + Sync {
    /// Fetch the document for `language`
    async fn fetch_profile(&self, language: Language) -> Result<RawProfile, FetchError>;
}

#[async_trait]
impl<S: ProfileSource + ?Sized> ProfileSource for Arc<S> {
    async fn fetch_profile(&self, language: Language) -> Result<RawProfile, FetchError> {
        (**self).fetch_profile(language).await
    }
}

/// File name of the document for `language` (`cv-data-<lang>.json`)
#[inline]
#[must_use]
pub fn profile_document_name(language: Language) -> String {
    format!("cv-data-{}.json", language.code())
}
