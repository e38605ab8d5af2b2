//! Profile store
//!
//! Owns the UI-facing profile state:
//! - Language and view mode, restored from and persisted to preferences
//! - The loaded view model with its loading flag and error message
//! - Selectors derived from the above
//!
//! Loads are asynchronous. Each load takes a ticket; a response is applied
//! only if no newer load was started meanwhile, so a slow stale response
//! never overwrites the state of a later request.

use crate::document::CvDocument;
use crate::error::LoadFailure;
use crate::labels::UiLabels;
use crate::signal::{ReadSignal, Signal};
use crate::source::ProfileSource;
use crate::storage::PreferenceStorage;
use folio_profile::{
    Clock, Language, PersonalInfo, ProfileMapper, ProfileViewModel, Skills, SystemClock, ViewMode,
};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Preference key of the display language
pub const LANGUAGE_KEY: &str = "preferred_language";

/// Preference key of the view mode
pub const VIEW_MODE_KEY: &str = "preferred_view_mode";

/// Title used while no profile is loaded
const FALLBACK_TITLE: &str = "Portfolio";

/// Result of a [`ProfileStore::load_profile`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The profile was published
    Applied,
    /// The error state was published
    Failed(LoadFailure),
    /// A newer load started before this one resolved; nothing was published
    Superseded,
}

impl LoadOutcome {
    /// Whether data was published
    #[inline]
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Reactive source of truth for profile state
#[derive(Debug)]
pub struct ProfileStore {
    source: Arc<dyn ProfileSource>,
    storage: Arc<dyn PreferenceStorage>,
    clock: Arc<dyn Clock>,

    data: Signal<Option<Arc<ProfileViewModel>>>,
    is_loading: Signal<bool>,
    error: Signal<Option<String>>,
    language: Signal<Language>,
    view_mode: Signal<ViewMode>,

    /// Ticket of the most recently started load
    latest_load: AtomicU64,
}

impl ProfileStore {
    /// Create a store, restoring preferences from `storage`
    ///
    /// Read failures and unrecognised stored values are ignored; the
    /// defaults (`es`, `frontend`) apply. No profile is loaded yet.
    #[must_use]
    pub fn new(source: Arc<dyn ProfileSource>, storage: Arc<dyn PreferenceStorage>) -> Self {
        let language = restore(storage.as_ref(), LANGUAGE_KEY).unwrap_or_default();
        let view_mode = restore(storage.as_ref(), VIEW_MODE_KEY).unwrap_or_default();
        tracing::debug!(%language, %view_mode, "Restored preferences");

        Self {
            source,
            storage,
            clock: Arc::new(SystemClock),
            data: Signal::new(None),
            is_loading: Signal::new(false),
            error: Signal::new(None),
            language: Signal::new(language),
            view_mode: Signal::new(view_mode),
            latest_load: AtomicU64::new(0),
        }
    }

    /// With a custom clock for duration computations
    #[inline]
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Fetch and publish the profile for the current language
    ///
    /// Failures are recovered into the error state: `data` is cleared and
    /// `error` holds the localized load-error message. The returned outcome
    /// keeps the underlying failure for callers that want to tell fetch and
    /// parse failures apart.
    pub async fn load_profile(&self) -> LoadOutcome {
        let ticket = self.latest_load.fetch_add(1, Ordering::SeqCst) + 1;
        let language = self.language.get();

        self.is_loading.set(true);
        self.error.set(None);
        tracing::info!(%language, ticket, "Loading profile");

        let result = match self.source.fetch_profile(language).await {
            Ok(raw) => ProfileMapper::new(Arc::clone(&self.clock))
                .with_language(language)
                .map_to_view_model(&raw)
                .map_err(LoadFailure::from),
            Err(e) => Err(LoadFailure::from(e)),
        };

        if self.latest_load.load(Ordering::SeqCst) != ticket {
            tracing::debug!(%language, ticket, "Discarding superseded profile response");
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(view) => {
                tracing::info!(
                    %language,
                    experience = view.experience.len(),
                    total_years = view.total_experience_years,
                    "Profile loaded"
                );
                self.data.set(Some(Arc::new(view)));
                self.is_loading.set(false);
                LoadOutcome::Applied
            }
            Err(failure) => {
                tracing::error!(%language, error = %failure, "Error loading profile");
                self.error
                    .set(Some(UiLabels::for_language(language).load_error.to_string()));
                self.data.set(None);
                self.is_loading.set(false);
                LoadOutcome::Failed(failure)
            }
        }
    }

    /// Switch language, persist it and reload
    ///
    /// Returns `None` without fetching if `language` is already current.
    pub async fn set_language(&self, language: Language) -> Option<LoadOutcome> {
        if !self.language.set_if_changed(language) {
            return None;
        }
        self.persist(LANGUAGE_KEY, language.code());
        Some(self.load_profile().await)
    }

    /// Flip the view mode and persist it; returns the new mode
    pub fn toggle_view_mode(&self) -> ViewMode {
        let mode = self.view_mode.get().toggled();
        self.view_mode.set(mode);
        self.persist(VIEW_MODE_KEY, mode.as_str());
        mode
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            tracing::warn!(key, value, error = %e, "Could not save preference");
        }
    }

    // --- Read-only state ---

    /// Loaded view model
    #[inline]
    #[must_use]
    pub fn data(&self) -> Option<Arc<ProfileViewModel>> {
        self.data.get()
    }

    /// Whether a load is in flight
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    /// User-facing error message of the last failed load
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    /// Current language
    #[inline]
    #[must_use]
    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Current view mode
    #[inline]
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode.get()
    }

    // --- Selectors ---

    /// Personal info of the loaded profile
    #[must_use]
    pub fn personal_info(&self) -> Option<PersonalInfo> {
        self.data.with(|d| d.as_ref().map(|v| v.personal_info.clone()))
    }

    /// Skills of the loaded profile
    #[must_use]
    pub fn skills(&self) -> Option<Skills> {
        self.data.with(|d| d.as_ref().map(|v| v.skills.clone()))
    }

    /// Label table of the current language
    #[inline]
    #[must_use]
    pub fn ui(&self) -> &'static UiLabels {
        UiLabels::for_language(self.language())
    }

    /// "`name` | `title`", or a fallback while nothing is loaded
    #[must_use]
    pub fn document_title(&self) -> String {
        self.data.with(|d| match d {
            Some(v) => format!("{} | {}", v.personal_info.name, v.personal_info.title),
            None => FALLBACK_TITLE.to_string(),
        })
    }

    /// Downloadable CV for the current language
    #[must_use]
    pub fn cv_document(&self) -> CvDocument {
        let language = self.language();
        self.data
            .with(|d| CvDocument::for_language(language, d.as_deref().map(|v| &v.personal_info)))
    }

    // --- Subscriptions ---

    /// Observe the loaded view model
    #[inline]
    #[must_use]
    pub fn subscribe_data(&self) -> ReadSignal<Option<Arc<ProfileViewModel>>> {
        self.data.read_only()
    }

    /// Observe the loading flag
    #[inline]
    #[must_use]
    pub fn subscribe_loading(&self) -> ReadSignal<bool> {
        self.is_loading.read_only()
    }

    /// Observe the error message
    #[inline]
    #[must_use]
    pub fn subscribe_error(&self) -> ReadSignal<Option<String>> {
        self.error.read_only()
    }

    /// Observe the language
    #[inline]
    #[must_use]
    pub fn subscribe_language(&self) -> ReadSignal<Language> {
        self.language.read_only()
    }

    /// Observe the view mode
    #[inline]
    #[must_use]
    pub fn subscribe_view_mode(&self) -> ReadSignal<ViewMode> {
        self.view_mode.read_only()
    }
}

/// Read and parse one preference; `None` on absence, failure or mismatch
fn restore<T: FromStr>(storage: &dyn PreferenceStorage, key: &str) -> Option<T> {
    match storage.get(key) {
        Ok(Some(value)) => {
            let parsed = value.parse().ok();
            if parsed.is_none() {
                tracing::debug!(key, value = %value, "Ignoring unrecognised stored preference");
            }
            parsed
        }
        Ok(None) => None,
        Err(e) => {
            tracing::debug!(key, error = %e, "Could not read preference");
            None
        }
    }
}
