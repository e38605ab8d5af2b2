//! Command implementations
//!
//! `App` wires the store, analytics and contact client from a
//! [`FolioConfig`]; each command writes its output to the given writer.

use crate::config::{DataLocation, FolioConfig};
use crate::render;
use anyhow::{anyhow, bail, Context, Result};
use folio_client::{
    Analytics, ContactClient, ContactMessage, DirectoryProfileSource,
    HttpAnalyticsSink, HttpProfileSource, NullSink,
};
use folio_profile::Language;
use folio_store::{JsonFileStorage, LoadOutcome, PreferenceStorage, ProfileSource, ProfileStore};
use std::io::Write;
use std::sync::Arc;

/// Wired application
#[derive(Debug)]
pub struct App {
    store: ProfileStore,
    analytics: Analytics,
    contact: Option<ContactClient>,
}

impl App {
    /// Build every collaborator from `config`
    ///
    /// # Errors
    /// Returns an error if a configured URL is invalid.
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        let timeout = config.request_timeout();

        let source: Arc<dyn ProfileSource> = match config.data_location() {
            DataLocation::Remote(url) => Arc::new(
                HttpProfileSource::with_timeout(&url, timeout).context("invalid data_url")?,
            ),
            DataLocation::Directory(dir) => Arc::new(DirectoryProfileSource::new(dir)),
        };
        let storage: Arc<dyn PreferenceStorage> =
            Arc::new(JsonFileStorage::new(&config.preferences_path));

        let analytics =
            match (config.analytics.tracking_id(), config.analytics.endpoint.as_deref()) {
                (Some(id), Some(endpoint)) => {
                    let sink = HttpAnalyticsSink::new(endpoint, id, timeout)
                        .context("invalid analytics endpoint")?;
                    Analytics::new(&config.analytics, Arc::new(sink))
                }
                (Some(_), None) => {
                    tracing::warn!(
                        "analytics.measurement_id is set but analytics.endpoint is not; \
                         events will not be sent"
                    );
                    let mut undeliverable = config.analytics.clone();
                    undeliverable.measurement_id = None;
                    Analytics::new(&undeliverable, Arc::new(NullSink))
                }
                (None, _) => Analytics::new(&config.analytics, Arc::new(NullSink)),
            };

        let contact = config
            .contact
            .endpoint
            .as_deref()
            .map(|endpoint| ContactClient::new(endpoint, timeout))
            .transpose()
            .context("invalid contact endpoint")?;

        Ok(Self::new(
            ProfileStore::new(source, storage),
            analytics,
            contact,
        ))
    }

    /// Assemble from prebuilt parts
    #[must_use]
    pub fn new(store: ProfileStore, analytics: Analytics, contact: Option<ContactClient>) -> Self {
        Self {
            store,
            analytics,
            contact,
        }
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Analytics service commands report to
    #[inline]
    #[must_use]
    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    /// Load and print the profile
    ///
    /// # Errors
    /// Returns an error if the profile cannot be loaded or written.
    pub async fn show(&self, json: bool, out: &mut impl Write) -> Result<()> {
        self.load().await?;
        let data = self
            .store
            .data()
            .ok_or_else(|| anyhow!("no profile loaded"))?;
        self.analytics.track_page_view("/");

        if json {
            serde_json::to_writer_pretty(&mut *out, data.as_ref())?;
            writeln!(out)?;
        } else {
            let text = render::render_profile(&data, self.store.ui(), self.store.view_mode())?;
            out.write_all(text.as_bytes())?;
        }
        Ok(())
    }

    /// Switch language, reload and print the header
    ///
    /// # Errors
    /// Returns an error if the reload fails.
    pub async fn set_language(&self, language: Language, out: &mut impl Write) -> Result<()> {
        match self.store.set_language(language).await {
            Some(outcome) => check(&self.store, outcome)?,
            None => self.load().await?,
        }
        if let Some(data) = self.store.data() {
            out.write_all(render::render_header(&data).as_bytes())?;
        }
        writeln!(out, "{}: {}", self.store.ui().download_cv, self.store.cv_document().file_name)?;
        Ok(())
    }

    /// Flip the view mode
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn toggle_view(&self, out: &mut impl Write) -> Result<()> {
        let mode = self.store.toggle_view_mode();
        self.analytics.track_view_change(mode);
        writeln!(out, "{mode}")?;
        writeln!(out, "{}", self.store.ui().switch_label(mode))?;
        Ok(())
    }

    /// Validate and submit a contact message
    ///
    /// # Errors
    /// Returns an error if no endpoint is configured, the message is
    /// invalid, or delivery fails.
    pub async fn contact(&self, message: &ContactMessage, out: &mut impl Write) -> Result<()> {
        message.validate()?;
        let Some(client) = &self.contact else {
            bail!("no contact endpoint configured");
        };
        client.send(message).await?;
        writeln!(out, "Message sent")?;
        Ok(())
    }

    async fn load(&self) -> Result<()> {
        let outcome = self.store.load_profile().await;
        check(&self.store, outcome)
    }
}

fn check(store: &ProfileStore, outcome: LoadOutcome) -> Result<()> {
    match outcome {
        LoadOutcome::Applied => Ok(()),
        LoadOutcome::Failed(failure) => {
            let message = store.error().unwrap_or_else(|| failure.to_string());
            Err(anyhow!(failure).context(message))
        }
        LoadOutcome::Superseded => bail!("profile load was superseded"),
    }
}
