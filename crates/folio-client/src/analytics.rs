//! Analytics event tracking
//!
//! Events are fire-and-forget: nothing here returns an error to the caller
//! and sink failures are only logged. Without a real measurement id the
//! service stays uninitialised and events are logged in dev mode instead.

use crate::config::AnalyticsConfig;
use crate::error::ClientError;
use crate::http;
use folio_profile::{Language, ViewMode};
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

/// Event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Engagement,
    Interaction,
    Conversion,
    Navigation,
}

impl EventCategory {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Engagement => "engagement",
            EventCategory::Interaction => "interaction",
            EventCategory::Conversion => "conversion",
            EventCategory::Navigation => "navigation",
        }
    }
}

/// Outbound link targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalPlatform {
    Linkedin,
    Github,
    Email,
}

impl Display for ExternalPlatform {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExternalPlatform::Linkedin => "linkedin",
            ExternalPlatform::Github => "github",
            ExternalPlatform::Email => "email",
        })
    }
}

/// A categorised domain event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub action: String,
    pub category: EventCategory,
    pub label: Option<String>,
    pub value: Option<i64>,
}

impl AnalyticsEvent {
    /// Create an event without label or value
    #[inline]
    #[must_use]
    pub fn new(action: impl Into<String>, category: EventCategory) -> Self {
        Self {
            action: action.into(),
            category,
            label: None,
            value: None,
        }
    }

    /// With label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// With numeric value
    #[inline]
    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }
}

/// Event as handed to a sink: a name and free-form parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedEvent {
    pub name: String,
    pub params: Map<String, Value>,
}

impl TrackedEvent {
    /// Create an event with parameters
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// String parameter by key
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }
}

impl From<AnalyticsEvent> for TrackedEvent {
    fn from(event: AnalyticsEvent) -> Self {
        let mut params = Map::new();
        params.insert("event_category".into(), event.category.as_str().into());
        if let Some(label) = event.label {
            params.insert("event_label".into(), label.into());
        }
        if let Some(value) = event.value {
            params.insert("value".into(), value.into());
        }
        Self {
            name: event.action,
            params,
        }
    }
}

/// Destination of tracked events
///
/// Implementations must not block and must swallow their own failures.
pub trait AnalyticsSink: Debug + Send + Sync {
    fn send(&self, event: TrackedEvent);
}

/// Drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn send(&self, event: TrackedEvent) {
        tracing::trace!(name = %event.name, "Dropping analytics event");
    }
}

/// Posts events as JSON to a collector endpoint
///
/// Each event is delivered on a spawned task; without a Tokio runtime the
/// event is dropped.
#[derive(Debug, Clone)]
pub struct HttpAnalyticsSink {
    client: Client,
    endpoint: Url,
    measurement_id: String,
}

impl HttpAnalyticsSink {
    /// Sink posting to `endpoint` on behalf of `measurement_id`
    ///
    /// # Errors
    /// `ClientError` if the endpoint is invalid or the client cannot be built.
    pub fn new(
        endpoint: &str,
        measurement_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client: http::client(timeout)?,
            endpoint: http::parse_url(endpoint)?,
            measurement_id: measurement_id.into(),
        })
    }

    fn payload(&self, event: &TrackedEvent) -> Value {
        json!({
            "measurement_id": self.measurement_id,
            "events": [event],
        })
    }
}

impl AnalyticsSink for HttpAnalyticsSink {
    fn send(&self, event: TrackedEvent) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(name = %event.name, "No runtime, dropping analytics event");
            return;
        };

        let request = self
            .client
            .post(self.endpoint.clone())
            .json(&self.payload(&event));
        runtime.spawn(async move {
            match request.send().await {
                Ok(response) if !response.status().is_success() => {
                    tracing::debug!(
                        name = %event.name,
                        status = response.status().as_u16(),
                        "Analytics collector rejected event"
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(name = %event.name, error = %e, "Analytics delivery failed");
                }
            }
        });
    }
}

/// Domain-level event tracking
#[derive(Debug, Clone)]
pub struct Analytics {
    sink: Arc<dyn AnalyticsSink>,
    initialized: bool,
    production: bool,
}

impl Analytics {
    /// Create from configuration
    ///
    /// Stays uninitialised unless a real measurement id is configured.
    #[must_use]
    pub fn new(config: &AnalyticsConfig, sink: Arc<dyn AnalyticsSink>) -> Self {
        let initialized = config.tracking_id().is_some();
        if !initialized {
            tracing::warn!("Analytics: no tracking id configured (dev mode)");
        }
        Self {
            sink,
            initialized,
            production: config.production,
        }
    }

    /// Service that never forwards events
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            sink: Arc::new(NullSink),
            initialized: false,
            production: true,
        }
    }

    /// Whether events are forwarded to the sink
    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Track a categorised event
    pub fn log_event(&self, event: AnalyticsEvent) {
        if !self.initialized {
            if !self.production {
                tracing::debug!(?event, "[analytics dev]");
            }
            return;
        }
        self.sink.send(event.into());
    }

    /// Track a free-form event
    pub fn track_event(&self, name: &str, params: Map<String, Value>) {
        let event = TrackedEvent::new(name, params);
        if !self.initialized {
            if !self.production {
                tracing::debug!(?event, "[analytics dev]");
            }
            return;
        }
        self.sink.send(event);
    }

    /// Track a page view
    pub fn track_page_view(&self, path: &str) {
        let mut params = Map::new();
        params.insert("page_path".into(), path.into());
        self.track_event("page_view", params);
    }

    /// Track a CV download
    pub fn track_cv_download(&self, file_name: &str, language: Language) {
        self.log_event(
            AnalyticsEvent::new("track_cv_download", EventCategory::Conversion)
                .with_label(format!("{file_name} ({language})")),
        );
    }

    /// Track interaction with a technology in the stack grid
    pub fn track_tech_interaction(&self, tech_name: &str, category: &str) {
        self.log_event(
            AnalyticsEvent::new("track_tech_interaction", EventCategory::Interaction)
                .with_label(format!("{category} > {tech_name}")),
        );
    }

    /// Track an outbound link click
    pub fn track_external_link(&self, platform: ExternalPlatform) {
        self.log_event(
            AnalyticsEvent::new("track_external_link", EventCategory::Engagement)
                .with_label(platform.to_string()),
        );
    }

    /// Track a view-mode switch
    pub fn track_view_change(&self, mode: ViewMode) {
        self.log_event(
            AnalyticsEvent::new("view_mode_toggle", EventCategory::Interaction)
                .with_label(mode.as_str()),
        );
    }
}
