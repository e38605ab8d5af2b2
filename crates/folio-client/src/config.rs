//! Configuration of the HTTP collaborators

use serde::{Deserialize, Serialize};

/// Measurement id shipped in templates; treated as "not configured"
pub const PLACEHOLDER_MEASUREMENT_ID: &str = "G-MEASUREMENT-ID";

/// Contact-form endpoint settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Endpoint accepting `{name, email, message}` as JSON
    pub endpoint: Option<String>,
}

impl ContactConfig {
    /// With endpoint
    #[inline]
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// Analytics settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Tag-manager measurement id
    pub measurement_id: Option<String>,
    /// Collector endpoint events are posted to
    pub endpoint: Option<String>,
    /// Suppresses dev-mode event logging
    pub production: bool,
}

impl AnalyticsConfig {
    /// With measurement id
    #[inline]
    #[must_use]
    pub fn with_measurement_id(mut self, id: impl Into<String>) -> Self {
        self.measurement_id = Some(id.into());
        self
    }

    /// With collector endpoint
    #[inline]
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// As production
    #[inline]
    #[must_use]
    pub fn production(mut self) -> Self {
        self.production = true;
        self
    }

    /// A real measurement id, if one is configured
    #[must_use]
    pub fn tracking_id(&self) -> Option<&str> {
        self.measurement_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && *id != PLACEHOLDER_MEASUREMENT_ID)
    }
}
