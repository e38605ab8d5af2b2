//! Binary configuration
//!
//! Loaded from a TOML file; every key is optional.
//!
//! ```toml
//! data_url = "https://example.com/assets/data"
//! preferences_path = "~/.folio/preferences.json"
//! request_timeout_secs = 15
//!
//! [contact]
//! endpoint = "https://example.com/api/contact"
//!
//! [analytics]
//! measurement_id = "G-XXXXXXX"
//! endpoint = "https://collector.example.com/collect"
//! production = true
//! ```

use folio_client::{AnalyticsConfig, ContactConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// A value is out of range
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Where profile documents are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    /// Base URL of `cv-data-<lang>.json`
    Remote(String),
    /// Local directory holding `cv-data-<lang>.json`
    Directory(PathBuf),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Base URL or directory of the profile documents
    pub data_url: String,
    /// JSON file holding persisted preferences
    pub preferences_path: PathBuf,
    /// Timeout applied to every HTTP request
    pub request_timeout_secs: u64,
    /// Contact-form settings
    pub contact: ContactConfig,
    /// Analytics settings
    pub analytics: AnalyticsConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            data_url: "assets/data".to_string(),
            preferences_path: PathBuf::from("folio-preferences.json"),
            request_timeout_secs: 15,
            contact: ContactConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Read` if the file cannot be read
    /// - `ConfigError::Parse` if it is not valid TOML for this schema
    /// - `ConfigError::Invalid` if a value is out of range
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or defaults when no path is given
    ///
    /// # Errors
    /// See [`FolioConfig::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check value ranges
    ///
    /// # Errors
    /// `ConfigError::Invalid` naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_url.trim().is_empty() {
            return Err(ConfigError::Invalid("data_url must not be empty".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// With data location
    #[inline]
    #[must_use]
    pub fn with_data_url(mut self, data_url: impl Into<String>) -> Self {
        self.data_url = data_url.into();
        self
    }

    /// With preferences file
    #[inline]
    #[must_use]
    pub fn with_preferences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferences_path = path.into();
        self
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// With contact settings
    #[inline]
    #[must_use]
    pub fn with_contact(mut self, contact: ContactConfig) -> Self {
        self.contact = contact;
        self
    }

    /// With analytics settings
    #[inline]
    #[must_use]
    pub fn with_analytics(mut self, analytics: AnalyticsConfig) -> Self {
        self.analytics = analytics;
        self
    }

    /// Request timeout as a duration
    #[inline]
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Interpret `data_url`
    #[must_use]
    pub fn data_location(&self) -> DataLocation {
        let url = self.data_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            DataLocation::Remote(url.to_string())
        } else {
            DataLocation::Directory(PathBuf::from(url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config: FolioConfig = toml::from_str("").unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn parses_nested_tables() {
        let config: FolioConfig = toml::from_str(
            r#"
            data_url = "https://example.com/assets/data"
            request_timeout_secs = 5

            [contact]
            endpoint = "https://example.com/contact"

            [analytics]
            measurement_id = "G-ABC"
            production = true
            "#,
        )
        .unwrap();

        assert_eq!(
            config.data_location(),
            DataLocation::Remote("https://example.com/assets/data".to_string())
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.contact.endpoint.as_deref(), Some("https://example.com/contact"));
        assert_eq!(config.analytics.tracking_id(), Some("G-ABC"));
        assert!(config.analytics.production);
    }

    #[test]
    fn plain_path_is_a_directory() {
        let config = FolioConfig::default().with_data_url("./data");
        assert_eq!(config.data_location(), DataLocation::Directory(PathBuf::from("./data")));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = FolioConfig::default().with_request_timeout_secs(0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "request_timeout_secs = \"soon\"").unwrap();

        assert!(matches!(FolioConfig::from_file(&path), Err(ConfigError::Parse { .. })));
        assert!(matches!(
            FolioConfig::from_file(dir.path().join("missing.toml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
