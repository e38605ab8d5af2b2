//! Folio Client
//!
//! Network-facing collaborators of the profile store:
//! - [`HttpProfileSource`] / [`DirectoryProfileSource`]: profile documents
//! - [`ContactClient`]: contact-form submission
//! - [`Analytics`]: fire-and-forget event tracking through an [`AnalyticsSink`]

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod analytics;
pub mod config;
pub mod contact;
pub mod error;
mod http;
pub mod source;

pub use analytics::{
    Analytics, AnalyticsEvent, AnalyticsSink, EventCategory, ExternalPlatform, HttpAnalyticsSink,
    NullSink, TrackedEvent,
};
pub use config::{AnalyticsConfig, ContactConfig, PLACEHOLDER_MEASUREMENT_ID};
pub use contact::{ContactClient, ContactError, ContactField, ContactMessage};
pub use error::ClientError;
pub use source::{DirectoryProfileSource, HttpProfileSource};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
