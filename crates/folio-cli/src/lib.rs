//! Command-line front end for the folio profile store

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod app;
pub mod config;
pub mod render;

pub use app::App;
pub use config::{ConfigError, DataLocation, FolioConfig};
