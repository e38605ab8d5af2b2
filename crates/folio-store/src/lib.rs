//! Folio Store
//!
//! The single source of truth for UI-facing profile state:
//! - Current language and view mode, persisted as preferences
//! - The loaded [`ProfileViewModel`], loading flag and error message
//! - Derived selectors (personal info, skills, localized labels)
//!
//! Collaborators are injected: a [`ProfileSource`] fetches documents and a
//! [`PreferenceStorage`] persists preferences.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_store::{MemoryStorage, ProfileStore};
//! use std::sync::Arc;
//!
//! # async fn example(source: Arc<dyn folio_store::ProfileSource>) {
//! let store = ProfileStore::new(source, Arc::new(MemoryStorage::new()));
//! store.load_profile().await;
//!
//! if let Some(info) = store.personal_info() {
//!     println!("{} | {}", info.name, info.title);
//! }
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod document;
pub mod error;
pub mod labels;
pub mod signal;
pub mod source;
pub mod storage;
pub mod store;

// Re-exports for convenience
pub use document::CvDocument;
pub use error::{FetchError, LoadFailure, PersistenceError};
pub use labels::UiLabels;
pub use signal::{ReadSignal, Signal};
pub use source::{profile_document_name, ProfileSource};
pub use storage::{JsonFileStorage, MemoryStorage, PreferenceStorage};
pub use store::{LoadOutcome, ProfileStore, LANGUAGE_KEY, VIEW_MODE_KEY};

pub use folio_profile::{Language, ProfileViewModel, ViewMode};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
