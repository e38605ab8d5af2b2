//! Folio Profile
//!
//! Profile document model and the pure mapping into presentation-ready
//! view models.
//!
//! # Core Concepts
//!
//! - [`RawProfile`]: The profile document as fetched, one per [`Language`]
//! - [`ProfileMapper`]: Derives [`ProfileViewModel`] (durations, total years)
//! - [`YearMonth`]: The `YYYY-MM` calendar value used by every period
//! - [`Clock`]: Injected source of "now" so mapping stays deterministic
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_profile::{FixedClock, ProfileMapper, RawProfile};
//!
//! let raw: RawProfile = serde_json::from_str(document)?;
//! let mapper = ProfileMapper::new(FixedClock::try_ymd(2026, 1, 1).unwrap());
//! let view = mapper.map_to_view_model(&raw)?;
//! println!("{} years of experience", view.total_experience_years);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod clock;
mod duration;
mod error;
mod language;
mod mapper;
mod model;
mod view;
mod year_month;

// Re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use duration::{format_duration, months_between, DurationWording};
pub use error::{MapError, ParseError};
pub use language::{Language, UnknownVariant, ViewMode};
pub use mapper::{ProfileMapper, YEARS_PLACEHOLDER};
pub use model::{
    Experience, ExperiencePeriod, LanguageSkill, PersonalInfo, RawProfile, SkillGroup, Skills,
};
pub use view::{ExperienceViewModel, ProfileViewModel};
pub use year_month::YearMonth;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
