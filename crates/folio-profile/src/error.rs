//! Error types for profile mapping
//!
//! Parse failures are kept distinct from anything the fetch layer reports so
//! callers can tell a malformed document apart from a failed request.

/// A calendar field could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Not of the form `YYYY-MM`
    #[error("malformed year-month {0:?}, expected YYYY-MM")]
    Malformed(String),

    /// Month component outside 1..=12
    #[error("month out of range in {0:?}")]
    MonthOutOfRange(String),

    /// Year component not representable as a calendar date
    #[error("year out of range in {0:?}")]
    YearOutOfRange(String),
}

impl ParseError {
    /// The offending input
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::Malformed(s) | Self::MonthOutOfRange(s) | Self::YearOutOfRange(s) => s,
        }
    }
}

/// Mapping a raw profile failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// `personal_info.career_start` is malformed
    #[error("invalid career start: {0}")]
    CareerStart(#[source] ParseError),

    /// A period field of an experience entry is malformed
    #[error("invalid period in experience entry {index} ({company}): {source}")]
    Period {
        /// Position of the entry in `experience`
        index: usize,
        /// Company of the entry, for diagnostics
        company: String,
        /// The underlying parse failure
        #[source]
        source: ParseError,
    },
}

impl MapError {
    /// The parse failure behind this error
    #[inline]
    #[must_use]
    pub fn parse_error(&self) -> &ParseError {
        match self {
            Self::CareerStart(e) | Self::Period { source: e, .. } => e,
        }
    }
}
