//! Human-readable durations
//!
//! Month arithmetic ignores the day of month: Jan 31 to Feb 1 counts as one
//! month, Jan 1 to Jan 31 as zero.

use crate::language::Language;
use crate::year_month::YearMonth;

/// Unit words for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationWording {
    pub year: &'static str,
    pub years: &'static str,
    pub month: &'static str,
    pub months: &'static str,
    /// Label for a non-positive span
    pub zero: &'static str,
}

const ENGLISH: DurationWording = DurationWording {
    year: "year",
    years: "years",
    month: "month",
    months: "months",
    zero: "0 months",
};

const SPANISH: DurationWording = DurationWording {
    year: "año",
    years: "años",
    month: "mes",
    months: "meses",
    zero: "0 meses",
};

impl DurationWording {
    /// Wording for `language`
    #[inline]
    #[must_use]
    pub fn for_language(language: Language) -> &'static Self {
        match language {
            Language::En => &ENGLISH,
            Language::Es => &SPANISH,
        }
    }
}

impl Default for DurationWording {
    fn default() -> Self {
        ENGLISH
    }
}

/// Whole months from `start` to `end`; negative when `end` precedes `start`
#[inline]
#[must_use]
pub fn months_between(start: YearMonth, end: YearMonth) -> i64 {
    (i64::from(end.year()) - i64::from(start.year())) * 12 - i64::from(start.month())
        + i64::from(end.month())
}

/// "N year(s), M month(s)", omitting zero units; the zero label if the span
/// is not positive
#[must_use]
pub fn format_duration(start: YearMonth, end: YearMonth, wording: &DurationWording) -> String {
    let months = months_between(start, end);
    if months <= 0 {
        return wording.zero.to_string();
    }

    let years = months / 12;
    let remaining = months % 12;

    let mut parts = Vec::with_capacity(2);
    if years > 0 {
        let unit = if years == 1 { wording.year } else { wording.years };
        parts.push(format!("{years} {unit}"));
    }
    if remaining > 0 {
        let unit = if remaining == 1 { wording.month } else { wording.months };
        parts.push(format!("{remaining} {unit}"));
    }
    parts.join(", ")
}
