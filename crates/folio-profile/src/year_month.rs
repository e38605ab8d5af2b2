//! Calendar year-month values
//!
//! Periods in a profile document are written as `YYYY-MM`. A value denotes
//! the first day of that month at midnight UTC.

use crate::error::ParseError;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A calendar month (`YYYY-MM`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create from components, validating the month
    ///
    /// # Errors
    /// - `ParseError::MonthOutOfRange` if `month` is not in `1..=12`
    /// - `ParseError::YearOutOfRange` if the year is not a representable date
    pub fn new(year: i32, month: u32) -> Result<Self, ParseError> {
        let value = Self { year, month };
        if !(1..=12).contains(&month) {
            return Err(ParseError::MonthOutOfRange(value.to_string()));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ParseError::YearOutOfRange(value.to_string()));
        }
        Ok(value)
    }

    /// The month containing `instant`
    #[inline]
    #[must_use]
    pub fn of(instant: DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }

    /// Year component
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1-based)
    #[inline]
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// First instant of the month (00:00 UTC on day 1)
    #[must_use]
    pub fn start_instant(&self) -> DateTime<Utc> {
        // Components were validated on construction
        let date = NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN);
        Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::Malformed(s.to_string());

        let (year, month) = s.trim().split_once('-').ok_or_else(malformed)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&month) {
            return Err(ParseError::MonthOutOfRange(s.to_string()));
        }
        Self::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let ym: YearMonth = "2023-01".parse().unwrap();
        assert_eq!(ym.year(), 2023);
        assert_eq!(ym.month(), 1);
        assert_eq!(ym.to_string(), "2023-01");
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", "2023", "2023-1", "23-01", "2023/01", "2023-ab", "2023-01-05"] {
            let result: Result<YearMonth, _> = input.parse();
            assert!(
                matches!(result, Err(ParseError::Malformed(_))),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn parse_rejects_month_out_of_range() {
        let result: Result<YearMonth, _> = "2023-13".parse();
        assert!(matches!(result, Err(ParseError::MonthOutOfRange(_))));

        let result: Result<YearMonth, _> = "2023-00".parse();
        assert!(matches!(result, Err(ParseError::MonthOutOfRange(_))));
    }

    #[test]
    fn start_instant_is_first_of_month_utc() {
        let ym: YearMonth = "2020-02".parse().unwrap();
        let instant = ym.start_instant();
        assert_eq!(instant.to_rfc3339(), "2020-02-01T00:00:00+00:00");
    }

    #[test]
    fn ordering_follows_calendar() {
        let a: YearMonth = "2019-12".parse().unwrap();
        let b: YearMonth = "2020-01".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn of_instant() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 17, 10, 0, 0).unwrap();
        assert_eq!(YearMonth::of(instant).to_string(), "2024-03");
    }
}
