//! Raw profile to view model mapping
//!
//! Pure and deterministic for a fixed clock. Malformed dates surface as
//! [`MapError`] instead of producing meaningless durations.

use crate::clock::Clock;
use crate::duration::{format_duration, DurationWording};
use crate::error::{MapError, ParseError};
use crate::language::Language;
use crate::model::{Experience, RawProfile};
use crate::view::{ExperienceViewModel, ProfileViewModel};
use crate::year_month::YearMonth;
use chrono::{DateTime, Utc};

/// Token in `summary` replaced by the total years of experience
pub const YEARS_PLACEHOLDER: &str = "{{years}}";

/// Average year length used for the total-years figure
const MILLIS_PER_YEAR: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 365.25;

/// Maps [`RawProfile`] documents into [`ProfileViewModel`]s
#[derive(Debug, Clone)]
pub struct ProfileMapper<C> {
    clock: C,
    wording: &'static DurationWording,
}

impl<C: Clock> ProfileMapper<C> {
    /// Create a mapper with English duration labels
    #[inline]
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            wording: DurationWording::for_language(Language::En),
        }
    }

    /// With duration labels in `language`
    #[inline]
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.wording = DurationWording::for_language(language);
        self
    }

    /// Derive the view model
    ///
    /// # Errors
    /// `MapError` if `career_start` or any experience period is malformed.
    pub fn map_to_view_model(&self, raw: &RawProfile) -> Result<ProfileViewModel, MapError> {
        let now = self.clock.now();
        let total_experience_years = self.total_years_at(raw, now)?;

        let experience = raw
            .experience
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                self.experience_at(entry, now)
                    .map_err(|source| MapError::Period {
                        index,
                        company: entry.company.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let summary = raw
            .summary
            .replace(YEARS_PLACEHOLDER, &total_experience_years.to_string());

        Ok(ProfileViewModel {
            personal_info: raw.personal_info.clone(),
            summary,
            experience,
            skills: raw.skills.clone(),
            education: raw.education.clone(),
            languages: raw.languages.clone(),
            total_experience_years,
        })
    }

    /// Whole years since the career started
    ///
    /// Uses `personal_info.career_start` when present, otherwise the earliest
    /// experience start; 0 when neither exists or the start lies in the future.
    ///
    /// # Errors
    /// `MapError` if the chosen start date is malformed.
    pub fn calculate_total_years(&self, raw: &RawProfile) -> Result<u32, MapError> {
        self.total_years_at(raw, self.clock.now())
    }

    /// Derive a single experience entry
    ///
    /// # Errors
    /// `ParseError` if `start` or a non-empty `end` is malformed.
    pub fn map_experience(&self, entry: &Experience) -> Result<ExperienceViewModel, ParseError> {
        self.experience_at(entry, self.clock.now())
    }

    fn total_years_at(&self, raw: &RawProfile, now: DateTime<Utc>) -> Result<u32, MapError> {
        let career_start = raw
            .personal_info
            .career_start
            .as_deref()
            .filter(|s| !s.trim().is_empty());

        let start = if let Some(s) = career_start {
            s.parse::<YearMonth>().map_err(MapError::CareerStart)?
        } else {
            let mut earliest: Option<YearMonth> = None;
            for (index, entry) in raw.experience.iter().enumerate() {
                let start: YearMonth =
                    entry
                        .period
                        .start
                        .parse()
                        .map_err(|source| MapError::Period {
                            index,
                            company: entry.company.clone(),
                            source,
                        })?;
                earliest = Some(earliest.map_or(start, |e| e.min(start)));
            }
            match earliest {
                Some(start) => start,
                None => return Ok(0),
            }
        };

        Ok(whole_years_between(start.start_instant(), now))
    }

    fn experience_at(
        &self,
        entry: &Experience,
        now: DateTime<Utc>,
    ) -> Result<ExperienceViewModel, ParseError> {
        let start: YearMonth = entry.period.start.parse()?;
        let is_current = entry.period.is_ongoing();
        let end = if is_current {
            YearMonth::of(now)
        } else {
            entry.period.end.parse()?
        };

        Ok(ExperienceViewModel {
            entry: entry.clone(),
            is_current,
            duration_label: format_duration(start, end, self.wording),
        })
    }
}

/// `floor(elapsed / 365.25 days)`, never negative
fn whole_years_between(start: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    #[allow(clippy::cast_precision_loss)]
    let elapsed = (now - start).num_milliseconds() as f64;
    if elapsed <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let years = (elapsed / MILLIS_PER_YEAR).floor() as u32;
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::{ExperiencePeriod, PersonalInfo, Skills};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn entry(company: &str, start: &str, end: &str) -> Experience {
        Experience {
            company: company.to_string(),
            period: ExperiencePeriod {
                start: start.to_string(),
                end: end.to_string(),
            },
            role: "Dev".to_string(),
            domain: "Web".to_string(),
            stack: vec!["Angular".to_string()],
            is_lead: false,
            metrics: vec![],
            description: "Desc".to_string(),
        }
    }

    fn raw(career_start: Option<&str>, experience: Vec<Experience>) -> RawProfile {
        RawProfile {
            personal_info: PersonalInfo {
                name: "Test User".to_string(),
                title: "Senior Dev".to_string(),
                location: "BA".to_string(),
                email: "test@test.com".to_string(),
                phone: "123".to_string(),
                linkedin: "link".to_string(),
                career_start: career_start.map(str::to_string),
            },
            summary: "Engineer with {{years}} years of experience".to_string(),
            experience,
            skills: Skills::default(),
            education: String::new(),
            languages: vec![],
        }
    }

    fn at(year: i32, month: u32, day: u32) -> FixedClock {
        FixedClock::try_ymd(year, month, day).unwrap()
    }

    #[test]
    fn total_years_from_career_start() {
        let mapper = ProfileMapper::new(at(2026, 1, 1));
        let profile = raw(Some("2020-01"), vec![entry("A", "2024-01", "")]);
        assert_eq!(mapper.calculate_total_years(&profile).unwrap(), 6);
    }

    #[test]
    fn total_years_falls_back_to_earliest_experience() {
        let mapper = ProfileMapper::new(at(2026, 1, 1));
        let profile = raw(
            None,
            vec![entry("A", "2022-01", ""), entry("B", "2016-06", "2021-12")],
        );
        assert_eq!(mapper.calculate_total_years(&profile).unwrap(), 9);
    }

    #[test]
    fn empty_career_start_is_treated_as_absent() {
        let mapper = ProfileMapper::new(at(2026, 1, 1));
        let profile = raw(Some(""), vec![entry("A", "2023-01", "")]);
        assert_eq!(mapper.calculate_total_years(&profile).unwrap(), 3);
    }

    #[test]
    fn total_years_without_any_dates_is_zero() {
        let mapper = ProfileMapper::new(at(2026, 1, 1));
        assert_eq!(mapper.calculate_total_years(&raw(None, vec![])).unwrap(), 0);
    }

    #[test]
    fn future_career_start_is_zero() {
        let mapper = ProfileMapper::new(at(2026, 1, 1));
        let profile = raw(Some("2030-01"), vec![]);
        assert_eq!(mapper.calculate_total_years(&profile).unwrap(), 0);
    }

    #[test]
    fn malformed_career_start_is_an_error() {
        let mapper = ProfileMapper::new(at(2026, 1, 1));
        let profile = raw(Some("January 2020"), vec![]);
        let err = mapper.calculate_total_years(&profile).unwrap_err();
        assert!(matches!(err, MapError::CareerStart(ParseError::Malformed(_))));
    }

    #[test]
    fn ongoing_entry_is_current() {
        let mapper = ProfileMapper::new(at(2024, 3, 1));
        let vm = mapper.map_experience(&entry("A", "2023-01", "")).unwrap();
        assert!(vm.is_current);
        assert_eq!(vm.duration_label, "1 year, 2 months");
    }

    #[test]
    fn finished_entry_is_not_current() {
        let mapper = ProfileMapper::new(at(2024, 3, 1));
        let vm = mapper.map_experience(&entry("A", "2019-03", "2021-05")).unwrap();
        assert!(!vm.is_current);
        assert_eq!(vm.duration_label, "2 years, 2 months");
        assert_eq!(vm.company, "A");
    }

    #[test]
    fn malformed_end_is_an_error() {
        let mapper = ProfileMapper::new(at(2024, 3, 1));
        let result = mapper.map_experience(&entry("A", "2019-03", "soon"));
        assert!(matches!(result, Err(ParseError::Malformed(_))));
    }

    #[test]
    fn map_substitutes_years_and_keeps_raw_fields() {
        let mapper = ProfileMapper::new(at(2026, 1, 1));
        let profile = raw(Some("2020-01"), vec![entry("A", "2024-01", "")]);
        let vm = mapper.map_to_view_model(&profile).unwrap();

        assert_eq!(vm.total_experience_years, 6);
        assert_eq!(vm.summary, "Engineer with 6 years of experience");
        assert_eq!(vm.personal_info, profile.personal_info);
        assert_eq!(vm.experience.len(), 1);
        assert_eq!(vm.experience[0].duration_label, "2 years");
    }

    #[test]
    fn current_positions_are_the_ongoing_entries() {
        let mapper = ProfileMapper::new(at(2026, 1, 1));
        let profile = raw(
            Some("2018-01"),
            vec![
                entry("A", "2024-01", ""),
                entry("B", "2020-01", "2023-12"),
                entry("C", "2025-03", ""),
            ],
        );
        let vm = mapper.map_to_view_model(&profile).unwrap();

        let current: Vec<_> = vm.current_positions().map(|e| e.company.as_str()).collect();
        assert_eq!(current, vec!["A", "C"]);
    }

    #[test]
    fn map_reports_failing_entry() {
        let mapper = ProfileMapper::new(at(2026, 1, 1));
        let profile = raw(
            Some("2020-01"),
            vec![entry("Good", "2021-01", ""), entry("Bad", "2021-1", "")],
        );
        let err = mapper.map_to_view_model(&profile).unwrap_err();
        assert!(matches!(err, MapError::Period { index: 1, ref company, .. } if company == "Bad"));
    }

    #[test]
    fn spanish_labels() {
        let mapper = ProfileMapper::new(at(2024, 3, 1)).with_language(Language::Es);
        let vm = mapper.map_experience(&entry("A", "2023-01", "")).unwrap();
        assert_eq!(vm.duration_label, "1 año, 2 meses");
    }

    #[test]
    fn view_model_serializes_derived_fields_in_camel_case() {
        let mapper = ProfileMapper::new(at(2026, 1, 1));
        let vm = mapper
            .map_to_view_model(&raw(Some("2020-01"), vec![entry("A", "2024-01", "")]))
            .unwrap();
        let json = serde_json::to_value(&vm).unwrap();
        assert_eq!(json["totalExperienceYears"], 6);
        assert_eq!(json["experience"][0]["isCurrent"], true);
        assert_eq!(json["experience"][0]["company"], "A");
        assert_eq!(json["personal_info"]["career_start"], "2020-01");
    }

    proptest! {
        #[test]
        fn total_years_is_floor_of_days_over_year_length(
            year in 1980i32..2025,
            month in 1u32..=12,
        ) {
            let clock = at(2026, 1, 1);
            let start = YearMonth::new(year, month).unwrap();
            let profile = raw(Some(&start.to_string()), vec![]);

            let years = ProfileMapper::new(clock).calculate_total_years(&profile).unwrap();

            #[allow(clippy::cast_precision_loss)]
            let days = (clock.now() - start.start_instant()).num_days() as f64;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let expected = (days / 365.25).floor() as u32;
            prop_assert_eq!(years, expected);
        }
    }
}
