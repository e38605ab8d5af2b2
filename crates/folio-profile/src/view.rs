//! Presentation-ready view models
//!
//! Derived once per load and never mutated. Raw fields are kept as-is and
//! serialized under their document keys; derived fields use camelCase.

use crate::model::{Experience, LanguageSkill, PersonalInfo, Skills};
use serde::{Deserialize, Serialize};

/// A raw profile with derived experience data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileViewModel {
    pub personal_info: PersonalInfo,
    /// Summary with the years placeholder substituted
    pub summary: String,
    pub experience: Vec<ExperienceViewModel>,
    pub skills: Skills,
    pub education: String,
    pub languages: Vec<LanguageSkill>,
    #[serde(rename = "totalExperienceYears")]
    pub total_experience_years: u32,
}

impl ProfileViewModel {
    /// Entries still ongoing
    pub fn current_positions(&self) -> impl Iterator<Item = &ExperienceViewModel> {
        self.experience.iter().filter(|e| e.is_current)
    }
}

/// An experience entry with its duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceViewModel {
    #[serde(flatten)]
    pub entry: Experience,
    /// True iff the period has no end
    #[serde(rename = "isCurrent")]
    pub is_current: bool,
    /// E.g. "2 years, 2 months"
    #[serde(rename = "durationLabel")]
    pub duration_label: String,
}

impl std::ops::Deref for ExperienceViewModel {
    type Target = Experience;

    fn deref(&self) -> &Self::Target {
        &self.entry
    }
}
