//! Raw profile document
//!
//! Mirrors the JSON published per language (`cv-data-<lang>.json`). Field
//! names follow the document's snake_case keys.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The profile document as fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProfile {
    pub personal_info: PersonalInfo,
    /// May contain the `{{years}}` placeholder
    pub summary: String,
    pub experience: Vec<Experience>,
    pub skills: Skills,
    pub education: String,
    pub languages: Vec<LanguageSkill>,
}

/// Identity and contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    /// Social profile link
    pub linkedin: String,
    /// `YYYY-MM`; takes precedence over the earliest experience entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_start: Option<String>,
}

/// One position held
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub period: ExperiencePeriod,
    pub role: String,
    pub domain: String,
    pub stack: Vec<String>,
    pub is_lead: bool,
    pub metrics: Vec<String>,
    pub description: String,
}

/// Start and optional end of a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperiencePeriod {
    /// `YYYY-MM`
    pub start: String,
    /// `YYYY-MM`, or empty while the position is ongoing
    #[serde(default)]
    pub end: String,
}

impl ExperiencePeriod {
    /// Whether the position is still held
    #[inline]
    #[must_use]
    pub fn is_ongoing(&self) -> bool {
        self.end.trim().is_empty()
    }
}

/// Technology groups shown in the tech-stack grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub cloud_data: Vec<String>,
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub architecture: Vec<String>,
    #[serde(default)]
    pub devops: Vec<String>,
}

impl Skills {
    /// Groups in display order
    pub fn groups(&self) -> impl Iterator<Item = (SkillGroup, &[String])> {
        SkillGroup::ALL.into_iter().map(|g| (g, self.group(g)))
    }

    /// Technologies of one group
    #[must_use]
    pub fn group(&self, group: SkillGroup) -> &[String] {
        match group {
            SkillGroup::CloudData => &self.cloud_data,
            SkillGroup::Backend => &self.backend,
            SkillGroup::Frontend => &self.frontend,
            SkillGroup::Architecture => &self.architecture,
            SkillGroup::Devops => &self.devops,
        }
    }

    /// Total number of technologies across groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups().map(|(_, techs)| techs.len()).sum()
    }

    /// Whether every group is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named skill group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillGroup {
    CloudData,
    Backend,
    Frontend,
    Architecture,
    Devops,
}

impl SkillGroup {
    /// All groups in display order
    pub const ALL: [SkillGroup; 5] = [
        SkillGroup::CloudData,
        SkillGroup::Backend,
        SkillGroup::Frontend,
        SkillGroup::Architecture,
        SkillGroup::Devops,
    ];

    /// Document key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            SkillGroup::CloudData => "cloud_data",
            SkillGroup::Backend => "backend",
            SkillGroup::Frontend => "frontend",
            SkillGroup::Architecture => "architecture",
            SkillGroup::Devops => "devops",
        }
    }

    /// Heading shown above the group
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            SkillGroup::CloudData => "Cloud & Data",
            SkillGroup::Backend => "Backend Engineering",
            SkillGroup::Frontend => "Modern Frontend",
            SkillGroup::Architecture => "Architecture Patterns",
            SkillGroup::Devops => "DevOps & CI/CD",
        }
    }
}

impl Display for SkillGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A spoken language and proficiency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub language: String,
    pub level: String,
}
