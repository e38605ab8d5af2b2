//! User-selectable enumerators: display language and view mode

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A string that names none of an enumerator's variants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    /// What was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

/// Profile language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish
    #[default]
    Es,
    /// English
    En,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    /// Two-letter code (`es` / `en`)
    #[inline]
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownVariant;

    /// Exact, case-sensitive match on the two-letter code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(UnknownVariant {
                kind: "language",
                value: other.to_string(),
            }),
        }
    }
}

/// Presentation mode of the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Marketing view
    #[default]
    Frontend,
    /// Data / architecture view
    Data,
}

impl ViewMode {
    /// The other mode
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Frontend => ViewMode::Data,
            ViewMode::Data => ViewMode::Frontend,
        }
    }

    /// Stored form (`frontend` / `data`)
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Frontend => "frontend",
            ViewMode::Data => "data",
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(ViewMode::Frontend),
            "data" => Ok(ViewMode::Data),
            other => Err(UnknownVariant {
                kind: "view mode",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_code() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn language_parse_is_exact() {
        assert!("EN".parse::<Language>().is_err());
        assert!(" es".parse::<Language>().is_err());
        assert!("invalid".parse::<Language>().is_err());
    }

    #[test]
    fn view_mode_toggle() {
        assert_eq!(ViewMode::Frontend.toggled(), ViewMode::Data);
        assert_eq!(ViewMode::Data.toggled(), ViewMode::Frontend);
    }

    #[test]
    fn defaults() {
        assert_eq!(Language::default(), Language::Es);
        assert_eq!(ViewMode::default(), ViewMode::Frontend);
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        assert_eq!(serde_json::to_string(&ViewMode::Data).unwrap(), "\"data\"");
    }
}
