//! Downloadable CV document per language

use folio_profile::{Language, PersonalInfo};
use serde::Serialize;

/// A downloadable CV file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CvDocument {
    /// Suggested name for the saved file
    pub file_name: String,
    /// Path of the document relative to the site root
    pub path: String,
    pub language: Language,
}

impl CvDocument {
    /// Document for `language`, named after the profile owner when known
    #[must_use]
    pub fn for_language(language: Language, owner: Option<&PersonalInfo>) -> Self {
        let suffix = language.code().to_ascii_uppercase();
        let file_name = match owner.map(|info| file_stem(&info.name)) {
            Some(stem) if !stem.is_empty() => format!("CV_{stem}_{suffix}.pdf"),
            _ => format!("CV_{suffix}.pdf"),
        };

        Self {
            file_name,
            path: format!("assets/docs/cv-{}.pdf", language.code()),
            language,
        }
    }
}

/// Name words joined by underscores, keeping only alphanumerics
fn file_stem(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> PersonalInfo {
        PersonalInfo {
            name: name.to_string(),
            title: "Tech Lead".to_string(),
            location: String::new(),
            email: String::new(),
            phone: String::new(),
            linkedin: String::new(),
            career_start: None,
        }
    }

    #[test]
    fn named_after_owner() {
        let doc = CvDocument::for_language(Language::En, Some(&info("Ada  Lovelace")));
        assert_eq!(doc.file_name, "CV_Ada_Lovelace_EN.pdf");
        assert_eq!(doc.path, "assets/docs/cv-en.pdf");
    }

    #[test]
    fn generic_name_without_owner() {
        let doc = CvDocument::for_language(Language::Es, None);
        assert_eq!(doc.file_name, "CV_ES.pdf");
        assert_eq!(doc.path, "assets/docs/cv-es.pdf");
    }

    #[test]
    fn punctuation_is_dropped() {
        let doc = CvDocument::for_language(Language::Es, Some(&info("José O'Neil")));
        assert_eq!(doc.file_name, "CV_José_ONeil_ES.pdf");
    }
}
