//! Plain-text rendering of a loaded profile

use folio_profile::{ProfileViewModel, ViewMode};
use folio_store::UiLabels;
use std::fmt::Write as _;

/// Name, title and location on one line each
#[must_use]
pub fn render_header(view: &ProfileViewModel) -> String {
    let info = &view.personal_info;
    format!("{}\n{}\n{} | {}\n", info.name, info.title, info.location, info.email)
}

/// Full profile for the given view mode
///
/// The frontend mode shows the visual sections; the data mode shows the
/// view model as JSON under the architecture heading.
///
/// # Errors
/// Only if the view model cannot be serialized in data mode.
pub fn render_profile(
    view: &ProfileViewModel,
    ui: &UiLabels,
    mode: ViewMode,
) -> Result<String, serde_json::Error> {
    match mode {
        ViewMode::Frontend => Ok(render_visual(view, ui)),
        ViewMode::Data => {
            let json = serde_json::to_string_pretty(view)?;
            Ok(format!("{}\n{}\n\n{json}\n", ui.architecture_view, ui.json_desc))
        }
    }
}

fn render_visual(view: &ProfileViewModel, ui: &UiLabels) -> String {
    let mut out = render_header(view);

    let _ = writeln!(
        out,
        "\n{}: {} {}",
        ui.total_experience, view.total_experience_years, ui.years
    );
    for entry in view.current_positions() {
        let _ = writeln!(out, "{}: {} {} {}", ui.current, entry.role, ui.at, entry.company);
    }
    let _ = writeln!(out, "\n{}", view.summary);

    if !view.skills.is_empty() {
        let _ = writeln!(out, "\n{}", ui.tech_stack);
        for (group, techs) in view.skills.groups().filter(|(_, t)| !t.is_empty()) {
            let _ = writeln!(out, "  {}: {}", group.display_name(), techs.join(", "));
        }
    }

    if !view.experience.is_empty() {
        let _ = writeln!(out, "\n{}", ui.experience_highlights);
        for entry in &view.experience {
            let end = if entry.is_current {
                ui.current
            } else {
                entry.period.end.as_str()
            };
            let _ = writeln!(
                out,
                "  {} {} {} ({} - {}, {})",
                entry.role, ui.at, entry.company, entry.period.start, end, entry.duration_label
            );
            for metric in &entry.metrics {
                let _ = writeln!(out, "    * {metric}");
            }
        }
    }

    if !view.languages.is_empty() {
        let _ = writeln!(out);
        for lang in &view.languages {
            let _ = writeln!(out, "  {} ({})", lang.language, lang.level);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_profile::{Language, ProfileMapper};
    use folio_test_utils::{fixed_clock, sample_raw_profile};

    fn view(language: Language) -> ProfileViewModel {
        ProfileMapper::new(fixed_clock(2026, 1, 1))
            .with_language(language)
            .map_to_view_model(&sample_raw_profile())
            .unwrap()
    }

    #[test]
    fn visual_rendering_has_every_section() {
        let text = render_profile(
            &view(Language::En),
            UiLabels::for_language(Language::En),
            ViewMode::Frontend,
        )
        .unwrap();

        assert!(text.starts_with("Test User\nTech Lead\n"));
        assert!(text.contains("Total Experience: 6 years\nCurrent: Lead Developer at Test Company\n"));
        assert!(text.contains("Engineer with 6 years of experience"));
        assert!(text.contains("  Cloud & Data: AWS"));
        assert!(text.contains("Lead Developer at Test Company (2023-01 - Current, 3 years)"));
        assert!(text.contains("English (Professional)"));
    }

    #[test]
    fn labels_follow_language() {
        let text = render_profile(
            &view(Language::Es),
            UiLabels::for_language(Language::Es),
            ViewMode::Frontend,
        )
        .unwrap();
        assert!(text.contains("Experiencia Total: 6 años"));
        assert!(text.contains("en Test Company (2023-01 - Actual, 3 años)"));
    }

    #[test]
    fn finished_positions_are_not_listed_as_current() {
        let mut raw = sample_raw_profile();
        raw.experience[0].period.end = "2025-06".to_string();
        let view = ProfileMapper::new(fixed_clock(2026, 1, 1))
            .with_language(Language::En)
            .map_to_view_model(&raw)
            .unwrap();

        let text = render_profile(&view, UiLabels::for_language(Language::En), ViewMode::Frontend)
            .unwrap();
        assert!(!text.contains("Current:"));
        assert!(text.contains("(2023-01 - 2025-06,"));
    }

    #[test]
    fn data_mode_renders_json() {
        let text = render_profile(
            &view(Language::En),
            UiLabels::for_language(Language::En),
            ViewMode::Data,
        )
        .unwrap();
        assert!(text.starts_with("Software Architecture & Source Code"));
        assert!(text.contains("\"totalExperienceYears\": 6"));
    }
}
