//! Localized UI label table

use folio_profile::{Language, ViewMode};

/// Fixed UI strings for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLabels {
    pub total_experience: &'static str,
    pub years: &'static str,
    pub tech_stack: &'static str,
    pub experience_highlights: &'static str,
    pub download_cv: &'static str,
    pub switch_to_data: &'static str,
    pub switch_to_frontend: &'static str,
    pub architecture_view: &'static str,
    pub json_desc: &'static str,
    pub current: &'static str,
    pub at: &'static str,
    pub kpi_exp: &'static str,
    pub kpi_optimization: &'static str,
    pub kpi_sources: &'static str,
    pub security_badge: &'static str,
    /// Shown when the profile cannot be loaded
    pub load_error: &'static str,
}

const ES: UiLabels = UiLabels {
    total_experience: "Experiencia Total",
    years: "años",
    tech_stack: "Stack Tecnológico & Expertise",
    experience_highlights: "Experiencia Destacada",
    download_cv: "Descargar CV",
    switch_to_data: "Ver Código y Arquitectura",
    switch_to_frontend: "Ver Diseño Visual",
    architecture_view: "Arquitectura de Software y Código Fuente",
    json_desc: "Exploración técnica de la aplicación: Modelos de dominio, gestión de estado reactivo y datos estructurados.",
    current: "Actual",
    at: "en",
    kpi_exp: "Años de Exp.",
    kpi_optimization: "Optimización Data",
    kpi_sources: "Fuentes AWS",
    security_badge: "Infra & Seguridad: AWS Serverless | SecurityHeaders: A | Mozilla: B+ (SPA Opt.)",
    load_error: "No se pudo cargar el perfil profesional.",
};

const EN: UiLabels = UiLabels {
    total_experience: "Total Experience",
    years: "years",
    tech_stack: "Tech Stack & Expertise",
    experience_highlights: "Experience Highlights",
    download_cv: "Download CV",
    switch_to_data: "View Source Code & Architecture",
    switch_to_frontend: "View Visual Design",
    architecture_view: "Software Architecture & Source Code",
    json_desc: "Technical deep-dive: Domain models, reactive state management, and structured professional data.",
    current: "Current",
    at: "at",
    kpi_exp: "Years of Exp.",
    kpi_optimization: "Data Optimization",
    kpi_sources: "AWS Sources",
    security_badge: "Infra & Security: AWS Serverless | SecurityHeaders: A | Mozilla: B+ (SPA Opt.)",
    load_error: "Could not load the professional profile.",
};

impl UiLabels {
    /// The table for `language`
    #[inline]
    #[must_use]
    pub fn for_language(language: Language) -> &'static UiLabels {
        match language {
            Language::Es => &ES,
            Language::En => &EN,
        }
    }

    /// Label of the view-mode switch, given the mode currently shown
    #[inline]
    #[must_use]
    pub fn switch_label(&self, current: ViewMode) -> &'static str {
        match current {
            ViewMode::Frontend => self.switch_to_data,
            ViewMode::Data => self.switch_to_frontend,
        }
    }
}
