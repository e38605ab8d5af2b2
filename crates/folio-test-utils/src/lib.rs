//! Testing utilities for the folio workspace
//!
//! Shared fixtures and test doubles for sources, storage and analytics.

#![allow(missing_docs)]

use async_trait::async_trait;
use folio_client::{AnalyticsSink, TrackedEvent};
use folio_profile::{
    Experience, ExperiencePeriod, FixedClock, Language, LanguageSkill, PersonalInfo, RawProfile,
    Skills,
};
use folio_store::{FetchError, MemoryStorage, PersistenceError, PreferenceStorage, ProfileSource};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

/// Clock stopped at midnight UTC of a known-valid date
pub fn fixed_clock(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock::try_ymd(year, month, day).unwrap()
}

pub fn sample_personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Test User".to_string(),
        title: "Tech Lead".to_string(),
        location: "Madrid".to_string(),
        email: "test@example.com".to_string(),
        phone: "+34 600 000 000".to_string(),
        linkedin: "https://linkedin.com/in/test".to_string(),
        career_start: Some("2020-01".to_string()),
    }
}

pub fn sample_experience(company: &str, start: &str, end: &str) -> Experience {
    Experience {
        company: company.to_string(),
        period: ExperiencePeriod {
            start: start.to_string(),
            end: end.to_string(),
        },
        role: "Lead Developer".to_string(),
        domain: "FinTech".to_string(),
        stack: vec![".NET".to_string(), "Angular".to_string()],
        is_lead: true,
        metrics: vec!["-40% latency".to_string()],
        description: "Led the platform team".to_string(),
    }
}

/// Profile with a 2020-01 career start and one ongoing position since 2023-01
pub fn sample_raw_profile() -> RawProfile {
    RawProfile {
        personal_info: sample_personal_info(),
        summary: "Engineer with {{years}} years of experience".to_string(),
        experience: vec![sample_experience("Test Company", "2023-01", "")],
        skills: Skills {
            cloud_data: vec!["AWS".to_string()],
            backend: vec![".NET".to_string()],
            frontend: vec!["Angular".to_string()],
            architecture: vec!["DDD".to_string()],
            devops: vec!["Docker".to_string()],
        },
        education: "Computer Engineering".to_string(),
        languages: vec![LanguageSkill {
            language: "English".to_string(),
            level: "Professional".to_string(),
        }],
    }
}

/// Serialized form of [`sample_raw_profile`]
pub fn sample_profile_json() -> String {
    serde_json::to_string_pretty(&sample_raw_profile()).unwrap()
}

/// Canned response of a [`ScriptedSource`]
#[derive(Debug, Clone)]
pub enum Scripted {
    Profile(RawProfile),
    Error(FetchError),
}

/// Source answering from per-language scripts, with optional latency
#[derive(Debug, Default)]
pub struct ScriptedSource {
    responses: Mutex<HashMap<Language, Scripted>>,
    delays: Mutex<HashMap<Language, Duration>>,
    calls: Mutex<Vec<Language>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source serving [`sample_raw_profile`] for every language
    pub fn with_sample() -> Self {
        let source = Self::new();
        for language in Language::ALL {
            source.respond(language, Scripted::Profile(sample_raw_profile()));
        }
        source
    }

    pub fn respond(&self, language: Language, response: Scripted) -> &Self {
        self.responses.lock().insert(language, response);
        self
    }

    pub fn serve(&self, language: Language, profile: RawProfile) -> &Self {
        self.respond(language, Scripted::Profile(profile))
    }

    pub fn fail(&self, language: Language, error: FetchError) -> &Self {
        self.respond(language, Scripted::Error(error))
    }

    pub fn delay(&self, language: Language, delay: Duration) -> &Self {
        self.delays.lock().insert(language, delay);
        self
    }

    /// Languages requested so far, in order
    pub fn calls(&self) -> Vec<Language> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ProfileSource for ScriptedSource {
    async fn fetch_profile(&self, language: Language) -> Result<RawProfile, FetchError> {
        self.calls.lock().push(language);

        let delay = self.delays.lock().get(&language).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let response = self.responses.lock().get(&language).cloned();
        match response {
            Some(Scripted::Profile(profile)) => Ok(profile),
            Some(Scripted::Error(error)) => Err(error),
            None => Err(FetchError::Status {
                language,
                status: 404,
            }),
        }
    }
}

/// Storage whose writes (and optionally reads) fail
#[derive(Debug, Default)]
pub struct FailingStorage {
    inner: MemoryStorage,
    fail_reads: bool,
}

impl FailingStorage {
    /// Reads succeed, writes fail
    pub fn writes() -> Self {
        Self::default()
    }

    /// Every operation fails
    pub fn all() -> Self {
        Self {
            inner: MemoryStorage::new(),
            fail_reads: true,
        }
    }

    /// Reads served from `entries`, writes fail
    pub fn with_entries<K: Into<String>, V: Into<String>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            inner: MemoryStorage::with_entries(entries),
            fail_reads: false,
        }
    }
}

impl PreferenceStorage for FailingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.fail_reads {
            return Err(PersistenceError::Unavailable("storage disabled".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::Unavailable("quota exceeded".to_string()))
    }
}

/// Sink keeping every event it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<TrackedEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TrackedEvent> {
        self.events.lock().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events.lock().iter().map(|e| e.name.clone()).collect()
    }
}

impl AnalyticsSink for RecordingSink {
    fn send(&self, event: TrackedEvent) {
        self.events.lock().push(event);
    }
}
