//! Profile store behaviour against scripted sources and storage

use folio_profile::{Language, ViewMode};
use folio_store::{
    FetchError, JsonFileStorage, LoadOutcome, MemoryStorage, PreferenceStorage, ProfileStore,
    LANGUAGE_KEY, VIEW_MODE_KEY,
};
use folio_test_utils::{fixed_clock, sample_raw_profile, FailingStorage, ScriptedSource};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn store_with(source: Arc<ScriptedSource>, storage: Arc<dyn PreferenceStorage>) -> ProfileStore {
    ProfileStore::new(source, storage).with_clock(Arc::new(fixed_clock(2026, 1, 1)))
}

#[tokio::test]
async fn load_publishes_mapped_profile() {
    let source = Arc::new(ScriptedSource::with_sample());
    let store = store_with(Arc::clone(&source), Arc::new(MemoryStorage::new()));

    let outcome = store.load_profile().await;
    assert_eq!(outcome, LoadOutcome::Applied);
    assert_eq!(source.calls(), vec![Language::Es]);

    let data = store.data().unwrap();
    assert_eq!(data.total_experience_years, 6);
    assert_eq!(data.summary, "Engineer with 6 years of experience");
    assert!(data.experience[0].is_current);
    assert_eq!(data.experience[0].duration_label, "3 años");

    assert!(!store.is_loading());
    assert!(store.error().is_none());
    assert_eq!(store.personal_info().unwrap().name, "Test User");
    assert_eq!(store.skills().unwrap().cloud_data, vec!["AWS".to_string()]);
    assert_eq!(store.document_title(), "Test User | Tech Lead");
}

#[tokio::test]
async fn same_language_is_a_no_op() {
    let source = Arc::new(ScriptedSource::with_sample());
    let store = store_with(Arc::clone(&source), Arc::new(MemoryStorage::new()));

    assert!(store.set_language(Language::Es).await.is_none());
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn switching_language_persists_and_reloads() {
    let source = Arc::new(ScriptedSource::with_sample());
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(Arc::clone(&source), Arc::clone(&storage) as Arc<dyn PreferenceStorage>);

    let outcome = store.set_language(Language::En).await;
    assert_eq!(outcome, Some(LoadOutcome::Applied));
    assert_eq!(store.language(), Language::En);
    assert_eq!(source.calls(), vec![Language::En]);
    assert_eq!(storage.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
    assert_eq!(store.data().unwrap().experience[0].duration_label, "3 years");
}

#[tokio::test]
async fn persistence_failure_does_not_block_language_change() {
    let source = Arc::new(ScriptedSource::with_sample());
    let store = store_with(Arc::clone(&source), Arc::new(FailingStorage::writes()));

    let outcome = store.set_language(Language::En).await;
    assert_eq!(outcome, Some(LoadOutcome::Applied));
    assert_eq!(store.language(), Language::En);
    assert_eq!(source.call_count(), 1);
}

#[tokio::test]
async fn fetch_failure_publishes_error_state() {
    let source = Arc::new(ScriptedSource::new());
    source.fail(Language::Es, FetchError::Transport("connection refused".to_string()));
    let store = store_with(source, Arc::new(MemoryStorage::new()));

    let outcome = store.load_profile().await;
    assert!(matches!(outcome, LoadOutcome::Failed(ref f) if f.is_fetch()));
    assert!(!store.is_loading());
    assert!(store.data().is_none());
    assert!(!store.error().unwrap_or_default().is_empty());
    assert_eq!(store.document_title(), "Portfolio");
}

#[tokio::test]
async fn parse_failure_publishes_error_state() {
    let mut broken = sample_raw_profile();
    broken.experience[0].period.start = "invalid-date".to_string();
    broken.personal_info.career_start = None;

    let source = Arc::new(ScriptedSource::new());
    source.serve(Language::Es, broken);
    let store = store_with(source, Arc::new(MemoryStorage::new()));

    let outcome = store.load_profile().await;
    assert!(matches!(outcome, LoadOutcome::Failed(ref f) if f.is_parse()));
    assert!(!store.is_loading());
    assert!(store.data().is_none());
    assert!(store.error().is_some());
}

#[tokio::test]
async fn failure_after_success_clears_data() {
    let source = Arc::new(ScriptedSource::new());
    source.serve(Language::Es, sample_raw_profile());
    source.fail(Language::En, FetchError::Status { language: Language::En, status: 404 });
    let store = store_with(Arc::clone(&source), Arc::new(MemoryStorage::new()));

    assert!(store.load_profile().await.is_applied());
    assert!(store.data().is_some());

    let outcome = store.set_language(Language::En).await;
    assert!(matches!(outcome, Some(LoadOutcome::Failed(_))));
    assert!(store.data().is_none());
    assert_eq!(store.error().as_deref(), Some("Could not load the professional profile."));
}

#[tokio::test]
async fn stale_response_is_discarded() {
    let mut spanish = sample_raw_profile();
    spanish.personal_info.title = "Líder Técnico".to_string();

    let source = Arc::new(ScriptedSource::new());
    source
        .serve(Language::Es, spanish)
        .serve(Language::En, sample_raw_profile())
        .delay(Language::Es, Duration::from_millis(200));
    let store = store_with(Arc::clone(&source), Arc::new(MemoryStorage::new()));

    let (first, second) = tokio::join!(store.load_profile(), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        store.set_language(Language::En).await
    });

    assert_eq!(first, LoadOutcome::Superseded);
    assert_eq!(second, Some(LoadOutcome::Applied));
    assert_eq!(source.calls(), vec![Language::Es, Language::En]);
    assert_eq!(store.personal_info().unwrap().title, "Tech Lead");
    assert!(!store.is_loading());
}

#[tokio::test]
async fn loading_flag_is_observable() {
    let source = Arc::new(ScriptedSource::with_sample());
    source.delay(Language::Es, Duration::from_millis(50));
    let store = store_with(source, Arc::new(MemoryStorage::new()));
    let mut loading = store.subscribe_loading();

    let (outcome, seen) = tokio::join!(store.load_profile(), async {
        assert!(loading.changed().await);
        loading.get_and_mark_seen()
    });

    assert!(outcome.is_applied());
    assert!(seen);
    assert!(!loading.get());
}

#[test]
fn toggle_view_mode_persists() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(
        Arc::new(ScriptedSource::new()),
        Arc::clone(&storage) as Arc<dyn PreferenceStorage>,
    );
    let mut mode = store.subscribe_view_mode();

    assert_eq!(store.toggle_view_mode(), ViewMode::Data);
    assert_eq!(storage.get(VIEW_MODE_KEY).unwrap().as_deref(), Some("data"));
    assert!(mode.has_changed());
    assert_eq!(mode.get_and_mark_seen(), ViewMode::Data);

    assert_eq!(store.toggle_view_mode(), ViewMode::Frontend);
    assert_eq!(storage.get(VIEW_MODE_KEY).unwrap().as_deref(), Some("frontend"));
}

#[test]
fn unreadable_storage_falls_back_to_defaults() {
    let store = store_with(Arc::new(ScriptedSource::new()), Arc::new(FailingStorage::all()));
    assert_eq!(store.language(), Language::Es);
    assert_eq!(store.view_mode(), ViewMode::Frontend);
}

#[tokio::test]
async fn preferences_survive_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    {
        let store = store_with(
            Arc::new(ScriptedSource::with_sample()),
            Arc::new(JsonFileStorage::new(&path)),
        );
        store.set_language(Language::En).await;
        store.toggle_view_mode();
    }

    let store = store_with(
        Arc::new(ScriptedSource::with_sample()),
        Arc::new(JsonFileStorage::new(&path)),
    );
    assert_eq!(store.language(), Language::En);
    assert_eq!(store.view_mode(), ViewMode::Data);
}

#[tokio::test]
async fn cv_document_uses_profile_name() {
    let store = store_with(Arc::new(ScriptedSource::with_sample()), Arc::new(MemoryStorage::new()));
    assert_eq!(store.cv_document().file_name, "CV_ES.pdf");

    store.load_profile().await;
    let doc = store.cv_document();
    assert_eq!(doc.file_name, "CV_Test_User_ES.pdf");
    assert_eq!(doc.path, "assets/docs/cv-es.pdf");
}
