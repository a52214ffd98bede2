//! Integration tests for flashdeck
//!
//! These tests lay out real data directories with `tempfile` and drive the
//! catalog and study session through complete workflows.

use flashdeck::catalog::{Catalog, CatalogError, DirectorySource};
use flashdeck::study::{
    CardSequence, CardView, IgnoreReason, Layout, Level, NavOutcome, SelectionView, StudySession,
};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a data directory with the given files
fn setup_data_dir(files: &[(&str, String)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

fn cards(n: usize) -> String {
    let cards: Vec<_> = (1..=n)
        .map(|i| json!({"question": format!("Q{i}"), "answer": format!("A{i}")}))
        .collect();
    serde_json::Value::Array(cards).to_string()
}

fn course(id: &str, source: &str, category: &str, technology: &str) -> serde_json::Value {
    json!({
        "CourseID": id,
        "Title": format!("{id} title"),
        "Description": "",
        "Certifier": "Board",
        "Source": source,
        "Category": category,
        "Technology": technology,
    })
}

fn open(dir: &TempDir, layout: Layout) -> StudySession<DirectorySource> {
    StudySession::open(DirectorySource::new(dir.path()), "courses.json", layout)
        .with_sequence(CardSequence::seeded(42))
}

fn entry_keys(session: &StudySession<DirectorySource>) -> Vec<String> {
    match session.selection_view() {
        SelectionView::Entries(entries) => entries.into_iter().map(|e| e.key).collect(),
        SelectionView::Error(e) => panic!("unexpected catalog error: {e}"),
    }
}

#[test]
fn test_flat_course_with_missing_file_counts_zero() {
    let manifest = json!({"Courses": [
        course("A", "cards/a.json", "Cloud", "Azure"),
        course("B", "cards/b.json", "Cloud", "Azure"),
    ]});
    let dir = setup_data_dir(&[
        ("courses.json", manifest.to_string()),
        ("cards/a.json", cards(3)),
    ]);

    let catalog = Catalog::load(&DirectorySource::new(dir.path()), "courses.json").unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.course("A").unwrap().card_count(), 3);
    assert_eq!(catalog.course("B").unwrap().card_count(), 0);
    assert!(!catalog.course("B").unwrap().is_selectable());
    assert_eq!(catalog.failures().len(), 1);
    assert_eq!(catalog.failures()[0].course_id, "B");
}

#[test]
fn test_flat_study_walkthrough() {
    let manifest = json!({"Courses": [
        course("A", "a.json", "Cloud", "Azure"),
        course("B", "b.json", "Cloud", "Azure"),
    ]});
    let dir = setup_data_dir(&[("courses.json", manifest.to_string()), ("a.json", cards(3))]);
    let mut session = open(&dir, Layout::Flat);

    assert_eq!(session.active_level(), Level::Course);
    assert_eq!(
        session.select("B"),
        NavOutcome::Ignored(IgnoreReason::NotSelectable)
    );

    assert!(session.select("A").is_transition());
    assert!(session.controls().previous_disabled);

    session.next();
    session.next();
    assert!(session.controls().next_disabled);
    assert!(!session.next());
    assert_eq!(session.sequence().index(), Some(2));

    assert!(session.flip());
    match session.card_view() {
        CardView::Card {
            card,
            flipped: true,
            position: 2,
            total: 3,
            ..
        } => assert_eq!(card.answer, "A3"),
        other => panic!("unexpected view {other:?}"),
    }
}

#[test]
fn test_grouped_lists_sorted_distinct_technologies() {
    let manifest = json!({"Courses": [
        course("SC-1", "sc1.json", "Security", "Network"),
        course("SC-2", "sc2.json", "Security", "Identity"),
        course("SC-3", "sc3.json", "Security", "Identity"),
        course("CL-1", "cl1.json", "Cloud", "Azure"),
    ]});
    let dir = setup_data_dir(&[
        ("courses.json", manifest.to_string()),
        ("sc1.json", cards(1)),
        ("sc2.json", cards(2)),
        ("sc3.json", cards(1)),
        ("cl1.json", cards(1)),
    ]);
    let mut session = open(&dir, Layout::Grouped);

    assert_eq!(entry_keys(&session), vec!["Cloud", "Security"]);

    session.select("Security");
    assert_eq!(entry_keys(&session), vec!["Identity", "Network"]);

    session.select("Identity");
    assert_eq!(entry_keys(&session), vec!["SC-2", "SC-3"]);

    session.select("SC-2");
    assert_eq!(session.active_level(), Level::Flashcards);
    assert!(session.navigation().selections_form_prefix());
}

#[test]
fn test_reentering_course_resets_position_and_order() {
    let manifest = json!({"Courses": [course("A", "a.json", "Cloud", "Azure")]});
    let dir = setup_data_dir(&[("courses.json", manifest.to_string()), ("a.json", cards(5))]);
    let mut session = open(&dir, Layout::Flat);

    session.select("A");
    session.set_randomize(true);
    session.next();
    session.next();

    session.go_back();
    session.select("A");

    assert_eq!(session.sequence().index(), Some(0));
    assert!(!session.controls().randomize);
    let questions: Vec<_> = session
        .sequence()
        .active_order()
        .map(|c| c.question.as_str())
        .collect();
    assert_eq!(questions, vec!["Q1", "Q2", "Q3", "Q4", "Q5"]);
}

#[test]
fn test_card_file_removed_after_catalog_load() {
    let manifest = json!({"Courses": [course("A", "a.json", "Cloud", "Azure")]});
    let dir = setup_data_dir(&[("courses.json", manifest.to_string()), ("a.json", cards(2))]);
    let mut session = open(&dir, Layout::Flat);

    fs::remove_file(dir.path().join("a.json")).unwrap();
    assert!(session.select("A").is_transition());

    assert!(session.sequence().is_empty());
    assert!(matches!(
        session.load_error(),
        Some(CatalogError::CourseDataLoad { .. })
    ));
    assert!(matches!(session.card_view(), CardView::LoadError { .. }));
    let controls = session.controls();
    assert!(controls.next_disabled && controls.previous_disabled);
}

#[test]
fn test_missing_manifest_shows_error() {
    let dir = setup_data_dir(&[]);
    let session = open(&dir, Layout::Grouped);

    match session.selection_view() {
        SelectionView::Error(message) => {
            assert!(message.starts_with("Error loading courses."));
            assert!(message.contains("courses.json"));
        }
        SelectionView::Entries(_) => panic!("expected error view"),
    }
    assert!(session.visible_categories().is_empty());
}

#[test]
fn test_malformed_manifest_is_a_manifest_error() {
    let dir = setup_data_dir(&[("courses.json", "{\"Courses\": [".to_string())]);

    let err = Catalog::load(&DirectorySource::new(dir.path()), "courses.json").unwrap_err();

    assert!(err.is_manifest_error());
}
