use common::adapter::NoopLog;
use common::error::Error;
use std::sync::Arc;

use crate::adapter::{ScriptedConsole, StubRecommendationService};
use crate::domain::recommendation::FETCH_ERROR;
use crate::domain::ReadingLevel;
use crate::tests::test_catalog;
use crate::usecase::{InteractiveSession, RecommendationFetcher, Store};

fn run_script(stub: Arc<StubRecommendationService>, lines: &[&str]) -> (Store, String) {
    let fetcher = RecommendationFetcher::new(stub, Arc::new(NoopLog));
    let mut store = Store::new(test_catalog());
    let mut console = ScriptedConsole::new(lines);
    InteractiveSession::new(&fetcher)
        .run(&mut store, &mut console)
        .unwrap();
    (store, console.output())
}

#[test]
fn test_banner_and_end_of_input() {
    let (store, out) = run_script(Arc::new(StubRecommendationService::text("X")), &[]);
    assert!(out.starts_with("AI Book Recommender"));
    assert!(store.history().is_empty());
}

#[test]
fn test_select_by_number_and_submit() {
    let stub = Arc::new(StubRecommendationService::text("The Hobbit"));
    let (store, out) = run_script(stub.clone(), &["genre 1", "mood 1", "level 1", "go"]);

    assert_eq!(store.selection().genre, "Fantasy");
    assert_eq!(store.selection().mood, "Adventurous");
    assert_eq!(store.selection().level, Some(ReadingLevel::Beginner));
    assert!(out.contains("Finding books..."));
    assert!(out.contains("Recommendation 1\nThe Hobbit"));
    assert_eq!(stub.call_count(), 1);
    assert!(!store.is_loading());
}

#[test]
fn test_genre_pick_lists_its_moods() {
    let (_, out) = run_script(
        Arc::new(StubRecommendationService::text("X")),
        &["genre mystery"],
    );
    assert!(out.contains("Genre: Mystery"));
    assert!(out.contains("Moods:\n    1. Cozy\n    2. Gritty"));
}

#[test]
fn test_submit_with_incomplete_selection() {
    let stub = Arc::new(StubRecommendationService::text("X"));
    let (store, out) = run_script(stub.clone(), &["genre Fantasy", "go"]);
    assert!(out.contains("Select a genre, mood and level first."));
    assert_eq!(stub.call_count(), 0);
    assert!(store.history().is_empty());
}

#[test]
fn test_mood_outside_genre_is_rejected() {
    let (store, out) = run_script(
        Arc::new(StubRecommendationService::text("X")),
        &["genre Fantasy", "mood Gritty"],
    );
    assert!(out.contains("Unknown mood 'Gritty'. Choose one of: Adventurous, Whimsical"));
    assert_eq!(store.selection().mood, "");
}

#[test]
fn test_mood_before_genre() {
    let (_, out) = run_script(Arc::new(StubRecommendationService::text("X")), &["mood 1"]);
    assert!(out.contains("Select a genre first."));
}

#[test]
fn test_genre_change_clears_mood() {
    let (store, _) = run_script(
        Arc::new(StubRecommendationService::text("X")),
        &["genre Fantasy", "mood Whimsical", "genre Mystery"],
    );
    assert_eq!(store.selection().mood, "");
    assert_eq!(store.available_moods(), ["Cozy", "Gritty"]);
}

#[test]
fn test_genre_without_moods_shows_empty_notice() {
    let (store, out) = run_script(
        Arc::new(StubRecommendationService::text("X")),
        &["genre Poetry"],
    );
    assert!(store.available_moods().is_empty());
    assert!(out.contains("No Moods options available."));
}

#[test]
fn test_mood_pick_for_genre_without_moods() {
    let (store, out) = run_script(
        Arc::new(StubRecommendationService::text("X")),
        &["genre Poetry", "mood 1"],
    );
    assert!(out.contains("No mood options for Poetry."));
    assert!(!out.contains("Select a genre first."));
    assert_eq!(store.selection().mood, "");
}

#[test]
fn test_clear_genre() {
    let (store, out) = run_script(
        Arc::new(StubRecommendationService::text("X")),
        &["genre Fantasy", "genre -"],
    );
    assert_eq!(store.selection().genre, "");
    assert!(store.available_moods().is_empty());
    assert!(out.contains("Genre cleared."));
}

#[test]
fn test_failure_shows_error_entry_and_keeps_going() {
    let stub = Arc::new(StubRecommendationService::failing(Error::http("boom")));
    let (store, out) = run_script(
        stub.clone(),
        &["g Fantasy", "m Adventurous", "l expert", "go", "go", "quit", "go"],
    );
    assert_eq!(store.history().len(), 2);
    assert!(out.contains(&format!("Recommendation 2\n{}", FETCH_ERROR)));
    // quit 以降の入力は読まない
    assert_eq!(stub.call_count(), 2);
}

#[test]
fn test_show_lists_selection_and_history() {
    let (_, out) = run_script(
        Arc::new(StubRecommendationService::text("Dune")),
        &["g 1", "m 2", "l Intermediate", "go", "show"],
    );
    assert!(out.contains("Genre: Fantasy\nMood:  Whimsical\nLevel: Intermediate"));
    assert!(out.ends_with("Recommendation 1\nDune"));
}

#[test]
fn test_unknown_command_and_help() {
    let (_, out) = run_script(
        Arc::new(StubRecommendationService::text("X")),
        &["dance", "help"],
    );
    assert!(out.contains("Unknown command 'dance'"));
    assert!(out.contains("Commands:"));
}
