//! Integration tests for the chat session flow.

mod common;

use common::sample_store;
use mirror_match::{
    apply_filters, ask, reset_session, select_play, session_tendencies, shuffle_selection,
    start_session, step_selection, FilterSpec, QueryError, TeamDirectory, ViewMode,
    WhatIfRegistry,
};

fn phi() -> FilterSpec {
    FilterSpec {
        offense: Some("PHI".to_string()),
        ..Default::default()
    }
}

#[test]
fn new_session_shows_everything() {
    let store = sample_store();
    let session = start_session(&store);
    assert_eq!(session.results, (0..6).collect::<Vec<_>>());
    assert_eq!(session.selected, Some(0));
    assert_eq!(session.view_mode, ViewMode::Replay);
    assert!(session.history.is_empty());
}

#[test]
fn applying_filters_selects_the_representative() {
    let store = sample_store();
    let mut session = start_session(&store);
    apply_filters(&mut session, phi(), &store);
    assert_eq!(session.results, vec![4, 5]);
    // -1 and 14 yards: the median pick is the 14-yard pass
    assert_eq!(session.selected, Some(1));
    assert_eq!(session.selected_play_index(), Some(5));
}

#[test]
fn asking_records_the_exchange() {
    let store = sample_store();
    let mut session = start_session(&store);
    let intent = ask(
        &mut session,
        "  Show me Eagles passes ",
        &store,
        &TeamDirectory::default(),
        &WhatIfRegistry::default(),
    );
    assert_eq!(session.results, vec![5]);
    assert_eq!(session.filters, intent.filters);
    assert_eq!(session.history.len(), 1);
    let entry = &session.history[0];
    assert_eq!(entry.question, "Show me Eagles passes");
    assert_eq!(entry.response, intent.response_text);
    assert_eq!(entry.match_count, 1);
}

#[test]
fn asking_a_what_if_switches_the_view() {
    let store = sample_store();
    let mut session = start_session(&store);
    ask(
        &mut session,
        "what if KC was in the red zone?",
        &store,
        &TeamDirectory::default(),
        &WhatIfRegistry::default(),
    );
    assert_eq!(session.view_mode, ViewMode::WhatIf);
    assert_eq!(session.what_if.as_deref(), Some("REDZONE"));
    assert_eq!(session.results, vec![0, 1, 2, 3]);
}

#[test]
fn stepping_wraps_around() {
    let store = sample_store();
    let mut session = start_session(&store);
    apply_filters(&mut session, phi(), &store);
    assert_eq!(step_selection(&mut session, 1).unwrap(), 4);
    assert_eq!(session.selected, Some(0));
    assert_eq!(step_selection(&mut session, -1).unwrap(), 5);
    assert_eq!(step_selection(&mut session, 3).unwrap(), 4);
}

#[test]
fn extreme_steps_wrap_without_overflow() {
    let store = sample_store();
    let mut session = start_session(&store);
    apply_filters(&mut session, phi(), &store);
    assert_eq!(select_play(&mut session, 1).unwrap(), 5);
    // isize::MAX is odd: one step past the last result
    assert_eq!(step_selection(&mut session, isize::MAX).unwrap(), 4);
    assert_eq!(select_play(&mut session, 1).unwrap(), 5);
    // isize::MIN is even: back where it started
    assert_eq!(step_selection(&mut session, isize::MIN).unwrap(), 5);
    assert_eq!(session.selected, Some(1));
}

#[test]
fn selection_is_bounded_by_results() {
    let store = sample_store();
    let mut session = start_session(&store);
    apply_filters(&mut session, phi(), &store);
    assert_eq!(select_play(&mut session, 0).unwrap(), 4);
    assert_eq!(
        select_play(&mut session, 2),
        Err(QueryError::SelectionOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(session.selected, Some(0));
}

#[test]
fn empty_results_cannot_be_stepped_or_shuffled() {
    let store = sample_store();
    let mut session = start_session(&store);
    let nobody = FilterSpec {
        offense: Some("DAL".to_string()),
        ..Default::default()
    };
    apply_filters(&mut session, nobody, &store);
    assert!(session.results.is_empty());
    assert_eq!(session.selected, None);
    assert_eq!(step_selection(&mut session, 1), Err(QueryError::EmptyResults));
    let mut rng = rand::thread_rng();
    assert_eq!(
        shuffle_selection(&mut session, &mut rng),
        Err(QueryError::EmptyResults)
    );
    assert!(session_tendencies(&session, &store).is_none());
}

#[test]
fn shuffle_stays_within_results() {
    let store = sample_store();
    let mut session = start_session(&store);
    apply_filters(&mut session, phi(), &store);
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let index = shuffle_selection(&mut session, &mut rng).unwrap();
        assert!(index == 4 || index == 5);
        assert_eq!(session.selected_play_index(), Some(index));
    }
}

#[test]
fn reset_goes_back_to_all_plays() {
    let store = sample_store();
    let mut session = start_session(&store);
    let teams = TeamDirectory::default();
    let registry = WhatIfRegistry::default();
    ask(&mut session, "Chiefs tendencies", &store, &teams, &registry);
    assert_eq!(session.view_mode, ViewMode::Stats);
    assert_eq!(session_tendencies(&session, &store).unwrap().sample_size, 4);

    reset_session(&mut session, &store);
    assert_eq!(session.results.len(), 6);
    assert!(session.filters.is_empty());
    assert!(session.history.is_empty());
    assert_eq!(session.view_mode, ViewMode::Replay);
    assert_eq!(session.what_if, None);
}
