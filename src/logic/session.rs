//! Chat session flow: ask a question, apply filters, move the play selection.

use crate::logic::filter::filter_indices;
use crate::logic::intent::resolve_intent;
use crate::logic::tendencies::{compute_tendencies, representative_play};
use crate::models::{
    ChatEntry, ChatSession, FilterSpec, Intent, PlayStore, QueryError, TeamDirectory,
    TendencySummary, ViewMode, WhatIfRegistry,
};
use chrono::Utc;
use rand::Rng;

/// New session showing every play.
pub fn start_session(store: &PlayStore) -> ChatSession {
    ChatSession::new((0..store.len()).collect())
}

/// Resolve `question` locally, apply its filters, and record it in the transcript.
pub fn ask(
    session: &mut ChatSession,
    question: &str,
    store: &PlayStore,
    teams: &TeamDirectory,
    registry: &WhatIfRegistry,
) -> Intent {
    let intent = resolve_intent(question, store, teams, registry);
    apply_filters(session, intent.filters.clone(), store);
    session.view_mode = intent.view_mode;
    session.what_if = intent.what_if.clone();
    session.history.push(ChatEntry {
        asked_at: Utc::now(),
        question: question.trim().to_string(),
        response: intent.response_text.clone(),
        filters: intent.filters.clone(),
        match_count: session.results.len(),
    });
    intent
}

/// Replace the session's filters, recompute results, and select the representative play.
pub fn apply_filters(session: &mut ChatSession, filters: FilterSpec, store: &PlayStore) {
    let plays = store.plays();
    session.results = filter_indices(plays, &filters);
    session.filters = filters;
    session.selected = representative_play(session.results.iter().map(|&i| &plays[i]))
        .and_then(|rep| {
            session
                .results
                .iter()
                .position(|&i| std::ptr::eq(&plays[i], rep))
        });
}

/// Select the play at `position` within the current results; returns its store index.
pub fn select_play(session: &mut ChatSession, position: usize) -> Result<usize, QueryError> {
    let index = *session
        .results
        .get(position)
        .ok_or(QueryError::SelectionOutOfRange {
            index: position,
            len: session.results.len(),
        })?;
    session.selected = Some(position);
    Ok(index)
}

/// Move the selection forward (positive) or back (negative), wrapping around.
pub fn step_selection(session: &mut ChatSession, step: isize) -> Result<usize, QueryError> {
    let len = session.results.len();
    if len == 0 {
        return Err(QueryError::EmptyResults);
    }
    let len = len as isize;
    let current = session.selected.unwrap_or(0) as isize;
    // reduce first so huge steps cannot overflow
    let next = (current + step.rem_euclid(len)).rem_euclid(len) as usize;
    select_play(session, next)
}

/// Select a random play among the current results.
pub fn shuffle_selection<R: Rng + ?Sized>(
    session: &mut ChatSession,
    rng: &mut R,
) -> Result<usize, QueryError> {
    if session.results.is_empty() {
        return Err(QueryError::EmptyResults);
    }
    let position = rng.gen_range(0..session.results.len());
    select_play(session, position)
}

/// Clear filters and transcript, back to every play.
pub fn reset_session(session: &mut ChatSession, store: &PlayStore) {
    apply_filters(session, FilterSpec::default(), store);
    session.view_mode = ViewMode::Replay;
    session.what_if = None;
    session.history.clear();
}

/// Tendencies of the session's current results.
pub fn session_tendencies(session: &ChatSession, store: &PlayStore) -> Option<TendencySummary> {
    compute_tendencies(session.results.iter().filter_map(|&i| store.get(i)))
}
