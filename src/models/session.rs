//! ChatSession: one user's conversation state (current filters, results, selection, transcript).

use crate::models::filter::FilterSpec;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a chat session.
pub type SessionId = Uuid;

/// How the presentation layer should show an answer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Animate the selected play.
    #[default]
    Replay,
    /// Show the tendency bars.
    Stats,
    /// Show a baseline vs counterfactual comparison.
    WhatIf,
}

/// What the intent resolver made of a question.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub filters: FilterSpec,
    pub response_text: String,
    pub view_mode: ViewMode,
    /// Counterfactual key when the question was a what-if.
    pub what_if: Option<String>,
}

/// One question/answer pair in the transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEntry {
    pub asked_at: DateTime<Utc>,
    pub question: String,
    pub response: String,
    pub filters: FilterSpec,
    pub match_count: usize,
}

/// Conversation state for one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    /// Filters currently applied.
    pub filters: FilterSpec,
    /// Store indices of plays matching `filters`, in store order.
    pub results: Vec<usize>,
    /// Position within `results` of the play on screen.
    pub selected: Option<usize>,
    pub view_mode: ViewMode,
    /// Counterfactual in effect when `view_mode` is `WhatIf`.
    pub what_if: Option<String>,
    pub history: Vec<ChatEntry>,
}

impl ChatSession {
    /// New session with no filters. `results` must be every store index.
    pub fn new(all_indices: Vec<usize>) -> Self {
        let selected = if all_indices.is_empty() { None } else { Some(0) };
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            filters: FilterSpec::default(),
            results: all_indices,
            selected,
            view_mode: ViewMode::Replay,
            what_if: None,
            history: Vec::new(),
        }
    }

    /// Store index of the selected play.
    pub fn selected_play_index(&self) -> Option<usize> {
        self.selected.and_then(|pos| self.results.get(pos).copied())
    }
}
