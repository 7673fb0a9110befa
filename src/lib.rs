//! Mirror Match: football play query engine. Library with models and query logic.

pub mod config;
pub mod logic;
pub mod models;

pub use config::AppConfig;
pub use logic::{
    apply_filters, apply_what_if, ask, build_team_report, compute_tendencies, detect_what_if,
    filter_indices, filter_plays, matches_filter, plays_to_csv, representative_play,
    reset_session, resolve_intent, select_play, session_tendencies, shuffle_selection,
    start_session, step_selection, write_plays_csv,
};
pub use models::{
    ChatEntry, ChatSession, Counterfactual, Direction, FieldZone, FilterSpec, Frame, GameInfo,
    Intent, Metric, MetricDelta, Play, PlayStore, PlayType, Player, PlayerRole, QueryError,
    SessionId, Side, TeamDirectory, TeamInfo, TeamReport, TendencySummary, ThirdDownBreakdown,
    ViewMode, WhatIfComparison, WhatIfRegistry,
};
