//! Query logic: filtering, tendencies, what-ifs, intent resolution, sessions, export.

mod export;
mod filter;
mod intent;
mod report;
pub mod resolvers;
mod session;
mod tendencies;
mod what_if;

pub use export::{plays_to_csv, write_plays_csv};
pub use filter::{filter_indices, filter_plays, matches_filter};
pub use intent::{parse_filters, resolve_intent, BIG_PLAY_YARDS};
pub use report::build_team_report;
pub use session::{
    apply_filters, ask, reset_session, select_play, session_tendencies, shuffle_selection,
    start_session, step_selection,
};
pub use tendencies::{compute_tendencies, representative_play};
pub use what_if::{apply_what_if, detect_what_if};
