//! Data structures for play queries: plays, filters, summaries, registries, sessions.

mod error;
mod filter;
mod play;
mod session;
mod store;
mod team;
mod tendency;
mod what_if;

pub use error::QueryError;
pub use filter::{FieldZone, FilterSpec};
pub use play::{Direction, Frame, Play, PlayType, Player, PlayerRole, Side};
pub use session::{ChatEntry, ChatSession, Intent, SessionId, ViewMode};
pub use store::{GameInfo, PlayStore};
pub use team::{TeamDirectory, TeamInfo};
pub(crate) use team::find_word;
pub use tendency::{
    Metric, MetricDelta, TeamReport, TendencySummary, ThirdDownBreakdown, WhatIfComparison,
};
pub use what_if::{Counterfactual, WhatIfRegistry};
