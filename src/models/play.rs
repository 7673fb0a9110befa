//! Play, Player, and Frame: one tracked offensive snap as stored in the play file.

use serde::{Deserialize, Serialize};

/// One tracked position sample.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame number (1 = snap).
    pub f: u32,
    pub x: f64,
    pub y: f64,
    /// Speed, when the source had it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<f64>,
    /// Heading in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<f64>,
}

/// Route/coverage role of a tracked player.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum PlayerRole {
    Passer,
    #[serde(rename = "Targeted Receiver")]
    TargetedReceiver,
    #[serde(rename = "Other Route Runner")]
    OtherRouteRunner,
    #[serde(rename = "Defensive Coverage")]
    DefensiveCoverage,
    #[serde(other)]
    Other,
}

/// Which side of the ball a player is on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Side {
    Offense,
    Defense,
    #[serde(other)]
    Unknown,
}

/// A player taking part in a play, with their frame track.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub nfl_id: Option<u64>,
    #[serde(default)]
    pub name: String,
    pub position: Option<String>,
    pub jersey: Option<u32>,
    /// "home"/"away" in older data sets.
    pub team: Option<String>,
    pub role: Option<PlayerRole>,
    pub side: Option<Side>,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

/// Pass or run, as recorded (older sets also carry "no_play", "unknown", ...).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayType {
    Pass,
    Run,
    #[serde(other)]
    Other,
}

/// Horizontal pass direction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Middle,
    Right,
}

impl Direction {
    /// Parse "left" / "middle" / "right" (case-insensitive). Anything else is None.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "middle" => Some(Direction::Middle),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// One discrete offensive snap with tracking data.
///
/// Nearly everything is optional: the play files come from several data sets
/// that each carry a different subset of fields. Derived values (shotgun,
/// touchdown, play type, ...) are resolved in `logic::resolvers`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub game_id: Option<u64>,
    pub play_id: Option<u64>,
    pub quarter: Option<u8>,
    pub down: Option<u8>,
    pub yards_to_go: Option<u32>,
    /// Absolute field position, 0-120 including end zones.
    pub yardline: Option<f64>,
    #[serde(alias = "possession")]
    pub offense: Option<String>,
    pub defense: Option<String>,
    pub formation: Option<String>,
    pub personnel: Option<String>,
    pub shotgun: Option<bool>,
    pub play_type: Option<PlayType>,
    /// Completion code ("C", "I", "IN", "S", ...).
    pub pass_result: Option<String>,
    pub pass_length: Option<String>,
    pub pass_location: Option<String>,
    pub direction: Option<String>,
    pub yards_gained: Option<f64>,
    pub is_touchdown: Option<bool>,
    pub description: Option<String>,
    /// Yards between the targeted receiver and the nearest defender at the snap.
    pub coverage_tightness: Option<f64>,
    pub separation: Option<f64>,
    pub is_home_offense: Option<bool>,
    pub ball_land_x: Option<f64>,
    pub ball_land_y: Option<f64>,
    pub num_frames: Option<u32>,
    #[serde(default)]
    pub players: Vec<Player>,
    /// Ball track, when the data set tracked the ball.
    #[serde(default)]
    pub ball: Vec<Frame>,
}

impl Play {
    /// Number of animation frames: `numFrames` when given, else the longest player track.
    pub fn frame_count(&self) -> u32 {
        self.num_frames.unwrap_or_else(|| {
            self.players
                .iter()
                .map(|p| p.frames.len() as u32)
                .max()
                .unwrap_or(0)
        })
    }

    /// A play can be queried only if it has players and something to animate.
    pub fn is_eligible(&self) -> bool {
        !self.players.is_empty() && self.frame_count() > 0
    }
}
