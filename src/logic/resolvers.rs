//! Derived play attributes. Each fallback rule lives in exactly one function here.

use crate::models::{Direction, FieldZone, Play, PlayType};

/// Red zone by absolute yardline: within 20 of either end.
pub const REDZONE_NEAR_MAX: f64 = 20.0;
pub const REDZONE_FAR_MIN: f64 = 100.0;
/// Red zone by ball x at the snap, used when the yardline is unknown.
pub const BALL_REDZONE_NEAR_MAX: f64 = 20.0;
pub const BALL_REDZONE_FAR_MIN: f64 = 90.0;
/// Non-red-zone plays at or below this yardline are "midfield".
pub const MIDFIELD_MAX: f64 = 50.0;
/// Coverage at or under this many yards of separation is "tight".
pub const TIGHT_COVERAGE_MAX: f64 = 3.0;

/// Yards gained, 0 when not recorded.
pub fn yards_gained(play: &Play) -> f64 {
    play.yards_gained.unwrap_or(0.0)
}

/// Pass when recorded as a pass, or when unrecorded but a pass result exists. Everything else is a run.
pub fn resolve_play_type(play: &Play) -> PlayType {
    match play.play_type {
        Some(PlayType::Pass) => PlayType::Pass,
        Some(PlayType::Run) => PlayType::Run,
        _ => {
            if has_pass_result(play) {
                PlayType::Pass
            } else {
                PlayType::Run
            }
        }
    }
}

pub fn has_pass_result(play: &Play) -> bool {
    play.pass_result
        .as_deref()
        .map_or(false, |r| !r.trim().is_empty())
}

/// Completed pass ("C").
pub fn is_completion(play: &Play) -> bool {
    play.pass_result
        .as_deref()
        .map_or(false, |r| r.trim().eq_ignore_ascii_case("c"))
}

/// Explicit shotgun flag, else whether the formation text mentions shotgun.
/// None when neither is available.
pub fn resolve_shotgun(play: &Play) -> Option<bool> {
    if let Some(s) = play.shotgun {
        return Some(s);
    }
    play.formation
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .map(|f| f.to_lowercase().contains("shotgun"))
}

/// Explicit touchdown flag, or the description mentions a touchdown.
pub fn resolve_touchdown(play: &Play) -> bool {
    play.is_touchdown == Some(true)
        || play
            .description
            .as_deref()
            .map_or(false, |d| d.to_lowercase().contains("touchdown"))
}

/// Pass direction from `passLocation`, falling back to `direction`.
pub fn resolve_pass_direction(play: &Play) -> Option<Direction> {
    play.pass_location
        .as_deref()
        .and_then(Direction::parse)
        .or_else(|| play.direction.as_deref().and_then(Direction::parse))
}

/// Ball x position at frame 1, when the ball was tracked.
pub fn ball_x_at_snap(play: &Play) -> Option<f64> {
    play.ball.iter().find(|fr| fr.f == 1).map(|fr| fr.x)
}

/// Red zone from the yardline, or from the ball position at the snap when the yardline is missing.
/// Both ends of the field count.
pub fn is_red_zone(play: &Play) -> bool {
    match play.yardline {
        Some(y) => y <= REDZONE_NEAR_MAX || y >= REDZONE_FAR_MIN,
        None => ball_x_at_snap(play)
            .map_or(false, |x| x >= BALL_REDZONE_FAR_MIN || x <= BALL_REDZONE_NEAR_MAX),
    }
}

/// Zone of the play, or None when the position is unknown.
pub fn resolve_field_zone(play: &Play) -> Option<FieldZone> {
    if is_red_zone(play) {
        return Some(FieldZone::Redzone);
    }
    play.yardline.map(|y| {
        if y <= MIDFIELD_MAX {
            FieldZone::Midfield
        } else {
            FieldZone::OwnTerritory
        }
    })
}

/// Tight (true) / loose (false) coverage, None when not measured.
pub fn resolve_coverage_tight(play: &Play) -> Option<bool> {
    play.coverage_tightness.map(|c| c <= TIGHT_COVERAGE_MAX)
}
