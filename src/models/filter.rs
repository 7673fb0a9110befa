//! FilterSpec: sparse set of predicates applied conjunctively to plays.

use crate::models::play::PlayType;
use serde::{Deserialize, Serialize};

/// Field-position bucket.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldZone {
    /// Within 20 yards of a goal line.
    Redzone,
    /// Not red zone, absolute yardline 50 or less.
    Midfield,
    /// Not red zone, absolute yardline past 50.
    OwnTerritory,
}

impl FieldZone {
    pub fn label(self) -> &'static str {
        match self {
            FieldZone::Redzone => "red zone",
            FieldZone::Midfield => "midfield",
            FieldZone::OwnTerritory => "own territory",
        }
    }
}

/// Conjunction of optional predicates. An absent field imposes no constraint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<u8>,
    /// Inclusive lower bound on yards to go.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_min: Option<u32>,
    /// Inclusive upper bound on yards to go.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_zone: Option<FieldZone>,
    /// true = tight (<= 3 yards), false = loose (> 3 yards).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_tight: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offense: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_type: Option<PlayType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yards_gained_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yards_gained_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shotgun: Option<bool>,
    /// Case-insensitive substring of a player name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_touchdown: Option<bool>,
}

impl FilterSpec {
    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        *self == FilterSpec::default()
    }

    /// Copy of `self` with every field set in `overlay` replacing ours.
    pub fn merged(&self, overlay: &FilterSpec) -> FilterSpec {
        FilterSpec {
            down: overlay.down.or(self.down),
            distance_min: overlay.distance_min.or(self.distance_min),
            distance_max: overlay.distance_max.or(self.distance_max),
            field_zone: overlay.field_zone.or(self.field_zone),
            coverage_tight: overlay.coverage_tight.or(self.coverage_tight),
            offense: overlay.offense.clone().or_else(|| self.offense.clone()),
            defense: overlay.defense.clone().or_else(|| self.defense.clone()),
            play_type: overlay.play_type.or(self.play_type),
            yards_gained_min: overlay.yards_gained_min.or(self.yards_gained_min),
            yards_gained_max: overlay.yards_gained_max.or(self.yards_gained_max),
            shotgun: overlay.shotgun.or(self.shotgun),
            target_player: overlay
                .target_player
                .clone()
                .or_else(|| self.target_player.clone()),
            is_touchdown: overlay.is_touchdown.or(self.is_touchdown),
        }
    }

    /// Copy of `self` with every field that is set in `mask` cleared.
    pub fn without(&self, mask: &FilterSpec) -> FilterSpec {
        fn keep<T: Clone>(value: &Option<T>, masked: bool) -> Option<T> {
            if masked {
                None
            } else {
                value.clone()
            }
        }
        FilterSpec {
            down: keep(&self.down, mask.down.is_some()),
            distance_min: keep(&self.distance_min, mask.distance_min.is_some()),
            distance_max: keep(&self.distance_max, mask.distance_max.is_some()),
            field_zone: keep(&self.field_zone, mask.field_zone.is_some()),
            coverage_tight: keep(&self.coverage_tight, mask.coverage_tight.is_some()),
            offense: keep(&self.offense, mask.offense.is_some()),
            defense: keep(&self.defense, mask.defense.is_some()),
            play_type: keep(&self.play_type, mask.play_type.is_some()),
            yards_gained_min: keep(&self.yards_gained_min, mask.yards_gained_min.is_some()),
            yards_gained_max: keep(&self.yards_gained_max, mask.yards_gained_max.is_some()),
            shotgun: keep(&self.shotgun, mask.shotgun.is_some()),
            target_player: keep(&self.target_player, mask.target_player.is_some()),
            is_touchdown: keep(&self.is_touchdown, mask.is_touchdown.is_some()),
        }
    }

    /// Short human-readable description, e.g. "KC offense, 3rd down, 7+ yards to go".
    /// Returns "all plays" for an empty filter.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(team) = &self.offense {
            parts.push(format!("{} offense", team));
        }
        if let Some(team) = &self.defense {
            parts.push(format!("vs {} defense", team));
        }
        if let Some(down) = self.down {
            parts.push(format!("{} down", ordinal(down)));
        }
        match (self.distance_min, self.distance_max) {
            (Some(lo), Some(hi)) if lo == hi => parts.push(format!("{} to go", lo)),
            (Some(lo), Some(hi)) => parts.push(format!("{}-{} yards to go", lo, hi)),
            (Some(lo), None) => parts.push(format!("{}+ yards to go", lo)),
            (None, Some(hi)) => parts.push(format!("{} or fewer yards to go", hi)),
            (None, None) => {}
        }
        if let Some(zone) = self.field_zone {
            parts.push(zone.label().to_string());
        }
        match self.play_type {
            Some(PlayType::Pass) => parts.push("passes".to_string()),
            Some(_) => parts.push("runs".to_string()),
            None => {}
        }
        match self.shotgun {
            Some(true) => parts.push("shotgun".to_string()),
            Some(false) => parts.push("under center".to_string()),
            None => {}
        }
        match self.coverage_tight {
            Some(true) => parts.push("tight coverage".to_string()),
            Some(false) => parts.push("loose coverage".to_string()),
            None => {}
        }
        match (self.yards_gained_min, self.yards_gained_max) {
            (Some(lo), Some(hi)) => parts.push(format!("gains of {} to {}", lo, hi)),
            (Some(lo), None) => parts.push(format!("gains of {}+", lo)),
            (None, Some(hi)) => parts.push(format!("gains of {} or less", hi)),
            (None, None) => {}
        }
        if let Some(name) = &self.target_player {
            parts.push(format!("involving {}", name));
        }
        match self.is_touchdown {
            Some(true) => parts.push("touchdowns".to_string()),
            Some(false) => parts.push("no touchdown".to_string()),
            None => {}
        }
        if parts.is_empty() {
            "all plays".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn ordinal(n: u8) -> String {
    let suffix = match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
