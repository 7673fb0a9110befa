//! Filtering plays against a FilterSpec.

use crate::logic::resolvers::{
    resolve_coverage_tight, resolve_field_zone, resolve_play_type, resolve_shotgun,
    resolve_touchdown, yards_gained,
};
use crate::models::{FilterSpec, Play, PlayType};

/// Every play satisfying all present predicates of `filter`, in input order.
///
/// An empty filter returns everything; an empty input returns an empty vec.
pub fn filter_plays<'a, I>(plays: I, filter: &FilterSpec) -> Vec<&'a Play>
where
    I: IntoIterator<Item = &'a Play>,
{
    plays
        .into_iter()
        .filter(|p| matches_filter(p, filter))
        .collect()
}

/// Positions in `plays` of the matching plays.
pub fn filter_indices(plays: &[Play], filter: &FilterSpec) -> Vec<usize> {
    plays
        .iter()
        .enumerate()
        .filter(|(_, p)| matches_filter(p, filter))
        .map(|(i, _)| i)
        .collect()
}

/// Whether a single play passes every present predicate.
///
/// Missing data is handled per predicate: an unknown shotgun value skips the
/// shotgun check, while unknown coverage fails the coverage check.
pub fn matches_filter(play: &Play, filter: &FilterSpec) -> bool {
    if let Some(down) = filter.down {
        if play.down != Some(down) {
            return false;
        }
    }

    if filter.distance_min.is_some() || filter.distance_max.is_some() {
        let Some(to_go) = play.yards_to_go else {
            return false;
        };
        if filter.distance_min.map_or(false, |min| to_go < min) {
            return false;
        }
        if filter.distance_max.map_or(false, |max| to_go > max) {
            return false;
        }
    }

    if let Some(zone) = filter.field_zone {
        if resolve_field_zone(play) != Some(zone) {
            return false;
        }
    }

    if let Some(tight) = filter.coverage_tight {
        if resolve_coverage_tight(play) != Some(tight) {
            return false;
        }
    }

    if let Some(team) = &filter.offense {
        if play.offense.as_deref() != Some(team.as_str()) {
            return false;
        }
    }
    if let Some(team) = &filter.defense {
        if play.defense.as_deref() != Some(team.as_str()) {
            return false;
        }
    }

    if let Some(wanted) = filter.play_type {
        let is_pass = resolve_play_type(play) == PlayType::Pass;
        let wants_pass = wanted == PlayType::Pass;
        if is_pass != wants_pass {
            return false;
        }
    }

    let gained = yards_gained(play);
    if filter.yards_gained_min.map_or(false, |min| gained < min) {
        return false;
    }
    if filter.yards_gained_max.map_or(false, |max| gained > max) {
        return false;
    }

    if let Some(wanted) = filter.shotgun {
        if let Some(actual) = resolve_shotgun(play) {
            if actual != wanted {
                return false;
            }
        }
    }

    if let Some(name) = &filter.target_player {
        let needle = name.to_lowercase();
        if !play
            .players
            .iter()
            .any(|p| p.name.to_lowercase().contains(&needle))
        {
            return false;
        }
    }

    if let Some(wanted) = filter.is_touchdown {
        if resolve_touchdown(play) != wanted {
            return false;
        }
    }

    true
}
