//! Team tendency report: one offense broken down by down, distance, formation and third down.

use crate::logic::resolvers::resolve_shotgun;
use crate::logic::tendencies::compute_tendencies;
use crate::models::{Play, PlayType, TeamReport, TendencySummary, ThirdDownBreakdown};
use std::collections::BTreeMap;

/// Yards-to-go buckets: short 1-3, medium 4-7, long 8+.
const DISTANCE_BUCKETS: [(&str, u32, u32); 3] =
    [("short", 1, 3), ("medium", 4, 7), ("long", 8, u32::MAX)];

/// Situational tendencies for `team` on offense.
///
/// Only scrimmage plays count: plays recorded with a type other than pass or run
/// (kicks, penalties) are left out.
pub fn build_team_report(plays: &[Play], team: &str) -> TeamReport {
    let team_plays: Vec<&Play> = plays
        .iter()
        .filter(|p| p.offense.as_deref() == Some(team))
        .filter(|p| p.play_type != Some(PlayType::Other))
        .collect();

    let mut by_down = BTreeMap::new();
    for down in 1..=4u8 {
        let subset = team_plays.iter().copied().filter(|p| p.down == Some(down));
        insert_if_some(&mut by_down, down.to_string(), compute_tendencies(subset));
    }

    let mut by_distance = BTreeMap::new();
    for (name, lo, hi) in DISTANCE_BUCKETS {
        insert_if_some(
            &mut by_distance,
            name.to_string(),
            distance_bucket(&team_plays, lo, hi),
        );
    }

    let mut by_formation = BTreeMap::new();
    for (name, shotgun) in [("shotgun", true), ("underCenter", false)] {
        let subset = team_plays
            .iter()
            .copied()
            .filter(|p| resolve_shotgun(p) == Some(shotgun));
        insert_if_some(&mut by_formation, name.to_string(), compute_tendencies(subset));
    }

    let third: Vec<&Play> = team_plays
        .iter()
        .copied()
        .filter(|p| p.down == Some(3))
        .collect();
    let third_down = ThirdDownBreakdown {
        overall: compute_tendencies(third.iter().copied()),
        short: distance_bucket(&third, 1, 3),
        medium: distance_bucket(&third, 4, 7),
        long: distance_bucket(&third, 8, u32::MAX),
    };

    TeamReport {
        team: team.to_string(),
        total_plays: team_plays.len(),
        overall: compute_tendencies(team_plays.iter().copied()),
        by_down,
        by_distance,
        by_formation,
        third_down,
    }
}

fn distance_bucket(plays: &[&Play], lo: u32, hi: u32) -> Option<TendencySummary> {
    compute_tendencies(
        plays
            .iter()
            .copied()
            .filter(|p| p.yards_to_go.map_or(false, |d| d >= lo && d <= hi)),
    )
}

fn insert_if_some(
    map: &mut BTreeMap<String, TendencySummary>,
    key: String,
    summary: Option<TendencySummary>,
) {
    if let Some(s) = summary {
        map.insert(key, s);
    }
}
