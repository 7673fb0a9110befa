//! Integration tests for the local intent resolver and the team directory.

mod common;

use common::sample_store;
use mirror_match::{
    resolve_intent, FieldZone, Intent, PlayType, TeamDirectory, ViewMode, WhatIfRegistry,
};

fn resolve(text: &str) -> Intent {
    resolve_intent(
        text,
        &sample_store(),
        &TeamDirectory::default(),
        &WhatIfRegistry::default(),
    )
}

#[test]
fn team_down_distance_and_type() {
    let intent = resolve("Show me Chiefs passes on 3rd and long");
    let f = &intent.filters;
    assert_eq!(f.offense.as_deref(), Some("KC"));
    assert_eq!(f.down, Some(3));
    assert_eq!(f.distance_min, Some(7));
    assert_eq!(f.distance_max, None);
    assert_eq!(f.play_type, Some(PlayType::Pass));
    assert_eq!(intent.view_mode, ViewMode::Replay);
    assert_eq!(intent.what_if, None);
    assert!(intent.response_text.starts_with("Found 1 play"), "{}", intent.response_text);
}

#[test]
fn exact_distance() {
    let f = resolve("third and 2").filters;
    assert_eq!(f.down, Some(3));
    assert_eq!((f.distance_min, f.distance_max), (Some(2), Some(2)));
}

#[test]
fn stats_question_with_defense() {
    let intent = resolve("What's the Eagles run tendency against KC?");
    assert_eq!(intent.view_mode, ViewMode::Stats);
    assert_eq!(intent.filters.offense.as_deref(), Some("PHI"));
    assert_eq!(intent.filters.defense.as_deref(), Some("KC"));
    // a tendency question does not restrict the play type
    assert_eq!(intent.filters.play_type, None);
    assert!(intent.response_text.contains("2 plays"), "{}", intent.response_text);
    assert!(intent.response_text.contains("50% pass"), "{}", intent.response_text);
}

#[test]
fn what_if_question() {
    let intent = resolve("What if KC faced tight coverage?");
    assert_eq!(intent.view_mode, ViewMode::WhatIf);
    assert_eq!(intent.what_if.as_deref(), Some("TIGHT_COVERAGE"));
    assert_eq!(intent.filters.offense.as_deref(), Some("KC"));
    // the scenario predicate stays off the baseline
    assert_eq!(intent.filters.coverage_tight, None);
    assert!(intent.response_text.starts_with("What if: tight coverage"), "{}", intent.response_text);
}

#[test]
fn what_if_without_data() {
    let intent = resolve("what if the Eagles were in the red zone");
    assert_eq!(intent.what_if.as_deref(), Some("REDZONE"));
    assert_eq!(intent.filters.field_zone, None);
    assert!(intent.response_text.starts_with("Not enough plays"), "{}", intent.response_text);
}

#[test]
fn scenario_words_without_trigger_are_plain_filters() {
    let intent = resolve("red zone plays from the shotgun");
    assert_eq!(intent.what_if, None);
    assert_eq!(intent.filters.field_zone, Some(FieldZone::Redzone));
    assert_eq!(intent.filters.shotgun, Some(true));
}

#[test]
fn touchdowns_to_a_player() {
    let intent = resolve("Any touchdowns to Kelce?");
    assert_eq!(intent.filters.is_touchdown, Some(true));
    assert_eq!(intent.filters.target_player.as_deref(), Some("kelce"));
    assert!(intent.response_text.starts_with("Found 1 play"), "{}", intent.response_text);
}

#[test]
fn full_player_name_wins() {
    let intent = resolve("Patrick Mahomes under center");
    assert_eq!(
        intent.filters.target_player.as_deref(),
        Some("Patrick Mahomes")
    );
    assert_eq!(intent.filters.shotgun, Some(false));
}

#[test]
fn big_plays_and_negative_plays() {
    assert_eq!(resolve("show me big plays").filters.yards_gained_min, Some(20.0));
    assert_eq!(resolve("runs stuffed for a loss").filters.yards_gained_max, Some(-1.0));
}

#[test]
fn no_match_message() {
    let intent = resolve("Cowboys runs");
    assert_eq!(intent.filters.offense.as_deref(), Some("DAL"));
    assert!(intent.response_text.starts_with("No plays match"), "{}", intent.response_text);
}

#[test]
fn unrecognized_text_means_all_plays() {
    let intent = resolve("hello there");
    assert!(intent.filters.is_empty());
    assert_eq!(intent.response_text, "Found 6 plays: all plays.");
}

#[test]
fn defense_marker_after_text_that_shrinks_when_lowercased() {
    // 'ẞ' is 3 bytes and lowercases to the 2-byte 'ß'
    let intent = resolve("ẞẞẞẞ Eagles against DAL");
    assert_eq!(intent.filters.offense.as_deref(), Some("PHI"));
    assert_eq!(intent.filters.defense.as_deref(), Some("DAL"));

    let teams = TeamDirectory::default();
    let text = "ẞẞ DAL";
    let (pos, team) = teams.mentions(text)[0];
    assert_eq!(team.code, "DAL");
    assert_eq!(&text.to_lowercase()[pos..], "dal");
}

#[test]
fn team_mentions() {
    let teams = TeamDirectory::default();
    let found: Vec<&str> = teams
        .find_in_text("KC vs the Eagles, not the Niners")
        .iter()
        .map(|t| t.code.as_str())
        .collect();
    assert_eq!(found, vec!["KC", "PHI", "SF"]);

    // lowercase codes are ordinary words
    assert!(teams.find_in_text("no, ne, la").is_empty());
    // shared cities need the nickname
    assert!(teams.find_in_text("new york").is_empty());
    assert_eq!(teams.find_in_text("the Jets")[0].code, "NYJ");
    assert_eq!(teams.color("kc"), "#E31837");
    assert_eq!(teams.get("KC").unwrap().display_name(), "Kansas City Chiefs");
    assert_eq!(teams.color("XYZ"), "#808080");
}
