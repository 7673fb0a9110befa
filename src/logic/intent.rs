//! Local intent resolver: keyword patterns that turn a question into filters and an answer.
//!
//! This is the offline path; it only knows the phrases listed here, the team
//! directory, the what-if registry and the player names in the store.

use crate::logic::filter::filter_plays;
use crate::logic::tendencies::compute_tendencies;
use crate::logic::what_if::{apply_what_if, detect_what_if};
use crate::models::{
    find_word, FieldZone, FilterSpec, Intent, PlayStore, PlayType, TeamDirectory, ViewMode,
    WhatIfRegistry,
};

const DOWN_PHRASES: [(u8, &[&str]); 4] = [
    (1, &["1st down", "first down", "1st and", "first and"]),
    (2, &["2nd down", "second down", "2nd and", "second and"]),
    (3, &["3rd down", "third down", "3rd and", "third and"]),
    (4, &["4th down", "fourth down", "4th and", "fourth and"]),
];

const WHAT_IF_TRIGGERS: &[&str] = &["what if", "what would", "what happens if", "instead", "compare"];
const STATS_TRIGGERS: &[&str] = &[
    "tendenc", "how often", "rate", "percentage", "stats", "average", "breakdown",
];
const DEFENSE_MARKERS: &[&str] = &["against", "vs", "vs.", "versus", "facing"];

/// Gain threshold for "big play" questions.
pub const BIG_PLAY_YARDS: f64 = 20.0;

/// Resolve a free-text question without the remote model.
pub fn resolve_intent(
    text: &str,
    store: &PlayStore,
    teams: &TeamDirectory,
    registry: &WhatIfRegistry,
) -> Intent {
    let lower = text.to_lowercase();
    let mut filters = parse_filters(text, &lower, store, teams);

    let what_if = if contains_any(&lower, WHAT_IF_TRIGGERS) {
        detect_what_if(&lower, registry).map(str::to_string)
    } else {
        None
    };

    let view_mode = if what_if.is_some() {
        ViewMode::WhatIf
    } else if contains_any(&lower, STATS_TRIGGERS) {
        ViewMode::Stats
    } else {
        ViewMode::Replay
    };

    // "pass rate" asks about passes, it does not restrict to them
    if view_mode != ViewMode::Replay {
        filters.play_type = None;
    }
    // the scenario's own predicates belong to the adjusted side only
    if let Some(scenario) = what_if.as_deref().and_then(|k| registry.get(k)) {
        filters = filters.without(&scenario.fragment);
    }

    let response_text = respond(&filters, view_mode, what_if.as_deref(), store, registry);
    log::debug!("Resolved {:?} -> {:?} ({:?})", text, filters, view_mode);

    Intent {
        filters,
        response_text,
        view_mode,
        what_if,
    }
}

/// Filters mentioned in the question. `lower` is `text` lowercased.
pub fn parse_filters(text: &str, lower: &str, store: &PlayStore, teams: &TeamDirectory) -> FilterSpec {
    let mut f = FilterSpec::default();

    f.down = DOWN_PHRASES
        .iter()
        .find(|(_, phrases)| contains_any(lower, phrases))
        .map(|(down, _)| *down);

    if let Some(yards) = yards_after_and(lower) {
        f.distance_min = Some(yards);
        f.distance_max = Some(yards);
    } else if contains_any(lower, &["and long", "& long", "long yardage"]) {
        f.distance_min = Some(7);
    } else if contains_any(lower, &["and short", "& short", "short yardage"]) {
        f.distance_max = Some(3);
    }

    if contains_any(lower, &["red zone", "redzone", "goal line"]) {
        f.field_zone = Some(FieldZone::Redzone);
    } else if contains_any(lower, &["midfield", "between the 20s"]) {
        f.field_zone = Some(FieldZone::Midfield);
    } else if contains_any(lower, &["own territory", "backed up"]) {
        f.field_zone = Some(FieldZone::OwnTerritory);
    }

    for (pos, team) in teams.mentions(text) {
        let before = lower.get(..pos).unwrap_or("").trim_end();
        let is_defense = DEFENSE_MARKERS.iter().any(|m| before.ends_with(m));
        if is_defense {
            f.defense.get_or_insert_with(|| team.code.clone());
        } else {
            f.offense.get_or_insert_with(|| team.code.clone());
        }
    }

    let passes = has_any_word(lower, &["pass", "passes", "passing", "throw", "throws"]);
    let runs = has_any_word(lower, &["run", "runs", "running", "rush", "rushes", "rushing"]);
    f.play_type = match (passes, runs) {
        (true, false) => Some(PlayType::Pass),
        (false, true) => Some(PlayType::Run),
        _ => None,
    };

    if has_any_word(lower, &["touchdown", "touchdowns", "td", "tds"]) {
        f.is_touchdown = Some(true);
    }

    if contains_any(lower, &["shotgun", "in the gun"]) {
        f.shotgun = Some(true);
    } else if lower.contains("under center") {
        f.shotgun = Some(false);
    }

    if contains_any(lower, &["tight coverage", "tight window", "contested", "press coverage"]) {
        f.coverage_tight = Some(true);
    } else if contains_any(lower, &["loose coverage", "wide open", "soft coverage"]) {
        f.coverage_tight = Some(false);
    }

    if contains_any(lower, &["big play", "big plays", "explosive", "deep shot"]) {
        f.yards_gained_min = Some(BIG_PLAY_YARDS);
    } else if contains_any(lower, &["negative", "for a loss", "sack", "stuffed"]) {
        f.yards_gained_max = Some(-1.0);
    }

    f.target_player = find_player(lower, store);
    f
}

/// Full name if mentioned, otherwise a mentioned last name (3+ letters).
fn find_player(lower: &str, store: &PlayStore) -> Option<String> {
    let names = store.player_names();
    if let Some(full) = names
        .iter()
        .find(|n| find_word(lower, &n.to_lowercase()).is_some())
    {
        return Some(full.clone());
    }
    names.iter().find_map(|n| {
        let last = n.split_whitespace().last()?.to_lowercase();
        if last.chars().count() >= 3 && find_word(lower, &last).is_some() {
            Some(last)
        } else {
            None
        }
    })
}

/// "3rd and 8" -> 8.
fn yards_after_and(lower: &str) -> Option<u32> {
    lower.match_indices("and ").find_map(|(i, m)| {
        let digits: String = lower[i + m.len()..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok().filter(|&y| y > 0)
    })
}

fn respond(
    filters: &FilterSpec,
    view_mode: ViewMode,
    what_if: Option<&str>,
    store: &PlayStore,
    registry: &WhatIfRegistry,
) -> String {
    let described = filters.describe();
    let matching = filter_plays(store.plays(), filters);

    match view_mode {
        ViewMode::WhatIf => {
            let key = what_if.unwrap_or_default();
            let label = registry.get(key).map_or(key, |c| c.label.as_str());
            match apply_what_if(store.plays(), filters, key, registry) {
                Ok(Some(cmp)) => format!(
                    "What if: {} ({}). Pass rate {} -> {}, completion {} -> {}, {:.1} -> {:.1} yards per play over {} plays.",
                    label.to_lowercase(),
                    described,
                    pct(cmp.original.pass_rate),
                    pct(cmp.adjusted.pass_rate),
                    pct(cmp.original.completion_pct),
                    pct(cmp.adjusted.completion_pct),
                    cmp.original.avg_yards,
                    cmp.adjusted.avg_yards,
                    cmp.adjusted.sample_size,
                ),
                _ => format!(
                    "Not enough plays to compare {} for {}.",
                    label.to_lowercase(),
                    described
                ),
            }
        }
        ViewMode::Stats => match compute_tendencies(matching.iter().copied()) {
            Some(t) => format!(
                "Tendencies for {} ({} plays): {} pass, {} run, {:.1} yards per play.",
                described,
                t.sample_size,
                pct(t.pass_rate),
                pct(t.run_rate),
                t.avg_yards
            ),
            None => format!("No plays match {}.", described),
        },
        ViewMode::Replay => match matching.len() {
            0 => format!("No plays match {}. Try fewer filters.", described),
            1 => format!("Found 1 play: {}.", described),
            n => format!("Found {} plays: {}.", n, described),
        },
    }
}

fn pct(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn has_any_word(haystack: &str, words: &[&str]) -> bool {
    words.iter().any(|w| find_word(haystack, w).is_some())
}
