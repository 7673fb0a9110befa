//! Shared fixtures: plays built from JSON so tests read like the play file.

#![allow(dead_code)]

use mirror_match::{Play, PlayStore};
use serde_json::{json, Value};

/// A minimal eligible play (one tracked player, one frame) with `fields` laid over it.
pub fn play(fields: Value) -> Play {
    let mut base = json!({
        "numFrames": 1,
        "players": [{
            "name": "Alex Smith",
            "role": "Passer",
            "side": "Offense",
            "frames": [{ "f": 1, "x": 50.0, "y": 26.6 }]
        }]
    });
    if let (Some(obj), Value::Object(extra)) = (base.as_object_mut(), fields) {
        for (k, v) in extra {
            obj.insert(k, v);
        }
    }
    serde_json::from_value(base).expect("fixture play must parse")
}

/// The two plays used throughout: a 3rd-and-8 pass for 12 and a 3rd-and-2 run for 3.
pub fn third_down_pair() -> Vec<Play> {
    vec![
        play(json!({ "down": 3, "yardsToGo": 8, "playType": "pass", "yardsGained": 12 })),
        play(json!({ "down": 3, "yardsToGo": 2, "playType": "run", "yardsGained": 3 })),
    ]
}

/// A small KC/PHI sample covering most predicates.
pub fn sample_plays() -> Vec<Play> {
    vec![
        play(json!({
            "offense": "KC", "defense": "PHI", "down": 1, "yardsToGo": 10, "yardline": 75,
            "playType": "pass", "passResult": "C", "passLocation": "left", "yardsGained": 9,
            "shotgun": true, "coverageTightness": 2.0
        })),
        play(json!({
            "offense": "KC", "defense": "PHI", "down": 2, "yardsToGo": 1, "yardline": 66,
            "playType": "run", "yardsGained": 2, "formation": "SINGLEBACK"
        })),
        play(json!({
            "offense": "KC", "defense": "PHI", "down": 3, "yardsToGo": 9, "yardline": 45,
            "playType": "pass", "passResult": "I", "passLocation": "right", "yardsGained": 0,
            "formation": "SHOTGUN", "coverageTightness": 4.5
        })),
        play(json!({
            "offense": "KC", "defense": "PHI", "down": 1, "yardsToGo": 10, "yardline": 15,
            "playType": "pass", "passResult": "C", "passLocation": "middle", "yardsGained": 15,
            "description": "P.Mahomes pass short middle to T.Kelce for 15 yards, TOUCHDOWN",
            "coverageTightness": 1.5,
            "players": [
                { "name": "Patrick Mahomes", "role": "Passer", "side": "Offense",
                  "frames": [{ "f": 1, "x": 22.0, "y": 26.6 }] },
                { "name": "Travis Kelce", "role": "Targeted Receiver", "side": "Offense",
                  "frames": [{ "f": 1, "x": 15.0, "y": 20.0 }] }
            ]
        })),
        play(json!({
            "offense": "PHI", "defense": "KC", "down": 3, "yardsToGo": 2, "yardline": 30,
            "playType": "run", "yardsGained": -1, "shotgun": false
        })),
        play(json!({
            "offense": "PHI", "defense": "KC", "down": 3, "yardsToGo": 12, "yardline": 60,
            "playType": "pass", "passResult": "C", "passLocation": "right", "yardsGained": 14,
            "shotgun": true, "coverageTightness": 3.0
        })),
    ]
}

pub fn sample_store() -> PlayStore {
    PlayStore::from_plays(sample_plays(), None)
}
