//! PlayStore: the immutable, validated collection of plays loaded at startup.

use crate::models::error::QueryError;
use crate::models::play::Play;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional game metadata carried by single-game play files.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    pub game_id: Option<u64>,
    pub home: Option<String>,
    pub away: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

/// All queryable plays. Only eligible plays (players and frames present) are kept,
/// in file order; a play's index here is its identity for the session.
#[derive(Clone, Debug, Default)]
pub struct PlayStore {
    pub game: Option<GameInfo>,
    plays: Vec<Play>,
    /// Plays dropped at load time because they had no players or no frames.
    pub dropped: usize,
}

impl PlayStore {
    /// Build a store from already-parsed plays, dropping ineligible ones.
    pub fn from_plays(plays: Vec<Play>, game: Option<GameInfo>) -> Self {
        let total = plays.len();
        let plays: Vec<Play> = plays.into_iter().filter(Play::is_eligible).collect();
        let dropped = total - plays.len();
        if dropped > 0 {
            log::debug!("Dropped {} of {} plays without players or frames", dropped, total);
        }
        Self {
            game,
            plays,
            dropped,
        }
    }

    /// Build a store from a JSON document: `{"game": {...}, "plays": [...]}`.
    ///
    /// Fails with `InvalidArgument` when the document is not an object or `plays`
    /// is missing or not an array. Individual plays that fail to parse are an error
    /// too; plays that parse but are ineligible are dropped.
    pub fn from_json_value(doc: serde_json::Value) -> Result<Self, QueryError> {
        let mut obj = match doc {
            serde_json::Value::Object(obj) => obj,
            _ => {
                return Err(QueryError::InvalidArgument(
                    "play document must be a JSON object".to_string(),
                ))
            }
        };
        let plays = match obj.remove("plays") {
            Some(serde_json::Value::Array(items)) => items,
            Some(_) => {
                return Err(QueryError::InvalidArgument(
                    "`plays` must be an array".to_string(),
                ))
            }
            None => {
                return Err(QueryError::InvalidArgument(
                    "document has no `plays` array".to_string(),
                ))
            }
        };
        let plays = plays
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                serde_json::from_value::<Play>(v)
                    .map_err(|e| QueryError::Parse(format!("play {}: {}", i, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let game = match obj.remove("game") {
            Some(v) if !v.is_null() => Some(serde_json::from_value::<GameInfo>(v)?),
            _ => None,
        };
        Ok(Self::from_plays(plays, game))
    }

    pub fn from_json_str(s: &str) -> Result<Self, QueryError> {
        let doc: serde_json::Value = serde_json::from_str(s)?;
        Self::from_json_value(doc)
    }

    /// Read and parse a play file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| QueryError::Io(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_json_str(&text)?;
        log::info!(
            "Loaded {} plays from {} ({} dropped)",
            store.len(),
            path.display(),
            store.dropped
        );
        Ok(store)
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn get(&self, index: usize) -> Option<&Play> {
        self.plays.get(index)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Distinct offense codes, sorted.
    pub fn offenses(&self) -> Vec<String> {
        let mut teams: Vec<String> = self
            .plays
            .iter()
            .filter_map(|p| p.offense.clone())
            .collect();
        teams.sort();
        teams.dedup();
        teams
    }

    /// Distinct player names across all plays, sorted.
    pub fn player_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .plays
            .iter()
            .flat_map(|p| p.players.iter().map(|pl| pl.name.clone()))
            .filter(|n| !n.trim().is_empty())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
