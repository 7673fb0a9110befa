//! Team directory: codes, names, and colors used to label plays and read team names out of questions.

use crate::models::error::QueryError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One franchise.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    /// Play-by-play code, e.g. "KC".
    pub code: String,
    pub city: String,
    pub nickname: String,
    /// Hex color, e.g. "#E31837".
    pub primary_color: String,
    /// Extra lowercase names that refer to this team ("kansas city", "niners", ...).
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl TeamInfo {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.city, self.nickname)
    }

    /// Lowercase names matched against question text.
    fn names(&self) -> impl Iterator<Item = String> + '_ {
        [self.nickname.to_lowercase(), self.city.to_lowercase()]
            .into_iter()
            .chain(self.aliases.iter().map(|a| a.to_lowercase()))
    }
}

/// Immutable lookup table of teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamDirectory {
    pub teams: Vec<TeamInfo>,
}

const DEFAULT_TEAMS: &[(&str, &str, &str, &str)] = &[
    ("ARI", "Arizona", "Cardinals", "#97233F"),
    ("ATL", "Atlanta", "Falcons", "#A71930"),
    ("BAL", "Baltimore", "Ravens", "#241773"),
    ("BUF", "Buffalo", "Bills", "#00338D"),
    ("CAR", "Carolina", "Panthers", "#0085CA"),
    ("CHI", "Chicago", "Bears", "#0B162A"),
    ("CIN", "Cincinnati", "Bengals", "#FB4F14"),
    ("CLE", "Cleveland", "Browns", "#311D00"),
    ("DAL", "Dallas", "Cowboys", "#003594"),
    ("DEN", "Denver", "Broncos", "#FB4F14"),
    ("DET", "Detroit", "Lions", "#0076B6"),
    ("GB", "Green Bay", "Packers", "#203731"),
    ("HOU", "Houston", "Texans", "#03202F"),
    ("IND", "Indianapolis", "Colts", "#002C5F"),
    ("JAX", "Jacksonville", "Jaguars", "#006778"),
    ("KC", "Kansas City", "Chiefs", "#E31837"),
    ("LV", "Las Vegas", "Raiders", "#000000"),
    ("LAC", "Los Angeles", "Chargers", "#0080C6"),
    ("LA", "Los Angeles", "Rams", "#003594"),
    ("MIA", "Miami", "Dolphins", "#008E97"),
    ("MIN", "Minnesota", "Vikings", "#4F2683"),
    ("NE", "New England", "Patriots", "#002244"),
    ("NO", "New Orleans", "Saints", "#D3BC8D"),
    ("NYG", "New York", "Giants", "#0B2265"),
    ("NYJ", "New York", "Jets", "#125740"),
    ("PHI", "Philadelphia", "Eagles", "#004C54"),
    ("PIT", "Pittsburgh", "Steelers", "#FFB612"),
    ("SF", "San Francisco", "49ers", "#AA0000"),
    ("SEA", "Seattle", "Seahawks", "#002244"),
    ("TB", "Tampa Bay", "Buccaneers", "#D50A0A"),
    ("TEN", "Tennessee", "Titans", "#0C2340"),
    ("WAS", "Washington", "Commanders", "#5A1414"),
];

/// Cities shared by two franchises; those only resolve through the nickname.
const SHARED_CITIES: &[&str] = &["los angeles", "new york"];

impl TeamDirectory {
    pub fn new(teams: Vec<TeamInfo>) -> Self {
        Self { teams }
    }

    /// Team by code (case-insensitive).
    pub fn get(&self, code: &str) -> Option<&TeamInfo> {
        self.teams
            .iter()
            .find(|t| t.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Primary color for a code, or a neutral gray.
    pub fn color(&self, code: &str) -> &str {
        self.get(code)
            .map(|t| t.primary_color.as_str())
            .unwrap_or("#808080")
    }

    /// Teams mentioned in `text`, in order of first mention.
    ///
    /// Names match case-insensitively on word boundaries; bare codes ("KC")
    /// only match when written in upper case so "no" and "ne" stay words.
    pub fn find_in_text(&self, text: &str) -> Vec<&TeamInfo> {
        self.mentions(text).into_iter().map(|(_, t)| t).collect()
    }

    /// Like `find_in_text`, with the byte offset of each first mention in `text.to_lowercase()`.
    pub fn mentions(&self, text: &str) -> Vec<(usize, &TeamInfo)> {
        let lower = text.to_lowercase();
        let mut hits: Vec<(usize, &TeamInfo)> = Vec::new();
        for team in &self.teams {
            let by_name = team
                .names()
                .filter(|n| !SHARED_CITIES.contains(&n.as_str()))
                .filter_map(|n| find_word(&lower, &n))
                .min();
            // codes match in the original text; map the offset into `lower`
            let by_code = find_word(text, &team.code).map(|pos| text[..pos].to_lowercase().len());
            if let Some(pos) = by_name.into_iter().chain(by_code).min() {
                hits.push((pos, team));
            }
        }
        hits.sort_by_key(|(pos, _)| *pos);
        hits
    }

    pub fn from_json_str(s: &str) -> Result<Self, QueryError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for TeamDirectory {
    fn default() -> Self {
        let teams = DEFAULT_TEAMS
            .iter()
            .map(|(code, city, nickname, color)| TeamInfo {
                code: code.to_string(),
                city: city.to_string(),
                nickname: nickname.to_string(),
                primary_color: color.to_string(),
                aliases: match *code {
                    "SF" => vec!["niners".to_string()],
                    "TB" => vec!["bucs".to_string()],
                    "KC" => vec!["kc".to_string()],
                    _ => Vec::new(),
                },
            })
            .collect();
        Self::new(teams)
    }
}

/// Byte offset of `needle` in `haystack` where it is not part of a larger word.
pub(crate) fn find_word(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let is_word = |c: char| c.is_alphanumeric();
    let mut start = 0;
    while let Some(found) = haystack[start..].find(needle) {
        let pos = start + found;
        let end = pos + needle.len();
        let before_ok = haystack[..pos].chars().next_back().map_or(true, |c| !is_word(c));
        let after_ok = haystack[end..].chars().next().map_or(true, |c| !is_word(c));
        if before_ok && after_ok {
            return Some(pos);
        }
        start = pos + needle.len();
    }
    None
}
