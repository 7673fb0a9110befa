//! Runtime configuration from environment variables, plus loading of the optional registries.
//!
//! | Variable                | Default             |
//! |-------------------------|---------------------|
//! | `HOST`                  | `0.0.0.0`           |
//! | `PORT`                  | `8080`              |
//! | `PLAYS_PATH`            | `static/plays.json` |
//! | `WHAT_IF_PATH`          | built-in scenarios  |
//! | `TEAMS_PATH`            | built-in teams      |
//! | `SESSION_TIMEOUT_HOURS` | `12`                |

use crate::models::{QueryError, TeamDirectory, WhatIfRegistry};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub plays_path: PathBuf,
    pub what_if_path: Option<PathBuf>,
    pub teams_path: Option<PathBuf>,
    /// Sessions idle this long are dropped.
    pub session_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            plays_path: PathBuf::from("static/plays.json"),
            what_if_path: None,
            teams_path: None,
            session_timeout: Duration::from_secs(12 * 3600),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            host: non_empty("HOST").unwrap_or(defaults.host),
            port: non_empty("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            plays_path: non_empty("PLAYS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.plays_path),
            what_if_path: non_empty("WHAT_IF_PATH").map(PathBuf::from),
            teams_path: non_empty("TEAMS_PATH").map(PathBuf::from),
            session_timeout: non_empty("SESSION_TIMEOUT_HOURS")
                .and_then(|h| h.trim().parse::<u64>().ok())
                .map(|h| Duration::from_secs(h.saturating_mul(3600)))
                .unwrap_or(defaults.session_timeout),
        }
    }

    /// Counterfactual registry from `what_if_path`, or the built-in one.
    pub fn load_what_if_registry(&self) -> Result<WhatIfRegistry, QueryError> {
        match &self.what_if_path {
            Some(path) => {
                let registry = WhatIfRegistry::load(path)?;
                log::info!(
                    "Loaded {} what-if scenarios from {}",
                    registry.scenarios.len(),
                    path.display()
                );
                Ok(registry)
            }
            None => Ok(WhatIfRegistry::default()),
        }
    }

    /// Team directory from `teams_path`, or the built-in one.
    pub fn load_team_directory(&self) -> Result<TeamDirectory, QueryError> {
        match &self.teams_path {
            Some(path) => {
                let teams = TeamDirectory::load(path)?;
                log::info!("Loaded {} teams from {}", teams.teams.len(), path.display());
                Ok(teams)
            }
            None => Ok(TeamDirectory::default()),
        }
    }
}
