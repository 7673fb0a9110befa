//! Counterfactual registry: named filter fragments for what-if comparisons.

use crate::models::error::QueryError;
use crate::models::filter::{FieldZone, FilterSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named filter fragment merged on top of a baseline filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counterfactual {
    /// Lookup key, e.g. "REDZONE".
    pub key: String,
    pub label: String,
    pub fragment: FilterSpec,
    /// Lowercase phrases that select this scenario in free text.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Counterfactual {
    pub fn new(key: &str, label: &str, fragment: FilterSpec, keywords: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            fragment,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Ordered list of counterfactuals. Order is the keyword-detection priority.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhatIfRegistry {
    pub scenarios: Vec<Counterfactual>,
}

impl WhatIfRegistry {
    pub fn new(scenarios: Vec<Counterfactual>) -> Self {
        Self { scenarios }
    }

    /// Look up a scenario by key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&Counterfactual> {
        self.scenarios
            .iter()
            .find(|c| c.key.eq_ignore_ascii_case(key.trim()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Counterfactual> {
        self.scenarios.iter()
    }

    /// Parse a registry from JSON (`{"scenarios": [...]}`).
    pub fn from_json_str(s: &str) -> Result<Self, QueryError> {
        let registry: WhatIfRegistry = serde_json::from_str(s)?;
        if registry.scenarios.is_empty() {
            return Err(QueryError::InvalidArgument(
                "what-if registry has no scenarios".to_string(),
            ));
        }
        Ok(registry)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for WhatIfRegistry {
    fn default() -> Self {
        Self::new(vec![
            Counterfactual::new(
                "TIGHT_COVERAGE",
                "Tight coverage",
                FilterSpec {
                    coverage_tight: Some(true),
                    ..Default::default()
                },
                &["tight coverage", "tighter coverage", "press coverage", "tight man"],
            ),
            Counterfactual::new(
                "LOOSE_COVERAGE",
                "Loose coverage",
                FilterSpec {
                    coverage_tight: Some(false),
                    ..Default::default()
                },
                &["loose coverage", "soft coverage", "off coverage", "more cushion"],
            ),
            Counterfactual::new(
                "REDZONE",
                "In the red zone",
                FilterSpec {
                    field_zone: Some(FieldZone::Redzone),
                    ..Default::default()
                },
                &["red zone", "redzone", "goal line"],
            ),
            Counterfactual::new(
                "MIDFIELD",
                "Between the 20s",
                FilterSpec {
                    field_zone: Some(FieldZone::Midfield),
                    ..Default::default()
                },
                &["midfield", "between the 20s"],
            ),
            Counterfactual::new(
                "THIRD_AND_LONG",
                "Third and long",
                FilterSpec {
                    down: Some(3),
                    distance_min: Some(7),
                    ..Default::default()
                },
                &["third and long", "3rd and long", "3rd & long"],
            ),
            Counterfactual::new(
                "THIRD_AND_SHORT",
                "Third and short",
                FilterSpec {
                    down: Some(3),
                    distance_max: Some(3),
                    ..Default::default()
                },
                &["third and short", "3rd and short", "3rd & short"],
            ),
            Counterfactual::new(
                "SHOTGUN",
                "From shotgun",
                FilterSpec {
                    shotgun: Some(true),
                    ..Default::default()
                },
                &["shotgun", "in the gun"],
            ),
            Counterfactual::new(
                "UNDER_CENTER",
                "Under center",
                FilterSpec {
                    shotgun: Some(false),
                    ..Default::default()
                },
                &["under center"],
            ),
        ])
    }
}
