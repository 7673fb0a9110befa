//! TendencySummary, what-if comparison, and the per-team tendency report.

use crate::models::play::Play;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate statistics over a non-empty play subset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TendencySummary {
    pub sample_size: usize,
    pub pass_rate: f64,
    pub run_rate: f64,
    /// Completions / pass attempts; 0 with no attempts.
    pub completion_pct: f64,
    pub avg_yards: f64,
    pub pass_avg_yards: f64,
    pub run_avg_yards: f64,
    /// Share of directional passes thrown left (left + middle + right = 1, or all 0).
    pub pass_left: f64,
    pub pass_middle: f64,
    pub pass_right: f64,
    pub shotgun_rate: f64,
    /// Mean coverage tightness over plays that have it.
    pub avg_coverage: Option<f64>,
}

/// Metrics compared in a what-if.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    PassRate,
    CompletionPct,
    AvgYards,
    PassAvgYards,
}

impl Metric {
    /// Fixed order the deltas are reported in.
    pub const ALL: [Metric; 4] = [
        Metric::PassRate,
        Metric::CompletionPct,
        Metric::AvgYards,
        Metric::PassAvgYards,
    ];

    pub fn value(self, summary: &TendencySummary) -> f64 {
        match self {
            Metric::PassRate => summary.pass_rate,
            Metric::CompletionPct => summary.completion_pct,
            Metric::AvgYards => summary.avg_yards,
            Metric::PassAvgYards => summary.pass_avg_yards,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::PassRate => "Pass rate",
            Metric::CompletionPct => "Completion %",
            Metric::AvgYards => "Avg yards",
            Metric::PassAvgYards => "Pass avg yards",
        }
    }
}

/// Change of one metric between baseline and adjusted subsets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    pub metric: Metric,
    /// Display name of `metric`.
    pub label: String,
    pub original: f64,
    pub adjusted: f64,
    pub absolute_change: f64,
    /// Relative change in percent; 0 when `original` is 0.
    pub percent_change: f64,
}

impl MetricDelta {
    pub fn new(metric: Metric, original: f64, adjusted: f64) -> Self {
        let absolute_change = adjusted - original;
        let percent_change = if original == 0.0 {
            0.0
        } else {
            absolute_change / original * 100.0
        };
        Self {
            metric,
            label: metric.label().to_string(),
            original,
            adjusted,
            absolute_change,
            percent_change,
        }
    }
}

/// Baseline vs counterfactual comparison. Only built when both subsets are non-empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfComparison {
    pub key: String,
    pub label: String,
    pub original: TendencySummary,
    pub adjusted: TendencySummary,
    pub deltas: Vec<MetricDelta>,
    /// Median-by-yards play from the adjusted subset.
    pub representative_play: Play,
}

impl WhatIfComparison {
    pub fn delta(&self, metric: Metric) -> Option<&MetricDelta> {
        self.deltas.iter().find(|d| d.metric == metric)
    }
}

/// Third-down breakdown in a team report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdDownBreakdown {
    pub overall: Option<TendencySummary>,
    pub short: Option<TendencySummary>,
    pub medium: Option<TendencySummary>,
    pub long: Option<TendencySummary>,
}

/// Situational tendencies for one offense. Empty buckets are left out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamReport {
    pub team: String,
    pub total_plays: usize,
    pub overall: Option<TendencySummary>,
    /// Keyed "1".."4".
    pub by_down: BTreeMap<String, TendencySummary>,
    /// Keyed "short" / "medium" / "long".
    pub by_distance: BTreeMap<String, TendencySummary>,
    /// Keyed "shotgun" / "underCenter".
    pub by_formation: BTreeMap<String, TendencySummary>,
    pub third_down: ThirdDownBreakdown,
}
