//! What-if comparisons: baseline subset vs the same subset under a counterfactual.

use crate::logic::filter::filter_plays;
use crate::logic::tendencies::{compute_tendencies, representative_play};
use crate::models::{
    FilterSpec, Metric, MetricDelta, Play, QueryError, WhatIfComparison, WhatIfRegistry,
};

/// Compare `baseline` against `baseline` with the `key` scenario merged on top.
///
/// Returns `Ok(None)` when either subset is empty; there is no partial result.
/// Fails with `UnknownCounterfactual` when `key` is not registered.
pub fn apply_what_if(
    plays: &[Play],
    baseline: &FilterSpec,
    key: &str,
    registry: &WhatIfRegistry,
) -> Result<Option<WhatIfComparison>, QueryError> {
    let scenario = registry
        .get(key)
        .ok_or_else(|| QueryError::UnknownCounterfactual(key.to_string()))?;

    let adjusted_filter = baseline.merged(&scenario.fragment);
    let base_plays = filter_plays(plays, baseline);
    let adjusted_plays = filter_plays(plays, &adjusted_filter);

    let (Some(original), Some(adjusted)) = (
        compute_tendencies(base_plays.iter().copied()),
        compute_tendencies(adjusted_plays.iter().copied()),
    ) else {
        log::debug!(
            "What-if {} has no data ({} baseline, {} adjusted plays)",
            scenario.key,
            base_plays.len(),
            adjusted_plays.len()
        );
        return Ok(None);
    };
    let Some(representative) = representative_play(adjusted_plays.iter().copied()) else {
        return Ok(None);
    };

    let deltas = Metric::ALL
        .iter()
        .map(|&m| MetricDelta::new(m, m.value(&original), m.value(&adjusted)))
        .collect();

    Ok(Some(WhatIfComparison {
        key: scenario.key.clone(),
        label: scenario.label.clone(),
        original,
        adjusted,
        deltas,
        representative_play: representative.clone(),
    }))
}

/// First scenario (in registry order) with a keyword contained in `text`, case-insensitive.
pub fn detect_what_if<'r>(text: &str, registry: &'r WhatIfRegistry) -> Option<&'r str> {
    let lower = text.to_lowercase();
    registry
        .iter()
        .find(|c| {
            c.keywords
                .iter()
                .any(|k| !k.is_empty() && lower.contains(&k.to_lowercase()))
        })
        .map(|c| c.key.as_str())
}
