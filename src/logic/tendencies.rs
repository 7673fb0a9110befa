//! Tendency aggregation and representative-play selection.

use crate::logic::resolvers::{
    is_completion, resolve_pass_direction, resolve_play_type, resolve_shotgun, yards_gained,
};
use crate::models::{Direction, Play, PlayType, TendencySummary};

/// Aggregate statistics over `plays`, or None when there are no plays.
///
/// Pass/run rates use the whole subset; completion % and per-type averages use
/// their own sub-population (0 when empty). The direction split is over passes
/// with a known direction and is all zeros when there are none.
pub fn compute_tendencies<'a, I>(plays: I) -> Option<TendencySummary>
where
    I: IntoIterator<Item = &'a Play>,
{
    let plays: Vec<&Play> = plays.into_iter().collect();
    if plays.is_empty() {
        return None;
    }
    let n = plays.len() as f64;

    let (passes, runs): (Vec<&Play>, Vec<&Play>) = plays
        .iter()
        .copied()
        .partition(|p| resolve_play_type(p) == PlayType::Pass);

    let completions = passes.iter().filter(|p| is_completion(p)).count();
    let completion_pct = ratio(completions as f64, passes.len());

    let (mut left, mut middle, mut right) = (0usize, 0usize, 0usize);
    for p in &passes {
        match resolve_pass_direction(p) {
            Some(Direction::Left) => left += 1,
            Some(Direction::Middle) => middle += 1,
            Some(Direction::Right) => right += 1,
            None => {}
        }
    }
    let directional = match left + middle + right {
        0 => 1.0,
        total => total as f64,
    };

    let shotgun = plays
        .iter()
        .filter(|p| resolve_shotgun(p) == Some(true))
        .count();

    let coverage: Vec<f64> = plays.iter().filter_map(|p| p.coverage_tightness).collect();
    let avg_coverage = if coverage.is_empty() {
        None
    } else {
        Some(coverage.iter().sum::<f64>() / coverage.len() as f64)
    };

    Some(TendencySummary {
        sample_size: plays.len(),
        pass_rate: passes.len() as f64 / n,
        run_rate: runs.len() as f64 / n,
        completion_pct,
        avg_yards: total_yards(&plays) / n,
        pass_avg_yards: ratio(total_yards(&passes), passes.len()),
        run_avg_yards: ratio(total_yards(&runs), runs.len()),
        pass_left: left as f64 / directional,
        pass_middle: middle as f64 / directional,
        pass_right: right as f64 / directional,
        shotgun_rate: shotgun as f64 / n,
        avg_coverage,
    })
}

/// Median play by yards gained (lower middle on even counts), or None when empty.
///
/// Sorts a copy with a stable sort, so equal gains keep their input order and
/// the caller's collection is untouched.
pub fn representative_play<'a, I>(plays: I) -> Option<&'a Play>
where
    I: IntoIterator<Item = &'a Play>,
{
    let mut sorted: Vec<&Play> = plays.into_iter().collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| yards_gained(a).total_cmp(&yards_gained(b)));
    Some(sorted[sorted.len() / 2])
}

fn total_yards(plays: &[&Play]) -> f64 {
    plays.iter().map(|p| yards_gained(p)).sum()
}

fn ratio(numerator: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        numerator / count as f64
    }
}
