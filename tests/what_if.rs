//! Integration tests for what-if comparisons and scenario detection.

mod common;

use common::{play, sample_plays};
use mirror_match::{
    apply_what_if, detect_what_if, Counterfactual, FieldZone, FilterSpec, Metric, MetricDelta,
    Play, QueryError, WhatIfRegistry,
};
use serde_json::json;

fn kc() -> FilterSpec {
    FilterSpec {
        offense: Some("KC".to_string()),
        ..Default::default()
    }
}

#[test]
fn red_zone_comparison_for_kc() {
    let plays = sample_plays();
    let registry = WhatIfRegistry::default();
    let cmp = apply_what_if(&plays, &kc(), "REDZONE", &registry)
        .unwrap()
        .expect("both subsets have plays");

    assert_eq!(cmp.key, "REDZONE");
    assert_eq!(cmp.original.sample_size, 4);
    assert_eq!(cmp.adjusted.sample_size, 1);
    assert_eq!(cmp.representative_play, plays[3]);

    let metrics: Vec<Metric> = cmp.deltas.iter().map(|d| d.metric).collect();
    assert_eq!(metrics, Metric::ALL.to_vec());

    let pass_rate = cmp.delta(Metric::PassRate).unwrap();
    assert!((pass_rate.original - 0.75).abs() < 1e-9);
    assert!((pass_rate.adjusted - 1.0).abs() < 1e-9);
    assert!((pass_rate.absolute_change - 0.25).abs() < 1e-9);
    assert!((pass_rate.percent_change - 100.0 / 3.0).abs() < 1e-9);

    let avg = cmp.delta(Metric::AvgYards).unwrap();
    assert!((avg.original - 6.5).abs() < 1e-9);
    assert!((avg.adjusted - 15.0).abs() < 1e-9);
}

#[test]
fn empty_adjusted_subset_gives_no_comparison() {
    let plays: Vec<Play> = sample_plays()
        .into_iter()
        .filter(|p| p.yardline != Some(15.0))
        .collect();
    let result = apply_what_if(&plays, &kc(), "REDZONE", &WhatIfRegistry::default()).unwrap();
    assert!(result.is_none());
}

#[test]
fn empty_baseline_gives_no_comparison() {
    let plays = sample_plays();
    let nobody = FilterSpec {
        offense: Some("DAL".to_string()),
        ..Default::default()
    };
    let result = apply_what_if(&plays, &nobody, "SHOTGUN", &WhatIfRegistry::default()).unwrap();
    assert!(result.is_none());
}

#[test]
fn scenario_overrides_baseline_fields() {
    let plays = vec![
        play(json!({ "playType": "run", "shotgun": false, "yardsGained": 3 })),
        play(json!({ "playType": "pass", "passResult": "C", "shotgun": true, "yardsGained": 10 })),
    ];
    let baseline = FilterSpec {
        shotgun: Some(false),
        ..Default::default()
    };
    let cmp = apply_what_if(&plays, &baseline, "shotgun", &WhatIfRegistry::default())
        .unwrap()
        .unwrap();
    assert_eq!(cmp.original.sample_size, 1);
    assert_eq!(cmp.adjusted.sample_size, 1);

    // original pass rate is 0, so the relative change is reported as 0
    let pass_rate = cmp.delta(Metric::PassRate).unwrap();
    assert_eq!(pass_rate.original, 0.0);
    assert_eq!(pass_rate.absolute_change, 1.0);
    assert_eq!(pass_rate.percent_change, 0.0);
}

#[test]
fn percent_change_is_zero_when_original_is_zero() {
    let d = MetricDelta::new(Metric::CompletionPct, 0.0, 0.6);
    assert_eq!(d.label, "Completion %");
    assert_eq!(d.percent_change, 0.0);
    assert!((d.absolute_change - 0.6).abs() < 1e-9);

    let d = MetricDelta::new(Metric::AvgYards, 4.0, 3.0);
    assert!((d.percent_change + 25.0).abs() < 1e-9);
}

#[test]
fn unknown_scenario_is_an_error() {
    let plays = sample_plays();
    let err = apply_what_if(&plays, &kc(), "BLITZ", &WhatIfRegistry::default()).unwrap_err();
    assert_eq!(err, QueryError::UnknownCounterfactual("BLITZ".to_string()));
}

#[test]
fn detection_follows_registry_order() {
    let registry = WhatIfRegistry::default();
    assert_eq!(
        detect_what_if("What if they faced tight coverage in the red zone?", &registry),
        Some("TIGHT_COVERAGE")
    );
    assert_eq!(detect_what_if("and in the RED ZONE?", &registry), Some("REDZONE"));
    assert_eq!(detect_what_if("what about 3rd and long", &registry), Some("THIRD_AND_LONG"));
    assert_eq!(detect_what_if("from under center", &registry), Some("UNDER_CENTER"));
    assert_eq!(detect_what_if("show me something", &registry), None);
}

#[test]
fn substituted_registry() {
    let registry = WhatIfRegistry::new(vec![Counterfactual::new(
        "DEEP",
        "Deep shots",
        FilterSpec {
            yards_gained_min: Some(10.0),
            ..Default::default()
        },
        &["deep"],
    )]);
    assert_eq!(detect_what_if("what if they go deep", &registry), Some("DEEP"));
    assert_eq!(detect_what_if("red zone", &registry), None);

    let plays = sample_plays();
    let cmp = apply_what_if(&plays, &kc(), "DEEP", &registry).unwrap().unwrap();
    assert_eq!(cmp.adjusted.sample_size, 1);
    assert!(apply_what_if(&plays, &kc(), "REDZONE", &registry).is_err());
}

#[test]
fn registry_from_json() {
    let registry = WhatIfRegistry::from_json_str(
        r#"{"scenarios": [
            {"key": "RZ", "label": "Red zone", "fragment": {"fieldZone": "redzone"}, "keywords": ["rz"]}
        ]}"#,
    )
    .unwrap();
    let rz = registry.get("rz").unwrap();
    assert_eq!(rz.fragment.field_zone, Some(FieldZone::Redzone));

    assert!(matches!(
        WhatIfRegistry::from_json_str(r#"{"scenarios": []}"#),
        Err(QueryError::InvalidArgument(_))
    ));
    assert!(matches!(
        WhatIfRegistry::from_json_str("not json"),
        Err(QueryError::Parse(_))
    ));
}
