use std::collections::{BTreeMap, BTreeSet};

use kognit_core::models::metric::{DomainId, MetricKey};
use kognit_core::models::result::{Classification, MetricResult};
use kognit_norms::aggregate::{classify, mean_z, summarize};
use kognit_norms::batteries::standard::StandardBattery;
use kognit_norms::scoring::{DomainDefinition, ScoreEntry};
use kognit_norms::{Battery, get_battery, require_battery};

fn result(z: Option<f64>) -> MetricResult {
    MetricResult {
        z,
        percentile: None,
        mean: 0.0,
        sd: 1.0,
    }
}

#[test]
fn every_band_covers_every_metric() {
    let battery = StandardBattery;
    for band in battery.bands() {
        for metric in battery.metrics() {
            let params = band.params(metric.key).unwrap();
            assert!(params.sd > 0.0, "{} sd must be positive", metric.key);
        }
    }
}

#[test]
fn bands_are_contiguous_and_non_overlapping() {
    let bands = StandardBattery.bands();
    for pair in bands.windows(2) {
        assert_eq!(pair[0].range.max_age + 1, pair[1].range.min_age);
    }
}

#[test]
fn twelve_and_thirteen_fall_in_different_bands() {
    let battery = StandardBattery;
    let child = battery.pick_band(12);
    let teen = battery.pick_band(13);
    assert_eq!(child.range.max_age, 12);
    assert_eq!(teen.range.min_age, 13);
}

#[test]
fn out_of_range_age_uses_adult_band() {
    let battery = StandardBattery;
    let band = battery.pick_band(200);
    assert_eq!(band.range, battery.default_band().range);
    assert_eq!(band.range.min_age, 18);
    assert_eq!(band.range.max_age, 59);
}

#[test]
fn every_metric_belongs_to_exactly_one_domain() {
    let battery = StandardBattery;
    let mut seen = BTreeSet::new();
    for domain in battery.domains() {
        for key in &domain.metrics {
            assert!(seen.insert(*key), "{key} listed twice");
        }
    }
    assert_eq!(seen.len(), battery.metrics().len());
    assert_eq!(seen.len(), MetricKey::ALL.len());
}

#[test]
fn evaluate_reports_every_metric_even_without_scores() {
    let battery = StandardBattery;
    let computed = battery.evaluate(30, &BTreeMap::new());
    assert_eq!(computed.len(), MetricKey::ALL.len());
    assert!(computed.values().all(|r| r.z.is_none()));

    let summary = battery.summarize(&computed);
    assert_eq!(summary.overall.classification, Classification::InsufficientData);
    for id in DomainId::ALL {
        assert_eq!(summary.domain(id).unwrap().z, None);
    }
}

#[test]
fn evaluate_uses_age_band() {
    let battery = StandardBattery;
    let mut scores = BTreeMap::new();
    scores.insert(MetricKey::Tapping, 60.0);

    let child = battery.evaluate(10, &scores);
    assert_eq!(child[&MetricKey::Tapping].z, Some(0.0));

    let adult = battery.evaluate(30, &scores);
    let z = adult[&MetricKey::Tapping].z.unwrap();
    assert!((z - (60.0 - 80.0) / 12.0).abs() < 1e-12);
}

#[test]
fn all_absent_domain_is_absent() {
    let mut computed = BTreeMap::new();
    computed.insert(MetricKey::Tapping, result(None));
    computed.insert(MetricKey::ReactionTime, result(None));
    assert_eq!(
        mean_z(&[MetricKey::Tapping, MetricKey::ReactionTime], &computed),
        None
    );
}

#[test]
fn single_present_z_is_the_domain_z() {
    let mut computed = BTreeMap::new();
    computed.insert(MetricKey::Tapping, result(Some(1.25)));
    computed.insert(MetricKey::ReactionTime, result(None));
    assert_eq!(
        mean_z(&[MetricKey::Tapping, MetricKey::ReactionTime], &computed),
        Some(1.25)
    );
}

#[test]
fn overall_weights_by_metric_count() {
    let domains = vec![
        DomainDefinition {
            id: DomainId::Motor,
            name: "Motor".to_string(),
            metrics: vec![MetricKey::Tapping],
        },
        DomainDefinition {
            id: DomainId::Executive,
            name: "Executive".to_string(),
            metrics: vec![MetricKey::CardSort, MetricKey::Alternation],
        },
    ];
    let mut computed = BTreeMap::new();
    computed.insert(MetricKey::Tapping, result(Some(3.0)));
    computed.insert(MetricKey::CardSort, result(Some(0.0)));
    computed.insert(MetricKey::Alternation, result(Some(0.0)));

    let summary = summarize(&domains, &computed);
    assert_eq!(summary.domain(DomainId::Motor).unwrap().z, Some(3.0));
    assert_eq!(summary.domain(DomainId::Executive).unwrap().z, Some(0.0));
    // mean of 3, 0, 0 rather than mean of 3 and 0
    assert_eq!(summary.overall.z, Some(1.0));
}

#[test]
fn classification_boundaries() {
    assert_eq!(classify(None), Classification::InsufficientData);
    assert_eq!(classify(Some(0.0)), Classification::Priority);
    assert_eq!(classify(Some(24.999)), Classification::Priority);
    assert_eq!(classify(Some(25.0)), Classification::Developing);
    assert_eq!(classify(Some(74.999)), Classification::Developing);
    assert_eq!(classify(Some(75.0)), Classification::Strong);
    assert_eq!(classify(Some(100.0)), Classification::Strong);
}

#[test]
fn validate_scores_flags_unknown_and_non_finite() {
    let battery = StandardBattery;
    let entries = vec![
        ScoreEntry {
            metric_key: "M_TAP".to_string(),
            value: 70.0,
        },
        ScoreEntry {
            metric_key: "M_NOPE".to_string(),
            value: 1.0,
        },
        ScoreEntry {
            metric_key: "M_RT".to_string(),
            value: f64::NAN,
        },
    ];
    let errors = battery.validate_scores(&entries);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].metric_key, "M_NOPE");
    assert!(errors[1].message.contains("Reaction"));
    assert!(battery.collect_scores(&entries).is_err());
}

#[test]
fn collect_scores_keeps_last_write() {
    let battery = StandardBattery;
    let entries = vec![
        ScoreEntry {
            metric_key: "V_TMA".to_string(),
            value: 40000.0,
        },
        ScoreEntry {
            metric_key: "V_TMA".to_string(),
            value: 36000.0,
        },
    ];
    let scores = battery.collect_scores(&entries).unwrap();
    assert_eq!(scores[&MetricKey::TrailA], 36000.0);
}

#[test]
fn structured_text_lists_domains_and_missing_metrics() {
    let battery = StandardBattery;
    let mut scores = BTreeMap::new();
    scores.insert(MetricKey::Tapping, 80.0);
    let computed = battery.evaluate(30, &scores);
    let summary = battery.summarize(&computed);

    let text = battery.to_structured_text(&computed, &summary);
    assert!(text.starts_with("## Mixed Digital Assessment"));
    assert!(text.contains("### Motor (developing)"));
    assert!(text.contains("- Tapping (count): z 0.00, 50.0%"));
    assert!(text.contains("- Reaction (ms): -"));
}

#[test]
fn battery_lookup_by_id() {
    assert!(get_battery("standard").is_some());
    assert!(require_battery("wais").is_err());
}
