//! Domain and overall composites.
//!
//! Pure functions over already-normalized metric results. Nothing here is
//! cached; callers recompute from the current raw scores on every read.

use std::collections::BTreeMap;

use kognit_core::models::metric::MetricKey;
use kognit_core::models::result::{Classification, DomainSummary, MetricResult, ScoreSummary};

use crate::scoring::{DomainDefinition, percentile};

pub const PRIORITY_BELOW: f64 = 25.0;
pub const STRONG_FROM: f64 = 75.0;

/// Bucket a percentile. An absent percentile is its own state and is never
/// folded into the middle bucket.
pub fn classify(percentile: Option<f64>) -> Classification {
    match percentile {
        None => Classification::InsufficientData,
        Some(p) if p < PRIORITY_BELOW => Classification::Priority,
        Some(p) if p < STRONG_FROM => Classification::Developing,
        Some(_) => Classification::Strong,
    }
}

/// Arithmetic mean of the present z-scores among `keys`.
pub fn mean_z<'a>(
    keys: impl IntoIterator<Item = &'a MetricKey>,
    computed: &BTreeMap<MetricKey, MetricResult>,
) -> Option<f64> {
    let zs: Vec<f64> = keys
        .into_iter()
        .filter_map(|k| computed.get(k).and_then(|r| r.z))
        .collect();
    if zs.is_empty() {
        return None;
    }
    Some(zs.iter().sum::<f64>() / zs.len() as f64)
}

pub fn summarize_keys<'a>(
    keys: impl IntoIterator<Item = &'a MetricKey>,
    computed: &BTreeMap<MetricKey, MetricResult>,
) -> DomainSummary {
    let z = mean_z(keys, computed);
    let pct = z.map(percentile);
    DomainSummary {
        z,
        percentile: pct,
        classification: classify(pct),
    }
}

/// Summaries for every domain plus the overall composite.
///
/// The overall composite averages over the union of every domain's metrics,
/// so larger domains weigh proportionally more.
pub fn summarize(
    domains: &[DomainDefinition],
    computed: &BTreeMap<MetricKey, MetricResult>,
) -> ScoreSummary {
    let by_domain = domains
        .iter()
        .map(|d| (d.id, summarize_keys(&d.metrics, computed)))
        .collect();
    let overall = summarize_keys(domains.iter().flat_map(|d| &d.metrics), computed);

    ScoreSummary {
        domains: by_domain,
        overall,
    }
}
