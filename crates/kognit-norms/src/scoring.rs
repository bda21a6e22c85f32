use std::collections::BTreeMap;

use kognit_core::models::metric::{Direction, DomainId, MetricKey};
use kognit_core::models::result::MetricResult;
use kognit_core::models::subject::AgeRange;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Population mean and standard deviation of one metric within a band.
///
/// `sd` is strictly positive for every entry in the shipped tables; it is not
/// checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormParams {
    pub mean: f64,
    pub sd: f64,
}

/// An age band with per-metric population parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormBand {
    pub range: AgeRange,
    pub params: BTreeMap<MetricKey, NormParams>,
}

impl NormBand {
    pub fn params(&self, key: MetricKey) -> Option<NormParams> {
        self.params.get(&key).copied()
    }
}

/// A raw metric a subtest produces.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricDefinition {
    pub key: MetricKey,
    pub label: String,
    pub direction: Direction,
}

/// A named grouping of metrics averaged into one composite.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainDefinition {
    pub id: DomainId,
    pub name: String,
    pub metrics: Vec<MetricKey>,
}

/// A raw score provided from outside the engine (imported or hand-entered).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub metric_key: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub metric_key: String,
    pub value: f64,
    pub message: String,
}

/// Standard normal CDF via the Abramowitz–Stegun polynomial.
///
/// Kept as an explicit polynomial so percentiles are bit-reproducible;
/// absolute error is around 1e-7.
pub fn normal_cdf(z: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.2316419 * z.abs());
    let d = 0.3989423 * (-z * z / 2.0).exp();
    let p = d
        * t
        * (0.3193815 + t * (-0.3565638 + t * (1.781478 + t * (-1.821256 + t * 1.330274))));
    if z > 0.0 { 1.0 - p } else { p }
}

/// Percentile (0–100) for a z-score.
pub fn percentile(z: f64) -> f64 {
    normal_cdf(z) * 100.0
}

/// Standardize a raw value against its band parameters.
///
/// The sign is flipped for [`Direction::LowerIsBetter`] so a positive z always
/// means "better than the population mean". Missing or non-finite raw values
/// yield an absent z and percentile.
pub fn normalize(raw: Option<f64>, params: NormParams, direction: Direction) -> MetricResult {
    let NormParams { mean, sd } = params;
    let Some(raw) = raw.filter(|v| v.is_finite()) else {
        return MetricResult {
            z: None,
            percentile: None,
            mean,
            sd,
        };
    };

    let mut z = (raw - mean) / sd;
    if direction == Direction::LowerIsBetter {
        z = -z;
    }

    MetricResult {
        z: Some(z),
        percentile: Some(percentile(z)),
        mean,
        sd,
    }
}
