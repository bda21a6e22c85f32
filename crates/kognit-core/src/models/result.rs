use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::metric::DomainId;

/// Normalized view of one metric against its band.
///
/// `z` and `percentile` are `None` when no finite raw value has been
/// recorded. `mean` and `sd` are always reported for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricResult {
    pub z: Option<f64>,
    pub percentile: Option<f64>,
    pub mean: f64,
    pub sd: f64,
}

/// Three-level bucket for a percentile, plus a distinct "no data" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Classification {
    /// Percentile below 25.
    Priority,
    /// Percentile in [25, 75).
    Developing,
    /// Percentile 75 and above.
    Strong,
    InsufficientData,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Priority => "priority",
            Classification::Developing => "developing",
            Classification::Strong => "strong",
            Classification::InsufficientData => "insufficient_data",
        }
    }
}

/// Composite over a set of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainSummary {
    pub z: Option<f64>,
    pub percentile: Option<f64>,
    pub classification: Classification,
}

/// Every domain composite plus the overall composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreSummary {
    pub domains: BTreeMap<DomainId, DomainSummary>,
    pub overall: DomainSummary,
}

impl ScoreSummary {
    pub fn domain(&self, id: DomainId) -> Option<&DomainSummary> {
        self.domains.get(&id)
    }
}
