use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::metric::MetricKey;
use super::result::{MetricResult, ScoreSummary};
use super::step::Step;
use super::subject::{AgeGroup, AgeRange, SubjectProfile};
use crate::error::CoreError;
use crate::export_keys;

/// Subject metadata and run context attached to an export.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportMeta {
    pub subject: SubjectProfile,
    pub age_group: AgeGroup,
    pub band: AgeRange,
    pub steps: Vec<Step>,
    pub generated_at: jiff::Timestamp,
}

/// The structured result handed to the presentation layer for download.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentExport {
    pub id: Uuid,
    pub meta: ExportMeta,
    pub scores: BTreeMap<MetricKey, f64>,
    pub computed: BTreeMap<MetricKey, MetricResult>,
    pub summary: ScoreSummary,
    pub notes: String,
}

impl AssessmentExport {
    pub fn file_name(&self) -> String {
        export_keys::assessment_export(self.meta.generated_at)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
