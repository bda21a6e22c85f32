use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Stable identifier of a raw metric produced by one subtest.
///
/// The serialized names are the keys used in exported assessments and in the
/// normative tables, so they must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MetricKey {
    #[serde(rename = "C_ATT")]
    Attention,
    #[serde(rename = "C_WM")]
    WorkingMemory,
    #[serde(rename = "C_FLU")]
    VerbalFluency,
    #[serde(rename = "C_SIM")]
    Similarity,
    #[serde(rename = "C_ORI")]
    Orientation,
    #[serde(rename = "M_TAP")]
    Tapping,
    #[serde(rename = "M_RT")]
    ReactionTime,
    #[serde(rename = "A_DIS")]
    ToneDiscrimination,
    #[serde(rename = "A_MEM")]
    AuditorySpan,
    #[serde(rename = "V_VM")]
    VisualMemory,
    #[serde(rename = "V_VSRT")]
    VisualSearch,
    #[serde(rename = "V_ATT_CONT")]
    Cancellation,
    #[serde(rename = "V_LINE")]
    LineOrientation,
    #[serde(rename = "V_TMA")]
    TrailA,
    #[serde(rename = "V_TMB")]
    TrailB,
    #[serde(rename = "V_BIS_DEV")]
    LineBisection,
    #[serde(rename = "V_CLOCK")]
    ClockDrawing,
    #[serde(rename = "V_REY")]
    ComplexFigure,
    #[serde(rename = "V_FACE")]
    FaceDiscrimination,
    #[serde(rename = "V_STORY")]
    StoryRecall,
    #[serde(rename = "EX_WCST")]
    CardSort,
    #[serde(rename = "EX_LURIA")]
    Alternation,
}

impl MetricKey {
    pub const ALL: [MetricKey; 22] = [
        MetricKey::Attention,
        MetricKey::WorkingMemory,
        MetricKey::VerbalFluency,
        MetricKey::Similarity,
        MetricKey::Orientation,
        MetricKey::Tapping,
        MetricKey::ReactionTime,
        MetricKey::ToneDiscrimination,
        MetricKey::AuditorySpan,
        MetricKey::VisualMemory,
        MetricKey::VisualSearch,
        MetricKey::Cancellation,
        MetricKey::LineOrientation,
        MetricKey::TrailA,
        MetricKey::TrailB,
        MetricKey::LineBisection,
        MetricKey::ClockDrawing,
        MetricKey::ComplexFigure,
        MetricKey::FaceDiscrimination,
        MetricKey::StoryRecall,
        MetricKey::CardSort,
        MetricKey::Alternation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKey::Attention => "C_ATT",
            MetricKey::WorkingMemory => "C_WM",
            MetricKey::VerbalFluency => "C_FLU",
            MetricKey::Similarity => "C_SIM",
            MetricKey::Orientation => "C_ORI",
            MetricKey::Tapping => "M_TAP",
            MetricKey::ReactionTime => "M_RT",
            MetricKey::ToneDiscrimination => "A_DIS",
            MetricKey::AuditorySpan => "A_MEM",
            MetricKey::VisualMemory => "V_VM",
            MetricKey::VisualSearch => "V_VSRT",
            MetricKey::Cancellation => "V_ATT_CONT",
            MetricKey::LineOrientation => "V_LINE",
            MetricKey::TrailA => "V_TMA",
            MetricKey::TrailB => "V_TMB",
            MetricKey::LineBisection => "V_BIS_DEV",
            MetricKey::ClockDrawing => "V_CLOCK",
            MetricKey::ComplexFigure => "V_REY",
            MetricKey::FaceDiscrimination => "V_FACE",
            MetricKey::StoryRecall => "V_STORY",
            MetricKey::CardSort => "EX_WCST",
            MetricKey::Alternation => "EX_LURIA",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::UnknownMetric(s.to_string()))
    }
}

/// Which way a raw metric improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Direction {
    /// Counts, points, spans.
    HigherIsBetter,
    /// Latencies, deviations.
    LowerIsBetter,
}

/// A named grouping of related metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DomainId {
    Cognitive,
    Motor,
    Auditory,
    Visual,
    Executive,
}

impl DomainId {
    pub const ALL: [DomainId; 5] = [
        DomainId::Cognitive,
        DomainId::Motor,
        DomainId::Auditory,
        DomainId::Visual,
        DomainId::Executive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DomainId::Cognitive => "cognitive",
            DomainId::Motor => "motor",
            DomainId::Auditory => "auditory",
            DomainId::Visual => "visual",
            DomainId::Executive => "executive",
        }
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainId::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CoreError::UnknownDomain(s.to_string()))
    }
}
