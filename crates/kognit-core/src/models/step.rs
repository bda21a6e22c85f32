use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::metric::MetricKey;

/// One page of the assessment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Step {
    Intake,
    Orientation,
    Tapping,
    Reaction,
    Stroop,
    VerbalFluency,
    Similarity,
    StoryRecall,
    WorkingMemory,
    AuditorySpan,
    ToneDiscrimination,
    VisualMemory,
    TrailA,
    TrailB,
    ClockDrawing,
    LineBisection,
    Cancellation,
    LineOrientation,
    ComplexFigure,
    FaceDiscrimination,
    CardSort,
    Alternation,
    VisualSearch,
    Results,
}

impl Step {
    /// The metric this step records, or `None` for intake and results.
    pub fn metric(self) -> Option<MetricKey> {
        let key = match self {
            Step::Intake | Step::Results => return None,
            Step::Orientation => MetricKey::Orientation,
            Step::Tapping => MetricKey::Tapping,
            Step::Reaction => MetricKey::ReactionTime,
            Step::Stroop => MetricKey::Attention,
            Step::VerbalFluency => MetricKey::VerbalFluency,
            Step::Similarity => MetricKey::Similarity,
            Step::StoryRecall => MetricKey::StoryRecall,
            Step::WorkingMemory => MetricKey::WorkingMemory,
            Step::AuditorySpan => MetricKey::AuditorySpan,
            Step::ToneDiscrimination => MetricKey::ToneDiscrimination,
            Step::VisualMemory => MetricKey::VisualMemory,
            Step::TrailA => MetricKey::TrailA,
            Step::TrailB => MetricKey::TrailB,
            Step::ClockDrawing => MetricKey::ClockDrawing,
            Step::LineBisection => MetricKey::LineBisection,
            Step::Cancellation => MetricKey::Cancellation,
            Step::LineOrientation => MetricKey::LineOrientation,
            Step::ComplexFigure => MetricKey::ComplexFigure,
            Step::FaceDiscrimination => MetricKey::FaceDiscrimination,
            Step::CardSort => MetricKey::CardSort,
            Step::Alternation => MetricKey::Alternation,
            Step::VisualSearch => MetricKey::VisualSearch,
        };
        Some(key)
    }

    pub fn is_subtest(self) -> bool {
        self.metric().is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            Step::Intake => "Intake",
            Step::Orientation => "Orientation",
            Step::Tapping => "Tapping",
            Step::Reaction => "Reaction",
            Step::Stroop => "Stroop",
            Step::VerbalFluency => "Verbal Fluency",
            Step::Similarity => "Similarity",
            Step::StoryRecall => "Story Recall",
            Step::WorkingMemory => "Working Memory",
            Step::AuditorySpan => "Auditory Span",
            Step::ToneDiscrimination => "Tone",
            Step::VisualMemory => "Visual Memory",
            Step::TrailA => "Trail A",
            Step::TrailB => "Trail B",
            Step::ClockDrawing => "Clock",
            Step::LineBisection => "Line Bisection",
            Step::Cancellation => "Cancellation",
            Step::LineOrientation => "Line Orientation",
            Step::ComplexFigure => "Complex Figure",
            Step::FaceDiscrimination => "Face Discrimination",
            Step::CardSort => "Card Sort",
            Step::Alternation => "Alternation",
            Step::VisualSearch => "Visual Search",
            Step::Results => "Results",
        }
    }
}
