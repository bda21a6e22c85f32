use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Same/different answer for paired-stimulus trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Judgement {
    Same,
    Different,
}

/// A subject or operator action delivered to the active runner.
///
/// Every runner ignores inputs it is not currently expecting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Input {
    /// Operator starts a timed task.
    Start,
    /// Press on the response area.
    Tap,
    /// Choice of an option, cell, node, or key by index.
    Select { index: usize },
    Judge { judgement: Judgement },
    /// Free-text submission.
    Text { text: String },
    /// Horizontal click position in pixels.
    Position { x: f64 },
    ClockTime { hour: f64, minute: f64 },
    /// Operator marks a checklist item.
    Mark { item: usize, correct: bool },
    /// Operator saves or ends the task.
    Finish,
}

impl Input {
    pub fn select(index: usize) -> Self {
        Input::Select { index }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Input::Text { text: text.into() }
    }

    pub fn judge(judgement: Judgement) -> Self {
        Input::Judge { judgement }
    }
}
