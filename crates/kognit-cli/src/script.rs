//! Input files for `kognit score` and `kognit replay`.

use std::collections::BTreeMap;

use kognit_core::models::subject::SubjectProfile;
use kognit_norms::scoring::ScoreEntry;
use kognit_session::Session;
use kognit_subtests::clock::Millis;
use kognit_subtests::input::Input;
use serde::{Deserialize, Serialize};

/// Raw scores collected elsewhere, keyed by metric key (`"M_TAP"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreInput {
    pub subject: SubjectProfile,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub notes: String,
}

impl ScoreInput {
    pub fn entries(&self) -> Vec<ScoreEntry> {
        self.scores
            .iter()
            .map(|(metric_key, value)| ScoreEntry {
                metric_key: metric_key.clone(),
                value: *value,
            })
            .collect()
    }
}

/// What happened at one moment of a recorded run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Next,
    Previous,
    /// Restart the current step.
    Restart,
    /// Let time pass without any input.
    Wait,
    Input { input: Input },
    Profile { subject: SubjectProfile },
    Notes { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub at: Millis,
    #[serde(flatten)]
    pub action: Action,
}

/// A recorded session: the intake, the seed the stimuli were drawn from and
/// every timestamped action in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayScript {
    pub subject: SubjectProfile,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Feed every event to `session`. Timestamps that go backwards are treated as
/// the latest time seen.
pub fn replay(session: &mut Session, events: &[Event]) {
    session.begin(events.first().map_or(0, |e| e.at));
    for event in events {
        match &event.action {
            Action::Next => session.next(event.at),
            Action::Previous => session.previous(event.at),
            Action::Restart => session.begin(event.at),
            Action::Wait => session.advance(event.at),
            Action::Input { input } => session.input(input, event.at),
            Action::Profile { subject } => session.update_profile(subject.clone(), event.at),
            Action::Notes { text } => session.set_notes(text.clone()),
        }
    }
}
