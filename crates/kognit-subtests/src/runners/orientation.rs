//! Operator-scored orientation checklist.

use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::{Completion, Subtest};

pub const ITEMS: [&str; 3] = ["date", "day", "place"];
pub const POINTS_PER_ITEM: u32 = 2;

/// Three yes/no items marked by the operator, saved with `Finish`.
/// Unmarked items count as incorrect.
#[derive(Debug, Default)]
pub struct OrientationTask {
    answers: [Option<bool>; 3],
    done: bool,
}

impl OrientationTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> [Option<bool>; 3] {
        self.answers
    }

    /// Running total shown to the operator before saving.
    pub fn points(&self) -> u32 {
        self.answers.iter().filter(|a| **a == Some(true)).count() as u32 * POINTS_PER_ITEM
    }
}

impl Subtest for OrientationTask {
    fn begin(&mut self, _now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        None
    }

    fn handle(&mut self, input: &Input, _now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        if self.done {
            return None;
        }
        match input {
            Input::Mark { item, correct } => {
                if let Some(slot) = self.answers.get_mut(*item) {
                    *slot = Some(*correct);
                }
                None
            }
            Input::Finish => {
                self.done = true;
                debug!(points = self.points(), "orientation saved");
                Some(Completion::Scored(f64::from(self.points())))
            }
            _ => None,
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
