//! Alternating sequences (Luria).

use rand::Rng;
use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::{Completion, Subtest};

/// Response keys, selected by index.
pub const SYMBOLS: [char; 3] = ['A', 'B', 'C'];

pub const TWO_STEP: &str = "ABABABAB";
pub const THREE_STEP: &str = "ABCABCABC";

/// Reproduce a two- or three-symbol alternating pattern. Only a press of the
/// expected symbol advances; the score is the number of correct presses and
/// can be saved once the pattern is exhausted.
#[derive(Debug, Default)]
pub struct AlternationTask {
    pattern: Vec<char>,
    position: usize,
    correct: u32,
    errors: u32,
    done: bool,
}

impl AlternationTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Task with a fixed pattern instead of a random pick at the start.
    pub fn with_pattern(pattern: &str) -> Self {
        Self {
            pattern: pattern.chars().collect(),
            ..Self::default()
        }
    }

    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn expected(&self) -> Option<char> {
        self.pattern.get(self.position).copied()
    }

    pub fn is_exhausted(&self) -> bool {
        !self.pattern.is_empty() && self.position >= self.pattern.len()
    }
}

impl Subtest for AlternationTask {
    fn begin(&mut self, _now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if self.pattern.is_empty() {
            let pattern = if rng.gen_bool(0.5) { TWO_STEP } else { THREE_STEP };
            self.pattern = pattern.chars().collect();
        }
        None
    }

    fn handle(&mut self, input: &Input, _now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        if self.done {
            return None;
        }
        match input {
            Input::Select { index } => {
                let (Some(expected), Some(pressed)) = (self.expected(), SYMBOLS.get(*index)) else {
                    return None;
                };
                if *pressed == expected {
                    self.correct += 1;
                    self.position += 1;
                } else {
                    self.errors += 1;
                }
                None
            }
            Input::Finish if self.is_exhausted() => {
                self.done = true;
                debug!(correct = self.correct, errors = self.errors, "alternation saved");
                Some(Completion::Scored(f64::from(self.correct)))
            }
            _ => None,
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
