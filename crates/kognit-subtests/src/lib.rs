//! kognit-subtests
//!
//! Interactive micro-task state machines. Each runner generates its stimuli
//! from a seeded [`rng::RngHandle`], reads time only from the `now` it is
//! handed, and reports exactly one [`Completion`].

pub mod clock;
pub mod input;
pub mod rng;
pub mod runners;
pub mod timer;

use clock::Millis;
use input::Input;
use rng::RngHandle;
use serde::{Deserialize, Serialize};

/// Largest grid side a runner lays out. Larger configured sides are clamped.
pub const MAX_GRID_SIDE: u32 = 32;

/// What a runner reports when it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "raw", rename_all = "snake_case")]
pub enum Completion {
    Scored(f64),
    /// Finished without a usable value (e.g. zero trials configured).
    Unscored,
}

impl Completion {
    /// Non-finite values never become scores.
    pub fn scored(raw: f64) -> Self {
        if raw.is_finite() {
            Completion::Scored(raw)
        } else {
            Completion::Unscored
        }
    }

    pub fn from_count(count: usize) -> Self {
        Completion::Scored(count as f64)
    }

    /// Rounded mean, or unscored when there is nothing to average.
    pub fn from_latencies(latencies: &[f64]) -> Self {
        mean(latencies).map_or(Completion::Unscored, |m| Completion::scored(m.round()))
    }

    pub fn raw(self) -> Option<f64> {
        match self {
            Completion::Scored(v) => Some(v),
            Completion::Unscored => None,
        }
    }
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Common contract of every micro-task.
///
/// Each method returns `Some` at most once over the runner's lifetime: the
/// call that moves it into its finished state. After that every call is a
/// no-op returning `None`.
pub trait Subtest {
    /// The step became active.
    fn begin(&mut self, now: Millis, rng: &mut RngHandle) -> Option<Completion>;

    /// A subject or operator action.
    fn handle(&mut self, input: &Input, now: Millis, rng: &mut RngHandle) -> Option<Completion>;

    /// Time moved forward. Runners without timers ignore it.
    fn poll(&mut self, _now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        None
    }

    /// Earliest pending timer deadline, if any.
    fn next_deadline(&self) -> Option<Millis> {
        None
    }

    fn is_done(&self) -> bool;
}

pub use runners::Runner;
