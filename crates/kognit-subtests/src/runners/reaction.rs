//! Trial loop with randomized stimulus onset.

use rand::Rng;
use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::timer::TimerHandle;
use crate::{Completion, MAX_GRID_SIDE, Subtest};

/// Inclusive range the onset delay is drawn from, uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnsetWindow {
    pub min_ms: Millis,
    pub max_ms: Millis,
}

impl OnsetWindow {
    pub const SIMPLE_REACTION: OnsetWindow = OnsetWindow {
        min_ms: 1_000,
        max_ms: 3_000,
    };

    pub const VISUAL_SEARCH: OnsetWindow = OnsetWindow {
        min_ms: 400,
        max_ms: 1_000,
    };

    fn draw(self, rng: &mut RngHandle) -> Millis {
        let (lo, hi) = if self.min_ms <= self.max_ms {
            (self.min_ms, self.max_ms)
        } else {
            (self.max_ms, self.min_ms)
        };
        rng.gen_range(lo..=hi)
    }
}

/// What counts as the matching response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Any tap on the response area.
    AnyTap,
    /// A click on the lit cell of a square grid with `side * side` cells.
    GridTarget { side: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionPhase {
    Idle,
    Waiting { onset: TimerHandle },
    Live { shown_at: Millis, target: Option<usize> },
    Done,
}

/// Mean response latency over a fixed number of trials.
///
/// A response before the stimulus is shown is ignored and does not count as
/// a trial. The next trial is only scheduled once the current response has
/// been recorded.
#[derive(Debug)]
pub struct ReactionTask {
    trials: u32,
    window: OnsetWindow,
    mode: ResponseMode,
    latencies: Vec<f64>,
    phase: ReactionPhase,
}

impl ReactionTask {
    pub fn new(trials: u32, window: OnsetWindow, mode: ResponseMode) -> Self {
        Self {
            trials,
            window,
            mode,
            latencies: Vec::with_capacity(trials as usize),
            phase: ReactionPhase::Idle,
        }
    }

    pub fn simple(trials: u32) -> Self {
        Self::new(trials, OnsetWindow::SIMPLE_REACTION, ResponseMode::AnyTap)
    }

    pub fn visual_search(trials: u32, side: usize) -> Self {
        Self::new(
            trials,
            OnsetWindow::VISUAL_SEARCH,
            ResponseMode::GridTarget { side },
        )
    }

    pub fn phase(&self) -> &ReactionPhase {
        &self.phase
    }

    pub fn completed_trials(&self) -> usize {
        self.latencies.len()
    }

    pub fn latencies(&self) -> &[f64] {
        &self.latencies
    }

    fn schedule(&mut self, now: Millis, rng: &mut RngHandle) {
        let delay = self.window.draw(rng);
        self.phase = ReactionPhase::Waiting {
            onset: TimerHandle::once(now, delay),
        };
    }

    fn accepts(&self, input: &Input, target: Option<usize>) -> bool {
        match (self.mode, input, target) {
            (ResponseMode::AnyTap, Input::Tap, _) => true,
            (ResponseMode::GridTarget { .. }, Input::Select { index }, Some(t)) => *index == t,
            _ => false,
        }
    }
}

impl Subtest for ReactionTask {
    fn begin(&mut self, now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if self.phase != ReactionPhase::Idle {
            return None;
        }
        if self.trials == 0 {
            self.phase = ReactionPhase::Done;
            return Some(Completion::Unscored);
        }
        self.schedule(now, rng);
        None
    }

    fn handle(&mut self, input: &Input, now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        let ReactionPhase::Live { shown_at, target } = self.phase else {
            return None;
        };
        if !self.accepts(input, target) {
            return None;
        }

        let latency = now.saturating_sub(shown_at) as f64;
        self.latencies.push(latency);
        debug!(trial = self.latencies.len(), latency, "reaction recorded");

        if self.latencies.len() >= self.trials as usize {
            self.phase = ReactionPhase::Done;
            return Some(Completion::from_latencies(&self.latencies));
        }
        self.schedule(now, rng);
        None
    }

    fn poll(&mut self, now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if let ReactionPhase::Waiting { onset } = &mut self.phase
            && let Some(due) = onset.deadline()
            && onset.fire(now) > 0
        {
            let target = match self.mode {
                ResponseMode::AnyTap => None,
                ResponseMode::GridTarget { side } => {
                    let side = side.min(MAX_GRID_SIDE as usize);
                    Some(rng.gen_range(0..(side * side).max(1)))
                }
            };
            self.phase = ReactionPhase::Live {
                shown_at: due,
                target,
            };
        }
        None
    }

    fn next_deadline(&self) -> Option<Millis> {
        match &self.phase {
            ReactionPhase::Waiting { onset } => onset.deadline(),
            _ => None,
        }
    }

    fn is_done(&self) -> bool {
        self.phase == ReactionPhase::Done
    }
}
