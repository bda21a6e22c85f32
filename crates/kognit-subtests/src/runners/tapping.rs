//! Fixed-duration counting.

use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::timer::Countdown;
use crate::{Completion, Subtest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TappingPhase {
    Ready,
    Running,
    Done,
}

/// Counts taps during a countdown started by the operator. Once started the
/// countdown always runs to zero.
#[derive(Debug)]
pub struct TappingTask {
    seconds: u32,
    count: u32,
    countdown: Countdown,
    phase: TappingPhase,
}

impl TappingTask {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds,
            count: 0,
            countdown: Countdown::default(),
            phase: TappingPhase::Ready,
        }
    }

    pub fn phase(&self) -> TappingPhase {
        self.phase
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Seconds left, or the configured duration before the start.
    pub fn remaining(&self) -> u32 {
        match self.phase {
            TappingPhase::Ready => self.seconds,
            _ => self.countdown.remaining(),
        }
    }

    fn expire(&mut self, now: Millis) -> Option<Completion> {
        if self.phase != TappingPhase::Running || !self.countdown.poll(now) {
            return None;
        }
        self.phase = TappingPhase::Done;
        debug!(count = self.count, "tapping finished");
        Some(Completion::Scored(f64::from(self.count)))
    }
}

impl Subtest for TappingTask {
    fn begin(&mut self, _now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        None
    }

    fn handle(&mut self, input: &Input, now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        match (self.phase, input) {
            (TappingPhase::Ready, Input::Start) => {
                self.count = 0;
                self.countdown.start(now, self.seconds);
                self.phase = TappingPhase::Running;
                self.expire(now)
            }
            (TappingPhase::Running, Input::Tap) => {
                self.count += 1;
                None
            }
            _ => None,
        }
    }

    fn poll(&mut self, now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        self.expire(now)
    }

    fn next_deadline(&self) -> Option<Millis> {
        self.countdown.next_tick()
    }

    fn is_done(&self) -> bool {
        self.phase == TappingPhase::Done
    }
}
