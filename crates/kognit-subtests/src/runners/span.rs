//! Adaptive digit-span staircase.

use rand::Rng;
use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::timer::TimerHandle;
use crate::{Completion, Subtest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanConfig {
    pub start_len: u32,
    pub max_len: u32,
    /// Consecutive failures at one length that end the task.
    pub failure_limit: u32,
}

impl SpanConfig {
    pub const DEFAULT_FAILURE_LIMIT: u32 = 2;

    pub fn new(start_len: u32, max_len: u32) -> Self {
        Self {
            start_len,
            max_len,
            failure_limit: Self::DEFAULT_FAILURE_LIMIT,
        }
    }
}

/// How long a sequence of `len` digits stays on screen.
pub fn display_ms(len: u32) -> Millis {
    1_000 + 600 * Millis::from(len)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanPhase {
    Idle,
    Showing { hide: TimerHandle },
    Recall,
    Done,
}

/// Show a random digit sequence, then ask for it back.
///
/// A correct reproduction records the length as achieved, clears the failure
/// count and lengthens the next sequence by one; a correct answer at the
/// maximum length ends the task at once. A wrong reproduction repeats the
/// same length until the failure limit is reached. The score is the longest
/// length reproduced correctly (0 if none).
#[derive(Debug)]
pub struct SpanTask {
    config: SpanConfig,
    len: u32,
    best: u32,
    failures: u32,
    sequence: Vec<u8>,
    phase: SpanPhase,
}

impl SpanTask {
    pub fn new(config: SpanConfig) -> Self {
        let max_len = config.max_len.max(1);
        let config = SpanConfig {
            start_len: config.start_len.clamp(1, max_len),
            max_len,
            failure_limit: config.failure_limit.max(1),
        };
        Self {
            config,
            len: config.start_len,
            best: 0,
            failures: 0,
            sequence: Vec::new(),
            phase: SpanPhase::Idle,
        }
    }

    pub fn config(&self) -> SpanConfig {
        self.config
    }

    pub fn phase(&self) -> &SpanPhase {
        &self.phase
    }

    pub fn length(&self) -> u32 {
        self.len
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// The digits currently presented. Only meaningful while showing.
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    fn present(&mut self, now: Millis, rng: &mut RngHandle) {
        self.sequence = (0..self.len).map(|_| rng.gen_range(0..10u8)).collect();
        self.phase = SpanPhase::Showing {
            hide: TimerHandle::once(now, display_ms(self.len)),
        };
    }

    fn finish(&mut self) -> Option<Completion> {
        self.phase = SpanPhase::Done;
        debug!(best = self.best, "span finished");
        Some(Completion::Scored(f64::from(self.best)))
    }
}

impl Subtest for SpanTask {
    fn begin(&mut self, now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if self.phase == SpanPhase::Idle {
            self.present(now, rng);
        }
        None
    }

    fn handle(&mut self, input: &Input, now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        let (SpanPhase::Recall, Input::Text { text }) = (&self.phase, input) else {
            return None;
        };
        let digits: Vec<u8> = text
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as u8)
            .collect();
        if digits.is_empty() {
            return None;
        }

        if digits == self.sequence {
            self.best = self.best.max(self.len);
            self.failures = 0;
            if self.len >= self.config.max_len {
                return self.finish();
            }
            self.len += 1;
        } else {
            self.failures += 1;
            debug!(len = self.len, failures = self.failures, "span miss");
            if self.failures >= self.config.failure_limit {
                return self.finish();
            }
        }
        self.present(now, rng);
        None
    }

    fn poll(&mut self, now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        if let SpanPhase::Showing { hide } = &mut self.phase
            && hide.fire(now) > 0
        {
            self.phase = SpanPhase::Recall;
        }
        None
    }

    fn next_deadline(&self) -> Option<Millis> {
        match &self.phase {
            SpanPhase::Showing { hide } => hide.deadline(),
            _ => None,
        }
    }

    fn is_done(&self) -> bool {
        self.phase == SpanPhase::Done
    }
}
