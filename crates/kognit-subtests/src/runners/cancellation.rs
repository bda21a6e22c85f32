//! Timed grid cancellation.

use rand::Rng;
use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::timer::Countdown;
use crate::{Completion, MAX_GRID_SIDE, Subtest};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CancellationConfig {
    pub width: u32,
    pub height: u32,
    /// Probability that a cell holds a target.
    pub target_p: f64,
    pub seconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationPhase {
    Ready,
    Running,
    Done,
}

/// Mark every target cell in a grid before time runs out.
///
/// Marks are one-way. The score is hits minus false alarms and may be
/// negative. It is reported when the countdown expires or when the subject
/// finishes early, whichever comes first.
#[derive(Debug)]
pub struct CancellationTask {
    config: CancellationConfig,
    targets: Vec<bool>,
    marked: Vec<bool>,
    preset: bool,
    countdown: Countdown,
    phase: CancellationPhase,
}

impl CancellationTask {
    pub fn new(config: CancellationConfig) -> Self {
        Self {
            config,
            targets: Vec::new(),
            marked: Vec::new(),
            preset: false,
            countdown: Countdown::default(),
            phase: CancellationPhase::Ready,
        }
    }

    /// Fixed target layout, one row of `targets.len()` cells.
    pub fn with_grid(targets: Vec<bool>, seconds: u32) -> Self {
        let width = targets.len() as u32;
        let mut task = Self::new(CancellationConfig {
            width,
            height: 1,
            target_p: 0.0,
            seconds,
        });
        task.marked = vec![false; targets.len()];
        task.targets = targets;
        task.preset = true;
        task
    }

    pub fn config(&self) -> CancellationConfig {
        self.config
    }

    pub fn phase(&self) -> CancellationPhase {
        self.phase
    }

    pub fn targets(&self) -> &[bool] {
        &self.targets
    }

    pub fn marked(&self) -> &[bool] {
        &self.marked
    }

    pub fn remaining(&self) -> u32 {
        match self.phase {
            CancellationPhase::Ready => self.config.seconds,
            _ => self.countdown.remaining(),
        }
    }

    pub fn hits(&self) -> u32 {
        self.count_marked(true)
    }

    pub fn false_alarms(&self) -> u32 {
        self.count_marked(false)
    }

    fn count_marked(&self, target: bool) -> u32 {
        self.targets
            .iter()
            .zip(&self.marked)
            .filter(|&(t, m)| *m && *t == target)
            .count() as u32
    }

    fn finish(&mut self) -> Option<Completion> {
        self.countdown.cancel();
        self.phase = CancellationPhase::Done;
        let (hits, false_alarms) = (self.hits(), self.false_alarms());
        debug!(hits, false_alarms, "cancellation finished");
        Some(Completion::Scored(f64::from(hits) - f64::from(false_alarms)))
    }
}

impl Subtest for CancellationTask {
    fn begin(&mut self, _now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if self.preset || !self.targets.is_empty() {
            return None;
        }
        let width = self.config.width.min(MAX_GRID_SIDE) as usize;
        let height = self.config.height.min(MAX_GRID_SIDE) as usize;
        let cells = width * height;
        let p = self.config.target_p.clamp(0.0, 1.0);
        self.targets = (0..cells).map(|_| rng.gen_bool(p)).collect();
        self.marked = vec![false; cells];
        None
    }

    fn handle(&mut self, input: &Input, now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        match (self.phase, input) {
            (CancellationPhase::Ready, Input::Start) => {
                self.countdown.start(now, self.config.seconds);
                self.phase = CancellationPhase::Running;
                if self.countdown.poll(now) {
                    return self.finish();
                }
                None
            }
            (CancellationPhase::Running, Input::Select { index }) => {
                if let Some(cell) = self.marked.get_mut(*index) {
                    *cell = true;
                }
                None
            }
            (CancellationPhase::Running, Input::Finish) => self.finish(),
            _ => None,
        }
    }

    fn poll(&mut self, now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        if self.phase == CancellationPhase::Running && self.countdown.poll(now) {
            return self.finish();
        }
        None
    }

    fn next_deadline(&self) -> Option<Millis> {
        self.countdown.next_tick()
    }

    fn is_done(&self) -> bool {
        self.phase == CancellationPhase::Done
    }
}
