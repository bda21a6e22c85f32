//! Show-then-reproduce grid patterns.

use std::collections::BTreeSet;

use rand::seq::index::sample;
use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::timer::TimerHandle;
use crate::{Completion, MAX_GRID_SIDE, Subtest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecallScoring {
    /// Selected cells that were in the pattern.
    Hits,
    /// `max(0, hits - floor(false_alarms / 2))`.
    HitsLessHalfFalse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecallConfig {
    pub side: u32,
    pub cells: u32,
    pub display_ms: Millis,
    pub scoring: RecallScoring,
}

impl RecallConfig {
    pub fn visual_memory(side: u32, cells: u32) -> Self {
        Self {
            side,
            cells,
            display_ms: 2_000 + 200 * Millis::from(cells),
            scoring: RecallScoring::Hits,
        }
    }

    pub fn complex_figure() -> Self {
        Self {
            side: 6,
            cells: 10,
            display_ms: 3_500,
            scoring: RecallScoring::HitsLessHalfFalse,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecallPhase {
    Idle,
    Showing { hide: TimerHandle },
    Recall,
    Done,
}

/// A random subset of grid cells is shown, hidden after the display period,
/// and then reproduced by toggling cells. `Finish` scores the selection.
#[derive(Debug)]
pub struct PatternRecallTask {
    config: RecallConfig,
    pattern: BTreeSet<usize>,
    selected: BTreeSet<usize>,
    phase: RecallPhase,
}

impl PatternRecallTask {
    pub fn new(config: RecallConfig) -> Self {
        Self {
            config,
            pattern: BTreeSet::new(),
            selected: BTreeSet::new(),
            phase: RecallPhase::Idle,
        }
    }

    pub fn config(&self) -> RecallConfig {
        self.config
    }

    pub fn phase(&self) -> &RecallPhase {
        &self.phase
    }

    pub fn pattern(&self) -> &BTreeSet<usize> {
        &self.pattern
    }

    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    fn total(&self) -> usize {
        let side = self.config.side.min(MAX_GRID_SIDE) as usize;
        side * side
    }

    pub fn score(&self) -> u32 {
        let hits = self.selected.intersection(&self.pattern).count() as u32;
        match self.config.scoring {
            RecallScoring::Hits => hits,
            RecallScoring::HitsLessHalfFalse => {
                let false_alarms = self.selected.len() as u32 - hits;
                hits.saturating_sub(false_alarms / 2)
            }
        }
    }
}

impl Subtest for PatternRecallTask {
    fn begin(&mut self, now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if self.phase != RecallPhase::Idle {
            return None;
        }
        let total = self.total();
        let amount = (self.config.cells as usize).min(total);
        self.pattern = sample(rng, total, amount).into_iter().collect();
        self.selected.clear();
        self.phase = RecallPhase::Showing {
            hide: TimerHandle::once(now, self.config.display_ms),
        };
        None
    }

    fn handle(&mut self, input: &Input, _now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        if self.phase != RecallPhase::Recall {
            return None;
        }
        match input {
            Input::Select { index } if *index < self.total() => {
                if !self.selected.remove(index) {
                    self.selected.insert(*index);
                }
                None
            }
            Input::Finish => {
                self.phase = RecallPhase::Done;
                let score = self.score();
                debug!(score, selected = self.selected.len(), "pattern recall finished");
                Some(Completion::Scored(f64::from(score)))
            }
            _ => None,
        }
    }

    fn poll(&mut self, now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        if let RecallPhase::Showing { hide } = &mut self.phase
            && hide.fire(now) > 0
        {
            self.phase = RecallPhase::Recall;
        }
        None
    }

    fn next_deadline(&self) -> Option<Millis> {
        match &self.phase {
            RecallPhase::Showing { hide } => hide.deadline(),
            _ => None,
        }
    }

    fn is_done(&self) -> bool {
        self.phase == RecallPhase::Done
    }
}
