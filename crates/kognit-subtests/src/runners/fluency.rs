//! Timed verbal fluency.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::timer::Countdown;
use crate::{Completion, Subtest};

pub const DEFAULT_CATEGORIES: &[&str] = &["animal", "vegetable", "country", "profession"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluencyPhase {
    Ready,
    Running,
    Done,
}

/// Name as many distinct words of a category as possible before time runs
/// out. Entries are trimmed and case-folded; duplicates and blanks do not
/// count.
#[derive(Debug)]
pub struct FluencyTask {
    categories: Vec<String>,
    seconds: u32,
    category: Option<String>,
    words: BTreeSet<String>,
    countdown: Countdown,
    phase: FluencyPhase,
}

impl FluencyTask {
    pub fn new<I, S>(categories: I, seconds: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            seconds,
            category: None,
            words: BTreeSet::new(),
            countdown: Countdown::default(),
            phase: FluencyPhase::Ready,
        }
    }

    pub fn phase(&self) -> FluencyPhase {
        self.phase
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    pub fn remaining(&self) -> u32 {
        match self.phase {
            FluencyPhase::Ready => self.seconds,
            _ => self.countdown.remaining(),
        }
    }

    fn expire(&mut self, now: Millis) -> Option<Completion> {
        if self.phase != FluencyPhase::Running || !self.countdown.poll(now) {
            return None;
        }
        self.phase = FluencyPhase::Done;
        debug!(words = self.words.len(), "fluency finished");
        Some(Completion::from_count(self.words.len()))
    }
}

impl Subtest for FluencyTask {
    fn begin(&mut self, _now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if self.category.is_none() {
            self.category = self.categories.choose(rng).cloned();
        }
        None
    }

    fn handle(&mut self, input: &Input, now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        match (self.phase, input) {
            (FluencyPhase::Ready, Input::Start) => {
                self.words.clear();
                self.countdown.start(now, self.seconds);
                self.phase = FluencyPhase::Running;
                self.expire(now)
            }
            (FluencyPhase::Running, Input::Text { text }) => {
                let word = text.trim().to_lowercase();
                if !word.is_empty() {
                    self.words.insert(word);
                }
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
        self.phase == FluencyPhase::Done
    }
}
