//! Short story free recall.

use rand::seq::SliceRandom;
use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::timer::TimerHandle;
use crate::{Completion, Subtest};

pub const DISPLAY_MS: Millis = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub text: &'static str,
    pub keys: &'static [&'static str],
}

pub const STORIES: &[Story] = &[
    Story {
        text: "Ali went to the market in the morning, bought bread and milk, then walked to the park.",
        keys: &["Ali", "market", "bread", "milk", "park"],
    },
    Story {
        text: "Ayse read a book at the library in the afternoon and went to the cinema in the evening.",
        keys: &["Ayse", "library", "book", "evening", "cinema"],
    },
];

/// Key words of `story` contained in `recalled`, case-folded.
pub fn recalled_keys(story: &Story, recalled: &str) -> usize {
    let recalled = recalled.to_lowercase();
    story
        .keys
        .iter()
        .filter(|k| recalled.contains(&k.to_lowercase()))
        .count()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryPhase {
    Idle,
    Showing { hide: TimerHandle },
    Asking,
    Done,
}

#[derive(Debug)]
pub struct StoryRecallTask {
    story: Option<&'static Story>,
    phase: StoryPhase,
}

impl Default for StoryRecallTask {
    fn default() -> Self {
        Self {
            story: None,
            phase: StoryPhase::Idle,
        }
    }
}

impl StoryRecallTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn story(&self) -> Option<&'static Story> {
        self.story
    }

    pub fn phase(&self) -> &StoryPhase {
        &self.phase
    }
}

impl Subtest for StoryRecallTask {
    fn begin(&mut self, now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if self.phase != StoryPhase::Idle {
            return None;
        }
        self.story = STORIES.choose(rng);
        self.phase = StoryPhase::Showing {
            hide: TimerHandle::once(now, DISPLAY_MS),
        };
        None
    }

    fn handle(&mut self, input: &Input, _now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        let (StoryPhase::Asking, Input::Text { text }, Some(story)) = (&self.phase, input, self.story)
        else {
            return None;
        };
        if text.trim().is_empty() {
            return None;
        }
        let recalled = recalled_keys(story, text);
        self.phase = StoryPhase::Done;
        debug!(recalled, "story recall saved");
        Some(Completion::from_count(recalled))
    }

    fn poll(&mut self, now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        if let StoryPhase::Showing { hide } = &mut self.phase
            && hide.fire(now) > 0
        {
            self.phase = StoryPhase::Asking;
        }
        None
    }

    fn next_deadline(&self) -> Option<Millis> {
        match &self.phase {
            StoryPhase::Showing { hide } => hide.deadline(),
            _ => None,
        }
    }

    fn is_done(&self) -> bool {
        self.phase == StoryPhase::Done
    }
}
