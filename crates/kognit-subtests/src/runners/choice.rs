//! Forced choice with a running correct count.
//!
//! One runner covers the Stroop colour naming, tone and face same/different
//! discrimination, line orientation matching, and the fixed similarity quiz.
//! They differ only in how a trial is generated and how an answer is checked.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::clock::Millis;
use crate::input::{Input, Judgement};
use crate::rng::RngHandle;
use crate::{Completion, Subtest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InkColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl InkColor {
    pub const ALL: [InkColor; 4] = [InkColor::Red, InkColor::Green, InkColor::Blue, InkColor::Yellow];
}

/// Synthetic face built from three binary features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub smiling: bool,
    pub brow: bool,
    pub large_eyes: bool,
}

impl Face {
    fn random(rng: &mut RngHandle) -> Self {
        Self {
            smiling: rng.gen_bool(0.5),
            brow: rng.gen_bool(0.5),
            large_eyes: rng.gen_bool(0.5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizItem {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub answer: usize,
}

pub const SIMILARITY_ITEMS: &[QuizItem] = &[
    QuizItem {
        prompt: "What do a cat and a dog have in common?",
        options: &["They are animals", "They are vehicles", "They are vegetables"],
        answer: 0,
    },
    QuizItem {
        prompt: "What is a clock used for?",
        options: &["Decoration", "Measuring time", "Cooking"],
        answer: 1,
    },
    QuizItem {
        prompt: "How are a plane and a ferry alike?",
        options: &["Both are vehicles", "Both are vegetables", "Both are minerals"],
        answer: 0,
    },
    QuizItem {
        prompt: "Is it right to take someone's belongings without asking?",
        options: &["Yes", "No", "Sometimes"],
        answer: 1,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChoiceKind {
    /// Name the ink colour of a colour word; `incongruent_p` of trials use a
    /// different ink from the word.
    Stroop { incongruent_p: f64 },
    /// Two tones, equal with probability `same_p`, otherwise `diff_hz` apart.
    Tone { diff_hz: u32, same_p: f64 },
    Face,
    /// Pick the option line matching the target within `tolerance_deg`.
    LineOrientation { choices: u32, tolerance_deg: u32 },
    /// Fixed items in order; the trial count is the item count.
    Quiz { items: &'static [QuizItem] },
}

impl ChoiceKind {
    pub const STROOP: ChoiceKind = ChoiceKind::Stroop { incongruent_p: 0.7 };

    pub fn tone(diff_hz: u32) -> Self {
        ChoiceKind::Tone {
            diff_hz,
            same_p: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceStimulus {
    ColorWord { word: InkColor, ink: InkColor },
    TonePair { first_hz: u32, second_hz: u32 },
    FacePair { left: Face, right: Face },
    Lines { target_deg: u32, options: Vec<u32> },
    Question { item: usize },
}

/// Smallest angle between two line orientations, in degrees.
pub fn line_delta(a: u32, b: u32) -> u32 {
    let diff = (a % 180).abs_diff(b % 180);
    diff.min(180 - diff)
}

#[derive(Debug)]
pub struct ForcedChoiceTask {
    kind: ChoiceKind,
    trials: u32,
    answered: u32,
    correct: u32,
    current: Option<ChoiceStimulus>,
    done: bool,
}

impl ForcedChoiceTask {
    pub fn new(kind: ChoiceKind, trials: u32) -> Self {
        let trials = match kind {
            ChoiceKind::Quiz { items } => items.len() as u32,
            _ => trials,
        };
        Self {
            kind,
            trials,
            answered: 0,
            correct: 0,
            current: None,
            done: false,
        }
    }

    pub fn similarity() -> Self {
        Self::new(
            ChoiceKind::Quiz {
                items: SIMILARITY_ITEMS,
            },
            0,
        )
    }

    pub fn kind(&self) -> ChoiceKind {
        self.kind
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn stimulus(&self) -> Option<&ChoiceStimulus> {
        self.current.as_ref()
    }

    fn generate(&self, rng: &mut RngHandle) -> ChoiceStimulus {
        match self.kind {
            ChoiceKind::Stroop { incongruent_p } => {
                let word = InkColor::ALL[rng.gen_range(0..InkColor::ALL.len())];
                let ink = if rng.gen_bool(incongruent_p.clamp(0.0, 1.0)) {
                    let others: Vec<InkColor> =
                        InkColor::ALL.into_iter().filter(|c| *c != word).collect();
                    others[rng.gen_range(0..others.len())]
                } else {
                    word
                };
                ChoiceStimulus::ColorWord { word, ink }
            }
            ChoiceKind::Tone { diff_hz, same_p } => {
                let first_hz = 440 + rng.gen_range(0..120);
                let second_hz = if rng.gen_bool(same_p.clamp(0.0, 1.0)) {
                    first_hz
                } else if rng.gen_bool(0.5) {
                    first_hz - diff_hz.min(first_hz)
                } else {
                    first_hz + diff_hz
                };
                ChoiceStimulus::TonePair {
                    first_hz,
                    second_hz,
                }
            }
            ChoiceKind::Face => ChoiceStimulus::FacePair {
                left: Face::random(rng),
                right: Face::random(rng),
            },
            ChoiceKind::LineOrientation { choices, .. } => {
                let choices = choices.max(1);
                let step = (180 / choices).max(1);
                let target_deg = rng.gen_range(0..180);
                let base = rng.gen_range(0..step);
                let mut options: Vec<u32> = (0..choices).map(|k| (base + k * step) % 180).collect();
                options.shuffle(rng);
                ChoiceStimulus::Lines {
                    target_deg,
                    options,
                }
            }
            ChoiceKind::Quiz { .. } => ChoiceStimulus::Question {
                item: self.answered as usize,
            },
        }
    }

    /// `None` when the input is not an answer to the current trial.
    fn score(&self, input: &Input) -> Option<bool> {
        let stimulus = self.current.as_ref()?;
        match (stimulus, input) {
            (ChoiceStimulus::ColorWord { ink, .. }, Input::Select { index }) => {
                InkColor::ALL.get(*index).map(|c| c == ink)
            }
            (ChoiceStimulus::TonePair { first_hz, second_hz }, Input::Judge { judgement }) => {
                Some(judged(*judgement, first_hz == second_hz))
            }
            (ChoiceStimulus::FacePair { left, right }, Input::Judge { judgement }) => {
                Some(judged(*judgement, left == right))
            }
            (ChoiceStimulus::Lines { target_deg, options }, Input::Select { index }) => {
                let ChoiceKind::LineOrientation { tolerance_deg, .. } = self.kind else {
                    return None;
                };
                options
                    .get(*index)
                    .map(|deg| line_delta(*deg, *target_deg) <= tolerance_deg)
            }
            (ChoiceStimulus::Question { item }, Input::Select { index }) => {
                let ChoiceKind::Quiz { items } = self.kind else {
                    return None;
                };
                let item = items.get(*item)?;
                (*index < item.options.len()).then_some(*index == item.answer)
            }
            _ => None,
        }
    }
}

fn judged(judgement: Judgement, same: bool) -> bool {
    match judgement {
        Judgement::Same => same,
        Judgement::Different => !same,
    }
}

impl Subtest for ForcedChoiceTask {
    fn begin(&mut self, _now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if self.done || self.current.is_some() {
            return None;
        }
        if self.trials == 0 {
            self.done = true;
            return Some(Completion::Unscored);
        }
        self.current = Some(self.generate(rng));
        None
    }

    fn handle(&mut self, input: &Input, _now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if self.done {
            return None;
        }
        let ok = self.score(input)?;
        if ok {
            self.correct += 1;
        }
        self.answered += 1;

        if self.answered >= self.trials {
            self.done = true;
            self.current = None;
            debug!(correct = self.correct, trials = self.trials, "choice task finished");
            return Some(Completion::Scored(f64::from(self.correct)));
        }
        self.current = Some(self.generate(rng));
        None
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
