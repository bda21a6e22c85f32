//! Rule-switching card sort.

use rand::Rng;
use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::{Completion, Subtest};

pub const OPTION_COUNT: usize = 4;

/// Correct sorts before the hidden rule moves on.
pub const DEFAULT_SWITCH_AFTER: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortRule {
    Color,
    Shape,
    Number,
}

impl SortRule {
    pub fn next(self) -> Self {
        match self {
            SortRule::Color => SortRule::Shape,
            SortRule::Shape => SortRule::Number,
            SortRule::Number => SortRule::Color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardShape {
    Square,
    Triangle,
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub color: CardColor,
    pub shape: CardShape,
    /// 1 to 3 symbols.
    pub count: u8,
}

impl Card {
    fn random(rng: &mut RngHandle) -> Self {
        const COLORS: [CardColor; 3] = [CardColor::Red, CardColor::Green, CardColor::Blue];
        const SHAPES: [CardShape; 3] = [CardShape::Square, CardShape::Triangle, CardShape::Circle];
        Self {
            color: COLORS[rng.gen_range(0..3)],
            shape: SHAPES[rng.gen_range(0..3)],
            count: rng.gen_range(1..=3),
        }
    }

    pub fn matches(&self, other: &Card, rule: SortRule) -> bool {
        match rule {
            SortRule::Color => self.color == other.color,
            SortRule::Shape => self.shape == other.shape,
            SortRule::Number => self.count == other.count,
        }
    }
}

/// Sort a target card onto one of four options by a hidden rule.
///
/// The rule cycles color → shape → number after every `switch_after`
/// correct sorts. There is no automatic stop: the operator ends the task and
/// the score is the total number of correct sorts at that moment.
#[derive(Debug)]
pub struct CardSortTask {
    switch_after: u32,
    rule: SortRule,
    correct: u32,
    errors: u32,
    target: Option<Card>,
    options: Vec<Card>,
    done: bool,
}

impl CardSortTask {
    pub fn new(switch_after: u32) -> Self {
        Self {
            switch_after: switch_after.max(1),
            rule: SortRule::Color,
            correct: 0,
            errors: 0,
            target: None,
            options: Vec::with_capacity(OPTION_COUNT),
            done: false,
        }
    }

    pub fn rule(&self) -> SortRule {
        self.rule
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn target(&self) -> Option<Card> {
        self.target
    }

    pub fn options(&self) -> &[Card] {
        &self.options
    }

    /// New target and options. At least one option always matches the target
    /// on the current rule so every trial is answerable.
    fn deal(&mut self, rng: &mut RngHandle) {
        let target = Card::random(rng);
        self.options = (0..OPTION_COUNT).map(|_| Card::random(rng)).collect();
        if !self.options.iter().any(|o| o.matches(&target, self.rule)) {
            let slot = &mut self.options[rng.gen_range(0..OPTION_COUNT)];
            match self.rule {
                SortRule::Color => slot.color = target.color,
                SortRule::Shape => slot.shape = target.shape,
                SortRule::Number => slot.count = target.count,
            }
        }
        self.target = Some(target);
    }
}

impl Subtest for CardSortTask {
    fn begin(&mut self, _now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if self.target.is_none() && !self.done {
            self.deal(rng);
        }
        None
    }

    fn handle(&mut self, input: &Input, _now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if self.done {
            return None;
        }
        match input {
            Input::Select { index } => {
                let (Some(target), Some(choice)) = (self.target, self.options.get(*index)) else {
                    return None;
                };
                if choice.matches(&target, self.rule) {
                    self.correct += 1;
                    if self.correct % self.switch_after == 0 {
                        self.rule = self.rule.next();
                        debug!(rule = ?self.rule, "sort rule switched");
                    }
                } else {
                    self.errors += 1;
                }
                self.deal(rng);
                None
            }
            Input::Finish => {
                self.done = true;
                self.target = None;
                debug!(correct = self.correct, errors = self.errors, "card sort ended");
                Some(Completion::Scored(f64::from(self.correct)))
            }
            _ => None,
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
