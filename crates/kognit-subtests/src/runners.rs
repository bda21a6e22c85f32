pub mod alternation;
pub mod bisection;
pub mod cancellation;
pub mod card_sort;
pub mod choice;
pub mod clock_drawing;
pub mod fluency;
pub mod orientation;
pub mod reaction;
pub mod recall;
pub mod span;
pub mod story;
pub mod tapping;
pub mod trail;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::{Completion, Subtest};

/// Every runner kind the sequencer can administer.
///
/// The session only talks to this through [`Subtest`]; the variants exist so a
/// presentation layer can render the task-specific state.
#[derive(Debug)]
pub enum Runner {
    Tapping(tapping::TappingTask),
    Reaction(reaction::ReactionTask),
    Choice(choice::ForcedChoiceTask),
    Span(span::SpanTask),
    CardSort(card_sort::CardSortTask),
    Trail(trail::TrailTask),
    Cancellation(cancellation::CancellationTask),
    Fluency(fluency::FluencyTask),
    Orientation(orientation::OrientationTask),
    PatternRecall(recall::PatternRecallTask),
    Clock(clock_drawing::ClockTask),
    Bisection(bisection::BisectionTask),
    Story(story::StoryRecallTask),
    Alternation(alternation::AlternationTask),
}

impl Runner {
    fn inner(&self) -> &dyn Subtest {
        match self {
            Runner::Tapping(t) => t,
            Runner::Reaction(t) => t,
            Runner::Choice(t) => t,
            Runner::Span(t) => t,
            Runner::CardSort(t) => t,
            Runner::Trail(t) => t,
            Runner::Cancellation(t) => t,
            Runner::Fluency(t) => t,
            Runner::Orientation(t) => t,
            Runner::PatternRecall(t) => t,
            Runner::Clock(t) => t,
            Runner::Bisection(t) => t,
            Runner::Story(t) => t,
            Runner::Alternation(t) => t,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Subtest {
        match self {
            Runner::Tapping(t) => t,
            Runner::Reaction(t) => t,
            Runner::Choice(t) => t,
            Runner::Span(t) => t,
            Runner::CardSort(t) => t,
            Runner::Trail(t) => t,
            Runner::Cancellation(t) => t,
            Runner::Fluency(t) => t,
            Runner::Orientation(t) => t,
            Runner::PatternRecall(t) => t,
            Runner::Clock(t) => t,
            Runner::Bisection(t) => t,
            Runner::Story(t) => t,
            Runner::Alternation(t) => t,
        }
    }
}

impl Subtest for Runner {
    fn begin(&mut self, now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        self.inner_mut().begin(now, rng)
    }

    fn handle(&mut self, input: &Input, now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        self.inner_mut().handle(input, now, rng)
    }

    fn poll(&mut self, now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        self.inner_mut().poll(now, rng)
    }

    fn next_deadline(&self) -> Option<Millis> {
        self.inner().next_deadline()
    }

    fn is_done(&self) -> bool {
        self.inner().is_done()
    }
}
