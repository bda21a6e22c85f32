//! Step planning and runner construction.

use kognit_core::models::step::Step;
use kognit_core::models::subject::SubjectProfile;
use kognit_subtests::Runner;
use kognit_subtests::runners::alternation::AlternationTask;
use kognit_subtests::runners::bisection::BisectionTask;
use kognit_subtests::runners::cancellation::{CancellationConfig, CancellationTask};
use kognit_subtests::runners::card_sort::CardSortTask;
use kognit_subtests::runners::choice::{ChoiceKind, ForcedChoiceTask};
use kognit_subtests::runners::clock_drawing::ClockTask;
use kognit_subtests::runners::fluency::FluencyTask;
use kognit_subtests::runners::orientation::OrientationTask;
use kognit_subtests::runners::reaction::ReactionTask;
use kognit_subtests::runners::recall::{PatternRecallTask, RecallConfig};
use kognit_subtests::runners::span::{SpanConfig, SpanTask};
use kognit_subtests::runners::story::StoryRecallTask;
use kognit_subtests::runners::tapping::TappingTask;
use kognit_subtests::runners::trail::{TrailPattern, TrailTask};

use crate::config::AdministrationConfig;

const LITERACY_STEPS: [Step; 4] = [
    Step::Stroop,
    Step::VerbalFluency,
    Step::Similarity,
    Step::StoryRecall,
];

const COUNTING_STEPS: [Step; 2] = [Step::TrailA, Step::TrailB];

/// Ordered step list for a profile. Always starts with intake and ends with
/// results; the literacy and counting blocks depend on the capability gates.
pub fn plan_steps(profile: &SubjectProfile) -> Vec<Step> {
    let mut steps = vec![Step::Intake, Step::Orientation, Step::Tapping, Step::Reaction];
    if profile.literacy_gate_open() {
        steps.extend(LITERACY_STEPS);
    }
    steps.extend([
        Step::WorkingMemory,
        Step::AuditorySpan,
        Step::ToneDiscrimination,
        Step::VisualMemory,
    ]);
    if profile.counting_gate_open() {
        steps.extend(COUNTING_STEPS);
    }
    steps.extend([
        Step::ClockDrawing,
        Step::LineBisection,
        Step::Cancellation,
        Step::LineOrientation,
        Step::ComplexFigure,
        Step::FaceDiscrimination,
        Step::CardSort,
        Step::Alternation,
        Step::VisualSearch,
        Step::Results,
    ]);
    steps
}

pub fn step_forward(index: usize, len: usize) -> usize {
    (index + 1).min(len.saturating_sub(1))
}

pub fn step_back(index: usize) -> usize {
    index.saturating_sub(1)
}

/// A fresh runner for `step`, or `None` for the intake and results pages.
pub fn runner_for(step: Step, config: &AdministrationConfig) -> Option<Runner> {
    let runner = match step {
        Step::Intake | Step::Results => return None,
        Step::Orientation => Runner::Orientation(OrientationTask::new()),
        Step::Tapping => Runner::Tapping(TappingTask::new(config.tapping_seconds)),
        Step::Reaction => Runner::Reaction(ReactionTask::simple(config.reaction_trials)),
        Step::Stroop => Runner::Choice(ForcedChoiceTask::new(
            ChoiceKind::STROOP,
            config.stroop_trials,
        )),
        Step::VerbalFluency => Runner::Fluency(FluencyTask::new(
            config.fluency_categories.iter().cloned(),
            config.fluency_seconds,
        )),
        Step::Similarity => Runner::Choice(ForcedChoiceTask::similarity()),
        Step::StoryRecall => Runner::Story(StoryRecallTask::new()),
        Step::WorkingMemory | Step::AuditorySpan => Runner::Span(SpanTask::new(SpanConfig::new(
            config.span_start,
            config.span_max,
        ))),
        Step::ToneDiscrimination => Runner::Choice(ForcedChoiceTask::new(
            ChoiceKind::tone(config.tone_diff_hz),
            config.tone_trials,
        )),
        Step::VisualMemory => Runner::PatternRecall(PatternRecallTask::new(
            RecallConfig::visual_memory(config.visual_memory_grid, config.visual_memory_cells),
        )),
        Step::TrailA => Runner::Trail(TrailTask::new(
            config.trail_a_nodes as usize,
            TrailPattern::Numeric,
        )),
        Step::TrailB => Runner::Trail(TrailTask::new(
            config.trail_b_nodes as usize,
            TrailPattern::Alternating,
        )),
        Step::ClockDrawing => Runner::Clock(ClockTask::new()),
        Step::LineBisection => Runner::Bisection(BisectionTask::new()),
        Step::Cancellation => {
            let params = config.cancellation;
            Runner::Cancellation(CancellationTask::new(CancellationConfig {
                width: params.width,
                height: params.height,
                target_p: params.target_p,
                seconds: params.seconds,
            }))
        }
        Step::LineOrientation => Runner::Choice(ForcedChoiceTask::new(
            ChoiceKind::LineOrientation {
                choices: config.line_choices,
                tolerance_deg: config.line_tolerance_deg,
            },
            config.line_trials,
        )),
        Step::ComplexFigure => {
            Runner::PatternRecall(PatternRecallTask::new(RecallConfig::complex_figure()))
        }
        Step::FaceDiscrimination => {
            Runner::Choice(ForcedChoiceTask::new(ChoiceKind::Face, config.face_trials))
        }
        Step::CardSort => Runner::CardSort(CardSortTask::new(config.card_sort_switch_after)),
        Step::Alternation => Runner::Alternation(AlternationTask::new()),
        Step::VisualSearch => Runner::Reaction(ReactionTask::visual_search(
            config.search_trials,
            config.search_grid as usize,
        )),
    };
    Some(runner)
}
