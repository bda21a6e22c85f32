use kognit_subtests::input::Input;
use kognit_subtests::rng::RngHandle;
use kognit_subtests::runners::recall::{PatternRecallTask, RecallConfig, RecallPhase};
use kognit_subtests::runners::span::{SpanConfig, SpanPhase, SpanTask, display_ms};
use kognit_subtests::runners::story::{STORIES, StoryPhase, StoryRecallTask, recalled_keys};
use kognit_subtests::{Completion, MAX_GRID_SIDE, Subtest};

fn rng() -> RngHandle {
    RngHandle::from_seed(3)
}

fn digits(seq: &[u8]) -> String {
    seq.iter().map(|d| char::from(b'0' + d)).collect()
}

fn wrong(seq: &[u8]) -> String {
    seq.iter().map(|d| char::from(b'0' + (d + 1) % 10)).collect()
}

/// Wait out the display period so the task accepts an answer.
fn reveal<T: Subtest>(task: &mut T, rng: &mut RngHandle) -> u64 {
    let hide = task.next_deadline().unwrap();
    assert_eq!(task.poll(hide, rng), None);
    hide
}

#[test]
fn span_stops_after_two_failures_at_one_length() {
    let mut rng = rng();
    let mut task = SpanTask::new(SpanConfig::new(5, 8));
    task.begin(0, &mut rng);
    assert_eq!(task.next_deadline(), Some(display_ms(5)));

    let mut lengths = Vec::new();
    let mut outcome = None;
    for correct in [true, true, false, false] {
        let now = reveal(&mut task, &mut rng);
        assert_eq!(task.phase(), &SpanPhase::Recall);
        lengths.push(task.length());
        let answer = if correct {
            digits(task.sequence())
        } else {
            wrong(task.sequence())
        };
        outcome = task.handle(&Input::text(answer), now + 100, &mut rng);
    }
    assert_eq!(lengths, [5, 6, 7, 7]);
    assert_eq!(outcome, Some(Completion::Scored(6.0)));
    assert_eq!(task.failures(), 2);
}

#[test]
fn span_correct_at_max_finishes_immediately() {
    let mut rng = rng();
    let mut task = SpanTask::new(SpanConfig::new(8, 8));
    task.begin(0, &mut rng);
    let now = reveal(&mut task, &mut rng);
    let answer = Input::text(digits(task.sequence()));
    assert_eq!(
        task.handle(&answer, now, &mut rng),
        Some(Completion::Scored(8.0))
    );
}

#[test]
fn span_ignores_answers_while_showing_and_blank_answers() {
    let mut rng = rng();
    let mut task = SpanTask::new(SpanConfig::new(3, 6));
    assert_eq!(task.handle(&Input::text("123"), 0, &mut rng), None);
    task.begin(0, &mut rng);
    assert_eq!(task.handle(&Input::text("123"), 10, &mut rng), None);
    let now = reveal(&mut task, &mut rng);
    assert_eq!(task.handle(&Input::text(" - "), now, &mut rng), None);
    assert_eq!(task.failures(), 0);
    assert_eq!(task.best(), 0);
}

#[test]
fn span_with_separators_still_matches() {
    let mut rng = rng();
    let mut task = SpanTask::new(SpanConfig::new(3, 6));
    task.begin(0, &mut rng);
    let now = reveal(&mut task, &mut rng);
    let spaced: Vec<String> = task.sequence().iter().map(|d| d.to_string()).collect();
    task.handle(&Input::text(spaced.join(" ")), now, &mut rng);
    assert_eq!(task.best(), 3);
    assert_eq!(task.length(), 4);
}

#[test]
fn visual_memory_counts_recalled_cells() {
    let mut rng = rng();
    let mut task = PatternRecallTask::new(RecallConfig::visual_memory(3, 3));
    task.begin(0, &mut rng);
    assert_eq!(task.pattern().len(), 3);
    assert_eq!(task.next_deadline(), Some(2_600));

    let cells: Vec<usize> = task.pattern().iter().copied().collect();
    assert_eq!(task.handle(&Input::select(cells[0]), 10, &mut rng), None);
    assert!(task.selected().is_empty());

    reveal(&mut task, &mut rng);
    assert_eq!(task.phase(), &RecallPhase::Recall);
    let miss = (0..9).find(|c| !cells.contains(c)).unwrap();
    for cell in [cells[0], cells[1], miss, cells[2], cells[2]] {
        task.handle(&Input::select(cell), 3_000, &mut rng);
    }
    assert_eq!(task.selected().len(), 3);
    assert_eq!(
        task.handle(&Input::Finish, 4_000, &mut rng),
        Some(Completion::Scored(2.0))
    );
}

#[test]
fn complex_figure_discounts_half_the_false_alarms() {
    let mut rng = rng();
    let mut task = PatternRecallTask::new(RecallConfig::complex_figure());
    task.begin(0, &mut rng);
    assert_eq!(task.pattern().len(), 10);
    assert_eq!(reveal(&mut task, &mut rng), 3_500);

    let pattern: Vec<usize> = task.pattern().iter().copied().collect();
    let misses: Vec<usize> = (0..36).filter(|c| !pattern.contains(c)).take(3).collect();
    for cell in pattern.iter().chain(&misses) {
        task.handle(&Input::select(*cell), 4_000, &mut rng);
    }
    // out of the grid
    task.handle(&Input::select(36), 4_000, &mut rng);
    assert_eq!(task.score(), 9);
    assert_eq!(
        task.handle(&Input::Finish, 5_000, &mut rng),
        Some(Completion::Scored(9.0))
    );
}

#[test]
fn story_keys_are_case_folded() {
    let story = &STORIES[0];
    assert_eq!(recalled_keys(story, "ALI bought MILK at the Market"), 3);
    assert_eq!(recalled_keys(story, "nothing"), 0);
}

#[test]
fn story_recall_waits_for_the_story_to_hide() {
    let mut rng = rng();
    let mut task = StoryRecallTask::new();
    task.begin(0, &mut rng);
    let story = task.story().unwrap();
    let all_keys = story.keys.join(" ");

    assert_eq!(task.handle(&Input::text(all_keys.clone()), 100, &mut rng), None);
    assert_eq!(reveal(&mut task, &mut rng), 4_000);
    assert_eq!(task.phase(), &StoryPhase::Asking);
    assert_eq!(task.handle(&Input::text("  "), 4_100, &mut rng), None);
    assert_eq!(
        task.handle(&Input::text(all_keys.to_uppercase()), 4_200, &mut rng),
        Some(Completion::Scored(5.0))
    );
    assert!(task.is_done());
}

#[test]
fn recall_grid_side_is_clamped() {
    let mut rng = rng();
    let mut task = PatternRecallTask::new(RecallConfig::visual_memory(70_000, 5));
    task.begin(0, &mut rng);
    assert_eq!(task.pattern().len(), 5);
    let cells = (MAX_GRID_SIDE * MAX_GRID_SIDE) as usize;
    assert!(task.pattern().iter().all(|cell| *cell < cells));
}
