use kognit_subtests::input::{Input, Judgement};
use kognit_subtests::rng::RngHandle;
use kognit_subtests::runners::bisection::BisectionTask;
use kognit_subtests::runners::clock_drawing::{ClockTask, clock_points};
use kognit_subtests::runners::orientation::OrientationTask;
use kognit_subtests::{Completion, Subtest};

fn rng() -> RngHandle {
    RngHandle::from_seed(1)
}

#[test]
fn orientation_awards_two_points_per_item() {
    let mut rng = rng();
    let mut task = OrientationTask::new();
    task.begin(0, &mut rng);
    task.handle(&Input::Mark { item: 0, correct: true }, 1, &mut rng);
    task.handle(&Input::Mark { item: 1, correct: false }, 2, &mut rng);
    task.handle(&Input::Mark { item: 2, correct: true }, 3, &mut rng);
    task.handle(&Input::Mark { item: 7, correct: true }, 4, &mut rng);
    assert_eq!(task.points(), 4);
    assert_eq!(
        task.handle(&Input::Finish, 5, &mut rng),
        Some(Completion::Scored(4.0))
    );
    assert_eq!(task.handle(&Input::Finish, 6, &mut rng), None);
}

#[test]
fn clock_points_follow_rubric() {
    assert_eq!(clock_points(11.0, 10.0), 10);
    assert_eq!(clock_points(12.0, 0.0), 6);
    assert_eq!(clock_points(3.0, 25.0), 8);
    assert_eq!(clock_points(13.0, 75.0), 2);
    assert_eq!(clock_points(0.0, 7.0), 3);
}

#[test]
fn clock_starts_on_target_and_ignores_non_finite_entry() {
    let mut rng = rng();
    let mut task = ClockTask::new();
    task.begin(0, &mut rng);
    assert_eq!(task.time(), (11.0, 10.0));

    let bad = Input::ClockTime {
        hour: f64::NAN,
        minute: 30.0,
    };
    task.handle(&bad, 1, &mut rng);
    assert_eq!(task.time(), (11.0, 10.0));

    let set = Input::ClockTime {
        hour: 2.0,
        minute: 45.0,
    };
    task.handle(&set, 2, &mut rng);
    assert_eq!(
        task.handle(&Input::Finish, 3, &mut rng),
        Some(Completion::Scored(8.0))
    );
}

#[test]
fn bisection_needs_a_click_before_saving() {
    let mut rng = rng();
    let mut task = BisectionTask::new();
    task.begin(0, &mut rng);
    assert_eq!(task.handle(&Input::Finish, 1, &mut rng), None);
    assert!(!task.is_done());

    task.handle(&Input::Position { x: f64::INFINITY }, 2, &mut rng);
    assert_eq!(task.position(), None);

    task.handle(&Input::Position { x: 150.0 }, 3, &mut rng);
    task.handle(&Input::Position { x: 230.4 }, 4, &mut rng);
    assert_eq!(
        task.handle(&Input::Finish, 5, &mut rng),
        Some(Completion::Scored(30.0))
    );
}

#[test]
fn operator_tasks_ignore_foreign_inputs() {
    let mut rng = rng();
    let mut task = OrientationTask::new();
    for input in [Input::Tap, Input::Start, Input::judge(Judgement::Same)] {
        assert_eq!(task.handle(&input, 0, &mut rng), None);
    }
    assert!(!task.is_done());
}
