use kognit_cli::script::{Action, Event, ReplayScript, ScoreInput, replay};
use kognit_core::models::metric::MetricKey;
use kognit_core::models::step::Step;
use kognit_session::Session;
use kognit_subtests::input::Input;
use kognit_subtests::rng::RngHandle;

#[test]
fn score_input_accepts_a_metric_map() {
    let input: ScoreInput = serde_json::from_str(
        r#"{
            "subject": { "age": 30 },
            "scores": { "M_TAP": 80, "M_RT": 310.5 }
        }"#,
    )
    .unwrap();
    assert_eq!(input.subject.age, 30);
    assert_eq!(input.notes, "");
    let entries = input.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].metric_key, "M_RT");
    assert_eq!(entries[0].value, 310.5);
}

#[test]
fn events_flatten_action_tags() {
    let script: ReplayScript = serde_json::from_str(
        r#"{
            "subject": { "age": 30 },
            "seed": 4,
            "events": [
                { "at": 0, "action": "next" },
                { "at": 50, "action": "input", "input": { "type": "mark", "item": 0, "correct": true } },
                { "at": 60, "action": "notes", "text": "ok" }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(script.seed, Some(4));
    assert_eq!(
        script.events[1],
        Event {
            at: 50,
            action: Action::Input {
                input: Input::Mark {
                    item: 0,
                    correct: true
                }
            },
        }
    );
}

#[test]
fn replay_drives_the_session() {
    let script: ReplayScript = serde_json::from_str(
        r#"{
            "subject": { "age": 30 },
            "events": [
                { "at": 0, "action": "next" },
                { "at": 100, "action": "input", "input": { "type": "mark", "item": 0, "correct": true } },
                { "at": 110, "action": "input", "input": { "type": "mark", "item": 2, "correct": true } },
                { "at": 120, "action": "input", "input": { "type": "finish" } },
                { "at": 1000, "action": "input", "input": { "type": "start" } },
                { "at": 1100, "action": "input", "input": { "type": "tap" } },
                { "at": 1200, "action": "input", "input": { "type": "tap" } },
                { "at": 31000, "action": "wait" },
                { "at": 31500, "action": "notes", "text": "tired" }
            ]
        }"#,
    )
    .unwrap();

    let mut session = Session::new(script.subject.clone(), RngHandle::from_seed(8));
    replay(&mut session, &script.events);

    assert_eq!(session.scores()[&MetricKey::Orientation], 4.0);
    assert_eq!(session.scores()[&MetricKey::Tapping], 2.0);
    assert_eq!(session.current_step(), Step::Reaction);
    assert_eq!(session.notes(), "tired");
}
