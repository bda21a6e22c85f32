use kognit_subtests::Completion;
use kognit_subtests::input::{Input, Judgement};

#[test]
fn inputs_are_tagged_by_type() {
    let select: Input = serde_json::from_str(r#"{"type":"select","index":3}"#).unwrap();
    assert_eq!(select, Input::select(3));

    let judge: Input = serde_json::from_str(r#"{"type":"judge","judgement":"different"}"#).unwrap();
    assert_eq!(judge, Input::judge(Judgement::Different));

    let finish: Input = serde_json::from_str(r#"{"type":"finish"}"#).unwrap();
    assert_eq!(finish, Input::Finish);

    let json = serde_json::to_value(Input::ClockTime {
        hour: 11.0,
        minute: 10.0,
    })
    .unwrap();
    assert_eq!(json["type"], "clock_time");
    assert_eq!(json["minute"], 10.0);
}

#[test]
fn completion_serializes_kind_and_raw() {
    let scored = serde_json::to_string(&Completion::Scored(6.0)).unwrap();
    assert_eq!(scored, r#"{"kind":"scored","raw":6.0}"#);
    let unscored = serde_json::to_string(&Completion::Unscored).unwrap();
    assert_eq!(unscored, r#"{"kind":"unscored"}"#);
}

#[test]
fn completion_helpers() {
    assert_eq!(Completion::scored(f64::NAN), Completion::Unscored);
    assert_eq!(Completion::from_latencies(&[]), Completion::Unscored);
    assert_eq!(
        Completion::from_latencies(&[100.0, 101.0]),
        Completion::Scored(101.0)
    );
    assert_eq!(Completion::from_count(3).raw(), Some(3.0));
    assert_eq!(Completion::Unscored.raw(), None);
}
