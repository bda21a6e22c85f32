use kognit_subtests::input::{Input, Judgement};
use kognit_subtests::rng::RngHandle;
use kognit_subtests::runners::choice::{
    ChoiceKind, ChoiceStimulus, ForcedChoiceTask, InkColor, SIMILARITY_ITEMS, line_delta,
};
use kognit_subtests::{Completion, Subtest};

fn rng() -> RngHandle {
    RngHandle::from_seed(11)
}

/// The answer a perfect subject gives to the current stimulus.
fn correct_answer(task: &ForcedChoiceTask) -> Input {
    match task.stimulus().unwrap() {
        ChoiceStimulus::ColorWord { ink, .. } => {
            Input::select(InkColor::ALL.iter().position(|c| c == ink).unwrap())
        }
        ChoiceStimulus::TonePair {
            first_hz,
            second_hz,
        } => Input::judge(if first_hz == second_hz {
            Judgement::Same
        } else {
            Judgement::Different
        }),
        ChoiceStimulus::FacePair { left, right } => Input::judge(if left == right {
            Judgement::Same
        } else {
            Judgement::Different
        }),
        ChoiceStimulus::Lines {
            target_deg,
            options,
        } => {
            let best = (0..options.len())
                .min_by_key(|i| line_delta(options[*i], *target_deg))
                .unwrap();
            Input::select(best)
        }
        ChoiceStimulus::Question { item } => Input::select(SIMILARITY_ITEMS[*item].answer),
    }
}

#[test]
fn stroop_counts_correct_ink_names() {
    let mut rng = rng();
    let mut task = ForcedChoiceTask::new(ChoiceKind::STROOP, 3);
    task.begin(0, &mut rng);

    let right = correct_answer(&task);
    assert_eq!(task.handle(&right, 10, &mut rng), None);

    let Input::Select { index } = correct_answer(&task) else {
        unreachable!()
    };
    let wrong = Input::select((index + 1) % InkColor::ALL.len());
    assert_eq!(task.handle(&wrong, 20, &mut rng), None);

    // not an answer to a colour trial
    assert_eq!(task.handle(&Input::judge(Judgement::Same), 25, &mut rng), None);
    assert_eq!(task.handle(&Input::select(9), 26, &mut rng), None);
    assert_eq!(task.answered(), 2);

    let right = correct_answer(&task);
    assert_eq!(
        task.handle(&right, 30, &mut rng),
        Some(Completion::Scored(2.0))
    );
    assert!(task.is_done());
    assert_eq!(task.stimulus(), None);
}

#[test]
fn stroop_is_mostly_incongruent() {
    let mut rng = rng();
    let mut task = ForcedChoiceTask::new(ChoiceKind::STROOP, 400);
    task.begin(0, &mut rng);
    let mut incongruent = 0;
    for t in 0..400 {
        if let Some(ChoiceStimulus::ColorWord { word, ink }) = task.stimulus()
            && word != ink
        {
            incongruent += 1;
        }
        let answer = correct_answer(&task);
        task.handle(&answer, t, &mut rng);
    }
    assert!((220..=340).contains(&incongruent), "{incongruent}");
}

#[test]
fn tone_pairs_differ_by_configured_step() {
    let mut rng = rng();
    let mut task = ForcedChoiceTask::new(ChoiceKind::tone(25), 30);
    task.begin(0, &mut rng);
    let mut last = None;
    for t in 0..30 {
        if let Some(ChoiceStimulus::TonePair {
            first_hz,
            second_hz,
        }) = task.stimulus()
        {
            assert!(first_hz == second_hz || first_hz.abs_diff(*second_hz) == 25);
        }
        let answer = correct_answer(&task);
        last = task.handle(&answer, t, &mut rng);
    }
    assert_eq!(last, Some(Completion::Scored(30.0)));
}

#[test]
fn face_discrimination_scores_judgements() {
    let mut rng = rng();
    let mut task = ForcedChoiceTask::new(ChoiceKind::Face, 2);
    task.begin(0, &mut rng);
    let answer = correct_answer(&task);
    task.handle(&answer, 1, &mut rng);
    let flipped = match correct_answer(&task) {
        Input::Judge {
            judgement: Judgement::Same,
        } => Input::judge(Judgement::Different),
        _ => Input::judge(Judgement::Same),
    };
    assert_eq!(
        task.handle(&flipped, 2, &mut rng),
        Some(Completion::Scored(1.0))
    );
}

#[test]
fn line_orientation_uses_tolerance() {
    assert_eq!(line_delta(10, 170), 20);
    assert_eq!(line_delta(0, 180), 0);
    assert_eq!(line_delta(95, 5), 90);

    let mut rng = rng();
    let kind = ChoiceKind::LineOrientation {
        choices: 10,
        tolerance_deg: 6,
    };
    let mut task = ForcedChoiceTask::new(kind, 20);
    task.begin(0, &mut rng);
    let mut expected = 0;
    let mut last = None;
    for t in 0..20 {
        let Some(ChoiceStimulus::Lines {
            target_deg,
            options,
        }) = task.stimulus().cloned()
        else {
            panic!("expected a line trial");
        };
        assert_eq!(options.len(), 10);
        let answer = correct_answer(&task);
        let Input::Select { index } = answer else {
            unreachable!()
        };
        if line_delta(options[index], target_deg) <= 6 {
            expected += 1;
        }
        last = task.handle(&answer, t, &mut rng);
    }
    assert_eq!(last, Some(Completion::Scored(f64::from(expected))));
}

#[test]
fn similarity_quiz_runs_its_fixed_items() {
    let mut rng = rng();
    let mut task = ForcedChoiceTask::similarity();
    assert_eq!(task.trials(), 4);
    task.begin(0, &mut rng);

    // option outside the item is not an answer
    assert_eq!(task.handle(&Input::select(7), 0, &mut rng), None);
    assert_eq!(task.answered(), 0);

    let mut last = None;
    for (t, answer) in [0, 1, 1, 1].into_iter().enumerate() {
        last = task.handle(&Input::select(answer), t as u64, &mut rng);
    }
    assert_eq!(last, Some(Completion::Scored(3.0)));
}

#[test]
fn zero_trials_are_unscored() {
    let mut rng = rng();
    let mut task = ForcedChoiceTask::new(ChoiceKind::Face, 0);
    assert_eq!(task.begin(0, &mut rng), Some(Completion::Unscored));
    assert_eq!(task.handle(&Input::judge(Judgement::Same), 1, &mut rng), None);
}
