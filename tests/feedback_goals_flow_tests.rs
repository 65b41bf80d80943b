use chrono::NaiveDate;
use coach_core::{
    flows::{FeedbackFlow, GoalsFlow},
    forms::{FlowPayload, GoalArea, SessionContext},
    notify::RecordingNotifier,
    storage::MemorySink,
    wizard::{FieldValue, WizardController, WizardSession},
};

#[test]
fn feedback_rating_gates_the_first_step() {
    let mut sink = MemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let session = WizardSession::new(Box::new(FeedbackFlow::new()), &SessionContext::new());
    let mut wizard = WizardController::new(session, &mut sink, &mut notifier);

    assert!(!wizard.next());

    wizard.set_field("rating", FieldValue::Choice("4".into()));
    assert!(wizard.next());
    assert_eq!(wizard.session().step(), 2);
    assert_eq!(
        notifier.last_warning().unwrap().1,
        "Please select an overall rating"
    );
}

#[test]
fn feedback_submission_parses_rating_and_flag() {
    let mut sink = MemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let session = WizardSession::new(Box::new(FeedbackFlow::new()), &SessionContext::new());
    let mut wizard = WizardController::new(session, &mut sink, &mut notifier);

    wizard.set_field("rating", FieldValue::Choice("5".into()));
    wizard.set_field("highlights", FieldValue::Text("Sharp passing drills".into()));
    wizard.set_field("coach", FieldValue::Text("Coach Sam".into()));
    wizard.set_field("would_recommend", FieldValue::Flag(true));

    while !wizard.session().is_terminal() {
        assert!(wizard.next());
    }
    wizard.submit().unwrap().expect("valid terminal step");

    match &sink.records()[0].payload {
        FlowPayload::SessionFeedback(feedback) => {
            assert_eq!(feedback.rating, 5);
            assert_eq!(feedback.highlights, "Sharp passing drills");
            assert_eq!(feedback.improvements, None);
            assert_eq!(feedback.coach.as_deref(), Some("Coach Sam"));
            assert!(feedback.would_recommend);
        }
        other => panic!("Unexpected payload: {:?}", other),
    }
}

// The recommendation step holds a single checkbox, so it validates even when
// the athlete leaves it unticked.
#[test]
fn feedback_terminal_step_passes_unticked() {
    let mut sink = MemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let session = WizardSession::new(Box::new(FeedbackFlow::new()), &SessionContext::new());
    let mut wizard = WizardController::new(session, &mut sink, &mut notifier);

    wizard.set_field("rating", FieldValue::Choice("2".into()));
    wizard.set_field("highlights", FieldValue::Text("Warm-up was good".into()));
    while !wizard.session().is_terminal() {
        assert!(wizard.next());
    }

    wizard.submit().unwrap().expect("checkbox step validates");
    match &sink.records()[0].payload {
        FlowPayload::SessionFeedback(feedback) => assert!(!feedback.would_recommend),
        other => panic!("Unexpected payload: {:?}", other),
    }
}

#[test]
fn goals_plan_step_rejects_malformed_dates() {
    let mut sink = MemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let session = WizardSession::new(Box::new(GoalsFlow::new()), &SessionContext::new());
    let mut wizard = WizardController::new(session, &mut sink, &mut notifier);

    wizard.set_field("title", FieldValue::Text("Sub-60s lap".into()));
    wizard.set_field("area", FieldValue::Choice("Endurance".into()));
    assert!(wizard.next());

    wizard.set_field("target_date", FieldValue::Text("soon".into()));
    assert!(!wizard.next());

    wizard.set_field("target_date", FieldValue::Text("2026-09-01".into()));
    assert!(wizard.next());
    assert_eq!(wizard.session().step(), 3);
    assert_eq!(
        notifier.last_warning().unwrap().1,
        "Use YYYY-MM-DD format for the target date"
    );
}

#[test]
fn goals_submission_splits_milestones_and_parses_date() {
    let mut sink = MemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let session = WizardSession::new(Box::new(GoalsFlow::new()), &SessionContext::new());
    let mut wizard = WizardController::new(session, &mut sink, &mut notifier);

    wizard.set_field("title", FieldValue::Text("Sub-60s lap".into()));
    wizard.set_field("area", FieldValue::Choice("Endurance".into()));
    wizard.set_field("target_date", FieldValue::Text("2026-09-01".into()));
    wizard.set_field(
        "milestones",
        FieldValue::Text("65s by March, 62s by May".into()),
    );
    wizard.set_field("committed", FieldValue::Flag(true));

    while !wizard.session().is_terminal() {
        assert!(wizard.next());
    }
    wizard.submit().unwrap().expect("valid terminal step");

    match &sink.records()[0].payload {
        FlowPayload::PerformanceGoals(goal) => {
            assert_eq!(goal.title, "Sub-60s lap");
            assert_eq!(goal.area, GoalArea::Endurance);
            assert_eq!(
                goal.target_date,
                Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
            );
            assert_eq!(goal.milestones, vec!["65s by March", "62s by May"]);
            assert!(goal.committed);
        }
        other => panic!("Unexpected payload: {:?}", other),
    }
}
