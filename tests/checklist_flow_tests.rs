use coach_core::{
    flows::ChecklistFlow,
    forms::{FlowPayload, SessionContext, SupervisionStatus},
    notify::RecordingNotifier,
    storage::MemorySink,
    wizard::{FieldValue, WizardController, WizardSession},
};

fn make_wizard<'a>(
    sink: &'a mut MemorySink,
    notifier: &'a mut RecordingNotifier,
    context: &SessionContext,
) -> WizardController<'a> {
    let session = WizardSession::new(Box::new(ChecklistFlow::new()), context);
    WizardController::new(session, sink, notifier)
}

// The equipment and environment steps are checkbox-only and pass with
// nothing ticked.
#[test]
fn checkbox_only_steps_pass_with_nothing_ticked() {
    let mut sink = MemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let mut wizard = make_wizard(&mut sink, &mut notifier, &SessionContext::new());

    wizard.set_field("venue", FieldValue::Text("North hall".into()));
    assert!(wizard.next());
    assert!(wizard.next(), "equipment step has no required fields");
    assert!(wizard.next(), "environment step has no required fields");
    assert_eq!(wizard.session().step(), 4);
    assert!(notifier.warnings().is_empty());
}

#[test]
fn missing_venue_blocks_the_first_step() {
    let mut sink = MemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let mut wizard = make_wizard(&mut sink, &mut notifier, &SessionContext::new());

    assert!(!wizard.next());
    let (_, message) = notifier.last_warning().expect("blocked step reported");
    assert_eq!(message, "Please enter the venue being inspected");
}

#[test]
fn full_checklist_submission_round_trip() {
    let mut sink = MemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let context = SessionContext::new().with_reporter("Coach Sam");
    let mut wizard = make_wizard(&mut sink, &mut notifier, &context);

    wizard.set_field("venue", FieldValue::Text("North hall".into()));
    wizard.set_field(
        "equipment",
        FieldValue::Items(vec!["Mats secured".into(), "First-aid kit stocked".into()]),
    );
    wizard.set_field("supervision", FieldValue::Choice("Partial cover".into()));
    wizard.set_field("notes", FieldValue::Text("Second coach arrives at 5pm".into()));

    while !wizard.session().is_terminal() {
        assert!(wizard.next());
    }
    let id = wizard.submit().unwrap().expect("terminal step was valid");

    let record = &sink.records()[0];
    assert_eq!(record.id, id);
    match &record.payload {
        FlowPayload::SafetyChecklist(checklist) => {
            assert_eq!(checklist.venue, "North hall");
            assert_eq!(checklist.inspected_by.as_deref(), Some("Coach Sam"));
            assert_eq!(checklist.equipment.len(), 2);
            assert!(checklist.environment.is_empty());
            assert_eq!(checklist.supervision, SupervisionStatus::PartialCover);
            assert_eq!(
                checklist.notes.as_deref(),
                Some("Second coach arrives at 5pm")
            );
        }
        other => panic!("Unexpected payload: {:?}", other),
    }
}

#[test]
fn unconfirmed_supervision_blocks_submission() {
    let mut sink = MemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let mut wizard = make_wizard(&mut sink, &mut notifier, &SessionContext::new());

    wizard.set_field("venue", FieldValue::Text("Track".into()));
    while !wizard.session().is_terminal() {
        assert!(wizard.next());
    }

    let outcome = wizard.submit().expect("sink never reached");
    assert_eq!(outcome, None);
    assert!(sink.records().is_empty());
    let (_, message) = notifier.last_warning().expect("blocked submit reported");
    assert_eq!(message, "Please confirm supervision cover before submitting");
}
