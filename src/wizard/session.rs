use crate::flows::WizardFlow;
use crate::forms::{FlowKind, SessionContext, SubmittedRecord};
use crate::wizard::state::{FieldValue, FormState};
use crate::wizard::step::{StepDescriptor, ValidationFailure};

/// Discrete user action applied to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Previous,
    SetField { key: String, value: FieldValue },
    Submit,
}

/// Result of applying a [`WizardAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum WizardOutcome {
    /// Navigation landed on the given step (1-based).
    Moved(usize),
    /// A field value was merged into the form state.
    Updated,
    /// Validation blocked the action; step and form state are unchanged.
    Rejected(ValidationFailure),
    /// The terminal step validated; the finalized record is ready for the
    /// submission sink and the form state has been reset.
    Finalized(SubmittedRecord),
}

/// One in-progress wizard: the owning flow definition, the accumulating form
/// state, and the current step index.
///
/// The step index is 1-based and always within `1..=len()`. `next` caps at
/// the terminal step, `previous` floors at the first, and nothing here
/// performs I/O; submission and notification live in
/// [`WizardController`](crate::wizard::WizardController).
pub struct WizardSession {
    flow: Box<dyn WizardFlow>,
    seeded: FormState,
    state: FormState,
    step: usize,
}

impl WizardSession {
    pub fn new(flow: Box<dyn WizardFlow>, context: &SessionContext) -> Self {
        debug_assert!(!flow.steps().is_empty(), "flows declare at least one step");
        let seeded = flow.defaults(context);
        Self {
            state: seeded.clone(),
            seeded,
            flow,
            step: 1,
        }
    }

    pub fn kind(&self) -> FlowKind {
        self.flow.kind()
    }

    pub fn flow(&self) -> &dyn WizardFlow {
        self.flow.as_ref()
    }

    /// Current step ordinal, 1-based.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.flow.steps().len()
    }

    pub fn is_empty(&self) -> bool {
        self.flow.steps().is_empty()
    }

    pub fn is_terminal(&self) -> bool {
        self.step == self.len()
    }

    /// Fraction of steps reached, in `(0, 1]`.
    pub fn progress(&self) -> f64 {
        self.step as f64 / self.len() as f64
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn current_step(&self) -> &StepDescriptor {
        &self.flow.steps()[self.step - 1]
    }

    /// Unconditional merge; validation is deferred to `next`/`submit`.
    pub fn set_field(&mut self, key: impl Into<String>, value: FieldValue) {
        self.state.set(key, value);
    }

    /// Re-runs the active step's validator without navigating.
    pub fn validate_current(&self) -> Result<(), ValidationFailure> {
        self.current_step().validate(&self.state)
    }

    /// Validates the active step and advances one step, capped at the
    /// terminal step. On failure the step index and form state are left
    /// untouched.
    pub fn next(&mut self) -> Result<usize, ValidationFailure> {
        self.validate_current()?;
        if self.step < self.len() {
            self.step += 1;
            tracing::debug!(step = self.step, flow = self.kind().slug(), "advanced");
        }
        Ok(self.step)
    }

    /// Moves one step back, floored at the first step. Never validates.
    pub fn previous(&mut self) -> usize {
        if self.step > 1 {
            self.step -= 1;
        }
        self.step
    }

    /// Builds the finalized record. Only available from the terminal step,
    /// which is re-validated first. The session itself is not reset; callers
    /// decide when the record has actually been handed off.
    pub fn finalize(&self) -> Result<SubmittedRecord, ValidationFailure> {
        if !self.is_terminal() {
            return Err(ValidationFailure::new(
                "Submission is only available from the final step",
            ));
        }
        self.validate_current()?;
        Ok(SubmittedRecord::new(self.flow.finalize(&self.state)))
    }

    /// Restores the seeded form state and returns to the first step.
    pub fn reset(&mut self) {
        self.state = self.seeded.clone();
        self.step = 1;
    }

    /// Pure dispatcher over the four wizard actions. `Submit` resets the
    /// session on success so the returned record is the only remaining copy
    /// of the entered data.
    pub fn apply(&mut self, action: WizardAction) -> WizardOutcome {
        match action {
            WizardAction::Next => match self.next() {
                Ok(step) => WizardOutcome::Moved(step),
                Err(failure) => WizardOutcome::Rejected(failure),
            },
            WizardAction::Previous => WizardOutcome::Moved(self.previous()),
            WizardAction::SetField { key, value } => {
                self.set_field(key, value);
                WizardOutcome::Updated
            }
            WizardAction::Submit => match self.finalize() {
                Ok(record) => {
                    self.reset();
                    WizardOutcome::Finalized(record)
                }
                Err(failure) => WizardOutcome::Rejected(failure),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::incident::IncidentFlow;
    use crate::forms::{FlowPayload, SubmissionStatus};

    fn fresh_session() -> WizardSession {
        WizardSession::new(Box::new(IncidentFlow::new()), &SessionContext::new())
    }

    fn fill_step_one(session: &mut WizardSession) {
        session.set_field("incident_type", FieldValue::Choice("Injury".into()));
        session.set_field("severity", FieldValue::Choice("High".into()));
    }

    fn fill_required(session: &mut WizardSession) {
        fill_step_one(session);
        session.set_field("description", FieldValue::Text("Collision".into()));
        session.set_field("location", FieldValue::Text("Main hall".into()));
        session.set_field("athlete", FieldValue::Text("Jordan A.".into()));
    }

    #[test]
    fn step_index_stays_in_range() {
        let mut session = fresh_session();
        assert_eq!(session.step(), 1);
        session.previous();
        session.previous();
        assert_eq!(session.step(), 1);

        fill_required(&mut session);
        for _ in 0..10 {
            session.next().expect("all steps valid");
        }
        assert_eq!(session.step(), session.len());
    }

    #[test]
    fn failed_next_is_a_no_op() {
        let mut session = fresh_session();
        let before = session.state().clone();
        let failure = session.next().unwrap_err();
        assert_eq!(
            failure.message,
            "Please select incident type and severity level"
        );
        assert_eq!(session.step(), 1);
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn previous_never_validates() {
        let mut session = fresh_session();
        fill_required(&mut session);
        session.next().unwrap();
        session.next().unwrap();
        assert_eq!(session.step(), 3);

        // Clobber an earlier requirement, then walk back to the start.
        session.set_field("incident_type", FieldValue::Choice(String::new()));
        assert_eq!(session.previous(), 2);
        assert_eq!(session.previous(), 1);
    }

    #[test]
    fn finalize_below_terminal_is_rejected() {
        let mut session = fresh_session();
        fill_required(&mut session);
        let before = session.state().clone();
        let outcome = session.apply(WizardAction::Submit);
        assert!(matches!(outcome, WizardOutcome::Rejected(_)));
        assert_eq!(session.step(), 1);
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn submit_resets_to_seeded_state() {
        let context = SessionContext::new().with_reporter("Coach Sam");
        let mut session = WizardSession::new(Box::new(IncidentFlow::new()), &context);
        fill_required(&mut session);
        session.set_field("first_aid_given", FieldValue::Flag(true));
        while !session.is_terminal() {
            session.next().expect("valid step");
        }

        let outcome = session.apply(WizardAction::Submit);
        let record = match outcome {
            WizardOutcome::Finalized(record) => record,
            other => panic!("Unexpected outcome: {:?}", other),
        };
        assert!(!record.id.is_nil());
        assert_eq!(record.status, SubmissionStatus::Submitted);
        match record.payload {
            FlowPayload::IncidentReport(report) => {
                assert_eq!(report.reporter.as_deref(), Some("Coach Sam"));
                assert!(report.first_aid_given);
            }
            other => panic!("Unexpected payload: {:?}", other),
        }

        // Back to the seeded shape: step one, reporter seed intact, edits gone.
        assert_eq!(session.step(), 1);
        assert_eq!(session.state().text("reporter"), Some("Coach Sam"));
        assert_eq!(session.state().text("description"), None);
        assert!(!session.state().flag("first_aid_given"));
    }

    #[test]
    fn progress_tracks_step_over_total() {
        let mut session = fresh_session();
        assert!((session.progress() - 0.25).abs() < f64::EPSILON);
        fill_required(&mut session);
        session.next().unwrap();
        assert!((session.progress() - 0.5).abs() < f64::EPSILON);
    }
}
