//! Concrete wizard definitions: one flow per source screen, each declaring
//! its steps, seeding rules, and typed finalized payload.

pub mod checklist;
pub mod feedback;
pub mod goals;
pub mod incident;

pub use checklist::ChecklistFlow;
pub use feedback::FeedbackFlow;
pub use goals::GoalsFlow;
pub use incident::IncidentFlow;

use crate::forms::{FlowKind, FlowPayload, SessionContext};
use crate::wizard::{FormState, StepDescriptor};

/// Contract implemented by every wizard flow.
///
/// `finalize` is only invoked after the terminal step validated, so
/// implementations map form state into their payload with plain fallbacks
/// instead of errors.
pub trait WizardFlow: Send + Sync {
    fn kind(&self) -> FlowKind;

    fn steps(&self) -> &[StepDescriptor];

    /// Form state a fresh session starts from, pre-seeded from the caller's
    /// context where the flow has a matching field.
    fn defaults(&self, context: &SessionContext) -> FormState {
        let _ = context;
        FormState::new()
    }

    fn finalize(&self, state: &FormState) -> FlowPayload;
}

/// Builds the flow registered for the given kind.
pub fn flow_for(kind: FlowKind) -> Box<dyn WizardFlow> {
    match kind {
        FlowKind::IncidentReport => Box::new(IncidentFlow::new()),
        FlowKind::SafetyChecklist => Box::new(ChecklistFlow::new()),
        FlowKind::SessionFeedback => Box::new(FeedbackFlow::new()),
        FlowKind::PerformanceGoals => Box::new(GoalsFlow::new()),
    }
}

pub(crate) fn required_text(state: &FormState, key: &str) -> String {
    state.text(key).map(str::trim).unwrap_or_default().to_string()
}

pub(crate) fn optional_text(state: &FormState, key: &str) -> Option<String> {
    state
        .text(key)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
