use crate::flows::{optional_text, required_text, WizardFlow};
use crate::forms::{FlowKind, FlowPayload, IncidentReport, IncidentType, SessionContext, SeverityLevel};
use crate::wizard::{FieldKind, FieldSpec, FieldValue, FormState, StepDescriptor};

/// Four-step incident report: classification, details, people involved, and
/// the medical response checklist.
pub struct IncidentFlow {
    steps: Vec<StepDescriptor>,
}

impl IncidentFlow {
    pub fn new() -> Self {
        let steps = vec![
            StepDescriptor::new(
                "Incident type",
                vec![
                    FieldSpec::new(
                        "incident_type",
                        "Incident type",
                        FieldKind::Choice(&IncidentType::LABELS),
                    ),
                    FieldSpec::new(
                        "severity",
                        "Severity level",
                        FieldKind::Choice(&SeverityLevel::LABELS),
                    ),
                ],
            )
            .with_message("Please select incident type and severity level"),
            StepDescriptor::new(
                "Details",
                vec![
                    FieldSpec::new("description", "What happened", FieldKind::Text),
                    FieldSpec::new("location", "Location", FieldKind::Text),
                ],
            )
            .with_message("Please describe the incident and where it happened"),
            StepDescriptor::new(
                "People involved",
                vec![
                    FieldSpec::new("athlete", "Athlete involved", FieldKind::Text),
                    FieldSpec::new("reporter", "Reported by", FieldKind::Text).optional(),
                    FieldSpec::new("witnesses", "Witnesses", FieldKind::Text).optional(),
                ],
            )
            .with_message("Please name the athlete involved"),
            StepDescriptor::new(
                "Medical response",
                vec![
                    FieldSpec::new("first_aid_given", "First aid given", FieldKind::Flag),
                    FieldSpec::new(
                        "medical_attention_required",
                        "Medical attention required",
                        FieldKind::Flag,
                    ),
                    FieldSpec::new(
                        "emergency_services_called",
                        "Emergency services called",
                        FieldKind::Flag,
                    ),
                    FieldSpec::new("parents_notified", "Parents notified", FieldKind::Flag),
                ],
            ),
        ];
        Self { steps }
    }
}

impl Default for IncidentFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardFlow for IncidentFlow {
    fn kind(&self) -> FlowKind {
        FlowKind::IncidentReport
    }

    fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    fn defaults(&self, context: &SessionContext) -> FormState {
        let mut state = FormState::new();
        if let Some(reporter) = &context.reporter {
            state.set("reporter", FieldValue::Text(reporter.clone()));
        }
        state
    }

    fn finalize(&self, state: &FormState) -> FlowPayload {
        FlowPayload::IncidentReport(IncidentReport {
            incident_type: state
                .choice("incident_type")
                .and_then(IncidentType::from_label)
                .unwrap_or(IncidentType::NearMiss),
            severity: state
                .choice("severity")
                .and_then(SeverityLevel::from_label)
                .unwrap_or(SeverityLevel::Low),
            description: required_text(state, "description"),
            location: required_text(state, "location"),
            athlete: required_text(state, "athlete"),
            reporter: optional_text(state, "reporter"),
            witnesses: optional_text(state, "witnesses"),
            first_aid_given: state.flag("first_aid_given"),
            medical_attention_required: state.flag("medical_attention_required"),
            emergency_services_called: state.flag("emergency_services_called"),
            parents_notified: state.flag("parents_notified"),
        })
    }
}
