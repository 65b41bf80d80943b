use crate::flows::{optional_text, required_text, WizardFlow};
use crate::forms::{FlowKind, FlowPayload, SafetyChecklist, SessionContext, SupervisionStatus};
use crate::wizard::{FieldKind, FieldSpec, FieldValue, FormState, StepDescriptor};

pub const EQUIPMENT_ITEMS: [&str; 4] = [
    "Mats secured",
    "Goals anchored",
    "First-aid kit stocked",
    "Defibrillator accessible",
];

pub const ENVIRONMENT_ITEMS: [&str; 4] = [
    "Floor dry",
    "Lighting adequate",
    "Exits clear",
    "Temperature acceptable",
];

/// Four-step pre-session safety checklist: venue, equipment checks,
/// environment checks, and supervision confirmation.
pub struct ChecklistFlow {
    steps: Vec<StepDescriptor>,
}

impl ChecklistFlow {
    pub fn new() -> Self {
        let steps = vec![
            StepDescriptor::new(
                "Venue",
                vec![
                    FieldSpec::new("venue", "Venue", FieldKind::Text),
                    FieldSpec::new("inspected_by", "Inspected by", FieldKind::Text).optional(),
                ],
            )
            .with_message("Please enter the venue being inspected"),
            StepDescriptor::new(
                "Equipment",
                vec![FieldSpec::new(
                    "equipment",
                    "Equipment checks",
                    FieldKind::Items(&EQUIPMENT_ITEMS),
                )
                .optional()],
            ),
            StepDescriptor::new(
                "Environment",
                vec![FieldSpec::new(
                    "environment",
                    "Environment checks",
                    FieldKind::Items(&ENVIRONMENT_ITEMS),
                )
                .optional()],
            ),
            StepDescriptor::new(
                "Supervision",
                vec![
                    FieldSpec::new(
                        "supervision",
                        "Supervision cover",
                        FieldKind::Choice(&SupervisionStatus::LABELS),
                    ),
                    FieldSpec::new("notes", "Notes", FieldKind::Text).optional(),
                ],
            )
            .with_message("Please confirm supervision cover before submitting"),
        ];
        Self { steps }
    }
}

impl Default for ChecklistFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardFlow for ChecklistFlow {
    fn kind(&self) -> FlowKind {
        FlowKind::SafetyChecklist
    }

    fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    fn defaults(&self, context: &SessionContext) -> FormState {
        let mut state = FormState::new();
        if let Some(reporter) = &context.reporter {
            state.set("inspected_by", FieldValue::Text(reporter.clone()));
        }
        state
    }

    fn finalize(&self, state: &FormState) -> FlowPayload {
        FlowPayload::SafetyChecklist(SafetyChecklist {
            venue: required_text(state, "venue"),
            inspected_by: optional_text(state, "inspected_by"),
            equipment: state.items("equipment").to_vec(),
            environment: state.items("environment").to_vec(),
            supervision: state
                .choice("supervision")
                .and_then(SupervisionStatus::from_label)
                .unwrap_or(SupervisionStatus::NotConfirmed),
            notes: optional_text(state, "notes"),
        })
    }
}
