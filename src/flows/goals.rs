use chrono::NaiveDate;

use crate::flows::{required_text, WizardFlow};
use crate::forms::{FlowKind, FlowPayload, GoalArea, PerformanceGoals};
use crate::wizard::{FieldKind, FieldSpec, FormState, StepDescriptor, ValidationFailure};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn target_date_parses(state: &FormState) -> Result<(), ValidationFailure> {
    match state.text("target_date").map(str::trim) {
        None | Some("") => Ok(()),
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(|_| ())
            .map_err(|_| ValidationFailure::new("Use YYYY-MM-DD format for the target date")),
    }
}

/// Three-step performance goal: goal definition, plan, commitment.
pub struct GoalsFlow {
    steps: Vec<StepDescriptor>,
}

impl GoalsFlow {
    pub fn new() -> Self {
        let steps = vec![
            StepDescriptor::new(
                "Goal",
                vec![
                    FieldSpec::new("title", "Goal title", FieldKind::Text),
                    FieldSpec::new("area", "Focus area", FieldKind::Choice(&GoalArea::LABELS)),
                ],
            )
            .with_message("Please name the goal and choose a focus area"),
            StepDescriptor::new(
                "Plan",
                vec![
                    FieldSpec::new("target_date", "Target date (YYYY-MM-DD)", FieldKind::Text)
                        .optional(),
                    FieldSpec::new(
                        "milestones",
                        "Milestones (comma-separated)",
                        FieldKind::Text,
                    )
                    .optional(),
                ],
            )
            .with_check(target_date_parses),
            StepDescriptor::new(
                "Commitment",
                vec![FieldSpec::new(
                    "committed",
                    "I commit to working towards this goal",
                    FieldKind::Flag,
                )],
            ),
        ];
        Self { steps }
    }
}

impl Default for GoalsFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardFlow for GoalsFlow {
    fn kind(&self) -> FlowKind {
        FlowKind::PerformanceGoals
    }

    fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    fn finalize(&self, state: &FormState) -> FlowPayload {
        let milestones = state
            .text("milestones")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect();

        FlowPayload::PerformanceGoals(PerformanceGoals {
            title: required_text(state, "title"),
            area: state
                .choice("area")
                .and_then(GoalArea::from_label)
                .unwrap_or(GoalArea::Technique),
            target_date: state
                .text("target_date")
                .map(str::trim)
                .and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()),
            milestones,
            committed: state.flag("committed"),
        })
    }
}
