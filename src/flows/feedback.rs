use crate::flows::{optional_text, required_text, WizardFlow};
use crate::forms::{FlowKind, FlowPayload, SessionFeedback};
use crate::wizard::{FieldKind, FieldSpec, FormState, StepDescriptor, ValidationFailure};

pub const RATING_LABELS: [&str; 5] = ["1", "2", "3", "4", "5"];

fn rating_in_range(state: &FormState) -> Result<(), ValidationFailure> {
    match state.choice("rating") {
        Some(raw) if raw.trim().parse::<u8>().map_or(false, |n| (1..=5).contains(&n)) => Ok(()),
        _ => Err(ValidationFailure::new("Rating must be between 1 and 5")),
    }
}

/// Three-step post-session feedback: rating, comments, recommendation.
pub struct FeedbackFlow {
    steps: Vec<StepDescriptor>,
}

impl FeedbackFlow {
    pub fn new() -> Self {
        let steps = vec![
            StepDescriptor::new(
                "Rating",
                vec![FieldSpec::new(
                    "rating",
                    "Overall rating",
                    FieldKind::Choice(&RATING_LABELS),
                )],
            )
            .with_message("Please select an overall rating")
            .with_check(rating_in_range),
            StepDescriptor::new(
                "Comments",
                vec![
                    FieldSpec::new("highlights", "What went well", FieldKind::Text),
                    FieldSpec::new("improvements", "What could improve", FieldKind::Text)
                        .optional(),
                    FieldSpec::new("coach", "Coach", FieldKind::Text).optional(),
                ],
            )
            .with_message("Please share what went well"),
            StepDescriptor::new(
                "Recommendation",
                vec![FieldSpec::new(
                    "would_recommend",
                    "Would recommend this session",
                    FieldKind::Flag,
                )],
            ),
        ];
        Self { steps }
    }
}

impl Default for FeedbackFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardFlow for FeedbackFlow {
    fn kind(&self) -> FlowKind {
        FlowKind::SessionFeedback
    }

    fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    fn finalize(&self, state: &FormState) -> FlowPayload {
        FlowPayload::SessionFeedback(SessionFeedback {
            rating: state
                .choice("rating")
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(3),
            highlights: required_text(state, "highlights"),
            improvements: optional_text(state, "improvements"),
            coach: optional_text(state, "coach"),
            would_recommend: state.flag("would_recommend"),
        })
    }
}
