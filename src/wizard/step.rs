use std::fmt;
use std::sync::Arc;

use crate::wizard::state::{FieldValue, FormState};

/// Step-level validation failure carrying one combined, human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub message: String,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Supported data kinds for wizard fields. Choice and item sets are fixed per
/// flow definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice(&'static [&'static str]),
    Flag,
    Items(&'static [&'static str]),
}

/// Declarative description of a single field within a step.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        // Checkbox fields are never required; everything else starts required.
        let required = !matches!(kind, FieldKind::Flag);
        Self {
            key,
            label,
            kind,
            required,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// A required field is satisfied when non-empty after trimming (text), a
    /// selection was made (choice), or at least one item is present (items).
    pub fn is_satisfied(&self, state: &FormState) -> bool {
        if !self.required {
            return true;
        }
        match (&self.kind, state.get(self.key)) {
            (FieldKind::Text, Some(FieldValue::Text(value))) => !value.trim().is_empty(),
            (FieldKind::Choice(_), Some(FieldValue::Choice(value))) => !value.trim().is_empty(),
            (FieldKind::Items(_), Some(FieldValue::Items(values))) => !values.is_empty(),
            (FieldKind::Flag, _) => true,
            _ => false,
        }
    }
}

type CheckFn = dyn Fn(&FormState) -> Result<(), ValidationFailure> + Send + Sync;

/// Additional cross-field rule attached to a step. Pure and idempotent, like
/// the required-field policy it supplements.
#[derive(Clone)]
pub struct StepCheck(Arc<CheckFn>);

impl StepCheck {
    pub fn new(
        check: impl Fn(&FormState) -> Result<(), ValidationFailure> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(check))
    }

    pub fn run(&self, state: &FormState) -> Result<(), ValidationFailure> {
        (self.0)(state)
    }
}

impl fmt::Debug for StepCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StepCheck")
    }
}

const DEFAULT_REQUIREMENT_MESSAGE: &str = "Please complete the required fields";

/// One page of a wizard: a titled subset of fields plus the validation rules
/// gating forward navigation.
#[derive(Debug, Clone)]
pub struct StepDescriptor {
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
    requirement_message: &'static str,
    check: Option<StepCheck>,
}

impl StepDescriptor {
    pub fn new(title: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            title,
            fields,
            requirement_message: DEFAULT_REQUIREMENT_MESSAGE,
            check: None,
        }
    }

    /// Overrides the combined message reported when required fields are
    /// missing.
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.requirement_message = message;
        self
    }

    pub fn with_check(
        mut self,
        check: impl Fn(&FormState) -> Result<(), ValidationFailure> + Send + Sync + 'static,
    ) -> Self {
        self.check = Some(StepCheck::new(check));
        self
    }

    pub fn has_required_fields(&self) -> bool {
        self.fields.iter().any(|field| field.required)
    }

    /// Pure pass/fail predicate over the current form state. Safe to invoke
    /// repeatedly between edits.
    pub fn validate(&self, state: &FormState) -> Result<(), ValidationFailure> {
        if self.fields.iter().any(|field| !field.is_satisfied(state)) {
            return Err(ValidationFailure::new(self.requirement_message));
        }
        if let Some(check) = &self.check {
            check.run(state)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details_step() -> StepDescriptor {
        StepDescriptor::new(
            "Details",
            vec![
                FieldSpec::new("description", "Description", FieldKind::Text),
                FieldSpec::new("location", "Location", FieldKind::Text),
                FieldSpec::new("witnesses", "Witnesses", FieldKind::Text).optional(),
            ],
        )
        .with_message("Please describe the incident and where it happened")
    }

    #[test]
    fn missing_required_field_reports_combined_message() {
        let step = details_step();
        let mut state = FormState::new();
        state.set("description", FieldValue::Text("Collision".into()));

        let failure = step.validate(&state).unwrap_err();
        assert_eq!(
            failure.message,
            "Please describe the incident and where it happened"
        );
    }

    #[test]
    fn whitespace_only_text_does_not_satisfy() {
        let step = details_step();
        let mut state = FormState::new();
        state.set("description", FieldValue::Text("   ".into()));
        state.set("location", FieldValue::Text("Main hall".into()));
        assert!(step.validate(&state).is_err());
    }

    #[test]
    fn checkbox_only_step_always_passes() {
        let step = StepDescriptor::new(
            "Medical response",
            vec![
                FieldSpec::new("first_aid_given", "First aid given", FieldKind::Flag),
                FieldSpec::new("parents_notified", "Parents notified", FieldKind::Flag),
            ],
        );
        assert!(!step.has_required_fields());
        assert!(step.validate(&FormState::new()).is_ok());
    }

    #[test]
    fn custom_check_runs_after_required_fields() {
        let step = StepDescriptor::new(
            "Rating",
            vec![FieldSpec::new(
                "rating",
                "Overall rating",
                FieldKind::Choice(&["1", "2", "3", "4", "5"]),
            )],
        )
        .with_message("Please select a rating")
        .with_check(|state| match state.choice("rating") {
            Some(raw) if raw.parse::<u8>().map_or(false, |n| (1..=5).contains(&n)) => Ok(()),
            _ => Err(ValidationFailure::new("Rating must be between 1 and 5")),
        });

        let mut state = FormState::new();
        assert_eq!(
            step.validate(&state).unwrap_err().message,
            "Please select a rating"
        );
        state.set("rating", FieldValue::Choice("9".into()));
        assert_eq!(
            step.validate(&state).unwrap_err().message,
            "Rating must be between 1 and 5"
        );
        state.set("rating", FieldValue::Choice("4".into()));
        assert!(step.validate(&state).is_ok());
    }
}
