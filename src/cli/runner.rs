use std::io::BufRead;

use dialoguer::{Confirm, Input, MultiSelect, Select};
use uuid::Uuid;

use crate::cli::io::{dialog_err, print_warning, theme};
use crate::cli::output;
use crate::errors::FormError;
use crate::wizard::{FieldKind, FieldSpec, FieldValue, WizardController, WizardSession};

/// Input produced for one field prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Value(FieldValue),
    Keep,
    Back,
    Cancel,
}

/// Response to the final review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Submit,
    Back,
    Cancel,
}

/// How a wizard run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Submitted(Uuid),
    Cancelled,
}

/// Interaction surface the runner drives a wizard through. One
/// implementation prompts interactively, the other replays scripted
/// answers.
pub trait WizardUi {
    fn begin_step(&mut self, session: &WizardSession);

    fn prompt_field(
        &mut self,
        spec: &FieldSpec,
        current: Option<FieldValue>,
    ) -> Result<FieldInput, FormError>;

    fn confirm_submission(
        &mut self,
        summary: &[(String, String)],
    ) -> Result<ConfirmChoice, FormError>;
}

/// Collects answers for the active step, then lets the controller decide
/// whether the wizard may move on. Validation failures re-prompt the same
/// step; the terminal step adds a review-and-confirm pass before submitting.
pub fn run_flow(
    controller: &mut WizardController<'_>,
    ui: &mut dyn WizardUi,
) -> Result<RunOutcome, FormError> {
    loop {
        ui.begin_step(controller.session());

        let step = controller.session().current_step().clone();
        let mut moved_back = false;
        for spec in &step.fields {
            let current = controller.session().state().get(spec.key).cloned();
            match ui.prompt_field(spec, current)? {
                FieldInput::Value(value) => controller.set_field(spec.key, value),
                FieldInput::Keep => {}
                FieldInput::Back => {
                    moved_back = true;
                    break;
                }
                FieldInput::Cancel => return Ok(RunOutcome::Cancelled),
            }
        }
        if moved_back {
            controller.previous();
            continue;
        }

        if controller.session().is_terminal() {
            match ui.confirm_submission(&summarize(controller.session()))? {
                ConfirmChoice::Submit => {
                    if let Some(id) = controller.submit()? {
                        return Ok(RunOutcome::Submitted(id));
                    }
                    // Terminal validation failed; the notifier reported why.
                }
                ConfirmChoice::Back => {
                    controller.previous();
                }
                ConfirmChoice::Cancel => return Ok(RunOutcome::Cancelled),
            }
        } else {
            // On failure the notifier reported why; re-prompt the same step.
            controller.next();
        }
    }
}

/// Label/value pairs for the review screen, in step order.
pub fn summarize(session: &WizardSession) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    for step in session.flow().steps() {
        for field in &step.fields {
            let rendered = match session.state().get(field.key) {
                Some(FieldValue::Text(value)) => value.clone(),
                Some(FieldValue::Choice(value)) => value.clone(),
                Some(FieldValue::Flag(true)) => "yes".into(),
                Some(FieldValue::Flag(false)) => "no".into(),
                Some(FieldValue::Items(values)) => {
                    if values.is_empty() {
                        "none".into()
                    } else {
                        values.join(", ")
                    }
                }
                None => "[unfilled]".into(),
            };
            entries.push((field.label.to_string(), rendered));
        }
    }
    entries
}

fn resolve_choice(options: &[&str], raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if let Ok(index) = trimmed.parse::<usize>() {
        if (1..=options.len()).contains(&index) {
            return Some(options[index - 1].to_string());
        }
        return None;
    }
    options
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(trimmed))
        .map(|candidate| candidate.to_string())
}

const BACK_COMMAND: &str = ":back";
const CANCEL_COMMAND: &str = ":cancel";

/// Interactive implementation backed by dialoguer prompts.
#[derive(Debug, Default)]
pub struct DialoguerUi;

impl DialoguerUi {
    pub fn new() -> Self {
        Self
    }
}

impl WizardUi for DialoguerUi {
    fn begin_step(&mut self, session: &WizardSession) {
        output::section(format!(
            "Step {} of {} – {}",
            session.step(),
            session.len(),
            session.current_step().title
        ));
    }

    fn prompt_field(
        &mut self,
        spec: &FieldSpec,
        current: Option<FieldValue>,
    ) -> Result<FieldInput, FormError> {
        let theme = theme();
        match &spec.kind {
            FieldKind::Text => {
                let mut input = Input::<String>::with_theme(&theme)
                    .with_prompt(spec.label)
                    .allow_empty(true);
                if let Some(FieldValue::Text(existing)) = &current {
                    input = input.default(existing.clone());
                }
                let raw = input.interact_text().map_err(dialog_err)?;
                let trimmed = raw.trim();
                Ok(if trimmed.is_empty() {
                    FieldInput::Keep
                } else if trimmed.eq_ignore_ascii_case(BACK_COMMAND) {
                    FieldInput::Back
                } else if trimmed.eq_ignore_ascii_case(CANCEL_COMMAND) {
                    FieldInput::Cancel
                } else {
                    FieldInput::Value(FieldValue::Text(trimmed.to_string()))
                })
            }
            FieldKind::Choice(options) => {
                let mut items: Vec<&str> = options.to_vec();
                items.push("← Back");
                let default_index = current
                    .as_ref()
                    .and_then(|value| match value {
                        FieldValue::Choice(selected) => {
                            options.iter().position(|option| *option == selected.as_str())
                        }
                        _ => None,
                    })
                    .unwrap_or(0);
                let selection = Select::with_theme(&theme)
                    .with_prompt(spec.label)
                    .items(&items)
                    .default(default_index)
                    .interact_opt()
                    .map_err(dialog_err)?;
                Ok(match selection {
                    None => FieldInput::Cancel,
                    Some(index) if index == options.len() => FieldInput::Back,
                    Some(index) => FieldInput::Value(FieldValue::Choice(options[index].to_string())),
                })
            }
            FieldKind::Flag => {
                let default = matches!(current, Some(FieldValue::Flag(true)));
                let answer = Confirm::with_theme(&theme)
                    .with_prompt(spec.label)
                    .default(default)
                    .interact_opt()
                    .map_err(dialog_err)?;
                Ok(match answer {
                    Some(value) => FieldInput::Value(FieldValue::Flag(value)),
                    None => FieldInput::Cancel,
                })
            }
            FieldKind::Items(options) => {
                let ticked: Vec<bool> = options
                    .iter()
                    .map(|option| match &current {
                        Some(FieldValue::Items(selected)) => {
                            selected.iter().any(|item| item.as_str() == *option)
                        }
                        _ => false,
                    })
                    .collect();
                let selection = MultiSelect::with_theme(&theme)
                    .with_prompt(spec.label)
                    .items(options)
                    .defaults(&ticked)
                    .interact_opt()
                    .map_err(dialog_err)?;
                Ok(match selection {
                    Some(indexes) => FieldInput::Value(FieldValue::Items(
                        indexes
                            .into_iter()
                            .map(|index| options[index].to_string())
                            .collect(),
                    )),
                    None => FieldInput::Cancel,
                })
            }
        }
    }

    fn confirm_submission(
        &mut self,
        summary: &[(String, String)],
    ) -> Result<ConfirmChoice, FormError> {
        output::section("Review your entries");
        for (label, value) in summary {
            output::info(format!("  {label}: {value}"));
        }
        let theme = theme();
        let selection = Select::with_theme(&theme)
            .with_prompt("Ready to submit?")
            .items(&["Submit", "← Back", "Cancel"])
            .default(0)
            .interact_opt()
            .map_err(dialog_err)?;
        Ok(match selection {
            Some(0) => ConfirmChoice::Submit,
            Some(1) => ConfirmChoice::Back,
            _ => ConfirmChoice::Cancel,
        })
    }
}

/// Replays answers from a reader, one line per prompt. Empty lines keep the
/// current value; `:back` and `:cancel` mirror the interactive commands.
pub struct ScriptUi<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ScriptUi<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
            Err(_) => None,
        }
    }
}

impl<R: BufRead> WizardUi for ScriptUi<R> {
    fn begin_step(&mut self, session: &WizardSession) {
        output::section(format!(
            "Step {} of {} – {}",
            session.step(),
            session.len(),
            session.current_step().title
        ));
    }

    fn prompt_field(
        &mut self,
        spec: &FieldSpec,
        _current: Option<FieldValue>,
    ) -> Result<FieldInput, FormError> {
        output::info(format!("{}:", spec.label));
        let Some(raw) = self.next_line() else {
            return Ok(FieldInput::Cancel);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(FieldInput::Keep);
        }
        if trimmed.eq_ignore_ascii_case(BACK_COMMAND) {
            return Ok(FieldInput::Back);
        }
        if trimmed.eq_ignore_ascii_case(CANCEL_COMMAND) {
            return Ok(FieldInput::Cancel);
        }

        Ok(match &spec.kind {
            FieldKind::Text => FieldInput::Value(FieldValue::Text(trimmed.to_string())),
            FieldKind::Choice(options) => match resolve_choice(*options, trimmed) {
                Some(label) => FieldInput::Value(FieldValue::Choice(label)),
                None => {
                    print_warning(format!(
                        "Select a valid {} (options: {})",
                        spec.label.to_ascii_lowercase(),
                        options.join(", ")
                    ));
                    FieldInput::Keep
                }
            },
            FieldKind::Flag => match trimmed.to_ascii_lowercase().as_str() {
                "y" | "yes" | "true" | "1" => FieldInput::Value(FieldValue::Flag(true)),
                "n" | "no" | "false" | "0" => FieldInput::Value(FieldValue::Flag(false)),
                _ => {
                    print_warning("Enter yes/no, true/false, or 1/0 for checkbox answers");
                    FieldInput::Keep
                }
            },
            FieldKind::Items(options) => {
                let mut selected = Vec::new();
                for token in trimmed.split(',') {
                    match resolve_choice(*options, token) {
                        Some(label) if !selected.contains(&label) => selected.push(label),
                        Some(_) => {}
                        None => print_warning(format!("Skipping unknown item `{}`", token.trim())),
                    }
                }
                FieldInput::Value(FieldValue::Items(selected))
            }
        })
    }

    fn confirm_submission(
        &mut self,
        summary: &[(String, String)],
    ) -> Result<ConfirmChoice, FormError> {
        output::section("Review your entries");
        for (label, value) in summary {
            output::info(format!("  {label}: {value}"));
        }
        output::info("Submit? (yes/:back/:cancel):");
        Ok(match self.next_line() {
            Some(line) => {
                let trimmed = line.trim().to_ascii_lowercase();
                if trimmed == "y" || trimmed == "yes" || trimmed == "submit" {
                    ConfirmChoice::Submit
                } else if trimmed == BACK_COMMAND {
                    ConfirmChoice::Back
                } else {
                    ConfirmChoice::Cancel
                }
            }
            None => ConfirmChoice::Cancel,
        })
    }
}
