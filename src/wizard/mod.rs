//! Wizard state machine: form state, step descriptors, sessions, and the
//! controller that wires sessions to submission sinks and notifiers.

pub mod controller;
pub mod session;
pub mod state;
pub mod step;

pub use controller::WizardController;
pub use session::{WizardAction, WizardOutcome, WizardSession};
pub use state::{FieldValue, FormState};
pub use step::{FieldKind, FieldSpec, StepCheck, StepDescriptor, ValidationFailure};
