//! Typed form payloads, the submitted-record envelope, and session context.

pub mod checklist;
pub mod context;
pub mod feedback;
pub mod goals;
pub mod incident;
pub mod record;

pub use checklist::{SafetyChecklist, SupervisionStatus};
pub use context::SessionContext;
pub use feedback::SessionFeedback;
pub use goals::{GoalArea, PerformanceGoals};
pub use incident::{IncidentReport, IncidentType, SeverityLevel};
pub use record::{FlowKind, FlowPayload, SubmissionStatus, SubmittedRecord};
