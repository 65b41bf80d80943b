use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::checklist::SafetyChecklist;
use super::feedback::SessionFeedback;
use super::goals::PerformanceGoals;
use super::incident::IncidentReport;

/// Identifies one of the shipped wizard flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    IncidentReport,
    SafetyChecklist,
    SessionFeedback,
    PerformanceGoals,
}

impl FlowKind {
    pub const ALL: [FlowKind; 4] = [
        FlowKind::IncidentReport,
        FlowKind::SafetyChecklist,
        FlowKind::SessionFeedback,
        FlowKind::PerformanceGoals,
    ];

    /// Stable identifier used for CLI arguments and archive file names.
    pub fn slug(&self) -> &'static str {
        match self {
            FlowKind::IncidentReport => "incident-report",
            FlowKind::SafetyChecklist => "safety-checklist",
            FlowKind::SessionFeedback => "session-feedback",
            FlowKind::PerformanceGoals => "performance-goals",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FlowKind::IncidentReport => "Incident report",
            FlowKind::SafetyChecklist => "Safety checklist",
            FlowKind::SessionFeedback => "Session feedback",
            FlowKind::PerformanceGoals => "Performance goals",
        }
    }

    /// Accepts slugs in either dash or underscore form, case-insensitively.
    pub fn parse(input: &str) -> Option<FlowKind> {
        let normalized = input.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == normalized)
    }
}

/// Finalized payload, discriminated per flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "flow", content = "data", rename_all = "snake_case")]
pub enum FlowPayload {
    IncidentReport(IncidentReport),
    SafetyChecklist(SafetyChecklist),
    SessionFeedback(SessionFeedback),
    PerformanceGoals(PerformanceGoals),
}

impl FlowPayload {
    pub fn kind(&self) -> FlowKind {
        match self {
            FlowPayload::IncidentReport(_) => FlowKind::IncidentReport,
            FlowPayload::SafetyChecklist(_) => FlowKind::SafetyChecklist,
            FlowPayload::SessionFeedback(_) => FlowKind::SessionFeedback,
            FlowPayload::PerformanceGoals(_) => FlowKind::PerformanceGoals,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Submitted,
}

/// Envelope handed to the submission sink once a wizard completes. Records are
/// fully validated before one of these is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedRecord {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub payload: FlowPayload,
}

impl SubmittedRecord {
    pub fn new(payload: FlowPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            status: SubmissionStatus::Submitted,
            payload,
        }
    }

    pub fn kind(&self) -> FlowKind {
        self.payload.kind()
    }
}
