use serde::{Deserialize, Serialize};

/// Outcome of the supervision confirmation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupervisionStatus {
    Confirmed,
    PartialCover,
    NotConfirmed,
}

impl SupervisionStatus {
    pub const LABELS: [&'static str; 3] = ["Confirmed", "Partial cover", "Not confirmed"];

    pub fn label(&self) -> &'static str {
        match self {
            SupervisionStatus::Confirmed => Self::LABELS[0],
            SupervisionStatus::PartialCover => Self::LABELS[1],
            SupervisionStatus::NotConfirmed => Self::LABELS[2],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim();
        [
            SupervisionStatus::Confirmed,
            SupervisionStatus::PartialCover,
            SupervisionStatus::NotConfirmed,
        ]
        .into_iter()
        .find(|status| status.label().eq_ignore_ascii_case(normalized))
    }
}

/// Finalized pre-session safety checklist payload. Equipment and environment
/// hold the labels of the items that were ticked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyChecklist {
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspected_by: Option<String>,
    pub equipment: Vec<String>,
    pub environment: Vec<String>,
    pub supervision: SupervisionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
