use serde::{Deserialize, Serialize};

/// Category of a reported incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentType {
    Injury,
    EquipmentFailure,
    Behavioural,
    Environment,
    NearMiss,
}

impl IncidentType {
    pub const LABELS: [&'static str; 5] = [
        "Injury",
        "Equipment failure",
        "Behavioural",
        "Environment",
        "Near miss",
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IncidentType::Injury => Self::LABELS[0],
            IncidentType::EquipmentFailure => Self::LABELS[1],
            IncidentType::Behavioural => Self::LABELS[2],
            IncidentType::Environment => Self::LABELS[3],
            IncidentType::NearMiss => Self::LABELS[4],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim();
        [
            IncidentType::Injury,
            IncidentType::EquipmentFailure,
            IncidentType::Behavioural,
            IncidentType::Environment,
            IncidentType::NearMiss,
        ]
        .into_iter()
        .find(|kind| kind.label().eq_ignore_ascii_case(normalized))
    }
}

/// How serious the incident was judged to be at reporting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityLevel {
    pub const LABELS: [&'static str; 4] = ["Low", "Medium", "High", "Critical"];

    pub fn label(&self) -> &'static str {
        match self {
            SeverityLevel::Low => Self::LABELS[0],
            SeverityLevel::Medium => Self::LABELS[1],
            SeverityLevel::High => Self::LABELS[2],
            SeverityLevel::Critical => Self::LABELS[3],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim();
        [
            SeverityLevel::Low,
            SeverityLevel::Medium,
            SeverityLevel::High,
            SeverityLevel::Critical,
        ]
        .into_iter()
        .find(|level| level.label().eq_ignore_ascii_case(normalized))
    }
}

/// Finalized incident report payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub incident_type: IncidentType,
    pub severity: SeverityLevel,
    pub description: String,
    pub location: String,
    pub athlete: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witnesses: Option<String>,
    pub first_aid_given: bool,
    pub medical_attention_required: bool,
    pub emergency_services_called: bool,
    pub parents_notified: bool,
}
