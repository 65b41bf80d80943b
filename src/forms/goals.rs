use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Training area a goal focuses on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalArea {
    Strength,
    Endurance,
    Technique,
    Flexibility,
    Mindset,
}

impl GoalArea {
    pub const LABELS: [&'static str; 5] =
        ["Strength", "Endurance", "Technique", "Flexibility", "Mindset"];

    pub fn label(&self) -> &'static str {
        match self {
            GoalArea::Strength => Self::LABELS[0],
            GoalArea::Endurance => Self::LABELS[1],
            GoalArea::Technique => Self::LABELS[2],
            GoalArea::Flexibility => Self::LABELS[3],
            GoalArea::Mindset => Self::LABELS[4],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim();
        [
            GoalArea::Strength,
            GoalArea::Endurance,
            GoalArea::Technique,
            GoalArea::Flexibility,
            GoalArea::Mindset,
        ]
        .into_iter()
        .find(|area| area.label().eq_ignore_ascii_case(normalized))
    }
}

/// Finalized performance-goal payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceGoals {
    pub title: String,
    pub area: GoalArea,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    pub milestones: Vec<String>,
    pub committed: bool,
}
