use serde::{Deserialize, Serialize};

/// Finalized post-session feedback payload. `rating` is always in `1..=5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFeedback {
    pub rating: u8,
    pub highlights: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coach: Option<String>,
    pub would_recommend: bool,
}
