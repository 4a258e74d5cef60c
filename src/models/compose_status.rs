use serde::{Deserialize, Serialize};

/// Outcome of the most recent submission attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComposeStatus {
    /// Editing, nothing pending or rejected
    #[default]
    #[serde(rename = "NONE")]
    Idle,
    Submitting,
    /// Rate limited, unrelated to muting
    Flood,
    /// Rejected for a reason that does not mute
    Rejected,
    /// This very submission triggered or extended a mute
    RejectedMute,
}

impl ComposeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComposeStatus::Idle => "NONE",
            ComposeStatus::Submitting => "SUBMITTING",
            ComposeStatus::Flood => "FLOOD",
            ComposeStatus::Rejected => "REJECTED",
            ComposeStatus::RejectedMute => "REJECTED_MUTE",
        }
    }

    pub fn is_mute_rejection(&self) -> bool {
        matches!(self, ComposeStatus::RejectedMute)
    }
}

impl std::fmt::Display for ComposeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
