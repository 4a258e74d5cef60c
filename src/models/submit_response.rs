use serde::{Deserialize, Serialize};

use crate::models::{MuteStatus, Offense};

/// Fields of a comment-submission response that moderation cares about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Seconds since epoch, present on mute rejections
    #[serde(default)]
    pub mute_expires_at: Option<i64>,
    #[serde(default)]
    pub mute_type: Option<String>,
    #[serde(default)]
    pub show_warning: Option<bool>,
    #[serde(default)]
    pub offenses: Option<Vec<Offense>>,
}

impl SubmitResponse {
    pub fn accepted() -> Self {
        Self {
            status: Some("ok".to_string()),
            ..Default::default()
        }
    }

    pub fn rejected(error: &str) -> Self {
        Self {
            status: Some("REJECTED".to_string()),
            error: Some(error.to_string()),
            ..Default::default()
        }
    }

    pub fn flood() -> Self {
        Self {
            status: Some("FLOOD".to_string()),
            error: Some(crate::constants::messages::FLOOD_ERROR.to_string()),
            ..Default::default()
        }
    }

    pub fn muted(mute_expires_at: i64, mute_type: &str) -> Self {
        Self {
            status: Some("REJECTED_MUTE".to_string()),
            error: Some(crate::constants::messages::MUTED_ERROR.to_string()),
            mute_expires_at: Some(mute_expires_at),
            mute_type: Some(mute_type.to_string()),
            ..Default::default()
        }
    }

    /// The fresh mute standing carried by a mute rejection
    pub fn mute_status(&self) -> Option<MuteStatus> {
        self.mute_expires_at.map(|mute_expires_at| MuteStatus {
            mute_expires_at,
            offenses: self.offenses.clone().unwrap_or_default(),
            show_warning: self.show_warning.unwrap_or(false),
        })
    }
}
