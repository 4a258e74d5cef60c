use serde::{Deserialize, Serialize};

use crate::models::{ComposeStatus, MuteStatus};
use crate::services::moderation::mute_timer;
use crate::services::moderation::offense_window::should_show_mute_modal_within;

/// Mutable fields owned by one compose box. Everything the renderer reads is
/// derived from this plus "now" (see `view`), never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeState {
    /// Never reset by time passing; gate on `is_muted`
    pub mute_expires_at_ms: i64,
    /// Cause of the latest mute, only used to pick message keys
    pub mute_type: Option<String>,
    pub show_warning: bool,
    pub mute_open: bool,
    pub status: ComposeStatus,
    pub error: Option<String>,
    /// Draft comment text
    pub message: String,
}

impl ComposeState {
    /// Seed from the session's mute status at mount. An absent status means
    /// not muted, no warning.
    pub fn seed(mute_status: Option<&MuteStatus>, now_ms: i64, window_seconds: i64) -> Self {
        let mute_expires_at_ms = mute_status.map(MuteStatus::mute_expires_at_ms).unwrap_or(0);
        let show_warning = mute_status.map(|s| s.show_warning).unwrap_or(false);
        let mute_open = mute_timer::is_muted(mute_expires_at_ms, now_ms)
            && should_show_mute_modal_within(mute_status, now_ms, window_seconds);

        Self {
            mute_expires_at_ms,
            mute_type: None,
            show_warning,
            mute_open,
            ..Default::default()
        }
    }

    pub fn is_muted(&self, now_ms: i64) -> bool {
        mute_timer::is_muted(self.mute_expires_at_ms, now_ms)
    }

    pub fn milliseconds_remaining(&self, now_ms: i64) -> i64 {
        mute_timer::milliseconds_remaining(self.mute_expires_at_ms, now_ms)
    }
}
