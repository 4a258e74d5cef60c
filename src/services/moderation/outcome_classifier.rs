use tracing::warn;

use crate::constants::messages::{FLOOD_ERROR, MUTED_ERROR, NETWORK_ERROR, UNKNOWN_ERROR};
use crate::models::{ComposeStatus, MuteStatus, SubmitResponse};

/// What a submission response means for the compose box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Comment posted
    Accepted,
    /// Submitting too fast
    Flood { error: String },
    /// Rejected for a reason that does not mute (validation, generic failure)
    Rejected { error: String },
    /// This submission muted the user; the fresh mute replaces any seeded one
    RejectedMute {
        error: Option<String>,
        mute_expires_at_ms: i64,
        mute_type: Option<String>,
        mute_status: MuteStatus,
    },
}

impl SubmitOutcome {
    pub fn status(&self) -> ComposeStatus {
        match self {
            SubmitOutcome::Accepted => ComposeStatus::Idle,
            SubmitOutcome::Flood { .. } => ComposeStatus::Flood,
            SubmitOutcome::Rejected { .. } => ComposeStatus::Rejected,
            SubmitOutcome::RejectedMute { .. } => ComposeStatus::RejectedMute,
        }
    }

    /// Error identifier; orthogonal to `status`, a mute rejection may carry one too
    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Accepted => None,
            SubmitOutcome::Flood { error } | SubmitOutcome::Rejected { error } => {
                Some(error.as_str())
            }
            SubmitOutcome::RejectedMute { error, .. } => error.as_deref(),
        }
    }

    fn generic(error: Option<&str>) -> Self {
        SubmitOutcome::Rejected {
            error: error.unwrap_or(UNKNOWN_ERROR).to_string(),
        }
    }
}

/// Map a submission response onto a compose outcome. `None` means the
/// request never produced a response. Nothing here fails: shapes that make no
/// sense become a generic rejection so the compose box stays renderable.
pub fn classify(response: Option<&SubmitResponse>) -> SubmitOutcome {
    let response = match response {
        Some(r) => r,
        None => {
            return SubmitOutcome::Rejected {
                error: NETWORK_ERROR.to_string(),
            }
        }
    };

    let status = response.status.as_deref().unwrap_or("").trim();
    let error = response.error.as_deref();

    if status.eq_ignore_ascii_case("ok") || status.eq_ignore_ascii_case("accepted") {
        return SubmitOutcome::Accepted;
    }

    if status.eq_ignore_ascii_case(ComposeStatus::Flood.as_str()) || error == Some(FLOOD_ERROR) {
        return SubmitOutcome::Flood {
            error: error.unwrap_or(FLOOD_ERROR).to_string(),
        };
    }

    if status.eq_ignore_ascii_case(ComposeStatus::RejectedMute.as_str())
        || error == Some(MUTED_ERROR)
    {
        return match response.mute_status() {
            Some(mute_status) => SubmitOutcome::RejectedMute {
                error: error.map(str::to_string),
                mute_expires_at_ms: mute_status.mute_expires_at_ms(),
                mute_type: response.mute_type.clone(),
                mute_status,
            },
            None => {
                warn!("Mute rejection without muteExpiresAt, treating as generic error");
                SubmitOutcome::generic(error)
            }
        };
    }

    if error.is_none() {
        warn!("Unrecognized submission response status {:?}", status);
    }

    SubmitOutcome::generic(error)
}
