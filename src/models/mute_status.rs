use serde::{Deserialize, Serialize};

use crate::constants::timeouts::MS_PER_SECOND;
use crate::error::Error;
use crate::models::Offense;

/// A user's moderation standing as read from the session at mount
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuteStatus {
    /// Seconds since epoch; 0 when not muted
    #[serde(default, deserialize_with = "null_as_zero")]
    pub mute_expires_at: i64,
    #[serde(default)]
    pub offenses: Vec<Offense>,
    /// Server override forcing the warning regardless of offense recency
    #[serde(default)]
    pub show_warning: bool,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

impl MuteStatus {
    /// Decode a bare mute-status object
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode the mute status out of a full session document
    /// (`session.permissions.mute_status`); `None` when the session carries none
    pub fn from_session_json(json: &str) -> Result<Option<Self>, Error> {
        let session: serde_json::Value = serde_json::from_str(json)?;

        match session.pointer("/session/permissions/mute_status") {
            Some(serde_json::Value::Null) | None => Ok(None),
            Some(value) => Ok(Some(Self::deserialize(value)?)),
        }
    }

    /// Mute expiry converted once to milliseconds
    pub fn mute_expires_at_ms(&self) -> i64 {
        self.mute_expires_at.saturating_mul(MS_PER_SECOND)
    }
}
