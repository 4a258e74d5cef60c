use crate::utils::formatting::{relative_time, RelativeTime};

/// True while the mute expiry lies in the future. An unset (zero) expiry is
/// never in the future of a real clock.
pub fn is_muted(mute_expires_at_ms: i64, now_ms: i64) -> bool {
    mute_expires_at_ms > now_ms
}

pub fn milliseconds_remaining(mute_expires_at_ms: i64, now_ms: i64) -> i64 {
    mute_expires_at_ms.saturating_sub(now_ms).max(0)
}

/// Countdown for "you can comment again in ...", `None` when not muted
pub fn unmute_in(mute_expires_at_ms: i64, now_ms: i64) -> Option<RelativeTime> {
    if !is_muted(mute_expires_at_ms, now_ms) {
        return None;
    }

    Some(relative_time(milliseconds_remaining(
        mute_expires_at_ms,
        now_ms,
    )))
}
