use crate::constants::timeouts::DEFAULT_OFFENSE_WARNING_WINDOW_SECONDS;
use crate::models::MuteStatus;

/// Whether a fresh mute warning should be surfaced, using the default
/// two-minute window
pub fn should_show_mute_modal(mute_status: Option<&MuteStatus>, now_ms: i64) -> bool {
    should_show_mute_modal_within(mute_status, now_ms, DEFAULT_OFFENSE_WARNING_WINDOW_SECONDS)
}

/// Whether a fresh mute warning should be surfaced.
///
/// - no status or no offenses: never
/// - `show_warning` set by the server: always
/// - exactly one offense: only if it is younger than `window_seconds` (exclusive)
/// - several offenses: never, they are assumed already acknowledged
pub fn should_show_mute_modal_within(
    mute_status: Option<&MuteStatus>,
    now_ms: i64,
    window_seconds: i64,
) -> bool {
    let status = match mute_status {
        Some(s) => s,
        None => return false,
    };

    if status.offenses.is_empty() {
        return false;
    }

    if status.show_warning {
        return true;
    }

    match status.offenses.as_slice() {
        [only] => only.age_seconds(now_ms) < window_seconds,
        _ => false,
    }
}
