use crate::compose::messages::{mute_message_info, MuteMessageInfo};
use crate::compose::state::ComposeState;
use crate::constants::messages::ERROR_KEY_PREFIX;
use crate::models::ComposeStatus;
use crate::services::moderation::mute_timer;
use crate::utils::formatting::RelativeTime;

/// How the compose box is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeMode {
    Hidden,
    /// Visible with the input disabled
    ReadOnly,
    Editable,
}

/// What the generic error row does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRow {
    /// An error exists but belongs to the commenting-status surface
    Suppressed,
    Shown,
    Empty,
}

/// Inputs every display rule is evaluated against
#[derive(Debug, Clone, Copy)]
struct Facts {
    muted: bool,
    mute_rejection: bool,
    has_error: bool,
}

impl Facts {
    fn of(state: &ComposeState, now_ms: i64) -> Self {
        Self {
            muted: mute_timer::is_muted(state.mute_expires_at_ms, now_ms),
            mute_rejection: state.status.is_mute_rejection(),
            has_error: state.error.is_some(),
        }
    }
}

type Rule<T> = (fn(&Facts) -> bool, T);

fn mute_rejection(f: &Facts) -> bool {
    f.mute_rejection
}

fn muted(f: &Facts) -> bool {
    f.muted
}

fn has_error(f: &Facts) -> bool {
    f.has_error
}

// First matching rule wins.

/// A user muted by the comment they just posted keeps seeing it, read-only
const COMPOSE_POLICY: &[Rule<ComposeMode>] = &[
    (mute_rejection, ComposeMode::ReadOnly),
    (muted, ComposeMode::Hidden),
];

const ERROR_ROW_POLICY: &[Rule<ErrorRow>] = &[
    (mute_rejection, ErrorRow::Suppressed),
    (has_error, ErrorRow::Shown),
];

fn resolve<T: Copy>(policy: &[Rule<T>], facts: &Facts, fallback: T) -> T {
    policy
        .iter()
        .find(|(applies, _)| applies(facts))
        .map(|(_, outcome)| *outcome)
        .unwrap_or(fallback)
}

pub fn compose_mode(state: &ComposeState, now_ms: i64) -> ComposeMode {
    resolve(COMPOSE_POLICY, &Facts::of(state, now_ms), ComposeMode::Editable)
}

pub fn error_row(state: &ComposeState, now_ms: i64) -> ErrorRow {
    resolve(ERROR_ROW_POLICY, &Facts::of(state, now_ms), ErrorRow::Empty)
}

pub fn is_compose_visible(state: &ComposeState, now_ms: i64) -> bool {
    compose_mode(state, now_ms) != ComposeMode::Hidden
}

pub fn is_input_disabled(state: &ComposeState, now_ms: i64) -> bool {
    compose_mode(state, now_ms) == ComposeMode::ReadOnly
}

pub fn is_error_row_visible(state: &ComposeState, now_ms: i64) -> bool {
    error_row(state, now_ms) == ErrorRow::Shown
}

/// Shown while muted, and right away on a mute rejection
pub fn is_commenting_status_visible(state: &ComposeState, now_ms: i64) -> bool {
    let facts = Facts::of(state, now_ms);
    facts.muted || facts.mute_rejection
}

pub fn is_mute_modal_visible(state: &ComposeState) -> bool {
    state.mute_open
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeView {
    pub compose_visible: bool,
    pub input_disabled: bool,
    pub error_row_visible: bool,
    pub commenting_status_visible: bool,
    pub mute_modal_visible: bool,
    /// Passed through to the mute modal
    pub show_warning: bool,
    /// `comments.<error>` when the error row is shown
    pub error_key: Option<String>,
    pub characters_remaining: i64,
    pub can_submit: bool,
    pub unmute_in: Option<RelativeTime>,
    pub mute_message: MuteMessageInfo,
}

impl ComposeView {
    pub(crate) fn build(state: &ComposeState, now_ms: i64, max_comment_length: usize) -> Self {
        let mode = compose_mode(state, now_ms);
        let error_row_visible = is_error_row_visible(state, now_ms);
        let characters_remaining = characters_remaining(&state.message, max_comment_length);
        let can_submit = mode == ComposeMode::Editable
            && state.status != ComposeStatus::Submitting
            && !state.message.trim().is_empty()
            && characters_remaining >= 0;

        Self {
            compose_visible: mode != ComposeMode::Hidden,
            input_disabled: mode == ComposeMode::ReadOnly,
            error_row_visible,
            commenting_status_visible: is_commenting_status_visible(state, now_ms),
            mute_modal_visible: is_mute_modal_visible(state),
            show_warning: state.show_warning,
            error_key: state
                .error
                .as_ref()
                .filter(|_| error_row_visible)
                .map(|e| format!("{}.{}", ERROR_KEY_PREFIX, e)),
            characters_remaining,
            can_submit,
            unmute_in: mute_timer::unmute_in(state.mute_expires_at_ms, now_ms),
            mute_message: mute_message_info(state.mute_type.as_deref()),
        }
    }
}

/// May go negative once the draft is over the limit
pub(crate) fn characters_remaining(message: &str, max_comment_length: usize) -> i64 {
    max_comment_length as i64 - message.chars().count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(status: ComposeStatus, error: Option<&str>, mute_expires_at_ms: i64) -> ComposeState {
        ComposeState {
            status,
            error: error.map(str::to_string),
            mute_expires_at_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_state_shows_only_compose_box() {
        let s = ComposeState::default();
        assert!(is_compose_visible(&s, 0));
        assert!(!is_input_disabled(&s, 0));
        assert!(!is_error_row_visible(&s, 0));
        assert!(!is_mute_modal_visible(&s));
        assert!(!is_commenting_status_visible(&s, 0));
    }

    #[test]
    fn test_error_row_on_rejection() {
        let s = state(ComposeStatus::Idle, Some("isFlood"), 0);
        assert!(is_error_row_visible(&s, 0));
    }

    #[test]
    fn test_no_error_row_when_muted_by_submission() {
        let s = state(ComposeStatus::RejectedMute, Some("isMuted"), 0);
        assert_eq!(error_row(&s, 0), ErrorRow::Suppressed);
        assert!(!is_error_row_visible(&s, 0));
        assert!(is_compose_visible(&s, 0));
    }

    #[test]
    fn test_muted_hides_compose_box() {
        let s = state(ComposeStatus::Idle, None, 100);
        assert!(!is_compose_visible(&s, 0));
        assert!(!is_mute_modal_visible(&s));
        assert!(is_commenting_status_visible(&s, 0));
    }

    #[test]
    fn test_muted_by_own_submission_keeps_box_read_only() {
        let s = state(ComposeStatus::RejectedMute, None, 100);
        assert_eq!(compose_mode(&s, 0), ComposeMode::ReadOnly);
        assert!(is_compose_visible(&s, 0));
        assert!(is_input_disabled(&s, 0));
        assert!(!is_error_row_visible(&s, 0));
        assert!(is_commenting_status_visible(&s, 0));
        assert!(!is_mute_modal_visible(&s));
    }

    #[test]
    fn test_mute_rejection_shows_status_before_mute_confirmed() {
        let s = state(ComposeStatus::RejectedMute, None, 0);
        assert!(is_commenting_status_visible(&s, 0));
    }

    #[test]
    fn test_non_mute_error_keeps_input_enabled() {
        let s = state(ComposeStatus::Flood, Some("some error"), 0);
        assert!(is_error_row_visible(&s, 0));
        assert!(is_compose_visible(&s, 0));
        assert!(!is_input_disabled(&s, 0));
    }

    #[test]
    fn test_modal_follows_mute_open() {
        let mut s = ComposeState::default();
        s.mute_open = true;
        assert!(is_mute_modal_visible(&s));
        let view = ComposeView::build(&s, 0, 500);
        assert!(view.mute_modal_visible);
        assert!(!view.show_warning);

        s.show_warning = true;
        assert!(ComposeView::build(&s, 0, 500).show_warning);
    }

    #[test]
    fn test_expired_mute_restores_compose_box() {
        let s = state(ComposeStatus::Idle, None, 100);
        assert!(!is_compose_visible(&s, 99));
        assert!(is_compose_visible(&s, 100));
        assert!(!is_commenting_status_visible(&s, 100));
    }

    #[test]
    fn test_view_error_key_only_when_row_visible() {
        let flood = state(ComposeStatus::Flood, Some("isFlood"), 0);
        assert_eq!(
            ComposeView::build(&flood, 0, 500).error_key.as_deref(),
            Some("comments.isFlood")
        );

        let muted = state(ComposeStatus::RejectedMute, Some("isMuted"), 100);
        assert!(ComposeView::build(&muted, 0, 500).error_key.is_none());
    }

    #[test]
    fn test_view_is_idempotent() {
        let s = state(ComposeStatus::RejectedMute, Some("isMuted"), 100);
        assert_eq!(ComposeView::build(&s, 0, 500), ComposeView::build(&s, 0, 500));
    }

    #[test]
    fn test_characters_remaining() {
        assert_eq!(characters_remaining("", 500), 500);
        assert_eq!(characters_remaining("héllo", 5), 0);
        assert_eq!(characters_remaining("toolong", 3), -4);
    }
}
