use tracing::{debug, info};

use crate::compose::messages::{mute_message_info, MuteMessageInfo};
use crate::compose::state::ComposeState;
use crate::compose::view::{characters_remaining, ComposeView};
use crate::config::Settings;
use crate::constants::timeouts::{
    DEFAULT_MAX_COMMENT_LENGTH, DEFAULT_OFFENSE_WARNING_WINDOW_SECONDS,
};
use crate::models::{ComposeStatus, MuteStatus, SubmitResponse};
use crate::services::moderation::offense_window::should_show_mute_modal_within;
use crate::services::moderation::{classify, mute_timer, SubmitOutcome};
use crate::utils::clock::Clock;
use crate::utils::formatting::RelativeTime;

/// Tunables for one compose box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeSettings {
    pub offense_warning_window_seconds: i64,
    pub max_comment_length: usize,
}

impl Default for ComposeSettings {
    fn default() -> Self {
        Self {
            offense_warning_window_seconds: DEFAULT_OFFENSE_WARNING_WINDOW_SECONDS,
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
        }
    }
}

impl From<&Settings> for ComposeSettings {
    fn from(settings: &Settings) -> Self {
        Self {
            offense_warning_window_seconds: settings.offense_warning_window_seconds,
            max_comment_length: settings.max_comment_length,
        }
    }
}

/// Identifies one submission; only the latest issued ticket may change state
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionTicket(pub u64);

/// The compose box's moderation state machine
#[derive(Debug, Clone)]
pub struct ComposeMachine {
    state: ComposeState,
    settings: ComposeSettings,
    issued: u64,
    /// Ticket whose response is still awaited
    pending: Option<SubmissionTicket>,
}

impl ComposeMachine {
    /// Mount with the session's mute status read once
    pub fn mount(mute_status: Option<&MuteStatus>, clock: &impl Clock) -> Self {
        Self::mount_with(mute_status, clock, ComposeSettings::default())
    }

    pub fn mount_with(
        mute_status: Option<&MuteStatus>,
        clock: &impl Clock,
        settings: ComposeSettings,
    ) -> Self {
        let state = ComposeState::seed(
            mute_status,
            clock.now_ms(),
            settings.offense_warning_window_seconds,
        );

        debug!(
            "Mounted compose box (mute expires at {} ms, modal open: {}, warning: {})",
            state.mute_expires_at_ms, state.mute_open, state.show_warning
        );

        Self::from_state(state, settings)
    }

    pub fn from_state(state: ComposeState, settings: ComposeSettings) -> Self {
        Self {
            state,
            settings,
            issued: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> &ComposeState {
        &self.state
    }

    /// Derived display state, computed fresh on every call
    pub fn view(&self, now_ms: i64) -> ComposeView {
        ComposeView::build(&self.state, now_ms, self.settings.max_comment_length)
    }

    pub fn view_at(&self, clock: &impl Clock) -> ComposeView {
        self.view(clock.now_ms())
    }

    pub fn is_muted(&self, now_ms: i64) -> bool {
        self.state.is_muted(now_ms)
    }

    pub fn milliseconds_remaining(&self, now_ms: i64) -> i64 {
        self.state.milliseconds_remaining(now_ms)
    }

    pub fn unmute_in(&self, now_ms: i64) -> Option<RelativeTime> {
        mute_timer::unmute_in(self.state.mute_expires_at_ms, now_ms)
    }

    pub fn mute_message_info(&self) -> MuteMessageInfo {
        mute_message_info(self.state.mute_type.as_deref())
    }

    pub fn characters_remaining(&self) -> i64 {
        characters_remaining(&self.state.message, self.settings.max_comment_length)
    }

    pub fn can_submit(&self, now_ms: i64) -> bool {
        self.view(now_ms).can_submit
    }

    /// Update the draft. Ignored while the input is disabled or a submission
    /// is in flight.
    pub fn edit_message(&mut self, text: impl Into<String>, now_ms: i64) {
        if self.view(now_ms).input_disabled {
            debug!("Ignoring edit while input is disabled");
            return;
        }
        if self.state.status == ComposeStatus::Submitting {
            debug!("Ignoring edit while a submission is in flight");
            return;
        }

        self.state.message = text.into();
        self.state.error = None;
        if matches!(
            self.state.status,
            ComposeStatus::Flood | ComposeStatus::Rejected
        ) {
            self.state.status = ComposeStatus::Idle;
        }
    }

    /// Discard the draft and any non-mute rejection
    pub fn cancel(&mut self) {
        if self.state.status == ComposeStatus::RejectedMute {
            debug!("Cancel ignored after mute rejection");
            return;
        }

        self.state.message.clear();
        self.state.error = None;
        self.state.status = ComposeStatus::Idle;
        self.pending = None;
    }

    /// Start a submission. Returns `None` when the draft cannot be submitted.
    pub fn begin_submit(&mut self, now_ms: i64) -> Option<SubmissionTicket> {
        if !self.can_submit(now_ms) {
            debug!("Submission refused in status {}", self.state.status);
            return None;
        }

        self.issued += 1;
        let ticket = SubmissionTicket(self.issued);
        self.pending = Some(ticket);
        self.state.status = ComposeStatus::Submitting;
        self.state.error = None;

        debug!("Submitting comment with ticket {}", ticket.0);
        Some(ticket)
    }

    /// Classify a raw response (`None` for transport failure) and apply it
    pub fn handle_response(
        &mut self,
        ticket: SubmissionTicket,
        response: Option<&SubmitResponse>,
        now_ms: i64,
    ) -> bool {
        let outcome = classify(response);
        self.handle_submit_result(ticket, outcome, now_ms)
    }

    /// Apply a submission outcome. Responses for anything but the latest
    /// pending ticket are stale and dropped; returns whether it was applied.
    pub fn handle_submit_result(
        &mut self,
        ticket: SubmissionTicket,
        outcome: SubmitOutcome,
        now_ms: i64,
    ) -> bool {
        if self.pending != Some(ticket) {
            debug!(
                "Discarding stale response for ticket {} (pending: {:?})",
                ticket.0, self.pending
            );
            return false;
        }
        self.pending = None;

        self.state.status = outcome.status();
        self.state.error = outcome.error().map(str::to_string);

        match outcome {
            SubmitOutcome::Accepted => {
                self.state.message.clear();
                debug!("Comment accepted");
            }
            SubmitOutcome::Flood { .. } | SubmitOutcome::Rejected { .. } => {
                debug!(
                    "Comment rejected with status {} ({:?})",
                    self.state.status, self.state.error
                );
            }
            SubmitOutcome::RejectedMute {
                mute_expires_at_ms,
                mute_type,
                mute_status,
                ..
            } => {
                self.state.mute_expires_at_ms = mute_expires_at_ms;
                self.state.mute_type = mute_type;
                if mute_status.show_warning {
                    self.state.show_warning = true;
                }
                if mute_timer::is_muted(mute_expires_at_ms, now_ms)
                    && should_show_mute_modal_within(
                        Some(&mute_status),
                        now_ms,
                        self.settings.offense_warning_window_seconds,
                    )
                {
                    self.state.mute_open = true;
                }

                info!(
                    "Submission muted user until {} ms (type: {:?})",
                    self.state.mute_expires_at_ms, self.state.mute_type
                );
            }
        }

        true
    }

    pub fn open_mute_modal(&mut self) {
        self.state.mute_open = true;
    }

    pub fn close_mute_modal(&mut self) {
        self.state.mute_open = false;
    }
}
