use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::compose::{ComposeMachine, SubmissionTicket};
use crate::error::Error;
use crate::models::{ComposeStatus, SubmitResponse};
use crate::utils::clock::Clock;

/// One recorded submission: typed at `at_ms`, answered `delay_ms` later.
/// A `null` response stands for a request that never got one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedSubmission {
    pub text: String,
    #[serde(default)]
    pub at_ms: u64,
    #[serde(default)]
    pub delay_ms: u64,
    #[serde(default)]
    pub response: Option<SubmitResponse>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub submitted: usize,
    /// Drafts the compose box would not let through
    pub refused: usize,
    pub applied: usize,
    /// Responses that arrived after a newer submission was issued
    pub discarded: usize,
}

enum ReplayEvent {
    Submit(RecordedSubmission),
    Response {
        ticket: SubmissionTicket,
        response: Option<SubmitResponse>,
    },
}

/// Load recorded submissions from a JSON array
pub async fn load_recorded(path: &Path) -> Result<Vec<RecordedSubmission>, Error> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Drive recorded submissions through the machine the way a network client
/// would: each request resolves on its own timer, so responses may come back
/// out of order. One task owns the machine; a submission issued while an
/// older one is pending supersedes it.
pub async fn replay<C: Clock>(
    machine: &mut ComposeMachine,
    clock: &C,
    recorded: Vec<RecordedSubmission>,
) -> ReplaySummary {
    let (tx, mut rx) = mpsc::unbounded_channel::<ReplayEvent>();
    let mut summary = ReplaySummary::default();

    let mut submits_left = recorded.len();
    let mut in_flight = 0usize;

    for entry in recorded {
        let tx = tx.clone();
        tokio::spawn(async move {
            sleep(Duration::from_millis(entry.at_ms)).await;
            let _ = tx.send(ReplayEvent::Submit(entry));
        });
    }

    while submits_left > 0 || in_flight > 0 {
        let event = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        match event {
            ReplayEvent::Submit(entry) => {
                submits_left -= 1;
                let now_ms = clock.now_ms();

                if machine.state().status == ComposeStatus::Submitting {
                    debug!("Superseding pending submission");
                    machine.cancel();
                }

                machine.edit_message(entry.text, now_ms);
                let ticket = match machine.begin_submit(now_ms) {
                    Some(t) => t,
                    None => {
                        summary.refused += 1;
                        info!("Compose box refused submission");
                        continue;
                    }
                };
                summary.submitted += 1;
                in_flight += 1;

                let tx = tx.clone();
                let response = entry.response;
                let delay = Duration::from_millis(entry.delay_ms);
                tokio::spawn(async move {
                    sleep(delay).await;
                    let _ = tx.send(ReplayEvent::Response { ticket, response });
                });
            }
            ReplayEvent::Response { ticket, response } => {
                in_flight -= 1;
                let now_ms = clock.now_ms();

                if machine.handle_response(ticket, response.as_ref(), now_ms) {
                    summary.applied += 1;
                    let view = machine.view(now_ms);
                    info!(
                        "Ticket {} -> status {}, compose visible: {}, input disabled: {}, \
                        error row: {:?}, commenting status: {}, modal: {}",
                        ticket.0,
                        machine.state().status,
                        view.compose_visible,
                        view.input_disabled,
                        view.error_key,
                        view.commenting_status_visible,
                        view.mute_modal_visible
                    );
                } else {
                    summary.discarded += 1;
                    warn!("Dropped stale response for ticket {}", ticket.0);
                }
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::FixedClock;
    use tokio_test::assert_ok;

    fn entry(
        text: &str,
        at_ms: u64,
        delay_ms: u64,
        response: Option<SubmitResponse>,
    ) -> RecordedSubmission {
        RecordedSubmission {
            text: text.to_string(),
            at_ms,
            delay_ms,
            response,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_submissions() {
        let clock = FixedClock(0);
        let mut machine = ComposeMachine::mount(None, &clock);
        let recorded = vec![
            entry("first", 0, 10, Some(SubmitResponse::flood())),
            entry("second", 100, 10, Some(SubmitResponse::accepted())),
        ];

        let summary = replay(&mut machine, &clock, recorded).await;
        assert_eq!(summary.submitted, 2);
        assert_eq!(summary.applied, 2);
        assert_eq!(summary.discarded, 0);
        assert_eq!(machine.state().status, ComposeStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_response_does_not_overwrite_newer() {
        let clock = FixedClock(0);
        let mut machine = ComposeMachine::mount(None, &clock);
        let recorded = vec![
            // Slow first request comes back after the second was answered
            entry("first", 0, 500, Some(SubmitResponse::muted(600, "spam"))),
            entry("second", 10, 10, Some(SubmitResponse::accepted())),
        ];

        let summary = replay(&mut machine, &clock, recorded).await;
        assert_eq!(summary.applied, 1);
        assert_eq!(summary.discarded, 1);
        assert_eq!(machine.state().status, ComposeStatus::Idle);
        assert!(!machine.is_muted(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_muted_user_is_refused() {
        let clock = FixedClock(0);
        let mut machine = ComposeMachine::mount(None, &clock);
        let recorded = vec![
            entry("rude", 0, 10, Some(SubmitResponse::muted(600, "vulgarity"))),
            entry("more", 100, 10, Some(SubmitResponse::accepted())),
        ];

        let summary = replay(&mut machine, &clock, recorded).await;
        assert_eq!(summary.submitted, 1);
        assert_eq!(summary.refused, 1);
        assert_eq!(machine.state().status, ComposeStatus::RejectedMute);
        assert_eq!(machine.state().message, "rude");
    }

    #[test]
    fn test_decode_recorded() {
        let json = r#"[
            {"text": "hi", "delayMs": 20, "response": {"status": "ok"}},
            {"text": "lost", "atMs": 5, "response": null}
        ]"#;
        let recorded: Vec<RecordedSubmission> = assert_ok!(serde_json::from_str(json));
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].delay_ms, 20);
        assert!(recorded[1].response.is_none());
    }
}
