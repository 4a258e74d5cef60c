use compose_guard::compose::{ComposeMachine, ComposeSettings};
use compose_guard::config::Settings;
use compose_guard::models::MuteStatus;
use compose_guard::services::replay;
use compose_guard::utils::clock::{Clock, SystemClock};
use compose_guard::utils::formatting::format_relative;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting compose guard replay");

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };

    // Accept either a bare mute status or a whole session document
    let mute_status = match tokio::fs::read_to_string(&settings.mute_status_path).await {
        Ok(raw) => match MuteStatus::from_session_json(&raw) {
            Ok(Some(status)) => Some(status),
            Ok(None) => match MuteStatus::from_json(&raw) {
                Ok(status) => Some(status),
                Err(e) => {
                    error!("Failed to decode mute status: {}", e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                error!("Failed to decode mute status: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!(
                "Failed to read {}: {}",
                settings.mute_status_path.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let clock = SystemClock;
    let mut machine =
        ComposeMachine::mount_with(mute_status.as_ref(), &clock, ComposeSettings::from(&settings));

    let view = machine.view_at(&clock);
    info!(
        "Mounted: compose visible: {}, commenting status: {}, modal: {}",
        view.compose_visible, view.commenting_status_visible, view.mute_modal_visible
    );
    if let Some(countdown) = view.unmute_in {
        info!("Commenting available again {}", format_relative(countdown));
    }

    let Some(path) = settings.responses_path.as_deref() else {
        return;
    };

    let recorded = match replay::load_recorded(path).await {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to load recorded responses: {}", e);
            std::process::exit(1);
        }
    };

    let summary = replay::replay(&mut machine, &clock, recorded).await;
    info!(
        "Replay finished: {} submitted, {} refused, {} applied, {} discarded",
        summary.submitted, summary.refused, summary.applied, summary.discarded
    );

    let now_ms = clock.now_ms();
    let info = machine.mute_message_info();
    info!(
        "Final status {} (muted: {}, message key: {})",
        machine.state().status,
        machine.is_muted(now_ms),
        info.comment_type
    );
}
