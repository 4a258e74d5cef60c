mod machine;
mod messages;
mod state;
mod view;

pub use machine::{ComposeMachine, ComposeSettings, SubmissionTicket};
pub use messages::{mute_message_info, MuteMessageInfo};
pub use state::ComposeState;
pub use view::{
    compose_mode, error_row, is_commenting_status_visible, is_compose_visible,
    is_error_row_visible, is_input_disabled, is_mute_modal_visible, ComposeMode, ComposeView,
    ErrorRow,
};
