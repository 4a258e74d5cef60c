mod compose_status;
mod mute_status;
mod offense;
mod submit_response;

pub use compose_status::ComposeStatus;
pub use mute_status::MuteStatus;
pub use offense::Offense;
pub use submit_response::SubmitResponse;
