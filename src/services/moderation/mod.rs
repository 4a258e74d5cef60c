pub mod mute_timer;
pub mod offense_window;
pub mod outcome_classifier;

pub use outcome_classifier::{classify, SubmitOutcome};
