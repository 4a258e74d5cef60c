pub mod compose;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use compose::{ComposeMachine, ComposeView};
pub use error::Error;
