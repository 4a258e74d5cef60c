pub mod messages;
pub mod timeouts;
