pub mod moderation;
pub mod replay;
