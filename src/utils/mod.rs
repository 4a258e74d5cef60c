pub mod clock;
pub mod formatting;
