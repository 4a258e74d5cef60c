/// An offense younger than this (exclusive) surfaces the mute modal on mount
pub const DEFAULT_OFFENSE_WARNING_WINDOW_SECONDS: i64 = 120; // 2 minutes

/// Longest comment the compose box accepts, in characters
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 500;

/// Milliseconds per second, for session timestamps delivered in seconds
pub const MS_PER_SECOND: i64 = 1000;

pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
