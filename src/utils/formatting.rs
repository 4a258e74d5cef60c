use std::fmt;

use crate::constants::timeouts::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A future offset in one unit, the shape a relative-time formatter consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub value: i64,
    pub unit: TimeUnit,
}

/// Pick the coarsest unit that still fits and round up, so a countdown never
/// promises commenting sooner than the mute actually ends
pub fn relative_time(remaining_ms: i64) -> RelativeTime {
    let remaining_ms = remaining_ms.max(0);

    if remaining_ms < MS_PER_HOUR {
        RelativeTime {
            value: ceil_div(remaining_ms, MS_PER_MINUTE).max(1),
            unit: TimeUnit::Minute,
        }
    } else if remaining_ms < MS_PER_DAY {
        RelativeTime {
            value: ceil_div(remaining_ms, MS_PER_HOUR),
            unit: TimeUnit::Hour,
        }
    } else {
        RelativeTime {
            value: ceil_div(remaining_ms, MS_PER_DAY),
            unit: TimeUnit::Day,
        }
    }
}

/// English rendering, e.g. "in 5 minutes"
pub fn format_relative(time: RelativeTime) -> String {
    format!(
        "in {} {}{}",
        time.value,
        time.unit,
        if time.value == 1 { "" } else { "s" }
    )
}

fn ceil_div(n: i64, d: i64) -> i64 {
    n / d + (n % d != 0) as i64
}
