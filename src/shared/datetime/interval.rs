use std::fmt;
use std::str::FromStr;

use crate::engine::errors::TimechartError;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Unit of a timechart span such as `span=5m`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Microsecond,
    Millisecond,
    Centisecond,
    Decisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
}

impl TimeUnit {
    /// Length of `count` units in milliseconds.
    ///
    /// Months are 30 days and quarters 120 days. Microseconds resolve to 0
    /// because timestamps are stored at millisecond resolution.
    pub fn interval_millis(&self, count: u64) -> u64 {
        let unit = match self {
            TimeUnit::Microsecond => 0,
            TimeUnit::Millisecond => 1,
            TimeUnit::Centisecond => 10,
            TimeUnit::Decisecond => 100,
            TimeUnit::Second => MILLIS_PER_SECOND,
            TimeUnit::Minute => MILLIS_PER_MINUTE,
            TimeUnit::Hour => MILLIS_PER_HOUR,
            TimeUnit::Day => MILLIS_PER_DAY,
            TimeUnit::Week => 7 * MILLIS_PER_DAY,
            TimeUnit::Month => 30 * MILLIS_PER_DAY,
            TimeUnit::Quarter => 120 * MILLIS_PER_DAY,
        };
        count.saturating_mul(unit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Microsecond => "us",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Centisecond => "cs",
            TimeUnit::Decisecond => "ds",
            TimeUnit::Second => "s",
            TimeUnit::Minute => "m",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "d",
            TimeUnit::Week => "w",
            TimeUnit::Month => "mon",
            TimeUnit::Quarter => "q",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = TimechartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "us" | "microsecond" | "microseconds" => TimeUnit::Microsecond,
            "ms" | "millisecond" | "milliseconds" => TimeUnit::Millisecond,
            "cs" | "centisecond" | "centiseconds" => TimeUnit::Centisecond,
            "ds" | "decisecond" | "deciseconds" => TimeUnit::Decisecond,
            "s" | "sec" | "secs" | "second" | "seconds" => TimeUnit::Second,
            "m" | "min" | "mins" | "minute" | "minutes" => TimeUnit::Minute,
            "h" | "hr" | "hrs" | "hour" | "hours" => TimeUnit::Hour,
            "d" | "day" | "days" => TimeUnit::Day,
            "w" | "week" | "weeks" => TimeUnit::Week,
            "mon" | "month" | "months" => TimeUnit::Month,
            "q" | "qtr" | "qtrs" | "quarter" | "quarters" => TimeUnit::Quarter,
            other => return Err(TimechartError::UnknownTimeUnit(other.to_string())),
        };
        Ok(unit)
    }
}
