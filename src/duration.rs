//! Video timestamp → short duration text ("00:01:23.456" -> "1m 23s").

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timestamp {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimestampError {
    /// Input did not split into exactly three `:`-separated parts.
    PartCount(usize),
    Hours,
    Minutes,
    Seconds,
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampError::PartCount(n) => write!(f, "expected 3 timestamp parts, got {}", n),
            TimestampError::Hours => write!(f, "hours field is not an integer"),
            TimestampError::Minutes => write!(f, "minutes field is not an integer"),
            TimestampError::Seconds => write!(f, "seconds field is not a number in range"),
        }
    }
}

impl std::error::Error for TimestampError {}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [h, m, sec] = parts.as_slice() else {
            return Err(TimestampError::PartCount(parts.len()));
        };
        let hours = h.trim().parse::<i64>().map_err(|_| TimestampError::Hours)?;
        let minutes = m.trim().parse::<i64>().map_err(|_| TimestampError::Minutes)?;
        // f64 parsing also accepts "inf"/"NaN", which we treat as garbage.
        // Rounded seconds must fit an i64 or the display would saturate.
        let seconds = sec
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .filter(|v| v.round().abs() < i64::MAX as f64)
            .ok_or(TimestampError::Seconds)?;
        Ok(Timestamp {
            hours,
            minutes,
            seconds,
        })
    }
}

impl Timestamp {
    /// Seconds rounded half away from zero. Never carried into minutes.
    pub fn rounded_seconds(&self) -> i64 {
        self.seconds.round() as i64
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{}h ", self.hours)?;
        }
        // keep "0m" once hours are shown so the segments stay positional
        if self.minutes > 0 || self.hours > 0 {
            write!(f, "{}m ", self.minutes)?;
        }
        write!(f, "{}s", self.rounded_seconds())
    }
}

/// Formats a `HH:MM:SS[.fff]` timestamp. Anything that does not parse is
/// returned unchanged.
pub fn format_timestamp(timestamp: &str) -> String {
    match timestamp.parse::<Timestamp>() {
        Ok(ts) => ts.to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Formats every sighting timestamp of a fish, in order.
pub fn format_timestamps<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|t| format_timestamp(t.as_ref())).collect()
}
