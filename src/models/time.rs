//! Wall-clock time representation.
//!
//! Agenda data uses minute precision; a [`TimeOfDay`] is the number of
//! minutes since midnight and serializes as `"HH:MM"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of minutes in a day; valid [`TimeOfDay`] values are below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error raised when constructing a [`TimeOfDay`] from invalid input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeOfDayError {
    /// Minute value outside `0..1440`
    #[error("minutes-since-midnight value {0} is out of range (0..{MINUTES_PER_DAY})")]
    OutOfRange(u32),
    /// String that does not parse as `HH:MM`
    #[error("invalid time literal {0:?}, expected \"HH:MM\"")]
    Malformed(String),
}

/// Wall-clock time with minute precision.
///
/// Invariant: the wrapped value is always `< 1440`. Serde uses the `"HH:MM"`
/// string form, so out-of-range or malformed times are rejected at the
/// deserialization boundary and never reach the availability computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight (00:00).
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Create from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> Result<Self, TimeOfDayError> {
        if minutes < u32::from(MINUTES_PER_DAY) {
            Ok(Self(minutes as u16))
        } else {
            Err(TimeOfDayError::OutOfRange(minutes))
        }
    }

    /// Create from hour and minute components.
    ///
    /// # Panics
    /// Panics if `hour > 23` or `minute > 59`. Intended for literals in code
    /// and tests; parse user input through [`FromStr`] instead.
    pub fn from_hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60, "invalid wall-clock literal");
        Self(hour * 60 + minute)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Whole minutes from `self` to `later`, or 0 if `later` is not after.
    pub fn minutes_until(&self, later: TimeOfDay) -> u32 {
        u32::from(later.0.saturating_sub(self.0))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeOfDayError::Malformed(s.to_string());
        let (hh, mm) = s.split_once(':').ok_or_else(malformed)?;
        let hour: u16 = hh.parse().map_err(|_| malformed())?;
        let minute: u16 = mm.parse().map_err(|_| malformed())?;
        if hour > 23 || minute > 59 {
            return Err(malformed());
        }
        Ok(Self(hour * 60 + minute))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeOfDayError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}
