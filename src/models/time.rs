//! Wall-clock time-of-day value type.
//!
//! `TimeOfDay` is the canonical time representation at every boundary of the
//! engine: `HH:mm`, 24-hour, zero-padded, no timezone suffix. The textual form
//! is a compatibility contract with callers and must round-trip losslessly
//! through the minute-of-day conversions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock value with hour in [0,23] and minute in [0,59].
///
/// Immutable value type, ordered chronologically. Canonically represented as
/// zero-padded `HH:mm` text and interconvertible with an integer minute-of-day
/// in [0,1439].
///
/// # Example
///
/// ```
/// use availability_engine::models::TimeOfDay;
///
/// let t: TimeOfDay = "09:30".parse().unwrap();
/// assert_eq!(t.to_minutes(), 570);
/// assert_eq!(TimeOfDay::from_minutes(570), Some(t));
/// assert_eq!(t.to_string(), "09:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    /// The hour component, 0 through 23.
    pub hour: u8,
    /// The minute component, 0 through 59.
    pub minute: u8,
}

impl TimeOfDay {
    /// Midnight, the first instant of the day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Creates a time of day, rejecting out-of-range components.
    ///
    /// # Example
    ///
    /// ```
    /// use availability_engine::models::TimeOfDay;
    ///
    /// assert!(TimeOfDay::new(23, 59).is_some());
    /// assert!(TimeOfDay::new(24, 0).is_none());
    /// assert!(TimeOfDay::new(12, 60).is_none());
    /// ```
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(TimeOfDay { hour, minute })
        } else {
            None
        }
    }

    /// Converts this time to its minute-of-day value (`hour * 60 + minute`).
    ///
    /// Total for well-formed values; the result lies in [0,1439].
    pub fn to_minutes(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Converts a minute-of-day value back to a time of day.
    ///
    /// Defined for inputs in [0,1439]; out-of-range input is rejected with
    /// `None` rather than wrapped or clamped, so a caller arithmetic slip
    /// (e.g. stepping past midnight) surfaces instead of silently producing
    /// the wrong slot.
    ///
    /// # Example
    ///
    /// ```
    /// use availability_engine::models::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::from_minutes(1439).unwrap().to_string(), "23:59");
    /// assert_eq!(TimeOfDay::from_minutes(1440), None);
    /// ```
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(TimeOfDay {
                hour: (minutes / 60) as u8,
                minute: (minutes % 60) as u8,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Error returned when parsing a `HH:mm` string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time of day '{input}', expected zero-padded 24-hour HH:mm")]
pub struct ParseTimeOfDayError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeOfDayError;

    /// Parses the canonical zero-padded `HH:mm` form.
    ///
    /// The format is strict: exactly two digits, a colon, two digits. Loose
    /// forms like `9:30` are rejected so that every accepted value re-renders
    /// byte-identically.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || ParseTimeOfDayError {
            input: s.to_string(),
        };

        let (hh, mm) = s.split_once(':').ok_or_else(reject)?;
        if hh.len() != 2
            || mm.len() != 2
            || !hh.bytes().all(|b| b.is_ascii_digit())
            || !mm.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(reject());
        }

        let hour: u8 = hh.parse().map_err(|_| reject())?;
        let minute: u8 = mm.parse().map_err(|_| reject())?;
        TimeOfDay::new(hour, minute).ok_or_else(reject)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
