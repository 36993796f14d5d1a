//! Day-of-week derivation for schedule lookups.
//!
//! The engine indexes weekly schedules by its own day-of-week enum rather than
//! `chrono::Weekday` so that the 0 = Sunday numbering used by the booking
//! frontend is explicit in one place.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A day of the week, numbered 0 = Sunday through 6 = Saturday.
///
/// Derived deterministically from a calendar date; no timezone conversion is
/// involved because schedule dates are already local to the tenant.
///
/// # Example
///
/// ```
/// use availability_engine::models::DayOfWeek;
/// use chrono::NaiveDate;
///
/// // 2026-01-12 is a Monday
/// let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(DayOfWeek::from_date(date), DayOfWeek::Monday);
/// assert_eq!(DayOfWeek::Monday.index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Sunday, index 0.
    Sunday,
    /// Monday, index 1.
    Monday,
    /// Tuesday, index 2.
    Tuesday,
    /// Wednesday, index 3.
    Wednesday,
    /// Thursday, index 4.
    Thursday,
    /// Friday, index 5.
    Friday,
    /// Saturday, index 6.
    Saturday,
}

impl DayOfWeek {
    /// All days in index order, Sunday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Derives the day of week for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        // num_days_from_sunday is 0 for Sunday, matching our numbering.
        Self::ALL[date.weekday().num_days_from_sunday() as usize]
    }

    /// Looks up a day by its 0 = Sunday index.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Returns the 0 = Sunday index of this day.
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        };
        write!(f, "{}", name)
    }
}
