//! Staff schedule model: recurring weekly pattern plus dated exceptions.
//!
//! All schedule data is an immutable, read-only snapshot supplied per
//! evaluation call by the configuration store; the engine never mutates or
//! persists it.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day_of_week::DayOfWeek;
use super::time::TimeOfDay;

/// The configured working pattern for one day of the week.
///
/// When `enabled` is false the remaining fields are ignored, so a disabled day
/// carries whatever bounds the frontend last saved without being re-checked.
///
/// # Example
///
/// ```
/// use availability_engine::models::WeeklyScheduleEntry;
///
/// let entry = WeeklyScheduleEntry {
///     enabled: true,
///     start: "10:00".parse().unwrap(),
///     end: "19:00".parse().unwrap(),
///     break_start: Some("13:00".parse().unwrap()),
///     break_end: Some("14:00".parse().unwrap()),
/// };
/// assert!(entry.break_bounds().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyScheduleEntry {
    /// Whether the staff member works on this day at all.
    pub enabled: bool,
    /// Start of the working interval (inclusive).
    #[serde(default = "default_bound")]
    pub start: TimeOfDay,
    /// End of the working interval (exclusive).
    #[serde(default = "default_bound")]
    pub end: TimeOfDay,
    /// Start of the mid-day break, if any (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_start: Option<TimeOfDay>,
    /// End of the mid-day break, if any (exclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_end: Option<TimeOfDay>,
}

impl WeeklyScheduleEntry {
    /// Returns the break bounds when both are configured.
    ///
    /// A one-sided break (only one bound set) yields `None`; validation
    /// rejects such entries at configuration time, and evaluation treats them
    /// as break-less rather than guessing.
    pub fn break_bounds(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        match (self.break_start, self.break_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

impl Default for WeeklyScheduleEntry {
    /// A disabled day with zeroed bounds, the state a fresh schedule starts in.
    fn default() -> Self {
        WeeklyScheduleEntry {
            enabled: false,
            start: TimeOfDay::MIDNIGHT,
            end: TimeOfDay::MIDNIGHT,
            break_start: None,
            break_end: None,
        }
    }
}

/// Serde default for omitted schedule bounds.
fn default_bound() -> TimeOfDay {
    TimeOfDay::MIDNIGHT
}

/// What a dated exception does to that day's availability.
///
/// Modeled as a tagged union so that a future third kind (say, a half-day
/// holiday) is an exhaustive-match compile error rather than a silently
/// unmatched string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExceptionKind {
    /// The entire day is closed, overriding the weekly pattern.
    Off,
    /// A replacement working interval for that date only.
    Custom {
        /// Start of the replacement interval (inclusive).
        start: TimeOfDay,
        /// End of the replacement interval (exclusive).
        end: TimeOfDay,
        /// Start of the break inside the replacement interval, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        break_start: Option<TimeOfDay>,
        /// End of the break inside the replacement interval, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        break_end: Option<TimeOfDay>,
    },
}

/// A date-specific override of the weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleException {
    /// The exact calendar date this exception applies to.
    pub date: NaiveDate,
    /// What the exception does on that date.
    #[serde(flatten)]
    pub kind: ExceptionKind,
}

/// One staff member's full schedule: weekly pattern plus dated exceptions.
///
/// A day missing from `weekly` is treated as not working. Exceptions are
/// unique by date; if duplicates are ever supplied the last one wins, and
/// callers must not rely on any other ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffSchedule {
    /// The recurring weekly pattern, keyed by day of week.
    #[serde(default)]
    pub weekly: HashMap<DayOfWeek, WeeklyScheduleEntry>,
    /// Date-specific overrides of the weekly pattern.
    #[serde(default)]
    pub exceptions: Vec<ScheduleException>,
}

impl StaffSchedule {
    /// Looks up the weekly entry for a day of week.
    pub fn weekly_entry(&self, day: DayOfWeek) -> Option<&WeeklyScheduleEntry> {
        self.weekly.get(&day)
    }

    /// Looks up the exception for an exact date, if one is configured.
    ///
    /// Scans from the back so that the last-supplied exception wins when a
    /// date was configured twice.
    pub fn exception_on(&self, date: NaiveDate) -> Option<&ExceptionKind> {
        self.exceptions
            .iter()
            .rev()
            .find(|e| e.date == date)
            .map(|e| &e.kind)
    }
}
