//! Core data models for the availability engine.
//!
//! This module contains all the domain value types used throughout the engine.
//! Every entity here is an immutable, read-only snapshot; the engine never
//! mutates or persists them.

mod day_of_week;
mod schedule;
mod tenant;
mod time;

pub use day_of_week::DayOfWeek;
pub use schedule::{ExceptionKind, ScheduleException, StaffSchedule, WeeklyScheduleEntry};
pub use tenant::{BookingWindowRule, BusinessHours};
pub use time::{MINUTES_PER_DAY, ParseTimeOfDayError, TimeOfDay};
