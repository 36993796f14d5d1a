//! Structural validation of configured schedules.
//!
//! These checks run at configuration write time and block persistence of a
//! malformed schedule. The availability predicate deliberately does not
//! re-run them: evaluation is a total, error-free function, and garbage in
//! simply produces a deterministic boolean out.

use crate::error::ScheduleValidationError;
use crate::models::{DayOfWeek, ExceptionKind, StaffSchedule, TimeOfDay, WeeklyScheduleEntry};

/// Returns true when the working interval is well-formed (`start < end`).
pub fn validate_interval(start: TimeOfDay, end: TimeOfDay) -> bool {
    start.to_minutes() < end.to_minutes()
}

/// Returns true when the optional break is well-formed for the interval.
///
/// No break at all is valid. A configured break must sit strictly inside the
/// working interval: `start < break_start < break_end < end`, touching
/// neither boundary. Supplying only one break bound is invalid.
pub fn validate_break(
    start: TimeOfDay,
    end: TimeOfDay,
    break_start: Option<TimeOfDay>,
    break_end: Option<TimeOfDay>,
) -> bool {
    match (break_start, break_end) {
        (None, None) => true,
        (Some(bs), Some(be)) => {
            start.to_minutes() < bs.to_minutes()
                && bs.to_minutes() < be.to_minutes()
                && be.to_minutes() < end.to_minutes()
        }
        _ => false,
    }
}

/// Validates one weekly schedule entry.
///
/// Disabled days always pass; their bounds are never evaluated. For enabled
/// days the checks run in order and the first failure wins, so exactly one
/// rejection reason is reported per call:
///
/// 1. [`ScheduleValidationError::InvalidInterval`] when the working interval
///    is not well-formed;
/// 2. [`ScheduleValidationError::IncompleteBreak`] when exactly one break
///    bound is set;
/// 3. [`ScheduleValidationError::InvalidBreak`] when both bounds are set but
///    the break is not strictly nested inside the interval.
///
/// # Example
///
/// ```
/// use availability_engine::availability::validate_schedule_entry;
/// use availability_engine::error::ScheduleValidationError;
/// use availability_engine::models::WeeklyScheduleEntry;
///
/// let entry = WeeklyScheduleEntry {
///     enabled: true,
///     start: "19:00".parse().unwrap(),
///     end: "10:00".parse().unwrap(),
///     break_start: None,
///     break_end: None,
/// };
/// assert!(matches!(
///     validate_schedule_entry(&entry),
///     Err(ScheduleValidationError::InvalidInterval { .. })
/// ));
/// ```
pub fn validate_schedule_entry(
    entry: &WeeklyScheduleEntry,
) -> Result<(), ScheduleValidationError> {
    if !entry.enabled {
        return Ok(());
    }
    validate_working_interval(
        entry.start,
        entry.end,
        entry.break_start,
        entry.break_end,
    )
}

/// Validates a dated exception.
///
/// An `off` day has nothing to check. A `custom` interval obeys the same
/// rules as a weekly entry.
pub fn validate_exception(kind: &ExceptionKind) -> Result<(), ScheduleValidationError> {
    match kind {
        ExceptionKind::Off => Ok(()),
        ExceptionKind::Custom {
            start,
            end,
            break_start,
            break_end,
        } => validate_working_interval(*start, *end, *break_start, *break_end),
    }
}

/// Validates a full staff schedule: every weekly entry, then every exception.
///
/// Weekly entries are checked in day order (Sunday first) and exceptions in
/// their configured order; the first failure is returned. This is the gate a
/// configuration store must pass before persisting a schedule.
pub fn validate_staff_schedule(schedule: &StaffSchedule) -> Result<(), ScheduleValidationError> {
    for day in DayOfWeek::ALL {
        if let Some(entry) = schedule.weekly_entry(day) {
            validate_schedule_entry(entry)?;
        }
    }
    for exception in &schedule.exceptions {
        validate_exception(&exception.kind)?;
    }
    Ok(())
}

/// Shared interval-plus-break check behind the entry and exception variants.
fn validate_working_interval(
    start: TimeOfDay,
    end: TimeOfDay,
    break_start: Option<TimeOfDay>,
    break_end: Option<TimeOfDay>,
) -> Result<(), ScheduleValidationError> {
    if !validate_interval(start, end) {
        return Err(ScheduleValidationError::InvalidInterval { start, end });
    }
    match (break_start, break_end) {
        (None, None) => Ok(()),
        (Some(_), None) | (None, Some(_)) => Err(ScheduleValidationError::IncompleteBreak),
        (Some(bs), Some(be)) => {
            if validate_break(start, end, Some(bs), Some(be)) {
                Ok(())
            } else {
                Err(ScheduleValidationError::InvalidBreak {
                    start,
                    end,
                    break_start: bs,
                    break_end: be,
                })
            }
        }
    }
}
