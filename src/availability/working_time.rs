//! The working-time predicate: is this staff member open for booking at a
//! given date and time?
//!
//! A pure, total function of its inputs with two outcomes. It raises no
//! errors: a schedule that would have failed validation still produces a
//! deterministic boolean, because validation runs at configuration write time
//! and the hot path stays allocation-free and exception-free.

use chrono::NaiveDate;

use crate::models::{DayOfWeek, ExceptionKind, StaffSchedule, TimeOfDay};

/// Decides whether `time` on `date` is open for booking under `schedule`.
///
/// The rules are evaluated in order and the first match decides:
///
/// 1. No schedule at all: `true`. Unscheduled staff are always available.
///    This fail-open default is deliberate; callers gating staff on a real
///    schedule must never pass `None` for them.
/// 2. An exception configured for exactly `date` overrides the weekly
///    pattern: `off` closes the whole day, `custom` replaces the working
///    interval for that date only.
/// 3. No weekly entry for the date's day of week, or a disabled entry:
///    `false`.
/// 4. Otherwise the weekly entry decides.
///
/// Within either source the interval is start-inclusive and end-exclusive,
/// and a configured break carves out `[break_start, break_end)` from the
/// otherwise-open interval.
///
/// # Example
///
/// ```
/// use availability_engine::availability::is_working_time;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
/// let noon = "12:00".parse().unwrap();
/// // Absent schedule: fail open.
/// assert!(is_working_time(date, noon, None));
/// ```
pub fn is_working_time(
    date: NaiveDate,
    time: TimeOfDay,
    schedule: Option<&StaffSchedule>,
) -> bool {
    let Some(schedule) = schedule else {
        return true;
    };

    if let Some(kind) = schedule.exception_on(date) {
        return match kind {
            ExceptionKind::Off => false,
            ExceptionKind::Custom {
                start,
                end,
                break_start,
                break_end,
            } => {
                let break_bounds = match (break_start, break_end) {
                    (Some(bs), Some(be)) => Some((*bs, *be)),
                    _ => None,
                };
                within_working_window(time, *start, *end, break_bounds)
            }
        };
    }

    match schedule.weekly_entry(DayOfWeek::from_date(date)) {
        Some(entry) if entry.enabled => {
            within_working_window(time, entry.start, entry.end, entry.break_bounds())
        }
        _ => false,
    }
}

/// Interval membership with the engine's boundary semantics: inside
/// `[start, end)`, outside `[break_start, break_end)`.
fn within_working_window(
    time: TimeOfDay,
    start: TimeOfDay,
    end: TimeOfDay,
    break_bounds: Option<(TimeOfDay, TimeOfDay)>,
) -> bool {
    let minutes = time.to_minutes();
    if minutes < start.to_minutes() || minutes >= end.to_minutes() {
        return false;
    }
    if let Some((break_start, break_end)) = break_bounds {
        if minutes >= break_start.to_minutes() && minutes < break_end.to_minutes() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScheduleException, WeeklyScheduleEntry};
    use std::collections::HashMap;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Monday 10:00 to 19:00 with a 13:00 to 14:00 break.
    fn monday_schedule() -> StaffSchedule {
        StaffSchedule {
            weekly: HashMap::from([(
                DayOfWeek::Monday,
                WeeklyScheduleEntry {
                    enabled: true,
                    start: t("10:00"),
                    end: t("19:00"),
                    break_start: Some(t("13:00")),
                    break_end: Some(t("14:00")),
                },
            )]),
            exceptions: vec![],
        }
    }

    // 2026-02-02 is a Monday.
    const MONDAY: &str = "2026-02-02";

    #[test]
    fn test_absent_schedule_is_always_working() {
        assert!(is_working_time(make_date(MONDAY), t("03:00"), None));
        assert!(is_working_time(make_date("2026-02-08"), t("23:59"), None));
    }

    #[test]
    fn test_weekly_entry_start_inclusive_end_exclusive() {
        let schedule = monday_schedule();
        let date = make_date(MONDAY);
        assert!(is_working_time(date, t("10:00"), Some(&schedule)));
        assert!(is_working_time(date, t("18:59"), Some(&schedule)));
        assert!(!is_working_time(date, t("19:00"), Some(&schedule)));
        assert!(!is_working_time(date, t("09:59"), Some(&schedule)));
    }

    #[test]
    fn test_break_carve_out_boundaries() {
        let schedule = monday_schedule();
        let date = make_date(MONDAY);
        assert!(is_working_time(date, t("12:59"), Some(&schedule)));
        assert!(!is_working_time(date, t("13:00"), Some(&schedule)));
        assert!(!is_working_time(date, t("13:30"), Some(&schedule)));
        assert!(is_working_time(date, t("14:00"), Some(&schedule)));
    }

    #[test]
    fn test_day_without_weekly_entry_is_closed() {
        let schedule = monday_schedule();
        // 2026-02-03 is a Tuesday, which has no entry.
        assert!(!is_working_time(
            make_date("2026-02-03"),
            t("12:00"),
            Some(&schedule)
        ));
    }

    #[test]
    fn test_disabled_weekly_entry_is_closed() {
        let mut schedule = monday_schedule();
        schedule
            .weekly
            .insert(DayOfWeek::Tuesday, WeeklyScheduleEntry::default());
        assert!(!is_working_time(
            make_date("2026-02-03"),
            t("12:00"),
            Some(&schedule)
        ));
    }

    #[test]
    fn test_off_exception_overrides_weekly_pattern() {
        let mut schedule = monday_schedule();
        schedule.exceptions.push(ScheduleException {
            date: make_date(MONDAY),
            kind: ExceptionKind::Off,
        });
        // Weekly says open at noon; the exception closes the whole day.
        assert!(!is_working_time(make_date(MONDAY), t("12:00"), Some(&schedule)));
        // The following Monday is unaffected.
        assert!(is_working_time(
            make_date("2026-02-09"),
            t("12:00"),
            Some(&schedule)
        ));
    }

    #[test]
    fn test_custom_exception_replaces_weekly_interval() {
        let mut schedule = monday_schedule();
        schedule.exceptions.push(ScheduleException {
            date: make_date(MONDAY),
            kind: ExceptionKind::Custom {
                start: t("15:00"),
                end: t("18:00"),
                break_start: None,
                break_end: None,
            },
        });
        let date = make_date(MONDAY);
        // Weekly would be open at noon; the custom interval is not.
        assert!(!is_working_time(date, t("12:00"), Some(&schedule)));
        assert!(is_working_time(date, t("15:00"), Some(&schedule)));
        assert!(is_working_time(date, t("17:59"), Some(&schedule)));
        assert!(!is_working_time(date, t("18:00"), Some(&schedule)));
    }

    #[test]
    fn test_custom_exception_break_boundaries() {
        let schedule = StaffSchedule {
            weekly: HashMap::new(),
            exceptions: vec![ScheduleException {
                date: make_date("2026-02-14"),
                kind: ExceptionKind::Custom {
                    start: t("12:00"),
                    end: t("17:00"),
                    break_start: Some(t("14:00")),
                    break_end: Some(t("14:30")),
                },
            }],
        };
        let date = make_date("2026-02-14");
        assert!(is_working_time(date, t("13:59"), Some(&schedule)));
        assert!(!is_working_time(date, t("14:00"), Some(&schedule)));
        assert!(!is_working_time(date, t("14:29"), Some(&schedule)));
        assert!(is_working_time(date, t("14:30"), Some(&schedule)));
    }

    #[test]
    fn test_custom_exception_opens_an_otherwise_closed_day() {
        // No weekly entry for Saturday; a custom exception opens that date only.
        let schedule = StaffSchedule {
            weekly: HashMap::new(),
            exceptions: vec![ScheduleException {
                date: make_date("2026-02-14"),
                kind: ExceptionKind::Custom {
                    start: t("12:00"),
                    end: t("17:00"),
                    break_start: None,
                    break_end: None,
                },
            }],
        };
        assert!(is_working_time(
            make_date("2026-02-14"),
            t("12:00"),
            Some(&schedule)
        ));
        // The next Saturday has no exception and no weekly entry.
        assert!(!is_working_time(
            make_date("2026-02-21"),
            t("12:00"),
            Some(&schedule)
        ));
    }

    #[test]
    fn test_duplicate_exceptions_last_write_wins() {
        let date = make_date(MONDAY);
        let mut schedule = monday_schedule();
        schedule.exceptions.push(ScheduleException {
            date,
            kind: ExceptionKind::Off,
        });
        schedule.exceptions.push(ScheduleException {
            date,
            kind: ExceptionKind::Custom {
                start: t("11:00"),
                end: t("15:00"),
                break_start: None,
                break_end: None,
            },
        });
        assert!(is_working_time(date, t("11:00"), Some(&schedule)));
        assert!(!is_working_time(date, t("15:00"), Some(&schedule)));
    }

    #[test]
    fn test_one_sided_custom_break_is_treated_as_no_break() {
        // Would fail validation; evaluation stays deterministic and ignores it.
        let schedule = StaffSchedule {
            weekly: HashMap::new(),
            exceptions: vec![ScheduleException {
                date: make_date("2026-02-14"),
                kind: ExceptionKind::Custom {
                    start: t("12:00"),
                    end: t("17:00"),
                    break_start: Some(t("14:00")),
                    break_end: None,
                },
            }],
        };
        assert!(is_working_time(
            make_date("2026-02-14"),
            t("14:15"),
            Some(&schedule)
        ));
    }

    #[test]
    fn test_inverted_interval_is_simply_never_open() {
        // Garbage in (would fail validation): deterministic false, no panic.
        let schedule = StaffSchedule {
            weekly: HashMap::from([(
                DayOfWeek::Monday,
                WeeklyScheduleEntry {
                    enabled: true,
                    start: t("19:00"),
                    end: t("10:00"),
                    break_start: None,
                    break_end: None,
                },
            )]),
            exceptions: vec![],
        };
        for time in ["00:00", "10:00", "12:00", "19:00", "23:59"] {
            assert!(!is_working_time(make_date(MONDAY), t(time), Some(&schedule)));
        }
    }
}
