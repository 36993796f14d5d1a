//! Bookable-slot listing: the consumer of the time grid and the working-time
//! predicate.
//!
//! A listing is the tenant's slot grid with each candidate annotated as
//! available or not for one staff member on one date. Booking-window rules
//! (cutoff minutes, public-days horizon) are applied as a separate pass so the
//! annotation itself stays a pure function of schedule data.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::{BookingWindowRule, BusinessHours, MINUTES_PER_DAY, StaffSchedule, TimeOfDay};

use super::time_grid::generate_time_grid;
use super::working_time::is_working_time;

/// A discrete offerable booking start time with its availability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// The slot's start time.
    pub time: TimeOfDay,
    /// Whether this slot can currently be offered.
    pub available: bool,
}

/// Lists the tenant's slot grid for `date`, annotated with the staff member's
/// availability.
///
/// The grid is the tenant's open/close window at its configured step (a zero
/// step falls back to 30 minutes); each candidate is passed through
/// [`is_working_time`]. An absent schedule therefore marks every slot
/// available, matching the predicate's fail-open rule.
///
/// # Example
///
/// ```
/// use availability_engine::availability::list_slots;
/// use availability_engine::models::BusinessHours;
/// use chrono::NaiveDate;
///
/// let hours = BusinessHours::default();
/// let date = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
/// let slots = list_slots(date, &hours, None);
/// assert_eq!(slots.len(), 21);
/// assert!(slots.iter().all(|s| s.available));
/// ```
pub fn list_slots(
    date: NaiveDate,
    hours: &BusinessHours,
    schedule: Option<&StaffSchedule>,
) -> Vec<Slot> {
    generate_time_grid(hours.open, hours.close, hours.slot_minutes)
        .into_iter()
        .map(|time| Slot {
            time,
            available: is_working_time(date, time, schedule),
        })
        .collect()
}

/// Applies the tenant's booking-window rules to an annotated slot listing.
///
/// A slot that is already unavailable stays unavailable. An available slot is
/// withdrawn when:
///
/// - `date` lies further than `public_days` days past `now`'s date (the
///   public horizon), or
/// - the slot starts fewer than `cutoff_minutes` minutes after `now`
///   (including slots already in the past).
///
/// `now` is an explicit argument rather than a clock read so the engine stays
/// a pure function; the HTTP layer supplies the tenant-local wall-clock time.
pub fn apply_booking_window(
    slots: Vec<Slot>,
    date: NaiveDate,
    rule: &BookingWindowRule,
    now: NaiveDateTime,
) -> Vec<Slot> {
    let beyond_horizon = (date - now.date()).num_days() > i64::from(rule.public_days);

    slots
        .into_iter()
        .map(|slot| {
            let available = slot.available
                && !beyond_horizon
                && lead_minutes(date, slot.time, now) >= i64::from(rule.cutoff_minutes);
            Slot { available, ..slot }
        })
        .collect()
}

/// Decides whether a reservation starting at `date`/`time` may still be
/// cancelled at `now` under the tenant's cancellation cutoff.
pub fn is_cancellable(
    date: NaiveDate,
    time: TimeOfDay,
    rule: &BookingWindowRule,
    now: NaiveDateTime,
) -> bool {
    lead_minutes(date, time, now) >= i64::from(rule.cancel_minutes)
}

/// Whole minutes from `now` until `time` on `date`. Negative when already past.
fn lead_minutes(date: NaiveDate, time: TimeOfDay, now: NaiveDateTime) -> i64 {
    let day_diff = (date - now.date()).num_days();
    let now_minutes = i64::from(now.time().num_seconds_from_midnight() / 60);
    day_diff * i64::from(MINUTES_PER_DAY) + i64::from(time.to_minutes()) - now_minutes
}
