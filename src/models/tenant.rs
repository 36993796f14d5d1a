//! Tenant-level booking settings consumed by the slot-listing collaborator.

use serde::{Deserialize, Serialize};

use super::time::TimeOfDay;

/// A tenant's open/close window and slot granularity.
///
/// Used for tenant-wide slot generation; individual staff availability is
/// layered on top by the working-time predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    /// Opening time (first offerable slot).
    pub open: TimeOfDay,
    /// Closing time (last offerable slot when it lands exactly on the grid).
    pub close: TimeOfDay,
    /// Minutes between consecutive slots. Zero falls back to the default step.
    #[serde(default)]
    pub slot_minutes: u32,
}

impl Default for BusinessHours {
    /// The fallback window used when a tenant has not configured hours:
    /// 10:00 to 20:00 in 30 minute steps.
    fn default() -> Self {
        BusinessHours {
            open: TimeOfDay {
                hour: 10,
                minute: 0,
            },
            close: TimeOfDay {
                hour: 20,
                minute: 0,
            },
            slot_minutes: 30,
        }
    }
}

/// Booking-window rules restricting how close to a slot a reservation or
/// cancellation may occur, and how far ahead slots are published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindowRule {
    /// Minimum minutes between booking time and slot start.
    #[serde(default = "default_cutoff_minutes")]
    pub cutoff_minutes: u32,
    /// Minimum minutes between cancellation time and slot start.
    #[serde(default = "default_cancel_minutes")]
    pub cancel_minutes: u32,
    /// How many days ahead of today slots are offered to the public.
    #[serde(default = "default_public_days")]
    pub public_days: u32,
}

fn default_cutoff_minutes() -> u32 {
    60
}

fn default_cancel_minutes() -> u32 {
    1440
}

fn default_public_days() -> u32 {
    30
}

impl Default for BookingWindowRule {
    fn default() -> Self {
        BookingWindowRule {
            cutoff_minutes: default_cutoff_minutes(),
            cancel_minutes: default_cancel_minutes(),
            public_days: default_public_days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_hours_default_window() {
        let hours = BusinessHours::default();
        assert_eq!(hours.open.to_string(), "10:00");
        assert_eq!(hours.close.to_string(), "20:00");
        assert_eq!(hours.slot_minutes, 30);
    }

    #[test]
    fn test_business_hours_deserialization() {
        let hours: BusinessHours = serde_json::from_str(
            r#"{"open": "10:00", "close": "18:30", "slot_minutes": 30}"#,
        )
        .unwrap();
        assert_eq!(hours.close.to_string(), "18:30");
    }

    #[test]
    fn test_booking_window_defaults_apply_per_field() {
        let rule: BookingWindowRule =
            serde_json::from_str(r#"{"cutoff_minutes": 120}"#).unwrap();
        assert_eq!(rule.cutoff_minutes, 120);
        assert_eq!(rule.cancel_minutes, 1440);
        assert_eq!(rule.public_days, 30);
    }

    #[test]
    fn test_booking_window_default() {
        let rule = BookingWindowRule::default();
        assert_eq!(rule.cutoff_minutes, 60);
        assert_eq!(rule.cancel_minutes, 1440);
        assert_eq!(rule.public_days, 30);
    }
}
