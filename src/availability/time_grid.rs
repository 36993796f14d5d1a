//! Time-of-day grid generation for slot listings.
//!
//! Produces the evenly spaced booking-start candidates between a tenant's open
//! and close boundaries. The top boundary is inclusive when it lands exactly
//! on the grid: a salon open 10:00 to 18:30 with 30 minute steps offers an
//! 18:30 slot, unlike a typical half-open range. Existing slot listings depend
//! on this, so the boundary semantics must not change.

use crate::models::TimeOfDay;

/// Default opening boundary when a tenant has not configured hours.
pub const DEFAULT_OPEN: TimeOfDay = TimeOfDay {
    hour: 10,
    minute: 0,
};

/// Default closing boundary when a tenant has not configured hours.
pub const DEFAULT_CLOSE: TimeOfDay = TimeOfDay {
    hour: 20,
    minute: 0,
};

/// Default minutes between consecutive slots.
pub const DEFAULT_STEP_MINUTES: u32 = 30;

/// Generates every slot candidate from `open` to `close` in `step_minutes`
/// increments.
///
/// The sequence starts at `open`, is strictly increasing, and includes `close`
/// itself when `close` lands exactly on the grid. A zero step falls back to
/// [`DEFAULT_STEP_MINUTES`]. When `open > close` the grid is empty. The
/// result is recomputed fresh on every call.
///
/// # Example
///
/// ```
/// use availability_engine::availability::generate_time_grid;
///
/// let grid = generate_time_grid(
///     "10:00".parse().unwrap(),
///     "18:30".parse().unwrap(),
///     30,
/// );
/// assert_eq!(grid.len(), 19);
/// assert_eq!(grid.first().unwrap().to_string(), "10:00");
/// assert_eq!(grid.last().unwrap().to_string(), "18:30");
/// ```
pub fn generate_time_grid(open: TimeOfDay, close: TimeOfDay, step_minutes: u32) -> Vec<TimeOfDay> {
    let step = if step_minutes == 0 {
        DEFAULT_STEP_MINUTES
    } else {
        step_minutes
    };

    let close_minutes = close.to_minutes();
    let mut grid = Vec::new();
    let mut cursor = open.to_minutes();
    while cursor <= close_minutes {
        // The loop bound keeps cursor within a valid minute-of-day, so the
        // conversion cannot fail; a well-formed close is at most 23:59.
        if let Some(time) = TimeOfDay::from_minutes(cursor) {
            grid.push(time);
        }
        cursor += step;
    }
    grid
}

/// Generates the default 10:00 to 20:00 grid in 30 minute steps.
///
/// This is the fallback slot listing used when a tenant has no configured
/// business hours.
pub fn generate_default_time_grid() -> Vec<TimeOfDay> {
    generate_time_grid(DEFAULT_OPEN, DEFAULT_CLOSE, DEFAULT_STEP_MINUTES)
}

/// Generates the slot candidates strictly after `start`.
///
/// Used to offer end times for a reservation that begins at `start`: the
/// result is exactly the subsequence of [`generate_time_grid`] greater than
/// `start`.
///
/// # Example
///
/// ```
/// use availability_engine::availability::generate_end_time_grid;
///
/// let ends = generate_end_time_grid(
///     "19:00".parse().unwrap(),
///     "10:00".parse().unwrap(),
///     "20:00".parse().unwrap(),
///     30,
/// );
/// assert_eq!(ends.len(), 2); // 19:30 and 20:00
/// ```
pub fn generate_end_time_grid(
    start: TimeOfDay,
    open: TimeOfDay,
    close: TimeOfDay,
    step_minutes: u32,
) -> Vec<TimeOfDay> {
    generate_time_grid(open, close, step_minutes)
        .into_iter()
        .filter(|time| *time > start)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_grid_is_21_entries() {
        let grid = generate_default_time_grid();
        assert_eq!(grid.len(), 21);
        assert_eq!(grid[0], t("10:00"));
        assert_eq!(grid[20], t("20:00"));
    }

    #[test]
    fn test_grid_matches_fallback_slot_listing() {
        // Tenant open 10:00 to 18:30, step 30: exactly 19 offerable starts.
        let grid = generate_time_grid(t("10:00"), t("18:30"), 30);
        let rendered: Vec<String> = grid.iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered.len(), 19);
        assert_eq!(rendered[0], "10:00");
        assert_eq!(rendered[1], "10:30");
        assert_eq!(rendered[17], "18:00");
        assert_eq!(rendered[18], "18:30");
    }

    #[test]
    fn test_close_included_only_when_on_grid() {
        // 18:20 is not a multiple of 30 past 10:00, so the grid tops out at 18:00.
        let grid = generate_time_grid(t("10:00"), t("18:20"), 30);
        assert_eq!(*grid.last().unwrap(), t("18:00"));
    }

    #[test]
    fn test_grid_is_strictly_increasing() {
        let grid = generate_time_grid(t("09:00"), t("21:00"), 15);
        for pair in grid.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_zero_step_falls_back_to_default() {
        let grid = generate_time_grid(t("10:00"), t("12:00"), 0);
        assert_eq!(grid.len(), 5); // 10:00, 10:30, 11:00, 11:30, 12:00
    }

    #[test]
    fn test_open_equals_close_yields_single_slot() {
        let grid = generate_time_grid(t("10:00"), t("10:00"), 30);
        assert_eq!(grid, vec![t("10:00")]);
    }

    #[test]
    fn test_open_after_close_yields_empty_grid() {
        let grid = generate_time_grid(t("20:00"), t("10:00"), 30);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_end_time_grid_is_strictly_after_start() {
        let ends = generate_end_time_grid(t("18:30"), t("10:00"), t("20:00"), 30);
        assert_eq!(ends, vec![t("19:00"), t("19:30"), t("20:00")]);
    }

    #[test]
    fn test_end_time_grid_excludes_start_itself() {
        let ends = generate_end_time_grid(t("10:00"), t("10:00"), t("11:00"), 30);
        assert_eq!(ends, vec![t("10:30"), t("11:00")]);
    }

    #[test]
    fn test_end_time_grid_for_start_past_close_is_empty() {
        let ends = generate_end_time_grid(t("20:00"), t("10:00"), t("20:00"), 30);
        assert!(ends.is_empty());
    }

    #[test]
    fn test_grid_handles_uneven_step() {
        let grid = generate_time_grid(t("10:00"), t("11:00"), 45);
        assert_eq!(grid, vec![t("10:00"), t("10:45")]);
    }
}
