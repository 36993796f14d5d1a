//! Request types for the availability engine API.
//!
//! This module defines the JSON request structures for the slot-listing and
//! schedule-validation endpoints. Times cross this boundary as zero-padded
//! `HH:mm` strings and dates as `YYYY-MM-DD`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::StaffSchedule;

/// Request body for the `POST /slots` endpoint.
///
/// Asks for the bookable slots of one staff member on one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotQueryRequest {
    /// The staff member whose availability is being resolved.
    pub staff_id: String,
    /// The calendar date to list slots for.
    pub date: NaiveDate,
    /// Optional override of the tenant's slot step, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_minutes: Option<u32>,
    /// The booking wall-clock "now" used for cutoff and horizon rules.
    ///
    /// Defaults to the current time at the tenant's fixed UTC+9 offset.
    /// Supplying it explicitly makes responses reproducible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now: Option<NaiveDateTime>,
}

/// Request body for the `POST /schedule/validate` endpoint.
///
/// Carries a full staff schedule as the configuration frontend would persist
/// it; a rejection here must block that persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleValidationRequest {
    /// The schedule to validate.
    pub schedule: StaffSchedule,
}
