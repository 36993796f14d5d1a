//! Configuration types for a tenant's booking settings.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML configuration files. The engine itself is agnostic to the persistent
//! format; these types are the boundary where that format becomes domain data.

use serde::Deserialize;

use crate::models::{BookingWindowRule, BusinessHours, StaffSchedule};

/// Tenant-level settings from `tenant.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantConfig {
    /// The display name of the salon.
    pub name: String,
    /// The tenant's open/close window and slot granularity.
    #[serde(default)]
    pub business_hours: BusinessHours,
    /// Booking-window rules for this tenant.
    #[serde(default)]
    pub booking_window: BookingWindowRule,
}

/// One staff member from a `staff/*.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffMember {
    /// Unique identifier for the staff member within the tenant.
    pub id: String,
    /// The staff member's display name.
    pub name: String,
    /// The staff member's schedule.
    ///
    /// Absent for staff whose availability is not gated; the working-time
    /// predicate fails open for them.
    #[serde(default)]
    pub schedule: Option<StaffSchedule>,
}
