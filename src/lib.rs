//! Staff Availability Engine for multi-tenant salon booking
//!
//! This crate decides, for a given salon tenant, staff member, calendar date and
//! clock time, whether that moment is open for booking, and turns business hours,
//! per-staff weekly schedules and calendar exceptions into a concrete, orderable
//! list of offerable time slots.

#![warn(missing_docs)]

pub mod api;
pub mod availability;
pub mod config;
pub mod error;
pub mod models;
