//! Error types for the availability engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Schedule validation has its own error enum because it is surfaced to the
//! configuration-writing caller as a rejection reason; availability evaluation
//! itself never raises errors.

use thiserror::Error;

use crate::models::TimeOfDay;

/// The main error type for the availability engine.
///
/// All configuration and lookup operations in the engine return this error
/// type, making it easy to handle errors consistently throughout the
/// application.
///
/// # Example
///
/// ```
/// use availability_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tenant.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tenant.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Staff member was not found in the tenant configuration.
    #[error("Staff member not found: {id}")]
    StaffNotFound {
        /// The staff id that was not found.
        id: String,
    },

    /// A staff member's configured schedule failed validation.
    ///
    /// Raised at configuration load time only. A schedule that would fail
    /// validation is rejected before it can be stored; evaluation never sees
    /// it.
    #[error("Invalid schedule for staff '{staff_id}': {source}")]
    InvalidSchedule {
        /// The staff member whose schedule was rejected.
        staff_id: String,
        /// The validation failure.
        #[source]
        source: ScheduleValidationError,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Rejection reasons for a configured working-day schedule.
///
/// Exactly one reason is reported per validation call; the checks run in the
/// order the variants are listed and the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleValidationError {
    /// The working interval's end does not come strictly after its start.
    #[error("working interval end {end} must be strictly after start {start}")]
    InvalidInterval {
        /// The configured interval start.
        start: TimeOfDay,
        /// The configured interval end.
        end: TimeOfDay,
    },

    /// Only one of the two break bounds was supplied.
    #[error("break requires both a start and an end time")]
    IncompleteBreak,

    /// Both break bounds were supplied but the break does not sit strictly
    /// inside the working interval.
    #[error(
        "break [{break_start}, {break_end}) must lie strictly inside the working interval [{start}, {end})"
    )]
    InvalidBreak {
        /// The configured interval start.
        start: TimeOfDay,
        /// The configured interval end.
        end: TimeOfDay,
        /// The configured break start.
        break_start: TimeOfDay,
        /// The configured break end.
        break_end: TimeOfDay,
    },
}

impl ScheduleValidationError {
    /// Stable machine-readable code for this rejection reason.
    ///
    /// Surfaced in API error responses so callers can branch without parsing
    /// the human-readable message.
    pub fn code(&self) -> &'static str {
        match self {
            ScheduleValidationError::InvalidInterval { .. } => "INVALID_INTERVAL",
            ScheduleValidationError::IncompleteBreak => "INCOMPLETE_BREAK",
            ScheduleValidationError::InvalidBreak { .. } => "INVALID_BREAK",
        }
    }
}
