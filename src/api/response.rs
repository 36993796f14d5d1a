//! Response types for the availability engine API.
//!
//! This module defines the success payloads, the error response structure and
//! the mapping from engine errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability::Slot;
use crate::error::{EngineError, ScheduleValidationError};

/// Response body for the `POST /slots` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotListResponse {
    /// The staff member the listing was resolved for.
    pub staff_id: String,
    /// The date the listing covers.
    pub date: NaiveDate,
    /// The ordered slot candidates with their availability flags.
    pub slots: Vec<Slot>,
}

/// Response body for a successful `POST /schedule/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleValidationResponse {
    /// Always true; rejections are reported as error responses instead.
    pub valid: bool,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a staff not found error response.
    pub fn staff_not_found(id: &str) -> Self {
        Self::with_details(
            "STAFF_NOT_FOUND",
            format!("Staff member not found: {}", id),
            format!("The staff id '{}' is not configured for this tenant", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the rejection response for a schedule that failed validation.
    ///
    /// The code is the validation error's stable code, so the configuration
    /// frontend can highlight the offending field without parsing prose.
    pub fn schedule_rejected(error: &ScheduleValidationError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::StaffNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::staff_not_found(&id),
            },
            EngineError::InvalidSchedule { staff_id, source } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    source.code(),
                    format!("Invalid schedule for staff '{}'", staff_id),
                    source.to_string(),
                ),
            },
        }
    }
}
