//! HTTP request handlers for the availability engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::{Duration, NaiveDateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::availability::{apply_booking_window, list_slots, validate_staff_schedule};
use crate::models::BusinessHours;

use super::request::{ScheduleValidationRequest, SlotQueryRequest};
use super::response::{ApiError, ApiErrorResponse, ScheduleValidationResponse, SlotListResponse};
use super::state::AppState;

/// The tenant's fixed UTC offset in hours. The booking system runs entirely
/// on Japan wall-clock time; no timezone database is involved.
const JST_UTC_OFFSET_HOURS: i64 = 9;

/// The current wall-clock time at the tenant's fixed UTC+9 offset.
fn now_jst() -> NaiveDateTime {
    Utc::now().naive_utc() + Duration::hours(JST_UTC_OFFSET_HOURS)
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/slots", post(slots_handler))
        .route("/schedule/validate", post(validate_schedule_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into the API error response.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for the `POST /slots` endpoint.
///
/// Resolves the bookable slots for one staff member on one date: the tenant's
/// slot grid, annotated by the working-time predicate, then filtered by the
/// tenant's booking-window rules.
async fn slots_handler(
    State(state): State<AppState>,
    payload: Result<Json<SlotQueryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing slot listing request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = state.config();
    let staff = match config.get_staff(&request.staff_id) {
        Ok(staff) => staff,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                staff_id = %request.staff_id,
                "Staff member not found"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();

    let mut hours: BusinessHours = config.business_hours().clone();
    if let Some(step) = request.step_minutes {
        hours.slot_minutes = step;
    }
    let now = request.now.unwrap_or_else(now_jst);

    let slots = list_slots(request.date, &hours, staff.schedule.as_ref());
    let slots = apply_booking_window(slots, request.date, config.booking_window(), now);

    let available_count = slots.iter().filter(|s| s.available).count();
    info!(
        correlation_id = %correlation_id,
        staff_id = %staff.id,
        date = %request.date,
        slots_total = slots.len(),
        slots_available = available_count,
        duration_us = start_time.elapsed().as_micros(),
        "Slot listing resolved"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(SlotListResponse {
            staff_id: staff.id.clone(),
            date: request.date,
            slots,
        }),
    )
        .into_response()
}

/// Handler for the `POST /schedule/validate` endpoint.
///
/// Structural validation of a staff schedule before the configuration store
/// persists it. A rejection carries the stable validation code and message
/// the frontend shows to the user.
async fn validate_schedule_handler(
    payload: Result<Json<ScheduleValidationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match validate_staff_schedule(&request.schedule) {
        Ok(()) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ScheduleValidationResponse { valid: true }),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                code = err.code(),
                error = %err,
                "Schedule rejected"
            );
            (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::schedule_rejected(&err)),
            )
                .into_response()
        }
    }
}
