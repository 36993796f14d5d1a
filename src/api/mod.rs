//! HTTP API module for the availability engine.
//!
//! This module provides the REST endpoints for resolving bookable slots and
//! validating staff schedules before they are persisted.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ScheduleValidationRequest, SlotQueryRequest};
pub use response::{ApiError, ScheduleValidationResponse, SlotListResponse};
pub use state::AppState;
