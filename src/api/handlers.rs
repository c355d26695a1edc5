//! HTTP request handlers for the Leave Duration Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Datelike;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{count_workdays_in_month, estimate_duration, parse_wall_clock};
use crate::models::OverrideCalendar;

use super::request::{DurationRequest, WorkdaysRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalendarResponse, DurationResponse, WorkdaysResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/duration", post(duration_handler))
        .route("/workdays", post(workdays_handler))
        .route("/calendar/:year", get(calendar_handler))
        .with_state(state)
}

/// Handler for POST /duration endpoint.
///
/// Always answers 200 for a well-formed body: an estimate that could not be
/// computed is reported through `status` and `warning`, not as an HTTP
/// error.
async fn duration_handler(
    State(state): State<AppState>,
    payload: Result<Json<DurationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing duration request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let calendar = match &request.calendar {
        Some(entries) => {
            // Short MM-DD rows take the year the range starts in
            let year = parse_wall_clock(&request.start).map(|s| s.year());
            OverrideCalendar::from_entries(year, entries, state.config().markers())
        }
        None => calendar_for_range(&state, &request.start, &request.end),
    };

    let start_time = Instant::now();
    let outcome = estimate_duration(&request.start, &request.end, &calendar);
    let duration = start_time.elapsed();

    match outcome.warning() {
        Some(err) => warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Duration estimate failed"
        ),
        None => info!(
            correlation_id = %correlation_id,
            days = %outcome.days(),
            overrides = calendar.len(),
            duration_us = duration.as_micros(),
            "Duration estimate completed"
        ),
    }

    json_response(StatusCode::OK, DurationResponse::from(&outcome))
}

/// Handler for POST /workdays endpoint.
async fn workdays_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkdaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing workdays request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let calendar = state.config().calendar_covering(request.year, request.year);
    match count_workdays_in_month(request.year, request.month, &calendar) {
        Ok(workdays) => {
            info!(
                correlation_id = %correlation_id,
                year = request.year,
                month = request.month,
                workdays,
                "Workday count completed"
            );
            json_response(
                StatusCode::OK,
                WorkdaysResponse {
                    year: request.year,
                    month: request.month,
                    workdays,
                },
            )
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Workday count failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /calendar/:year endpoint.
async fn calendar_handler(State(state): State<AppState>, Path(year): Path<i32>) -> Response {
    match state.config().calendar_for_year(year) {
        Ok(calendar) => json_response(
            StatusCode::OK,
            CalendarResponse {
                year,
                entries: calendar.to_entries(),
            },
        ),
        Err(err) => {
            warn!(year, error = %err, "Calendar lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Picks the loaded calendars for every year the range touches.
///
/// Unparseable timestamps get an empty calendar; the estimate reports them.
fn calendar_for_range(state: &AppState, start: &str, end: &str) -> OverrideCalendar {
    match (parse_wall_clock(start), parse_wall_clock(end)) {
        (Some(s), Some(e)) => {
            let (first, last) = (s.year().min(e.year()), s.year().max(e.year()));
            state.config().calendar_covering(first, last)
        }
        _ => OverrideCalendar::new(),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}
