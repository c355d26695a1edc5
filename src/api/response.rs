//! Response types for the Leave Duration Engine API.
//!
//! This module defines the success bodies, the error response structures,
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::exchange_tickets;
use crate::error::EngineError;
use crate::models::{CalendarEntry, DayContribution, DurationOutcome, DurationStatus};

/// Response body for the `/duration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationResponse {
    /// Quarter-day rounded duration in days.
    pub days: Decimal,
    /// Hours inside work windows, before rounding.
    pub hours: Decimal,
    /// Exchange tickets needed if the leave is taken in lieu.
    pub exchange_tickets: Decimal,
    /// Whether the duration was computed, was a genuine zero, or failed.
    pub status: DurationStatus,
    /// Why the estimate failed, when it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Per-day contributions.
    pub breakdown: Vec<DayContribution>,
}

impl From<&DurationOutcome> for DurationResponse {
    fn from(outcome: &DurationOutcome) -> Self {
        let days = outcome.days();
        Self {
            days,
            hours: outcome.hours(),
            exchange_tickets: exchange_tickets(days),
            status: outcome.status(),
            warning: outcome.warning().map(ToString::to_string),
            breakdown: outcome
                .breakdown()
                .map(|b| b.contributions.clone())
                .unwrap_or_default(),
        }
    }
}

/// Response body for the `/workdays` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkdaysResponse {
    /// The calendar year.
    pub year: i32,
    /// The month.
    pub month: u32,
    /// Number of working days in the month.
    pub workdays: u32,
}

/// Response body for the `/calendar/:year` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// The calendar year.
    pub year: i32,
    /// Canonical calendar rows in date order.
    pub entries: Vec<CalendarEntry>,
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
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
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidTimestamp { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIMESTAMP",
                    message,
                    format!("The {} timestamp must look like YYYY-MM-DD HH:MM", field),
                ),
            },
            EngineError::ReversedRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("REVERSED_RANGE", message),
            },
            EngineError::InvalidCalendarEntry { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_CALENDAR_ENTRY", message),
            },
            EngineError::InvalidMonth { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    message,
                    "Month must be between 1 and 12",
                ),
            },
            EngineError::CalendarNotFound { year } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "CALENDAR_NOT_FOUND",
                    message,
                    format!("No override calendar has been loaded for {}", year),
                ),
            },
        }
    }
}
