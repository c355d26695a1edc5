//! Request types for the Leave Duration Engine API.
//!
//! This module defines the JSON request structures for the `/duration` and
//! `/workdays` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::CalendarEntry;

/// Request body for the `/duration` endpoint.
///
/// Timestamps are passed through as written; the engine parses them
/// leniently and reports unparseable ones as a warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationRequest {
    /// Start of the requested leave, local wall-clock time.
    pub start: String,
    /// End of the requested leave, local wall-clock time.
    pub end: String,
    /// Optional inline override calendar. When absent, the loaded calendars
    /// for the years the range touches are used. Short `MM-DD` dates take
    /// the year of `start`.
    #[serde(default)]
    pub calendar: Option<Vec<CalendarEntry>>,
}

/// Request body for the `/workdays` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkdaysRequest {
    /// The calendar year.
    pub year: i32,
    /// The month, 1 to 12.
    pub month: u32,
}
