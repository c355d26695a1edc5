//! HTTP API module for the Leave Duration Engine.
//!
//! This module provides the REST endpoints for estimating leave durations,
//! counting workdays in a month, and inspecting loaded override calendars.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DurationRequest, WorkdaysRequest};
pub use response::{ApiError, CalendarResponse, DurationResponse, WorkdaysResponse};
pub use state::AppState;
