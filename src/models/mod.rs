//! Core data models for the Leave Duration Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calendar;
mod date_key;
mod duration_result;
mod time_range;

pub use calendar::{
    CalendarEntry, DayOverride, OverrideCalendar, OverrideKind, OverrideMarkers, infer_festival,
};
pub(crate) use date_key::parse_date_part;
pub use date_key::DateKey;
pub use duration_result::{DayContribution, DurationBreakdown, DurationOutcome, DurationStatus};
pub use time_range::TimeRange;
