//! Error types for the Leave Duration Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading calendars and
//! computing durations.

use thiserror::Error;

/// The main error type for the Leave Duration Engine.
///
/// Strict operations return this error type. The fail-soft duration entry
/// point never surfaces it and collapses it to a zero result instead.
///
/// # Example
///
/// ```
/// use leave_duration_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
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

    /// A timestamp could not be parsed as a local wall-clock instant.
    #[error("Invalid {field} timestamp: '{value}'")]
    InvalidTimestamp {
        /// Which side of the range was invalid ("start" or "end").
        field: String,
        /// The raw input.
        value: String,
    },

    /// The range ends before it starts.
    #[error("Range ends before it starts: {start} > {end}")]
    ReversedRange {
        /// The parsed start instant.
        start: String,
        /// The parsed end instant.
        end: String,
    },

    /// A calendar entry could not be turned into an override.
    #[error("Invalid calendar entry '{date}': {message}")]
    InvalidCalendarEntry {
        /// The raw date of the entry.
        date: String,
        /// Why the entry was rejected.
        message: String,
    },

    /// A month outside 1..=12 (or a year chrono cannot represent).
    #[error("Invalid month {year}-{month}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },

    /// No override calendar was loaded for the year.
    #[error("Calendar not found for year {year}")]
    CalendarNotFound {
        /// The requested year.
        year: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
