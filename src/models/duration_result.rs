//! Duration result models.
//!
//! This module contains the [`DurationBreakdown`] produced by a successful
//! computation and the [`DurationOutcome`] that separates a genuine zero
//! from a computation that could not be performed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::TimeRange;

/// The contribution of one calendar day to a duration.
///
/// # Example
///
/// ```
/// use leave_duration_engine::models::DayContribution;
/// use chrono::NaiveDate;
///
/// let day = DayContribution {
///     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     is_workday: false,
///     minutes: 0,
/// };
/// assert_eq!(day.minutes, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayContribution {
    /// The calendar day.
    pub date: NaiveDate,
    /// Whether the day was classified as a workday.
    pub is_workday: bool,
    /// Minutes of the requested range falling inside the day's work windows.
    pub minutes: i64,
}

/// The full result of a successful duration computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    /// The range that was measured.
    pub range: TimeRange,
    /// Per-day contributions, one per calendar day spanned, in order.
    pub contributions: Vec<DayContribution>,
    /// Total minutes inside work windows.
    pub worked_minutes: i64,
    /// Total hours inside work windows.
    pub hours: Decimal,
    /// Quarter-day rounded duration in days.
    pub days: Decimal,
}

/// Coarse status of a [`DurationOutcome`], for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationStatus {
    /// The range was measured.
    Computed,
    /// The range starts and ends at the same instant.
    ZeroLength,
    /// The inputs could not be measured.
    Failed,
}

/// The explicit outcome of a duration estimate.
///
/// All three variants report a day count through [`DurationOutcome::days`];
/// only `Computed` can be nonzero. `Failed` carries the reason so callers can
/// show it as a warning instead of passing off the zero as a real duration.
///
/// # Example
///
/// ```
/// use leave_duration_engine::error::EngineError;
/// use leave_duration_engine::models::{DurationOutcome, DurationStatus};
/// use rust_decimal::Decimal;
///
/// let outcome = DurationOutcome::Failed(EngineError::InvalidTimestamp {
///     field: "start".to_string(),
///     value: "".to_string(),
/// });
/// assert_eq!(outcome.days(), Decimal::ZERO);
/// assert_eq!(outcome.status(), DurationStatus::Failed);
/// assert!(outcome.warning().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationOutcome {
    /// The range was positive and measured.
    Computed(DurationBreakdown),
    /// The range was empty: a genuine zero.
    ZeroLength,
    /// The inputs were malformed or reversed.
    Failed(EngineError),
}

impl DurationOutcome {
    /// Returns the duration in days (zero unless computed).
    pub fn days(&self) -> Decimal {
        match self {
            DurationOutcome::Computed(breakdown) => breakdown.days,
            DurationOutcome::ZeroLength | DurationOutcome::Failed(_) => Decimal::ZERO,
        }
    }

    /// Returns the hours inside work windows (zero unless computed).
    pub fn hours(&self) -> Decimal {
        match self {
            DurationOutcome::Computed(breakdown) => breakdown.hours,
            DurationOutcome::ZeroLength | DurationOutcome::Failed(_) => Decimal::ZERO,
        }
    }

    /// Returns the failure reason, if any.
    pub fn warning(&self) -> Option<&EngineError> {
        match self {
            DurationOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the breakdown, if computed.
    pub fn breakdown(&self) -> Option<&DurationBreakdown> {
        match self {
            DurationOutcome::Computed(breakdown) => Some(breakdown),
            _ => None,
        }
    }

    /// Returns the coarse status.
    pub fn status(&self) -> DurationStatus {
        match self {
            DurationOutcome::Computed(_) => DurationStatus::Computed,
            DurationOutcome::ZeroLength => DurationStatus::ZeroLength,
            DurationOutcome::Failed(_) => DurationStatus::Failed,
        }
    }
}
