//! Leave duration computation.
//!
//! This module wires the parser, the accumulator and the rounder together.
//! Three entry points are provided, from strictest to most forgiving:
//!
//! - [`try_compute_duration`] returns an [`EngineResult`] and fails on bad
//!   timestamps or reversed ranges;
//! - [`estimate_duration`] never fails but reports what happened through a
//!   [`DurationOutcome`];
//! - [`compute_duration`] returns a bare day count, zero on any failure.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{DurationBreakdown, DurationOutcome, OverrideCalendar, TimeRange};

use super::accumulator::accumulate;
use super::rounding::round_to_quarter_days;
use super::wall_clock::parse_wall_clock;
use super::work_window::WorkSchedule;

/// Measures a structured range against `calendar`.
///
/// Non-positive ranges measure zero.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::duration_between;
/// use leave_duration_engine::models::{OverrideCalendar, TimeRange};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let fmt = "%Y-%m-%d %H:%M:%S";
/// let range = TimeRange::new(
///     NaiveDateTime::parse_from_str("2026-01-12 08:00:00", fmt).unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-12 17:00:00", fmt).unwrap(),
/// );
///
/// let breakdown = duration_between(range, &OverrideCalendar::new());
/// assert_eq!(breakdown.days, Decimal::ONE);
/// assert_eq!(breakdown.hours, Decimal::from(8));
/// ```
pub fn duration_between(range: TimeRange, calendar: &OverrideCalendar) -> DurationBreakdown {
    let accumulation = accumulate(&range, calendar, &WorkSchedule::standard());
    let hours = accumulation.hours();

    DurationBreakdown {
        range,
        worked_minutes: accumulation.total_minutes,
        days: round_to_quarter_days(hours),
        hours: hours.normalize(),
        contributions: accumulation.contributions,
    }
}

/// Parses both timestamps and measures the range, failing on bad input.
///
/// # Returns
///
/// The breakdown for a positive or zero-length range, or an error if:
/// - either timestamp cannot be parsed ([`EngineError::InvalidTimestamp`]);
/// - the range ends before it starts ([`EngineError::ReversedRange`]).
pub fn try_compute_duration(
    start: &str,
    end: &str,
    calendar: &OverrideCalendar,
) -> EngineResult<DurationBreakdown> {
    let range = parse_range(start, end)?;
    if range.end < range.start {
        return Err(EngineError::ReversedRange {
            start: range.start.to_string(),
            end: range.end.to_string(),
        });
    }
    Ok(duration_between(range, calendar))
}

/// Estimates a duration, separating genuine zeros from failures.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::estimate_duration;
/// use leave_duration_engine::models::{DurationStatus, OverrideCalendar};
///
/// let calendar = OverrideCalendar::new();
///
/// let zero = estimate_duration("2026-01-12 09:00", "2026-01-12 09:00", &calendar);
/// assert_eq!(zero.status(), DurationStatus::ZeroLength);
///
/// let failed = estimate_duration("garbage", "2026-01-12 09:00", &calendar);
/// assert_eq!(failed.status(), DurationStatus::Failed);
/// ```
pub fn estimate_duration(start: &str, end: &str, calendar: &OverrideCalendar) -> DurationOutcome {
    match try_compute_duration(start, end, calendar) {
        Ok(breakdown) if breakdown.range.is_positive() => DurationOutcome::Computed(breakdown),
        Ok(_) => DurationOutcome::ZeroLength,
        Err(err) => DurationOutcome::Failed(err),
    }
}

/// Computes a leave duration in days, never failing.
///
/// Malformed timestamps, reversed ranges and zero-length ranges all give
/// zero. Use [`estimate_duration`] to tell them apart.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::compute_duration;
/// use leave_duration_engine::models::OverrideCalendar;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calendar = OverrideCalendar::new();
/// let days = compute_duration("2026-01-12 10:00", "2026-01-12 11:00", &calendar);
/// assert_eq!(days, Decimal::from_str("0.25").unwrap());
///
/// assert_eq!(compute_duration("", "2026-01-12 11:00", &calendar), Decimal::ZERO);
/// ```
pub fn compute_duration(start: &str, end: &str, calendar: &OverrideCalendar) -> Decimal {
    let outcome = estimate_duration(start, end, calendar);
    if let Some(err) = outcome.warning() {
        warn!(error = %err, start = %start, end = %end, "Duration estimate fell back to zero");
    }
    outcome.days()
}

fn parse_range(start: &str, end: &str) -> EngineResult<TimeRange> {
    let start_instant = parse_field("start", start)?;
    let end_instant = parse_field("end", end)?;
    Ok(TimeRange::new(start_instant, end_instant))
}

fn parse_field(field: &str, value: &str) -> EngineResult<NaiveDateTime> {
    parse_wall_clock(value).ok_or_else(|| EngineError::InvalidTimestamp {
        field: field.to_string(),
        value: value.to_string(),
    })
}
