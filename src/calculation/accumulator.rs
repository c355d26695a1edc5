//! Duration accumulation over a day span.
//!
//! Walks every calendar day a range touches and sums the minutes of the
//! range that fall inside that day's work windows.

use rust_decimal::Decimal;

use crate::models::{DayContribution, OverrideCalendar, TimeRange};

use super::day_detection::is_workday;
use super::work_window::WorkSchedule;

/// The raw result of walking a range day by day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulation {
    /// One entry per calendar day spanned, in order. Empty for a
    /// non-positive range.
    pub contributions: Vec<DayContribution>,
    /// Total minutes inside work windows.
    pub total_minutes: i64,
}

impl Accumulation {
    /// Returns the accumulated time in hours.
    pub fn hours(&self) -> Decimal {
        Decimal::from(self.total_minutes) / Decimal::from(60)
    }
}

/// Accumulates the working minutes of `range`.
///
/// A non-positive range returns an empty accumulation without visiting any
/// day. Otherwise the cursor starts on the range's first calendar day and
/// visits every day through the last one inclusive. Non-workdays contribute
/// nothing; workdays contribute the overlap of the range with each window.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::{accumulate, WorkSchedule};
/// use leave_duration_engine::models::{OverrideCalendar, TimeRange};
/// use chrono::NaiveDateTime;
///
/// let fmt = "%Y-%m-%d %H:%M:%S";
/// // Friday 16:00 to Monday 09:00
/// let range = TimeRange::new(
///     NaiveDateTime::parse_from_str("2026-01-16 16:00:00", fmt).unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-19 09:00:00", fmt).unwrap(),
/// );
///
/// let acc = accumulate(&range, &OverrideCalendar::new(), &WorkSchedule::standard());
/// assert_eq!(acc.contributions.len(), 4);
/// assert_eq!(acc.total_minutes, 120);
/// ```
pub fn accumulate(
    range: &TimeRange,
    calendar: &OverrideCalendar,
    schedule: &WorkSchedule,
) -> Accumulation {
    if !range.is_positive() {
        return Accumulation::default();
    }

    let last_day = range.end_day();
    let mut contributions = Vec::new();
    let mut total_minutes = 0;

    for day in range.start_day().iter_days().take_while(|d| *d <= last_day) {
        let workday = is_workday(day, calendar);
        let minutes = if workday {
            schedule.overlap_minutes(day, range.start, range.end)
        } else {
            0
        };

        total_minutes += minutes;
        contributions.push(DayContribution {
            date: day,
            is_workday: workday,
            minutes,
        });
    }

    Accumulation {
        contributions,
        total_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OverrideKind;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn range(start: (&str, &str), end: (&str, &str)) -> TimeRange {
        TimeRange::new(make_datetime(start.0, start.1), make_datetime(end.0, end.1))
    }

    fn run(range: &TimeRange, calendar: &OverrideCalendar) -> Accumulation {
        accumulate(range, calendar, &WorkSchedule::standard())
    }

    #[test]
    fn test_reversed_range_visits_no_day() {
        let r = range(("2026-01-12", "17:00:00"), ("2026-01-12", "08:00:00"));
        let acc = run(&r, &OverrideCalendar::new());
        assert!(acc.contributions.is_empty());
        assert_eq!(acc.total_minutes, 0);
    }

    #[test]
    fn test_zero_length_range_visits_no_day() {
        let r = range(("2026-01-12", "09:00:00"), ("2026-01-12", "09:00:00"));
        assert_eq!(run(&r, &OverrideCalendar::new()), Accumulation::default());
    }

    #[test]
    fn test_full_monday() {
        let r = range(("2026-01-12", "08:00:00"), ("2026-01-12", "17:00:00"));
        let acc = run(&r, &OverrideCalendar::new());
        assert_eq!(acc.total_minutes, 480);
        assert_eq!(acc.hours(), dec("8"));
        assert_eq!(acc.contributions.len(), 1);
    }

    #[test]
    fn test_iteration_count_is_days_spanned() {
        let r = range(("2026-01-12", "23:00:00"), ("2026-01-20", "01:00:00"));
        let acc = run(&r, &OverrideCalendar::new());
        assert_eq!(acc.contributions.len() as i64, r.days_spanned());
        assert_eq!(acc.contributions.first().unwrap().date, make_date("2026-01-12"));
        assert_eq!(acc.contributions.last().unwrap().date, make_date("2026-01-20"));
    }

    #[test]
    fn test_week_span_skips_weekend() {
        // Monday 08:00 through next Monday 17:00: six workdays
        let r = range(("2026-01-12", "08:00:00"), ("2026-01-19", "17:00:00"));
        let acc = run(&r, &OverrideCalendar::new());
        assert_eq!(acc.total_minutes, 6 * 480);

        let weekend: Vec<_> = acc.contributions.iter().filter(|c| !c.is_workday).collect();
        assert_eq!(weekend.len(), 2);
        assert!(weekend.iter().all(|c| c.minutes == 0));
    }

    #[test]
    fn test_saturday_without_override_contributes_nothing() {
        let r = range(("2026-01-17", "08:00:00"), ("2026-01-17", "17:00:00"));
        assert_eq!(run(&r, &OverrideCalendar::new()).total_minutes, 0);
    }

    #[test]
    fn test_saturday_makeup_day_counts() {
        let calendar =
            OverrideCalendar::new().with_override(make_date("2026-01-17"), OverrideKind::ForcedWorkday);
        let r = range(("2026-01-17", "08:00:00"), ("2026-01-17", "17:00:00"));
        assert_eq!(run(&r, &calendar).total_minutes, 480);
    }

    #[test]
    fn test_weekday_holiday_contributes_nothing() {
        let calendar = OverrideCalendar::new()
            .with_override(make_date("2026-01-13"), OverrideKind::ForcedNonWorkday);
        let r = range(("2026-01-12", "08:00:00"), ("2026-01-14", "17:00:00"));
        let acc = run(&r, &calendar);
        assert_eq!(acc.total_minutes, 2 * 480);
        assert!(!acc.contributions[1].is_workday);
    }

    #[test]
    fn test_partial_first_and_last_days() {
        // Monday 15:00 to Tuesday 10:30: 2h + 2.5h
        let r = range(("2026-01-12", "15:00:00"), ("2026-01-13", "10:30:00"));
        let acc = run(&r, &OverrideCalendar::new());
        assert_eq!(acc.contributions[0].minutes, 120);
        assert_eq!(acc.contributions[1].minutes, 150);
        assert_eq!(acc.hours(), dec("4.5"));
    }

    #[test]
    fn test_range_ending_at_midnight_visits_next_day() {
        let r = range(("2026-01-12", "08:00:00"), ("2026-01-13", "00:00:00"));
        let acc = run(&r, &OverrideCalendar::new());
        assert_eq!(acc.contributions.len(), 2);
        assert_eq!(acc.contributions[1].minutes, 0);
        assert_eq!(acc.total_minutes, 480);
    }

    #[test]
    fn test_year_boundary() {
        // Wednesday 2025-12-31 13:00 to Friday 2026-01-02 12:00, New Year's Day off
        let calendar = OverrideCalendar::new()
            .with_override(make_date("2026-01-01"), OverrideKind::ForcedNonWorkday);
        let r = range(("2025-12-31", "13:00:00"), ("2026-01-02", "12:00:00"));
        let acc = run(&r, &calendar);
        assert_eq!(acc.contributions.len(), 3);
        assert_eq!(acc.total_minutes, 240 + 240);
    }
}
