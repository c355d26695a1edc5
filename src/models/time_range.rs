//! Wall-clock time range model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A requested leave or overtime interval in local wall-clock time.
///
/// Only ranges with `end > start` contribute a nonzero duration; all others
/// collapse to zero.
///
/// # Example
///
/// ```
/// use leave_duration_engine::models::TimeRange;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-12 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-12 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// assert!(TimeRange::new(start, end).is_positive());
/// assert!(!TimeRange::new(end, start).is_positive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// The start of the range.
    pub start: NaiveDateTime,
    /// The end of the range.
    pub end: NaiveDateTime,
}

impl TimeRange {
    /// Creates a range. Reversed ranges are allowed and simply empty.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns true if the range can contribute a nonzero duration.
    pub fn is_positive(&self) -> bool {
        self.end > self.start
    }

    /// Returns the calendar day the range starts on.
    pub fn start_day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Returns the calendar day the range ends on.
    pub fn end_day(&self) -> NaiveDate {
        self.end.date()
    }

    /// Returns the number of calendar days touched by a positive range.
    pub fn days_spanned(&self) -> i64 {
        if !self.is_positive() {
            return 0;
        }
        (self.end_day() - self.start_day()).num_days() + 1
    }
}
