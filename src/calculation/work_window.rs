//! Daily work window model.
//!
//! A [`WorkSchedule`] is the ordered list of same-day intervals during which
//! requested leave counts toward the duration. The standard schedule is
//! 08:00-12:00 and 13:00-17:00.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Number of paid hours in a full standard workday.
pub const STANDARD_WORKDAY_HOURS: i64 = 8;

/// A half-open `[start, end)` interval within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    /// Start time of the window.
    pub start: NaiveTime,
    /// End time of the window.
    pub end: NaiveTime,
}

impl WorkWindow {
    /// Creates a window from whole hours. Returns `None` for invalid hours or
    /// an empty window.
    pub fn from_hours(start_hour: u32, end_hour: u32) -> Option<Self> {
        let start = NaiveTime::from_hms_opt(start_hour, 0, 0)?;
        let end = NaiveTime::from_hms_opt(end_hour, 0, 0)?;
        (start < end).then_some(Self { start, end })
    }

    /// Anchors the window to `day`.
    pub fn on(&self, day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (day.and_time(self.start), day.and_time(self.end))
    }

    /// Returns the window length in minutes.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Returns the minutes of `[start, end)` that fall inside this window on
    /// `day`, never negative.
    pub fn overlap_minutes(&self, day: NaiveDate, start: NaiveDateTime, end: NaiveDateTime) -> i64 {
        let (window_start, window_end) = self.on(day);
        let overlap = end.min(window_end) - start.max(window_start);
        overlap.num_minutes().max(0)
    }
}

/// The fixed daily schedule of working windows.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::WorkSchedule;
///
/// let schedule = WorkSchedule::standard();
/// assert_eq!(schedule.windows().len(), 2);
/// assert_eq!(schedule.daily_minutes(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSchedule {
    windows: Vec<WorkWindow>,
}

impl WorkSchedule {
    /// The standard 08:00-12:00, 13:00-17:00 schedule.
    pub fn standard() -> Self {
        let windows = [(8, 12), (13, 17)]
            .into_iter()
            .filter_map(|(start, end)| WorkWindow::from_hours(start, end))
            .collect();
        Self { windows }
    }

    /// Returns the windows in chronological order.
    pub fn windows(&self) -> &[WorkWindow] {
        &self.windows
    }

    /// Returns the capacity of a workday in minutes.
    pub fn daily_minutes(&self) -> i64 {
        self.windows.iter().map(WorkWindow::minutes).sum()
    }

    /// Returns the minutes of `[start, end)` inside the windows of `day`.
    pub fn overlap_minutes(&self, day: NaiveDate, start: NaiveDateTime, end: NaiveDateTime) -> i64 {
        self.windows
            .iter()
            .map(|w| w.overlap_minutes(day, start, end))
            .sum()
    }
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self::standard()
    }
}
