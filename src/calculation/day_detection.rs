//! Day detection and workday classification.
//!
//! This module determines the day type (weekday, Saturday, Sunday) of any
//! date and decides whether it counts as a working day once the override
//! calendar is taken into account.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{OverrideCalendar, OverrideKind};

/// Represents the default-calendar type of a day.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// assert!(day_type.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Decides whether `date` is a working day.
///
/// Precedence, first match wins:
/// 1. an override resolved to [`OverrideKind::ForcedWorkday`];
/// 2. an override resolved to [`OverrideKind::ForcedNonWorkday`];
/// 3. Monday to Friday are workdays, Saturday and Sunday are not.
///
/// An override whose label carried a marker of both kinds was resolved to
/// `ForcedWorkday` when the calendar was built.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::is_workday;
/// use leave_duration_engine::models::{OverrideCalendar, OverrideKind};
/// use chrono::NaiveDate;
///
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert!(!is_workday(saturday, &OverrideCalendar::new()));
///
/// let calendar = OverrideCalendar::new().with_override(saturday, OverrideKind::ForcedWorkday);
/// assert!(is_workday(saturday, &calendar));
/// ```
pub fn is_workday(date: NaiveDate, calendar: &OverrideCalendar) -> bool {
    match calendar.override_kind(date) {
        Some(OverrideKind::ForcedWorkday) => true,
        Some(OverrideKind::ForcedNonWorkday) => false,
        None => !get_day_type(date).is_weekend(),
    }
}

/// A detailed classification of a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// The classified date.
    pub date: NaiveDate,
    /// The default-calendar day type.
    pub day_type: DayType,
    /// The override applied, if any.
    pub override_kind: Option<OverrideKind>,
    /// The override label, if the calendar has an entry for the day.
    pub label: Option<String>,
    /// The final verdict.
    pub is_workday: bool,
}

impl DayClassification {
    /// Returns true if the day is a weekend that was not turned into a
    /// makeup workday.
    pub fn is_weekend(&self) -> bool {
        self.day_type.is_weekend() && self.override_kind != Some(OverrideKind::ForcedWorkday)
    }

    /// Returns true if the day is a declared holiday or rest day.
    pub fn is_holiday(&self) -> bool {
        self.override_kind == Some(OverrideKind::ForcedNonWorkday)
    }
}

/// Classifies `date` against `calendar`, keeping the reasons.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::{classify_day, DayType};
/// use leave_duration_engine::models::{OverrideCalendar, OverrideMarkers};
/// use chrono::NaiveDate;
///
/// let mut calendar = OverrideCalendar::new();
/// calendar.insert_label("2026-10-01", "放假", &OverrideMarkers::default());
///
/// let day = classify_day(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(), &calendar);
/// assert_eq!(day.day_type, DayType::Weekday);
/// assert!(day.is_holiday());
/// assert!(!day.is_workday);
/// ```
pub fn classify_day(date: NaiveDate, calendar: &OverrideCalendar) -> DayClassification {
    let entry = calendar.get(date);
    DayClassification {
        date,
        day_type: get_day_type(date),
        override_kind: entry.and_then(|e| e.kind),
        label: entry.map(|e| e.label.clone()),
        is_workday: is_workday(date, calendar),
    }
}

/// Counts the working days of a calendar month.
///
/// # Returns
///
/// The number of days in `year`-`month` for which [`is_workday`] holds, or
/// [`EngineError::InvalidMonth`] if the month does not exist.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::count_workdays_in_month;
/// use leave_duration_engine::models::OverrideCalendar;
///
/// // January 2026 has 22 weekdays
/// assert_eq!(count_workdays_in_month(2026, 1, &OverrideCalendar::new()).unwrap(), 22);
/// ```
pub fn count_workdays_in_month(
    year: i32,
    month: u32,
    calendar: &OverrideCalendar,
) -> EngineResult<u32> {
    let invalid = || EngineError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

    let count = first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter(|d| is_workday(*d, calendar))
        .count();

    u32::try_from(count).map_err(|_| invalid())
}
