//! Override calendar models.
//!
//! This module contains the [`OverrideCalendar`] type and the structures used
//! to build it: raw [`CalendarEntry`] rows (as stored in a year's holiday
//! file), the [`OverrideMarkers`] used to read their free-text labels, and
//! the resolved [`DayOverride`] values the workday classifier consults.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::DateKey;

/// The explicit effect of a calendar override on a single day.
///
/// # Example
///
/// ```
/// use leave_duration_engine::models::OverrideKind;
///
/// let kind = OverrideKind::ForcedWorkday;
/// assert_eq!(serde_json::to_string(&kind).unwrap(), "\"forced_workday\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideKind {
    /// A makeup or adjusted workday, counted even on a weekend.
    ForcedWorkday,
    /// A holiday or rest day, not counted even on a weekday.
    ForcedNonWorkday,
}

fn default_work_markers() -> Vec<String> {
    vec!["班".to_string(), "work".to_string()]
}

fn default_rest_markers() -> Vec<String> {
    vec![
        "假".to_string(),
        "休".to_string(),
        "holiday".to_string(),
        "rest".to_string(),
    ]
}

/// Substring markers used to read override labels.
///
/// Work markers are checked before rest markers, so a label that contains
/// both resolves to [`OverrideKind::ForcedWorkday`].
///
/// # Example
///
/// ```
/// use leave_duration_engine::models::{OverrideKind, OverrideMarkers};
///
/// let markers = OverrideMarkers::default();
/// assert_eq!(markers.resolve("调休上班"), Some(OverrideKind::ForcedWorkday));
/// assert_eq!(markers.resolve("放假"), Some(OverrideKind::ForcedNonWorkday));
/// assert_eq!(markers.resolve("festival"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideMarkers {
    /// Markers designating a mandatory workday.
    #[serde(default = "default_work_markers")]
    pub work: Vec<String>,
    /// Markers designating a mandatory non-workday.
    #[serde(default = "default_rest_markers")]
    pub rest: Vec<String>,
}

impl Default for OverrideMarkers {
    fn default() -> Self {
        Self {
            work: default_work_markers(),
            rest: default_rest_markers(),
        }
    }
}

impl OverrideMarkers {
    /// Resolves a free-text label into an override kind.
    ///
    /// Returns `None` when the label carries no known marker, in which case
    /// the default weekday rule applies to the day.
    pub fn resolve(&self, label: &str) -> Option<OverrideKind> {
        let matches = |markers: &[String]| {
            markers
                .iter()
                .any(|m| !m.is_empty() && label.contains(m.as_str()))
        };

        if matches(&self.work) {
            Some(OverrideKind::ForcedWorkday)
        } else if matches(&self.rest) {
            Some(OverrideKind::ForcedNonWorkday)
        } else {
            None
        }
    }
}

/// A raw calendar row as maintained by the calendar-management collaborator.
///
/// `date` is kept as written; it may be any form the [`DateKey`] normalizer
/// accepts, or a short `MM-DD` / `M/D` form completed with the file's year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// The date as written.
    pub date: String,
    /// The free-text override label (e.g. "放假", "上班", "adjusted workday").
    #[serde(rename = "type")]
    pub label: String,
    /// Optional festival name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub festival: Option<String>,
}

impl CalendarEntry {
    /// Resolves the entry's date into a lookup key.
    ///
    /// Short dates without a year are completed with `year` when one is given.
    pub fn resolve_key(&self, year: Option<i32>) -> DateKey {
        let raw = self.date.trim();
        if let Some(year) = year {
            if raw.chars().count() <= 5 {
                let mut parts = raw.split(['-', '/']);
                if let (Some(month), Some(day), None) = (parts.next(), parts.next(), parts.next())
                {
                    return DateKey::normalize(&format!("{}-{}-{}", year, month, day));
                }
            }
        }
        DateKey::normalize(raw)
    }
}

/// A resolved override for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOverride {
    /// The resolved effect, or `None` when the label carries no marker.
    pub kind: Option<OverrideKind>,
    /// The original label.
    pub label: String,
    /// Festival name, given or inferred.
    pub festival: Option<String>,
}

/// An immutable-by-convention map of date-level overrides.
///
/// Built once per year by the caller and passed by reference into every
/// computation; nothing in the engine mutates it.
///
/// # Example
///
/// ```
/// use leave_duration_engine::models::{OverrideCalendar, OverrideKind};
/// use chrono::NaiveDate;
///
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// let calendar = OverrideCalendar::new().with_override(saturday, OverrideKind::ForcedWorkday);
///
/// assert_eq!(calendar.override_kind(saturday), Some(OverrideKind::ForcedWorkday));
/// assert_eq!(calendar.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideCalendar {
    entries: BTreeMap<DateKey, DayOverride>,
}

impl OverrideCalendar {
    /// Creates an empty calendar (default weekday rules everywhere).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an explicit override for `date`, replacing any existing one.
    pub fn with_override(mut self, date: NaiveDate, kind: OverrideKind) -> Self {
        self.entries.insert(
            DateKey::from(date),
            DayOverride {
                kind: Some(kind),
                label: String::new(),
                festival: None,
            },
        );
        self
    }

    /// Inserts a labelled override, resolving the label with `markers`.
    ///
    /// Returns `false` (and inserts nothing) when the date cannot be
    /// normalized.
    pub fn insert_label(&mut self, date: &str, label: &str, markers: &OverrideMarkers) -> bool {
        let key = DateKey::normalize(date);
        if key.is_empty() {
            return false;
        }
        let festival = infer_festival(&key).map(str::to_string);
        self.entries.insert(
            key,
            DayOverride {
                kind: markers.resolve(label),
                label: label.to_string(),
                festival,
            },
        );
        true
    }

    /// Builds a calendar from raw rows, skipping malformed ones.
    ///
    /// Skipped rows are logged and behave as "no override".
    pub fn from_entries(
        year: Option<i32>,
        entries: &[CalendarEntry],
        markers: &OverrideMarkers,
    ) -> Self {
        let mut calendar = Self::new();
        for entry in entries {
            match resolve_entry(year, entry, markers) {
                Ok((key, day)) => {
                    calendar.entries.insert(key, day);
                }
                Err(err) => warn!(error = %err, "Skipping calendar entry"),
            }
        }
        calendar
    }

    /// Builds a calendar from raw rows, rejecting the first malformed one.
    pub fn try_from_entries(
        year: Option<i32>,
        entries: &[CalendarEntry],
        markers: &OverrideMarkers,
    ) -> EngineResult<Self> {
        let mut calendar = Self::new();
        for entry in entries {
            let (key, day) = resolve_entry(year, entry, markers)?;
            calendar.entries.insert(key, day);
        }
        Ok(calendar)
    }

    /// Returns the override for `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&DayOverride> {
        self.entries.get(&DateKey::from(date))
    }

    /// Returns the override stored under `key`, if any.
    pub fn get_key(&self, key: &DateKey) -> Option<&DayOverride> {
        self.entries.get(key)
    }

    /// Returns the resolved override kind for `date`, if any.
    pub fn override_kind(&self, date: NaiveDate) -> Option<OverrideKind> {
        self.get(date).and_then(|o| o.kind)
    }

    /// Copies every override of `other` into this calendar. Entries in
    /// `other` win on conflicting dates.
    pub fn merge(&mut self, other: &OverrideCalendar) {
        for (key, day) in &other.entries {
            self.entries.insert(key.clone(), day.clone());
        }
    }

    /// Returns the number of overridden days.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no day is overridden.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates overrides in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &DayOverride)> {
        self.entries.iter()
    }

    /// Converts the calendar back into canonical raw rows.
    pub fn to_entries(&self) -> Vec<CalendarEntry> {
        self.entries
            .iter()
            .map(|(key, day)| CalendarEntry {
                date: key.to_string(),
                label: day.label.clone(),
                festival: day.festival.clone(),
            })
            .collect()
    }
}

fn resolve_entry(
    year: Option<i32>,
    entry: &CalendarEntry,
    markers: &OverrideMarkers,
) -> EngineResult<(DateKey, DayOverride)> {
    let key = entry.resolve_key(year);
    if key.is_empty() {
        return Err(EngineError::InvalidCalendarEntry {
            date: entry.date.clone(),
            message: "unparseable date".to_string(),
        });
    }

    let label = entry.label.trim();
    if label.is_empty() {
        return Err(EngineError::InvalidCalendarEntry {
            date: entry.date.clone(),
            message: "empty label".to_string(),
        });
    }

    let festival = entry
        .festival
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .or_else(|| infer_festival(&key).map(str::to_string));

    Ok((
        key,
        DayOverride {
            kind: markers.resolve(label),
            label: label.to_string(),
            festival,
        },
    ))
}

/// Infers the festival name of fixed-date festivals from a key.
///
/// Only festivals on fixed Gregorian dates are known; lunar festivals
/// return `None`.
///
/// # Example
///
/// ```
/// use leave_duration_engine::models::{DateKey, infer_festival};
///
/// assert_eq!(infer_festival(&DateKey::normalize("2026-10-03")), Some("国庆节"));
/// assert_eq!(infer_festival(&DateKey::normalize("2026-02-17")), None);
/// ```
pub fn infer_festival(key: &DateKey) -> Option<&'static str> {
    match key.month_day() {
        "01-01" => Some("元旦"),
        "04-04" | "04-05" => Some("清明"),
        "05-01" => Some("劳动节"),
        "10-01" | "10-02" | "10-03" | "10-04" | "10-05" | "10-06" | "10-07" => Some("国庆节"),
        _ => None,
    }
}
