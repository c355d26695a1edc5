//! Canonical date keys for calendar lookups.
//!
//! A [`DateKey`] is the `YYYY-MM-DD` identity of a calendar day. It is only
//! ever used to look entries up in an [`OverrideCalendar`](super::OverrideCalendar),
//! never for date arithmetic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A canonical, zero-padded `YYYY-MM-DD` lookup key.
///
/// Normalization never fails: unparseable input produces an empty key, which
/// simply misses on lookup.
///
/// # Example
///
/// ```
/// use leave_duration_engine::models::DateKey;
///
/// assert_eq!(DateKey::normalize("2026/1/5").as_str(), "2026-01-05");
/// assert_eq!(DateKey::normalize("2026-1-5 08:30").as_str(), "2026-01-05");
/// assert!(DateKey::normalize("yesterday").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Normalizes a `-` or `/` separated date, with an optional trailing
    /// time component, into a canonical key.
    pub fn normalize(input: &str) -> Self {
        parse_date_part(input)
            .map(Self::from)
            .unwrap_or_default()
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the input could not be normalized.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the `MM-DD` suffix of the key, or an empty string.
    pub fn month_day(&self) -> &str {
        self.0.get(5..).unwrap_or("")
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses the date portion of a date or date-time string.
///
/// Anything after the first whitespace or `T` is ignored. The date must have
/// exactly three numeric components separated by `-` or `/` and name a real
/// calendar day.
pub(crate) fn parse_date_part(input: &str) -> Option<NaiveDate> {
    let date_part = input
        .trim()
        .split(|c: char| c.is_whitespace() || c == 'T')
        .next()?;

    let mut parts = date_part.split(['-', '/']);
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}
