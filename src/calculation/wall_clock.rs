//! Wall-clock timestamp parsing.
//!
//! Turns the loosely formatted local timestamps submitted by leave forms into
//! [`NaiveDateTime`] values. No timezone is ever attached or converted.

use chrono::{NaiveDateTime, NaiveTime};

use crate::models::parse_date_part;

/// Parses a local date with an optional time of day.
///
/// Date and time are separated by whitespace or a literal `T`. The time may
/// be `HH`, `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`; seconds are dropped so every instant sits
/// on a whole minute. A missing time means midnight.
///
/// # Returns
///
/// `None` for empty or invalid input. Callers treat `None` as a zero
/// duration, not as an error.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::parse_wall_clock;
/// use chrono::NaiveDateTime;
///
/// let expected = NaiveDateTime::parse_from_str("2026-01-12 08:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(parse_wall_clock("2026-01-12T08:30"), Some(expected));
/// assert_eq!(parse_wall_clock("2026-01-12 08:30:59"), Some(expected));
/// assert_eq!(parse_wall_clock(""), None);
/// ```
pub fn parse_wall_clock(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (date_str, time_str) = match trimmed.split_once(|c: char| c.is_whitespace() || c == 'T') {
        Some((date, time)) => (date, Some(time.trim())),
        None => (trimmed, None),
    };

    let date = parse_date_part(date_str)?;
    let time = match time_str {
        Some(t) if !t.is_empty() => parse_time_of_day(t)?,
        _ => NaiveTime::from_hms_opt(0, 0, 0)?,
    };

    Some(date.and_time(time))
}

fn parse_time_of_day(input: &str) -> Option<NaiveTime> {
    let mut parts = input.split(':');
    let hour = parts.next()?.parse::<u32>().ok()?;
    let minute = match parts.next() {
        Some(m) => m.parse::<u32>().ok()?,
        None => 0,
    };
    // Seconds, with an optional fraction, are validated but not kept.
    if let Some(s) = parts.next() {
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };
        let second = whole.parse::<u32>().ok()?;
        if second > 59 {
            return None;
        }
        if let Some(f) = fraction {
            if f.is_empty() || !f.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
        }
    }
    if parts.next().is_some() {
        return None;
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_space_separated() {
        assert_eq!(
            parse_wall_clock("2026-01-12 08:00"),
            Some(make_datetime("2026-01-12", "08:00:00"))
        );
    }

    #[test]
    fn test_t_separated_datetime_local() {
        assert_eq!(
            parse_wall_clock("2026-01-12T13:45"),
            Some(make_datetime("2026-01-12", "13:45:00"))
        );
    }

    #[test]
    fn test_missing_time_defaults_to_midnight() {
        assert_eq!(
            parse_wall_clock("2026-01-12"),
            Some(make_datetime("2026-01-12", "00:00:00"))
        );
    }

    #[test]
    fn test_unpadded_components() {
        assert_eq!(
            parse_wall_clock("2026-1-5 8:05"),
            Some(make_datetime("2026-01-05", "08:05:00"))
        );
    }

    #[test]
    fn test_hour_only() {
        assert_eq!(
            parse_wall_clock("2026-01-12 9"),
            Some(make_datetime("2026-01-12", "09:00:00"))
        );
    }

    #[test]
    fn test_seconds_are_dropped() {
        assert_eq!(
            parse_wall_clock("2026-01-12 09:15:42"),
            Some(make_datetime("2026-01-12", "09:15:00"))
        );
    }

    #[test]
    fn test_fractional_seconds_are_dropped() {
        // datetime-local inputs with a sub-second step
        assert_eq!(
            parse_wall_clock("2026-01-12T08:00:00.000"),
            Some(make_datetime("2026-01-12", "08:00:00"))
        );
        assert_eq!(
            parse_wall_clock("2026-01-12 16:59:59.999"),
            Some(make_datetime("2026-01-12", "16:59:00"))
        );
    }

    #[test]
    fn test_malformed_fraction_is_none() {
        assert_eq!(parse_wall_clock("2026-01-12 08:00:00."), None);
        assert_eq!(parse_wall_clock("2026-01-12 08:00:00.5x"), None);
        assert_eq!(parse_wall_clock("2026-01-12 08:00:60.0"), None);
    }

    #[test]
    fn test_slash_separated_date() {
        assert_eq!(
            parse_wall_clock("2026/01/12 09:00"),
            Some(make_datetime("2026-01-12", "09:00:00"))
        );
    }

    #[test]
    fn test_empty_and_blank_are_none() {
        assert_eq!(parse_wall_clock(""), None);
        assert_eq!(parse_wall_clock("   "), None);
    }

    #[test]
    fn test_invalid_date_is_none() {
        assert_eq!(parse_wall_clock("2026-02-30 08:00"), None);
        assert_eq!(parse_wall_clock("tomorrow 08:00"), None);
        assert_eq!(parse_wall_clock("2026-01 08:00"), None);
    }

    #[test]
    fn test_invalid_time_is_none() {
        assert_eq!(parse_wall_clock("2026-01-12 24:00"), None);
        assert_eq!(parse_wall_clock("2026-01-12 08:60"), None);
        assert_eq!(parse_wall_clock("2026-01-12 ab:cd"), None);
        assert_eq!(parse_wall_clock("2026-01-12 08:00:61"), None);
        assert_eq!(parse_wall_clock("2026-01-12 08:00:00:00"), None);
    }

    #[test]
    fn test_trailing_garbage_is_none() {
        assert_eq!(parse_wall_clock("2026-01-12 08:00 extra"), None);
    }
}
