//! Quarter-day rounding and derived quantities.
//!
//! Durations are always rounded **up** to the next quarter day. This favors
//! the requester and must not be replaced with nearest or truncating
//! rounding.

use rust_decimal::{Decimal, RoundingStrategy};

use super::wall_clock::parse_wall_clock;
use super::work_window::STANDARD_WORKDAY_HOURS;

/// Converts accumulated working hours into quarter-day quantized days.
///
/// `rounded = ceil(hours / 8 * 4) / 4`, truncated to two decimal places.
/// Zero or negative hours give zero; any positive input gives at least 0.25.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::round_to_quarter_days;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_quarter_days(Decimal::from(1)), Decimal::from_str("0.25").unwrap());
/// assert_eq!(round_to_quarter_days(Decimal::from(9)), Decimal::from_str("1.25").unwrap());
/// assert_eq!(round_to_quarter_days(Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn round_to_quarter_days(hours: Decimal) -> Decimal {
    if hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let quarters = Decimal::from(4);
    let raw_days = hours / Decimal::from(STANDARD_WORKDAY_HOURS);
    let rounded = (raw_days * quarters).ceil() / quarters;

    rounded
        .round_dp_with_strategy(2, RoundingStrategy::ToZero)
        .normalize()
}

/// Converts a day count into the hours recorded alongside a leave request,
/// rounded to two decimal places.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::days_to_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(days_to_hours(Decimal::from_str("1.25").unwrap()), Decimal::from(10));
/// ```
pub fn days_to_hours(days: Decimal) -> Decimal {
    (days * Decimal::from(STANDARD_WORKDAY_HOURS))
        .round_dp(2)
        .normalize()
}

/// Rounds overtime hours **down** to the nearest half hour.
///
/// Non-positive input gives zero.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::round_overtime_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_overtime_hours(Decimal::from_str("3.22").unwrap()), Decimal::from(3));
/// assert_eq!(round_overtime_hours(Decimal::from_str("3.7").unwrap()), Decimal::from_str("3.5").unwrap());
/// ```
pub fn round_overtime_hours(hours: Decimal) -> Decimal {
    if hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let halves = (hours * Decimal::from(2))
        .round_dp_with_strategy(0, RoundingStrategy::ToNegativeInfinity);
    (halves / Decimal::from(2)).normalize()
}

/// Computes claimable overtime between two wall-clock timestamps.
///
/// Overtime is raw elapsed time, not clipped to work windows or calendars,
/// rounded down to the half hour. Malformed or reversed input gives zero.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::overtime_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = overtime_hours("2026-01-12 18:00", "2026-01-12 21:42");
/// assert_eq!(hours, Decimal::from_str("3.5").unwrap());
/// ```
pub fn overtime_hours(start: &str, end: &str) -> Decimal {
    match (parse_wall_clock(start), parse_wall_clock(end)) {
        (Some(s), Some(e)) => {
            let elapsed = Decimal::from((e - s).num_minutes()) / Decimal::from(60);
            round_overtime_hours(elapsed)
        }
        _ => Decimal::ZERO,
    }
}

/// Converts a day count into exchange tickets for time-off-in-lieu requests.
///
/// One day is two tickets and a quarter day is half a ticket:
/// `round(days * 4) / 2` with half-even rounding. Non-positive durations
/// need no tickets.
///
/// # Example
///
/// ```
/// use leave_duration_engine::calculation::exchange_tickets;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(exchange_tickets(Decimal::from_str("1.5").unwrap()), Decimal::from(3));
/// assert_eq!(exchange_tickets(Decimal::from_str("0.25").unwrap()), Decimal::from_str("0.5").unwrap());
/// ```
pub fn exchange_tickets(days: Decimal) -> Decimal {
    if days <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let quarters = (days * Decimal::from(4))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    (quarters / Decimal::from(2)).round_dp(2).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_hours_is_zero_days() {
        assert_eq!(round_to_quarter_days(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_negative_hours_is_zero_days() {
        assert_eq!(round_to_quarter_days(dec("-3")), Decimal::ZERO);
    }

    #[test]
    fn test_full_day() {
        assert_eq!(round_to_quarter_days(dec("8")), dec("1"));
    }

    #[test]
    fn test_one_hour_rounds_up_to_quarter() {
        assert_eq!(round_to_quarter_days(dec("1")), dec("0.25"));
    }

    #[test]
    fn test_tiny_positive_is_at_least_quarter() {
        // one minute
        let hours = Decimal::from(1) / Decimal::from(60);
        assert_eq!(round_to_quarter_days(hours), dec("0.25"));
    }

    #[test]
    fn test_exact_quarters_are_kept() {
        assert_eq!(round_to_quarter_days(dec("2")), dec("0.25"));
        assert_eq!(round_to_quarter_days(dec("4")), dec("0.5"));
        assert_eq!(round_to_quarter_days(dec("6")), dec("0.75"));
    }

    #[test]
    fn test_always_rounds_up_never_to_nearest() {
        // 2h01m is just past a quarter; nearest would give 0.25
        let hours = dec("2") + Decimal::from(1) / Decimal::from(60);
        assert_eq!(round_to_quarter_days(hours), dec("0.5"));
        assert_eq!(round_to_quarter_days(dec("8.5")), dec("1.25"));
    }

    #[test]
    fn test_multi_day_totals() {
        assert_eq!(round_to_quarter_days(dec("40")), dec("5"));
        assert_eq!(round_to_quarter_days(dec("45")), dec("5.75"));
    }

    #[test]
    fn test_result_has_at_most_two_decimals() {
        let hours = Decimal::from(7) / Decimal::from(3);
        let days = round_to_quarter_days(hours);
        assert!(days.scale() <= 2);
        assert_eq!(days, dec("0.5"));
    }

    #[test]
    fn test_days_to_hours() {
        assert_eq!(days_to_hours(dec("0.25")), dec("2"));
        assert_eq!(days_to_hours(dec("1.75")), dec("14"));
        assert_eq!(days_to_hours(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_exchange_tickets() {
        assert_eq!(exchange_tickets(dec("1")), dec("2"));
        assert_eq!(exchange_tickets(dec("0.75")), dec("1.5"));
        assert_eq!(exchange_tickets(dec("2.5")), dec("5"));
    }

    #[test]
    fn test_exchange_tickets_half_even() {
        // 0.125 * 4 = 0.5 rounds to 0; 0.375 * 4 = 1.5 rounds to 2
        assert_eq!(exchange_tickets(dec("0.125")), Decimal::ZERO);
        assert_eq!(exchange_tickets(dec("0.375")), dec("1"));
    }

    #[test]
    fn test_exchange_tickets_non_positive() {
        assert_eq!(exchange_tickets(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(exchange_tickets(dec("-1")), Decimal::ZERO);
    }

    #[test]
    fn test_overtime_rounds_down_to_half_hour() {
        assert_eq!(round_overtime_hours(dec("3.22")), dec("3"));
        assert_eq!(round_overtime_hours(dec("3.7")), dec("3.5"));
        assert_eq!(round_overtime_hours(dec("0.49")), Decimal::ZERO);
        assert_eq!(round_overtime_hours(dec("2.5")), dec("2.5"));
    }

    #[test]
    fn test_overtime_non_positive_is_zero() {
        assert_eq!(round_overtime_hours(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(round_overtime_hours(dec("-1.5")), Decimal::ZERO);
    }

    #[test]
    fn test_overtime_hours_between_timestamps() {
        // 3h13m and 3h42m
        assert_eq!(overtime_hours("2026-01-12 18:00", "2026-01-12 21:13"), dec("3"));
        assert_eq!(overtime_hours("2026-01-12 18:00", "2026-01-12 21:42"), dec("3.5"));
    }

    #[test]
    fn test_overtime_ignores_work_windows_and_weekends() {
        // Saturday, across lunch
        assert_eq!(overtime_hours("2026-01-17 09:00", "2026-01-17 15:00"), dec("6"));
        // Overnight
        assert_eq!(overtime_hours("2026-01-12 22:00", "2026-01-13 01:30"), dec("3.5"));
    }

    #[test]
    fn test_overtime_reversed_is_zero() {
        assert_eq!(overtime_hours("2026-01-12 21:00", "2026-01-12 18:00"), Decimal::ZERO);
    }

    #[test]
    fn test_overtime_malformed_is_zero() {
        assert_eq!(overtime_hours("garbage", "2026-01-12 18:00"), Decimal::ZERO);
        assert_eq!(overtime_hours("2026-01-12 18:00", ""), Decimal::ZERO);
    }
}
