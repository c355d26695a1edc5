//! Calculation logic for the Leave Duration Engine.
//!
//! This module contains the wall-clock parser, the workday classifier, the
//! daily work window model, the day-by-day duration accumulator, quarter-day
//! and half-hour overtime rounding, and the duration entry points that combine them.

mod accumulator;
mod day_detection;
mod duration;
mod rounding;
mod wall_clock;
mod work_window;

pub use accumulator::{Accumulation, accumulate};
pub use day_detection::{
    DayClassification, DayType, classify_day, count_workdays_in_month, get_day_type, is_workday,
};
pub use duration::{compute_duration, duration_between, estimate_duration, try_compute_duration};
pub use rounding::{
    days_to_hours, exchange_tickets, overtime_hours, round_overtime_hours, round_to_quarter_days,
};
pub use wall_clock::parse_wall_clock;
pub use work_window::{STANDARD_WORKDAY_HOURS, WorkSchedule, WorkWindow};
