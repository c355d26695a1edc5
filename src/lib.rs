//! Leave Duration Engine
//!
//! This crate estimates how many working days a leave or overtime request
//! covers. Durations are measured against the standard 08:00-12:00 and
//! 13:00-17:00 work windows, honour per-year override calendars (public
//! holidays and makeup workdays), and are rounded up to quarter days.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
