//! Configuration loading and management for the Leave Duration Engine.
//!
//! This module provides functionality to load engine settings and per-year
//! override calendars (holidays and makeup workdays) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use leave_duration_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded calendars for years: {:?}", config.years());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineSettings, HolidayFile};
