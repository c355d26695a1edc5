//! Configuration types for the duration engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::models::{CalendarEntry, OverrideCalendar, OverrideMarkers};

/// Engine settings from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// A human-readable name for this configuration set.
    pub name: String,
    /// The version of the configuration set.
    pub version: String,
    /// Substring markers used to read calendar labels.
    #[serde(default)]
    pub markers: OverrideMarkers,
}

/// One year's override calendar file, `holidays/<year>.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The year the entries belong to; completes short `MM-DD` dates.
    pub year: i32,
    /// The raw calendar rows.
    #[serde(default)]
    pub entries: Vec<CalendarEntry>,
}

/// The complete engine configuration loaded from YAML files.
///
/// Calendars are resolved once, at construction, using the configured
/// markers.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Engine settings.
    settings: EngineSettings,
    /// Resolved override calendars by year.
    calendars: BTreeMap<i32, OverrideCalendar>,
}

impl EngineConfig {
    /// Creates a new EngineConfig, resolving every holiday file.
    ///
    /// Files for the same year are merged in the given order.
    pub fn new(settings: EngineSettings, holiday_files: Vec<HolidayFile>) -> Self {
        let mut calendars: BTreeMap<i32, OverrideCalendar> = BTreeMap::new();
        for file in holiday_files {
            let calendar =
                OverrideCalendar::from_entries(Some(file.year), &file.entries, &settings.markers);
            debug!(
                year = file.year,
                rows = file.entries.len(),
                overrides = calendar.len(),
                "Resolved override calendar"
            );
            calendars.entry(file.year).or_default().merge(&calendar);
        }

        Self {
            settings,
            calendars,
        }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the resolved calendars by year.
    pub fn calendars(&self) -> &BTreeMap<i32, OverrideCalendar> {
        &self.calendars
    }
}
