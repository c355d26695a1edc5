//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings and per-year override calendars from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{OverrideCalendar, OverrideMarkers};

use super::types::{EngineConfig, EngineSettings, HolidayFile};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` plays the calendar-management collaborator: it reads
/// each year's override calendar once and hands out read-only references.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml        # Engine metadata and label markers
/// └── holidays/
///     └── 2026.yaml      # Override calendar for 2026
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_duration_engine::calculation::compute_duration;
/// use leave_duration_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// let calendar = loader.calendar_covering(2026, 2026);
/// let days = compute_duration("2026-10-09 08:00", "2026-10-12 17:00", &calendar);
/// println!("Leave: {} days", days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` is missing
    /// - any file contains invalid YAML
    ///
    /// A missing `holidays/` directory is not an error: every year then uses
    /// the default weekday rules.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;
        let holiday_files = Self::load_holidays(&path.join("holidays"))?;

        Ok(Self {
            config: EngineConfig::new(settings, holiday_files),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<HolidayFile>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            warn!(
                path = %holidays_dir_str,
                "No holidays directory; weekday rules only"
            );
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let file = Self::load_yaml::<HolidayFile>(&path)?;
            debug!(path = %path.display(), year = file.year, "Loaded holiday file");
            files.push(file);
        }

        Ok(files)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        self.config.settings()
    }

    /// Returns the label markers used to resolve calendars.
    pub fn markers(&self) -> &OverrideMarkers {
        &self.config.settings().markers
    }

    /// Returns the years that have a calendar, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.config.calendars().keys().copied().collect()
    }

    /// Gets the override calendar for a year.
    ///
    /// # Returns
    ///
    /// Returns the calendar if loaded, or `CalendarNotFound` error.
    pub fn calendar_for_year(&self, year: i32) -> EngineResult<&OverrideCalendar> {
        self.config
            .calendars()
            .get(&year)
            .ok_or(EngineError::CalendarNotFound { year })
    }

    /// Builds one calendar covering every year from `start_year` to
    /// `end_year` inclusive, for ranges crossing a year boundary.
    ///
    /// Years without a calendar contribute nothing.
    pub fn calendar_covering(&self, start_year: i32, end_year: i32) -> OverrideCalendar {
        let mut calendar = OverrideCalendar::new();
        for (_, year_calendar) in self.config.calendars().range(start_year..=end_year) {
            calendar.merge(year_calendar);
        }
        calendar
    }
}
