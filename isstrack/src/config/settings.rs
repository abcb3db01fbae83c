//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Upstream position source settings
    pub source: SourceSettings,
    /// Polling settings
    pub tracking: TrackingSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Upstream position source configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSettings {
    /// URL of the JSON position endpoint
    pub url: String,
    /// Timeout in seconds for each HTTP request
    pub timeout: u64,
}

/// Tracking configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingSettings {
    /// Seconds between fetch cycles (fractional values allowed)
    pub interval: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Directory for the session log file
    pub directory: PathBuf,
    /// Log file name
    pub file: String,
}
