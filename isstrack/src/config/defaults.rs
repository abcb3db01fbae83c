//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::source::{DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT_SECS};

/// Default seconds between fetch cycles.
pub const DEFAULT_INTERVAL_SECS: f64 = 3.0;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "isstrack.log";

/// Default log directory (~/.isstrack/logs).
pub fn default_log_directory() -> PathBuf {
    config_directory().join("logs")
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            source: SourceSettings {
                url: DEFAULT_SOURCE_URL.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            tracking: TrackingSettings {
                interval: DEFAULT_INTERVAL_SECS,
            },
            logging: LoggingSettings {
                directory: default_log_directory(),
                file: DEFAULT_LOG_FILE.to_string(),
            },
        }
    }
}
