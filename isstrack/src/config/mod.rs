//! Configuration for the tracker.
//!
//! The user configuration lives in `~/.isstrack/config.ini`:
//!
//! ```ini
//! [source]
//! url = http://api.open-notify.org/iss-now.json
//! timeout = 10
//!
//! [tracking]
//! interval = 3
//!
//! [logging]
//! directory = ~/.isstrack/logs
//! file = isstrack.log
//! ```
//!
//! Missing files and missing keys fall back to defaults; invalid values are
//! reported as [`ConfigFileError::InvalidValue`].

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{default_log_directory, DEFAULT_INTERVAL_SECS, DEFAULT_LOG_FILE};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, SourceSettings, TrackingSettings};
