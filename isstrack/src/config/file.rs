//! Configuration file handling for ~/.isstrack/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::ConfigFile;
use crate::source::SourceConfig;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.isstrack/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.isstrack/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = config_file_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
        }
        Ok(path)
    }

    /// Source adapter configuration derived from the `[source]` section.
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig::from_config(self.source.url.clone(), self.source.timeout)
    }

    /// Polling interval in seconds from the `[tracking]` section.
    pub fn interval_secs(&self) -> f64 {
        self.tracking.interval
    }
}

/// Get the path to the config directory (~/.isstrack).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".isstrack")
}

/// Get the path to the config file (~/.isstrack/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert_eq!(config.source.url, crate::source::DEFAULT_SOURCE_URL);
        assert_eq!(config.source.timeout, crate::source::DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.tracking.interval, DEFAULT_INTERVAL_SECS);
        assert_eq!(config.logging.file, DEFAULT_LOG_FILE);
        assert!(config.logging.directory.ends_with(".isstrack/logs"));
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.source.url = "https://example.test/iss-now.json".to_string();
        config.source.timeout = 4;
        config.tracking.interval = 1.5;
        config.logging.directory = temp_dir.path().join("logs");
        config.logging.file = "session.log".to_string();

        config.save_to(&config_path).unwrap();
        let loaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_source_config_bridge() {
        let mut config = ConfigFile::default();
        config.source.timeout = 7;

        let source = config.source_config();
        assert_eq!(source.url, config.source.url);
        assert_eq!(source.timeout, Duration::from_secs(7));
        assert_eq!(config.interval_secs(), DEFAULT_INTERVAL_SECS);
    }

    #[test]
    fn test_config_file_path() {
        assert!(config_file_path().ends_with(".isstrack/config.ini"));
    }
}
