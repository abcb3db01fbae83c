//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::tracking::interval_period;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [source] section
    if let Some(section) = ini.section(Some("source")) {
        if let Some(v) = section.get("url") {
            let v = v.trim();
            if !(v.starts_with("http://") || v.starts_with("https://")) {
                return Err(invalid(
                    "source",
                    "url",
                    v,
                    "must be an http:// or https:// URL",
                ));
            }
            config.source.url = v.to_string();
        }
        if let Some(v) = section.get("timeout") {
            config.source.timeout = match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(invalid(
                        "source",
                        "timeout",
                        v,
                        "must be a positive integer (seconds)",
                    ))
                }
            };
        }
    }

    // [tracking] section
    if let Some(section) = ini.section(Some("tracking")) {
        if let Some(v) = section.get("interval") {
            config.tracking.interval = match v.trim().parse::<f64>() {
                Ok(secs) if interval_period(secs).is_ok() => secs,
                _ => {
                    return Err(invalid(
                        "tracking",
                        "interval",
                        v,
                        "must be a positive number of seconds the timer can represent",
                    ))
                }
            };
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if v.is_empty() || v.contains(['/', '\\']) {
                return Err(invalid(
                    "logging",
                    "file",
                    v,
                    "must be a plain file name",
                ));
            }
            config.logging.file = v.to_string();
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use tempfile::TempDir;

    fn load(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, content).unwrap();
        ConfigFile::load_from(&config_path)
    }

    #[test]
    fn test_full_config() {
        let config = load(
            r#"
[source]
url = https://example.test/iss-now.json
timeout = 5

[tracking]
interval = 0.5

[logging]
directory = /var/log/isstrack
file = tracker.log
"#,
        )
        .unwrap();

        assert_eq!(config.source.url, "https://example.test/iss-now.json");
        assert_eq!(config.source.timeout, 5);
        assert_eq!(config.tracking.interval, 0.5);
        assert_eq!(config.logging.directory, PathBuf::from("/var/log/isstrack"));
        assert_eq!(config.logging.file, "tracker.log");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = load(
            r#"
[tracking]
interval = 10
"#,
        )
        .unwrap();

        assert_eq!(config.tracking.interval, 10.0);
        assert_eq!(config.source, ConfigFile::default().source);
        assert_eq!(config.logging.file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = load(
            r#"
[source]
api_key = unused

[display]
theme = dark
"#,
        )
        .unwrap();

        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_invalid_url() {
        let err = load(
            r#"
[source]
url = ftp://example.test/iss
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("source.url"));
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_invalid_timeout() {
        for value in ["0", "-3", "ten"] {
            let err = load(&format!("[source]\ntimeout = {}\n", value)).unwrap_err();
            assert!(
                matches!(err, ConfigFileError::InvalidValue { ref key, .. } if key == "timeout"),
                "value {value} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_interval() {
        for value in ["0", "-1", "NaN", "inf", "fast", "1e-12", "1e19"] {
            let err = load(&format!("[tracking]\ninterval = {}\n", value)).unwrap_err();
            assert!(
                err.to_string().contains("tracking.interval"),
                "value {value} should be rejected"
            );
        }
    }

    #[test]
    fn test_small_fractional_interval_accepted() {
        let config = load("[tracking]\ninterval = 0.25\n").unwrap();
        assert_eq!(config.tracking.interval, 0.25);
    }

    #[test]
    fn test_invalid_log_file() {
        let err = load("[logging]\nfile = logs/isstrack.log\n").unwrap_err();
        assert!(err.to_string().contains("logging.file"));
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/test/path");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("test/path"));
        }

        // Non-tilde paths should be unchanged
        let path = expand_tilde("/absolute/path");
        assert_eq!(path, PathBuf::from("/absolute/path"));
    }
}
