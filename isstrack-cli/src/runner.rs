//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and client creation
//! to reduce duplication across command handlers.

use crate::error::CliError;
use isstrack::config::ConfigFile;
use isstrack::logging::{init_logging, LoggingGuard};
use isstrack::source::{OpenNotifyClient, SourceConfig};
use tracing::info;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `verbose` - Mirror log events to stderr in addition to the log file
    pub fn new(verbose: bool) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        let logging_guard =
            init_logging(&config.logging.directory, &config.logging.file, verbose)
                .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("isstrack v{}", isstrack::VERSION);
        info!("isstrack CLI: {} command", command);
    }

    /// Resolve the source configuration: CLI overrides, then config file.
    pub fn source_config(&self, url: Option<String>, timeout: Option<u64>) -> SourceConfig {
        resolve_source_config(&self.config, url, timeout)
    }

    /// Create the Open Notify client for the given configuration.
    pub fn create_client(&self, config: SourceConfig) -> Result<OpenNotifyClient, CliError> {
        info!(url = %config.url, timeout = ?config.timeout, "Creating position client");
        OpenNotifyClient::new(config).map_err(CliError::Source)
    }
}

fn resolve_source_config(
    config: &ConfigFile,
    url: Option<String>,
    timeout: Option<u64>,
) -> SourceConfig {
    SourceConfig::from_config(
        url.unwrap_or_else(|| config.source.url.clone()),
        timeout.unwrap_or(config.source.timeout),
    )
}
