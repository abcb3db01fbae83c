//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use isstrack::config::ConfigFileError;
use isstrack::source::FetchError;
use isstrack::tracking::{DecodeError, HaltReason, StartError};

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to create the position client or fetch a record
    Source(FetchError),
    /// A fetched record could not be decoded
    Decode(DecodeError),
    /// Tracking could not be started
    Start(StartError),
    /// Tracking halted on a fetch or decode failure
    Halted(HaltReason),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Source(_) | CliError::Halted(HaltReason::Fetch(_)) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. No network connection");
                eprintln!("  2. Position feed is down or rate limiting requests");
                eprintln!("  3. Wrong feed URL: check [source] url in config.ini or --url");
            }
            CliError::Start(_) => {
                eprintln!();
                eprintln!("Set a positive --interval or [tracking] interval in config.ini");
            }
            _ => {}
        }

        if let Some(hint) = self.restart_hint() {
            eprintln!();
            eprintln!("{}", hint);
        }

        process::exit(1)
    }

    /// Restart hint for sessions that halted on a failure.
    fn restart_hint(&self) -> Option<&'static str> {
        match self {
            CliError::Halted(reason) if reason.is_failure() => {
                Some("Tracking has stopped. Run 'isstrack track' again to restart.")
            }
            _ => None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Source(e) => write!(f, "Failed to fetch position: {}", e),
            CliError::Decode(e) => write!(f, "Failed to read position: {}", e),
            CliError::Start(e) => write!(f, "Failed to start tracking: {}", e),
            CliError::Halted(reason) => write!(f, "Tracking halted: {}", reason),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Source(e) => Some(e),
            CliError::Decode(e) => Some(e),
            CliError::Start(e) => Some(e),
            CliError::Halted(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<FetchError> for CliError {
    fn from(e: FetchError) -> Self {
        CliError::Source(e)
    }
}
