//! Configuration for the upstream position source.

use std::time::Duration;

/// Default Open Notify "ISS now" endpoint.
pub const DEFAULT_SOURCE_URL: &str = "http://api.open-notify.org/iss-now.json";

/// Default HTTP timeout per fetch.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`OpenNotifyClient`](super::OpenNotifyClient).
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    /// URL of the JSON position endpoint.
    pub url: String,

    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl SourceConfig {
    /// Create a config from settings values.
    pub fn from_config(url: String, timeout_secs: u64) -> Self {
        Self {
            url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
