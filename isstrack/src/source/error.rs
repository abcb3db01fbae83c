//! Error types for position sources.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when fetching a position record.
///
/// The tracking engine treats every variant the same way; the detail is kept
/// for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status code.
    #[error("Server returned HTTP {0}")]
    Status(u16),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The response body is not a valid position payload.
    #[error("Failed to parse response: {0}")]
    Payload(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Payload(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FetchError::Http("connection refused".to_string()).to_string(),
            "HTTP request failed: connection refused"
        );
        assert_eq!(FetchError::Status(502).to_string(), "Server returned HTTP 502");
        assert_eq!(
            FetchError::Timeout(Duration::from_secs(10)).to_string(),
            "Request timed out after 10s"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Payload(_)));
    }
}
