//! Position source trait and Open Notify implementation.
//!
//! The [`PositionSource`] trait is the boundary between the tracking engine and
//! the network. The [`OpenNotifyClient`] implementation fetches the ISS
//! position from the Open Notify `iss-now.json` endpoint via `reqwest`.

use std::future::Future;

use serde::Deserialize;

use super::config::SourceConfig;
use super::error::FetchError;

/// User-Agent sent with every request.
const USER_AGENT: &str = concat!("isstrack/", env!("CARGO_PKG_VERSION"));

/// Position record as delivered by a source, before validation.
///
/// Coordinates are kept as text; [`decode`](crate::tracking::decode) turns
/// them into a validated [`Position`](crate::tracking::Position).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObservation {
    pub latitude: String,
    pub longitude: String,
    pub timestamp: i64,
    pub message: String,
}

/// Trait for fetching one raw position record.
///
/// One call is one round trip. Implementations must not retry; every failure
/// is reported as a [`FetchError`].
pub trait PositionSource: Send + Sync {
    /// Fetch the current position record.
    fn fetch(&self) -> impl Future<Output = Result<RawObservation, FetchError>> + Send;
}

/// Top-level Open Notify payload.
#[derive(Deserialize)]
struct IssNowPayload {
    timestamp: i64,
    message: String,
    iss_position: IssPositionPayload,
}

/// Coordinates are JSON strings in the upstream feed.
#[derive(Deserialize)]
struct IssPositionPayload {
    latitude: String,
    longitude: String,
}

impl From<IssNowPayload> for RawObservation {
    fn from(payload: IssNowPayload) -> Self {
        Self {
            latitude: payload.iss_position.latitude,
            longitude: payload.iss_position.longitude,
            timestamp: payload.timestamp,
            message: payload.message,
        }
    }
}

/// Parse an Open Notify response body.
pub fn parse_payload(bytes: &[u8]) -> Result<RawObservation, FetchError> {
    let payload: IssNowPayload = serde_json::from_slice(bytes)?;
    Ok(payload.into())
}

/// Open Notify client using direct HTTP requests.
///
/// Uses a reusable `reqwest::Client` with connection pooling and a per-request
/// timeout.
pub struct OpenNotifyClient {
    /// Reusable HTTP client.
    http: reqwest::Client,

    /// Endpoint and timeout.
    config: SourceConfig,
}

impl OpenNotifyClient {
    /// Create a new client.
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// The endpoint this client polls.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    fn map_request_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.config.timeout)
        } else {
            FetchError::Http(e.to_string())
        }
    }
}

impl PositionSource for OpenNotifyClient {
    async fn fetch(&self) -> Result<RawObservation, FetchError> {
        let response = self
            .http
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let raw = parse_payload(&bytes)?;

        tracing::trace!(
            url = %self.config.url,
            latitude = %raw.latitude,
            longitude = %raw.longitude,
            timestamp = raw.timestamp,
            message = %raw.message,
            "Position record fetched"
        );

        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = OpenNotifyClient::new(SourceConfig::default()).unwrap();
        assert_eq!(client.url(), "http://api.open-notify.org/iss-now.json");
    }

    #[test]
    fn test_parse_payload() {
        let json = br#"{
            "timestamp": 1694700000,
            "message": "success",
            "iss_position": {"latitude": "51.5074", "longitude": "-0.1278"}
        }"#;

        let raw = parse_payload(json).unwrap();
        assert_eq!(
            raw,
            RawObservation {
                latitude: "51.5074".to_string(),
                longitude: "-0.1278".to_string(),
                timestamp: 1694700000,
                message: "success".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_payload_keeps_coordinate_text_verbatim() {
        // Validation belongs to the decoder, not the wire layer
        let json = br#"{
            "timestamp": 0,
            "message": "success",
            "iss_position": {"latitude": "not-a-number", "longitude": "999"}
        }"#;

        let raw = parse_payload(json).unwrap();
        assert_eq!(raw.latitude, "not-a-number");
        assert_eq!(raw.longitude, "999");
    }

    #[test]
    fn test_parse_payload_ignores_extra_fields() {
        let json = br#"{
            "timestamp": 1,
            "message": "success",
            "iss_position": {"latitude": "1.0", "longitude": "2.0", "altitude": "420"},
            "velocity": 27600
        }"#;

        assert!(parse_payload(json).is_ok());
    }

    #[test]
    fn test_parse_payload_rejects_numeric_coordinates() {
        let json = br#"{
            "timestamp": 1,
            "message": "success",
            "iss_position": {"latitude": 1.0, "longitude": 2.0}
        }"#;

        assert!(matches!(parse_payload(json), Err(FetchError::Payload(_))));
    }

    #[test]
    fn test_parse_payload_rejects_missing_position() {
        let json = br#"{"timestamp": 1, "message": "success"}"#;
        assert!(matches!(parse_payload(json), Err(FetchError::Payload(_))));
    }

    #[test]
    fn test_parse_payload_rejects_invalid_json() {
        assert!(matches!(
            parse_payload(b"<html>502 Bad Gateway</html>"),
            Err(FetchError::Payload(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_fetch_error() {
        // Port 9 on localhost is discard; nothing should be listening
        let config = SourceConfig {
            url: "http://127.0.0.1:9/iss-now.json".to_string(),
            timeout: Duration::from_secs(2),
        };
        let client = OpenNotifyClient::new(config).unwrap();

        let result = client.fetch().await;
        assert!(matches!(
            result,
            Err(FetchError::Http(_)) | Err(FetchError::Timeout(_))
        ));
    }
}
