//! Core state types for position tracking.
//!
//! - [`Position`] - A validated, immutable position fix
//! - [`CoordinateField`] - Which coordinate of a raw record was rejected
//! - [`DecodeError`] - Validation failure while decoding a raw record
//! - [`HaltReason`] - Why a tracking session stopped
//! - [`TrackingState`] - The engine's state machine

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::source::FetchError;

/// Valid latitude range in degrees.
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Valid longitude range in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A single observed position.
///
/// Constructed only through [`Position::new`], which enforces the coordinate
/// ranges, so every `Position` in a path is known to be on the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    latitude: f64,
    longitude: f64,
    observed_at_unix_seconds: i64,
}

impl Position {
    /// Create a position, rejecting coordinates outside the valid ranges.
    ///
    /// NaN and infinities never fall inside a range, so they are rejected too.
    pub fn new(
        latitude: f64,
        longitude: f64,
        observed_at_unix_seconds: i64,
    ) -> Result<Self, DecodeError> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(DecodeError::MalformedCoordinate(CoordinateField::Latitude));
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(DecodeError::MalformedCoordinate(CoordinateField::Longitude));
        }

        Ok(Self {
            latitude,
            longitude,
            observed_at_unix_seconds,
        })
    }

    /// Latitude in degrees (-90 to 90).
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees (-180 to 180).
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Upstream observation time as Unix seconds.
    #[inline]
    pub fn observed_at_unix_seconds(&self) -> i64 {
        self.observed_at_unix_seconds
    }

    /// Observation time as a UTC timestamp.
    ///
    /// Returns `None` if the upstream timestamp is outside chrono's range.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.observed_at_unix_seconds, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Coordinate field of a raw observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateField {
    Latitude,
    Longitude,
}

impl CoordinateField {
    /// Field name as it appears in the upstream record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while decoding a raw observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The field is not a base-10 number or is outside its valid range.
    #[error("Malformed {0} in position record")]
    MalformedCoordinate(CoordinateField),
}

impl DecodeError {
    /// The coordinate field that failed validation.
    pub fn field(&self) -> CoordinateField {
        match self {
            Self::MalformedCoordinate(field) => *field,
        }
    }
}

/// Why a tracking session halted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HaltReason {
    /// The source could not deliver a record.
    #[error("Position fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The source delivered a record that failed validation.
    #[error("Position decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// `stop()` was called. Not a failure.
    #[error("Tracking stopped by user")]
    UserStopped,
}

impl HaltReason {
    /// Returns true if the session ended because of a fetch or decode failure.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::UserStopped)
    }
}

/// Tracking engine state.
///
/// ```text
/// Idle ──start──▶ AwaitingFirst ──observation──▶ Tracking ──observation──┐
///                      │                            │  ▲                 │
///                      └──failure / stop──▶ Halted ◀┘  └─────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TrackingState {
    /// Engine constructed, not yet started.
    #[default]
    Idle,
    /// Polling started, no observation yet.
    AwaitingFirst,
    /// At least one observation, polling continues.
    Tracking,
    /// Terminal. No further fetches for this session.
    Halted(HaltReason),
}

impl TrackingState {
    /// Returns true while the poll loop is scheduling cycles.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::AwaitingFirst | Self::Tracking)
    }

    /// Returns true once the session is over.
    pub fn is_halted(&self) -> bool {
        matches!(self, Self::Halted(_))
    }

    /// The halt reason, if halted.
    pub fn halt_reason(&self) -> Option<&HaltReason> {
        match self {
            Self::Halted(reason) => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for TrackingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::AwaitingFirst => write!(f, "Awaiting first fix"),
            Self::Tracking => write!(f, "Tracking"),
            Self::Halted(reason) => write!(f, "Halted ({})", reason),
        }
    }
}
