//! Upstream position sources.
//!
//! This module is the network boundary of the tracker. The engine only sees
//! the [`PositionSource`] trait; the concrete transport lives here.
//!
//! # Architecture
//!
//! ```text
//! TrackingEngine (poll loop)
//!     │
//!     └── PositionSource trait → OpenNotifyClient (direct reqwest)
//!             │
//!             └── GET iss-now.json → RawObservation (coordinates as text)
//! ```

mod client;
mod config;
mod error;

pub use client::{parse_payload, OpenNotifyClient, PositionSource, RawObservation};
pub use config::{SourceConfig, DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::FetchError;
