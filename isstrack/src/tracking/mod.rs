//! Position tracking core.
//!
//! This module turns a stream of raw upstream records into an ordered path of
//! validated positions and reports each step to a presentation layer.
//!
//! # Architecture
//!
//! ```text
//! ticker ──▶ PositionSource::fetch ──▶ decode ──▶ PathAccumulator::append
//!                   │                    │                 │
//!                   └──── failure ───────┘                 ▼
//!                           │                  on_observation(position, is_first, path)
//!                           ▼
//!                 Halted + on_error(reason)
//! ```
//!
//! A session halts on the first fetch or decode failure. Stale or invalid
//! position data is worse than none, so there is no retry; a new session is a
//! new engine.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use isstrack::source::{OpenNotifyClient, SourceConfig};
//! use isstrack::tracking::{ChannelConsumer, TrackingEngine, TrackingEvent};
//!
//! let client = OpenNotifyClient::new(SourceConfig::default())?;
//! let (consumer, mut events) = ChannelConsumer::new();
//! let engine = TrackingEngine::new(client, Arc::new(consumer));
//!
//! engine.start(3.0)?;
//! while let Some(event) = events.recv().await {
//!     match event {
//!         TrackingEvent::Observation { position, is_first, .. } => {
//!             println!("{} (first: {})", position, is_first);
//!         }
//!         TrackingEvent::Error(reason) => {
//!             eprintln!("{}", reason);
//!             break;
//!         }
//!     }
//! }
//! ```
//!
//! # Components
//!
//! - [`state`] - `Position`, `TrackingState`, `HaltReason`, `DecodeError`
//! - [`decoder`] - `decode()` from `RawObservation` to `Position`
//! - [`path`] - `PathAccumulator`, the append-only path
//! - [`consumer`] - `TrackingConsumer` trait and `ChannelConsumer`
//! - [`engine`] - `TrackingEngine` and `TrackingHandle`

mod consumer;
mod decoder;
mod engine;
mod path;
mod state;

pub use consumer::{ChannelConsumer, TrackingConsumer, TrackingEvent};
pub use decoder::decode;
pub use engine::{interval_period, StartError, TrackingEngine, TrackingHandle};
pub use path::PathAccumulator;
pub use state::{
    CoordinateField, DecodeError, HaltReason, Position, TrackingState, MAX_LATITUDE,
    MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};
