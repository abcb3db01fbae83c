//! isstrack - Live International Space Station tracking
//!
//! This library polls a position feed on a fixed interval, validates each
//! record, accumulates the ground track and reports every fix to a consumer.
//! Any failure halts the session; a new session starts from scratch.
//!
//! # High-Level API
//!
//! ```ignore
//! use std::sync::Arc;
//! use isstrack::source::{OpenNotifyClient, SourceConfig};
//! use isstrack::tracking::{ChannelConsumer, TrackingEngine};
//!
//! let client = OpenNotifyClient::new(SourceConfig::default())?;
//! let (consumer, mut events) = ChannelConsumer::new();
//! let engine = TrackingEngine::new(client, Arc::new(consumer));
//! engine.start(3.0)?;
//!
//! while let Some(event) = events.recv().await {
//!     println!("{:?}", event);
//! }
//! ```

pub mod config;
pub mod geo;
pub mod logging;
pub mod source;
pub mod tracking;

/// Version of the isstrack library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
