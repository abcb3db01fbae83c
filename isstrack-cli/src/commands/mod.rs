//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, show, init)
//! - [`locate`] - One-shot position lookup (`isstrack where`)
//! - [`track`] - Live tracking session

pub mod config;
pub mod locate;
pub mod track;
