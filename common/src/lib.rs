//! Shared types for the hopper pipeline helpers.
//!
//! This crate holds the value types the OS-facing operations in `hopper-core`
//! consume and produce: the error taxonomy, cache host configuration, and
//! calendar arithmetic. Nothing here spawns processes or probes the network.

pub mod calendar;
pub mod config;
pub mod error;

pub use config::CacheConfig;
pub use error::{CommandError, Error, Result};
