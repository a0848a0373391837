//! Aegis Core - Telemetry store, entry types, config, error handling

pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use config::ConsoleConfig;
pub use error::{Error, Result};
pub use store::{Snapshot, TelemetryStore};
pub use types::*;
