//! Aegis Sim - canned catalogs, synthetic feeds, scripted scenarios
//!
//! Everything in here is decorative simulation: random picks from fixed
//! tables, pushed into the telemetry store on timers or user actions.

pub mod catalog;
pub mod feed;
pub mod scenario;

pub use feed::{spawn_feed, spawn_stats_feed};
