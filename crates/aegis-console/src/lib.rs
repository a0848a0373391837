//! Terminal console for the Aegis governance platform
//!
//! Fourteen pages over one shared telemetry store. `run_console` owns the
//! terminal and the background feeds; everything else is state and drawing.

pub mod app;
pub mod pages;
pub mod run;
pub mod ui;

pub use app::{Action, App};
pub use pages::Page;
pub use run::run_console;
