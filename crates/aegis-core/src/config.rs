//! Console configuration
//!
//! All tunable parameters in one place. Loaded from TOML at startup,
//! falls back to defaults if no config file exists.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level console configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Telemetry store parameters.
    pub store: StoreConfig,
    /// Synthetic feed intervals.
    pub feeds: FeedConfig,
    /// Scripted scenario timing.
    pub scenarios: ScenarioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Most-recent log entries retained.
    pub log_cap: usize,
    /// Model name shown at startup.
    pub default_model: String,
    /// Mode shown at startup.
    pub default_mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Page-local feed tick in milliseconds (one synthetic entry per tick).
    pub page_tick_ms: u64,
    /// Stats feed tick in milliseconds (token-rate walk + latency draw).
    pub stats_tick_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Delay before an inference run reports verification, in milliseconds.
    pub inference_ms: u64,
    /// Duration of burst mode before status returns to OPERATIONAL.
    pub burst_ms: u64,
    /// Delay before a policy scenario reports neutralization.
    pub policy_ms: u64,
}

// ============================================================
// Defaults
// ============================================================

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            feeds: FeedConfig::default(),
            scenarios: ScenarioConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log_cap: crate::store::DEFAULT_LOG_CAP,
            default_model: "Synergy-v9.8-Quantum".into(),
            default_mode: "Holistic".into(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { page_tick_ms: 2_500, stats_tick_ms: 1_000 }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self { inference_ms: 2_000, burst_ms: 5_000, policy_ms: 4_000 }
    }
}

// ============================================================
// Loading
// ============================================================

impl ConsoleConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {} — using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("No config at {} — using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write the current config as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
