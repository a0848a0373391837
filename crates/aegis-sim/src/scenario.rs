//! Scripted user-triggered sequences
//!
//! Each one is a short async script the console spawns: append an opening
//! entry, wait, append the outcome. Delays come from `ScenarioConfig` so
//! tests can shrink them.

use crate::catalog::PolicyScenario;
use aegis_core::{LogCategory, LogDraft, TelemetryStore};
use std::sync::Arc;
use std::time::Duration;

/// Playground inference run: started entry, processing delay, then the
/// CharterLayer verification result.
pub async fn run_inference(
    store: Arc<TelemetryStore>,
    model: &str,
    prompt: &str,
    delay: Duration,
) {
    store.append(
        LogDraft::info(
            LogCategory::Neural,
            format!("Playground inference started [{model}]"),
        )
        .with_details(format!("Prompt: {prompt}")),
    );
    tokio::time::sleep(delay).await;
    store.append(
        LogDraft::success(LogCategory::Governance, "CharterLayer verification complete")
            .with_details("Output alignment verified against Axiom-01."),
    );
}

/// Burst mode: status flips to BURST with overload counters, then settles
/// back to OPERATIONAL after `duration`.
pub async fn run_burst(store: Arc<TelemetryStore>, duration: Duration) {
    store.set_status("BURST");
    store.update_stats(8_400, 3);
    store.append(
        LogDraft::warn(LogCategory::Neural, "Burst mode engaged")
            .with_details("CharterLayer enforcement under max synaptic load."),
    );
    tokio::time::sleep(duration).await;
    store.set_status("OPERATIONAL");
    store.update_stats(1_200, 12);
    store.append(
        LogDraft::success(LogCategory::Governance, "Burst mode disengaged")
            .with_details("All gates held under overload."),
    );
}

/// Policy scenario: initiated entry, monitoring delay, neutralized entry.
pub async fn run_policy(
    store: Arc<TelemetryStore>,
    scenario: &PolicyScenario,
    delay: Duration,
) {
    store.append(
        LogDraft::info(
            LogCategory::Governance,
            format!("Scenario Initiated: {}", scenario.name),
        )
        .with_details(scenario.desc),
    );
    tokio::time::sleep(delay).await;
    store.append(
        LogDraft::success(LogCategory::Governance, "Scenario Neutralized")
            .with_details("CharterLayer successfully blocked all bias vectors."),
    );
}
