//! Tests for aegis-sim: catalogs, feeds, scripted scenarios

use aegis_core::{LogCategory, LogKind, TelemetryStore};
use aegis_sim::catalog::{self, GateStatus};
use aegis_sim::{scenario, spawn_feed, spawn_stats_feed};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

// ===========================================================================
// Catalogs
// ===========================================================================

#[test]
fn every_category_has_messages() {
    for category in LogCategory::ALL {
        assert!(!catalog::messages_for(category).is_empty(), "{category} table empty");
    }
}

#[test]
fn random_draft_tags_the_requested_category() {
    let mut rng = StdRng::seed_from_u64(7);
    for category in LogCategory::ALL {
        for _ in 0..20 {
            let draft = catalog::random_draft(&mut rng, category);
            assert_eq!(draft.category, category);
            assert!(!draft.msg.is_empty());
        }
    }
}

#[test]
fn charter_gates_match_the_axiom_set() {
    assert_eq!(catalog::CHARTER_GATES.len(), 4);
    assert_eq!(catalog::AXIOMS.len(), 4);
    for (gate, axiom) in catalog::CHARTER_GATES.iter().zip(catalog::AXIOMS) {
        assert_eq!(gate.id, axiom.id);
    }
    // AX-03 (Explainability) is the one warning gate.
    let warns: Vec<&str> = catalog::CHARTER_GATES
        .iter()
        .filter(|g| g.status == GateStatus::Warn)
        .map(|g| g.id)
        .collect();
    assert_eq!(warns, vec!["AX-03"]);
}

#[test]
fn fixed_tables_are_populated() {
    assert_eq!(catalog::PLAYGROUND_MODELS.len(), 3);
    assert_eq!(catalog::POLICY_SCENARIOS.len(), 3);
    assert_eq!(catalog::REGIONS.len(), 4);
    assert_eq!(catalog::LINEAGE_NODES.len(), 4);
    assert_eq!(catalog::SETTINGS_PANELS.len(), 4);
    assert_eq!(catalog::REPO_TREE.len(), 6);
    assert_eq!(catalog::INTERVENTIONS.len(), 3);
    assert_eq!(catalog::CAUSAL_TRACES.len(), 2);
    assert_eq!(catalog::KNOWLEDGE_GAPS.len(), 3);
    assert_eq!(catalog::PROVENANCE_RECORDS.len(), 3);
    for trace in catalog::CAUSAL_TRACES {
        assert_eq!(trace.logic.len(), 4);
    }
}

#[test]
fn gate_status_labels() {
    assert_eq!(GateStatus::Pass.label(), "PASS");
    assert_eq!(GateStatus::Warn.label(), "WARN");
}

// ===========================================================================
// Feeds
// ===========================================================================

#[tokio::test]
async fn feed_appends_and_stops_on_cancel() {
    let store = Arc::new(TelemetryStore::default());
    let cancel = CancellationToken::new();
    let handle = spawn_feed(
        store.clone(),
        LogCategory::Epistemic,
        Duration::from_millis(5),
        cancel.clone(),
    );

    tokio::time::sleep(Duration::from_millis(40)).await;
    let grown = store.snapshot().logs.len();
    assert!(grown > 1, "feed never appended");

    cancel.cancel();
    handle.await.unwrap();
    let stopped = store.snapshot().logs.len();
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(store.snapshot().logs.len(), stopped);

    // Everything the feed appended carries its category.
    for entry in store.snapshot().logs.iter().skip(1) {
        assert_eq!(entry.category, LogCategory::Epistemic);
    }
}

#[tokio::test]
async fn stats_feed_walks_within_bounds() {
    let store = Arc::new(TelemetryStore::default());
    let cancel = CancellationToken::new();
    let handle = spawn_stats_feed(store.clone(), Duration::from_millis(5), cancel.clone());

    tokio::time::sleep(Duration::from_millis(40)).await;
    cancel.cancel();
    handle.await.unwrap();

    let snap = store.snapshot();
    assert!((400..=4_000).contains(&snap.token_rate));
    assert!((5..=40).contains(&snap.latency_ms));
}

#[tokio::test]
async fn stats_feed_uses_burst_envelope() {
    let store = Arc::new(TelemetryStore::default());
    store.set_status("BURST");
    let cancel = CancellationToken::new();
    let handle = spawn_stats_feed(store.clone(), Duration::from_millis(5), cancel.clone());

    tokio::time::sleep(Duration::from_millis(40)).await;
    cancel.cancel();
    handle.await.unwrap();

    let snap = store.snapshot();
    assert!((6_000..=9_000).contains(&snap.token_rate));
    assert!((1..=6).contains(&snap.latency_ms));
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[tokio::test]
async fn inference_appends_start_and_verification() {
    let store = Arc::new(TelemetryStore::default());
    scenario::run_inference(
        store.clone(),
        "Aegis-v4",
        "probe the charter",
        Duration::from_millis(5),
    )
    .await;

    let snap = store.snapshot();
    let last_two: Vec<_> = snap.logs.iter().rev().take(2).collect();
    assert_eq!(last_two[0].msg, "CharterLayer verification complete");
    assert_eq!(last_two[0].kind, LogKind::Success);
    assert_eq!(last_two[0].category, LogCategory::Governance);
    assert_eq!(last_two[1].msg, "Playground inference started [Aegis-v4]");
    assert_eq!(last_two[1].details.as_deref(), Some("Prompt: probe the charter"));
}

#[tokio::test]
async fn burst_flips_status_and_restores_it() {
    let store = Arc::new(TelemetryStore::default());
    let task = tokio::spawn(scenario::run_burst(store.clone(), Duration::from_millis(30)));

    tokio::time::sleep(Duration::from_millis(10)).await;
    let mid = store.snapshot();
    assert_eq!(mid.status, "BURST");
    assert_eq!(mid.token_rate, 8_400);

    task.await.unwrap();
    let done = store.snapshot();
    assert_eq!(done.status, "OPERATIONAL");
    assert_eq!(done.token_rate, 1_200);
    assert_eq!(done.logs.last().unwrap().msg, "Burst mode disengaged");
}

#[tokio::test]
async fn policy_scenario_initiates_then_neutralizes() {
    let store = Arc::new(TelemetryStore::default());
    let scenario_def = &catalog::POLICY_SCENARIOS[0];
    scenario::run_policy(store.clone(), scenario_def, Duration::from_millis(5)).await;

    let snap = store.snapshot();
    let governance = snap.in_category(LogCategory::Governance);
    assert_eq!(governance.len(), 2);
    assert_eq!(governance[0].msg, "Scenario Initiated: Socio-Economic Filter");
    assert_eq!(governance[1].msg, "Scenario Neutralized");
    assert_eq!(governance[1].kind, LogKind::Success);
}
