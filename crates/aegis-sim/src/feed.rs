//! Synthetic telemetry feeds
//!
//! Periodic tasks that push canned entries and stat updates into the store.
//! One page-local feed runs per active console page and is cancelled when
//! the page deactivates; the stats feed runs for the whole session.

use crate::catalog;
use aegis_core::{LogCategory, TelemetryStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Spawn a periodic feed appending one random entry from the category's
/// table per tick, until cancelled.
pub fn spawn_feed(
    store: Arc<TelemetryStore>,
    category: LogCategory,
    period: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut rng = StdRng::from_entropy();
        let mut interval = tokio::time::interval(period);
        // First tick fires immediately; skip it so page switches don't
        // append an entry per keystroke.
        interval.tick().await;
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("{} feed cancelled", category);
                    return;
                }
                _ = interval.tick() => {
                    store.append(catalog::random_draft(&mut rng, category));
                }
            }
        }
    })
}

/// Spawn the session-wide stats feed: a token-rate random walk plus a fresh
/// latency draw per tick. During burst the counters jump to the overload
/// envelope instead of walking.
pub fn spawn_stats_feed(
    store: Arc<TelemetryStore>,
    period: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut rng = StdRng::from_entropy();
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("stats feed cancelled");
                    return;
                }
                _ = interval.tick() => {
                    let snap = store.snapshot();
                    let (token_rate, latency_ms) = if snap.status == "BURST" {
                        (rng.gen_range(6_000..=9_000), rng.gen_range(1..=6))
                    } else {
                        let step = rng.gen_range(0..=300);
                        let token_rate = if rng.gen_bool(0.5) {
                            snap.token_rate.saturating_add(step).min(4_000)
                        } else {
                            snap.token_rate.saturating_sub(step).max(400)
                        };
                        (token_rate, rng.gen_range(5..=40))
                    };
                    store.update_stats(token_rate, latency_ms);
                }
            }
        }
    })
}
