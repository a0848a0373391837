//! The telemetry store — the one shared mutable resource in the console.
//!
//! Holds a bounded, insertion-ordered sequence of log entries plus a handful
//! of display scalars. Single-writer discipline: every mutation goes through
//! a store method, which takes the interior lock, applies the change, and
//! bumps a `watch` revision so subscribed views redraw.

use crate::types::{LogCategory, LogDraft, LogEntry, LogKind};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use tokio::sync::watch;

/// Most-recent entries retained after every append.
pub const DEFAULT_LOG_CAP: usize = 100;

struct State {
    status: String,
    active_model: String,
    active_mode: String,
    token_rate: u64,
    latency_ms: u64,
    logs: VecDeque<LogEntry>,
}

/// Immutable read view of the store at one point in time.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub status: String,
    pub active_model: String,
    pub active_mode: String,
    pub token_rate: u64,
    pub latency_ms: u64,
    /// Insertion-ordered, oldest first. Consumers reverse for display.
    pub logs: Vec<LogEntry>,
}

impl Snapshot {
    /// Entries in the given category, relative order preserved.
    pub fn in_category(&self, category: LogCategory) -> Vec<&LogEntry> {
        self.logs.iter().filter(|e| e.category == category).collect()
    }

    /// Entries matching a case-insensitive substring query over msg,
    /// details, and category label. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&LogEntry> {
        if query.is_empty() {
            return self.logs.iter().collect();
        }
        self.logs.iter().filter(|e| e.matches(query)).collect()
    }
}

/// Process-wide observable state container. Cheap to share behind an `Arc`;
/// readers never block writers for longer than a clone.
pub struct TelemetryStore {
    state: RwLock<State>,
    next_id: AtomicU64,
    cap: usize,
    revision: watch::Sender<u64>,
}

impl TelemetryStore {
    /// New store seeded with the boot entry, capped at `cap` entries.
    pub fn new(cap: usize) -> Self {
        let (revision, _) = watch::channel(0);
        let store = Self {
            state: RwLock::new(State {
                status: "OPERATIONAL".to_string(),
                active_model: "Synergy-v9.8-Quantum".to_string(),
                active_mode: "Holistic".to_string(),
                token_rate: 1200,
                latency_ms: 12,
                logs: VecDeque::with_capacity(cap + 1),
            }),
            next_id: AtomicU64::new(1),
            cap: cap.max(1),
            revision,
        };
        store.append(
            LogDraft::info(LogCategory::Neural, "System Initialized")
                .with_details("Full system boot complete."),
        );
        store
    }

    /// Append a draft entry: assign a fresh id and display timestamp, push at
    /// the newest end, evict oldest-first past the cap. Always succeeds.
    pub fn append(&self, draft: LogDraft) -> LogEntry {
        let entry = LogEntry {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            time: chrono::Local::now().format("%H:%M:%S").to_string(),
            msg: draft.msg,
            details: draft.details,
            kind: draft.kind,
            category: draft.category,
        };
        {
            let mut state = self.state.write().expect("store lock poisoned");
            state.logs.push_back(entry.clone());
            while state.logs.len() > self.cap {
                state.logs.pop_front();
            }
        }
        self.notify();
        entry
    }

    pub fn set_status(&self, status: impl Into<String>) {
        self.state.write().expect("store lock poisoned").status = status.into();
        self.notify();
    }

    pub fn set_active_model(&self, model: impl Into<String>) {
        self.state.write().expect("store lock poisoned").active_model = model.into();
        self.notify();
    }

    pub fn set_active_mode(&self, mode: impl Into<String>) {
        self.state.write().expect("store lock poisoned").active_mode = mode.into();
        self.notify();
    }

    /// Overwrite both display counters.
    pub fn update_stats(&self, token_rate: u64, latency_ms: u64) {
        {
            let mut state = self.state.write().expect("store lock poisoned");
            state.token_rate = token_rate;
            state.latency_ms = latency_ms;
        }
        self.notify();
    }

    /// Current state as an owned snapshot. Never blocks on a writer for
    /// longer than the copy.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.state.read().expect("store lock poisoned");
        Snapshot {
            status: state.status.clone(),
            active_model: state.active_model.clone(),
            active_mode: state.active_mode.clone(),
            token_rate: state.token_rate,
            latency_ms: state.latency_ms,
            logs: state.logs.iter().cloned().collect(),
        }
    }

    /// Revision counter bumped on every mutation. Subscribers redraw on
    /// change; the value itself only matters for change detection.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    fn notify(&self) {
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }
}

impl Default for TelemetryStore {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAP)
    }
}
