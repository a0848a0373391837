//! Core types for the Aegis telemetry stream

use serde::{Deserialize, Serialize};

/// Visual classification of a log entry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Warn,
    Success,
}

/// Filtering/grouping classification of a log entry.
#[derive(Clone, Copy, Debug, Hash, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    Neural,
    Epistemic,
    Data,
    Governance,
}

impl LogCategory {
    /// Lowercase display label, used for free-text filtering.
    pub fn label(&self) -> &'static str {
        match self {
            LogCategory::Neural => "neural",
            LogCategory::Epistemic => "epistemic",
            LogCategory::Data => "data",
            LogCategory::Governance => "governance",
        }
    }

    pub const ALL: [LogCategory; 4] = [
        LogCategory::Neural,
        LogCategory::Epistemic,
        LogCategory::Data,
        LogCategory::Governance,
    ];
}

impl std::fmt::Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single telemetry log entry. Immutable after creation; ids are assigned
/// by the store and never reused within a session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    /// Wall-clock display time, captured at insertion. Not an ordering key.
    pub time: String,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub kind: LogKind,
    pub category: LogCategory,
}

impl LogEntry {
    /// Case-insensitive substring match over msg, details, and category label.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.msg.to_lowercase().contains(&query)
            || self
                .details
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
            || self.category.label().contains(&query)
    }
}

/// An entry as submitted by a feed or user action: everything except the
/// store-assigned id and timestamp.
#[derive(Clone, Debug)]
pub struct LogDraft {
    pub msg: String,
    pub details: Option<String>,
    pub kind: LogKind,
    pub category: LogCategory,
}

impl LogDraft {
    pub fn new(kind: LogKind, category: LogCategory, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            details: None,
            kind,
            category,
        }
    }

    pub fn info(category: LogCategory, msg: impl Into<String>) -> Self {
        Self::new(LogKind::Info, category, msg)
    }

    pub fn warn(category: LogCategory, msg: impl Into<String>) -> Self {
        Self::new(LogKind::Warn, category, msg)
    }

    pub fn success(category: LogCategory, msg: impl Into<String>) -> Self {
        Self::new(LogKind::Success, category, msg)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
