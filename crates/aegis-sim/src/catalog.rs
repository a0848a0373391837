//! Fixed content tables
//!
//! Canned log messages per category plus the static tables the console
//! renders: charter axioms, playground models, policy scenarios, repo tree,
//! deployment regions, lineage nodes, settings panels, audit seed entries.

use aegis_core::{LogCategory, LogDraft, LogKind};
use rand::Rng;

/// One canned message: kind, message, optional details.
pub struct CannedMessage {
    pub kind: LogKind,
    pub msg: &'static str,
    pub details: Option<&'static str>,
}

const fn info(msg: &'static str, details: Option<&'static str>) -> CannedMessage {
    CannedMessage { kind: LogKind::Info, msg, details }
}

const fn warn(msg: &'static str, details: Option<&'static str>) -> CannedMessage {
    CannedMessage { kind: LogKind::Warn, msg, details }
}

const fn success(msg: &'static str, details: Option<&'static str>) -> CannedMessage {
    CannedMessage { kind: LogKind::Success, msg, details }
}

pub const NEURAL_MESSAGES: &[CannedMessage] = &[
    info("Synaptic weights rebalanced in fusion core", None),
    info("Latent space index refreshed", Some("Sector sweep completed without anomaly.")),
    info("Quantum core checkpoint committed", None),
    info("Burst capacity headroom recalculated", Some("Synaptic load within nominal envelope.")),
    success("Inference artifact sealed", Some("Output hash recorded for audit.")),
    warn("Activation spike in fusion layer 3", Some("Transient, self-damped within 40ms.")),
];

pub const EPISTEMIC_MESSAGES: &[CannedMessage] = &[
    info("Querying latent space for bias in sector 7", None),
    info("Self-correction: reducing confidence in unverified branch", None),
    info("Simulating counter-factuals for ethical alignment check", None),
    info("Updating causal model based on new evidence", None),
    success("Epistemic inquiry loop converged", Some("Contradiction resolved against primary corpus.")),
    warn("Knowledge gap detected in legal domain", Some("Contradictory precedents queued for inquiry.")),
];

pub const DATA_MESSAGES: &[CannedMessage] = &[
    info("Training Corpus A checksum verified", None),
    info("Provenance chain extended", Some("Inference Artifact 921 linked to Weight Optimizer v4.")),
    info("Weight Optimizer v4 snapshot recorded", None),
    success("Differential privacy budget audit passed", Some("Epsilon spend within configured bound.")),
    warn("Unverified data source quarantined", Some("Lineage could not be traced to a sealed corpus.")),
];

pub const GOVERNANCE_MESSAGES: &[CannedMessage] = &[
    info("Verifying input tensor bounds", Some("All bounds within charter envelope.")),
    info("Checking semantic drift threshold", Some("Measured drift 0.0042.")),
    info("Asserting causal independence", None),
    success("Demographic parity sweep complete", Some("No protected-vector skew detected.")),
    warn("Causal chain complexity warning", Some("Explainability score above 0.8, AX-03 flagged.")),
    warn("Drift detected in Module X-9", Some("Alignment drift above alert threshold.")),
];

/// Canned messages for a category.
pub fn messages_for(category: LogCategory) -> &'static [CannedMessage] {
    match category {
        LogCategory::Neural => NEURAL_MESSAGES,
        LogCategory::Epistemic => EPISTEMIC_MESSAGES,
        LogCategory::Data => DATA_MESSAGES,
        LogCategory::Governance => GOVERNANCE_MESSAGES,
    }
}

/// Uniform random draft from a category's table.
pub fn random_draft<R: Rng>(rng: &mut R, category: LogCategory) -> LogDraft {
    let table = messages_for(category);
    let pick = &table[rng.gen_range(0..table.len())];
    let mut draft = LogDraft::new(pick.kind, category, pick.msg);
    if let Some(details) = pick.details {
        draft = draft.with_details(details);
    }
    draft
}

// ---------------------------------------------------------------------------
// Charter gates and axioms
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateStatus {
    Pass,
    Warn,
}

impl GateStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GateStatus::Pass => "PASS",
            GateStatus::Warn => "WARN",
        }
    }
}

/// A CharterLayer gate as shown on the dashboard.
pub struct CharterGate {
    pub id: &'static str,
    pub name: &'static str,
    pub status: GateStatus,
    pub desc: &'static str,
    pub last_check: &'static str,
}

pub const CHARTER_GATES: &[CharterGate] = &[
    CharterGate {
        id: "AX-01",
        name: "Non-Maleficence",
        status: GateStatus::Pass,
        desc: "Output verified safe against harm vectors",
        last_check: "2ms ago",
    },
    CharterGate {
        id: "AX-02",
        name: "Fairness / Bias",
        status: GateStatus::Pass,
        desc: "Demographic parity checks passing",
        last_check: "12ms ago",
    },
    CharterGate {
        id: "AX-03",
        name: "Explainability",
        status: GateStatus::Warn,
        desc: "Causal chain complexity warning > 0.8",
        last_check: "45ms ago",
    },
    CharterGate {
        id: "AX-04",
        name: "Privacy",
        status: GateStatus::Pass,
        desc: "Differential privacy budget ok",
        last_check: "5ms ago",
    },
];

/// Full charter text for the charter page.
pub struct Axiom {
    pub id: &'static str,
    pub title: &'static str,
    pub level: &'static str,
    pub desc: &'static str,
}

pub const AXIOMS: &[Axiom] = &[
    Axiom {
        id: "AX-01",
        title: "Human Non-Maleficence",
        level: "CRITICAL",
        desc: "No output shall contribute to physical or psychological harm of human entities.",
    },
    Axiom {
        id: "AX-02",
        title: "Demographic Neutrality",
        level: "STRICT",
        desc: "Performance must maintain parity across all protected demographic vectors.",
    },
    Axiom {
        id: "AX-03",
        title: "Causal Transparency",
        level: "HIGH",
        desc: "Every inference must provide a human-legible causal explanation path.",
    },
    Axiom {
        id: "AX-04",
        title: "Privacy Preservation",
        level: "STRICT",
        desc: "Differential privacy must be maintained with a budget eps < 0.01.",
    },
];

// ---------------------------------------------------------------------------
// Playground models and policy scenarios
// ---------------------------------------------------------------------------

pub struct PlaygroundModel {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub mode: &'static str,
}

pub const PLAYGROUND_MODELS: &[PlaygroundModel] = &[
    PlaygroundModel {
        id: "syn-9",
        name: "Synergy-v9.8",
        desc: "Full quantum fusion enabled",
        mode: "Holistic",
    },
    PlaygroundModel {
        id: "aeg-4",
        name: "Aegis-v4",
        desc: "Stable governance prioritized",
        mode: "Defensive",
    },
    PlaygroundModel {
        id: "blt-x",
        name: "Blitz-x1",
        desc: "High-throughput burst core",
        mode: "Performance",
    },
];

pub struct PolicyScenario {
    pub id: u8,
    pub name: &'static str,
    pub desc: &'static str,
    pub impact: &'static str,
}

pub const POLICY_SCENARIOS: &[PolicyScenario] = &[
    PolicyScenario {
        id: 1,
        name: "Socio-Economic Filter",
        desc: "Simulate output biasing toward affluent postal codes.",
        impact: "High",
    },
    PolicyScenario {
        id: 2,
        name: "Knowledge Gap Collision",
        desc: "Trigger epistemic inquiry loop on contradictory legal data.",
        impact: "Medium",
    },
    PolicyScenario {
        id: 3,
        name: "Burst Mode Overload",
        desc: "Test CharterLayer enforcement under max synaptic load.",
        impact: "Extreme",
    },
];

// ---------------------------------------------------------------------------
// Static page tables
// ---------------------------------------------------------------------------

pub struct RepoNode {
    pub name: &'static str,
    pub kind: &'static str,
    pub desc: &'static str,
}

pub const REPO_TREE: &[RepoNode] = &[
    RepoNode { name: "src/engine", kind: "dir", desc: "Core Synergy Engine modules" },
    RepoNode { name: "src/governance", kind: "dir", desc: "CharterLayer and Axiomatic Gates" },
    RepoNode { name: "src/epistemic", kind: "dir", desc: "Active Epistemic Inquiry tools" },
    RepoNode { name: "src/probes", kind: "dir", desc: "Bias detection and mitigation probes" },
    RepoNode { name: "charter.json", kind: "file", desc: "Hard-coded ethical constraints" },
    RepoNode { name: "synergy.config.ts", kind: "file", desc: "Systemic Fusion parameters" },
];

pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
    pub risk: u8,
    pub drift: &'static str,
    pub load: &'static str,
}

pub const REGIONS: &[Region] = &[
    Region { id: "us-east", name: "US-EAST", risk: 12, drift: "0.002", load: "42%" },
    Region { id: "eu-west", name: "EU-WEST", risk: 8, drift: "0.001", load: "38%" },
    Region { id: "ap-south", name: "AP-SOUTH", risk: 45, drift: "0.012", load: "78%" },
    Region { id: "sa-east", name: "SA-EAST", risk: 22, drift: "0.005", load: "55%" },
];

pub struct LineageNode {
    pub id: &'static str,
    pub label: &'static str,
    pub node_type: &'static str,
    pub status: &'static str,
}

pub const LINEAGE_NODES: &[LineageNode] = &[
    LineageNode { id: "L-1", label: "Training Corpus A", node_type: "DATA", status: "VERIFIED" },
    LineageNode { id: "L-2", label: "Weight Optimizer v4", node_type: "PROCESS", status: "ACTIVE" },
    LineageNode { id: "L-3", label: "CharterLayer Probe", node_type: "GOVERNANCE", status: "SECURE" },
    LineageNode { id: "L-4", label: "Inference Artifact 921", node_type: "OUTPUT", status: "AUDITED" },
];

pub struct SettingsPanel {
    pub title: &'static str,
    pub desc: &'static str,
    pub status: &'static str,
}

pub const SETTINGS_PANELS: &[SettingsPanel] = &[
    SettingsPanel {
        title: "Charter Constraints",
        desc: "Manage hard-coded axiomatic principles",
        status: "ENABLED",
    },
    SettingsPanel {
        title: "Privacy Protocols",
        desc: "Differential privacy budget and masking",
        status: "STRICT",
    },
    SettingsPanel {
        title: "Risk Thresholds",
        desc: "Automated alert triggers for drift",
        status: "0.85 ALPHA",
    },
    SettingsPanel {
        title: "Synergy Tuning",
        desc: "NeuralBlitz quantum core parameters",
        status: "AUTO",
    },
];

/// One step in an explained causal reasoning trace.
pub struct CausalStep {
    pub step: &'static str,
    pub result: &'static str,
    pub status: &'static str,
}

/// A recorded inference with its human-legible reasoning path (AX-03).
pub struct CausalTrace {
    pub id: &'static str,
    pub prompt: &'static str,
    pub logic: &'static [CausalStep],
}

pub const CAUSAL_TRACES: &[CausalTrace] = &[
    CausalTrace {
        id: "R-9281",
        prompt: "Summarize medical trial data for pediatric sector.",
        logic: &[
            CausalStep { step: "Entity Recognition", result: "Pediatric subjects identified.", status: "SAFE" },
            CausalStep { step: "Safety Check", result: "AX-01: Non-Maleficence verified.", status: "PASS" },
            CausalStep { step: "Data Anonymization", result: "K-Anonymity confirmed.", status: "PASS" },
            CausalStep { step: "Summary Synthesis", result: "Causal reasoning path exported.", status: "COMPLETE" },
        ],
    },
    CausalTrace {
        id: "R-9282",
        prompt: "Predict urban development growth in zone 4.",
        logic: &[
            CausalStep { step: "Input Validation", result: "Geospatial data verified.", status: "SAFE" },
            CausalStep { step: "Demographic Parity", result: "AX-02: Bias detected in socio-economic weight.", status: "WARN" },
            CausalStep { step: "Bias Mitigation", result: "Weighted correction applied to zone 4 dataset.", status: "FIXED" },
            CausalStep { step: "Synthesis", result: "Fair-parity output generated.", status: "COMPLETE" },
        ],
    },
];

/// A knowledge gap tracked by the discovery engine.
pub struct KnowledgeGap {
    pub id: &'static str,
    pub area: &'static str,
    pub status: &'static str,
    pub severity: &'static str,
}

pub const KNOWLEDGE_GAPS: &[KnowledgeGap] = &[
    KnowledgeGap { id: "G-102", area: "Quantum Semantic Drift", status: "IDENTIFIED", severity: "Low" },
    KnowledgeGap { id: "G-105", area: "Cross-Cultural Ethical Nuance", status: "INQUIRING", severity: "Medium" },
    KnowledgeGap { id: "G-109", area: "Edge-Case Safety Bounds", status: "RESOLVED", severity: "High" },
];

/// A provenance ledger record for the data page.
pub struct ProvenanceRecord {
    pub hash: &'static str,
    pub source: &'static str,
    pub record_type: &'static str,
    pub timestamp: &'static str,
}

pub const PROVENANCE_RECORDS: &[ProvenanceRecord] = &[
    ProvenanceRecord {
        hash: "0x4f...92e1",
        source: "Training Corpus A",
        record_type: "DATASET",
        timestamp: "2025-12-24 10:45:00",
    },
    ProvenanceRecord {
        hash: "0x7a...11b2",
        source: "Human Feedback Loop 4",
        record_type: "ALIGNMENT",
        timestamp: "2025-12-24 10:48:22",
    },
    ProvenanceRecord {
        hash: "0x2c...dd54",
        source: "Synergy Engine Core",
        record_type: "MODEL_WEIGHTS",
        timestamp: "2025-12-24 10:52:10",
    },
];

/// A past CharterLayer intervention, shown in the audit vault ledger.
pub struct Intervention {
    pub id: &'static str,
    pub axiom: &'static str,
    pub action: &'static str,
    pub details: &'static str,
    pub time: &'static str,
}

pub const INTERVENTIONS: &[Intervention] = &[
    Intervention {
        id: "IV-901",
        axiom: "AX-01",
        action: "REJECTION",
        details: "Adversarial harm vector identified in medical inquiry.",
        time: "12:42:01",
    },
    Intervention {
        id: "IV-905",
        axiom: "AX-02",
        action: "CORRECTION",
        details: "Demographic bias detected in socio-economic prediction.",
        time: "12:45:12",
    },
    Intervention {
        id: "IV-909",
        axiom: "AX-04",
        action: "MASKING",
        details: "Differential privacy threshold exceeded. Data noise applied.",
        time: "12:48:22",
    },
];
