//! Console pages and navigation metadata
//!
//! One variant per route of the governance console. The sidebar renders
//! `Page::ALL` and highlights whichever matches the active page; nothing
//! deeper than that equality check.

use aegis_core::LogCategory;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Playground,
    Causal,
    Repo,
    Synergy,
    Charter,
    Epistemic,
    Data,
    Settings,
    Audit,
    Heatmap,
    Simulator,
    Discovery,
    Lineage,
}

impl Page {
    pub const ALL: [Page; 14] = [
        Page::Dashboard,
        Page::Playground,
        Page::Causal,
        Page::Repo,
        Page::Synergy,
        Page::Charter,
        Page::Epistemic,
        Page::Data,
        Page::Settings,
        Page::Audit,
        Page::Heatmap,
        Page::Simulator,
        Page::Discovery,
        Page::Lineage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Charter Monitor",
            Page::Playground => "Model Playground",
            Page::Causal => "Causal Reasoning",
            Page::Repo => "Repo Structure",
            Page::Synergy => "Synergy Engine",
            Page::Charter => "Ethical Charter",
            Page::Epistemic => "Epistemic Log",
            Page::Data => "Data Provenance",
            Page::Settings => "Governance Config",
            Page::Audit => "Audit Vault",
            Page::Heatmap => "Risk Heatmap",
            Page::Simulator => "Policy Simulator",
            Page::Discovery => "Discovery Engine",
            Page::Lineage => "Model Lineage",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Playground => "/playground",
            Page::Causal => "/causal",
            Page::Repo => "/repo",
            Page::Synergy => "/synergy",
            Page::Charter => "/charter",
            Page::Epistemic => "/epistemic",
            Page::Data => "/data",
            Page::Settings => "/settings",
            Page::Audit => "/audit",
            Page::Heatmap => "/heatmap",
            Page::Simulator => "/simulator",
            Page::Discovery => "/discovery",
            Page::Lineage => "/lineage",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "◈",
            Page::Playground => "▶",
            Page::Causal => "⇶",
            Page::Repo => "⎇",
            Page::Synergy => "✦",
            Page::Charter => "§",
            Page::Epistemic => "◉",
            Page::Data => "⛁",
            Page::Settings => "⚙",
            Page::Audit => "⚿",
            Page::Heatmap => "▦",
            Page::Simulator => "⚖",
            Page::Discovery => "✧",
            Page::Lineage => "⌥",
        }
    }

    /// Category of the page-local feed, if the page runs one. Pages whose
    /// content is static or purely user-triggered have none.
    pub fn feed_category(&self) -> Option<LogCategory> {
        match self {
            Page::Causal | Page::Synergy => Some(LogCategory::Neural),
            Page::Epistemic | Page::Discovery => Some(LogCategory::Epistemic),
            Page::Data | Page::Lineage => Some(LogCategory::Data),
            Page::Charter | Page::Audit => Some(LogCategory::Governance),
            Page::Dashboard
            | Page::Playground
            | Page::Repo
            | Page::Settings
            | Page::Heatmap
            | Page::Simulator => None,
        }
    }

    pub fn next(&self) -> Page {
        let idx = Page::ALL.iter().position(|p| p == self).unwrap_or(0);
        Page::ALL[(idx + 1) % Page::ALL.len()]
    }

    pub fn prev(&self) -> Page {
        let idx = Page::ALL.iter().position(|p| p == self).unwrap_or(0);
        Page::ALL[(idx + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}
