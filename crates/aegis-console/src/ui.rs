//! Rendering for the governance console
//!
//! One draw function per region plus one per page, all fed from an `App`
//! and a store `Snapshot` taken at the top of the frame.

use crate::app::App;
use crate::pages::Page;
use aegis_core::{LogCategory, LogEntry, LogKind, Snapshot};
use aegis_sim::catalog::{
    GateStatus, AXIOMS, CAUSAL_TRACES, CHARTER_GATES, INTERVENTIONS, KNOWLEDGE_GAPS,
    LINEAGE_NODES, PLAYGROUND_MODELS, POLICY_SCENARIOS, PROVENANCE_RECORDS, REGIONS, REPO_TREE,
    SETTINGS_PANELS,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, app: &App, snap: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(1)])
        .split(frame.area());

    draw_sidebar(frame, app, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(1)])
        .split(chunks[1]);

    draw_header(frame, app, snap, main[0]);
    draw_body(frame, app, snap, main[1]);
    draw_status(frame, app, snap, main[2]);
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("AEGIS", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(".AI", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            "System Status: NOMINAL",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for page in Page::ALL {
        let active = page == app.page;
        let style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if active { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{} {}", page.icon(), page.label()),
            style,
        )));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_header(frame: &mut Frame, app: &App, snap: &Snapshot, area: Rect) {
    let status_color = match snap.status.as_str() {
        "OPERATIONAL" => Color::Green,
        "BURST" => Color::Yellow,
        _ => Color::Red,
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.page.label()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.page.path(), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            format!("● {}", snap.status),
            Style::default().fg(status_color).add_modifier(Modifier::BOLD),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_status(frame: &mut Frame, app: &App, snap: &Snapshot, area: Rect) {
    let hint = if app.search_mode {
        " type to filter, Enter/Esc to leave "
    } else if app.prompt_mode {
        " type prompt, Enter to run, Esc to cancel "
    } else {
        " Tab:page  /:filter  i:prompt  r:run  b:burst  q:quit "
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", snap.active_model),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            format!(" {} ", snap.active_mode),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ),
        Span::styled(
            format!(" {} tok/s  {} ms ", snap.token_rate, snap.latency_ms),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!(" {} ", app.session_id),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

// ---------------------------------------------------------------------------
// Log rendering helpers
// ---------------------------------------------------------------------------

fn kind_color(kind: LogKind) -> Color {
    match kind {
        LogKind::Info => Color::Gray,
        LogKind::Warn => Color::Yellow,
        LogKind::Success => Color::Green,
    }
}

/// Newest-first log lines, entry message plus dimmed details.
pub fn log_lines<'a>(entries: &[&'a LogEntry]) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(entries.len() * 2);
    for entry in entries.iter().rev() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", entry.time), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("[{}] ", entry.category.label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(entry.msg.as_str(), Style::default().fg(kind_color(entry.kind))),
        ]));
        if let Some(details) = &entry.details {
            lines.push(Line::from(Span::styled(
                format!("           {details}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines
}

fn bordered(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn draw_log_panel(frame: &mut Frame, area: Rect, title: String, entries: &[&LogEntry]) {
    let paragraph = Paragraph::new(log_lines(entries))
        .block(bordered(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

fn draw_body(frame: &mut Frame, app: &App, snap: &Snapshot, area: Rect) {
    match app.page {
        Page::Dashboard => draw_dashboard(frame, snap, area),
        Page::Playground => draw_playground(frame, app, snap, area),
        Page::Causal => draw_causal(frame, snap, area),
        Page::Repo => draw_repo(frame, area),
        Page::Synergy => draw_synergy(frame, snap, area),
        Page::Charter => draw_charter(frame, area),
        Page::Epistemic => draw_epistemic(frame, app, snap, area),
        Page::Data => draw_data(frame, snap, area),
        Page::Settings => draw_settings(frame, area),
        Page::Audit => draw_audit(frame, app, snap, area),
        Page::Heatmap => draw_heatmap(frame, area),
        Page::Simulator => draw_simulator(frame, app, snap, area),
        Page::Discovery => draw_discovery(frame, snap, area),
        Page::Lineage => draw_lineage(frame, snap, area),
    }
}

fn gate_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for gate in CHARTER_GATES {
        let (label, color) = match gate.status {
            GateStatus::Pass => ("PASS", Color::Green),
            GateStatus::Warn => ("WARN", Color::Yellow),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", gate.id), Style::default().fg(Color::Cyan)),
            Span::styled(gate.name, Style::default().fg(Color::White)),
            Span::styled(format!("  {label}"), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {} ({})", gate.desc, gate.last_check),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

fn draw_dashboard(frame: &mut Frame, snap: &Snapshot, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let gates = Paragraph::new(gate_lines())
        .block(bordered(" CharterLayer Active Gates ".to_string()))
        .wrap(Wrap { trim: false });
    frame.render_widget(gates, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(4)])
        .split(columns[1]);

    let inquiries = snap.in_category(LogCategory::Epistemic);
    draw_log_panel(frame, right[0], " Active Epistemic Inquiry ".to_string(), &inquiries);

    let warns: Vec<&LogEntry> = snap
        .logs
        .iter()
        .filter(|e| e.kind == LogKind::Warn)
        .collect();
    let alert = warns
        .last()
        .map(|e| e.msg.clone())
        .unwrap_or_else(|| "No active risk alerts".to_string());
    let alerts = Paragraph::new(Line::from(Span::styled(
        alert,
        Style::default().fg(Color::Red),
    )))
    .block(bordered(" Risk Alerts ".to_string()));
    frame.render_widget(alerts, right[1]);
}

fn draw_playground(frame: &mut Frame, app: &App, snap: &Snapshot, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(1)])
        .split(area);

    let mut lines = Vec::new();
    for (idx, model) in PLAYGROUND_MODELS.iter().enumerate() {
        let active = idx == app.selected_model;
        let style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}. {} [{}]", if active { "▸" } else { " " }, idx + 1, model.name, model.mode),
            style,
        )));
        lines.push(Line::from(Span::styled(
            format!("     {}", model.desc),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Active constraints:",
        Style::default().fg(Color::Cyan),
    )));
    for constraint in ["Axiom-01: Non-Maleficence", "Axiom-02: Fairness", "Privacy-Masking: ON"] {
        lines.push(Line::from(Span::styled(
            format!("  • {constraint}"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).block(bordered(" Select Neural Core ".to_string())),
        columns[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(columns[1]);

    let prompt_title = if app.prompt_mode {
        " Prompt [typing] ".to_string()
    } else {
        " Prompt (i to edit) ".to_string()
    };
    let prompt_style = if app.prompt_mode {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(app.prompt.as_str(), prompt_style)))
            .block(bordered(prompt_title)),
        right[0],
    );

    let probe: Vec<&LogEntry> = snap
        .logs
        .iter()
        .filter(|e| matches!(e.category, LogCategory::Neural | LogCategory::Governance))
        .collect();
    draw_log_panel(frame, right[1], " Live Probe Analysis ".to_string(), &probe);
}

fn draw_causal(frame: &mut Frame, snap: &Snapshot, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(8)])
        .split(area);

    let mut lines = Vec::new();
    for trace in CAUSAL_TRACES {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", trace.id), Style::default().fg(Color::Cyan)),
            Span::styled(trace.prompt, Style::default().fg(Color::White)),
        ]));
        for step in trace.logic {
            let color = match step.status {
                "WARN" => Color::Yellow,
                "PASS" | "SAFE" | "FIXED" | "COMPLETE" => Color::Green,
                _ => Color::Gray,
            };
            lines.push(Line::from(vec![
                Span::styled(format!("    {} → ", step.step), Style::default().fg(Color::Gray)),
                Span::styled(step.result, Style::default().fg(Color::DarkGray)),
                Span::styled(format!("  {}", step.status), Style::default().fg(color)),
            ]));
        }
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .block(bordered(" Causal Reasoning Traces ".to_string()))
            .wrap(Wrap { trim: false }),
        rows[0],
    );

    let neural = snap.in_category(LogCategory::Neural);
    draw_log_panel(frame, rows[1], " Engine Activity ".to_string(), &neural);
}

fn draw_repo(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = REPO_TREE
        .iter()
        .map(|node| {
            let marker = if node.kind == "dir" { "▸" } else { "·" };
            Line::from(vec![
                Span::styled(format!("{marker} {:<20}", node.name), Style::default().fg(Color::White)),
                Span::styled(node.desc, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(bordered(" Repo Structure ".to_string())),
        area,
    );
}

fn draw_synergy(frame: &mut Frame, snap: &Snapshot, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(1)])
        .split(area);

    let counters = vec![
        Line::from(vec![
            Span::styled("Active tokens  ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/s", snap.token_rate),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Latency        ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} ms", snap.latency_ms),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Fusion core    ", Style::default().fg(Color::Gray)),
            Span::styled(snap.active_model.clone(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Mode           ", Style::default().fg(Color::Gray)),
            Span::styled(snap.active_mode.clone(), Style::default().fg(Color::White)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(counters).block(bordered(" Synergy Engine ".to_string())),
        rows[0],
    );

    let neural = snap.in_category(LogCategory::Neural);
    draw_log_panel(frame, rows[1], " Synaptic Stream ".to_string(), &neural);
}

fn draw_charter(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for axiom in AXIOMS {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", axiom.id), Style::default().fg(Color::Cyan)),
            Span::styled(axiom.title, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  [{}]", axiom.level), Style::default().fg(Color::Yellow)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", axiom.desc),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .block(bordered(" Ethical Charter (hard-coded) ".to_string()))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_epistemic(frame: &mut Frame, app: &App, snap: &Snapshot, area: Rect) {
    // Epistemic view includes the neural stream, as the source page did.
    let entries: Vec<&LogEntry> = snap
        .logs
        .iter()
        .filter(|e| matches!(e.category, LogCategory::Epistemic | LogCategory::Neural))
        .filter(|e| app.search_query.is_empty() || e.matches(&app.search_query))
        .collect();
    let title = if app.search_query.is_empty() {
        " Epistemic Inquiry ".to_string()
    } else {
        format!(" Epistemic Inquiry [/{}] ", app.search_query)
    };
    draw_log_panel(frame, area, title, &entries);
}

fn draw_data(frame: &mut Frame, snap: &Snapshot, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    let lines: Vec<Line> = PROVENANCE_RECORDS
        .iter()
        .map(|record| {
            Line::from(vec![
                Span::styled(format!("{:<12} ", record.hash), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<24} ", record.source), Style::default().fg(Color::White)),
                Span::styled(format!("{:<14} ", record.record_type), Style::default().fg(Color::Gray)),
                Span::styled(record.timestamp, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(bordered(" Provenance Ledger ".to_string())),
        rows[0],
    );

    let data = snap.in_category(LogCategory::Data);
    draw_log_panel(frame, rows[1], " Data Stream ".to_string(), &data);
}

fn draw_settings(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for panel in SETTINGS_PANELS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<22}", panel.title),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(panel.status, Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", panel.desc),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines).block(bordered(" Governance Config ".to_string())),
        area,
    );
}

fn draw_audit(frame: &mut Frame, app: &App, snap: &Snapshot, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    let lines: Vec<Line> = INTERVENTIONS
        .iter()
        .map(|iv| {
            Line::from(vec![
                Span::styled(format!("{} ", iv.id), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{} ", iv.axiom), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{:<11}", iv.action), Style::default().fg(Color::Red)),
                Span::styled(format!(" {} ", iv.details), Style::default().fg(Color::DarkGray)),
                Span::styled(iv.time, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(bordered(" Intervention Ledger ".to_string())),
        rows[0],
    );

    let entries: Vec<&LogEntry> = snap
        .in_category(LogCategory::Governance)
        .into_iter()
        .filter(|e| app.search_query.is_empty() || e.matches(&app.search_query))
        .collect();
    let title = if app.search_query.is_empty() {
        " Live Enforcement Log ".to_string()
    } else {
        format!(" Live Enforcement Log [/{}] ", app.search_query)
    };
    draw_log_panel(frame, rows[1], title, &entries);
}

fn draw_heatmap(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = REGIONS
        .iter()
        .map(|region| {
            let risk_color = if region.risk > 40 {
                Color::Red
            } else if region.risk > 15 {
                Color::Yellow
            } else {
                Color::Green
            };
            Line::from(vec![
                Span::styled(format!("{:<10}", region.name), Style::default().fg(Color::White)),
                Span::styled(format!("risk {:>3}  ", region.risk), Style::default().fg(risk_color)),
                Span::styled(
                    format!("drift {}  load {}", region.drift, region.load),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(bordered(" Regional Risk Heatmap ".to_string())),
        area,
    );
}

fn draw_simulator(frame: &mut Frame, app: &App, snap: &Snapshot, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(1)])
        .split(area);

    let mut lines = Vec::new();
    for (idx, scenario) in POLICY_SCENARIOS.iter().enumerate() {
        let active = idx == app.selected_scenario;
        let style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}. {} ", if active { "▸" } else { " " }, idx + 1, scenario.name),
                style,
            ),
            Span::styled(
                format!("[{} Impact]", scenario.impact),
                Style::default().fg(if scenario.impact == "Extreme" { Color::Red } else { Color::Cyan }),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", scenario.desc),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).block(bordered(" Adversarial Scenarios (r to run) ".to_string())),
        rows[0],
    );

    let governance = snap.in_category(LogCategory::Governance);
    draw_log_panel(frame, rows[1], " Alignment Gates ".to_string(), &governance);
}

fn draw_discovery(frame: &mut Frame, snap: &Snapshot, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    let lines: Vec<Line> = KNOWLEDGE_GAPS
        .iter()
        .map(|gap| {
            Line::from(vec![
                Span::styled(format!("{} ", gap.id), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<32}", gap.area), Style::default().fg(Color::White)),
                Span::styled(format!("{:<12}", gap.status), Style::default().fg(Color::Gray)),
                Span::styled(gap.severity, Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(bordered(" Knowledge Gaps ".to_string())),
        rows[0],
    );

    let epistemic = snap.in_category(LogCategory::Epistemic);
    draw_log_panel(frame, rows[1], " Active Inquiries ".to_string(), &epistemic);
}

fn draw_lineage(frame: &mut Frame, snap: &Snapshot, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(1)])
        .split(area);

    let lines: Vec<Line> = LINEAGE_NODES
        .iter()
        .map(|node| {
            Line::from(vec![
                Span::styled(format!("{} ", node.id), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<26}", node.label), Style::default().fg(Color::White)),
                Span::styled(format!("{:<12}", node.node_type), Style::default().fg(Color::Gray)),
                Span::styled(node.status, Style::default().fg(Color::Green)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(bordered(" Model Lineage ".to_string())),
        rows[0],
    );

    let data = snap.in_category(LogCategory::Data);
    draw_log_panel(frame, rows[1], " Lineage Events ".to_string(), &data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_core::{LogDraft, TelemetryStore};

    #[test]
    fn log_lines_newest_first_with_details() {
        let store = TelemetryStore::default();
        store.append(LogDraft::info(LogCategory::Data, "older"));
        store.append(
            LogDraft::warn(LogCategory::Data, "newer").with_details("the details"),
        );
        let snap = store.snapshot();
        let entries: Vec<&LogEntry> = snap.logs.iter().collect();
        let lines = log_lines(&entries);

        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.contains("newer"));
        let second: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(second.contains("the details"));
    }

    #[test]
    fn kind_colors_distinguish_severity() {
        assert_eq!(kind_color(LogKind::Warn), Color::Yellow);
        assert_eq!(kind_color(LogKind::Success), Color::Green);
        assert_ne!(kind_color(LogKind::Info), kind_color(LogKind::Warn));
    }

    #[test]
    fn gate_lines_cover_all_gates() {
        // Two lines per gate: header and description.
        assert_eq!(gate_lines().len(), CHARTER_GATES.len() * 2);
    }
}
