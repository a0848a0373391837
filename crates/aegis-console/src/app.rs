//! Console state and key handling

use crate::pages::Page;
use aegis_sim::catalog::{PLAYGROUND_MODELS, POLICY_SCENARIOS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the event loop should do after a keypress, beyond updating `App`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    /// Playground run with the selected model and the typed prompt.
    RunInference { model: usize, prompt: String },
    /// Policy scenario run by table index.
    RunScenario(usize),
    /// Engage burst mode.
    StartBurst,
    /// Playground model selection changed; store scalars follow.
    SelectModel(usize),
}

pub struct App {
    pub page: Page,
    pub session_id: String,

    // Modal text inputs
    pub search_mode: bool,
    pub search_query: String,
    pub prompt_mode: bool,
    pub prompt: String,

    // Selections
    pub selected_model: usize,
    pub selected_scenario: usize,

    pub should_quit: bool,
}

impl App {
    pub fn new(session_id: &str) -> Self {
        Self {
            page: Page::Dashboard,
            session_id: session_id.to_string(),
            search_mode: false,
            search_query: String::new(),
            prompt_mode: false,
            prompt: String::new(),
            selected_model: 0,
            selected_scenario: 0,
            should_quit: false,
        }
    }

    /// Pages with a searchable log table.
    fn searchable(&self) -> bool {
        matches!(self.page, Page::Epistemic | Page::Audit)
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Action::None;
    }

    if app.search_mode {
        return handle_search_key(app, key);
    }
    if app.prompt_mode {
        return handle_prompt_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            Action::None
        }

        // Navigation
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
            app.page = app.page.next();
            Action::None
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
            app.page = app.page.prev();
            Action::None
        }

        // Search over the log pages
        KeyCode::Char('/') if app.searchable() => {
            app.search_mode = true;
            app.search_query.clear();
            Action::None
        }

        // Playground prompt entry
        KeyCode::Char('i') if app.page == Page::Playground => {
            app.prompt_mode = true;
            Action::None
        }

        // Numbered selection: models on the playground, scenarios on the
        // simulator.
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as usize) - ('1' as usize);
            match app.page {
                Page::Playground if idx < PLAYGROUND_MODELS.len() => {
                    app.selected_model = idx;
                    Action::SelectModel(idx)
                }
                Page::Simulator if idx < POLICY_SCENARIOS.len() => {
                    app.selected_scenario = idx;
                    Action::None
                }
                _ => Action::None,
            }
        }

        // Run the page's action
        KeyCode::Char('r') | KeyCode::Enter => match app.page {
            Page::Playground if !app.prompt.trim().is_empty() => {
                let prompt = app.prompt.trim().to_string();
                app.prompt.clear();
                Action::RunInference { model: app.selected_model, prompt }
            }
            Page::Simulator => Action::RunScenario(app.selected_scenario),
            _ => Action::None,
        },

        // Burst toggle
        KeyCode::Char('b') => Action::StartBurst,

        _ => Action::None,
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => {
            app.search_mode = false;
            app.search_query.clear();
        }
        KeyCode::Enter => app.search_mode = false,
        KeyCode::Backspace => {
            app.search_query.pop();
        }
        KeyCode::Char(c) => app.search_query.push(c),
        _ => {}
    }
    Action::None
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => app.prompt_mode = false,
        KeyCode::Enter => {
            app.prompt_mode = false;
            if !app.prompt.trim().is_empty() {
                let prompt = app.prompt.trim().to_string();
                app.prompt.clear();
                return Action::RunInference { model: app.selected_model, prompt };
            }
        }
        KeyCode::Backspace => {
            app.prompt.pop();
        }
        KeyCode::Char(c) => app.prompt.push(c),
        _ => {}
    }
    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = App::new("s1");
        app.search_mode = true;
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_cycles_pages() {
        let mut app = App::new("s1");
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.page, Page::Playground);
        handle_key(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.page, Page::Dashboard);
    }

    #[test]
    fn search_only_on_log_pages() {
        let mut app = App::new("s1");
        handle_key(&mut app, key(KeyCode::Char('/')));
        assert!(!app.search_mode);

        app.page = Page::Epistemic;
        handle_key(&mut app, key(KeyCode::Char('/')));
        assert!(app.search_mode);
    }

    #[test]
    fn search_mode_collects_and_clears() {
        let mut app = App::new("s1");
        app.page = Page::Audit;
        handle_key(&mut app, key(KeyCode::Char('/')));
        for c in "drift".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.search_mode);
        assert_eq!(app.search_query, "drift");

        handle_key(&mut app, key(KeyCode::Char('/')));
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn playground_prompt_then_enter_runs_inference() {
        let mut app = App::new("s1");
        app.page = Page::Playground;
        handle_key(&mut app, key(KeyCode::Char('i')));
        assert!(app.prompt_mode);
        for c in "probe bias".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        let action = handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(
            action,
            Action::RunInference { model: 0, prompt: "probe bias".to_string() }
        );
        assert!(app.prompt.is_empty());
        assert!(!app.prompt_mode);
    }

    #[test]
    fn empty_prompt_does_not_run() {
        let mut app = App::new("s1");
        app.page = Page::Playground;
        handle_key(&mut app, key(KeyCode::Char('i')));
        let action = handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(action, Action::None);
    }

    #[test]
    fn model_selection_emits_action() {
        let mut app = App::new("s1");
        app.page = Page::Playground;
        let action = handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(action, Action::SelectModel(1));
        assert_eq!(app.selected_model, 1);

        // Out-of-range digits are ignored.
        let action = handle_key(&mut app, key(KeyCode::Char('9')));
        assert_eq!(action, Action::None);
        assert_eq!(app.selected_model, 1);
    }

    #[test]
    fn simulator_selects_and_runs_scenario() {
        let mut app = App::new("s1");
        app.page = Page::Simulator;
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.selected_scenario, 2);
        let action = handle_key(&mut app, key(KeyCode::Char('r')));
        assert_eq!(action, Action::RunScenario(2));
    }

    #[test]
    fn burst_from_anywhere() {
        let mut app = App::new("s1");
        app.page = Page::Heatmap;
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('b'))), Action::StartBurst);
    }

    #[test]
    fn q_quits_outside_modal_input() {
        let mut app = App::new("s1");
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new("s1");
        app.page = Page::Epistemic;
        handle_key(&mut app, key(KeyCode::Char('/')));
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.search_query, "q");
    }
}
