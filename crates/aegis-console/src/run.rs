//! Terminal lifecycle and event loop
//!
//! Owns the alternate screen, the session-wide stats feed, and the
//! page-local telemetry feed. Exactly one page feed runs at a time; it is
//! cancelled and replaced whenever the visible page changes.

use crate::app::{self, Action, App};
use crate::pages::Page;
use crate::ui;
use aegis_core::{ConsoleConfig, TelemetryStore};
use aegis_sim::{catalog, scenario, spawn_feed, spawn_stats_feed};
use crossterm::{
    event::{self, Event},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn run_console(config: ConsoleConfig) -> anyhow::Result<()> {
    let store = Arc::new(TelemetryStore::new(config.store.log_cap));
    store.set_active_model(&config.store.default_model);
    store.set_active_mode(&config.store.default_mode);

    let session_id = uuid::Uuid::new_v4().to_string()[..8].to_string();
    let mut app = App::new(&session_id);
    info!("console session {} starting", session_id);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Everything spawned below hangs off this token; cancelling it on the
    // way out stops the stats feed and whichever page feed is live.
    let session_cancel = CancellationToken::new();
    let stats = spawn_stats_feed(
        store.clone(),
        Duration::from_millis(config.feeds.stats_tick_ms),
        session_cancel.child_token(),
    );

    let result =
        run_event_loop(&mut terminal, &mut app, &store, &config, &session_cancel).await;

    session_cancel.cancel();
    let _ = stats.await;

    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    info!("console session {} closed", session_id);
    result
}

/// Start the feed belonging to `page`, if it has one. The returned token
/// cancels just this feed; it is also a child of the session token.
fn start_page_feed(
    store: &Arc<TelemetryStore>,
    page: Page,
    period: Duration,
    session_cancel: &CancellationToken,
) -> Option<CancellationToken> {
    let category = page.feed_category()?;
    let cancel = session_cancel.child_token();
    spawn_feed(store.clone(), category, period, cancel.clone());
    Some(cancel)
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    store: &Arc<TelemetryStore>,
    config: &ConsoleConfig,
    session_cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let page_period = Duration::from_millis(config.feeds.page_tick_ms);
    let mut feed_page = app.page;
    let mut page_feed = start_page_feed(store, app.page, page_period, session_cancel);

    let mut revision = store.subscribe();
    let mut dirty = true;

    loop {
        // Page changed since the last frame: retire its feed, start the
        // next page's.
        if app.page != feed_page {
            if let Some(cancel) = page_feed.take() {
                cancel.cancel();
            }
            page_feed = start_page_feed(store, app.page, page_period, session_cancel);
            feed_page = app.page;
            app.search_query.clear();
            dirty = true;
        }

        if revision.has_changed().unwrap_or(false) {
            revision.borrow_and_update();
            dirty = true;
        }

        if dirty {
            let snap = store.snapshot();
            terminal.draw(|f| ui::draw(f, app, &snap))?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                let action = app::handle_key(app, key);
                dispatch(action, store, config);
                dirty = true;
                if app.should_quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Turn a key-handler action into store mutations and spawned scenario
/// scripts. Scripts run detached; the store keeps them ordered.
fn dispatch(action: Action, store: &Arc<TelemetryStore>, config: &ConsoleConfig) {
    match action {
        Action::None => {}

        Action::SelectModel(idx) => {
            if let Some(model) = catalog::PLAYGROUND_MODELS.get(idx) {
                store.set_active_model(model.name);
                store.set_active_mode(model.mode);
            }
        }

        Action::RunInference { model, prompt } => {
            let name = catalog::PLAYGROUND_MODELS
                .get(model)
                .map(|m| m.name)
                .unwrap_or("Synergy-v9.8-Quantum");
            let store = store.clone();
            let delay = Duration::from_millis(config.scenarios.inference_ms);
            tokio::spawn(async move {
                scenario::run_inference(store, name, &prompt, delay).await;
            });
        }

        Action::RunScenario(idx) => {
            if let Some(def) = catalog::POLICY_SCENARIOS.get(idx) {
                let delay = Duration::from_millis(config.scenarios.policy_ms);
                tokio::spawn(scenario::run_policy(store.clone(), def, delay));
            }
        }

        Action::StartBurst => {
            let duration = Duration::from_millis(config.scenarios.burst_ms);
            tokio::spawn(scenario::run_burst(store.clone(), duration));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn page_feed_only_for_feed_pages() {
        let store = Arc::new(TelemetryStore::default());
        let session = CancellationToken::new();

        assert!(start_page_feed(&store, Page::Dashboard, Duration::from_secs(1), &session)
            .is_none());
        let feed =
            start_page_feed(&store, Page::Epistemic, Duration::from_secs(1), &session);
        assert!(feed.is_some());
        session.cancel();
    }

    #[tokio::test]
    async fn session_cancel_reaches_page_feed() {
        let store = Arc::new(TelemetryStore::default());
        let session = CancellationToken::new();
        let feed = start_page_feed(&store, Page::Audit, Duration::from_millis(5), &session)
            .unwrap();

        session.cancel();
        assert!(feed.is_cancelled());
    }

    #[tokio::test]
    async fn select_model_updates_store_scalars() {
        let store = Arc::new(TelemetryStore::default());
        let config = ConsoleConfig::default();

        dispatch(Action::SelectModel(1), &store, &config);
        let snap = store.snapshot();
        assert_eq!(snap.active_model, catalog::PLAYGROUND_MODELS[1].name);
        assert_eq!(snap.active_mode, catalog::PLAYGROUND_MODELS[1].mode);

        // Out-of-range index leaves the store alone.
        dispatch(Action::SelectModel(99), &store, &config);
        assert_eq!(store.snapshot().active_model, catalog::PLAYGROUND_MODELS[1].name);
    }

    #[tokio::test]
    async fn burst_dispatch_flips_status() {
        let store = Arc::new(TelemetryStore::default());
        let mut config = ConsoleConfig::default();
        config.scenarios.burst_ms = 10;

        dispatch(Action::StartBurst, &store, &config);
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(store.snapshot().status, "BURST");
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(store.snapshot().status, "OPERATIONAL");
    }
}
