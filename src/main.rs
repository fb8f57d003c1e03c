//! Padel scorer (default binary).
//!
//! Score screen and match history in the terminal. crossterm handles input;
//! frames go through the framebuffer renderer (no widget toolkit).

use std::collections::hash_map::DefaultHasher;
use std::fs::{self, OpenOptions};
use std::hash::{Hash, Hasher};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use padel_scorer::history::{HistoryStore, JsonFileStorage, Storage};
use padel_scorer::input::{handle_key_event, should_quit};
use padel_scorer::term::{
    FrameBuffer, HistoryView, RenderThrottle, ScoreView, TerminalRenderer, Viewport,
};
use padel_scorer::{App, AppConfig, Screen};

const POLL_MS: u64 = 100;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_tracing(&config);
    info!(history = %config.history_path.display(), "starting padel scorer");

    let history = HistoryStore::open(JsonFileStorage::new(&config.history_path));
    let mut app = App::new(history);

    let mut term = TerminalRenderer::new();
    let result = term.enter("Padel Scorer").and_then(|()| run(&mut term, &mut app, &config));

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!(error = %e, "failed to restore terminal");
    }
    if let Err(e) = &result {
        warn!(error = %e, "exiting with error");
    }
    result
}

fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = config
        .log_path
        .parent()
        .map_or(Ok(()), |dir| fs::create_dir_all(dir))
        .and_then(|()| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.log_path)
        });

    match file {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
        }
        // Never log to stdout/stderr: it would corrupt the screen.
        Err(_) => tracing_subscriber::registry().with(env_filter).init(),
    }
}

fn run<S: Storage>(term: &mut TerminalRenderer, app: &mut App<S>, config: &AppConfig) -> Result<()> {
    let score_view = ScoreView::default();
    let history_view = HistoryView::default();
    let mut throttle = RenderThrottle::new(config.render_interval_ms);
    let mut fb = FrameBuffer::new(0, 0);
    let started = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        let mut hasher = DefaultHasher::new();
        app.view_fingerprint(&mut hasher);
        (w, h).hash(&mut hasher);
        let now_ms = started.elapsed().as_millis() as u64;

        if throttle.should_render(now_ms, hasher.finish()) {
            match app.screen() {
                Screen::Score => {
                    score_view.render_into(app.scorer().state(), app.prompt(), viewport, &mut fb)
                }
                Screen::History => history_view.render_into(
                    app.history().matches(),
                    app.selected(),
                    app.prompt(),
                    viewport,
                    &mut fb,
                ),
            }
            term.draw_swap(&mut fb)?;
        }

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit requested");
                    return Ok(());
                }
                if let Some(command) = handle_key_event(key) {
                    app.handle(command);
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                throttle.invalidate();
            }
            _ => {}
        }
    }
}
