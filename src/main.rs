//! Terminal quiz runner (default binary).
//!
//! Single-threaded intent loop: key presses become intents applied to the
//! session; result saves run on the recorder's own runtime and their
//! completions are polled between key presses.

use std::cell::Cell;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use natty_or_not::core::{Catalog, Session, SimpleRng};
use natty_or_not::input::{handle_key_event, should_quit};
use natty_or_not::recorder::RecorderRuntime;
use natty_or_not::term::{rejection_hint, QuizView, TerminalRenderer, Viewport};

/// How long to wait for a key before checking recorder completions again.
const POLL_MS: u64 = 50;

/// How long to wait for in-flight saves on exit.
const SHUTDOWN_FLUSH: Duration = Duration::from_secs(2);

const DEFAULT_LOG_PATH: &str = "natty-or-not.log";

type QuizSession = Session<SimpleRng, RecorderRuntime>;

fn main() -> Result<()> {
    init_tracing();

    let rng = match seed_from_env() {
        Some(seed) => {
            tracing::info!(seed, "using fixed shuffle seed");
            SimpleRng::new(seed)
        }
        None => SimpleRng::from_entropy(),
    };
    let recorder = RecorderRuntime::start_from_env()?;
    let mut session = Session::new(Catalog::physiques(), rng, recorder)?;

    let dirty = Rc::new(Cell::new(true));
    {
        let dirty = Rc::clone(&dirty);
        session.subscribe(move |_| dirty.set(true));
    }
    session.start()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &dirty);

    // Always try to restore terminal state.
    let _ = term.exit();

    for event in session.sink_mut().flush(SHUTDOWN_FLUSH) {
        session.observe_recorder(event);
    }
    let score = session.score();
    tracing::info!(
        correct = score.correct,
        total = score.total,
        failures = session.recorder_status().failures,
        "session finished"
    );
    result
}

fn run(term: &mut TerminalRenderer, session: &mut QuizSession, dirty: &Cell<bool>) -> Result<()> {
    let view = QuizView::default();
    let poll = Duration::from_millis(POLL_MS);
    // Shown after a rejected key until the next accepted one.
    let mut hint: Option<&'static str> = None;

    loop {
        while let Some(event) = session.sink_mut().try_recv() {
            session.observe_recorder(event);
        }

        if dirty.replace(false) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render_with_hint(&session.snapshot(), Viewport::new(w, h), hint);
            term.draw(&fb)?;
        }

        if !event::poll(poll)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(intent) = handle_key_event(key) {
                    match session.apply_intent(intent) {
                        Ok(()) => hint = None,
                        Err(err) => {
                            tracing::debug!(key = ?key.code, %err, "key ignored");
                            hint = Some(rejection_hint(&session.snapshot()));
                            dirty.set(true);
                        }
                    }
                }
            }
            Event::Resize(_, _) => dirty.set(true),
            _ => {}
        }
    }
}

fn seed_from_env() -> Option<u32> {
    env::var("NATTY_SEED").ok().and_then(|s| s.trim().parse().ok())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let path = env::var("NATTY_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
        }
        // Prefer no logs over writing into the terminal UI.
        Err(_) => tracing_subscriber::registry().with(env_filter).init(),
    }
}
