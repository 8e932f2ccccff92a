//! dynform - terminal rendition of a dynamic form with validation
//!
//! A Ratatui-based TUI with a landing page and a three-field form that shows
//! a loading skeleton, validates on blur and confirms submissions with a
//! transient alert.

mod app;
mod config;
mod platform;
mod state;
mod submission;
mod timer;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use submission::TracingSink;
use timer::TimerEvent;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Redraw rate while the skeleton shimmer is animating (~30fps)
const ANIMATION_TICK: Duration = Duration::from_millis(33);

/// The terminal is owned by the UI, so logs go to a file
fn init_logging() -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dynform_tui=info".into());

    let log_dir = TuiConfig::log_dir().filter(|dir| std::fs::create_dir_all(dir).is_ok());

    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "dynform-tui.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(non_blocking),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
                .init();
            None
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _log_guard = init_logging();

    // Fail before touching the terminal so the error stays readable
    let config = TuiConfig::load()?;
    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
    let mut app = App::new(&config, Box::new(TracingSink), timer_tx)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut timer_rx).await;
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    timer_rx: &mut mpsc::UnboundedReceiver<TimerEvent>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(ANIMATION_TICK);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let animating = app.is_animating();
        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key)?;
                }
                Some(Ok(_)) => {
                    // Resize and other events just trigger a redraw
                }
                Some(Err(err)) => return Err(err.into()),
                None => return Ok(()),
            },
            Some(event) = timer_rx.recv() => app.handle_timer(event),
            _ = tick.tick(), if animating => {}
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
