//! Feedback TUI - terminal feedback form
//!
//! A Ratatui-based form that validates name, email and message, submits
//! feedback to the remote feedback service, and lists what has been
//! submitted so far.

mod app;
mod config;
mod platform;
mod service;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::FeedbackConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use service::FeedbackServiceTrait;
use std::io;
use std::time::{Duration, Instant};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often the event loop wakes up to advance timers
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Initialize logging. Logs go to a file because stderr sits under the
/// alternate screen; the returned guard must live until exit.
fn init_logging() -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "feedback_tui=info".into());

    let log_dir = FeedbackConfig::log_dir().filter(|dir| std::fs::create_dir_all(dir).is_ok());

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, "feedback-tui.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = init_logging();

    let config = FeedbackConfig::load()?;
    let mut app = App::from_config(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Fatal error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: FeedbackServiceTrait,
{
    // Show the empty form before the first fetch completes
    terminal.draw(|frame| ui::draw(frame, &app.state))?;
    app.load_feedback().await;

    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, &app.state))?;

        // Queued requests run once the frame showing them in flight is up
        if app.has_pending() {
            app.run_pending().await;
            continue;
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key).await?;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
