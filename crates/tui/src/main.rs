//! Mail Zero TUI - keyboard shortcuts and command palette in the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - HTTP calls to the Mail Zero API (see `crates/client`).
//! - Binding persistence and configuration (see `crates/config`).
//! - Async API calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        EventStream, KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{channel, error::TrySendError};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use mailzero_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use mailzero_config::persistence::resolve_config_dir;
use mailzero_config::{ConfigLoader, FileStorage, MemoryStorage};
use mailzero_tui::action::{Action, RedactedAction};
use mailzero_tui::app::App;
use mailzero_tui::cli::Cli;
use mailzero_tui::runtime::{
    client::create_client,
    side_effects::{TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "mailzero-tui.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // Note: _guard must live for entire main() duration to ensure logs are flushed

    let config = ConfigLoader::new()
        .with_base_url(cli.base_url.clone())
        .load_dotenv()?
        .from_env()?
        .build()?;
    let client = create_client(&config)?;

    let mut app = if cli.fresh {
        tracing::info!("Starting with in-memory default shortcuts");
        App::with_storage(MemoryStorage::new())
    } else {
        let dir = resolve_config_dir(cli.config_dir.clone())?;
        tracing::info!(dir = %dir.display(), "Loading shortcuts");
        App::with_storage(FileStorage::new(dir))
    };

    let task_tracker = TaskTracker::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    }
    let _terminal_guard = TerminalGuard::new(no_mouse);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Key and resize events are never dropped; mouse events are dropped when
    // the channel is full.
    let tx_input = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let action = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
                Event::Mouse(mouse) => Action::Mouse(mouse),
                Event::Resize(width, height) => Action::Resize(width, height),
                Event::FocusLost => Action::FocusLost,
                _ => continue,
            };

            if matches!(action, Action::Mouse(_)) {
                match tx_input.try_send(action) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            } else if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    handle_side_effects(
        Action::LoadSession,
        client.clone(),
        tx.clone(),
        task_tracker.clone(),
    )
    .await;

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::info!("Handling action: {:?}", RedactedAction(&action));

                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                let Some(action) = action else {
                    continue;
                };
                if matches!(action, Action::Quit) {
                    break;
                }

                app.update(action.clone());
                handle_side_effects(action, client.clone(), tx.clone(), task_tracker.clone()).await;
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // Graceful shutdown: stop reading input, then wait for in-flight requests
    input_task.abort();
    task_tracker.close();
    if tokio::time::timeout(Duration::from_secs(5), task_tracker.wait())
        .await
        .is_err()
    {
        tracing::warn!("Timed out waiting for background tasks");
    }

    disable_raw_mode()?;
    if no_mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    } else {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        )?;
    }
    terminal.show_cursor()?;

    Ok(())
}
