//! Lobby system: multi-screen TUI for the scoreboard, registration and the board.

mod controller;
mod input;
mod screen;
mod screens;

pub use controller::LobbyController;
pub use screen::{Screen, ScreenTransition};
pub use screens::{BoardScreen, Confirm, Field, RegisterScreen, ScoreboardScreen};

use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use crate::api::RestScoreboardClient;
use crate::config::AppConfig;
use crate::session::SessionStore;

/// Runs the lobby TUI against the configured scoreboard.
///
/// Logs go to `config.log_path` so they don't interfere with drawing.
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_path())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(crate::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(base_url = %config.base_url(), "Starting scoreboard TUI");

    let client = RestScoreboardClient::from_config(config)?;
    let mut controller = LobbyController::new(client, SessionStore::new(config.session_path()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Lobby loop error");
    }
    res
}
