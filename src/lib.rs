//! Tic-tac-toe scoreboard client.
//!
//! Two players share one terminal, play rounds of tic-tac-toe, and every
//! finished round is recorded on a remote scoreboard service.
//!
//! # Architecture
//!
//! - **Rules**: win and draw evaluation plus turn order (`tictactoe_rules`)
//! - **Api**: async client for the scoreboard REST service
//! - **Session**: the locally remembered active match
//! - **Lobby**: multi-screen terminal UI (scoreboard, registration, board)
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_scoreboard::{AppConfig, RestScoreboardClient, ScoreboardApi, validate_players};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::default();
//! let client = RestScoreboardClient::from_config(&config)?;
//!
//! let new_match = validate_players("Alice", "Bob")?;
//! let record = client.create_match(&new_match).await?;
//! println!("Started match {}", record.id);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod config;
mod lobby;
mod registration;
mod report;
mod session;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tictactoe_scoreboard=debug";

// Crate-level exports - Scoreboard API
pub use api::{
    ApiError, ApiErrorKind, MatchRecord, NewMatch, OutcomeReport, PlayerEntry,
    RestScoreboardClient, Score, ScoreboardApi,
};

// Crate-level exports - Configuration
pub use config::{AppConfig, BASE_URL_ENV, ConfigError};

// Crate-level exports - Session
pub use session::{SessionError, SessionStore};

// Crate-level exports - Registration
pub use registration::{MIN_NAME_LEN, RegistrationError, validate_players};

// Crate-level exports - Plain-text reports
pub use report::{EMPTY_SCOREBOARD, match_summary, scoreboard_table};

// Crate-level exports - Lobby TUI
pub use lobby::{
    BoardScreen, Confirm, Field, LobbyController, RegisterScreen, Screen, ScoreboardScreen,
    ScreenTransition, run_tui,
};

// Crate-level exports - Game rules
pub use tictactoe_rules::{
    Board, Outcome, OutcomeTag, Placement, Position, Round, RoundStatus, Square, Symbol,
    has_win, is_draw, winner, winning_line,
};
