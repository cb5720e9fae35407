//! Screen trait and transition type for the lobby state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use tictactoe_rules::Outcome;

use crate::api::NewMatch;

/// The result of handling an input event on a screen.
///
/// Navigation variants move between screens. Request variants ask the
/// [`LobbyController`](crate::LobbyController) to call the scoreboard and
/// hand the answer back to the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the scoreboard, reloading it.
    GoToScoreboard,
    /// Navigate to player registration.
    GoToRegister,
    /// Open the board for an existing match.
    GoToBoard {
        /// Backend id of the match.
        match_id: String,
    },
    /// Create a match from validated names.
    CreateMatch(NewMatch),
    /// Report a finished round.
    ReportOutcome {
        /// Backend id of the match.
        match_id: String,
        /// How the round ended.
        outcome: Outcome,
    },
    /// Re-fetch the match shown on the board.
    RefreshMatch {
        /// Backend id of the match.
        match_id: String,
    },
    /// Reset the match counters, then start a fresh round.
    ClearRecord {
        /// Backend id of the match.
        match_id: String,
    },
    /// Forget the active match and return to the scoreboard.
    StopGame,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the lobby state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// Screens never touch the network; the controller does.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
