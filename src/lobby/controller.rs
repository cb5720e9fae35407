//! Lobby controller: the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument, warn};

use crate::api::{NewMatch, ScoreboardApi};
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::screens::{BoardScreen, RegisterScreen, ScoreboardScreen};
use crate::session::SessionStore;
use tictactoe_rules::Outcome;

/// Active screen in the lobby state machine.
#[derive(Debug)]
enum ActiveScreen {
    Scoreboard(ScoreboardScreen),
    Register(RegisterScreen),
    Board(BoardScreen),
}

impl ActiveScreen {
    fn render(&self, frame: &mut ratatui::Frame) {
        match self {
            Self::Scoreboard(s) => s.render(frame),
            Self::Register(s) => s.render(frame),
            Self::Board(s) => s.render(frame),
        }
    }

    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> ScreenTransition {
        match self {
            Self::Scoreboard(s) => s.handle_key(key),
            Self::Register(s) => s.handle_key(key),
            Self::Board(s) => s.handle_key(key),
        }
    }
}

/// Controller that drives the lobby state machine.
///
/// Screens decide what should happen; the controller talks to the
/// scoreboard and the session store, then hands results back.
/// Call [`LobbyController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct LobbyController<A: ScoreboardApi> {
    api: A,
    session: SessionStore,
}

impl<A: ScoreboardApi> LobbyController<A> {
    /// Creates a new lobby controller.
    #[instrument(skip(api))]
    pub fn new(api: A, session: SessionStore) -> Self {
        info!("Creating LobbyController");
        Self { api, session }
    }

    /// Runs the lobby event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting lobby event loop");

        let mut screen = self.scoreboard().await;

        loop {
            terminal.draw(|f| screen.render(f))?;

            // Short poll keeps the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // crossterm fires both press and release on some platforms.
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = screen.handle_key(key);
                screen = match self.apply_transition(transition, screen).await {
                    Some(next) => next,
                    None => {
                        info!("Lobby quitting");
                        return Ok(());
                    }
                };
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    async fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToScoreboard => Some(self.scoreboard().await),

            ScreenTransition::GoToRegister => match self.active_match() {
                Some(match_id) => {
                    info!(match_id = %match_id, "Session active, skipping registration");
                    Some(self.open_board(match_id).await)
                }
                None => Some(ActiveScreen::Register(RegisterScreen::new())),
            },

            ScreenTransition::GoToBoard { match_id } => Some(self.open_board(match_id).await),

            ScreenTransition::CreateMatch(new_match) => {
                Some(self.create_match(new_match, current).await)
            }

            ScreenTransition::ReportOutcome { match_id, outcome } => {
                Some(self.report_outcome(&match_id, outcome, current).await)
            }

            ScreenTransition::RefreshMatch { match_id } => Some(match current {
                ActiveScreen::Board(mut board) => {
                    self.refresh_board(&mut board, &match_id).await;
                    ActiveScreen::Board(board)
                }
                other => other,
            }),

            ScreenTransition::ClearRecord { match_id } => Some(match current {
                ActiveScreen::Board(mut board) => {
                    match self.api.clear_match(&match_id).await {
                        Ok(()) => {
                            info!(match_id = %match_id, "Match record cleared");
                            board.reset_round();
                            self.refresh_board(&mut board, &match_id).await;
                        }
                        Err(e) => {
                            warn!(match_id = %match_id, error = %e, "Clear failed");
                            board.set_error(format!("Could not clear scores: {}", e.summary()));
                        }
                    }
                    ActiveScreen::Board(board)
                }
                other => other,
            }),

            ScreenTransition::StopGame => {
                if let Err(e) = self.session.clear() {
                    warn!(error = %e, "Failed to clear session");
                }
                info!("Game stopped");
                Some(self.scoreboard().await)
            }

            ScreenTransition::Quit => None,
        }
    }

    fn active_match(&self) -> Option<String> {
        match self.session.load() {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable session");
                None
            }
        }
    }

    #[instrument(skip(self))]
    async fn scoreboard(&self) -> ActiveScreen {
        let active = self.active_match();
        let screen = match self.api.list_matches().await {
            Ok(records) => ScoreboardScreen::new(records, active),
            Err(e) => {
                error!(error = %e, "Failed to load scoreboard");
                ScoreboardScreen::with_error(
                    active,
                    format!("Could not load scoreboard: {}", e.summary()),
                )
            }
        };
        ActiveScreen::Scoreboard(screen)
    }

    #[instrument(skip(self))]
    async fn open_board(&self, match_id: String) -> ActiveScreen {
        let mut board = BoardScreen::new(match_id.clone());
        self.refresh_board(&mut board, &match_id).await;
        ActiveScreen::Board(board)
    }

    async fn refresh_board(&self, board: &mut BoardScreen, match_id: &str) {
        match self.api.get_match(match_id).await {
            Ok(record) => board.set_record(record),
            Err(e) => {
                warn!(match_id = %match_id, error = %e, "Failed to load match");
                board.set_error(format!("Could not load match: {}", e.summary()));
            }
        }
    }

    #[instrument(skip(self, current))]
    async fn create_match(&self, new_match: NewMatch, current: ActiveScreen) -> ActiveScreen {
        match self.api.create_match(&new_match).await {
            Ok(record) => {
                info!(match_id = %record.id, "Match created");
                if let Err(e) = self.session.save(&record.id) {
                    warn!(error = %e, "Failed to save session");
                }
                let mut board = BoardScreen::new(record.id.clone());
                board.set_record(record);
                ActiveScreen::Board(board)
            }
            Err(e) => {
                error!(error = %e, "Failed to create match");
                match current {
                    ActiveScreen::Register(mut register) => {
                        register.set_submit_error(format!(
                            "Could not start match: {}",
                            e.summary()
                        ));
                        ActiveScreen::Register(register)
                    }
                    other => other,
                }
            }
        }
    }

    #[instrument(skip(self, current))]
    async fn report_outcome(
        &self,
        match_id: &str,
        outcome: Outcome,
        current: ActiveScreen,
    ) -> ActiveScreen {
        let mut board = match current {
            ActiveScreen::Board(board) => board,
            other => return other,
        };
        match self.api.report_outcome(match_id, outcome).await {
            Ok(()) => {
                info!(match_id = %match_id, %outcome, "Outcome reported");
                self.refresh_board(&mut board, match_id).await;
            }
            Err(e) => {
                error!(match_id = %match_id, error = %e, "Failed to report outcome");
                board.set_error(format!("Could not save result: {}", e.summary()));
            }
        }
        ActiveScreen::Board(board)
    }
}
