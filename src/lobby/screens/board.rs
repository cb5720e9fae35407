//! Board screen: one match, one round at a time.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_rules::{Board, Placement, Position, Round, Square, Symbol, winning_line};
use tracing::{debug, info, instrument};

use crate::api::{MatchRecord, winner_banner};
use crate::lobby::input::move_cursor;
use crate::lobby::screen::{Screen, ScreenTransition};

/// An action waiting for a y/n answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    /// Forget the active match.
    Stop,
    /// Reset the match counters on the backend.
    Clear,
}

impl Confirm {
    fn prompt(self) -> &'static str {
        match self {
            Self::Stop => "Stop this game? (y/n)",
            Self::Clear => "Clear all scores for this match? (y/n)",
        }
    }
}

/// State for the board screen.
#[derive(Debug, Getters)]
pub struct BoardScreen {
    match_id: String,
    record: Option<MatchRecord>,
    round: Round,
    cursor: Position,
    loading: bool,
    status: Option<String>,
    pending: Option<Confirm>,
}

impl BoardScreen {
    /// Opens the board for a match whose record is still being fetched.
    #[instrument]
    pub fn new(match_id: String) -> Self {
        info!(match_id = %match_id, "BoardScreen initialized");
        Self {
            match_id,
            record: None,
            round: Round::new(),
            cursor: Position::Center,
            loading: true,
            status: None,
            pending: None,
        }
    }

    /// Stores a freshly fetched record and re-enables the controls.
    pub fn set_record(&mut self, record: MatchRecord) {
        debug!(match_id = %record.id, rounds = record.rounds, "Match record loaded");
        self.record = Some(record);
        self.loading = false;
        self.status = None;
    }

    /// Shows a request failure and re-enables the controls.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.loading = false;
    }

    /// Clears the grid for a new round, with X to move.
    pub fn reset_round(&mut self) {
        self.round.reset();
        self.cursor = Position::Center;
    }

    /// Text for the status line. A finished round keeps its banner
    /// even when a request error is showing.
    pub fn status_text(&self) -> String {
        if let Some(confirm) = self.pending {
            return confirm.prompt().to_string();
        }
        match (&self.status, self.banner()) {
            (Some(status), Some(banner)) => format!("{} | {}", banner, status),
            (Some(status), None) => status.clone(),
            (None, _) if self.loading => "Loading...".to_string(),
            (None, Some(banner)) => banner,
            (None, None) => format!("{} to move", self.round.to_move()),
        }
    }

    /// Banner for the finished round, if any.
    pub fn banner(&self) -> Option<String> {
        self.round
            .outcome()
            .map(|outcome| winner_banner(self.record.as_ref(), outcome))
    }

    fn refresh(&mut self) -> ScreenTransition {
        self.loading = true;
        ScreenTransition::RefreshMatch {
            match_id: self.match_id.clone(),
        }
    }

    #[instrument(skip(self), fields(match_id = %self.match_id))]
    fn place(&mut self, pos: Position) -> ScreenTransition {
        self.cursor = pos;
        let placement = self.round.place(pos);
        if placement != Placement::Ignored {
            self.status = None;
        }
        match placement {
            Placement::Ignored | Placement::Continue { .. } => ScreenTransition::Stay,
            Placement::Finished(outcome) => {
                info!(%outcome, "Round finished");
                self.loading = true;
                ScreenTransition::ReportOutcome {
                    match_id: self.match_id.clone(),
                    outcome,
                }
            }
        }
    }

    fn answer(&mut self, confirm: Confirm, key: KeyCode) -> ScreenTransition {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.pending = None;
                match confirm {
                    Confirm::Stop => ScreenTransition::StopGame,
                    Confirm::Clear => {
                        self.loading = true;
                        ScreenTransition::ClearRecord {
                            match_id: self.match_id.clone(),
                        }
                    }
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.pending = None;
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }

    fn player_line(&self, symbol: Symbol) -> Line<'static> {
        let color = symbol_color(symbol);
        let (name, win, lose) = match &self.record {
            Some(record) => {
                let player = record.player_for(symbol);
                (player.name.clone(), player.score.win, player.score.lose)
            }
            None => (String::from("..."), 0, 0),
        };
        let marker = if !self.round.is_over() && self.round.to_move() == symbol {
            "> "
        } else {
            "  "
        };
        Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!("{} ({})", name, symbol),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  Win: {}  Lose: {}", win, lose)),
        ])
    }
}

impl Screen for BoardScreen {
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(11),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let round = self
            .record
            .as_ref()
            .map(|r| r.display_round())
            .unwrap_or(1);
        let title = Paragraph::new(format!("Round: {}", round))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let draws = self.record.as_ref().map(|r| r.draw).unwrap_or(0);
        let players = Paragraph::new(vec![
            self.player_line(Symbol::X),
            self.player_line(Symbol::O),
            Line::from(format!("  Draw: {}", draws)),
        ])
        .block(Block::default().borders(Borders::ALL).title("Players"));
        frame.render_widget(players, chunks[1]);

        draw_board(frame, chunks[2], self.round.board(), self.cursor);

        let style = if self.pending.is_some() {
            Style::default().fg(Color::Yellow)
        } else if self.status.is_some() {
            Style::default().fg(Color::Red)
        } else if self.loading {
            Style::default().fg(Color::DarkGray)
        } else if self.round.is_over() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let text = self.status_text();
        let status = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[3]);

        let help = if self.round.is_over() {
            "n: Next round | r: Restart | c: Clear | s: Stop | b: Back"
        } else {
            "Arrows: Move | Enter: Place | 1-9: Square | r: Restart | c: Clear | s: Stop | b: Back"
        };
        let help = Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key), fields(match_id = %self.match_id))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if let Some(confirm) = self.pending {
            return self.answer(confirm, key.code);
        }
        if self.loading {
            debug!("Ignoring key while loading");
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c @ '1'..='9') => match Position::from_key(c) {
                Some(pos) => self.place(pos),
                None => ScreenTransition::Stay,
            },
            KeyCode::Char('n') | KeyCode::Char('N') if self.round.is_over() => {
                self.reset_round();
                self.refresh()
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset_round();
                self.refresh()
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.pending = Some(Confirm::Stop);
                ScreenTransition::Stay
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.pending = Some(Confirm::Clear);
                ScreenTransition::Stay
            }
            KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc => {
                ScreenTransition::GoToScoreboard
            }
            _ => ScreenTransition::Stay,
        }
    }
}

fn symbol_color(symbol: Symbol) -> Color {
    match symbol {
        Symbol::X => Color::Blue,
        Symbol::O => Color::Red,
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 40, 11);
    let highlight = winning_line(board).map(|line| line.to_vec()).unwrap_or_default();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, row) in [0usize, 2, 4].into_iter().enumerate() {
        let positions = [
            Position::ALL[i * 3],
            Position::ALL[i * 3 + 1],
            Position::ALL[i * 3 + 2],
        ];
        draw_row(frame, rows[row], board, cursor, &positions, &highlight);
        if row < 4 {
            draw_separator(frame, rows[row + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    positions: &[Position; 3],
    highlight: &[Position],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], board, cursor, *pos, highlight.contains(pos));
        if i < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    pos: Position,
    highlighted: bool,
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(s) => (
            format!(" {} ", s),
            Style::default()
                .fg(symbol_color(s))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if highlighted {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
