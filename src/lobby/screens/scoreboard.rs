//! Scoreboard screen listing every recorded match with its counters.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use tracing::{debug, info, instrument};

use crate::api::MatchRecord;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::report::EMPTY_SCOREBOARD;

/// State for the scoreboard screen.
#[derive(Debug, Getters)]
pub struct ScoreboardScreen {
    records: Vec<MatchRecord>,
    selected: usize,
    active_match: Option<String>,
    error_message: Option<String>,
}

impl ScoreboardScreen {
    /// Creates the screen from a loaded list of matches.
    ///
    /// `active_match` is the locally remembered match, if any.
    #[instrument(skip(records))]
    pub fn new(records: Vec<MatchRecord>, active_match: Option<String>) -> Self {
        info!(count = records.len(), "ScoreboardScreen initialized");
        Self {
            records,
            selected: 0,
            active_match,
            error_message: None,
        }
    }

    /// Creates the screen when the list could not be loaded.
    pub fn with_error(active_match: Option<String>, message: impl Into<String>) -> Self {
        let mut screen = Self::new(Vec::new(), active_match);
        screen.error_message = Some(message.into());
        screen
    }

    fn select_previous(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected = match self.selected {
            0 => self.records.len() - 1,
            i => i - 1,
        };
    }

    fn select_next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.records.len();
    }

    fn play_label(&self) -> &'static str {
        if self.active_match.is_some() {
            "Continue Game"
        } else {
            "Play Game"
        }
    }
}

impl Screen for ScoreboardScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Tic Tac Toe Scoring Board")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let play = Paragraph::new(format!("[p] {}", self.play_label()))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(play, chunks[1]);

        if self.records.is_empty() {
            let (text, color) = match &self.error_message {
                Some(err) => (err.as_str(), Color::Red),
                None => (EMPTY_SCOREBOARD, Color::DarkGray),
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(color))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Matches"));
            frame.render_widget(empty, chunks[2]);
        } else {
            let bold = Style::default().add_modifier(Modifier::BOLD);
            let header = Row::new(vec![
                Cell::from("Players").style(bold),
                Cell::from("Score").style(bold),
                Cell::from("Rounds").style(bold),
                Cell::from("Draw").style(bold),
            ])
            .style(Style::default().fg(Color::Yellow));

            let rows: Vec<Row> = self
                .records
                .iter()
                .map(|record| {
                    let players = Text::from(format!(
                        "{}\n{}",
                        record.player1.name, record.player2.name
                    ));
                    let scores = Text::from(format!(
                        "Win: {} Lose: {}\nWin: {} Lose: {}",
                        record.player1.score.win,
                        record.player1.score.lose,
                        record.player2.score.win,
                        record.player2.score.lose,
                    ));
                    Row::new(vec![
                        Cell::from(players),
                        Cell::from(scores),
                        Cell::from(record.rounds.to_string()),
                        Cell::from(record.draw.to_string()),
                    ])
                    .height(2)
                })
                .collect();

            let widths = [
                Constraint::Percentage(35),
                Constraint::Percentage(35),
                Constraint::Percentage(15),
                Constraint::Percentage(15),
            ];

            let table = Table::new(rows, widths)
                .header(header)
                .block(Block::default().borders(Borders::ALL).title("Matches"))
                .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("> ");

            let mut state = TableState::default().with_selected(Some(self.selected));
            frame.render_stateful_widget(table, chunks[2], &mut state);
        }

        let help = Paragraph::new("p: Play | ↑↓: Select | Enter: Rematch | r: Refresh | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => match self.records.get(self.selected) {
                Some(record) => {
                    info!(match_id = %record.id, "Rematch selected");
                    ScreenTransition::GoToBoard {
                        match_id: record.id.clone(),
                    }
                }
                None => ScreenTransition::Stay,
            },
            KeyCode::Char('p') | KeyCode::Char('P') => match &self.active_match {
                Some(id) => {
                    debug!(match_id = %id, "Continuing active match");
                    ScreenTransition::GoToBoard {
                        match_id: id.clone(),
                    }
                }
                None => ScreenTransition::GoToRegister,
            },
            KeyCode::Char('r') | KeyCode::Char('R') => ScreenTransition::GoToScoreboard,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
