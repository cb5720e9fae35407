//! Player registration screen.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{info, instrument};

use crate::lobby::screen::{Screen, ScreenTransition};
use crate::registration::validate_players;

/// Which input field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The first player's name.
    Player1,
    /// The second player's name.
    Player2,
}

impl Field {
    fn toggle(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }
}

/// Two name fields with per-field validation messages.
#[derive(Debug, Getters)]
pub struct RegisterScreen {
    player1: String,
    player2: String,
    focus: Field,
    player1_error: Option<String>,
    player2_error: Option<String>,
    submit_error: Option<String>,
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterScreen {
    /// Creates an empty form focused on player 1.
    pub fn new() -> Self {
        Self {
            player1: String::new(),
            player2: String::new(),
            focus: Field::Player1,
            player1_error: None,
            player2_error: None,
            submit_error: None,
        }
    }

    /// Shows a failure from the create request.
    pub fn set_submit_error(&mut self, message: impl Into<String>) {
        self.submit_error = Some(message.into());
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Player1 => &mut self.player1,
            Field::Player2 => &mut self.player2,
        }
    }

    #[instrument(skip(self))]
    fn submit(&mut self) -> ScreenTransition {
        self.submit_error = None;
        match validate_players(&self.player1, &self.player2) {
            Ok(new_match) => {
                self.player1_error = None;
                self.player2_error = None;
                info!(player1 = %new_match.player1, player2 = %new_match.player2, "Registering players");
                ScreenTransition::CreateMatch(new_match)
            }
            Err(err) => {
                self.player1_error = err.player1_message();
                self.player2_error = err.player2_message();
                ScreenTransition::Stay
            }
        }
    }

    fn field_block(&self, field: Field, title: &'static str) -> Block<'static> {
        let style = if self.focus == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(title)
    }
}

impl Screen for RegisterScreen {
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Register Players")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let error_style = Style::default().fg(Color::Red);

        let p1 = Paragraph::new(self.player1.as_str())
            .block(self.field_block(Field::Player1, "Player 1 (X)"));
        frame.render_widget(p1, chunks[1]);
        if let Some(err) = &self.player1_error {
            frame.render_widget(Paragraph::new(err.as_str()).style(error_style), chunks[2]);
        }

        let p2 = Paragraph::new(self.player2.as_str())
            .block(self.field_block(Field::Player2, "Player 2 (O)"));
        frame.render_widget(p2, chunks[3]);
        if let Some(err) = &self.player2_error {
            frame.render_widget(Paragraph::new(err.as_str()).style(error_style), chunks[4]);
        }

        if let Some(err) = &self.submit_error {
            frame.render_widget(
                Paragraph::new(err.as_str())
                    .style(error_style)
                    .alignment(Alignment::Center),
                chunks[5],
            );
        }

        let help = Paragraph::new("Tab: Switch field | Enter: Start | Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[7]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
                ScreenTransition::Stay
            }
            KeyCode::Char(c) => {
                self.focused_mut().push(c);
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_mut().pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => ScreenTransition::GoToScoreboard,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NewMatch;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut RegisterScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_valid_names_create_match() {
        let mut screen = RegisterScreen::new();
        type_text(&mut screen, "Alice");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "Bob");
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ScreenTransition::CreateMatch(NewMatch::new("Alice".to_string(), "Bob".to_string()))
        );
    }

    #[test]
    fn test_empty_form_flags_both_fields() {
        let mut screen = RegisterScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenTransition::Stay);
        assert_eq!(screen.player1_error().as_deref(), Some("Please enter valid name"));
        assert_eq!(screen.player2_error().as_deref(), Some("Please enter valid name"));
    }

    #[test]
    fn test_short_second_name_flags_only_player2() {
        let mut screen = RegisterScreen::new();
        type_text(&mut screen, "Alice");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "Bo");
        screen.handle_key(key(KeyCode::Enter));
        assert!(screen.player1_error().is_none());
        assert_eq!(
            screen.player2_error().as_deref(),
            Some("Please enter valid name for player 2")
        );
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut screen = RegisterScreen::new();
        type_text(&mut screen, "Alicex");
        screen.handle_key(key(KeyCode::Backspace));
        assert_eq!(screen.player1(), "Alice");
        assert_eq!(screen.player2(), "");
    }

    #[test]
    fn test_escape_returns_to_scoreboard() {
        let mut screen = RegisterScreen::new();
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc)),
            ScreenTransition::GoToScoreboard
        );
    }
}
