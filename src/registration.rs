//! Player registration checks run before a match is created.

use tracing::{debug, instrument};

use crate::api::NewMatch;

/// Shortest accepted name, in characters.
pub const MIN_NAME_LEN: usize = 3;

/// Why a pair of names was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RegistrationError {
    /// Neither name was entered.
    #[display("Please enter valid name")]
    BothMissing,
    /// Player 1's name is empty or too short.
    #[display("Please enter valid name for player 1")]
    InvalidPlayer1,
    /// Player 2's name is empty or too short.
    #[display("Please enter valid name for player 2")]
    InvalidPlayer2,
    /// Both players typed the same name.
    #[display("Cannot use same player name")]
    SameName,
}

impl std::error::Error for RegistrationError {}

impl RegistrationError {
    /// Message shown under the player 1 field, if any.
    pub fn player1_message(&self) -> Option<String> {
        match self {
            Self::BothMissing | Self::InvalidPlayer1 | Self::SameName => Some(self.to_string()),
            Self::InvalidPlayer2 => None,
        }
    }

    /// Message shown under the player 2 field, if any.
    pub fn player2_message(&self) -> Option<String> {
        match self {
            Self::BothMissing | Self::InvalidPlayer2 | Self::SameName => Some(self.to_string()),
            Self::InvalidPlayer1 => None,
        }
    }
}

/// Validates two player names and builds the create request.
///
/// Names are taken as typed. The first failing rule wins, in this order:
/// both empty, player 1 too short, player 2 too short, identical names.
///
/// # Errors
///
/// Returns the first [`RegistrationError`] that applies.
#[instrument]
pub fn validate_players(player1: &str, player2: &str) -> Result<NewMatch, RegistrationError> {
    let err = if player1.is_empty() && player2.is_empty() {
        Some(RegistrationError::BothMissing)
    } else if player1.chars().count() < MIN_NAME_LEN {
        Some(RegistrationError::InvalidPlayer1)
    } else if player2.chars().count() < MIN_NAME_LEN {
        Some(RegistrationError::InvalidPlayer2)
    } else if player1 == player2 {
        Some(RegistrationError::SameName)
    } else {
        None
    };

    match err {
        Some(err) => {
            debug!(error = %err, "Registration rejected");
            Err(err)
        }
        None => Ok(NewMatch::new(player1.to_string(), player2.to_string())),
    }
}
