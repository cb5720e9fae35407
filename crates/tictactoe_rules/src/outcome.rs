//! Round outcomes and their scoreboard tags.

use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A symbol completed a line.
    Winner(Symbol),
    /// The board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Winner(symbol) => Some(*symbol),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Scoreboard tag for this outcome. X belongs to player 1, O to player 2.
    pub fn tag(&self) -> OutcomeTag {
        match self {
            Outcome::Winner(Symbol::X) => OutcomeTag::Player1,
            Outcome::Winner(Symbol::O) => OutcomeTag::Player2,
            Outcome::Draw => OutcomeTag::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(symbol) => write!(f, "{symbol} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Wire tag the scoreboard uses to pick which counters to bump.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutcomeTag {
    /// Player 1 (X) won.
    Player1,
    /// Player 2 (O) won.
    Player2,
    /// Nobody won.
    Draw,
}

impl From<Outcome> for OutcomeTag {
    fn from(outcome: Outcome) -> Self {
        outcome.tag()
    }
}
