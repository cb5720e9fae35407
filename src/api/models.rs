//! Wire models for the scoreboard API.
//!
//! The backend owns these records. The client only reads snapshots and sends
//! create and outcome requests.

use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Deserializer, Serialize};
use tictactoe_rules::{Outcome, OutcomeTag, Symbol};

/// Win/lose counters for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub win: u32,
    /// Rounds lost.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub lose: u32,
}

/// A player in a match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// Display name.
    pub name: String,
    /// Counters for this player.
    #[serde(default)]
    pub score: Score,
}

/// Snapshot of a match as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Plays X.
    pub player1: PlayerEntry,
    /// Plays O.
    pub player2: PlayerEntry,
    /// Rounds recorded so far.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub rounds: u32,
    /// Drawn rounds.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub draw: u32,
    /// When the backend created the record.
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the backend last touched the record.
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MatchRecord {
    /// Round number to display. A fresh record shows round 1.
    pub fn display_round(&self) -> u32 {
        if self.rounds == 0 { 1 } else { self.rounds }
    }

    /// The player holding a symbol.
    pub fn player_for(&self, symbol: Symbol) -> &PlayerEntry {
        match symbol {
            Symbol::X => &self.player1,
            Symbol::O => &self.player2,
        }
    }

    /// Banner text for a finished round.
    pub fn winner_banner(&self, outcome: Outcome) -> String {
        winner_banner(Some(self), outcome)
    }
}

/// Banner text for a finished round, falling back to generic names when the
/// record has not loaded.
pub(crate) fn winner_banner(record: Option<&MatchRecord>, outcome: Outcome) -> String {
    match (outcome, record) {
        (Outcome::Draw, _) => "Draw".to_string(),
        (Outcome::Winner(symbol), Some(record)) => {
            format!("{} wins", record.player_for(symbol).name)
        }
        (Outcome::Winner(Symbol::X), None) => "Player 1 wins".to_string(),
        (Outcome::Winner(Symbol::O), None) => "Player 2 wins".to_string(),
    }
}

/// Body for creating a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct NewMatch {
    /// Name of the player who plays X.
    pub player1: String,
    /// Name of the player who plays O.
    pub player2: String,
}

/// Body for reporting a round outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeReport {
    /// Which counters the backend should bump.
    pub winner: OutcomeTag,
}

impl From<Outcome> for OutcomeReport {
    fn from(outcome: Outcome) -> Self {
        Self {
            winner: outcome.tag(),
        }
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{
            "_id": "65f1c0ffee",
            "player1": {"name": "Alice", "score": {"win": 2, "lose": 1}},
            "player2": {"name": "Bob", "score": {"win": 1, "lose": 2}},
            "rounds": 4,
            "draw": 1,
            "createdAt": "2024-03-13T10:00:00.000Z",
            "updatedAt": "2024-03-13T10:05:00.000Z",
            "__v": 0
        }"#;

        let record: MatchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "65f1c0ffee");
        assert_eq!(record.player1.score.win, 2);
        assert_eq!(record.player2.score.lose, 2);
        assert_eq!(record.rounds, 4);
        assert_eq!(record.draw, 1);
        assert!(record.created_at.is_some());
    }

    #[test]
    fn test_missing_and_null_counters_default_to_zero() {
        let json = r#"{
            "_id": "abc",
            "player1": {"name": "Alice", "score": {"win": null, "lose": 0}},
            "player2": {"name": "Bob"},
            "rounds": null
        }"#;

        let record: MatchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.player1.score.win, 0);
        assert_eq!(record.player2.score, Score::default());
        assert_eq!(record.rounds, 0);
        assert_eq!(record.draw, 0);
        assert_eq!(record.display_round(), 1);
    }

    #[test]
    fn test_banner_names_the_symbol_owner() {
        let record = MatchRecord {
            id: "m1".to_string(),
            player1: PlayerEntry {
                name: "Alice".to_string(),
                score: Score::default(),
            },
            player2: PlayerEntry {
                name: "Bob".to_string(),
                score: Score::default(),
            },
            rounds: 3,
            draw: 0,
            created_at: None,
            updated_at: None,
        };

        assert_eq!(record.winner_banner(Outcome::Winner(Symbol::X)), "Alice wins");
        assert_eq!(record.winner_banner(Outcome::Winner(Symbol::O)), "Bob wins");
        assert_eq!(record.winner_banner(Outcome::Draw), "Draw");
        assert_eq!(record.display_round(), 3);
    }

    #[test]
    fn test_outcome_report_body() {
        let body = OutcomeReport::from(Outcome::Winner(Symbol::O));
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"winner": "player2"})
        );
    }
}
