//! Client for the remote scoreboard API.

mod client;
mod error;
mod models;

pub use client::{RestScoreboardClient, ScoreboardApi};
pub use error::{ApiError, ApiErrorKind};
pub use models::{MatchRecord, NewMatch, OutcomeReport, PlayerEntry, Score};
pub(crate) use models::winner_banner;
