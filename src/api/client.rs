//! REST client for the scoreboard backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tictactoe_rules::Outcome;
use tracing::{debug, info, instrument, warn};

use crate::AppConfig;
use crate::api::{ApiError, ApiErrorKind, MatchRecord, NewMatch, OutcomeReport};

/// Operations the scoreboard backend offers.
///
/// The backend owns the records and the counter arithmetic. Callers only
/// read snapshots and report outcomes.
#[async_trait]
pub trait ScoreboardApi: Send + Sync {
    /// Lists every recorded match.
    async fn list_matches(&self) -> Result<Vec<MatchRecord>, ApiError>;

    /// Creates a match for two players and returns the new record.
    async fn create_match(&self, new_match: &NewMatch) -> Result<MatchRecord, ApiError>;

    /// Fetches one match.
    async fn get_match(&self, id: &str) -> Result<MatchRecord, ApiError>;

    /// Reports a finished round. The backend bumps the matching counters.
    async fn report_outcome(&self, id: &str, outcome: Outcome) -> Result<(), ApiError>;

    /// Resets a match's counters.
    async fn clear_match(&self, id: &str) -> Result<(), ApiError>;
}

/// Scoreboard client over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct RestScoreboardClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestScoreboardClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP client cannot be built.
    #[instrument(skip(base_url), fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                ApiError::new(
                    ApiErrorKind::Transport,
                    format!("Failed to build HTTP client: {}", e),
                )
            })?;

        info!(base_url = %base_url, "Scoreboard client ready");
        Ok(Self { base_url, client })
    }

    /// Creates a client from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(config.base_url(), config.request_timeout())
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn players_url(&self) -> String {
        format!("{}/api/players", self.base_url)
    }

    fn match_url(&self, id: &str) -> String {
        format!("{}/api/players/{}", self.base_url, id)
    }

    /// Turns a non-success response into an error carrying the body.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "Scoreboard returned an error status");
        Err(ApiError::status(status.as_u16(), body))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ScoreboardApi for RestScoreboardClient {
    #[instrument(skip(self))]
    async fn list_matches(&self) -> Result<Vec<MatchRecord>, ApiError> {
        debug!("Listing matches");
        let response = self.client.get(self.players_url()).send().await?;
        let records: Option<Vec<MatchRecord>> = Self::decode(Self::check(response).await?).await?;
        let records = records.unwrap_or_default();
        info!(count = records.len(), "Matches loaded");
        Ok(records)
    }

    #[instrument(skip(self, new_match), fields(player1 = %new_match.player1, player2 = %new_match.player2))]
    async fn create_match(&self, new_match: &NewMatch) -> Result<MatchRecord, ApiError> {
        info!("Creating match");
        let response = self
            .client
            .post(self.players_url())
            .json(new_match)
            .send()
            .await?;
        let record: MatchRecord = Self::decode(Self::check(response).await?).await?;
        info!(match_id = %record.id, "Match created");
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn get_match(&self, id: &str) -> Result<MatchRecord, ApiError> {
        debug!("Fetching match");
        let response = self.client.get(self.match_url(id)).send().await?;
        let record: MatchRecord = Self::decode(Self::check(response).await?).await?;
        debug!(rounds = record.rounds, draw = record.draw, "Match fetched");
        Ok(record)
    }

    #[instrument(skip(self), fields(tag = %outcome.tag()))]
    async fn report_outcome(&self, id: &str, outcome: Outcome) -> Result<(), ApiError> {
        info!("Reporting round outcome");
        let response = self
            .client
            .put(self.match_url(id))
            .json(&OutcomeReport::from(outcome))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear_match(&self, id: &str) -> Result<(), ApiError> {
        info!("Clearing match record");
        let response = self
            .client
            .put(format!("{}/clear", self.match_url(id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
