//! Scoreboard API error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong talking to the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ApiErrorKind {
    /// Request never got a response (connect, timeout, TLS).
    #[display("transport")]
    Transport,
    /// Server answered with a non-success status.
    #[display("status {_0}")]
    Status(u16),
    /// Response body was not the expected JSON.
    #[display("decode")]
    Decode,
}

/// Scoreboard API error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Scoreboard API error ({}): {} at {}:{}", kind, message, file, line)]
pub struct ApiError {
    /// Error category.
    pub kind: ApiErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ApiError {
    /// Creates a new API error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Non-success HTTP status.
    #[track_caller]
    pub fn status(code: u16, body: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Status(code), body)
    }

    /// Short form for status lines, without the source location.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.message, self.kind)
    }

    /// True if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::Status(404)
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_decode() {
            ApiErrorKind::Decode
        } else if let Some(status) = err.status() {
            ApiErrorKind::Status(status.as_u16())
        } else {
            ApiErrorKind::Transport
        };
        Self::new(kind, format!("HTTP error: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(ApiErrorKind::Decode, format!("Invalid response body: {}", err))
    }
}
