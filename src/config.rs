//! Application configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Environment variable that overrides the scoreboard base URL.
pub const BASE_URL_ENV: &str = "SCOREBOARD_BASE_URL";

/// Client configuration, loaded from TOML with per-field defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
pub struct AppConfig {
    /// Scoreboard backend root URL.
    #[serde(default = "default_base_url")]
    base_url: String,

    /// File remembering the active match id.
    #[serde(default = "default_session_path")]
    session_path: PathBuf,

    /// Log file used while the terminal UI owns the screen.
    #[serde(default = "default_log_path")]
    log_path: PathBuf,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://tictactoe-be-jr76.onrender.com".to_string()
}

fn default_session_path() -> PathBuf {
    PathBuf::from(".tictactoe_session.toml")
}

fn default_log_path() -> PathBuf {
    PathBuf::from("tictactoe_scoreboard.log")
}

fn default_request_timeout_secs() -> u64 {
    15
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session_path: default_session_path(),
            log_path: default_log_path(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file, or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(base_url = %config.base_url, "Config loaded successfully");
        Ok(config)
    }

    /// Applies `SCOREBOARD_BASE_URL` if it is set and non-empty.
    #[instrument(skip(self))]
    pub fn apply_env(self) -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                debug!(base_url = %url, "Base URL overridden from environment");
                self.with_base_url(url)
            }
            _ => self,
        }
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
