//! Local tracking of the match currently being played.

use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    match_id: String,
}

/// Remembers the active match id between runs.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by the file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the active match id. A missing file means no session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the file exists but is unreadable or malformed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<String>, SessionError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No session file");
                return Ok(None);
            }
            Err(e) => {
                return Err(SessionError::new(format!(
                    "Failed to read session file: {}",
                    e
                )));
            }
        };

        let file: SessionFile = toml::from_str(&content)
            .map_err(|e| SessionError::new(format!("Failed to parse session file: {}", e)))?;
        debug!(match_id = %file.match_id, "Session loaded");
        Ok(Some(file.match_id))
    }

    /// Records `match_id` as the active match.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the file cannot be written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self, match_id: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                SessionError::new(format!("Failed to create session directory: {}", e))
            })?;
        }

        let content = toml::to_string(&SessionFile {
            match_id: match_id.to_string(),
        })
        .map_err(|e| SessionError::new(format!("Failed to encode session: {}", e)))?;

        std::fs::write(&self.path, content)
            .map_err(|e| SessionError::new(format!("Failed to write session file: {}", e)))?;
        info!("Session saved");
        Ok(())
    }

    /// Forgets the active match. Clearing an absent session is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the file exists but cannot be removed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::new(format!(
                "Failed to remove session file: {}",
                e
            ))),
        }
    }
}

/// Session file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", message, file, line)]
pub struct SessionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
