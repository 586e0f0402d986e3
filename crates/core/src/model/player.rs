use std::fmt;

use thiserror::Error;

/// Errors that can occur while validating a player name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayerNameError {
    #[error("player name must not be empty")]
    Empty,
}

/// Validated, trimmed display name for the current player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    /// Trim and validate raw input.
    ///
    /// # Errors
    ///
    /// Returns `PlayerNameError::Empty` for blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, PlayerNameError> {
        let trimmed = raw.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(PlayerNameError::Empty);
        }
        Ok(Self(trimmed))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
