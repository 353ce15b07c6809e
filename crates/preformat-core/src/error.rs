//! Error types
//!
//! Logging itself never fails. Errors only come from the edges around it:
//! calling a mode the logger was not built with, and loading format tables
//! from configuration files.

use thiserror::Error;

/// Errors that can occur around a `Preformat` logger
#[derive(Error, Debug)]
pub enum PreformatError {
    /// The mode is not part of the logger's mode set
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// A configured rule has a shape that cannot be used as a format rule
    #[error("Invalid format rule for '{mode}': {message}")]
    InvalidRule { mode: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PreformatError {
    /// Create an unknown mode error
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        Self::UnknownMode(mode.into())
    }

    /// Create an invalid rule error
    pub fn invalid_rule(mode: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            mode: mode.into(),
            message: message.into(),
        }
    }
}

pub type PreformatResult<T> = Result<T, PreformatError>;
