//! Probe error types

use shared::SharedError;
use thiserror::Error;

/// Result type for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Probe error types
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("{path} not found.")]
    ConfigFileMissing { path: String },

    #[error("{key} not found in {path}")]
    KeyMissing { key: String, path: String },

    #[error("Failed to read {path}: {message}")]
    ConfigRead { path: String, message: String },

    #[error("{message}")]
    Transport { message: String },

    #[error("{status} - {reason}")]
    Http { status: u16, reason: String, body: String },

    #[error("Invalid response: {message}")]
    Parse { message: String },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ProbeError {
    /// Errors raised before any request is attempted
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ProbeError::ConfigFileMissing { .. } | ProbeError::KeyMissing { .. } | ProbeError::ConfigRead { .. }
        )
    }
}

impl From<SharedError> for ProbeError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ConfigFileMissing { path } => ProbeError::ConfigFileMissing { path },
            SharedError::ConfigRead { path, message } => ProbeError::ConfigRead { path, message },
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the credential as a query parameter
        ProbeError::Transport {
            message: err.without_url().to_string(),
        }
    }
}
