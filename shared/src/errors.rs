//! Shared error types for the credential probe

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("{path} not found.")]
    ConfigFileMissing { path: String },

    #[error("Failed to read {path}: {message}")]
    ConfigRead { path: String, message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
