//! Shared building blocks for the credential probe
//!
//! Holds the pieces that are not tied to a particular remote API: configuration
//! file parsing, secret redaction, error types and logging setup.

pub mod env_file;
pub mod errors;
pub mod logging;
pub mod redact;

pub use env_file::EnvFile;
pub use errors::*;
