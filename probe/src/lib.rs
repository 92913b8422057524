//! Credential probe library
//!
//! Reads an API credential from a local `KEY=VALUE` file and checks it against the
//! Gemini generative-language REST API: list models, exercise one model's
//! generate-content endpoint, or confirm the key is accepted.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use crate::core::{Endpoint, Probe, ProbePipeline, Report};
pub use error::{ProbeError, ProbeResult};
pub use traits::*;
pub use types::*;
