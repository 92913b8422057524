//! Probe trait definitions for dependency injection

use async_trait::async_trait;

use crate::error::ProbeResult;
use crate::types::{ApiKey, ApiRequest, ApiResponse};

/// Source of the API credential
///
/// Implementations read fresh on every call; nothing is cached between runs.
#[mockall::automock]
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Load the credential, failing with a configuration error if it is unavailable
    async fn load_credential(&self) -> ProbeResult<ApiKey>;
}

/// HTTP transport used by the request pipeline
///
/// Returns the response for every status code; only connection-level failures
/// are errors here. Status interpretation belongs to the pipeline.
#[mockall::automock]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a single request and wait for the full body
    async fn send(&self, request: ApiRequest) -> ProbeResult<ApiResponse>;
}
