//! Shared request pipeline
//!
//! Every probe follows the same shape: load the credential, build the request
//! for an endpoint, dispatch it once and interpret the status. Probes only pick
//! the endpoint and decide how to report the outcome.

use tracing::{debug, warn};
use url::Url;

use crate::core::endpoint::Endpoint;
use crate::error::{ProbeError, ProbeResult};
use crate::traits::{CredentialSource, HttpTransport};
use crate::types::{ApiKey, ApiResponse};

pub struct ProbePipeline<C, T> {
    credentials: C,
    transport: T,
    base_url: Url,
}

impl<C, T> ProbePipeline<C, T>
where
    C: CredentialSource,
    T: HttpTransport,
{
    pub fn new(credentials: C, transport: T, base_url: Url) -> Self {
        Self {
            credentials,
            transport,
            base_url,
        }
    }

    /// Load the credential; configuration errors surface before any network call
    pub async fn credential(&self) -> ProbeResult<ApiKey> {
        let key = self.credentials.load_credential().await?;
        debug!(key = %key, "Loaded credential");
        Ok(key)
    }

    /// Endpoint URL with the credential masked
    pub fn display_url(&self, endpoint: &Endpoint) -> ProbeResult<String> {
        endpoint.display_url(&self.base_url)
    }

    /// Send one request for `endpoint`. Non-2xx statuses become [`ProbeError::Http`].
    pub async fn dispatch(&self, key: &ApiKey, endpoint: &Endpoint) -> ProbeResult<ApiResponse> {
        let request = endpoint.request(&self.base_url, key)?;
        debug!(method = %request.method, url = %self.display_url(endpoint)?, "Dispatching request");

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            warn!(status = response.status, reason = %response.reason, "Request rejected");
            return Err(ProbeError::Http {
                status: response.status,
                reason: response.reason,
                body: response.body,
            });
        }

        Ok(response)
    }

    /// Load the credential and dispatch in one step
    pub async fn run(&self, endpoint: &Endpoint) -> ProbeResult<ApiResponse> {
        let key = self.credential().await?;
        self.dispatch(&key, endpoint).await
    }
}
