//! reqwest-backed HTTP transport

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::ProbeResult;
use crate::traits::HttpTransport;
use crate::types::{ApiRequest, ApiResponse, HttpMethod};

/// Real transport issuing one request per call
pub struct RealHttpTransport {
    client: reqwest::Client,
}

impl RealHttpTransport {
    /// Create a transport whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> ProbeResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for RealHttpTransport {
    async fn send(&self, request: ApiRequest) -> ProbeResult<ApiResponse> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(request.url),
            HttpMethod::Post => self.client.post(request.url),
        };

        let mut builder = builder.header("Content-Type", ApiRequest::CONTENT_TYPE);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        Ok(ApiResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        })
    }
}
