//! Remote endpoints and request construction

use url::Url;

use crate::error::ProbeResult;
use crate::types::{ApiKey, ApiRequest, GenerateContentRequest, HttpMethod};

/// Placeholder shown instead of the credential in echoed URLs
pub const KEY_PLACEHOLDER: &str = "API_KEY";

/// Endpoints the probe knows how to call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET {base}/models`
    ListModels,
    /// `POST {base}/models/<model>:generateContent`
    GenerateContent { model: String, prompt: String },
}

impl Endpoint {
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::ListModels => HttpMethod::Get,
            Endpoint::GenerateContent { .. } => HttpMethod::Post,
        }
    }

    /// Full URL with the credential as the `key` query parameter
    pub fn url(&self, base: &Url, key: &ApiKey) -> ProbeResult<Url> {
        self.url_with_key(base, key.expose())
    }

    /// URL safe to print, with the credential replaced by a placeholder
    pub fn display_url(&self, base: &Url) -> ProbeResult<String> {
        Ok(self.url_with_key(base, KEY_PLACEHOLDER)?.to_string())
    }

    /// JSON body, if the endpoint takes one
    pub fn body(&self) -> Option<serde_json::Value> {
        match self {
            Endpoint::ListModels => None,
            Endpoint::GenerateContent { prompt, .. } => {
                serde_json::to_value(GenerateContentRequest::single_message(prompt)).ok()
            }
        }
    }

    /// Build the request for this endpoint
    pub fn request(&self, base: &Url, key: &ApiKey) -> ProbeResult<ApiRequest> {
        Ok(ApiRequest {
            method: self.method(),
            url: self.url(base, key)?,
            body: self.body(),
        })
    }

    fn url_with_key(&self, base: &Url, key: &str) -> ProbeResult<Url> {
        let path = match self {
            Endpoint::ListModels => "models".to_string(),
            Endpoint::GenerateContent { model, .. } => format!("models/{model}:generateContent"),
        };

        // Join relative to the base path so `/v1beta` is preserved
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }

        let mut url = base.join(&path)?;
        url.query_pairs_mut().append_pair("key", key);
        Ok(url)
    }
}
