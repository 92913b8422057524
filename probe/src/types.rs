//! Probe data types

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Default location of the configuration file
pub const DEFAULT_ENV_FILE: &str = "backend/.env";

/// Configuration key holding the credential
pub const DEFAULT_KEY_NAME: &str = "GEMINI_API_KEY";

/// Root of the generative-language REST API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model exercised by the endpoint test
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";

/// Greeting sent by the endpoint test
pub const DEFAULT_PROMPT: &str = "Hello";

/// Capability a model must advertise to be listed
pub const GENERATE_CONTENT: &str = "generateContent";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Run-time configuration assembled from the command line
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub env_file: PathBuf,
    pub key_name: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Parse the configured base URL
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }
}

/// API credential read from the configuration file
///
/// `Debug` and `Display` only ever show the redacted preview.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw value, trimming whitespace. Blank values are rejected.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The full secret, for building requests only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Redacted preview suitable for console output
    pub fn preview(&self) -> String {
        shared::redact::preview(&self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self.preview())
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.preview())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// Outgoing request, built right before dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub const CONTENT_TYPE: &'static str = "application/json";
}

/// Raw response as received from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// `GET /models` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

/// Single entry of the model listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    /// Whether the model can produce free-form content
    pub fn supports_generation(&self) -> bool {
        self.supported_generation_methods.iter().any(|m| m == GENERATE_CONTENT)
    }
}

/// `POST /models/<id>:generateContent` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Request holding a single user message
    pub fn single_message(text: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: text.to_string() }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Subset of the generate-content response needed to pull out the reply
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if any
    pub fn reply_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}
