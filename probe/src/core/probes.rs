//! The three probe operations
//!
//! Each probe is a thin configuration over [`ProbePipeline`]: it picks an
//! endpoint and turns the outcome into a [`Report`]. Probes never retry and
//! never panic on remote input.

use shared::logging::{log_error, log_startup, log_success};

use crate::core::endpoint::Endpoint;
use crate::core::pipeline::ProbePipeline;
use crate::core::report::Report;
use crate::error::{ProbeError, ProbeResult};
use crate::traits::{CredentialSource, HttpTransport};
use crate::types::{ApiResponse, GenerateContentResponse, ModelList, DEFAULT_MODEL, DEFAULT_PROMPT};

/// Hint printed after a rejected credential
const REJECTED_KEY_HINT: &str = "   Your API Key might be invalid, restricted, or has no quota.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// List models, by default only those supporting content generation
    ListModels { include_all: bool },
    /// POST a greeting to one model's generate-content endpoint
    TestModel { model: String, prompt: String },
    /// Confirm the credential is accepted by listing models
    VerifyKey,
}

impl Probe {
    pub fn test_model_default() -> Self {
        Probe::TestModel {
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Probe::ListModels { .. } => "list-models",
            Probe::TestModel { .. } => "test-model",
            Probe::VerifyKey => "verify-key",
        }
    }

    /// Run the probe to completion and collect its console output
    pub async fn run<C, T>(&self, pipeline: &ProbePipeline<C, T>) -> Report
    where
        C: CredentialSource,
        T: HttpTransport,
    {
        log_startup(self.name(), "probe");

        let report = match self {
            Probe::ListModels { include_all } => list_models(pipeline, *include_all).await,
            Probe::TestModel { model, prompt } => test_model(pipeline, model, prompt).await,
            Probe::VerifyKey => verify_key(pipeline).await,
        };

        if report.is_success() {
            log_success(self.name(), "probe finished");
        } else {
            log_error(self.name(), "probe", &"failure reported");
        }
        report
    }
}

async fn list_models<C, T>(pipeline: &ProbePipeline<C, T>, include_all: bool) -> Report
where
    C: CredentialSource,
    T: HttpTransport,
{
    let mut report = Report::new();

    if let Err(e) = collect_models(pipeline, include_all, &mut report).await {
        match e {
            ProbeError::KeyMissing { .. } => report.failure("No API Key found"),
            other => report.failure(format!("Error: {other}")),
        };
    }

    report
}

async fn collect_models<C, T>(pipeline: &ProbePipeline<C, T>, include_all: bool, report: &mut Report) -> ProbeResult<()>
where
    C: CredentialSource,
    T: HttpTransport,
{
    let endpoint = Endpoint::ListModels;
    let key = pipeline.credential().await?;
    report.line(format!("Listing Models URL: {}", pipeline.display_url(&endpoint)?));

    let response = pipeline.dispatch(&key, &endpoint).await?;
    let listing: ModelList = serde_json::from_str(&response.body)?;

    report.success("Available Models:");
    for model in listing.models.iter().filter(|m| include_all || m.supports_generation()) {
        report.line(format!(" - {}", model.name));
    }
    Ok(())
}

async fn test_model<C, T>(pipeline: &ProbePipeline<C, T>, model: &str, prompt: &str) -> Report
where
    C: CredentialSource,
    T: HttpTransport,
{
    let mut report = Report::new();
    let endpoint = Endpoint::GenerateContent {
        model: model.to_string(),
        prompt: prompt.to_string(),
    };

    let outcome: ProbeResult<ApiResponse> = async {
        let key = pipeline.credential().await?;
        report.line(format!("Testing URL: {}", pipeline.display_url(&endpoint)?));
        pipeline.dispatch(&key, &endpoint).await
    }
    .await;

    match outcome {
        Ok(response) => {
            report.success(format!("Status: {}", response.status));
            report.line(response.body.as_str());
            let reply = serde_json::from_str::<GenerateContentResponse>(&response.body).ok();
            if let Some(text) = reply.as_ref().and_then(|r| r.reply_text()) {
                report.line(format!("   Reply: {}", text.trim()));
            }
        }
        Err(ProbeError::Http { status, reason, body }) => {
            report.failure(format!("Error: {status} - {reason}"));
            report.line(body);
        }
        Err(ProbeError::KeyMissing { .. }) => {
            report.failure("No API Key found");
        }
        Err(other) => {
            report.failure(format!("Error: {other}"));
        }
    }

    report
}

async fn verify_key<C, T>(pipeline: &ProbePipeline<C, T>) -> Report
where
    C: CredentialSource,
    T: HttpTransport,
{
    let mut report = Report::new();

    let key = match pipeline.credential().await {
        Ok(key) => key,
        Err(e) => {
            report.failure(format!("Error: {e}"));
            return report;
        }
    };

    report.credential(format!("Found API Key: {}", key.preview()));
    report.blank();

    let outcome = pipeline
        .dispatch(&key, &Endpoint::ListModels)
        .await
        .and_then(|response| serde_json::from_str::<ModelList>(&response.body).map_err(ProbeError::from));

    match outcome {
        Ok(listing) => {
            report.success("SUCCESS! The API Key is valid.");
            report.line(format!("   Connected to Gemini API. Found {} models.", listing.models.len()));
        }
        Err(ProbeError::Http { status, reason, body }) => {
            report.failure(format!("API Error: {status} - {reason}"));
            if !body.trim().is_empty() {
                report.line(format!("   Details: {body}"));
            }
            report.line(REJECTED_KEY_HINT);
        }
        Err(ProbeError::Transport { message }) => {
            report.failure(format!("Connection Error: {message}"));
        }
        Err(other) => {
            report.failure(format!("Error: {other}"));
        }
    }

    report
}
