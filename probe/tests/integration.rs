//! End-to-end tests for the probe
//!
//! These tests wire the real credential source and the real reqwest transport
//! against a local wiremock server standing in for the Gemini API.

mod fixtures;

use std::path::Path;
use std::time::Duration;

use fixtures::*;
use probe::services::{EnvFileCredentialSource, RealHttpTransport};
use probe::{MockHttpTransport, Probe, ProbePipeline, DEFAULT_KEY_NAME};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn base_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/v1beta", server.uri())).unwrap()
}

fn real_pipeline(env_file: &Path, server: &MockServer) -> ProbePipeline<EnvFileCredentialSource, RealHttpTransport> {
    ProbePipeline::new(
        EnvFileCredentialSource::new(env_file, DEFAULT_KEY_NAME),
        RealHttpTransport::new(Duration::from_secs(5)).unwrap(),
        base_url(server),
    )
}

fn model_lines(rendered: &str) -> Vec<&str> {
    rendered.lines().filter(|l| l.starts_with(" - ")).collect()
}

#[tokio::test]
async fn test_list_models_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_models_one_generative()))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, env_file) = env_file_with_key();
    let report = Probe::ListModels { include_all: false }
        .run(&real_pipeline(&env_file, &server))
        .await;

    let rendered = report.render();
    assert!(report.is_success());
    assert_eq!(model_lines(&rendered), vec![" - models/gemini-flash-latest"]);
    assert!(!rendered.contains(TEST_KEY));
}

#[tokio::test]
async fn test_list_models_counts_generation_capable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_listing(7, 4)))
        .mount(&server)
        .await;

    let (_dir, env_file) = env_file_with_key();
    let report = Probe::ListModels { include_all: false }
        .run(&real_pipeline(&env_file, &server))
        .await;

    assert_eq!(model_lines(&report.render()).len(), 4);
}

#[tokio::test]
async fn test_verify_key_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_listing(5, 2)))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, env_file) = env_file_with_key();
    let report = Probe::VerifyKey.run(&real_pipeline(&env_file, &server)).await;
    let rendered = report.render();

    assert!(report.is_success());
    assert!(rendered.starts_with("🔑 Found API Key: abcd...5678\n"));
    assert!(rendered.contains("✅ SUCCESS! The API Key is valid."));
    assert!(rendered.contains("Found 5 models."));
    assert!(!rendered.contains(TEST_KEY));
}

#[tokio::test]
async fn test_forbidden_key_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(403).set_body_string(FORBIDDEN_BODY))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-flash-latest:generateContent"))
        .respond_with(ResponseTemplate::new(403).set_body_string(FORBIDDEN_BODY))
        .mount(&server)
        .await;

    let (_dir, env_file) = env_file_with_key();
    let pipeline = real_pipeline(&env_file, &server);

    let verify = Probe::VerifyKey.run(&pipeline).await.render();
    assert!(verify.contains("❌ API Error: 403 - Forbidden"));
    assert!(verify.contains(FORBIDDEN_BODY));

    let test = Probe::test_model_default().run(&pipeline).await.render();
    assert!(test.contains("❌ Error: 403 - Forbidden"));
    assert!(test.contains(FORBIDDEN_BODY));
}

#[tokio::test]
async fn test_test_model_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-flash-latest:generateContent"))
        .and(query_param("key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_content_reply("Hello! How can I help you today?")))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, env_file) = env_file_with_key();
    let report = Probe::test_model_default().run(&real_pipeline(&env_file, &server)).await;
    let rendered = report.render();

    assert!(report.is_success());
    assert!(rendered.contains("✅ Status: 200"));
    assert!(rendered.contains("   Reply: Hello! How can I help you today?"));
}

#[tokio::test]
async fn test_missing_key_never_touches_network() {
    let (_dir, env_file) = write_env_file("SERVER_PORT=8080\n");

    for probe in [Probe::ListModels { include_all: false }, Probe::test_model_default(), Probe::VerifyKey] {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(0);

        let pipeline = ProbePipeline::new(
            EnvFileCredentialSource::new(&env_file, DEFAULT_KEY_NAME),
            transport,
            Url::parse("https://generativelanguage.googleapis.com/v1beta").unwrap(),
        );
        let report = probe.run(&pipeline).await;
        assert!(!report.is_success());
    }
}

#[tokio::test]
async fn test_missing_config_file_reported() {
    let dir = tempfile::tempdir().unwrap();
    let env_file = dir.path().join("missing.env");

    let mut transport = MockHttpTransport::new();
    transport.expect_send().times(0);
    let pipeline = ProbePipeline::new(
        EnvFileCredentialSource::new(&env_file, DEFAULT_KEY_NAME),
        transport,
        Url::parse("https://generativelanguage.googleapis.com/v1beta").unwrap(),
    );

    let rendered = Probe::VerifyKey.run(&pipeline).await.render();
    assert_eq!(rendered, format!("❌ Error: {} not found.\n", env_file.display()));
}

#[tokio::test]
async fn test_unreadable_config_file_reported() {
    let dir = tempfile::tempdir().unwrap();
    let env_file = dir.path().join(".env");
    std::fs::write(&env_file, [b'G', b'=', 0xff, 0xfe, b'\n']).unwrap();

    for probe in [Probe::ListModels { include_all: false }, Probe::test_model_default(), Probe::VerifyKey] {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(0);
        let pipeline = ProbePipeline::new(
            EnvFileCredentialSource::new(&env_file, DEFAULT_KEY_NAME),
            transport,
            Url::parse("https://generativelanguage.googleapis.com/v1beta").unwrap(),
        );

        let rendered = probe.run(&pipeline).await.render();
        let prefix = format!("❌ Error: Failed to read {}: ", env_file.display());
        assert!(rendered.starts_with(&prefix), "{}: {rendered}", probe.name());
        assert_eq!(rendered.lines().count(), 1);
    }
}

#[tokio::test]
async fn test_key_with_dollar_sign_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("key", "abcd$1234efgh5678"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_listing(2, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, env_file) = write_env_file("GEMINI_API_KEY=abcd$1234efgh5678\n");
    let report = Probe::VerifyKey.run(&real_pipeline(&env_file, &server)).await;

    assert!(report.is_success());
    assert!(report.render().starts_with("🔑 Found API Key: abcd...5678\n"));
}

#[tokio::test]
async fn test_repeated_runs_produce_identical_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_listing(3, 2)))
        .expect(2)
        .mount(&server)
        .await;

    let (_dir, env_file) = env_file_with_key();
    let pipeline = real_pipeline(&env_file, &server);

    let first = Probe::ListModels { include_all: false }.run(&pipeline).await;
    let second = Probe::ListModels { include_all: false }.run(&pipeline).await;
    assert_eq!(first, second);
}
