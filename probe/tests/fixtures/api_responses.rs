//! Canned API payloads for testing

#![allow(dead_code)] // Test utilities may not all be used currently

use serde_json::{json, Value};

/// Listing with two models, only the first of which supports generation
pub fn two_models_one_generative() -> Value {
    json!({
        "models": [
            {
                "name": "models/gemini-flash-latest",
                "displayName": "Gemini Flash Latest",
                "supportedGenerationMethods": ["generateContent", "countTokens"]
            },
            {
                "name": "models/text-embedding-004",
                "displayName": "Text Embedding 004",
                "supportedGenerationMethods": ["embedContent"]
            }
        ]
    })
}

/// Listing with `total` models of which the first `generative` support generation
pub fn model_listing(total: usize, generative: usize) -> Value {
    let models: Vec<Value> = (0..total)
        .map(|i| {
            let methods = if i < generative {
                vec!["generateContent", "countTokens"]
            } else {
                vec!["embedContent"]
            };
            json!({
                "name": format!("models/test-model-{i}"),
                "supportedGenerationMethods": methods
            })
        })
        .collect();
    json!({ "models": models })
}

/// Typical generateContent reply
pub fn generate_content_reply(text: &str) -> Value {
    json!({
        "candidates": [
            {
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }
        ],
        "usageMetadata": { "promptTokenCount": 1, "candidatesTokenCount": 9 }
    })
}

pub const FORBIDDEN_BODY: &str = r#"{"error":"forbidden"}"#;
