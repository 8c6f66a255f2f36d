//! Inference client — the single point of entry for all hosted-model calls.
//!
//! All LLM interactions go through this module; no other module may call the
//! Replicate API directly.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const REPLICATE_API_URL: &str = "https://api.replicate.com/v1";
/// The model used for all inference calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "ibm-granite/granite-3.3-8b-instruct";
/// Output-length budget applied when a caller does not ask for a specific cap.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 256;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Inference credential is not configured (set REPLICATE_API_TOKEN)")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Inference API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model run failed: {0}")]
    Run(String),

    #[error("Model returned no output")]
    EmptyOutput,
}

#[derive(Debug, Serialize)]
struct PredictionRequest<'a> {
    input: PredictionInput<'a>,
}

#[derive(Debug, Serialize)]
struct PredictionInput<'a> {
    prompt: &'a str,
    max_new_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(default)]
    output: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: String,
}

/// Prompt-to-text completion seam. `InferenceClient` is the production
/// implementation; tests substitute a canned one.
#[async_trait]
pub trait TextInference: Send + Sync {
    async fn invoke(&self, prompt: &str, max_new_tokens: u32) -> Result<String, InferenceError>;
}

/// Client for Replicate's synchronous prediction endpoint.
/// No retry and no timeout beyond the transport default by design: a failed
/// or hung remote call surfaces on the request that made it.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    api_token: Option<String>,
    base_url: String,
}

impl InferenceClient {
    pub fn new(api_token: Option<String>) -> Self {
        Self::with_base_url(api_token, REPLICATE_API_URL.to_string())
    }

    /// Used by tests to point the client at a local mock server.
    pub fn with_base_url(api_token: Option<String>, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_token,
            base_url,
        }
    }

    /// Runs the model synchronously and returns its concatenated text output.
    async fn run(&self, prompt: &str, max_new_tokens: u32) -> Result<String, InferenceError> {
        let api_token = self
            .api_token
            .as_deref()
            .ok_or(InferenceError::MissingCredential)?;

        let url = format!("{}/models/{}/predictions", self.base_url, MODEL);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_token)
            .header("Prefer", "wait")
            .json(&PredictionRequest {
                input: PredictionInput {
                    prompt,
                    max_new_tokens,
                },
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.detail)
                .unwrap_or(body);
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let prediction: Prediction = response.json().await?;

        if let Some(message) = prediction.error {
            return Err(InferenceError::Run(message));
        }

        let text = collect_output(prediction.output).ok_or(InferenceError::EmptyOutput)?;

        debug!("Inference call succeeded: output_chars={}", text.len());

        Ok(text)
    }
}

#[async_trait]
impl TextInference for InferenceClient {
    async fn invoke(&self, prompt: &str, max_new_tokens: u32) -> Result<String, InferenceError> {
        self.run(prompt, max_new_tokens).await
    }
}

/// The model may return its output as an ordered sequence of text chunks;
/// join them into a single string. A bare string passes through unchanged.
/// Non-string chunks are skipped; an output with no text at all is reported
/// as `EmptyOutput` by the caller rather than passed along.
fn collect_output(output: Option<Value>) -> Option<String> {
    match output {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Array(chunks)) if !chunks.is_empty() => {
            let text: String = chunks
                .iter()
                .filter_map(|chunk| chunk.as_str())
                .collect();
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn prediction_path() -> String {
        format!("/models/{MODEL}/predictions")
    }

    #[test]
    fn test_collect_output_joins_chunks_in_order() {
        let output = Some(json!(["Hello", ", ", "world"]));
        assert_eq!(collect_output(output), Some("Hello, world".to_string()));
    }

    #[test]
    fn test_collect_output_passes_string_through() {
        let output = Some(json!("plain text"));
        assert_eq!(collect_output(output), Some("plain text".to_string()));
    }

    #[test]
    fn test_collect_output_rejects_null_and_empty() {
        assert_eq!(collect_output(None), None);
        assert_eq!(collect_output(Some(Value::Null)), None);
        assert_eq!(collect_output(Some(json!([]))), None);
    }

    #[test]
    fn test_collect_output_skips_non_string_chunks() {
        let mixed = Some(json!(["Hello", 42, " world"]));
        assert_eq!(collect_output(mixed), Some("Hello world".to_string()));

        // No text at all reads as no output.
        assert_eq!(collect_output(Some(json!([1, 2, 3]))), None);
    }

    #[tokio::test]
    async fn test_invoke_without_credential_fails_fast() {
        // No server at this address; the call must fail before any HTTP.
        let client = InferenceClient::with_base_url(None, "http://127.0.0.1:1".to_string());
        let err = client.invoke("hi", 8).await.unwrap_err();
        assert!(matches!(err, InferenceError::MissingCredential));
    }

    #[tokio::test]
    async fn test_invoke_concatenates_chunked_output() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(prediction_path())
                    .header("authorization", "Bearer test-token")
                    .header("prefer", "wait");
                then.status(200)
                    .json_body(json!({ "output": ["foo", "bar"], "status": "succeeded" }));
            })
            .await;

        let client =
            InferenceClient::with_base_url(Some("test-token".to_string()), server.base_url());
        let text = client.invoke("prompt", 256).await.unwrap();

        mock.assert_async().await;
        assert_eq!(text, "foobar");
    }

    #[tokio::test]
    async fn test_invoke_surfaces_api_error_detail() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(prediction_path());
                then.status(401)
                    .json_body(json!({ "detail": "Invalid token" }));
            })
            .await;

        let client = InferenceClient::with_base_url(Some("bad".to_string()), server.base_url());
        let err = client.invoke("prompt", 256).await.unwrap_err();

        match err {
            InferenceError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid token");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invoke_surfaces_prediction_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(prediction_path());
                then.status(200)
                    .json_body(json!({ "output": null, "error": "model crashed" }));
            })
            .await;

        let client = InferenceClient::with_base_url(Some("t".to_string()), server.base_url());
        let err = client.invoke("prompt", 256).await.unwrap_err();
        assert!(matches!(err, InferenceError::Run(message) if message == "model crashed"));
    }

    #[tokio::test]
    async fn test_invoke_rejects_missing_output() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(prediction_path());
                then.status(200).json_body(json!({ "status": "succeeded" }));
            })
            .await;

        let client = InferenceClient::with_base_url(Some("t".to_string()), server.base_url());
        let err = client.invoke("prompt", 256).await.unwrap_err();
        assert!(matches!(err, InferenceError::EmptyOutput));
    }
}
