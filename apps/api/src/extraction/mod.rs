//! Extraction service — turns free-form text into the fixed five-field
//! contact structure via a single model call.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::inference::{TextInference, DEFAULT_MAX_NEW_TOKENS};

/// Structured contact fields extracted from free-form text.
/// Keys the model omits default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractionResult {
    pub name: String,
    pub job_title: String,
    pub company: String,
    pub phone_number: String,
    pub email: String,
}

/// Extracts contact fields from `raw_text`.
///
/// The model is instructed to reply with JSON only, but may still wrap the
/// object in markdown code fences; those are stripped before parsing. A reply
/// that is not valid JSON after stripping is a `MalformedModelOutput` — there
/// is no retry.
pub async fn extract(
    raw_text: &str,
    llm: &dyn TextInference,
) -> Result<ExtractionResult, AppError> {
    if raw_text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let prompt = prompts::extraction_prompt(raw_text);
    let reply = llm.invoke(&prompt, DEFAULT_MAX_NEW_TOKENS).await?;

    let cleaned = strip_code_fences(&reply);
    let result: ExtractionResult = serde_json::from_str(cleaned)?;

    Ok(result)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
