//! Axum route handler for the text-extraction endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::{extract, ExtractionResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProcessTextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessTextResponse {
    pub data: ExtractionResult,
}

/// POST /api/process-text
///
/// Extracts contact fields from free-form text via the model.
pub async fn handle_process_text(
    State(state): State<AppState>,
    Json(request): Json<ProcessTextRequest>,
) -> Result<Json<ProcessTextResponse>, AppError> {
    let data = extract(&request.text, &state.inference).await?;
    Ok(Json(ProcessTextResponse { data }))
}
