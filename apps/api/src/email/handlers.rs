//! Axum route handler for the follow-up email endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::email::{draft_follow_up, FollowUpCard};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateEmailRequest {
    pub card: Option<FollowUpCard>,
}

#[derive(Debug, Serialize)]
pub struct GenerateEmailResponse {
    pub email: String,
}

/// POST /api/generate-email
///
/// Drafts a follow-up email for a card. The card shape is not validated
/// beyond its presence.
pub async fn handle_generate_email(
    State(state): State<AppState>,
    Json(request): Json<GenerateEmailRequest>,
) -> Result<Json<GenerateEmailResponse>, AppError> {
    let card = request
        .card
        .ok_or_else(|| AppError::Validation("card cannot be empty".to_string()))?;

    let email = draft_follow_up(&card, &state.inference).await?;

    Ok(Json(GenerateEmailResponse { email }))
}
