//! Axum route handlers for the card CRUD API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::cards::repo::{self, CreateCardRequest, UpdateCardRequest};
use crate::errors::AppError;
use crate::models::card::CardRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CardListResponse {
    pub cards: Vec<CardRow>,
}

/// GET /api/cards
///
/// Returns all cards, newest first.
pub async fn handle_list_cards(
    State(state): State<AppState>,
) -> Result<Json<CardListResponse>, AppError> {
    let cards = repo::list_cards(&state.db).await?;
    Ok(Json(CardListResponse { cards }))
}

/// POST /api/cards
///
/// Creates a card. Name and company are required and non-empty; every other
/// field is stored as sent.
pub async fn handle_create_card(
    State(state): State<AppState>,
    Json(request): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<CardRow>), AppError> {
    validate_create(&request)?;

    let card = repo::create_card(&state.db, request).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// Presence guard for card creation: name and company must be non-empty.
/// Runs before any database I/O, so a rejected payload persists nothing.
fn validate_create(request: &CreateCardRequest) -> Result<(), AppError> {
    if request.name.trim().is_empty() || request.company.trim().is_empty() {
        return Err(AppError::Validation(
            "name and company cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// PUT /api/cards/:id
///
/// Merges the given fields into an existing card. The identifier in the
/// payload, if any, is ignored.
pub async fn handle_update_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCardRequest>,
) -> Result<Json<CardRow>, AppError> {
    let card = repo::update_card(&state.db, id, request)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Card {id} not found")))?;

    Ok(Json(card))
}

/// DELETE /api/cards/:id
pub async fn handle_delete_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = repo::delete_card(&state.db, id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Card {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_request(body: serde_json::Value) -> CreateCardRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_validate_create_accepts_name_and_company() {
        let req = create_request(json!({ "name": "Jane Doe", "company": "Acme Corp" }));
        assert!(validate_create(&req).is_ok());
    }

    #[test]
    fn test_validate_create_rejects_missing_name() {
        let req = create_request(json!({ "company": "Acme Corp" }));
        let err = validate_create(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_create_rejects_missing_company() {
        let req = create_request(json!({ "name": "Jane Doe" }));
        let err = validate_create(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_create_rejects_whitespace_only_fields() {
        let req = create_request(json!({ "name": "   ", "company": "\t" }));
        let err = validate_create(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
