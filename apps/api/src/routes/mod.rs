pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::cards;
use crate::email;
use crate::extraction;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Inference endpoints
        .route(
            "/api/process-text",
            post(extraction::handlers::handle_process_text),
        )
        .route(
            "/api/generate-email",
            post(email::handlers::handle_generate_email),
        )
        // Card CRUD
        .route(
            "/api/cards",
            get(cards::handlers::handle_list_cards).post(cards::handlers::handle_create_card),
        )
        .route(
            "/api/cards/:id",
            put(cards::handlers::handle_update_card).delete(cards::handlers::handle_delete_card),
        )
        .with_state(state)
}
