mod cards;
mod config;
mod db;
mod email;
mod errors;
mod extraction;
mod inference;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::inference::InferenceClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DigiCard API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL. An unreachable database at startup is fatal:
    // the service is useless without storage.
    let db = create_pool(&config.database_url).await?;

    // Initialize the inference client. A missing token is not fatal here;
    // inference endpoints report it per request instead.
    let inference = InferenceClient::new(config.replicate_api_token.clone());
    info!("Inference client initialized (model: {})", inference::MODEL);

    // Build app state
    let state = AppState { db, inference };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
