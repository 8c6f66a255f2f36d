use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use tracing::info;

/// Schema bootstrap for the single cards table. Known contact fields are
/// typed columns; anything else the caller sends lives in `extra`.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS cards (
    id           UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name         TEXT NOT NULL,
    job_title    TEXT,
    company      TEXT NOT NULL,
    phone_number TEXT,
    email        TEXT,
    extra        JSONB NOT NULL DEFAULT '{}'::jsonb,
    created_at   TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX IF NOT EXISTS idx_cards_created_at ON cards (created_at DESC);
"#;

/// Creates a PostgreSQL connection pool and ensures the schema exists.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    pool.execute(SCHEMA).await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
