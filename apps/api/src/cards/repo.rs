//! Persistence layer for the cards table.
//!
//! Recognized contact fields map to typed columns; any other field in a
//! request payload is stored verbatim in the `extra` JSONB column. Updates
//! merge into the existing record rather than replacing it.

use serde::Deserialize;
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::card::CardRow;

/// Keys callers may not write: the identifier is store-assigned and
/// immutable, and the creation timestamp is set once at insert time.
const RESERVED_KEYS: &[&str] = &["id", "creationTimestamp"];

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub name: String,
    pub job_title: Option<String>,
    pub company: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateCardRequest {
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Returns all cards, newest creation timestamp first.
pub async fn list_cards(db: &PgPool) -> Result<Vec<CardRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM cards ORDER BY created_at DESC")
        .fetch_all(db)
        .await
}

/// Inserts a new card; the store assigns the identifier and creation
/// timestamp. Field presence is validated at the handler boundary.
pub async fn create_card(db: &PgPool, req: CreateCardRequest) -> Result<CardRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO cards (name, job_title, company, phone_number, email, extra)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(req.name)
    .bind(req.job_title)
    .bind(req.company)
    .bind(req.phone_number)
    .bind(req.email)
    .bind(Json(strip_reserved(req.extra)))
    .fetch_one(db)
    .await
}

/// Merges the given fields into an existing card and returns the updated
/// row, or `None` when no card matches `id`. Absent known fields keep their
/// stored value; extra fields are merged key-by-key into the JSONB column.
pub async fn update_card(
    db: &PgPool,
    id: Uuid,
    req: UpdateCardRequest,
) -> Result<Option<CardRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE cards SET
            name = COALESCE($2, name),
            job_title = COALESCE($3, job_title),
            company = COALESCE($4, company),
            phone_number = COALESCE($5, phone_number),
            email = COALESCE($6, email),
            extra = extra || $7
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(req.name)
    .bind(req.job_title)
    .bind(req.company)
    .bind(req.phone_number)
    .bind(req.email)
    .bind(Json(strip_reserved(req.extra)))
    .fetch_optional(db)
    .await
}

/// Deletes a card by id. Returns `false` when no card matched.
pub async fn delete_card(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cards WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}

fn strip_reserved(mut extra: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_KEYS {
        extra.remove(*key);
    }
    extra
}
