//! Email-draft service — generates a follow-up email draft for a card.
//! The draft is intended for human review; nothing is sent by this service.

pub mod handlers;
pub mod prompts;

use serde::Deserialize;

use crate::errors::AppError;
use crate::inference::{TextInference, DEFAULT_MAX_NEW_TOKENS};

/// Card fields the follow-up prompt draws on. The shape is deliberately
/// loose: beyond the presence of the card object itself, nothing is
/// validated, and missing fields fall back to empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FollowUpCard {
    pub name: String,
    pub job_title: Option<String>,
    pub company: String,
}

/// Drafts a follow-up email for the given card.
/// Returns the model's raw text unprocessed — no parsing, no stripping.
pub async fn draft_follow_up(
    card: &FollowUpCard,
    llm: &dyn TextInference,
) -> Result<String, AppError> {
    let prompt = prompts::follow_up_prompt(&card.name, card.job_title.as_deref(), &card.company);
    let draft = llm.invoke(&prompt, DEFAULT_MAX_NEW_TOKENS).await?;
    Ok(draft)
}
