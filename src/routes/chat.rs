//! Chat routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::proxy::{ApiError, api_error};
use crate::assistant::SUGGESTIONS;
use crate::assistant::conversation::{Conversation, ConversationTurn};
use crate::search::SearchResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Turns held by the client. Absent means a fresh conversation.
    #[serde(default)]
    pub history: Option<Vec<ConversationTurn>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: ConversationTurn,
    pub history: Vec<ConversationTurn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_results: Option<Vec<SearchResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// `POST /api/chat` — route one message and return the grown conversation.
pub async fn chat(State(state): State<AppState>, Json(body): Json<ChatRequest>) -> Result<Json<ChatResponse>, ApiError> {
    let message = body.message.as_str();
    if message.trim().is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Message is required"));
    }

    // An absent or empty history starts a fresh conversation.
    let mut conversation = body
        .history
        .map(Conversation::from_turns)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(Conversation::new);
    let mut rng = StdRng::from_os_rng();
    let outcome = state.router.respond(message, &mut conversation, &mut rng).await;

    tracing::info!(
        category = %outcome.category,
        direct = outcome.category.is_direct(),
        provenance = ?outcome.reply.provenance,
        turns = conversation.len(),
        "chat: replied"
    );

    Ok(Json(ChatResponse {
        reply: outcome.reply,
        history: conversation.into_turns(),
        search_results: outcome.search_results,
        notice: outcome.notice,
    }))
}

/// `GET /api/chat/suggestions` — example prompts for an empty chat.
pub async fn suggestions() -> Json<Vec<&'static str>> {
    Json(SUGGESTIONS.to_vec())
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
