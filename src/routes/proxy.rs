//! Upstream proxy routes.
//!
//! DESIGN
//! ======
//! Thin relays to the generation and search backends. Successful upstream
//! JSON is returned verbatim; failures become `{ "error": ... }` bodies with
//! a status chosen by the error-mapping functions below.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::llm::types::LlmError;
use crate::search::SearchError;
use crate::state::AppState;

/// Error response: status plus `{ "error": message }`.
pub type ApiError = (StatusCode, Json<Value>);

pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// `POST /api/generate` — relay a prompt to the hosted text-generation model.
pub async fn generate(State(state): State<AppState>, Json(body): Json<GenerateBody>) -> Result<Json<Value>, ApiError> {
    let prompt = body
        .prompt
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Prompt is required"))?;

    let Some(generator) = state.generator.as_ref() else {
        tracing::warn!("proxy: generate called without an API key");
        return Err(llm_error_response(&LlmError::MissingApiKey { var: crate::llm::config::API_KEY_VAR.into() }));
    };

    tracing::info!(prompt_len = prompt.len(), "proxy: generate");
    let value = generator.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, code = e.error_code(), "proxy: generation upstream failed");
        llm_error_response(&e)
    })?;
    Ok(Json(value))
}

/// `GET /api/search?q=` — relay a query to the search backend.
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Result<Json<Value>, ApiError> {
    let query = params
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Query parameter is required"))?;

    tracing::info!(query, "proxy: search");
    let value = state.search.query(&query).await.map_err(|e| {
        tracing::error!(error = %e, "proxy: search upstream failed");
        api_error(search_error_to_status(&e), "Failed to search")
    })?;
    Ok(Json(value))
}

fn llm_error_response(err: &LlmError) -> ApiError {
    let status = llm_error_to_status(err);
    let message = match err {
        LlmError::MissingApiKey { .. } => "API key is not configured".to_string(),
        LlmError::ApiResponse { .. } => {
            format!("Hugging Face API error: {}", status.canonical_reason().unwrap_or("unknown status"))
        }
        _ => "Failed to generate response".to_string(),
    };
    api_error(status, message)
}

pub(crate) fn llm_error_to_status(err: &LlmError) -> StatusCode {
    match err {
        LlmError::ApiResponse { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        LlmError::ConfigParse(_)
        | LlmError::MissingApiKey { .. }
        | LlmError::ApiRequest(_)
        | LlmError::ApiParse(_)
        | LlmError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn search_error_to_status(err: &SearchError) -> StatusCode {
    match err {
        SearchError::Request(_)
        | SearchError::Response { .. }
        | SearchError::Parse(_)
        | SearchError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
