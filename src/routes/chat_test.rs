use std::sync::Arc;

use super::*;
use crate::assistant::classify::GREETING_REPLY;
use crate::assistant::conversation::{Provenance, Role, WELCOME_MESSAGE};
use crate::assistant::router::FALLBACK_NOTICE;
use crate::routes::app;
use crate::state::test_helpers::{MockGeneration, MockSearch, test_app_state, test_app_state_with};
use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn post_chat(state: AppState, body: Value) -> (StatusCode, Value) {
    let response = app(state, None)
        .oneshot(
            Request::post("/api/chat")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn empty_message_is_bad_request() {
    let (status, body) = post_chat(test_app_state(), json!({ "message": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message is required");
}

#[tokio::test]
async fn missing_history_starts_fresh_conversation() {
    let (status, body) = post_chat(test_app_state(), json!({ "message": "hello" })).await;
    assert_eq!(status, StatusCode::OK);

    let response: ChatResponse = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(response.reply.text, GREETING_REPLY);
    assert_eq!(response.reply.provenance, Provenance::None);
    assert_eq!(response.history.len(), 3);
    assert_eq!(response.history[0].text, WELCOME_MESSAGE);
    assert_eq!(response.history[1].role, Role::User);
    assert!(body.get("search_results").is_none());
    assert!(body.get("notice").is_none());
}

#[tokio::test]
async fn message_is_stored_as_sent() {
    let (status, body) = post_chat(test_app_state(), json!({ "message": "  hello \n" })).await;
    assert_eq!(status, StatusCode::OK);

    let response: ChatResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.history[1].text, "  hello \n");
    assert_eq!(response.reply.text, GREETING_REPLY);
}

#[tokio::test]
async fn empty_history_starts_fresh_conversation() {
    let (_, body) = post_chat(test_app_state(), json!({ "message": "hi", "history": [] })).await;

    let response: ChatResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.history.len(), 3);
    assert_eq!(response.history[0].text, WELCOME_MESSAGE);
}

#[tokio::test]
async fn client_history_is_extended() {
    let history = json!([
        { "role": "assistant", "text": "Hi!", "provenance": "ai" },
        { "role": "user", "text": "hey" },
        { "role": "assistant", "text": "Hello again.", "provenance": "none" }
    ]);
    let (_, body) = post_chat(test_app_state(), json!({ "message": "who are you?", "history": history })).await;

    let response: ChatResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.history.len(), 5);
    assert_eq!(response.history[1].provenance, Provenance::None);
    assert_eq!(response.history[3].text, "who are you?");
}

#[tokio::test]
async fn search_reply_carries_results() {
    let search = Arc::new(MockSearch::new(vec![Ok(json!({
        "Heading": "Beach cleanup",
        "Abstract": "Cleanups run every Saturday.",
        "AbstractURL": "https://example.org/cleanup"
    }))]));
    let state = test_app_state_with(None, search);

    let (_, body) = post_chat(state, json!({ "message": "upcoming beach cleanups" })).await;
    assert_eq!(body["reply"]["provenance"], "search");
    assert_eq!(body["search_results"][0]["url"], "https://example.org/cleanup");
}

#[tokio::test]
async fn backend_failures_surface_notice() {
    let generation = Arc::new(MockGeneration::new(vec![]));
    let state = test_app_state_with(Some(generation), Arc::new(MockSearch::new(vec![])));

    let (status, body) = post_chat(state, json!({ "message": "how do I save energy at home" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"]["provenance"], "ai");
    assert_eq!(body["notice"], FALLBACK_NOTICE);
    assert!(!body["reply"]["text"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn suggestions_lists_five_prompts() {
    let response = app(test_app_state(), None)
        .oneshot(Request::get("/api/chat/suggestions").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let prompts: Vec<String> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(prompts.len(), 5);
    assert_eq!(prompts[0], "How can I reduce plastic waste?");
}

#[tokio::test]
async fn healthz_is_ok() {
    let response = app(test_app_state(), None)
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
