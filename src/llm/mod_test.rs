use super::*;
use crate::assistant::classify::{CREATOR_REPLY, GREETING_REPLY, PURPOSE_REPLY};
use crate::assistant::mock_bank::Topic;
use crate::state::test_helpers::MockGeneration;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

fn client(mock: &Arc<MockGeneration>) -> GenerationClient {
    GenerationClient::new(Some(mock.clone()))
}

// =========================================================================
// direct answers
// =========================================================================

#[tokio::test]
async fn direct_questions_skip_backend() {
    let mock = Arc::new(MockGeneration::new(vec![]));
    let gen_client = client(&mock);

    assert_eq!(gen_client.try_generate("hi", "").await.unwrap(), GREETING_REPLY);
    assert_eq!(gen_client.try_generate("Who designed you?", "").await.unwrap(), CREATOR_REPLY);
    assert_eq!(gen_client.try_generate("what is your purpose?", "").await.unwrap(), PURPOSE_REPLY);
    assert_eq!(mock.calls(), 0);
}

// =========================================================================
// backend path
// =========================================================================

#[tokio::test]
async fn prompt_includes_history_and_open_assistant_turn() {
    let mock = Arc::new(MockGeneration::new(vec![Ok(json!([{ "generated_text": " Compost it." }]))]));
    let reply = client(&mock)
        .try_generate("what do I do with peels", "Human: hi\nAssistant: hello")
        .await
        .unwrap();

    assert_eq!(reply, "Compost it.");
    assert_eq!(mock.prompts(), vec!["Human: hi\nAssistant: hello\nHuman: what do I do with peels\nAssistant:"]);
}

#[tokio::test]
async fn object_shape_response_is_accepted() {
    let mock = Arc::new(MockGeneration::new(vec![Ok(json!({ "generated_text": "Walk or bike." }))]));
    let reply = client(&mock).try_generate("how to commute greener", "").await.unwrap();
    assert_eq!(reply, "Walk or bike.");
}

#[tokio::test]
async fn output_keeps_first_assistant_segment() {
    let mock = Arc::new(MockGeneration::new(vec![Ok(json!([{
        "generated_text": "Assistant: Use a rain barrel.\nHuman: thanks!\nAssistant: You're welcome."
    }]))]));
    let reply = client(&mock).try_generate("save water in the garden", "").await.unwrap();
    assert_eq!(reply, "Use a rain barrel.");
}

#[tokio::test]
async fn leaked_turn_before_any_assistant_marker_is_collapsed() {
    // The Human..Assistant span becomes the first marker, so the text after it wins.
    let mock = Arc::new(MockGeneration::new(vec![Ok(json!([{
        "generated_text": " Use a rain barrel.\nHuman: thanks!\nAssistant: You're welcome."
    }]))]));
    let reply = client(&mock).try_generate("save water in the garden", "").await.unwrap();
    assert_eq!(reply, "You're welcome.");
}

#[tokio::test]
async fn blank_output_is_empty_error() {
    let mock = Arc::new(MockGeneration::new(vec![Ok(json!([{ "generated_text": "   \n" }]))]));
    let err = client(&mock).try_generate("tell me about plastic", "").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyOutput));
}

#[tokio::test]
async fn output_empty_after_sanitizing_is_empty_error() {
    let mock = Arc::new(MockGeneration::new(vec![Ok(json!([{ "generated_text": "Human: more please" }]))]));
    let err = client(&mock).try_generate("tell me about soil", "").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyOutput));
}

#[tokio::test]
async fn backend_error_propagates() {
    let mock = Arc::new(MockGeneration::new(vec![Err(LlmError::ApiResponse { status: 500, body: String::new() })]));
    let err = client(&mock).try_generate("tell me about oceans", "").await.unwrap_err();
    assert!(matches!(err, GenerationError::Backend(LlmError::ApiResponse { status: 500, .. })));
}

#[tokio::test]
async fn missing_backend_is_missing_api_key() {
    let gen_client = GenerationClient::new(None);
    assert!(!gen_client.is_configured());
    let err = gen_client.try_generate("tell me about oceans", "").await.unwrap_err();
    assert!(matches!(err, GenerationError::Backend(LlmError::MissingApiKey { .. })));
}

// =========================================================================
// generate (with fallback)
// =========================================================================

#[tokio::test]
async fn generate_falls_back_to_mock_bank_on_blank_output() {
    let mock = Arc::new(MockGeneration::new(vec![Ok(json!({ "generated_text": "" }))]));
    let mut rng = StdRng::seed_from_u64(1);
    let reply = client(&mock).generate("tell me about plastic", "", &mut rng).await;
    assert!(Topic::Plastic.responses().contains(&reply.as_str()));
}

#[tokio::test]
async fn generate_falls_back_without_backend() {
    let mut rng = StdRng::seed_from_u64(1);
    let reply = GenerationClient::new(None)
        .generate("how do I save energy", "", &mut rng)
        .await;
    assert!(Topic::Energy.responses().contains(&reply.as_str()));
}

#[test]
fn build_prompt_with_empty_history_starts_with_newline() {
    assert_eq!(build_prompt("", "hi there friend"), "\nHuman: hi there friend\nAssistant:");
}
