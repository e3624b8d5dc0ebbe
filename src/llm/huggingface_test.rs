use super::*;
use crate::config::HttpTimeouts;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HuggingFaceClient {
    HuggingFaceClient::new(GenerationConfig {
        api_key: "hf_test".into(),
        model: "org/model".into(),
        base_url: server.uri(),
        timeouts: HttpTimeouts { request_secs: 5, connect_secs: 5 },
    })
    .unwrap()
}

#[tokio::test]
async fn sends_prompt_with_auth_and_decoding_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/org/model"))
        .and(header("authorization", "Bearer hf_test"))
        .and(body_partial_json(json!({
            "inputs": "Human: hi\nAssistant:",
            "parameters": { "max_new_tokens": 500, "return_full_text": false }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "generated_text": " Hello!" }])))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .generate("Human: hi\nAssistant:")
        .await
        .unwrap();
    assert_eq!(resp, json!([{ "generated_text": " Hello!" }]));
}

#[tokio::test]
async fn non_success_status_is_api_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("x").await.unwrap_err();
    assert!(matches!(err, LlmError::ApiResponse { status: 503, ref body } if body == "model loading"));
}

#[tokio::test]
async fn non_json_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("x").await.unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[tokio::test]
async fn unreachable_backend_is_request_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HuggingFaceClient::new(GenerationConfig {
        api_key: "hf_test".into(),
        model: "org/model".into(),
        base_url: format!("http://{addr}"),
        timeouts: HttpTimeouts { request_secs: 5, connect_secs: 5 },
    })
    .unwrap();

    let err = client.generate("x").await.unwrap_err();
    assert!(matches!(err, LlmError::ApiRequest(_)));
}

#[test]
fn parse_response_accepts_object_shape() {
    let value = parse_response(r#"{"generated_text":"ok"}"#).unwrap();
    assert_eq!(value["generated_text"], "ok");
}
