use super::*;
use crate::config::HttpTimeouts;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DuckDuckGoClient {
    DuckDuckGoClient::new(SearchConfig {
        base_url: server.uri(),
        timeouts: HttpTimeouts { request_secs: 5, connect_secs: 5 },
    })
    .unwrap()
}

#[tokio::test]
async fn sends_instant_answer_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "environmental beach cleanups current information"))
        .and(query_param("format", "json"))
        .and(query_param("no_html", "1"))
        .and(query_param("skip_disambig", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"Abstract":"Cleanups happen monthly."}"#, "application/x-javascript"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server)
        .query("environmental beach cleanups current information")
        .await
        .unwrap();
    assert_eq!(value, json!({ "Abstract": "Cleanups happen monthly." }));
}

#[tokio::test]
async fn non_success_status_is_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client_for(&server).query("x").await.unwrap_err();
    assert!(matches!(err, SearchError::Response { status: 502, .. }));
}

#[tokio::test]
async fn non_json_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).query("x").await.unwrap_err();
    assert!(matches!(err, SearchError::Parse(_)));
}
