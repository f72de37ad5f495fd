//! Integration tests for the backend routes.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use barangai::connector::server::{app_with_state, AppState};
use barangai::{
    AnswerChatUseCase, ChatClient, CompletionService, DomainError, FallbackResponder,
    FixedReplySelector, HttpChatTransport, InMemoryConversationRepository, KeywordReplyWriter,
    PromptMessage, ReplySource, SessionId,
};

struct CannedProvider(&'static str);

#[async_trait]
impl CompletionService for CannedProvider {
    fn source_name(&self) -> &str {
        "canned"
    }

    async fn complete(&self, _messages: &[PromptMessage]) -> Result<String, DomainError> {
        Ok(self.0.to_string())
    }
}

fn state_without_providers() -> AppState {
    AppState::new(AnswerChatUseCase::new(
        Arc::new(InMemoryConversationRepository::new()),
        Arc::new(KeywordReplyWriter::new()),
    ))
}

fn state_with_provider(reply: &'static str) -> AppState {
    AppState::new(
        AnswerChatUseCase::new(
            Arc::new(InMemoryConversationRepository::new()),
            Arc::new(KeywordReplyWriter::new()),
        )
        .with_provider(Arc::new(CannedProvider(reply))),
    )
}

async fn post_chat(state: AppState, body: &str) -> (StatusCode, Value) {
    let response = app_with_state(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
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
async fn test_root_reports_active() {
    let response = app_with_state(state_without_providers())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "active");
    assert_eq!(body["message"], "BarangayAI Backend Running");
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_chat_preflight_allows_any_origin() {
    let response = app_with_state(state_without_providers())
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/chat")
                .header("origin", "http://localhost:5500")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert!(headers.contains_key("access-control-allow-methods"));
    assert!(headers.contains_key("access-control-allow-headers"));
}

#[tokio::test]
async fn test_chat_response_carries_cors_header() {
    let response = app_with_state(state_with_provider("ok"))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header("origin", "http://localhost:5500")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"message":"hi"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_chat_uses_provider_reply() {
    let (status, body) = post_chat(
        state_with_provider("Dear Mayor, ..."),
        r#"{"message":"write a letter","context":"word","session_id":"BRG-1"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Dear Mayor, ...");
    assert_eq!(body["ai_source"], "canned");
    assert_eq!(body["context_used"], "word");
    assert_eq!(body["session_id"], "BRG-1");
}

#[tokio::test]
async fn test_chat_without_providers_uses_keyword_fallback() {
    let (status, body) = post_chat(
        state_without_providers(),
        &json!({
            "message": "How do I build a PC for the office?",
            "session_id": "BRG-2",
            "files": [{ "name": "quote.pdf", "type": "application/pdf", "size": 10 }]
        })
        .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ai_source"], "fallback");
    assert_eq!(body["context_used"], "general");
    assert!(body["response"].as_str().unwrap().contains("Building a PC"));
}

#[tokio::test]
async fn test_loose_file_metadata_is_accepted() {
    let (status, body) = post_chat(
        state_with_provider("Got it."),
        r#"{"message":"hi","files":[{"name":"a.txt","size":1.5},{"type":"image/png"}]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Got it.");
}

#[tokio::test]
async fn test_malformed_request_is_bad_request() {
    let (status, body) = post_chat(state_without_providers(), r#"{"context":"general"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_client_round_trip_through_backend() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = app_with_state(state_with_provider("Slides are ready."));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut client = ChatClient::with_session(
        Arc::new(HttpChatTransport::new(format!("http://{addr}/"))),
        Box::new(FixedReplySelector::new(0)),
        FallbackResponder::builtin(),
        SessionId::from_string("BRG-ROUNDTRIP"),
    );

    let reply = client
        .send("Make slides for the barangay assembly", "presentations")
        .await
        .unwrap();

    assert_eq!(reply.source, ReplySource::Server);
    assert_eq!(reply.text, "Slides are ready.");
    assert_eq!(client.turns().len(), 3);
}
