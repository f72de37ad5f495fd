//! Integration tests for the chat client against real HTTP endpoints.
//!
//! Each test stands up a small axum app on an ephemeral loopback port and
//! points an `HttpChatTransport` at it.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use barangai::{
    ChatClient, FallbackResponder, FixedReplySelector, HttpChatTransport, PendingAttachment,
    ReplySource, SeededReplySelector, SessionId, OFFLINE_NOTICE,
};

type Captured = Arc<Mutex<Vec<Value>>>;

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Endpoint that records each body and answers with `{"response": reply}`.
async fn echo_server(reply: &'static str) -> (SocketAddr, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let sink = captured.clone();
    let app = Router::new().route(
        "/chat",
        post(move |Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(body);
                Json(json!({ "response": reply, "ai_source": "test" }))
            }
        }),
    );
    (spawn(app).await, captured)
}

async fn failing_server(status: StatusCode) -> SocketAddr {
    let app = Router::new().route(
        "/chat",
        post(move || async move { (status, "upstream exploded") }),
    );
    spawn(app).await
}

async fn garbled_server() -> SocketAddr {
    let app = Router::new().route("/chat", post(|| async { "<html>not json</html>" }));
    spawn(app).await
}

/// An address nothing is listening on.
async fn closed_port() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn client_for(addr: SocketAddr) -> ChatClient {
    ChatClient::with_session(
        Arc::new(HttpChatTransport::new(format!("http://{addr}"))),
        Box::new(FixedReplySelector::new(0)),
        FallbackResponder::builtin(),
        SessionId::from_string("BRG-INTEG0001"),
    )
}

#[tokio::test]
async fn test_success_appends_one_assistant_turn() {
    let (addr, captured) = echo_server("Use =SUM(B2:B20) for the total.").await;
    let mut client = client_for(addr);
    client.attach(PendingAttachment::new("budget.xlsx", "application/vnd.ms-excel", 8192));

    let reply = client
        .send("How do I total the budget?", "spreadsheets")
        .await
        .expect("message should be sent");

    assert_eq!(reply.source, ReplySource::Server);
    let turns = client.turns();
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[2].content(), "Use =SUM(B2:B20) for the total.");
    assert!(client.pending_attachments().is_empty());

    let bodies = captured.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "message": "How do I total the budget?",
            "context": "spreadsheets",
            "session_id": "BRG-INTEG0001",
            "files": [{ "name": "budget.xlsx", "type": "application/vnd.ms-excel", "size": 8192 }]
        })
    );
}

#[tokio::test]
async fn test_body_has_no_files_key_without_attachments() {
    let (addr, captured) = echo_server("ok").await;
    let mut client = client_for(addr);

    client.send("hello", "general").await.unwrap();

    let bodies = captured.lock().unwrap();
    assert!(bodies[0].get("files").is_none());
}

#[tokio::test]
async fn test_http_500_gives_single_fallback_turn() {
    let addr = failing_server(StatusCode::INTERNAL_SERVER_ERROR).await;
    let mut client = client_for(addr);
    client.attach(PendingAttachment::new("notes.txt", "text/plain", 12));

    let reply = client.send("Need help", "documents").await.unwrap();

    assert_eq!(reply.source, ReplySource::Fallback);
    let turns = client.turns();
    assert_eq!(turns.len(), 3);
    assert!(turns.iter().all(|t| t.content() != OFFLINE_NOTICE));
    assert!(FallbackResponder::builtin()
        .candidates("documents")
        .contains(&reply.text));
    assert!(client.pending_attachments().is_empty());
}

#[tokio::test]
async fn test_malformed_body_gives_single_fallback_turn() {
    let addr = garbled_server().await;
    let mut client = client_for(addr);

    let reply = client.send("Need help", "internet").await.unwrap();

    assert_eq!(reply.source, ReplySource::Fallback);
    assert_eq!(client.turns().len(), 3);
}

#[tokio::test]
async fn test_unreachable_endpoint_adds_offline_notice() {
    let addr = closed_port().await;
    let mut client = client_for(addr);
    client.attach(PendingAttachment::new("photo.jpg", "image/jpeg", 2048));

    let reply = client.send("What is this form?", "unknown-topic").await.unwrap();

    assert_eq!(reply.source, ReplySource::Offline);
    let turns = client.turns();
    assert_eq!(turns.len(), 4);
    assert!(turns[2].is_assistant());
    assert_eq!(turns[3].content(), OFFLINE_NOTICE);
    assert!(FallbackResponder::builtin()
        .candidates("general")
        .contains(&reply.text));
    assert!(client.pending_attachments().is_empty());
    assert!(!client.is_sending());
}

#[tokio::test]
async fn test_documents_fallback_never_leaves_documents_set() {
    let addr = failing_server(StatusCode::BAD_GATEWAY).await;
    let mut client = ChatClient::with_session(
        Arc::new(HttpChatTransport::new(format!("http://{addr}"))),
        Box::new(SeededReplySelector::new(99)),
        FallbackResponder::builtin(),
        SessionId::from_string("BRG-INTEG0002"),
    );
    let documents = FallbackResponder::builtin().candidates("documents").to_vec();

    for i in 0..10 {
        let reply = client
            .send(&format!("question {i}"), "documents")
            .await
            .unwrap();
        assert!(documents.contains(&reply.text));
    }
}

#[tokio::test]
async fn test_empty_message_sends_nothing() {
    let (addr, captured) = echo_server("ok").await;
    let mut client = client_for(addr);

    assert!(client.send("    ", "general").await.is_none());

    assert_eq!(client.turns().len(), 1);
    assert!(captured.lock().unwrap().is_empty());
}
