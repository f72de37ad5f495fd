use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;

use crate::domain::{ChatRequest, ChatResponse};

use super::error::ApiError;
use super::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(root))
}

pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "BarangayAI Backend Running",
        "status": "active",
        "uptime_seconds": state.start_time.elapsed().as_secs(),
    }))
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let preview: String = request.message.chars().take(50).collect();
    info!("Chat request (context={}): {preview}", request.context);

    Ok(Json(state.answer_chat.execute(request).await))
}
