//! BarangAI backend HTTP server (Axum).
//!
//! Serves `POST /chat` for the chat client and a status document on `/`.
//! Every route accepts cross-origin requests from any origin so the browser
//! frontend can reach it as well.

pub mod error;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use anyhow::Result;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub use error::ApiError;
pub use state::AppState;

/// Build the application router with the given state.
pub fn app_with_state(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health_routes())
        .merge(routes::chat_routes())
        .with_state(state)
        .layer(cors)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("BarangAI backend listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app_with_state(state)).await?;
    Ok(())
}
