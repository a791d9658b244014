//! HTTP surface: `POST /api/hypernetwork`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, warn};

use crate::error::{HnError, Result};
use crate::query::SearchQuery;
use crate::roster::{PersonView, SearchPipeline};

pub const SEARCH_PATH: &str = "/api/hypernetwork";

#[derive(Debug, Clone)]
pub struct ServerState {
    pub pipeline: SearchPipeline,
}

pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route(SEARCH_PATH, post(search_handler).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
}

pub async fn search_handler(State(state): State<ServerState>, body: Bytes) -> Response {
    match handle_search(&state, &body).await {
        Ok(people) => (StatusCode::OK, Json(people)).into_response(),
        Err(err) => error_response(&err),
    }
}

/// Parse `body` and run the search off the async workers.
pub async fn handle_search(state: &ServerState, body: &[u8]) -> Result<Vec<PersonView>> {
    let query = SearchQuery::from_json(body)?;
    let pipeline = state.pipeline.clone();
    tokio::task::spawn_blocking(move || pipeline.search(&query))
        .await
        .map_err(|err| HnError::Server(format!("search task failed: {err}")))?
}

fn error_response(err: &HnError) -> Response {
    let status = StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        warn!(status = status.as_u16(), "search failed: {err}");
    }
    (status, Json(err.to_structured())).into_response()
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found.")
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(state: ServerState, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("hn server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
