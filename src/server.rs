// src/server.rs
// =============================================================================
// A small HTTP front end for the converter.
//
// Routes:
// - GET  /health   liveness probe, always 200
// - POST /convert  {"text": "..."} -> {"link": "..."} or {"error", "kind"}
// - POST /reply    {"text": "..."} -> {"text": "...", "styled": bool}
//
// /reply applies the same answer policy a chat bot uses, so a chat transport
// can forward inbound messages here and send back whatever comes out.
// =============================================================================

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::convert::{convert, reply, ConvertError, ErrorKind, Reply};
use crate::resolve::ContentFetcher;

#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<dyn ContentFetcher>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn ContentFetcher>) -> Self {
        Self { fetcher }
    }
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
struct LinkResponse {
    link: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    kind: ErrorKind,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/convert", post(convert_handler))
        .route("/reply", post(reply_handler))
        .with_state(state)
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "listening");
    axum::serve(listener, build_router(state)).await
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn convert_handler(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Response {
    match convert(&request.text, state.fetcher.as_ref()).await {
        Ok(link) => Json(LinkResponse {
            link: link.to_string(),
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(kind = ?e.kind(), error = %e, "conversion failed");
            error_response(&e)
        }
    }
}

async fn reply_handler(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Json<Reply> {
    Json(reply(&request.text, state.fetcher.as_ref()).await)
}

fn error_response(error: &ConvertError) -> Response {
    let kind = error.kind();
    let status = match kind {
        ErrorKind::UserInput => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Infrastructure => StatusCode::BAD_GATEWAY,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = ErrorResponse {
        error: error.user_message(),
        kind,
    };
    (status, Json(body)).into_response()
}
