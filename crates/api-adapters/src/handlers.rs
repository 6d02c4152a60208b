//! # api-adapters Handlers
//!
//! This module coordinates the flow between HTTP requests and the board
//! service. Handlers only translate shapes; every admission and lifecycle
//! decision lives in `services`.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use services::BoardService;

use crate::dto::{
    AdminMessageDto, AdminQuery, LatestMessageDto, RandomMessageDto, RandomQuery,
    SendMessageRequest,
};
use crate::error::ApiError;

/// State shared across all workers.
pub struct AppState {
    pub board: BoardService,
}

/// POST /messages: run the admission pipeline.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .board
        .post_message(req.text.as_deref(), req.sender.as_deref(), req.ip.as_deref())
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /messages: the most recent non-expired messages, newest first.
pub async fn latest_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LatestMessageDto>>, ApiError> {
    let messages = state.board.latest().await?;
    Ok(Json(messages.into_iter().map(LatestMessageDto::from).collect()))
}

/// GET /messages/random?ip=<addr>: one random message not posted by the caller.
pub async fn random_message(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RandomQuery>,
) -> Result<Response, ApiError> {
    let Some(ip) = query.ip.filter(|ip| !ip.is_empty()) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "IP required" })),
        )
            .into_response());
    };

    let picked = state.board.random_excluding(&ip).await?;
    Ok(match picked {
        Some(message) => Json(RandomMessageDto::from(message)).into_response(),
        None => Json(json!({ "message": null })).into_response(),
    })
}

/// GET /admin/export?secret=<secret>: unfiltered dump, stale rows included.
pub async fn admin_export(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AdminQuery>,
) -> Result<Json<Vec<AdminMessageDto>>, ApiError> {
    let secret = query.secret.unwrap_or_default();
    let rows = state.board.export_all(&secret).await?;
    Ok(Json(rows.into_iter().map(AdminMessageDto::from).collect()))
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
