//! Edit-session lifecycle endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::{session_not_found, success, ApiResult};
use crate::models::Node;
use crate::AppState;

/// Response for a freshly opened session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    pub document: Node,
}

/// POST /api/sessions - Open an edit session around a fetched document.
pub async fn open_session(
    State(state): State<AppState>,
    Json(document): Json<Node>,
) -> ApiResult<SessionResponse> {
    let session_id = state.sessions.open(document.clone()).await;
    success(SessionResponse {
        session_id,
        document,
    })
}

/// GET /api/sessions/:id - Current state of the session's document.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Node> {
    let document = state
        .sessions
        .document(&id)
        .await
        .ok_or_else(|| session_not_found(&id))?;
    success(document)
}

/// DELETE /api/sessions/:id - Discard the session. Idempotent.
pub async fn discard_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.sessions.discard(&id).await;
    success(())
}
