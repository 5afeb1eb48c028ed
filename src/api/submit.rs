//! Validation and submission endpoints.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{session_not_found, success, ApiResult};
use crate::engine::normalize::normalize;
use crate::errors::{AppError, AttributeError};
use crate::AppState;

/// Request body for a submission. The endpoint is an opaque pass-through
/// value; when absent the configured default is used.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Submission outcome: the upstream status code.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: u16,
}

/// POST /api/sessions/:id/validate - Normalize every attribute bag in the
/// live document and report the full error list. An empty list means valid.
pub async fn validate_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<AttributeError>> {
    let errors = state
        .sessions
        .with_document(&id, normalize)
        .await
        .ok_or_else(|| session_not_found(&id))?;
    success(errors)
}

/// POST /api/sessions/:id/submit - Hand the document to the external
/// persistence collaborator.
///
/// Normalization runs first and blocks submission on any attribute error.
/// The caller's Authorization header is forwarded untouched. A rejected
/// submission is surfaced verbatim and does NOT roll the document back; the
/// attempted edit stays visible for correction and resubmission.
pub async fn submit_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<SubmitRequest>,
) -> ApiResult<SubmitResponse> {
    let errors = state
        .sessions
        .with_document(&id, normalize)
        .await
        .ok_or_else(|| session_not_found(&id))?;
    if !errors.is_empty() {
        return Err(AppError::AttributeParse(errors));
    }

    let document = state
        .sessions
        .document(&id)
        .await
        .ok_or_else(|| session_not_found(&id))?;

    let url = request
        .url
        .or_else(|| state.config.submit_url.clone())
        .ok_or_else(|| {
            AppError::Validation("No submission endpoint provided or configured".to_string())
        })?;

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let status = state
        .submitter
        .submit(&url, authorization, &document)
        .await?;
    success(SubmitResponse { status })
}
