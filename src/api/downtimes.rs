//! Downtime scheduling endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use super::{session_not_found, success, ApiResult};
use crate::engine::locator::ResourceKind;
use crate::engine::repository::{self, DowntimeView};
use crate::models::Downtime;
use crate::AppState;

/// Request body for scheduling a downtime window.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDowntimeRequest {
    pub resource_type: ResourceKind,
    /// Resource id; for site-level downtime the site name is also accepted.
    pub resource_id: String,
    pub downtime: Downtime,
}

/// Query parameters identifying the owning resource of a deletion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDowntimeQuery {
    pub resource_type: ResourceKind,
    pub resource_id: String,
}

/// GET /api/sessions/:id/downtimes - All downtimes, flattened and classified.
pub async fn list_downtimes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<DowntimeView>> {
    let document = state
        .sessions
        .document(&id)
        .await
        .ok_or_else(|| session_not_found(&id))?;
    let views = repository::list_downtimes(&document, Utc::now())?;
    success(views)
}

/// POST /api/sessions/:id/downtimes - Schedule a downtime window.
pub async fn add_downtime(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddDowntimeRequest>,
) -> ApiResult<Downtime> {
    let stored = state
        .sessions
        .with_document(&id, |document| {
            repository::add_downtime(
                document,
                request.resource_type,
                &request.resource_id,
                request.downtime,
            )
        })
        .await
        .ok_or_else(|| session_not_found(&id))??;
    success(stored)
}

/// DELETE /api/sessions/:id/downtimes/:downtime_id - Remove one downtime
/// entry. Idempotent; responds with the refreshed view list.
pub async fn remove_downtime(
    State(state): State<AppState>,
    Path((id, downtime_id)): Path<(String, String)>,
    Query(query): Query<RemoveDowntimeQuery>,
) -> ApiResult<Vec<DowntimeView>> {
    let views = state
        .sessions
        .with_document(&id, |document| {
            repository::remove_downtime(
                document,
                query.resource_type,
                &query.resource_id,
                &downtime_id,
            );
            repository::list_downtimes(document, Utc::now())
        })
        .await
        .ok_or_else(|| session_not_found(&id))??;
    success(views)
}
