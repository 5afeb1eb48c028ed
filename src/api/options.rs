//! Dependent picklist endpoint.

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use super::{session_not_found, success, ApiResult};
use crate::engine::locator::ResourceKind;
use crate::engine::options::{options, ResourceOption};
use crate::AppState;

/// Picklist query: the caller's current resource-type and site selection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsQuery {
    pub resource_type: ResourceKind,
    /// Selected site name; absent means "no site chosen yet".
    #[serde(default)]
    pub site: String,
}

/// GET /api/sessions/:id/options - Selectable resources for the current
/// (site, resource type) selection. Recomputed per request.
pub async fn resource_options(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<OptionsQuery>,
) -> ApiResult<Vec<ResourceOption>> {
    let document = state
        .sessions
        .document(&id)
        .await
        .ok_or_else(|| session_not_found(&id))?;
    success(options(query.resource_type, &document, &query.site))
}
