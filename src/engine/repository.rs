//! Downtime attach, list, and remove operations over one document.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::interval::{classify, parse_range, DowntimeStatus};
use super::locator::{find_host_mut, hosts, hosts_mut, ResourceKind};
use crate::errors::AppError;
use crate::models::{Downtime, Node};

/// Flattened, display-ready projection of one downtime window plus its
/// owning resource's identity and computed status.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DowntimeView {
    pub resource_type: ResourceKind,
    pub resource_id: String,
    pub resource_name: String,
    pub status: DowntimeStatus,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub id: String,
    #[serde(rename = "date_range")]
    pub date_range: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub reason: String,
}

/// Append a downtime entry to the resource identified by `kind` + `ident`.
///
/// The range is validated before anything is touched, so a malformed entry
/// or a missing resource leaves the tree unchanged and retry is safe. An
/// entry without an id gets one assigned. Returns the stored entry.
pub fn add_downtime(
    node: &mut Node,
    kind: ResourceKind,
    ident: &str,
    mut entry: Downtime,
) -> Result<Downtime, AppError> {
    parse_range(&entry.date_range)?;

    let host = find_host_mut(node, kind, ident).ok_or_else(|| {
        AppError::ResourceNotFound(format!(
            "no {} with identifier {:?} in the document",
            kind.as_str(),
            ident
        ))
    })?;

    if entry.id.is_none() {
        entry.id = Some(Uuid::new_v4().to_string());
    }
    host.windows_mut().push(entry.clone());

    tracing::debug!(
        resource_type = kind.as_str(),
        resource_id = host.resource_id(),
        "downtime scheduled"
    );
    Ok(entry)
}

/// Every downtime in the document as one flat, display-ready list.
///
/// Grouped by resource kind in the fixed traversal order, document order
/// within each kind; stable and total. A stored entry with an unparsable
/// range fails the whole listing rather than being coerced or skipped.
pub fn list_downtimes(node: &Node, now: DateTime<Utc>) -> Result<Vec<DowntimeView>, AppError> {
    let mut views = Vec::new();
    for kind in ResourceKind::ALL {
        for host in hosts(node, kind) {
            for entry in host.windows() {
                let (start, end) = parse_range(&entry.date_range)?;
                views.push(DowntimeView {
                    resource_type: kind,
                    resource_id: host.resource_id().to_string(),
                    resource_name: host.display_name(),
                    status: classify(start, end, now),
                    start,
                    end,
                    id: entry.id.clone().unwrap_or_default(),
                    date_range: entry.date_range.clone(),
                    kind: entry.kind.clone(),
                    reason: entry.reason.clone(),
                });
            }
        }
    }
    Ok(views)
}

/// Remove the downtime entry `downtime_id` from every resource of `kind`
/// whose id matches `resource_id`, leaving every other sequence and entry
/// untouched. A miss is a no-op, so deletion is idempotent.
pub fn remove_downtime(node: &mut Node, kind: ResourceKind, resource_id: &str, downtime_id: &str) {
    for host in hosts_mut(node, kind) {
        if host.resource_id() != resource_id {
            continue;
        }
        if let Some(windows) = host.windows_slot() {
            windows.retain(|entry| entry.id.as_deref() != Some(downtime_id));
        }
    }
}
