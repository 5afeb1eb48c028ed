//! Dependent picklist for the downtime scheduling form.

use serde::Serialize;

use super::locator::{site_hosts, ResourceKind};
use crate::models::Node;

/// One selectable resource. Serialized as an array element so the picklist
/// keeps traversal order; a JSON map would sort its keys.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResourceOption {
    pub id: String,
    pub label: String,
}

/// Selectable resources of `kind` under the site named `site_name`.
///
/// An unknown or empty site name yields an empty list: it means "no site
/// chosen yet", not an error. The site and kind are explicit parameters and
/// the result is recomputed on every call, so the picklist can never lag
/// behind the caller's current selection.
pub fn options(kind: ResourceKind, node: &Node, site_name: &str) -> Vec<ResourceOption> {
    let Some(site) = node.sites.iter().find(|site| site.name == site_name) else {
        return Vec::new();
    };

    site_hosts(site, kind)
        .into_iter()
        .map(|host| ResourceOption {
            id: host.resource_id().to_string(),
            label: host.display_name(),
        })
        .collect()
}
