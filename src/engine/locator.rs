//! Resource location across the configuration tree.
//!
//! Every resource kind able to carry downtime implements one capability
//! trait; the locator and the downtime repository are written against that
//! trait, so a new resource kind means one new variant and one impl, not
//! edits to every traversal.

use serde::{Deserialize, Serialize};

use crate::models::{Compute, Downtime, Node, Service, Site, Storage, StorageArea};

/// Closed set of resource kinds that can own downtime windows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Site,
    Compute,
    Storage,
    StorageArea,
    LocalService,
    GlobalService,
}

impl ResourceKind {
    /// Fixed traversal order used by listings: sites first, then each owned
    /// collection in document-nesting order.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Site,
        ResourceKind::Compute,
        ResourceKind::Storage,
        ResourceKind::StorageArea,
        ResourceKind::LocalService,
        ResourceKind::GlobalService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Site => "site",
            ResourceKind::Compute => "compute",
            ResourceKind::Storage => "storage",
            ResourceKind::StorageArea => "storage_area",
            ResourceKind::LocalService => "local_service",
            ResourceKind::GlobalService => "global_service",
        }
    }
}

/// Capability shared by every resource that can own downtime windows.
pub trait DowntimeHost {
    fn resource_id(&self) -> &str;

    /// Human-readable name used in views and picklists.
    fn display_name(&self) -> String;

    /// Scheduled windows; empty when the sequence is absent.
    fn windows(&self) -> &[Downtime];

    /// The optional backing sequence itself. Lets callers mutate existing
    /// entries without materializing an empty sequence on hosts that never
    /// had one.
    fn windows_slot(&mut self) -> &mut Option<Vec<Downtime>>;

    /// Mutable access, creating the sequence on first use.
    fn windows_mut(&mut self) -> &mut Vec<Downtime> {
        self.windows_slot().get_or_insert_with(Vec::new)
    }
}

impl DowntimeHost for Site {
    fn resource_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn windows(&self) -> &[Downtime] {
        self.downtime.as_deref().unwrap_or_default()
    }

    fn windows_slot(&mut self) -> &mut Option<Vec<Downtime>> {
        &mut self.downtime
    }
}

impl DowntimeHost for Compute {
    fn resource_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.description.clone())
            .unwrap_or_default()
    }

    fn windows(&self) -> &[Downtime] {
        self.downtime.as_deref().unwrap_or_default()
    }

    fn windows_slot(&mut self) -> &mut Option<Vec<Downtime>> {
        &mut self.downtime
    }
}

impl DowntimeHost for Storage {
    fn resource_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.host.clone()
    }

    fn windows(&self) -> &[Downtime] {
        self.downtime.as_deref().unwrap_or_default()
    }

    fn windows_slot(&mut self) -> &mut Option<Vec<Downtime>> {
        &mut self.downtime
    }
}

impl DowntimeHost for StorageArea {
    fn resource_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("{} {}", self.name, self.kind)
    }

    fn windows(&self) -> &[Downtime] {
        self.downtime.as_deref().unwrap_or_default()
    }

    fn windows_slot(&mut self) -> &mut Option<Vec<Downtime>> {
        &mut self.downtime
    }
}

impl DowntimeHost for Service {
    fn resource_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.name.as_deref(), self.host.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        parts.join(" ")
    }

    fn windows(&self) -> &[Downtime] {
        self.downtime.as_deref().unwrap_or_default()
    }

    fn windows_slot(&mut self) -> &mut Option<Vec<Downtime>> {
        &mut self.downtime
    }
}

/// All hosts of one kind across the whole tree, in deterministic traversal
/// order: sites in document order; within each site compute before storages;
/// areas within each storage in order; services within each compute in order.
pub fn hosts(node: &Node, kind: ResourceKind) -> Vec<&dyn DowntimeHost> {
    match kind {
        ResourceKind::Site => node.sites.iter().map(as_host).collect(),
        ResourceKind::Compute => node
            .sites
            .iter()
            .flat_map(|site| site.compute.iter())
            .map(as_host)
            .collect(),
        ResourceKind::Storage => node
            .sites
            .iter()
            .flat_map(|site| site.storages.iter())
            .map(as_host)
            .collect(),
        ResourceKind::StorageArea => node
            .sites
            .iter()
            .flat_map(|site| site.storages.iter())
            .flat_map(|storage| storage.areas.iter())
            .map(as_host)
            .collect(),
        ResourceKind::LocalService => node
            .sites
            .iter()
            .flat_map(|site| site.compute.iter())
            .flat_map(|compute| compute.associated_local_services.iter())
            .map(as_host)
            .collect(),
        ResourceKind::GlobalService => node
            .sites
            .iter()
            .flat_map(|site| site.compute.iter())
            .flat_map(|compute| compute.associated_global_services.iter())
            .map(as_host)
            .collect(),
    }
}

/// Mutable counterpart of [`hosts`], same traversal order.
pub fn hosts_mut(node: &mut Node, kind: ResourceKind) -> Vec<&mut dyn DowntimeHost> {
    match kind {
        ResourceKind::Site => node.sites.iter_mut().map(as_host_mut).collect(),
        ResourceKind::Compute => node
            .sites
            .iter_mut()
            .flat_map(|site| site.compute.iter_mut())
            .map(as_host_mut)
            .collect(),
        ResourceKind::Storage => node
            .sites
            .iter_mut()
            .flat_map(|site| site.storages.iter_mut())
            .map(as_host_mut)
            .collect(),
        ResourceKind::StorageArea => node
            .sites
            .iter_mut()
            .flat_map(|site| site.storages.iter_mut())
            .flat_map(|storage| storage.areas.iter_mut())
            .map(as_host_mut)
            .collect(),
        ResourceKind::LocalService => node
            .sites
            .iter_mut()
            .flat_map(|site| site.compute.iter_mut())
            .flat_map(|compute| compute.associated_local_services.iter_mut())
            .map(as_host_mut)
            .collect(),
        ResourceKind::GlobalService => node
            .sites
            .iter_mut()
            .flat_map(|site| site.compute.iter_mut())
            .flat_map(|compute| compute.associated_global_services.iter_mut())
            .map(as_host_mut)
            .collect(),
    }
}

/// Hosts of one kind owned by a single site, in the same traversal order.
/// For `Site` the site itself is the only host.
pub fn site_hosts(site: &Site, kind: ResourceKind) -> Vec<&dyn DowntimeHost> {
    match kind {
        ResourceKind::Site => vec![site as &dyn DowntimeHost],
        ResourceKind::Compute => site.compute.iter().map(as_host).collect(),
        ResourceKind::Storage => site.storages.iter().map(as_host).collect(),
        ResourceKind::StorageArea => site
            .storages
            .iter()
            .flat_map(|storage| storage.areas.iter())
            .map(as_host)
            .collect(),
        ResourceKind::LocalService => site
            .compute
            .iter()
            .flat_map(|compute| compute.associated_local_services.iter())
            .map(as_host)
            .collect(),
        ResourceKind::GlobalService => site
            .compute
            .iter()
            .flat_map(|compute| compute.associated_global_services.iter())
            .map(as_host)
            .collect(),
    }
}

fn as_host<T: DowntimeHost>(resource: &T) -> &dyn DowntimeHost {
    resource
}

fn as_host_mut<T: DowntimeHost>(resource: &mut T) -> &mut dyn DowntimeHost {
    resource
}

/// Find the first resource of `kind` matching `ident`, searching the whole
/// tree regardless of any UI selection. Identifiers are unique within their
/// kind across the document, so the first exact match is the match.
///
/// Dual-key lookup: for `Site` only, `ident` may be either the site id or
/// the site name (downtime context at site level carries only the name).
/// This compatibility seam stays isolated to the site branch.
pub fn find_host<'a>(
    node: &'a Node,
    kind: ResourceKind,
    ident: &str,
) -> Option<&'a dyn DowntimeHost> {
    match kind {
        ResourceKind::Site => node
            .sites
            .iter()
            .find(|site| site.id == ident || site.name == ident)
            .map(as_host),
        _ => hosts(node, kind)
            .into_iter()
            .find(|host| host.resource_id() == ident),
    }
}

/// Mutable counterpart of [`find_host`].
pub fn find_host_mut<'a>(
    node: &'a mut Node,
    kind: ResourceKind,
    ident: &str,
) -> Option<&'a mut dyn DowntimeHost> {
    match kind {
        ResourceKind::Site => node
            .sites
            .iter_mut()
            .find(|site| site.id == ident || site.name == ident)
            .map(as_host_mut),
        _ => hosts_mut(node, kind)
            .into_iter()
            .find(|host| host.resource_id() == ident),
    }
}
