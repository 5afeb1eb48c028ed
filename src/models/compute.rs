//! Compute element model.

use serde::{Deserialize, Serialize};

use super::{Downtime, Service};

/// A compute element owned by a site, carrying its associated services.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Compute {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_capabilities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middleware_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime: Option<Vec<Downtime>>,
    #[serde(default)]
    pub associated_local_services: Vec<Service>,
    #[serde(default)]
    pub associated_global_services: Vec<Service>,
}
