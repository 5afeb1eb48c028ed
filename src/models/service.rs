//! Service model, shared by compute-local and compute-global services.

use serde::{Deserialize, Serialize};

use super::{AttributeBag, Downtime};

/// A deployed service endpoint. Local and global services are structurally
/// identical; ownership distinguishes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime: Option<Vec<Downtime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_attributes: Option<AttributeBag>,
}
