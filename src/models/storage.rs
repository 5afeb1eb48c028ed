//! Storage element and storage area models.

use serde::{Deserialize, Serialize};

use super::{AttributeBag, Downtime};

/// A storage element owned by a site.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Storage {
    pub id: String,
    pub host: String,
    #[serde(default)]
    pub base_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_in_terabytes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime: Option<Vec<Downtime>>,
    #[serde(default)]
    pub areas: Vec<StorageArea>,
}

/// A storage area carved out of a storage element.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageArea {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Area classification, e.g. "rse" or "disk".
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime: Option<Vec<Downtime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_attributes: Option<AttributeBag>,
}
