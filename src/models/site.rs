//! Site model.

use serde::{Deserialize, Serialize};

use super::{AttributeBag, Compute, Downtime, Storage};

/// One site of the federated node. Site names are unique within a document
/// and double as lookup keys for site-level downtime context.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Site {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime: Option<Vec<Downtime>>,
    #[serde(default)]
    pub compute: Vec<Compute>,
    #[serde(default)]
    pub storages: Vec<Storage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_attributes: Option<AttributeBag>,
    #[serde(default)]
    pub is_force_disabled: bool,
}
