//! Free-form extension data attached to several resource kinds.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user-edited attribute bag.
///
/// The editing form delivers this as a JSON-encoded string; the normalizer
/// replaces it with the parsed structure before submission and never
/// re-stringifies it. Untagged so the wire shape stays exactly what the
/// producer sent. `Raw` is tried first so string values are never swallowed
/// by the structured variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AttributeBag {
    Raw(String),
    Parsed(Value),
}