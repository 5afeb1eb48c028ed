//! Scheduled downtime window attached to exactly one owning resource.

use serde::{Deserialize, Serialize};

/// A single contiguous unavailability window.
///
/// `date_range` carries both timestamps in one string, separated by the
/// literal delimiter `" to "`. The delimiter is load-bearing and must be
/// preserved exactly by any producer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Downtime {
    /// Assigned on insert when the producer did not set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date_range: String,
    /// Category label, e.g. "Planned" or "Unplanned".
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text reason shown on the status board.
    #[serde(default)]
    pub reason: String,
}
