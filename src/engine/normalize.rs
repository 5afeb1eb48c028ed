//! Embedded attribute-bag normalization.
//!
//! The editing form delivers `other_attributes` as a JSON-encoded string.
//! Before a mutated document is considered final, every such field is parsed
//! into its structured form in place; fields that fail to parse stay as the
//! original string and are reported with a slash-joined path from the
//! document root.

use serde_json::Value;

use crate::errors::AttributeError;
use crate::models::{AttributeBag, Node};

/// Normalize every attribute bag in the document, depth first.
///
/// Returns the full list of accumulated errors; an empty list means the
/// document is fully valid. Already-structured bags are left alone, so the
/// walk is idempotent.
pub fn normalize(node: &mut Node) -> Vec<AttributeError> {
    let mut errors = Vec::new();

    for (s, site) in node.sites.iter_mut().enumerate() {
        let site_path = format!("sites/{}", s);
        normalize_bag(&mut site.other_attributes, &site_path, &mut errors);

        for (c, compute) in site.compute.iter_mut().enumerate() {
            for (i, service) in compute.associated_local_services.iter_mut().enumerate() {
                normalize_bag(
                    &mut service.other_attributes,
                    &format!("{}/compute/{}/associated_local_services/{}", site_path, c, i),
                    &mut errors,
                );
            }
            for (i, service) in compute.associated_global_services.iter_mut().enumerate() {
                normalize_bag(
                    &mut service.other_attributes,
                    &format!("{}/compute/{}/associated_global_services/{}", site_path, c, i),
                    &mut errors,
                );
            }
        }

        for (st, storage) in site.storages.iter_mut().enumerate() {
            for (a, area) in storage.areas.iter_mut().enumerate() {
                normalize_bag(
                    &mut area.other_attributes,
                    &format!("{}/storages/{}/areas/{}", site_path, st, a),
                    &mut errors,
                );
            }
        }
    }

    errors
}

/// Parse one raw bag in place. The empty string counts as `{}`; a parse
/// failure records the path and leaves the original string untouched.
fn normalize_bag(
    bag: &mut Option<AttributeBag>,
    parent_path: &str,
    errors: &mut Vec<AttributeError>,
) {
    if let Some(AttributeBag::Raw(raw)) = bag {
        let text = if raw.is_empty() { "{}" } else { raw.as_str() };
        match serde_json::from_str::<Value>(text) {
            Ok(value) => *bag = Some(AttributeBag::Parsed(value)),
            Err(err) => errors.push(AttributeError {
                uri: format!("{}/other_attributes", parent_path),
                message: err.to_string(),
            }),
        }
    }
}
