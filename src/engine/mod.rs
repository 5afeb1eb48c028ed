//! The downtime synchronization engine.
//!
//! Pure, synchronous operations over one in-memory document: interval
//! parsing and classification, resource location, downtime attach/list/
//! remove, dependent picklist computation, and attribute-bag normalization.

pub mod interval;
pub mod locator;
pub mod normalize;
pub mod options;
pub mod repository;

#[cfg(test)]
pub(crate) mod testutil;
