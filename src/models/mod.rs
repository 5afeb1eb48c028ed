//! Data models for the node configuration document.
//!
//! Field names match the wire shape of the persisted document exactly; the
//! document is deserialized once per edit session and mutated in place.

mod attributes;
mod compute;
mod downtime;
mod node;
mod service;
mod site;
mod storage;

pub use attributes::*;
pub use compute::*;
pub use downtime::*;
pub use node::*;
pub use service::*;
pub use site::*;
pub use storage::*;
