//! Workflow configuration entities
//!
//! Canonical in-memory representations of the entities a workflow
//! definition document declares. Each entity has exactly one canonical
//! shape here, no matter which shorthand the document used.

pub mod volume;

pub use volume::{Volume, Volumes, DEFAULT_VOLUME_DRIVER};
