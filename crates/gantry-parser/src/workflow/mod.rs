//! Workflow definition parsing module
//!
//! Decodes sections of a workflow definition document into the
//! canonical entity types from `gantry-core`.

mod volume;

// Re-export public types
pub use volume::VolumeParser;
