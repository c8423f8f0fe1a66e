//! Gantry Parser - YAML to configuration parser for the Gantry workflow engine
//!
//! This crate decodes workflow definition documents into the canonical
//! configuration types from `gantry-core`. Decoders consume pre-built
//! `serde_yaml` nodes (or raw text, for convenience) and normalize the
//! document's shorthand forms into one canonical shape each.

pub mod error;
pub mod workflow;
pub mod yaml_parser;

// Re-export main parser types
pub use error::{DecodeError, Result};
pub use workflow::VolumeParser;
pub use yaml_parser::YamlParser;
