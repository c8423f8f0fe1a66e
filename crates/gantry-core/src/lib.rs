//! Gantry Core - Core types for the Gantry workflow engine
//!
//! This crate provides the canonical configuration types shared across
//! the Gantry ecosystem. Workflow definition documents are decoded into
//! these types by the `gantry-parser` crate; everything downstream
//! (compilation, scheduling, execution) consumes them as-is.

pub mod workflow;

// Re-export commonly used types
pub use workflow::{Volume, Volumes};
