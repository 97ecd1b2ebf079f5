//! Core descriptor types for the Flexline layout engine.
//!
//! This crate provides the input side of a layout pass:
//! - Enumerated flex properties (direction, wrapping, alignment)
//! - Item descriptors carrying intrinsic sizes and stretch factors
//! - Container configuration
//! - Descriptor validation errors

pub mod container;
pub mod errors;
pub mod item;
pub mod types;

pub use container::*;
pub use errors::*;
pub use item::*;
pub use types::*;
