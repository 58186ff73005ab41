//! # Boxpack Core
//!
//! Geometry primitives and error types shared by the boxpack 3D bin
//! packing engine.
//!
//! ## Core components
//!
//! - [`Rotation`]: the six axis permutations of a box's extents
//! - [`volume`], [`boxes_overlap`], [`rect_overlap`]: pure functions
//!   over width/height/depth triples
//! - [`Error`], [`Result`]: the contract-violation error taxonomy
//!
//! All coordinates, extents and weights are non-negative `i64` values;
//! the overlap test is evaluated in exact integer arithmetic.
//!
//! ## Feature flags
//!
//! - `serde`: enable serialization/deserialization support

pub mod error;
pub mod geometry;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{boxes_overlap, rect_overlap, volume, Rotation, AXES};
