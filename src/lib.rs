//! Integer X-Y-Z positions on the battlescape grid.
//!
//! A [`Position`] addresses either a tile (coarse unit) or a voxel inside a
//! tile (fine unit). Positions are plain values: copy them, compare them and
//! combine them with the usual arithmetic operators.

pub mod codec;
pub mod error;
pub mod types;

// Re-export types for convenience
pub use error::{Axis, PositionError};
pub use types::{Position, Vector3i};
