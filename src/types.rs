pub mod position;

pub use position::{Position, Vector3i};
