//! Level geometry for COVERFIRE.
//!
//! Obstacle volumes, line-of-sight queries between shooters and the
//! player, and the camera rail that cover stops are placed on.

pub use coverfire_core as core;

pub mod los;
pub mod obstacles;
pub mod rail;

// Re-export key types for convenience.
pub use los::has_line_of_sight;
pub use obstacles::{Aabb, ObstacleField};
pub use rail::RailPath;
