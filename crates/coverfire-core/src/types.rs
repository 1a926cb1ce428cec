//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D position in level space (meters). y = Up.
pub type Position = DVec3;

/// Simulation time tracking.
///
/// Ticks are driven by the host loop with a variable frame delta.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Linear interpolation between two scalars.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}
