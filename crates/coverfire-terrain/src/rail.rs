//! Camera rail: a polyline parameterized 0..=1 by arc length.
//!
//! Cover stops are rail parameters; the rail turns them into level-space
//! points so the player's collider can be placed for ballistics and LOS.

use coverfire_core::types::Position;

#[derive(Debug, Clone)]
pub struct RailPath {
    points: Vec<Position>,
    /// Arc length from the first point to each point.
    cumulative: Vec<f64>,
}

impl RailPath {
    /// Build a rail through `points`. Returns `None` when there are no points.
    pub fn new(points: Vec<Position>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for pair in points.windows(2) {
            total += pair[0].distance(pair[1]);
            cumulative.push(total);
        }

        Some(Self { points, cumulative })
    }

    /// Total arc length in meters.
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Level-space point at rail parameter `t` (clamped to 0..=1).
    pub fn point_at(&self, t: f64) -> Position {
        let length = self.length();
        if length <= 0.0 || self.points.len() == 1 {
            return self.points[0];
        }

        let target = t.clamp(0.0, 1.0) * length;
        // First segment whose end lies at or beyond the target distance.
        let seg = self
            .cumulative
            .iter()
            .skip(1)
            .position(|&d| d >= target)
            .unwrap_or(self.points.len() - 2);

        let seg_start = self.cumulative[seg];
        let seg_len = self.cumulative[seg + 1] - seg_start;
        if seg_len <= 0.0 {
            return self.points[seg];
        }
        let local = (target - seg_start) / seg_len;
        self.points[seg].lerp(self.points[seg + 1], local)
    }
}
