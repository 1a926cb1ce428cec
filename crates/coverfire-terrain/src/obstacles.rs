//! Axis-aligned obstacle boxes and segment intersection.

use coverfire_core::config::ObstacleConfig;
use coverfire_core::types::Position;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Position,
    pub max: Position,
}

impl Aabb {
    pub fn new(min: Position, max: Position) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Whether a sphere overlaps the box.
    pub fn intersects_sphere(&self, center: Position, radius: f64) -> bool {
        let closest = center.clamp(self.min, self.max);
        closest.distance_squared(center) <= radius * radius
    }

    /// Entry parameter of the segment `from + t * (to - from)`, `t` in [0, 1].
    ///
    /// Slab test. Returns `None` if the segment misses the box.
    pub fn segment_entry(&self, from: Position, to: Position) -> Option<f64> {
        let delta = to - from;
        let mut t_min: f64 = 0.0;
        let mut t_max: f64 = 1.0;

        for axis in 0..3 {
            let origin = from[axis];
            let d = delta[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < f64::EPSILON {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t0 = (lo - origin) * inv;
            let mut t1 = (hi - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        Some(t_min)
    }
}

impl From<&ObstacleConfig> for Aabb {
    fn from(config: &ObstacleConfig) -> Self {
        Aabb::new(config.min, config.max)
    }
}

/// All line-of-sight blockers in the level.
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    boxes: Vec<Aabb>,
}

impl ObstacleField {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    pub fn from_config(obstacles: &[ObstacleConfig]) -> Self {
        Self::new(obstacles.iter().map(Aabb::from).collect())
    }

    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Earliest segment parameter at which any obstacle is entered.
    pub fn first_hit(&self, from: Position, to: Position) -> Option<f64> {
        self.boxes
            .iter()
            .filter_map(|b| b.segment_entry(from, to))
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Whether a sphere overlaps any obstacle.
    pub fn blocks_sphere(&self, center: Position, radius: f64) -> bool {
        self.boxes
            .iter()
            .any(|b| b.intersects_sphere(center, radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn unit_box() -> Aabb {
        Aabb::new(DVec3::new(-1.0, 0.0, 4.0), DVec3::new(1.0, 1.0, 5.0))
    }

    #[test]
    fn test_new_orders_corners() {
        let b = Aabb::new(DVec3::new(1.0, 1.0, 5.0), DVec3::new(-1.0, 0.0, 4.0));
        assert_eq!(b, unit_box());
    }

    #[test]
    fn test_segment_through_box() {
        let entry = unit_box()
            .segment_entry(DVec3::new(0.0, 0.5, 0.0), DVec3::new(0.0, 0.5, 10.0))
            .unwrap();
        assert!((entry - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_segment_over_box() {
        let entry =
            unit_box().segment_entry(DVec3::new(0.0, 1.5, 0.0), DVec3::new(0.0, 1.5, 10.0));
        assert!(entry.is_none());
    }

    #[test]
    fn test_segment_stops_short() {
        let entry =
            unit_box().segment_entry(DVec3::new(0.0, 0.5, 0.0), DVec3::new(0.0, 0.5, 3.9));
        assert!(entry.is_none());
    }

    #[test]
    fn test_segment_starting_inside() {
        let entry = unit_box()
            .segment_entry(DVec3::new(0.0, 0.5, 4.5), DVec3::new(0.0, 0.5, 10.0))
            .unwrap();
        assert_eq!(entry, 0.0);
    }

    #[test]
    fn test_sphere_overlap() {
        let b = unit_box();
        assert!(b.intersects_sphere(DVec3::new(0.0, 1.2, 4.5), 0.3));
        assert!(!b.intersects_sphere(DVec3::new(0.0, 1.5, 4.5), 0.3));
    }

    #[test]
    fn test_first_hit_picks_nearest() {
        let field = ObstacleField::new(vec![
            Aabb::new(DVec3::new(-1.0, 0.0, 8.0), DVec3::new(1.0, 1.0, 9.0)),
            unit_box(),
        ]);
        let t = field
            .first_hit(DVec3::new(0.0, 0.5, 0.0), DVec3::new(0.0, 0.5, 10.0))
            .unwrap();
        assert!((t - 0.4).abs() < 1e-9);
    }
}
