//! Shot resolution: hit/miss roll, aim point, and travel direction.
//!
//! A hit aims dead center on the target collider. A miss aims at a point
//! displaced horizontally from the center, at a distance drawn from the miss
//! range and a uniformly random angle. The aim point itself lies outside the
//! collider. The flight path is not checked, so an offset that falls along
//! the line of fire can still pass through the target.

use std::f64::consts::TAU;

use glam::DVec3;
use rand::Rng;
use thiserror::Error;

use coverfire_core::constants::MISS_OFFSET_FLOOR;
use coverfire_core::enums::ShotOutcome;
use coverfire_core::types::Position;

use crate::profiles::EnemyProfile;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BallisticsError {
    #[error("miss offset max ({max}) is below min ({min})")]
    InvertedMissRange { min: f64, max: f64 },

    #[error("miss offsets must be finite and non-negative")]
    InvalidMissRange,
}

/// Horizontal miss displacement bounds. `max >= min` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissOffsetRange {
    min: f64,
    max: f64,
}

impl MissOffsetRange {
    pub fn new(min: f64, max: f64) -> Result<Self, BallisticsError> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 {
            return Err(BallisticsError::InvalidMissRange);
        }
        if max < min {
            return Err(BallisticsError::InvertedMissRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Derive the range from collider sizes: the closest miss clears the
    /// target and projectile radii plus `buffer`, the widest is `multiplier`
    /// times that. The minimum never drops below `MISS_OFFSET_FLOOR`.
    pub fn from_geometry(
        target_radius: f64,
        projectile_radius: f64,
        buffer: f64,
        multiplier: f64,
    ) -> Self {
        let min = (target_radius.max(0.0) + projectile_radius.max(0.0) + buffer.max(0.0))
            .max(MISS_OFFSET_FLOOR);
        let max = min * multiplier.max(1.0);
        Self { min, max }
    }

    pub fn for_profile(profile: &EnemyProfile, target_radius: f64) -> Self {
        Self::from_geometry(
            target_radius,
            profile.projectile_radius,
            profile.miss_buffer,
            profile.miss_range_multiplier,
        )
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Where the shooter can aim at the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetGeometry {
    /// Target origin, always available.
    pub reference_point: Position,
    /// Collider center, when the collider could be resolved.
    pub collider_center: Option<Position>,
}

impl TargetGeometry {
    /// Collider center, falling back to the reference point.
    pub fn aim_center(&self) -> Position {
        self.collider_center.unwrap_or(self.reference_point)
    }
}

/// Fully resolved enemy shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotSolution {
    pub outcome: ShotOutcome,
    pub aim_point: Position,
    /// Unit vector from the muzzle to the aim point.
    pub direction: Position,
}

/// A roll in `[0, 100)` hits when it does not exceed the hit chance.
pub fn is_hit(hit_chance: f64, roll: f64) -> bool {
    roll <= hit_chance
}

/// Horizontal displacement of `distance` at `angle` radians. Vertical is zero.
pub fn miss_offset(distance: f64, angle: f64) -> Position {
    DVec3::new(distance * angle.cos(), 0.0, distance * angle.sin())
}

/// Resolve a shot from a known roll, distance, and angle.
pub fn resolve_shot(
    hit_chance: f64,
    roll: f64,
    miss_distance: f64,
    miss_angle: f64,
    muzzle: Position,
    target: &TargetGeometry,
) -> ShotSolution {
    let center = target.aim_center();
    let (outcome, aim_point) = if is_hit(hit_chance, roll) {
        (ShotOutcome::Hit, center)
    } else {
        (
            ShotOutcome::Miss,
            center + miss_offset(miss_distance, miss_angle),
        )
    };

    ShotSolution {
        outcome,
        aim_point,
        direction: (aim_point - muzzle).normalize_or_zero(),
    }
}

/// Roll and resolve one shot.
pub fn solve_shot<R: Rng + ?Sized>(
    rng: &mut R,
    hit_chance: f64,
    muzzle: Position,
    target: &TargetGeometry,
    miss_range: &MissOffsetRange,
) -> ShotSolution {
    let roll = rng.gen_range(0.0..100.0);
    let miss_distance = rng.gen_range(miss_range.min()..=miss_range.max());
    let miss_angle = rng.gen_range(0.0..TAU);
    resolve_shot(hit_chance, roll, miss_distance, miss_angle, muzzle, target)
}
