//! Shooter firing cycle.
//!
//! Pure function that advances one shooter's hit chance and fire cooldown
//! for a tick. The caller rolls the actual shot when `fire` is set.
//! No ECS dependency, operates on plain data.

use crate::accuracy::AccuracyTracker;
use crate::profiles::EnemyProfile;

/// Input to the firing cycle for a single shooter.
pub struct ShooterContext<'a> {
    pub profile: &'a EnemyProfile,
    pub hit_chance: f64,
    pub fire_cooldown_secs: f64,
    /// Line of sight to the player this tick.
    pub exposed: bool,
    pub dt: f64,
}

/// Output from the firing cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShooterUpdate {
    pub hit_chance: f64,
    pub fire_cooldown_secs: f64,
    pub fire: bool,
}

/// Evaluate one tick of the firing cycle. Accuracy updates before the shot.
pub fn evaluate(ctx: &ShooterContext) -> ShooterUpdate {
    let mut tracker = AccuracyTracker::from_profile(ctx.profile).with_value(ctx.hit_chance);
    let hit_chance = tracker.update(ctx.dt, ctx.exposed);

    let cooldown = ctx.fire_cooldown_secs - ctx.dt.max(0.0);
    if cooldown <= 0.0 {
        return ShooterUpdate {
            hit_chance,
            fire_cooldown_secs: ctx.profile.fire_interval(),
            fire: true,
        };
    }

    ShooterUpdate {
        hit_chance,
        fire_cooldown_secs: cooldown,
        fire: false,
    }
}
