//! Archetype-specific combat profiles.
//!
//! Consolidates per-archetype parameters for spawning and the firing cycle.

use coverfire_core::enums::EnemyArchetype;

/// Combat profile for an enemy archetype.
#[derive(Debug, Clone, Copy)]
pub struct EnemyProfile {
    pub max_health: i32,
    /// Shots per second.
    pub fire_rate: f64,
    /// Projectile speed (m/s).
    pub projectile_speed: f64,
    /// Projectile collision radius (m).
    pub projectile_radius: f64,
    pub projectile_damage: i32,
    /// Hit chance points per second while the player is visible.
    pub hit_chance_gain_rate: f64,
    /// Hit chance points per second while the player is hidden.
    pub hit_chance_loss_rate: f64,
    /// Hit chance ceiling (percent).
    pub max_hit_chance: f64,
    /// Muzzle height above the spawn point (m).
    pub muzzle_height: f64,
    /// Extra clearance added to a guaranteed miss (m).
    pub miss_buffer: f64,
    /// Maximum miss distance as a multiple of the minimum.
    pub miss_range_multiplier: f64,
}

impl EnemyProfile {
    /// Seconds between two shots.
    pub fn fire_interval(&self) -> f64 {
        if self.fire_rate > 0.0 {
            1.0 / self.fire_rate
        } else {
            f64::INFINITY
        }
    }
}

/// Get the combat profile for a given archetype.
pub fn get_profile(archetype: EnemyArchetype) -> EnemyProfile {
    use coverfire_core::constants::*;

    let walker = EnemyProfile {
        max_health: WALKER_MAX_HEALTH,
        fire_rate: WALKER_FIRE_RATE,
        projectile_speed: WALKER_PROJECTILE_SPEED,
        projectile_radius: WALKER_PROJECTILE_RADIUS,
        projectile_damage: WALKER_PROJECTILE_DAMAGE,
        hit_chance_gain_rate: WALKER_HIT_CHANCE_GAIN,
        hit_chance_loss_rate: WALKER_HIT_CHANCE_LOSS,
        max_hit_chance: WALKER_MAX_HIT_CHANCE,
        muzzle_height: WALKER_MUZZLE_HEIGHT,
        miss_buffer: MISS_BUFFER,
        miss_range_multiplier: MISS_RANGE_MULTIPLIER,
    };

    match archetype {
        EnemyArchetype::Walker => walker,
        // Drones dip in and out: quick to aim, quick to lose the lock.
        EnemyArchetype::Flyer => EnemyProfile {
            max_health: 40,
            fire_rate: 1.5,
            projectile_speed: 7.0,
            hit_chance_gain_rate: 15.0,
            hit_chance_loss_rate: 30.0,
            max_hit_chance: 70.0,
            muzzle_height: 3.0,
            ..walker
        },
        EnemyArchetype::Heavy => EnemyProfile {
            max_health: 200,
            fire_rate: 0.5,
            projectile_speed: 4.0,
            projectile_radius: 0.2,
            projectile_damage: 25,
            hit_chance_gain_rate: 8.0,
            hit_chance_loss_rate: 10.0,
            max_hit_chance: 95.0,
            ..walker
        },
        // Armoured core. Only weak-point destructions hurt it.
        EnemyArchetype::Boss => EnemyProfile {
            max_health: BOSS_MAX_HEALTH,
            fire_rate: 0.75,
            projectile_speed: 4.5,
            projectile_radius: 0.25,
            projectile_damage: 20,
            hit_chance_gain_rate: 6.0,
            max_hit_chance: 80.0,
            muzzle_height: 2.5,
            ..walker
        },
        EnemyArchetype::WeakPoint => EnemyProfile {
            max_health: WEAK_POINT_MAX_HEALTH,
            fire_rate: 0.0,
            projectile_damage: 0,
            max_hit_chance: 0.0,
            ..walker
        },
    }
}
