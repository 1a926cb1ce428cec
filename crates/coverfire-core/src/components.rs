//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Enemy hit-point pool and lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    /// Stable id used by the player's crosshair and the snapshot.
    pub id: u32,
    pub archetype: EnemyArchetype,
    pub health: i32,
    pub max_health: i32,
    pub state: CombatantState,
    /// Seconds left before a dying combatant is removed.
    pub removal_timer_secs: f64,
}

/// Whether player shots can land on the combatant.
///
/// Switched off on death, and never on for an armoured boss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub enabled: bool,
}

/// Destructible part of a boss. Destroying it damages the boss and starts
/// a respawn countdown instead of the removal grace period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeakPoint {
    /// Combatant id of the owning boss.
    pub boss_id: u32,
    pub respawn_delay_secs: f64,
    /// Seconds until a destroyed weak point comes back.
    pub respawn_timer_secs: f64,
}

/// Tags an entity as belonging to a spawned wave.
///
/// `generation` increases with every `spawn_wave` call, so remnants of a
/// superseded wave can be told apart from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveTag {
    pub wave_index: usize,
    pub generation: u64,
}

/// Ranged attack state for an enemy that shoots at the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shooter {
    /// Current hit chance percentage (0..=max_hit_chance).
    pub hit_chance: f64,
    /// Seconds until the next shot.
    pub fire_cooldown_secs: f64,
    /// Horizontal miss displacement bounds, computed once at spawn.
    pub miss_offset_min: f64,
    pub miss_offset_max: f64,
    /// Height of the muzzle above the entity position.
    pub muzzle_height: f64,
    /// Whether the player was visible on the last accuracy update.
    pub has_line_of_sight: bool,
}

/// Enemy projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Unit travel direction.
    pub direction: Position,
    pub speed: f64,
    pub radius: f64,
    pub damage: i32,
    /// The shooter rolled a hit for this shot.
    pub intended_hit: bool,
    pub age_secs: f64,
    pub lifetime_secs: f64,
    /// Set once the projectile has struck something and awaits cleanup.
    pub spent: bool,
}
