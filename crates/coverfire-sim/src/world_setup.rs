//! Entity spawn factories for combatants and projectiles.

use hecs::{Entity, World};

use coverfire_ai::ballistics::{MissOffsetRange, ShotSolution};
use coverfire_ai::profiles::{get_profile, EnemyProfile};
use coverfire_core::components::*;
use coverfire_core::config::BossConfig;
use coverfire_core::constants::*;
use coverfire_core::enums::*;
use coverfire_core::types::Position;

/// Spawn a combatant at full health, ready to fire on the first tick.
pub fn spawn_combatant(
    world: &mut World,
    id: u32,
    archetype: EnemyArchetype,
    position: Position,
    tag: WaveTag,
    player_radius: f64,
) -> Entity {
    let profile = get_profile(archetype);

    world.spawn((
        position,
        fresh_combatant(id, archetype, profile.max_health),
        Hitbox { enabled: true },
        tag,
        primed_shooter(&profile, player_radius),
    ))
}

/// Spawn an armoured boss with id `id` and its weak points with the ids
/// that follow it. The boss shoots but only its weak points take fire.
pub fn spawn_boss(
    world: &mut World,
    id: u32,
    config: &BossConfig,
    tag: WaveTag,
    player_radius: f64,
) -> Entity {
    let profile = get_profile(EnemyArchetype::Boss);
    let boss = world.spawn((
        config.position,
        fresh_combatant(id, EnemyArchetype::Boss, config.health),
        Hitbox { enabled: false },
        tag,
        primed_shooter(&profile, player_radius),
    ));

    for (offset, &point) in config.weak_points.iter().enumerate() {
        world.spawn((
            point,
            fresh_combatant(
                id + 1 + offset as u32,
                EnemyArchetype::WeakPoint,
                config.weak_point_health,
            ),
            Hitbox { enabled: true },
            tag,
            WeakPoint {
                boss_id: id,
                respawn_delay_secs: config.respawn_delay_secs,
                respawn_timer_secs: 0.0,
            },
        ));
    }
    boss
}

fn fresh_combatant(id: u32, archetype: EnemyArchetype, health: i32) -> Combatant {
    Combatant {
        id,
        archetype,
        health,
        max_health: health,
        state: CombatantState::Alive,
        removal_timer_secs: 0.0,
    }
}

/// Shooter state primed to fire on the first tick. Miss offsets are sized
/// against the player collider.
fn primed_shooter(profile: &EnemyProfile, player_radius: f64) -> Shooter {
    let miss = MissOffsetRange::for_profile(profile, player_radius);
    Shooter {
        hit_chance: 0.0,
        fire_cooldown_secs: 0.0,
        miss_offset_min: miss.min(),
        miss_offset_max: miss.max(),
        muzzle_height: profile.muzzle_height,
        has_line_of_sight: false,
    }
}

/// Spawn a projectile leaving `muzzle` along a resolved shot.
pub fn spawn_projectile(
    world: &mut World,
    muzzle: Position,
    shot: &ShotSolution,
    profile: &EnemyProfile,
) -> Entity {
    world.spawn((
        muzzle,
        Projectile {
            direction: shot.direction,
            speed: profile.projectile_speed,
            radius: profile.projectile_radius,
            damage: profile.projectile_damage,
            intended_hit: shot.outcome == ShotOutcome::Hit,
            age_secs: 0.0,
            lifetime_secs: PROJECTILE_LIFETIME_SECS,
            spent: false,
        },
    ))
}
