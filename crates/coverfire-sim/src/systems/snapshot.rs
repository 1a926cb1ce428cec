//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use coverfire_core::components::*;
use coverfire_core::enums::*;
use coverfire_core::events::GameEvent;
use coverfire_core::state::*;
use coverfire_core::types::{Position, SimTime};

use crate::encounter::Encounter;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    defeat_reason: Option<DefeatReason>,
    encounter: Option<&Encounter>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let mut snapshot = GameStateSnapshot {
        time: *time,
        phase,
        defeat_reason,
        combatants: build_combatants(world),
        projectiles: build_projectiles(world),
        events,
        ..Default::default()
    };

    if let Some(enc) = encounter {
        snapshot.progression = ProgressionView {
            state: enc.progression.state(),
            current_index: enc.progression.current_index(),
            rail_position: enc.progression.position(),
            stop_count: enc.progression.stop_count(),
        };
        snapshot.player = PlayerView {
            health: enc.player.health(),
            max_health: enc.player.max_health(),
            in_cover: enc.cover.is_in_cover(),
            control_enabled: enc.cover.control_enabled(),
            invulnerable: enc.player.is_invulnerable(),
            position: enc.player_center(),
        };
        snapshot.wave = WaveView {
            wave_index: enc.waves.current_wave(),
            enemies_alive: enc.waves.enemies_alive(),
            cleared: enc.waves.current_wave().is_some() && enc.waves.is_wave_cleared(),
        };
        snapshot.weapon = WeaponView {
            ammo: enc.weapon.ammo(),
            max_ammo: enc.weapon.max_ammo(),
            reloading: enc.weapon.is_reloading(),
        };
        snapshot.score = ScoreView {
            score: enc.weapon.score(),
            shots_fired: enc.weapon.shots_fired(),
            shots_hit: enc.weapon.shots_hit(),
            accuracy: enc.weapon.accuracy(),
        };
        snapshot.timer = TimerView {
            remaining_secs: enc.timer.remaining_secs(),
            expired: enc.timer.is_expired(),
        };
    }

    snapshot
}

/// Combatants sorted by id so output order is stable.
fn build_combatants(world: &World) -> Vec<CombatantView> {
    let mut combatants: Vec<CombatantView> = world
        .query::<(&Position, &Combatant, &Hitbox, Option<&Shooter>)>()
        .iter()
        .map(|(_, (pos, combatant, hitbox, shooter))| CombatantView {
            id: combatant.id,
            archetype: combatant.archetype,
            position: *pos,
            health: combatant.health.max(0),
            max_health: combatant.max_health,
            state: combatant.state,
            targetable: hitbox.enabled,
            hit_chance: shooter.map(|s| s.hit_chance),
        })
        .collect();
    combatants.sort_by_key(|c| c.id);
    combatants
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Position, &Projectile)>()
        .iter()
        .filter(|(_, (_, projectile))| !projectile.spent)
        .map(|(_, (pos, projectile))| ProjectileView {
            position: *pos,
            direction: projectile.direction,
            intended_hit: projectile.intended_hit,
        })
        .collect()
}
