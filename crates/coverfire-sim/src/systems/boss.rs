//! Boss stage: weak points that feed damage into an armoured boss and grow
//! back after a delay.
//!
//! The boss itself never takes player fire. Every destroyed weak point
//! takes `WEAK_POINT_BOSS_DAMAGE` off the boss, and the boss's death retires
//! its remaining weak points.

use hecs::{Entity, World};
use tracing::{debug, info};

use coverfire_core::components::{Combatant, Hitbox, WaveTag, WeakPoint};
use coverfire_core::constants::WEAK_POINT_BOSS_DAMAGE;
use coverfire_core::enums::CombatantState;
use coverfire_core::events::GameEvent;

use crate::systems::combatant::{apply_damage, CombatantDamage};

/// Damage dealt to a boss by one weak-point destruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossStrike {
    pub boss_id: u32,
    pub outcome: CombatantDamage,
    pub tag: WaveTag,
}

/// Arm the respawn timer of a destroyed weak point and pass the damage on
/// to its boss. Returns `None` when the entity is not a weak point or the
/// boss is gone.
pub fn weak_point_destroyed(
    world: &mut World,
    weak_point: Entity,
    events: &mut Vec<GameEvent>,
) -> Option<BossStrike> {
    let boss_id = {
        let mut part = world.get::<&mut WeakPoint>(weak_point).ok()?;
        part.respawn_timer_secs = part.respawn_delay_secs;
        part.boss_id
    };

    let strike = world
        .query_mut::<(&mut Combatant, &WaveTag)>()
        .into_iter()
        .find(|(_, (combatant, _))| combatant.id == boss_id)
        .map(|(_, (combatant, tag))| BossStrike {
            boss_id,
            outcome: apply_damage(combatant, WEAK_POINT_BOSS_DAMAGE),
            tag: *tag,
        })?;

    match strike.outcome {
        CombatantDamage::Damaged { health } => {
            debug!(boss_id, health, "boss damaged");
            events.push(GameEvent::BossDamaged { boss_id, health });
        }
        CombatantDamage::Killed => {
            info!(boss_id, "boss defeated");
            events.push(GameEvent::BossDamaged { boss_id, health: 0 });
            retire_weak_points(world, boss_id, events);
        }
        CombatantDamage::Ignored => {}
    }
    Some(strike)
}

/// Count down destroyed weak points and restore them at full health once
/// their delay runs out.
pub fn run(world: &mut World, dt: f64, events: &mut Vec<GameEvent>) {
    for (_entity, (combatant, hitbox, part)) in
        world.query_mut::<(&mut Combatant, &mut Hitbox, &mut WeakPoint)>()
    {
        if combatant.state != CombatantState::Dying {
            continue;
        }
        part.respawn_timer_secs -= dt;
        if part.respawn_timer_secs <= 0.0 {
            combatant.health = combatant.max_health;
            combatant.state = CombatantState::Alive;
            combatant.removal_timer_secs = 0.0;
            hitbox.enabled = true;
            debug!(id = combatant.id, "weak point respawned");
            events.push(GameEvent::WeakPointRespawned {
                combatant_id: combatant.id,
            });
        }
    }
}

/// Remove every weak point of a defeated boss. Cleanup despawns them.
fn retire_weak_points(world: &mut World, boss_id: u32, events: &mut Vec<GameEvent>) {
    for (_entity, (combatant, hitbox, part)) in
        world.query_mut::<(&mut Combatant, &mut Hitbox, &WeakPoint)>()
    {
        if part.boss_id != boss_id || combatant.state == CombatantState::Removed {
            continue;
        }
        combatant.state = CombatantState::Removed;
        hitbox.enabled = false;
        events.push(GameEvent::CombatantRemoved {
            combatant_id: combatant.id,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverfire_core::config::BossConfig;
    use glam::DVec3;

    use crate::systems::combatant::damage_by_id;
    use crate::world_setup::spawn_boss;

    const TAG: WaveTag = WaveTag {
        wave_index: 0,
        generation: 1,
    };

    fn boss_world(health: i32, respawn_delay_secs: f64) -> World {
        let mut world = World::new();
        let config = BossConfig {
            position: DVec3::new(0.0, 0.0, 15.0),
            health,
            weak_points: vec![DVec3::new(-2.0, 2.0, 14.0), DVec3::new(2.0, 2.0, 14.0)],
            weak_point_health: 40,
            respawn_delay_secs,
        };
        spawn_boss(&mut world, 10, &config, TAG, 0.4);
        world
    }

    fn state_of(world: &World, id: u32) -> Option<(CombatantState, i32)> {
        world
            .query::<&Combatant>()
            .iter()
            .find(|(_, c)| c.id == id)
            .map(|(_, c)| (c.state, c.health))
    }

    #[test]
    fn boss_ignores_direct_fire() {
        let mut world = boss_world(3, 1.0);
        let report = damage_by_id(&mut world, 10, 1_000).unwrap();
        assert_eq!(report.outcome, CombatantDamage::Ignored);
        assert!(!report.weak_point);
        assert_eq!(state_of(&world, 10), Some((CombatantState::Alive, 3)));
    }

    #[test]
    fn weak_point_destroy_respawn_cycle() {
        let mut world = boss_world(3, 1.0);
        let mut events = Vec::new();

        let report = damage_by_id(&mut world, 11, 40).unwrap();
        assert_eq!(report.outcome, CombatantDamage::Killed);
        assert!(report.weak_point);

        let strike = weak_point_destroyed(&mut world, report.entity, &mut events).unwrap();
        assert_eq!(strike.boss_id, 10);
        assert_eq!(strike.outcome, CombatantDamage::Damaged { health: 2 });
        assert_eq!(events, vec![GameEvent::BossDamaged { boss_id: 10, health: 2 }]);

        // Down weak points cannot be shot again and do not go away.
        let again = damage_by_id(&mut world, 11, 40).unwrap();
        assert_eq!(again.outcome, CombatantDamage::Ignored);
        let mut removal_events = Vec::new();
        crate::systems::combatant::run(&mut world, 5.0, &mut removal_events);
        assert!(removal_events.is_empty());
        assert_eq!(state_of(&world, 11), Some((CombatantState::Dying, 0)));

        events.clear();
        run(&mut world, 0.5, &mut events);
        assert!(events.is_empty(), "respawned early");
        run(&mut world, 0.5, &mut events);
        assert_eq!(events, vec![GameEvent::WeakPointRespawned { combatant_id: 11 }]);
        assert_eq!(state_of(&world, 11), Some((CombatantState::Alive, 40)));

        let respawned = damage_by_id(&mut world, 11, 10).unwrap();
        assert_eq!(respawned.outcome, CombatantDamage::Damaged { health: 30 });
    }

    #[test]
    fn boss_death_retires_weak_points() {
        let mut world = boss_world(2, 10.0);
        let mut events = Vec::new();

        for id in [11, 12] {
            let report = damage_by_id(&mut world, id, 40).unwrap();
            weak_point_destroyed(&mut world, report.entity, &mut events).unwrap();
        }

        assert_eq!(state_of(&world, 10), Some((CombatantState::Dying, 0)));
        assert_eq!(state_of(&world, 11).map(|s| s.0), Some(CombatantState::Removed));
        assert_eq!(state_of(&world, 12).map(|s| s.0), Some(CombatantState::Removed));
        assert!(events.contains(&GameEvent::BossDamaged { boss_id: 10, health: 0 }));
        assert!(events.contains(&GameEvent::CombatantRemoved { combatant_id: 11 }));

        // Retired weak points never come back.
        events.clear();
        run(&mut world, 20.0, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn strike_on_dead_boss_is_ignored() {
        let mut world = boss_world(1, 0.0);
        let mut events = Vec::new();
        let first = damage_by_id(&mut world, 11, 40).unwrap();
        let strike = weak_point_destroyed(&mut world, first.entity, &mut events).unwrap();
        assert_eq!(strike.outcome, CombatantDamage::Killed);

        // Second weak point is retired with the boss: shots are ignored.
        let second = damage_by_id(&mut world, 12, 40).unwrap();
        assert_eq!(second.outcome, CombatantDamage::Ignored);
    }
}
