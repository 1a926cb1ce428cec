//! Cleanup system: despawns removed combatants and spent projectiles.

use hecs::{Entity, World};

use coverfire_core::components::{Combatant, Projectile};
use coverfire_core::enums::CombatantState;

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, combatant) in world.query_mut::<&Combatant>() {
        if combatant.state == CombatantState::Removed {
            despawn_buffer.push(entity);
        }
    }

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.spent {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
