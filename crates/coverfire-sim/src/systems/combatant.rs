//! Combatant damage and the post-death removal grace period.

use hecs::{Entity, World};
use tracing::debug;

use coverfire_core::components::{Combatant, Hitbox, WaveTag, WeakPoint};
use coverfire_core::constants::COMBATANT_REMOVAL_GRACE_SECS;
use coverfire_core::enums::CombatantState;
use coverfire_core::events::GameEvent;

/// Result of applying damage to one combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatantDamage {
    /// Already dead. No state change, no notification.
    Ignored,
    Damaged { health: i32 },
    /// Health reached zero on this call. Happens once per combatant.
    Killed,
}

/// Outcome of a player shot at a combatant id.
#[derive(Debug, Clone, Copy)]
pub struct DamageReport {
    pub entity: Entity,
    pub outcome: CombatantDamage,
    pub tag: WaveTag,
    /// The struck combatant is a boss weak point.
    pub weak_point: bool,
}

/// Apply a player shot. A disabled hitbox ignores the shot. The killing
/// blow disables the hitbox.
pub fn take_damage(
    combatant: &mut Combatant,
    hitbox: &mut Hitbox,
    amount: i32,
) -> CombatantDamage {
    if !hitbox.enabled {
        return CombatantDamage::Ignored;
    }
    let outcome = apply_damage(combatant, amount);
    if outcome == CombatantDamage::Killed {
        hitbox.enabled = false;
    }
    outcome
}

/// Apply `amount` (clamped to >= 0) to a combatant regardless of its
/// hitbox. The killing blow starts the removal grace timer.
pub fn apply_damage(combatant: &mut Combatant, amount: i32) -> CombatantDamage {
    if combatant.state != CombatantState::Alive || combatant.health <= 0 {
        return CombatantDamage::Ignored;
    }

    combatant.health -= amount.max(0);
    if combatant.health > 0 {
        return CombatantDamage::Damaged {
            health: combatant.health,
        };
    }

    combatant.state = CombatantState::Dying;
    combatant.removal_timer_secs = COMBATANT_REMOVAL_GRACE_SECS;
    CombatantDamage::Killed
}

/// Damage the combatant with `id`. Returns `None` if no such combatant exists.
pub fn damage_by_id(world: &mut World, id: u32, amount: i32) -> Option<DamageReport> {
    world
        .query_mut::<(&mut Combatant, &mut Hitbox, &WaveTag, Option<&WeakPoint>)>()
        .into_iter()
        .find(|(_, (combatant, _, _, _))| combatant.id == id)
        .map(|(entity, (combatant, hitbox, tag, weak_point))| DamageReport {
            entity,
            outcome: take_damage(combatant, hitbox, amount),
            tag: *tag,
            weak_point: weak_point.is_some(),
        })
}

/// Count down dying combatants and mark them removed once the grace
/// period ends. Cleanup despawns them. Weak points respawn instead.
pub fn run(world: &mut World, dt: f64, events: &mut Vec<GameEvent>) {
    for (_entity, (combatant, weak_point)) in
        world.query_mut::<(&mut Combatant, Option<&WeakPoint>)>()
    {
        if combatant.state != CombatantState::Dying || weak_point.is_some() {
            continue;
        }
        combatant.removal_timer_secs -= dt;
        if combatant.removal_timer_secs <= 0.0 {
            combatant.state = CombatantState::Removed;
            debug!(id = combatant.id, "combatant removed");
            events.push(GameEvent::CombatantRemoved {
                combatant_id: combatant.id,
            });
        }
    }
}
