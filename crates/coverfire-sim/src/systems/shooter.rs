//! Enemy firing system.
//!
//! For every live shooter: refresh line of sight to the player, step the
//! firing cycle, and on a shot roll the outcome and spawn a projectile.

use glam::DVec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use coverfire_ai::ballistics::{solve_shot, MissOffsetRange, ShotSolution, TargetGeometry};
use coverfire_ai::fsm::{evaluate, ShooterContext};
use coverfire_ai::profiles::{get_profile, EnemyProfile};
use coverfire_core::components::{Combatant, Shooter};
use coverfire_core::enums::CombatantState;
use coverfire_core::events::GameEvent;
use coverfire_core::types::Position;
use coverfire_terrain::{has_line_of_sight, ObstacleField};

use crate::world_setup;

struct PendingShot {
    combatant_id: u32,
    muzzle: Position,
    solution: ShotSolution,
    profile: EnemyProfile,
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    obstacles: &ObstacleField,
    target: &TargetGeometry,
    dt: f64,
    events: &mut Vec<GameEvent>,
) {
    let aim = target.aim_center();
    let mut pending = Vec::new();

    for (_entity, (pos, combatant, shooter)) in
        world.query_mut::<(&Position, &Combatant, &mut Shooter)>()
    {
        if combatant.state != CombatantState::Alive {
            continue;
        }

        let profile = get_profile(combatant.archetype);
        let muzzle = *pos + DVec3::Y * shooter.muzzle_height;
        shooter.has_line_of_sight = has_line_of_sight(obstacles, &muzzle, &aim);

        let update = evaluate(&ShooterContext {
            profile: &profile,
            hit_chance: shooter.hit_chance,
            fire_cooldown_secs: shooter.fire_cooldown_secs,
            exposed: shooter.has_line_of_sight,
            dt,
        });
        shooter.hit_chance = update.hit_chance;
        shooter.fire_cooldown_secs = update.fire_cooldown_secs;
        if !update.fire {
            continue;
        }

        let range = match MissOffsetRange::new(shooter.miss_offset_min, shooter.miss_offset_max) {
            Ok(range) => range,
            Err(err) => {
                warn!(id = combatant.id, %err, "shot skipped");
                continue;
            }
        };

        pending.push(PendingShot {
            combatant_id: combatant.id,
            muzzle,
            solution: solve_shot(rng, shooter.hit_chance, muzzle, target, &range),
            profile,
        });
    }

    for shot in pending {
        world_setup::spawn_projectile(world, shot.muzzle, &shot.solution, &shot.profile);
        events.push(GameEvent::ShotFired {
            combatant_id: shot.combatant_id,
            outcome: shot.solution.outcome,
        });
    }
}
