//! Projectile flight: move, then test player, barriers, overshoot, and age.

use hecs::World;

use coverfire_core::components::Projectile;
use coverfire_core::constants::PROJECTILE_PASSED_DOT;
use coverfire_core::types::Position;
use coverfire_terrain::ObstacleField;

/// Advance all live projectiles. Returns the damage of every projectile that
/// reached the player collider this tick. Spent projectiles are left for
/// cleanup.
pub fn run(
    world: &mut World,
    dt: f64,
    obstacles: &ObstacleField,
    player_center: Position,
    player_radius: f64,
) -> Vec<i32> {
    let mut hits = Vec::new();

    for (_entity, (pos, projectile)) in world.query_mut::<(&mut Position, &mut Projectile)>() {
        if projectile.spent {
            continue;
        }

        projectile.age_secs += dt;
        let from = *pos;
        let to = from + projectile.direction * projectile.speed * dt;
        *pos = to;

        let player_t = sphere_contact(from, to, player_center, player_radius + projectile.radius);
        let barrier_t = obstacles
            .first_hit(from, to)
            .or_else(|| obstacles.blocks_sphere(to, projectile.radius).then_some(1.0));

        match (player_t, barrier_t) {
            (Some(p), Some(b)) if b < p => projectile.spent = true,
            (Some(_), _) => {
                hits.push(projectile.damage);
                projectile.spent = true;
            }
            (None, Some(_)) => projectile.spent = true,
            (None, None) => {
                let passed = (player_center - to).dot(projectile.direction) < PROJECTILE_PASSED_DOT;
                if passed || projectile.age_secs >= projectile.lifetime_secs {
                    projectile.spent = true;
                }
            }
        }
    }

    hits
}

/// Parameter along `from..to` of the closest approach to `center`, if that
/// approach is within `radius`.
fn sphere_contact(from: Position, to: Position, center: Position, radius: f64) -> Option<f64> {
    let d = to - from;
    let len_sq = d.length_squared();
    let t = if len_sq > 0.0 {
        ((center - from).dot(d) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let closest = from + d * t;
    (closest.distance(center) <= radius).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn contact_through_sphere() {
        let from = DVec3::new(0.0, 0.0, 2.0);
        let t = sphere_contact(from, DVec3::new(0.0, 0.0, -2.0), DVec3::ZERO, 0.5);
        assert_eq!(t, Some(0.5));
    }

    #[test]
    fn no_contact_when_wide() {
        let from = DVec3::new(1.0, 0.0, 2.0);
        let t = sphere_contact(from, DVec3::new(1.0, 0.0, -2.0), DVec3::ZERO, 0.5);
        assert_eq!(t, None);
    }

    #[test]
    fn zero_length_segment_inside() {
        let p = DVec3::new(0.1, 0.0, 0.0);
        assert_eq!(sphere_contact(p, p, DVec3::ZERO, 0.5), Some(0.0));
    }
}
