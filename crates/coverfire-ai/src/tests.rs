#[cfg(test)]
mod tests {
    use glam::DVec3;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use coverfire_core::constants::*;
    use coverfire_core::enums::{EnemyArchetype, ShotOutcome};

    use crate::accuracy::AccuracyTracker;
    use crate::ballistics::{
        is_hit, miss_offset, resolve_shot, solve_shot, BallisticsError, MissOffsetRange,
        TargetGeometry,
    };
    use crate::fsm::{evaluate, ShooterContext};
    use crate::profiles::get_profile;

    fn player_target() -> TargetGeometry {
        TargetGeometry {
            reference_point: DVec3::ZERO,
            collider_center: Some(DVec3::new(0.0, PLAYER_CENTER_HEIGHT, 0.0)),
        }
    }

    fn walker_range() -> MissOffsetRange {
        MissOffsetRange::for_profile(&get_profile(EnemyArchetype::Walker), PLAYER_COLLIDER_RADIUS)
    }

    // --- Accuracy ---

    #[test]
    fn test_accuracy_gains_while_exposed() {
        let mut tracker = AccuracyTracker::from_profile(&get_profile(EnemyArchetype::Walker));
        tracker.update(1.0, true);
        assert!((tracker.value() - WALKER_HIT_CHANCE_GAIN).abs() < 1e-9);
    }

    #[test]
    fn test_accuracy_decays_while_hidden() {
        let mut tracker =
            AccuracyTracker::from_profile(&get_profile(EnemyArchetype::Walker)).with_value(50.0);
        tracker.update(1.0, false);
        assert!((tracker.value() - (50.0 - WALKER_HIT_CHANCE_LOSS)).abs() < 1e-9);
    }

    #[test]
    fn test_accuracy_clamps_at_ceiling_and_floor() {
        let mut tracker = AccuracyTracker::new(10.0, 20.0, 90.0);
        for _ in 0..20 {
            tracker.update(1.0, true);
        }
        assert_eq!(tracker.value(), 90.0);
        for _ in 0..20 {
            tracker.update(1.0, false);
        }
        assert_eq!(tracker.value(), 0.0);
    }

    #[test]
    fn test_accuracy_ignores_bad_dt() {
        let mut tracker = AccuracyTracker::new(10.0, 20.0, 90.0).with_value(30.0);
        tracker.update(f64::NAN, true);
        tracker.update(-1.0, true);
        assert_eq!(tracker.value(), 30.0);
    }

    #[test]
    fn test_accuracy_ceiling_clamped_to_percent() {
        let tracker = AccuracyTracker::new(10.0, 10.0, 250.0);
        assert_eq!(tracker.max_hit_chance(), 100.0);
    }

    // --- Ballistics ---

    #[test]
    fn test_hit_rule_is_inclusive() {
        assert!(is_hit(50.0, 50.0));
        assert!(is_hit(50.0, 10.0));
        assert!(!is_hit(50.0, 50.1));
        assert!(!is_hit(0.0, 0.5));
        assert!(is_hit(100.0, 99.99));
    }

    #[test]
    fn test_miss_range_rejects_inverted_bounds() {
        assert_eq!(
            MissOffsetRange::new(2.0, 1.0),
            Err(BallisticsError::InvertedMissRange { min: 2.0, max: 1.0 })
        );
        assert!(MissOffsetRange::new(1.0, 1.0).is_ok());
        assert!(MissOffsetRange::new(-1.0, 1.0).is_err());
    }

    #[test]
    fn test_miss_range_from_geometry() {
        let range = walker_range();
        let expected_min = PLAYER_COLLIDER_RADIUS + WALKER_PROJECTILE_RADIUS + MISS_BUFFER;
        assert!((range.min() - expected_min).abs() < 1e-9);
        assert!((range.max() - expected_min * MISS_RANGE_MULTIPLIER).abs() < 1e-9);
    }

    #[test]
    fn test_miss_range_floor() {
        let range = MissOffsetRange::from_geometry(0.0, 0.0, 0.0, 3.0);
        assert_eq!(range.min(), MISS_OFFSET_FLOOR);
        assert!(range.max() >= range.min());
    }

    #[test]
    fn test_miss_range_multiplier_below_one_collapses() {
        let range = MissOffsetRange::from_geometry(0.5, 0.1, 0.5, 0.2);
        assert_eq!(range.max(), range.min());
    }

    #[test]
    fn test_miss_offset_is_horizontal() {
        let offset = miss_offset(2.0, 1.2);
        assert_eq!(offset.y, 0.0);
        assert!((offset.length() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_hit_aims_at_collider_center() {
        let muzzle = DVec3::new(0.0, 1.5, 12.0);
        let target = player_target();
        let shot = resolve_shot(50.0, 10.0, 1.0, 0.0, muzzle, &target);
        assert_eq!(shot.outcome, ShotOutcome::Hit);
        assert_eq!(shot.aim_point, DVec3::new(0.0, PLAYER_CENTER_HEIGHT, 0.0));
        assert!((shot.direction.length() - 1.0).abs() < 1e-9);
        assert!(shot.direction.z < 0.0, "should fly toward the player");
    }

    #[test]
    fn test_miss_along_line_of_fire_can_cross_collider() {
        let muzzle = DVec3::new(0.0, 1.5, 12.0);
        let target = player_target();
        let center = target.aim_center();
        let shot = resolve_shot(0.0, 50.0, 1.0, std::f64::consts::FRAC_PI_2, muzzle, &target);
        assert_eq!(shot.outcome, ShotOutcome::Miss);
        // Aim point is off the collider, but the flight path runs through it.
        assert!(shot.aim_point.distance(center) > PLAYER_COLLIDER_RADIUS);
        let to_center = center - muzzle;
        let along = to_center.dot(shot.direction);
        let closest = (to_center - shot.direction * along).length();
        assert!(closest < PLAYER_COLLIDER_RADIUS, "closest approach {closest}");
    }

    #[test]
    fn test_missing_collider_falls_back_to_reference_point() {
        let target = TargetGeometry {
            reference_point: DVec3::new(1.0, 0.0, 0.0),
            collider_center: None,
        };
        let shot = resolve_shot(100.0, 0.0, 1.0, 0.0, DVec3::new(1.0, 0.0, 10.0), &target);
        assert_eq!(shot.aim_point, DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_accuracy_never_hits() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let muzzle = DVec3::new(3.0, 1.5, 12.0);
        let target = player_target();
        let range = walker_range();
        let hits = (0..100)
            .filter(|_| {
                solve_shot(&mut rng, 0.0, muzzle, &target, &range).outcome == ShotOutcome::Hit
            })
            .count();
        assert_eq!(hits, 0);
    }

    #[test]
    fn test_full_accuracy_always_hits() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let muzzle = DVec3::new(3.0, 1.5, 12.0);
        let target = player_target();
        let range = walker_range();
        let hits = (0..100)
            .filter(|_| {
                solve_shot(&mut rng, 100.0, muzzle, &target, &range).outcome == ShotOutcome::Hit
            })
            .count();
        assert_eq!(hits, 100);
    }

    #[test]
    fn test_solve_shot_deterministic_for_seed() {
        let target = player_target();
        let range = walker_range();
        let muzzle = DVec3::new(-3.0, 1.5, 12.0);
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(
                solve_shot(&mut a, 45.0, muzzle, &target, &range),
                solve_shot(&mut b, 45.0, muzzle, &target, &range)
            );
        }
    }

    // --- Profiles ---

    #[test]
    fn test_profiles_are_sane() {
        for archetype in [
            EnemyArchetype::Walker,
            EnemyArchetype::Flyer,
            EnemyArchetype::Heavy,
            EnemyArchetype::Boss,
        ] {
            let p = get_profile(archetype);
            assert!(p.max_health > 0, "{archetype:?} health");
            assert!(p.fire_rate > 0.0, "{archetype:?} fire rate");
            assert!(p.max_hit_chance > 0.0 && p.max_hit_chance <= 100.0);
            assert!(p.projectile_speed > 0.0);
        }
    }

    #[test]
    fn test_weak_point_never_fires() {
        let p = get_profile(EnemyArchetype::WeakPoint);
        assert_eq!(p.fire_rate, 0.0);
        assert!(p.fire_interval().is_infinite());
        assert!(p.max_health > 0);
    }

    #[test]
    fn test_walker_fire_interval() {
        let p = get_profile(EnemyArchetype::Walker);
        assert!((p.fire_interval() - 1.0 / WALKER_FIRE_RATE).abs() < 1e-9);
    }

    // --- Firing cycle ---

    #[test]
    fn test_shooter_fires_when_cooldown_elapses() {
        let profile = get_profile(EnemyArchetype::Walker);
        let update = evaluate(&ShooterContext {
            profile: &profile,
            hit_chance: 0.0,
            fire_cooldown_secs: 0.0,
            exposed: true,
            dt: DT,
        });
        assert!(update.fire);
        assert_eq!(update.fire_cooldown_secs, profile.fire_interval());
        assert!(update.hit_chance > 0.0, "accuracy updates before the shot");
    }

    #[test]
    fn test_shooter_waits_during_cooldown() {
        let profile = get_profile(EnemyArchetype::Walker);
        let update = evaluate(&ShooterContext {
            profile: &profile,
            hit_chance: 40.0,
            fire_cooldown_secs: 0.5,
            exposed: false,
            dt: 0.1,
        });
        assert!(!update.fire);
        assert!((update.fire_cooldown_secs - 0.4).abs() < 1e-9);
        assert!(update.hit_chance < 40.0);
    }

    #[test]
    fn test_shooter_cadence_over_one_second() {
        let profile = get_profile(EnemyArchetype::Walker);
        let mut hit_chance = 0.0;
        let mut cooldown = profile.fire_interval();
        let mut shots = 0;
        for _ in 0..(TICK_RATE * 3) {
            let update = evaluate(&ShooterContext {
                profile: &profile,
                hit_chance,
                fire_cooldown_secs: cooldown,
                exposed: true,
                dt: DT,
            });
            hit_chance = update.hit_chance;
            cooldown = update.fire_cooldown_secs;
            if update.fire {
                shots += 1;
            }
        }
        assert!((2..=4).contains(&shots), "expected ~3 shots, got {shots}");
    }

    proptest! {
        #[test]
        fn prop_accuracy_stays_in_range(
            gain in 0.0f64..100.0,
            loss in 0.0f64..100.0,
            max in 0.0f64..100.0,
            steps in prop::collection::vec((0.0f64..2.0, any::<bool>()), 0..200),
        ) {
            let mut tracker = AccuracyTracker::new(gain, loss, max);
            for (dt, exposed) in steps {
                let value = tracker.update(dt, exposed);
                prop_assert!(value >= 0.0);
                prop_assert!(value <= max);
            }
        }

        #[test]
        fn prop_miss_offset_within_range(
            seed in any::<u64>(),
            target_radius in 0.0f64..2.0,
            projectile_radius in 0.0f64..0.5,
            buffer in 0.0f64..1.0,
            multiplier in 1.0f64..5.0,
        ) {
            let range = MissOffsetRange::from_geometry(
                target_radius,
                projectile_radius,
                buffer,
                multiplier,
            );
            let target = player_target();
            let center = target.aim_center();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let shot = solve_shot(&mut rng, 0.0, DVec3::new(0.0, 1.5, 12.0), &target, &range);
            if shot.outcome == ShotOutcome::Miss {
                let offset = shot.aim_point - center;
                let horizontal = (offset.x * offset.x + offset.z * offset.z).sqrt();
                prop_assert!(offset.y.abs() < 1e-9);
                prop_assert!(horizontal >= range.min() - 1e-9);
                prop_assert!(horizontal <= range.max() + 1e-9);
            }
        }
    }
}
