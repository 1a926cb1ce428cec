//! Scripted player used by the headless runner.
//!
//! Stands up to shoot the lowest-id targetable combatant while the magazine has
//! rounds, ducks while reloading, and tops off the magazine between stops.

use coverfire_core::commands::PlayerCommand;
use coverfire_core::enums::{CombatantState, GamePhase, ProgressionState};
use coverfire_core::state::GameStateSnapshot;

/// Ticks between two trigger pulls at 60 Hz.
const DEFAULT_SHOT_INTERVAL_TICKS: u32 = 6;

#[derive(Debug, Clone)]
pub struct Autopilot {
    standing: bool,
    shot_interval_ticks: u32,
    ticks_since_shot: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(DEFAULT_SHOT_INTERVAL_TICKS)
    }
}

impl Autopilot {
    pub fn new(shot_interval_ticks: u32) -> Self {
        Self {
            standing: false,
            shot_interval_ticks: shot_interval_ticks.max(1),
            ticks_since_shot: u32::MAX,
        }
    }

    /// Commands to send after seeing `snapshot`.
    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        if snapshot.phase != GamePhase::Active {
            return commands;
        }
        self.ticks_since_shot = self.ticks_since_shot.saturating_add(1);

        let weapon = &snapshot.weapon;
        let progression = snapshot.progression.state;
        let target = snapshot
            .combatants
            .iter()
            .filter(|c| c.state == CombatantState::Alive && c.targetable)
            .map(|c| c.id)
            .min();

        let can_fire = !weapon.reloading && weapon.ammo > 0;
        let stand = progression == ProgressionState::InCombat && target.is_some() && can_fire;
        if stand != self.standing {
            self.standing = stand;
            commands.push(PlayerCommand::SetCoverHeld { held: stand });
        }

        if progression == ProgressionState::Transitioning
            && !weapon.reloading
            && weapon.ammo < weapon.max_ammo
        {
            commands.push(PlayerCommand::Reload);
        }

        if stand && self.ticks_since_shot >= self.shot_interval_ticks {
            self.ticks_since_shot = 0;
            commands.push(PlayerCommand::Shoot {
                combatant_id: target,
            });
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverfire_core::enums::EnemyArchetype;
    use coverfire_core::state::CombatantView;
    use coverfire_core::types::Position;

    fn combat_snapshot(alive: &[u32]) -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot {
            phase: GamePhase::Active,
            ..Default::default()
        };
        snapshot.progression.state = ProgressionState::InCombat;
        snapshot.weapon.ammo = 12;
        snapshot.weapon.max_ammo = 12;
        snapshot.combatants = alive
            .iter()
            .map(|&id| CombatantView {
                id,
                archetype: EnemyArchetype::Walker,
                position: Position::ZERO,
                health: 100,
                max_health: 100,
                state: CombatantState::Alive,
                targetable: true,
                hit_chance: Some(0.0),
            })
            .collect();
        snapshot
    }

    #[test]
    fn test_stands_and_shoots_lowest_id() {
        let mut pilot = Autopilot::new(3);
        let commands = pilot.decide(&combat_snapshot(&[5, 2]));
        assert!(matches!(
            commands[0],
            PlayerCommand::SetCoverHeld { held: true }
        ));
        assert!(matches!(
            commands[1],
            PlayerCommand::Shoot {
                combatant_id: Some(2)
            }
        ));
    }

    #[test]
    fn test_skips_armoured_boss() {
        let mut pilot = Autopilot::new(1);
        let mut snapshot = combat_snapshot(&[3, 4]);
        snapshot.combatants[0].archetype = EnemyArchetype::Boss;
        snapshot.combatants[0].targetable = false;
        let commands = pilot.decide(&snapshot);
        assert!(commands.iter().any(|c| matches!(
            c,
            PlayerCommand::Shoot {
                combatant_id: Some(4)
            }
        )));
    }

    #[test]
    fn test_respects_shot_interval() {
        let mut pilot = Autopilot::new(3);
        let snapshot = combat_snapshot(&[1]);
        let shots: usize = (0..9)
            .map(|_| {
                pilot
                    .decide(&snapshot)
                    .iter()
                    .filter(|c| matches!(c, PlayerCommand::Shoot { .. }))
                    .count()
            })
            .sum();
        assert_eq!(shots, 3);
    }

    #[test]
    fn test_ducks_while_reloading() {
        let mut pilot = Autopilot::new(1);
        pilot.decide(&combat_snapshot(&[1]));

        let mut snapshot = combat_snapshot(&[1]);
        snapshot.weapon.reloading = true;
        let commands = pilot.decide(&snapshot);
        assert_eq!(commands.len(), 1);
        assert!(matches!(
            commands[0],
            PlayerCommand::SetCoverHeld { held: false }
        ));
    }

    #[test]
    fn test_reloads_between_stops() {
        let mut pilot = Autopilot::default();
        let mut snapshot = combat_snapshot(&[]);
        snapshot.progression.state = ProgressionState::Transitioning;
        snapshot.weapon.ammo = 4;
        let commands = pilot.decide(&snapshot);
        assert!(commands.iter().any(|c| matches!(c, PlayerCommand::Reload)));
        assert!(!commands
            .iter()
            .any(|c| matches!(c, PlayerCommand::Shoot { .. })));
    }

    #[test]
    fn test_idle_outside_active_phase() {
        let mut pilot = Autopilot::default();
        let mut snapshot = combat_snapshot(&[1]);
        snapshot.phase = GamePhase::Paused;
        assert!(pilot.decide(&snapshot).is_empty());
    }
}
