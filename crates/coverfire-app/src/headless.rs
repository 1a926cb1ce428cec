//! Lockstep driver: one engine tick per autopilot decision, on the calling
//! thread. Deterministic for a given seed.

use serde::Serialize;
use tracing::info;

use coverfire_core::commands::PlayerCommand;
use coverfire_core::constants::DT;
use coverfire_core::enums::{DefeatReason, GamePhase};
use coverfire_core::state::GameStateSnapshot;
use coverfire_sim::SimulationEngine;

use crate::autopilot::Autopilot;

/// Outcome of a headless run, printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub phase: GamePhase,
    pub defeat_reason: Option<DefeatReason>,
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub stop_index: usize,
    pub stop_count: usize,
    pub player_health: i32,
    pub score: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub accuracy: f64,
    pub time_remaining_secs: f64,
}

impl RunSummary {
    pub fn from_snapshot(snapshot: &GameStateSnapshot) -> Self {
        Self {
            phase: snapshot.phase,
            defeat_reason: snapshot.defeat_reason,
            ticks: snapshot.time.tick,
            elapsed_secs: snapshot.time.elapsed_secs,
            stop_index: snapshot.progression.current_index,
            stop_count: snapshot.progression.stop_count,
            player_health: snapshot.player.health,
            score: snapshot.score.score,
            shots_fired: snapshot.score.shots_fired,
            shots_hit: snapshot.score.shots_hit,
            accuracy: snapshot.score.accuracy,
            time_remaining_secs: snapshot.timer.remaining_secs,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Victory | GamePhase::Defeat)
    }
}

/// Start the encounter and let the autopilot play until it ends or
/// `max_ticks` frames pass. Returns the last snapshot.
pub fn run_lockstep(
    engine: &mut SimulationEngine,
    autopilot: &mut Autopilot,
    max_ticks: u64,
) -> GameStateSnapshot {
    engine.queue_command(PlayerCommand::StartEncounter);
    let mut snapshot = engine.tick(DT);

    for _ in 1..max_ticks {
        if snapshot.phase != GamePhase::Active {
            break;
        }
        engine.queue_commands(autopilot.decide(&snapshot));
        snapshot = engine.tick(DT);
    }

    info!(phase = ?snapshot.phase, ticks = snapshot.time.tick, "run finished");
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverfire_core::config::EncounterConfig;
    use coverfire_sim::SimConfig;

    fn run(seed: u64) -> RunSummary {
        let mut engine = SimulationEngine::new(
            SimConfig {
                seed,
                ..Default::default()
            },
            EncounterConfig::default(),
        );
        let snapshot = run_lockstep(&mut engine, &mut Autopilot::default(), 60 * 120);
        RunSummary::from_snapshot(&snapshot)
    }

    #[test]
    fn test_autopilot_finishes_default_encounter() {
        let summary = run(42);
        assert!(summary.is_finished(), "run ended in {:?}", summary.phase);
        assert!(summary.shots_fired > 0);
        assert!(summary.shots_hit > 0);
    }

    #[test]
    fn test_lockstep_is_deterministic() {
        let a = serde_json::to_string(&run(9)).unwrap();
        let b = serde_json::to_string(&run(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_max_ticks_caps_run() {
        let mut engine = SimulationEngine::new(SimConfig::default(), EncounterConfig::default());
        let snapshot = run_lockstep(&mut engine, &mut Autopilot::default(), 10);
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert_eq!(snapshot.time.tick, 10);
    }
}
