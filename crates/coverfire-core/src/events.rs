//! Events emitted by the simulation for audio, UI, and presentation feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Fire-and-forget notifications drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Camera started moving toward a stop.
    TransitionStarted { from_index: usize, to_index: usize },
    /// Camera reached a stop and combat begins.
    ArrivedAtStop { stop_index: usize },
    /// A wave of combatants was spawned.
    WaveSpawned { wave_index: usize, count: usize },
    /// Every combatant of the current wave has died.
    WaveCleared { wave_index: usize },
    /// A combatant's health reached zero.
    CombatantKilled { combatant_id: u32 },
    /// A dead combatant was despawned after its grace period.
    CombatantRemoved { combatant_id: u32 },
    /// A destroyed weak point took health off its boss.
    BossDamaged { boss_id: u32, health: i32 },
    /// A destroyed weak point grew back.
    WeakPointRespawned { combatant_id: u32 },
    /// An enemy fired a projectile.
    ShotFired {
        combatant_id: u32,
        outcome: ShotOutcome,
    },
    /// Damage landed on the player.
    PlayerDamaged { amount: i32, health: i32 },
    /// Player health reached zero.
    PlayerDied,
    /// The player fired. `hit` is true when a live combatant was struck.
    PlayerShot { hit: bool },
    ReloadStarted,
    ReloadFinished,
    /// Time added to the encounter clock.
    TimeBonus { secs: f64 },
    /// Encounter clock reached zero.
    TimeExpired,
    /// All stops cleared.
    EncounterComplete,
}
