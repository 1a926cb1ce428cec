//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Every cover stop cleared.
    Victory,
    /// Player died or the encounter timer ran out.
    Defeat,
}

/// Combat progression controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressionState {
    /// Not started yet.
    #[default]
    Idle,
    /// Camera moving between two stops. Player forced out of cover.
    Transitioning,
    /// Parked at a stop, waiting for the wave to clear.
    InCombat,
    /// Ran past the last stop.
    Complete,
}

/// Enemy combatant lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatantState {
    #[default]
    Alive,
    /// Dead, hitbox off, waiting out the removal grace period.
    Dying,
    /// Despawned.
    Removed,
}

/// Enemy archetype category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyArchetype {
    /// Ground soldier with a rifle.
    #[default]
    Walker,
    /// Hovering drone, fragile but quick to fire.
    Flyer,
    /// Armoured gunner, slow and accurate.
    Heavy,
    /// Stage boss. Immune to direct fire.
    Boss,
    /// Destructible boss part. Never fires, respawns after a delay.
    WeakPoint,
}

/// Outcome of an enemy shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    Hit,
    Miss,
}

/// Why the encounter ended in defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefeatReason {
    PlayerKilled,
    TimeExpired,
}
