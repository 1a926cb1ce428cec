//! Game state snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub defeat_reason: Option<DefeatReason>,
    pub progression: ProgressionView,
    pub player: PlayerView,
    pub wave: WaveView,
    pub combatants: Vec<CombatantView>,
    pub projectiles: Vec<ProjectileView>,
    pub weapon: WeaponView,
    pub score: ScoreView,
    pub timer: TimerView,
    pub events: Vec<GameEvent>,
}

/// Camera progression along the cover stops.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressionView {
    pub state: ProgressionState,
    pub current_index: usize,
    /// Rail parameter of the camera.
    pub rail_position: f64,
    pub stop_count: usize,
}

/// Player status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub health: i32,
    pub max_health: i32,
    pub in_cover: bool,
    pub control_enabled: bool,
    pub invulnerable: bool,
    /// Collider center in level space.
    pub position: Position,
}

/// Current wave status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub wave_index: Option<usize>,
    pub enemies_alive: u32,
    pub cleared: bool,
}

/// A combatant on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantView {
    pub id: u32,
    pub archetype: EnemyArchetype,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub state: CombatantState,
    /// Player shots can land. False for an armoured boss and the dead.
    pub targetable: bool,
    /// Current hit chance percentage, if the combatant shoots.
    pub hit_chance: Option<f64>,
}

/// An enemy projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub direction: Position,
    /// Drives the red warning tint on the client.
    pub intended_hit: bool,
}

/// Player weapon status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub ammo: u32,
    pub max_ammo: u32,
    pub reloading: bool,
}

/// Running score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    /// Hit percentage (0 - 100).
    pub accuracy: f64,
}

/// Encounter clock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimerView {
    pub remaining_secs: f64,
    pub expired: bool,
}
