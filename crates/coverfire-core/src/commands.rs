//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Simulation control ---
    /// Start the encounter from the main menu.
    StartEncounter,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Return to the main menu after victory or defeat.
    ReturnToMenu,

    // --- Combat ---
    /// Continuous state of the cover key. Held = standing up and exposed.
    SetCoverHeld { held: bool },
    /// Fire the player's weapon at whatever is under the crosshair.
    Shoot { combatant_id: Option<u32> },
    /// Reload the player's weapon.
    Reload,
}
