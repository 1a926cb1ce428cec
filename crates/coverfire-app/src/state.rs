//! State shared between the game loop thread and its driver.

use std::sync::{Arc, Mutex};

use coverfire_core::commands::PlayerCommand;
use coverfire_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot for synchronous polling. Updated after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = shared_snapshot();
        assert!(shared.lock().unwrap().is_none());
    }
}
