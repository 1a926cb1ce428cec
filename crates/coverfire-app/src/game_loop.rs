//! Game loop thread: runs the simulation engine at the host frame rate and
//! streams snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via an `mpsc` channel. Snapshots go out on a second channel
//! and are stored in shared state for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::debug;

use coverfire_core::config::EncounterConfig;
use coverfire_core::constants::{DT, TICK_RATE};
use coverfire_core::state::GameStateSnapshot;
use coverfire_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Wall-clock duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// `speed` scales wall-clock pacing only; every tick still advances the
/// simulation by one nominal frame. Returns the command sender and the
/// thread handle.
pub fn spawn_game_loop(
    sim_config: SimConfig,
    encounter: EncounterConfig,
    speed: f64,
    latest_snapshot: SharedSnapshot,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("coverfire-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(sim_config, encounter);
            run_game_loop(engine, cmd_rx, &latest_snapshot, &snapshot_tx, speed);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
    snapshot_tx: &mpsc::Sender<GameStateSnapshot>,
    speed: f64,
) {
    let tick_duration = if speed > 0.001 {
        TICK_DURATION.div_f64(speed)
    } else {
        TICK_DURATION
    };
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    debug!("game loop shutdown requested");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick(DT);

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        // 4. Stream to the driver; stop once nobody listens
        if snapshot_tx.send(snapshot).is_err() {
            return;
        }

        // 5. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
