//! COVERFIRE command-line runner.
//!
//! Loads an encounter, lets the autopilot play it, and reports the outcome.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use coverfire_app::autopilot::Autopilot;
use coverfire_app::game_loop::spawn_game_loop;
use coverfire_app::headless::{run_lockstep, RunSummary};
use coverfire_app::state::{shared_snapshot, GameLoopCommand};
use coverfire_core::commands::PlayerCommand;
use coverfire_core::config::EncounterConfig;
use coverfire_core::enums::GamePhase;
use coverfire_core::state::GameStateSnapshot;
use coverfire_sim::{SimConfig, SimulationEngine};

/// Headless cover-shooter encounter runner
#[derive(Parser, Debug)]
#[command(name = "coverfire")]
#[command(about = "Play an encounter with the scripted autopilot and report the outcome")]
struct Args {
    /// Encounter TOML file (built-in level when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum frames before giving up
    #[arg(long, default_value_t = 60 * 300)]
    max_ticks: u64,

    /// Run on the paced game-loop thread instead of lockstep
    #[arg(long)]
    realtime: bool,

    /// Wall-clock speed multiplier for --realtime
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Frames between autopilot trigger pulls
    #[arg(long, default_value_t = 6)]
    shot_interval: u32,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coverfire=info")),
        )
        .init();

    let encounter = match &args.config {
        Some(path) => match EncounterConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                error!(path = %path.display(), %err, "failed to load encounter");
                return ExitCode::FAILURE;
            }
        },
        None => EncounterConfig::default(),
    };

    let sim_config = SimConfig {
        seed: args.seed,
        ..Default::default()
    };
    let mut autopilot = Autopilot::new(args.shot_interval);

    info!(seed = args.seed, realtime = args.realtime, "starting encounter");
    let snapshot = if args.realtime {
        match run_realtime(sim_config, encounter, &args, &mut autopilot) {
            Some(snapshot) => snapshot,
            None => return ExitCode::FAILURE,
        }
    } else {
        let mut engine = SimulationEngine::new(sim_config, encounter);
        run_lockstep(&mut engine, &mut autopilot, args.max_ticks)
    };

    let summary = RunSummary::from_snapshot(&snapshot);
    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(%err, "failed to serialize summary");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_summary(&summary);
    }

    if summary.phase == GamePhase::Victory {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

/// Drive the threaded game loop from this thread, one autopilot decision
/// per received snapshot.
fn run_realtime(
    sim_config: SimConfig,
    encounter: EncounterConfig,
    args: &Args,
    autopilot: &mut Autopilot,
) -> Option<GameStateSnapshot> {
    let (snap_tx, snap_rx) = mpsc::channel();
    let (cmd_tx, handle) =
        match spawn_game_loop(sim_config, encounter, args.speed, shared_snapshot(), snap_tx) {
            Ok(pair) => pair,
            Err(err) => {
                error!(%err, "failed to spawn game loop thread");
                return None;
            }
        };

    let _ = cmd_tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartEncounter));

    let mut last = None;
    while let Ok(snapshot) = snap_rx.recv_timeout(Duration::from_secs(5)) {
        let finished = matches!(snapshot.phase, GamePhase::Victory | GamePhase::Defeat);
        if finished || snapshot.time.tick >= args.max_ticks {
            last = Some(snapshot);
            break;
        }
        for command in autopilot.decide(&snapshot) {
            let _ = cmd_tx.send(GameLoopCommand::PlayerCommand(command));
        }
        last = Some(snapshot);
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        warn!("game loop thread panicked");
    }
    last
}

fn print_summary(summary: &RunSummary) {
    println!("\n=== COVERFIRE ===");
    match summary.defeat_reason {
        Some(reason) => println!("Outcome:   {:?} ({:?})", summary.phase, reason),
        None => println!("Outcome:   {:?}", summary.phase),
    }
    println!(
        "Stop:      {}/{}",
        summary.stop_index,
        summary.stop_count.saturating_sub(1)
    );
    println!(
        "Time:      {:.1}s ({} ticks, {:.1}s left)",
        summary.elapsed_secs, summary.ticks, summary.time_remaining_secs
    );
    println!("Health:    {}", summary.player_health);
    println!(
        "Score:     {} ({}/{} hits, {:.0}%)",
        summary.score, summary.shots_hit, summary.shots_fired, summary.accuracy
    );
}
