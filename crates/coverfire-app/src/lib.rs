//! COVERFIRE headless runner.
//!
//! Wires the simulation engine to a game-loop thread or a lockstep driver,
//! with a scripted autopilot standing in for the player.

pub mod autopilot;
pub mod game_loop;
pub mod headless;
pub mod state;

pub use coverfire_core as core;
