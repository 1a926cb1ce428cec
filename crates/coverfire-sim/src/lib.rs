//! Simulation engine for COVERFIRE.
//!
//! Owns the hecs ECS world, runs the combat progression loop once per host
//! frame, and produces GameStateSnapshots for the frontend.

pub mod cover;
pub mod damage_gate;
pub mod encounter;
pub mod engine;
pub mod progression;
pub mod systems;
pub mod timer;
pub mod wave;
pub mod weapon;
pub mod world_setup;

pub use coverfire_core as core;
pub use engine::{SimConfig, SimulationEngine};
