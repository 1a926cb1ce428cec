//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! Per-encounter state they need is passed in by the engine.

pub mod boss;
pub mod cleanup;
pub mod combatant;
pub mod projectile;
pub mod shooter;
pub mod snapshot;
