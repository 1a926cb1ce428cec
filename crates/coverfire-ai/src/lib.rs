//! Enemy combat brain for COVERFIRE.
//!
//! Hit-chance tracking, shot ballistics, archetype profiles, and the
//! per-shooter firing cycle. Pure functions on plain data, no ECS.

pub mod accuracy;
pub mod ballistics;
pub mod fsm;
pub mod profiles;

pub use coverfire_core as core;

#[cfg(test)]
mod tests;
