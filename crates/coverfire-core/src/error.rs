//! Errors raised while loading or validating an encounter.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("need at least {min} rail stops (start plus one combat stop), found {found}")]
    TooFewStops { min: usize, found: usize },

    #[error("rail stop {index} is not a finite number")]
    NonFiniteStop { index: usize },

    #[error("move duration must be positive, got {0}")]
    InvalidMoveDuration(f64),

    #[error("rail path needs at least one point")]
    EmptyRail,

    #[error("{combat_stops} combat stops but only {waves} waves configured")]
    MissingWaves { combat_stops: usize, waves: usize },

    #[error("wave {wave} has no spawn points")]
    NoSpawnPoints { wave: usize },

    #[error("boss in wave {wave} has no weak points and can never be defeated")]
    BossWithoutWeakPoints { wave: usize },

    #[error("obstacle {index} has min corner above max corner")]
    InvertedObstacle { index: usize },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
