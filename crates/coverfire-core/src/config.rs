//! Encounter configuration loaded from TOML.
//!
//! Every field has a default matching the shipped level, so a partial file
//! only needs to override what it changes.

use std::fs;
use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::EnemyArchetype;
use crate::error::ConfigError;
use crate::types::Position;

/// Full description of one corridor encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    /// Rail parameters of the cover stops. Index 0 is the pre-combat start.
    pub stops: Vec<f64>,
    /// Seconds to travel between two stops.
    pub move_duration_secs: f64,
    /// Polyline the camera rides along, parameterized 0..=1 by arc length.
    pub rail: Vec<Position>,
    pub player: PlayerConfig,
    pub weapon: WeaponConfig,
    pub timer: TimerConfig,
    /// One wave per combat stop, in stop order.
    pub waves: Vec<WaveConfig>,
    /// Line-of-sight and projectile blockers.
    pub obstacles: Vec<ObstacleConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_health: i32,
    pub invulnerability_secs: f64,
    pub collider_radius: f64,
    pub center_height: f64,
    pub stand_offset: f64,
    pub duck_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub max_ammo: u32,
    pub reload_secs: f64,
    pub damage: i32,
    pub score_per_hit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub total_secs: f64,
    pub wave_clear_bonus_secs: f64,
}

/// Enemy group and the spawn slots it is distributed over.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WaveConfig {
    #[serde(default)]
    pub enemies: Vec<EnemyArchetype>,
    #[serde(default)]
    pub spawn_points: Vec<Position>,
    /// Boss fight held alongside the regular enemies.
    #[serde(default)]
    pub boss: Option<BossConfig>,
}

/// Boss with a health pool that only drops when one of its weak points is
/// destroyed. Weak points grow back after `respawn_delay_secs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossConfig {
    pub position: Position,
    /// Weak-point destructions needed to bring it down.
    pub health: i32,
    /// Weak point positions in level space.
    pub weak_points: Vec<Position>,
    pub weak_point_health: i32,
    pub respawn_delay_secs: f64,
}

/// Axis-aligned box in level space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub min: Position,
    pub max: Position,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        let stops = vec![0.0, 0.3, 0.6, 1.0];
        let rail_length = 30.0;
        let combat_z: Vec<f64> = stops[1..].iter().map(|s| s * rail_length).collect();

        let waves = combat_z
            .iter()
            .map(|&z| WaveConfig {
                enemies: vec![EnemyArchetype::Walker, EnemyArchetype::Walker],
                spawn_points: vec![
                    DVec3::new(-3.0, 0.0, z + 12.0),
                    DVec3::new(3.0, 0.0, z + 12.0),
                ],
                boss: None,
            })
            .collect();

        // Waist-high barrier just ahead of every combat stop.
        let obstacles = combat_z
            .iter()
            .map(|&z| ObstacleConfig {
                min: DVec3::new(-1.5, 0.0, z + 1.0),
                max: DVec3::new(1.5, 1.0, z + 1.4),
            })
            .collect();

        Self {
            stops,
            move_duration_secs: DEFAULT_MOVE_DURATION_SECS,
            rail: vec![DVec3::ZERO, DVec3::new(0.0, 0.0, rail_length)],
            player: PlayerConfig::default(),
            weapon: WeaponConfig::default(),
            timer: TimerConfig::default(),
            waves,
            obstacles,
        }
    }
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 15.0),
            health: BOSS_MAX_HEALTH,
            weak_points: vec![DVec3::new(-2.0, 2.0, 14.0), DVec3::new(2.0, 2.0, 14.0)],
            weak_point_health: WEAK_POINT_MAX_HEALTH,
            respawn_delay_secs: WEAK_POINT_RESPAWN_SECS,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            invulnerability_secs: PLAYER_INVULNERABILITY_SECS,
            collider_radius: PLAYER_COLLIDER_RADIUS,
            center_height: PLAYER_CENTER_HEIGHT,
            stand_offset: PLAYER_STAND_OFFSET,
            duck_offset: PLAYER_DUCK_OFFSET,
        }
    }
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            max_ammo: WEAPON_MAX_AMMO,
            reload_secs: WEAPON_RELOAD_SECS,
            damage: WEAPON_DAMAGE,
            score_per_hit: SCORE_PER_HIT,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            total_secs: TIMER_TOTAL_SECS,
            wave_clear_bonus_secs: WAVE_CLEAR_BONUS_SECS,
        }
    }
}

impl EncounterConfig {
    /// Read, parse, and validate an encounter file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate an encounter from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of stops that host a wave (every stop except the start).
    pub fn combat_stop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Check structural invariants the runtime relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stops.len() < MIN_STOP_COUNT {
            return Err(ConfigError::TooFewStops {
                min: MIN_STOP_COUNT,
                found: self.stops.len(),
            });
        }
        if let Some(index) = self.stops.iter().position(|s| !s.is_finite()) {
            return Err(ConfigError::NonFiniteStop { index });
        }
        if self.move_duration_secs.is_nan() || self.move_duration_secs <= 0.0 {
            return Err(ConfigError::InvalidMoveDuration(self.move_duration_secs));
        }
        if self.rail.is_empty() {
            return Err(ConfigError::EmptyRail);
        }
        if self.waves.len() < self.combat_stop_count() {
            return Err(ConfigError::MissingWaves {
                combat_stops: self.combat_stop_count(),
                waves: self.waves.len(),
            });
        }
        if let Some(wave) = self
            .waves
            .iter()
            .position(|w| w.spawn_points.is_empty() && !w.enemies.is_empty())
        {
            return Err(ConfigError::NoSpawnPoints { wave });
        }
        for (wave, boss) in self
            .waves
            .iter()
            .enumerate()
            .filter_map(|(i, w)| w.boss.as_ref().map(|b| (i, b)))
        {
            boss.validate(wave)?;
        }
        if let Some(index) = self
            .obstacles
            .iter()
            .position(|o| o.min.cmpgt(o.max).any())
        {
            return Err(ConfigError::InvertedObstacle { index });
        }
        if self.player.max_health <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "player.max_health",
                reason: format!("must be positive, got {}", self.player.max_health),
            });
        }
        if self.player.invulnerability_secs < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "player.invulnerability_secs",
                reason: "must not be negative".into(),
            });
        }
        if self.weapon.max_ammo == 0 {
            return Err(ConfigError::InvalidValue {
                field: "weapon.max_ammo",
                reason: "must be at least 1".into(),
            });
        }
        if self.timer.total_secs <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "timer.total_secs",
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }
}

impl BossConfig {
    fn validate(&self, wave: usize) -> Result<(), ConfigError> {
        if self.weak_points.is_empty() {
            return Err(ConfigError::BossWithoutWeakPoints { wave });
        }
        if self.health <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "waves.boss.health",
                reason: format!("must be positive, got {}", self.health),
            });
        }
        if self.weak_point_health <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "waves.boss.weak_point_health",
                reason: format!("must be positive, got {}", self.weak_point_health),
            });
        }
        if self.respawn_delay_secs.is_nan() || self.respawn_delay_secs < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "waves.boss.respawn_delay_secs",
                reason: "must not be negative".into(),
            });
        }
        Ok(())
    }
}
