//! Per-encounter runtime state, built fresh from the config on every start.

use glam::DVec3;

use coverfire_ai::ballistics::TargetGeometry;
use coverfire_core::config::{EncounterConfig, PlayerConfig};
use coverfire_core::error::ConfigError;
use coverfire_core::types::Position;
use coverfire_terrain::{ObstacleField, RailPath};

use crate::cover::CoverState;
use crate::damage_gate::PlayerHealth;
use crate::progression::ProgressionController;
use crate::timer::EncounterTimer;
use crate::wave::WaveManager;
use crate::weapon::Weapon;

pub struct Encounter {
    pub progression: ProgressionController,
    pub cover: CoverState,
    pub waves: WaveManager,
    pub player: PlayerHealth,
    pub weapon: Weapon,
    pub timer: EncounterTimer,
    pub obstacles: ObstacleField,
    pub rail: RailPath,
    pub player_config: PlayerConfig,
    pub wave_clear_bonus_secs: f64,
}

impl Encounter {
    pub fn new(config: &EncounterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let progression =
            ProgressionController::new(config.stops.clone(), config.move_duration_secs)?;
        let rail = RailPath::new(config.rail.clone()).ok_or(ConfigError::EmptyRail)?;

        Ok(Self {
            progression,
            cover: CoverState::new(),
            waves: WaveManager::new(config.waves.clone()),
            player: PlayerHealth::new(
                config.player.max_health,
                config.player.invulnerability_secs,
            ),
            weapon: Weapon::new(&config.weapon),
            timer: EncounterTimer::new(config.timer.total_secs),
            obstacles: ObstacleField::from_config(&config.obstacles),
            rail,
            player_config: config.player.clone(),
            wave_clear_bonus_secs: config.timer.wave_clear_bonus_secs,
        })
    }

    /// Point on the rail under the camera.
    pub fn player_reference(&self) -> Position {
        self.rail.point_at(self.progression.position())
    }

    /// Collider center, lowered while ducked.
    pub fn player_center(&self) -> Position {
        let offset = if self.cover.is_in_cover() {
            self.player_config.duck_offset
        } else {
            self.player_config.stand_offset
        };
        self.player_reference() + DVec3::Y * (self.player_config.center_height + offset)
    }

    pub fn player_target(&self) -> TargetGeometry {
        TargetGeometry {
            reference_point: self.player_reference(),
            collider_center: Some(self.player_center()),
        }
    }
}
