//! Wave manager: spawns the enemy group for a wave and counts deaths until
//! the wave is cleared.
//!
//! A wave may also hold a boss. The boss is one more enemy to kill, while
//! its respawning weak points never count.
//!
//! Every spawn bumps a generation number stamped on the combatants'
//! `WaveTag`. Death reports carry that generation, so a straggler from a
//! superseded wave never decrements the current count.

use hecs::{Entity, World};
use thiserror::Error;
use tracing::{debug, info, warn};

use coverfire_core::components::WaveTag;
use coverfire_core::config::WaveConfig;

use crate::world_setup;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
    #[error("wave index {index} out of range ({available} waves configured)")]
    WaveOutOfRange { index: usize, available: usize },

    #[error("wave {index} has enemies but no spawn points")]
    NoSpawnPoints { index: usize },
}

#[derive(Debug, Clone, Default)]
pub struct WaveManager {
    waves: Vec<WaveConfig>,
    current_wave: Option<usize>,
    enemies_alive: u32,
    generation: u64,
    next_combatant_id: u32,
}

impl WaveManager {
    pub fn new(waves: Vec<WaveConfig>) -> Self {
        Self {
            waves,
            ..Default::default()
        }
    }

    /// Sweep leftovers from any earlier wave, then spawn wave `index`,
    /// distributing its enemies round-robin over the wave's spawn points.
    /// Returns the number spawned. On error nothing is spawned.
    pub fn spawn_wave(
        &mut self,
        world: &mut World,
        index: usize,
        player_radius: f64,
    ) -> Result<usize, SpawnError> {
        let swept = sweep_wave_entities(world);
        if swept > 0 {
            debug!(swept, "removed leftover wave entities");
        }

        let Some(wave) = self.waves.get(index) else {
            warn!(index, available = self.waves.len(), "wave index out of range");
            return Err(SpawnError::WaveOutOfRange {
                index,
                available: self.waves.len(),
            });
        };
        if wave.spawn_points.is_empty() && !wave.enemies.is_empty() {
            warn!(index, "wave has no spawn points");
            return Err(SpawnError::NoSpawnPoints { index });
        }

        self.generation += 1;
        let tag = WaveTag {
            wave_index: index,
            generation: self.generation,
        };

        let mut spawned = 0;
        for (slot, &archetype) in wave.enemies.iter().enumerate() {
            let point = wave.spawn_points[slot % wave.spawn_points.len()];
            world_setup::spawn_combatant(
                world,
                self.next_combatant_id,
                archetype,
                point,
                tag,
                player_radius,
            );
            self.next_combatant_id += 1;
            spawned += 1;
        }

        // The boss counts toward the wave. Its weak points do not.
        if let Some(boss) = &wave.boss {
            world_setup::spawn_boss(world, self.next_combatant_id, boss, tag, player_radius);
            self.next_combatant_id += 1 + boss.weak_points.len() as u32;
            spawned += 1;
            info!(wave = index, weak_points = boss.weak_points.len(), "boss spawned");
        }

        if spawned == 0 {
            warn!(index, "wave has no enemies, clears immediately");
        }

        self.current_wave = Some(index);
        self.enemies_alive = spawned as u32;
        info!(wave = index, count = spawned, "wave spawned");
        Ok(spawned)
    }

    /// Count one combatant death. Reports from an older generation are
    /// ignored and the count never drops below zero. Returns true when the
    /// death was counted.
    pub fn handle_combatant_death(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "stale death report ignored");
            return false;
        }
        if self.enemies_alive == 0 {
            debug!("death reported with no enemies alive");
            return false;
        }
        self.enemies_alive -= 1;
        true
    }

    pub fn is_wave_cleared(&self) -> bool {
        self.enemies_alive == 0
    }

    pub fn enemies_alive(&self) -> u32 {
        self.enemies_alive
    }

    pub fn current_wave(&self) -> Option<usize> {
        self.current_wave
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Despawn every entity carrying a `WaveTag`.
fn sweep_wave_entities(world: &mut World) -> usize {
    let leftovers: Vec<Entity> = world
        .query::<&WaveTag>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for &entity in &leftovers {
        let _ = world.despawn(entity);
    }
    leftovers.len()
}
