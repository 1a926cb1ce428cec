//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info, warn};

use coverfire_core::commands::PlayerCommand;
use coverfire_core::components::WaveTag;
use coverfire_core::config::EncounterConfig;
use coverfire_core::enums::{DefeatReason, GamePhase};
use coverfire_core::events::GameEvent;
use coverfire_core::state::GameStateSnapshot;
use coverfire_core::types::SimTime;

use crate::damage_gate::PlayerDamage;
use crate::encounter::Encounter;
use crate::progression::ProgressionEvent;
use crate::systems;
use crate::systems::combatant::CombatantDamage;
use crate::wave::WaveManager;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Multiplier applied to every frame delta (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    defeat_reason: Option<DefeatReason>,
    time_scale: f64,
    rng: ChaCha8Rng,
    config: EncounterConfig,
    encounter: Option<Encounter>,
    cover_held: bool,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine for the given encounter.
    pub fn new(config: SimConfig, encounter: EncounterConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            defeat_reason: None,
            time_scale: config.time_scale.max(0.0),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config: encounter,
            encounter: None,
            cover_held: false,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one host frame of `dt` seconds and return
    /// the resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = if dt.is_finite() {
                dt.max(0.0) * self.time_scale
            } else {
                warn!(dt, "non-finite frame delta treated as zero");
                0.0
            };
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.defeat_reason,
            self.encounter.as_ref(),
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Runtime state of the running encounter, if any.
    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn encounter_mut(&mut self) -> Option<&mut Encounter> {
        self.encounter.as_mut()
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartEncounter => {
                if self.phase != GamePhase::MainMenu {
                    debug!(phase = ?self.phase, "start ignored outside main menu");
                    return;
                }
                self.start_encounter();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ReturnToMenu => {
                if matches!(
                    self.phase,
                    GamePhase::Paused | GamePhase::Victory | GamePhase::Defeat
                ) {
                    self.world.clear();
                    self.encounter = None;
                    self.defeat_reason = None;
                    self.cover_held = false;
                    self.phase = GamePhase::MainMenu;
                }
            }
            PlayerCommand::SetCoverHeld { held } => {
                self.cover_held = held;
                if let Some(enc) = self.encounter.as_mut() {
                    enc.cover.hold(held);
                }
            }
            PlayerCommand::Shoot { combatant_id } => self.player_shoot(combatant_id),
            PlayerCommand::Reload => {
                if self.phase != GamePhase::Active {
                    return;
                }
                if let Some(enc) = self.encounter.as_mut() {
                    if enc.weapon.start_reload() {
                        self.events.push(GameEvent::ReloadStarted);
                    } else {
                        debug!("reload ignored");
                    }
                }
            }
        }
    }

    fn start_encounter(&mut self) {
        let mut encounter = match Encounter::new(&self.config) {
            Ok(encounter) => encounter,
            Err(err) => {
                error!(%err, "invalid encounter config, staying in menu");
                return;
            }
        };

        self.world.clear();
        self.time = SimTime::default();
        self.defeat_reason = None;

        if let Some(ProgressionEvent::TransitionStarted {
            from_index,
            to_index,
        }) = encounter.progression.start(&mut encounter.cover)
        {
            self.events.push(GameEvent::TransitionStarted {
                from_index,
                to_index,
            });
        }

        self.encounter = Some(encounter);
        self.phase = GamePhase::Active;
        info!(stops = self.config.stops.len(), "encounter started");
    }

    fn player_shoot(&mut self, combatant_id: Option<u32>) {
        if self.phase != GamePhase::Active {
            return;
        }
        let Some(enc) = self.encounter.as_mut() else {
            return;
        };
        if !enc.progression.is_in_combat() {
            debug!("shot ignored outside combat");
            return;
        }
        if !enc.weapon.try_fire() {
            return;
        }

        let damage = enc.weapon.damage();
        let report = combatant_id.and_then(|id| {
            systems::combatant::damage_by_id(&mut self.world, id, damage).map(|r| (id, r))
        });

        let hit = match report {
            None => false,
            Some((_, report)) if report.outcome == CombatantDamage::Ignored => false,
            Some((_, report)) if report.outcome != CombatantDamage::Killed => true,
            Some((id, report)) => {
                self.events.push(GameEvent::CombatantKilled { combatant_id: id });
                if !report.weak_point {
                    record_wave_death(&mut enc.waves, report.tag, &mut self.events);
                } else if let Some(strike) = systems::boss::weak_point_destroyed(
                    &mut self.world,
                    report.entity,
                    &mut self.events,
                ) {
                    if strike.outcome == CombatantDamage::Killed {
                        self.events.push(GameEvent::CombatantKilled {
                            combatant_id: strike.boss_id,
                        });
                        record_wave_death(&mut enc.waves, strike.tag, &mut self.events);
                    }
                }
                true
            }
        };

        if hit {
            enc.weapon.record_hit();
        }
        self.events.push(GameEvent::PlayerShot { hit });

        if enc.weapon.ammo() == 0 && enc.weapon.start_reload() {
            self.events.push(GameEvent::ReloadStarted);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let Some(enc) = self.encounter.as_mut() else {
            return;
        };

        // 1. Timers owned by the player
        enc.player.tick(dt);
        if enc.weapon.tick(dt) {
            self.events.push(GameEvent::ReloadFinished);
        }

        // 2. Cover input
        enc.cover.hold(self.cover_held);

        // 3. Progression (transition or wave-clear check, never both)
        let cleared = enc.waves.is_wave_cleared();
        match enc.progression.tick(dt, cleared, &mut enc.cover) {
            Some(ProgressionEvent::Arrived {
                stop_index,
                wave_index,
            }) => {
                self.events.push(GameEvent::ArrivedAtStop { stop_index });
                enc.cover.hold(self.cover_held);
                let radius = enc.player_config.collider_radius;
                match enc.waves.spawn_wave(&mut self.world, wave_index, radius) {
                    Ok(count) => {
                        self.events.push(GameEvent::WaveSpawned { wave_index, count });
                        if count == 0 {
                            self.events.push(GameEvent::WaveCleared { wave_index });
                        }
                    }
                    Err(err) => warn!(%err, "wave spawn failed"),
                }
            }
            Some(ProgressionEvent::TransitionStarted {
                from_index,
                to_index,
            }) => {
                self.events.push(GameEvent::TransitionStarted {
                    from_index,
                    to_index,
                });
                if enc.timer.add_time(enc.wave_clear_bonus_secs) {
                    self.events.push(GameEvent::TimeBonus {
                        secs: enc.wave_clear_bonus_secs,
                    });
                }
            }
            Some(ProgressionEvent::Completed) => {
                self.events.push(GameEvent::EncounterComplete);
                self.phase = GamePhase::Victory;
                info!(score = enc.weapon.score(), "encounter complete");
            }
            None => {}
        }

        // 4. Enemy fire
        let target = enc.player_target();
        systems::shooter::run(
            &mut self.world,
            &mut self.rng,
            &enc.obstacles,
            &target,
            dt,
            &mut self.events,
        );

        // 5. Projectile flight, damage routed through the gate
        let hits = systems::projectile::run(
            &mut self.world,
            dt,
            &enc.obstacles,
            enc.player_center(),
            enc.player_config.collider_radius,
        );
        for amount in hits {
            let outcome = enc.player.apply_damage(
                amount,
                enc.progression.is_in_combat(),
                enc.cover.is_in_cover(),
            );
            match outcome {
                PlayerDamage::Applied { health } => {
                    self.events.push(GameEvent::PlayerDamaged { amount, health });
                }
                PlayerDamage::Killed => {
                    self.events.push(GameEvent::PlayerDamaged { amount, health: 0 });
                    self.events.push(GameEvent::PlayerDied);
                    if self.phase == GamePhase::Active {
                        self.phase = GamePhase::Defeat;
                        self.defeat_reason = Some(DefeatReason::PlayerKilled);
                    }
                }
                PlayerDamage::Rejected(_) => {}
            }
        }

        // 6. Dying combatants and weak-point respawns
        systems::combatant::run(&mut self.world, dt, &mut self.events);
        systems::boss::run(&mut self.world, dt, &mut self.events);

        // 7. Encounter clock
        if enc.timer.tick(dt) {
            self.events.push(GameEvent::TimeExpired);
            if self.phase == GamePhase::Active {
                self.phase = GamePhase::Defeat;
                self.defeat_reason = Some(DefeatReason::TimeExpired);
            }
        }

        // 8. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}

/// Count a kill against its wave and announce the clear.
fn record_wave_death(waves: &mut WaveManager, tag: WaveTag, events: &mut Vec<GameEvent>) {
    if waves.handle_combatant_death(tag.generation) && waves.is_wave_cleared() {
        info!(wave = tag.wave_index, "wave cleared");
        events.push(GameEvent::WaveCleared {
            wave_index: tag.wave_index,
        });
    }
}
