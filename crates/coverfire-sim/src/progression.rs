//! Combat progression controller.
//!
//! Moves the camera through an ordered list of rail stops. Each move lerps
//! the rail parameter over a fixed duration with the player forced out of
//! cover. On arrival the controller reports which wave to spawn, then waits
//! for that wave to clear before moving on. Running past the last stop
//! completes the encounter.
//!
//! The controller only tracks its own state. The engine owns the wave
//! manager and reacts to the returned `ProgressionEvent`s.

use tracing::{debug, info, warn};

use coverfire_core::constants::MIN_STOP_COUNT;
use coverfire_core::enums::ProgressionState;
use coverfire_core::error::ConfigError;
use coverfire_core::types::lerp;

use crate::cover::CoverState;

/// State edges reported by `ProgressionController::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionEvent {
    /// Camera started moving toward `to_index`.
    TransitionStarted { from_index: usize, to_index: usize },
    /// Camera reached `stop_index`; `wave_index` should be spawned.
    Arrived { stop_index: usize, wave_index: usize },
    /// The last stop's wave cleared.
    Completed,
}

#[derive(Debug, Clone, Default)]
struct Transition {
    is_moving: bool,
    is_in_combat: bool,
    start_position: f64,
    end_position: f64,
    elapsed_secs: f64,
    total_secs: f64,
}

#[derive(Debug, Clone)]
pub struct ProgressionController {
    stops: Vec<f64>,
    move_duration_secs: f64,
    current_index: usize,
    position: f64,
    transition: Transition,
    started: bool,
    complete: bool,
}

impl ProgressionController {
    pub fn new(stops: Vec<f64>, move_duration_secs: f64) -> Result<Self, ConfigError> {
        if stops.len() < MIN_STOP_COUNT {
            return Err(ConfigError::TooFewStops {
                min: MIN_STOP_COUNT,
                found: stops.len(),
            });
        }
        if let Some(index) = stops.iter().position(|s| !s.is_finite()) {
            return Err(ConfigError::NonFiniteStop { index });
        }
        if move_duration_secs.is_nan() || move_duration_secs <= 0.0 {
            return Err(ConfigError::InvalidMoveDuration(move_duration_secs));
        }

        let position = stops[0];
        Ok(Self {
            stops,
            move_duration_secs,
            current_index: 0,
            position,
            transition: Transition {
                total_secs: move_duration_secs,
                ..Default::default()
            },
            started: false,
            complete: false,
        })
    }

    /// Snap to the pre-combat stop and begin moving toward stop 1.
    pub fn start(&mut self, cover: &mut CoverState) -> Option<ProgressionEvent> {
        if self.started {
            warn!("progression already started");
            return None;
        }
        self.started = true;
        self.position = self.stops[0];
        self.current_index = 1;
        if self.move_to_cover(1, cover) {
            Some(ProgressionEvent::TransitionStarted {
                from_index: 0,
                to_index: 1,
            })
        } else {
            None
        }
    }

    /// Begin a transition from the current position to stop `index`.
    /// Out-of-range indices are logged and ignored.
    pub fn move_to_cover(&mut self, index: usize, cover: &mut CoverState) -> bool {
        let Some(&end_position) = self.stops.get(index) else {
            warn!(
                index,
                stop_count = self.stops.len(),
                "cover stop index out of range"
            );
            return false;
        };

        self.current_index = index;
        self.transition = Transition {
            is_moving: true,
            is_in_combat: false,
            start_position: self.position,
            end_position,
            elapsed_secs: 0.0,
            total_secs: self.move_duration_secs,
        };
        cover.force_exposed();
        debug!(index, from = self.position, to = end_position, "moving to cover");
        true
    }

    /// Advance one tick. While moving, only the transition is advanced; the
    /// wave-clear flag is looked at only while parked in combat.
    pub fn tick(
        &mut self,
        dt: f64,
        wave_cleared: bool,
        cover: &mut CoverState,
    ) -> Option<ProgressionEvent> {
        if self.complete {
            return None;
        }

        if self.transition.is_moving {
            let t = &mut self.transition;
            t.elapsed_secs += dt.max(0.0);
            let progress = (t.elapsed_secs / t.total_secs).clamp(0.0, 1.0);
            self.position = lerp(t.start_position, t.end_position, progress);

            if progress >= 1.0 {
                t.is_moving = false;
                t.is_in_combat = true;
                self.position = t.end_position;
                cover.allow_control(true);
                info!(stop = self.current_index, "arrived at cover");
                return Some(ProgressionEvent::Arrived {
                    stop_index: self.current_index,
                    wave_index: self.current_index - 1,
                });
            }
            return None;
        }

        if self.transition.is_in_combat && wave_cleared {
            self.transition.is_in_combat = false;
            let from_index = self.current_index;
            self.current_index += 1;

            if self.current_index < self.stops.len() {
                let to_index = self.current_index;
                if self.move_to_cover(to_index, cover) {
                    return Some(ProgressionEvent::TransitionStarted {
                        from_index,
                        to_index,
                    });
                }
                return None;
            }

            self.complete = true;
            info!("all cover stops cleared");
            return Some(ProgressionEvent::Completed);
        }

        None
    }

    pub fn state(&self) -> ProgressionState {
        if self.complete {
            ProgressionState::Complete
        } else if self.transition.is_moving {
            ProgressionState::Transitioning
        } else if self.transition.is_in_combat {
            ProgressionState::InCombat
        } else {
            ProgressionState::Idle
        }
    }

    /// Combat is active while parked at a stop. Transitions are never combat.
    pub fn is_in_combat(&self) -> bool {
        self.transition.is_in_combat
    }

    pub fn is_moving(&self) -> bool {
        self.transition.is_moving
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Current rail parameter.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}
