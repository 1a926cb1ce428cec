//! Per-shooter hit chance that builds while the player is exposed and
//! decays while the player is hidden.

use crate::profiles::EnemyProfile;

/// Fluctuating hit chance percentage, always within `[0, max_hit_chance]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyTracker {
    value: f64,
    gain_rate: f64,
    loss_rate: f64,
    max_hit_chance: f64,
}

impl AccuracyTracker {
    /// New tracker starting at zero. The ceiling is clamped to 0..=100.
    pub fn new(gain_rate: f64, loss_rate: f64, max_hit_chance: f64) -> Self {
        Self {
            value: 0.0,
            gain_rate: gain_rate.abs(),
            loss_rate: loss_rate.abs(),
            max_hit_chance: max_hit_chance.clamp(0.0, 100.0),
        }
    }

    pub fn from_profile(profile: &EnemyProfile) -> Self {
        Self::new(
            profile.hit_chance_gain_rate,
            profile.hit_chance_loss_rate,
            profile.max_hit_chance,
        )
    }

    /// Resume from a stored value (clamped into range).
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = self.clamp(value);
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn max_hit_chance(&self) -> f64 {
        self.max_hit_chance
    }

    /// Integrate one tick. Returns the new hit chance.
    pub fn update(&mut self, dt: f64, exposed: bool) -> f64 {
        if !dt.is_finite() || dt <= 0.0 {
            return self.value;
        }
        let rate = if exposed {
            self.gain_rate
        } else {
            -self.loss_rate
        };
        self.value = self.clamp(self.value + rate * dt);
        self.value
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, self.max_hit_chance)
    }
}
