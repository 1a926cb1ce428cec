//! Player weapon: magazine, reload timer, and score keeping.

use tracing::debug;

use coverfire_core::config::WeaponConfig;

#[derive(Debug, Clone)]
pub struct Weapon {
    ammo: u32,
    max_ammo: u32,
    damage: i32,
    reload_secs: f64,
    reload_remaining_secs: Option<f64>,
    score_per_hit: u32,
    score: u32,
    shots_fired: u32,
    shots_hit: u32,
}

impl Weapon {
    pub fn new(config: &WeaponConfig) -> Self {
        Self {
            ammo: config.max_ammo,
            max_ammo: config.max_ammo,
            damage: config.damage,
            reload_secs: config.reload_secs.max(0.0),
            reload_remaining_secs: None,
            score_per_hit: config.score_per_hit,
            score: 0,
            shots_fired: 0,
            shots_hit: 0,
        }
    }

    /// Consume one round. Returns false when empty or reloading.
    pub fn try_fire(&mut self) -> bool {
        if self.is_reloading() {
            debug!("shot blocked, reloading");
            return false;
        }
        if self.ammo == 0 {
            debug!("shot blocked, magazine empty");
            return false;
        }
        self.ammo -= 1;
        self.shots_fired += 1;
        true
    }

    /// Credit the last shot as a hit.
    pub fn record_hit(&mut self) {
        self.shots_hit += 1;
        self.score += self.score_per_hit;
    }

    /// Begin a reload. Ignored while reloading or with a full magazine.
    pub fn start_reload(&mut self) -> bool {
        if self.is_reloading() || self.ammo >= self.max_ammo {
            return false;
        }
        self.reload_remaining_secs = Some(self.reload_secs);
        true
    }

    /// Advance the reload timer. Returns true on the tick the magazine refills.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(remaining) = self.reload_remaining_secs else {
            return false;
        };
        let remaining = remaining - dt;
        if remaining > 0.0 {
            self.reload_remaining_secs = Some(remaining);
            return false;
        }
        self.reload_remaining_secs = None;
        self.ammo = self.max_ammo;
        true
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn max_ammo(&self) -> u32 {
        self.max_ammo
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn is_reloading(&self) -> bool {
        self.reload_remaining_secs.is_some()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn shots_hit(&self) -> u32 {
        self.shots_hit
    }

    /// Hit percentage, 0 when nothing was fired.
    pub fn accuracy(&self) -> f64 {
        if self.shots_fired == 0 {
            0.0
        } else {
            self.shots_hit as f64 / self.shots_fired as f64 * 100.0
        }
    }
}
