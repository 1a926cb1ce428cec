//! Player health behind the cover and combat gates.

use tracing::{debug, info};

/// Why incoming damage was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageRejection {
    NegativeAmount,
    CombatInactive,
    InCover,
    Invulnerable,
    AlreadyDead,
}

/// Result of offering damage to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerDamage {
    Rejected(DamageRejection),
    Applied { health: i32 },
    /// Health reached zero on this hit. Reported once.
    Killed,
}

#[derive(Debug, Clone)]
pub struct PlayerHealth {
    health: i32,
    max_health: i32,
    invulnerability_secs: f64,
    invulnerable_remaining_secs: f64,
    dead: bool,
}

impl PlayerHealth {
    pub fn new(max_health: i32, invulnerability_secs: f64) -> Self {
        let max_health = max_health.max(1);
        Self {
            health: max_health,
            max_health,
            invulnerability_secs: invulnerability_secs.max(0.0),
            invulnerable_remaining_secs: 0.0,
            dead: false,
        }
    }

    /// Offer damage to the player. It lands only while combat is active and
    /// the player is exposed. Hits inside the post-hit invulnerability
    /// window are dropped, not queued.
    pub fn apply_damage(
        &mut self,
        amount: i32,
        combat_active: bool,
        in_cover: bool,
    ) -> PlayerDamage {
        let rejection = if amount < 0 {
            Some(DamageRejection::NegativeAmount)
        } else if self.dead {
            Some(DamageRejection::AlreadyDead)
        } else if !combat_active {
            Some(DamageRejection::CombatInactive)
        } else if in_cover {
            Some(DamageRejection::InCover)
        } else if self.is_invulnerable() {
            Some(DamageRejection::Invulnerable)
        } else {
            None
        };

        if let Some(reason) = rejection {
            debug!(amount, ?reason, "player damage rejected");
            return PlayerDamage::Rejected(reason);
        }

        self.health = (self.health - amount).max(0);
        if self.health == 0 {
            self.dead = true;
            info!("player killed");
            return PlayerDamage::Killed;
        }

        self.invulnerable_remaining_secs = self.invulnerability_secs;
        PlayerDamage::Applied {
            health: self.health,
        }
    }

    /// Count down the invulnerability window.
    pub fn tick(&mut self, dt: f64) {
        self.invulnerable_remaining_secs = (self.invulnerable_remaining_secs - dt).max(0.0);
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_remaining_secs > 0.0
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }
}
