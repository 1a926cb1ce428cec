//! Encounter countdown clock.

use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct EncounterTimer {
    remaining_secs: f64,
    expired: bool,
}

impl EncounterTimer {
    pub fn new(total_secs: f64) -> Self {
        Self {
            remaining_secs: total_secs.max(0.0),
            expired: false,
        }
    }

    /// Count down. Returns true on the tick the clock runs out.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.expired {
            return false;
        }
        self.remaining_secs = (self.remaining_secs - dt).max(0.0);
        if self.remaining_secs <= 0.0 {
            self.expired = true;
            info!("encounter timer expired");
            return true;
        }
        false
    }

    /// Add bonus time. Ignored once expired.
    pub fn add_time(&mut self, secs: f64) -> bool {
        if self.expired || secs <= 0.0 {
            debug!(secs, expired = self.expired, "time bonus ignored");
            return false;
        }
        self.remaining_secs += secs;
        true
    }

    pub fn remaining_secs(&self) -> f64 {
        self.remaining_secs
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}
