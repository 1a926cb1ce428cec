//! Player cover state.
//!
//! The cover key is a held state, not a toggle: holding it stands the
//! player up, releasing it ducks them behind cover. While control is
//! disabled the player is always exposed.

use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct CoverState {
    in_cover: bool,
    control_enabled: bool,
}

impl CoverState {
    /// Exposed, with control disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable player control over cover. Disabling also exposes
    /// the player.
    pub fn allow_control(&mut self, enabled: bool) {
        self.control_enabled = enabled;
        if !enabled {
            self.in_cover = false;
        }
    }

    /// Pull the player out of cover and lock control (camera transitions).
    pub fn force_exposed(&mut self) {
        self.in_cover = false;
        self.control_enabled = false;
    }

    /// Apply the current cover key state. Ignored while control is disabled.
    pub fn hold(&mut self, input_held: bool) {
        if !self.control_enabled {
            if input_held {
                debug!("cover input ignored, control disabled");
            }
            return;
        }
        self.in_cover = !input_held;
    }

    pub fn is_in_cover(&self) -> bool {
        self.control_enabled && self.in_cover
    }

    pub fn control_enabled(&self) -> bool {
        self.control_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_exposed_without_control() {
        let cover = CoverState::new();
        assert!(!cover.is_in_cover());
        assert!(!cover.control_enabled());
    }

    #[test]
    fn held_key_exposes_released_key_ducks() {
        let mut cover = CoverState::new();
        cover.allow_control(true);
        cover.hold(false);
        assert!(cover.is_in_cover());
        cover.hold(true);
        assert!(!cover.is_in_cover());
    }

    #[test]
    fn input_ignored_without_control() {
        let mut cover = CoverState::new();
        cover.hold(false);
        assert!(!cover.is_in_cover());
    }

    #[test]
    fn force_exposed_overrides_cover() {
        let mut cover = CoverState::new();
        cover.allow_control(true);
        cover.hold(false);
        cover.force_exposed();
        assert!(!cover.is_in_cover());
        assert!(!cover.control_enabled());
        cover.hold(false);
        assert!(!cover.is_in_cover());
    }

    #[test]
    fn disabling_control_exposes() {
        let mut cover = CoverState::new();
        cover.allow_control(true);
        cover.hold(false);
        cover.allow_control(false);
        assert!(!cover.is_in_cover());
    }
}
