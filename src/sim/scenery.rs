//! Ambient presentation state
//!
//! Clouds, ground scroll, crash flash and the menu bob. None of this affects
//! gameplay; it lives in the simulation so animation stays continuous across
//! phase changes.

use serde::{Deserialize, Serialize};

/// Clouds wrap once they are this far past the left edge
pub const CLOUD_WRAP_X: f32 = -80.0;

/// (start x, y, drift per tick, respawn distance past the right edge)
const CLOUD_LAYOUT: [(f32, f32, f32, f32); 3] = [
    (50.0, 60.0, 0.5, 20.0),
    (200.0, 120.0, 0.3, 40.0),
    (340.0, 40.0, 0.4, 10.0),
];

/// A background cloud
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub respawn_offset: f32,
}

impl Cloud {
    fn drift(&mut self, screen_width: f32) {
        self.x -= self.speed;
        if self.x < CLOUD_WRAP_X {
            self.x = screen_width + self.respawn_offset;
        }
    }
}

/// Decorative state read by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenery {
    pub clouds: [Cloud; 3],
    /// Ground pattern offset in [0, ground_tile)
    pub ground_offset: f32,
    /// White flash alpha after a crash (0 = none)
    pub flash: f32,
    /// Menu bob phase in radians
    pub bob_phase: f32,
}

impl Default for Scenery {
    fn default() -> Self {
        Self {
            clouds: CLOUD_LAYOUT.map(|(x, y, speed, respawn_offset)| Cloud {
                x,
                y,
                speed,
                respawn_offset,
            }),
            ground_offset: 0.0,
            flash: 0.0,
            bob_phase: 0.0,
        }
    }
}

impl Scenery {
    /// Clouds drift in every phase
    pub fn drift_clouds(&mut self, screen_width: f32) {
        for cloud in &mut self.clouds {
            cloud.drift(screen_width);
        }
    }

    pub fn scroll_ground(&mut self, amount: f32, tile: f32) {
        self.ground_offset = (self.ground_offset + amount).rem_euclid(tile);
    }

    pub fn trigger_flash(&mut self, alpha: f32) {
        self.flash = alpha;
    }

    /// Linear fade toward zero
    pub fn fade_flash(&mut self, decay: f32) {
        self.flash = (self.flash - decay).max(0.0);
    }

    /// Advance the bob phase and return the vertical offset for this tick
    pub fn advance_bob(&mut self, rate: f32, amplitude: f32) -> f32 {
        self.bob_phase += rate;
        self.bob_phase.sin() * amplitude
    }

    /// Back to the menu: clouds keep drifting, everything else restarts
    pub fn reset_for_menu(&mut self) {
        self.ground_offset = 0.0;
        self.flash = 0.0;
        self.bob_phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clouds_wrap_past_left_edge() {
        let mut scenery = Scenery::default();
        scenery.clouds[0].x = -79.75;
        scenery.drift_clouds(400.0);
        assert_eq!(scenery.clouds[0].x, 420.0);
        // Others just drift
        assert!((scenery.clouds[1].x - 199.7).abs() < 1e-4);
        assert!((scenery.clouds[2].x - 339.6).abs() < 1e-4);
    }

    #[test]
    fn test_ground_offset_wraps_at_tile() {
        let mut scenery = Scenery::default();
        for _ in 0..8 {
            scenery.scroll_ground(3.0, 24.0);
        }
        assert_eq!(scenery.ground_offset, 0.0);
        scenery.scroll_ground(5.0, 24.0);
        assert_eq!(scenery.ground_offset, 5.0);
    }

    #[test]
    fn test_flash_fades_to_zero() {
        let mut scenery = Scenery::default();
        scenery.trigger_flash(200.0);
        for _ in 0..13 {
            scenery.fade_flash(15.0);
        }
        assert_eq!(scenery.flash, 5.0);
        scenery.fade_flash(15.0);
        assert_eq!(scenery.flash, 0.0);
        scenery.fade_flash(15.0);
        assert_eq!(scenery.flash, 0.0);
    }

    #[test]
    fn test_reset_for_menu_keeps_clouds() {
        let mut scenery = Scenery::default();
        scenery.drift_clouds(400.0);
        scenery.scroll_ground(7.0, 24.0);
        scenery.trigger_flash(200.0);
        scenery.advance_bob(0.05, 15.0);
        let clouds = scenery.clouds;

        scenery.reset_for_menu();
        assert_eq!(scenery.clouds, clouds);
        assert_eq!(scenery.ground_offset, 0.0);
        assert_eq!(scenery.flash, 0.0);
        assert_eq!(scenery.bob_phase, 0.0);
    }
}
