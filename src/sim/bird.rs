//! The player-controlled bird

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::SimConfig;
use crate::consts::{TILT_FACTOR, TILT_MAX, TILT_MIN};

/// The bird. Horizontal position is fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Left edge of the drawn sprite
    pub x: f32,
    /// Top edge of the drawn sprite
    pub y: f32,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
    /// Visual tilt in degrees, always in [TILT_MIN, TILT_MAX]
    pub tilt: f32,
    /// Diameter of the drawn sprite
    pub size: f32,
    /// Hitbox margin on every side
    pub hitbox_inset: f32,
}

impl Bird {
    /// A resting bird at the configured start position
    pub fn new(config: &SimConfig) -> Self {
        Self {
            x: config.bird_x,
            y: config.bird_start_y(),
            vel_y: 0.0,
            tilt: 0.0,
            size: config.bird_size,
            hitbox_inset: config.bird_hitbox_inset,
        }
    }

    /// Flap: velocity is replaced, not added to
    #[inline]
    pub fn flap(&mut self, jump_velocity: f32) {
        self.vel_y = jump_velocity;
    }

    /// Advance one tick of gravity and refresh the tilt
    pub fn integrate(&mut self, gravity: f32) {
        self.vel_y += gravity;
        self.y += self.vel_y;
        self.tilt = tilt_for_velocity(self.vel_y);
    }

    /// Collision box, smaller than the sprite
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x + self.hitbox_inset,
            self.y + self.hitbox_inset,
            self.size - 2.0 * self.hitbox_inset,
            self.size - 2.0 * self.hitbox_inset,
        )
    }

    /// Bottom edge of the drawn sprite
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.size
    }

    /// Sprite centre; the inset hitbox shares it
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

/// Sprite tilt for a given vertical velocity
#[inline]
pub fn tilt_for_velocity(vel_y: f32) -> f32 {
    (vel_y * TILT_FACTOR).clamp(TILT_MIN, TILT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    #[test]
    fn test_integrate_from_rest() {
        let mut bird = Bird::new(&SimConfig::default());
        let start_y = bird.y;
        bird.integrate(GRAVITY);
        assert_eq!(bird.vel_y, GRAVITY);
        assert_eq!(bird.y, start_y + GRAVITY);
        assert_eq!(bird.tilt, GRAVITY * TILT_FACTOR);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut bird = Bird::new(&SimConfig::default());
        bird.vel_y = 12.0;
        bird.flap(JUMP_VELOCITY);
        assert_eq!(bird.vel_y, JUMP_VELOCITY);

        bird.vel_y = -20.0;
        bird.flap(JUMP_VELOCITY);
        assert_eq!(bird.vel_y, JUMP_VELOCITY);
    }

    #[test]
    fn test_tilt_clamps_at_extremes() {
        assert_eq!(tilt_for_velocity(1000.0), TILT_MAX);
        assert_eq!(tilt_for_velocity(-1000.0), TILT_MIN);
        assert_eq!(tilt_for_velocity(0.0), 0.0);
        assert_eq!(tilt_for_velocity(5.0), 15.0);
    }

    #[test]
    fn test_bounds_are_inset() {
        let bird = Bird::new(&SimConfig::default());
        let bounds = bird.bounds();
        assert_eq!(bounds, Rect::new(84.0, 289.0, 22.0, 22.0));
        assert_eq!(bird.center(), Vec2::new(95.0, 300.0));
        assert_eq!(bird.bottom(), 315.0);
    }

    proptest! {
        #[test]
        fn prop_tilt_matches_clamped_velocity(vel in -1.0e6f32..1.0e6) {
            let mut bird = Bird::new(&SimConfig::default());
            bird.vel_y = vel - GRAVITY;
            bird.integrate(GRAVITY);
            prop_assert_eq!(bird.tilt, (bird.vel_y * 3.0).clamp(-30.0, 70.0));
            prop_assert!((TILT_MIN..=TILT_MAX).contains(&bird.tilt));
        }
    }
}
