//! Scrolling pipe pairs
//!
//! A pipe is a full-height column with a single gap. Only `x` and the scored
//! flag change after spawn; the gap is fixed for the pipe's lifetime.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::SimConfig;

/// A pipe pair with a gap the bird must pass through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    x: f32,
    gap_top: f32,
    gap_height: f32,
    width: f32,
    screen_height: f32,
    scored: bool,
}

impl Pipe {
    /// Spawn a pipe at the right edge of the screen with a random gap
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &SimConfig) -> Self {
        let gap_top = sample_gap_top(rng, config);
        Self::with_gap(config.screen_width, gap_top, config)
    }

    /// Build a pipe with an explicit leading edge and gap top
    pub(crate) fn with_gap(x: f32, gap_top: f32, config: &SimConfig) -> Self {
        debug_assert!(
            gap_top >= 0.0 && gap_top + config.gap_height <= config.screen_height,
            "gap [{gap_top}, {}] leaves the screen",
            gap_top + config.gap_height
        );
        Self {
            x,
            gap_top,
            gap_height: config.gap_height,
            width: config.pipe_width,
            screen_height: config.screen_height,
            scored: false,
        }
    }

    /// Scroll left by `speed` units
    #[inline]
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Leading (left) edge
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Trailing (right) edge
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_top
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_height
    }

    #[inline]
    pub fn is_scored(&self) -> bool {
        self.scored
    }

    /// Flag the pipe as passed. Returns true only on the first call.
    pub(crate) fn mark_scored(&mut self) -> bool {
        let first = !self.scored;
        self.scored = true;
        first
    }

    /// Upper pipe section, from the top of the screen down to the gap
    pub fn top_bounds(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top)
    }

    /// Lower pipe section, from the gap down to the bottom of the screen
    pub fn bottom_bounds(&self) -> Rect {
        let bottom_y = self.gap_bottom();
        Rect::new(self.x, bottom_y, self.width, self.screen_height - bottom_y)
    }

    /// Fully scrolled past the left edge
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}

/// Uniform whole-unit gap top in `[min_gap_y, screen_height - gap_bottom_margin]`
pub fn sample_gap_top<R: Rng + ?Sized>(rng: &mut R, config: &SimConfig) -> f32 {
    let min = config.min_gap_y.ceil() as i32;
    let max = (config.max_gap_y().floor() as i32).max(min);
    rng.random_range(min..=max) as f32
}
