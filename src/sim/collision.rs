//! Crash detection
//!
//! Two independent triggers end a run: leaving the vertical play area, or the
//! bird's hitbox overlapping a pipe section. Bounds are checked first; the
//! first trigger found is reported.

use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipe::Pipe;

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crash {
    /// Bird's bottom edge entered the ground band
    Ground,
    /// Bird flew above the top of the screen
    Ceiling,
    /// Hitbox overlapped a pipe (index into the pipe list, spawn order)
    Pipe { index: usize },
}

/// Check the play-area bounds. Uses the sprite, not the inset hitbox.
pub fn check_bounds(bird: &Bird, ground_y: f32) -> Option<Crash> {
    if bird.bottom() > ground_y {
        Some(Crash::Ground)
    } else if bird.y < 0.0 {
        Some(Crash::Ceiling)
    } else {
        None
    }
}

/// First pipe whose top or bottom section overlaps the bird's hitbox
pub fn check_pipes(bird: &Bird, pipes: &[Pipe]) -> Option<Crash> {
    let hitbox = bird.bounds();
    pipes
        .iter()
        .position(|pipe| {
            hitbox.intersects(&pipe.top_bounds()) || hitbox.intersects(&pipe.bottom_bounds())
        })
        .map(|index| Crash::Pipe { index })
}

/// Full crash check for one tick
pub fn check_collision(bird: &Bird, pipes: &[Pipe], ground_y: f32) -> Option<Crash> {
    check_bounds(bird, ground_y).or_else(|| check_pipes(bird, pipes))
}
