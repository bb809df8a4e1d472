//! Read-only view of the simulation for presentation layers
//!
//! Plain data, serialisable, detached from the live state.

use serde::Serialize;

use super::collision::Crash;
use super::rect::Rect;
use super::scenery::Scenery;
use super::state::{GamePhase, GameState};
use crate::medal::Medal;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirdView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub vel_y: f32,
    pub tilt: f32,
    pub bounds: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipeView {
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
    pub top: Rect,
    pub bottom: Rect,
    pub scored: bool,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub tick: u64,
    pub bird: BirdView,
    /// Left to right
    pub pipes: Vec<PipeView>,
    pub score: u32,
    pub best_score: u32,
    pub speed: u32,
    pub spawn_interval: u32,
    pub ground_y: f32,
    pub scenery: Scenery,
    pub crash: Option<Crash>,
    pub medal: Option<Medal>,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl GameState {
    /// Capture the current frame
    pub fn snapshot(&self) -> Snapshot {
        let bird = self.bird();
        Snapshot {
            phase: self.phase(),
            tick: self.time_ticks(),
            bird: BirdView {
                x: bird.x,
                y: bird.y,
                size: bird.size,
                vel_y: bird.vel_y,
                tilt: bird.tilt,
                bounds: bird.bounds(),
            },
            pipes: self
                .pipes()
                .iter()
                .map(|pipe| PipeView {
                    x: pipe.x(),
                    width: pipe.width(),
                    gap_top: pipe.gap_top(),
                    gap_bottom: pipe.gap_bottom(),
                    top: pipe.top_bounds(),
                    bottom: pipe.bottom_bounds(),
                    scored: pipe.is_scored(),
                })
                .collect(),
            score: self.score(),
            best_score: self.best_score(),
            speed: self.speed(),
            spawn_interval: self.spawn_interval(),
            ground_y: self.ground_y(),
            scenery: self.scenery().clone(),
            crash: self.last_crash(),
            medal: self.medal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::pipe::Pipe;
    use crate::sim::tick::award_point;

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::with_seed(5);
        state.activate();
        state
            .pipes
            .push(Pipe::with_gap(300.0, 120.0, &SimConfig::default()));
        state.tick();

        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.tick, 1);
        assert_eq!(snap.bird.y, state.bird().y);
        assert_eq!(snap.bird.bounds, state.bird().bounds());
        assert_eq!(snap.pipes.len(), 1);
        assert_eq!(snap.pipes[0].x, 297.0);
        assert_eq!(snap.pipes[0].gap_bottom, 270.0);
        assert_eq!(snap.ground_y, 530.0);
        assert_eq!(snap.medal, None);
        assert_eq!(snap.crash, None);
    }

    #[test]
    fn test_snapshot_does_not_advance_state() {
        let mut state = GameState::with_seed(5);
        state.activate();
        let first = state.snapshot();
        let second = state.snapshot();
        assert_eq!(first, second);
        assert_eq!(state.time_ticks(), 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::with_seed(5);
        for _ in 0..30 {
            award_point(&mut state);
        }
        state.phase = GamePhase::GameOver;

        let json = state.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "GameOver");
        assert_eq!(value["score"], 30);
        assert_eq!(value["medal"], "Gold");
        assert_eq!(value["scenery"]["clouds"].as_array().map(Vec::len), Some(3));
    }
}
