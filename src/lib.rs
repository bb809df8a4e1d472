//! Flappy - a side-scrolling arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipes, collisions, game phases)
//! - `config`: Data-driven tuning, loadable from JSON
//! - `medal`: End-of-run medal classification
//!
//! Rendering and input wiring live outside this crate. A presentation layer calls
//! [`GameState::tick`] once per frame and [`GameState::activate`] on every
//! jump/confirm event, then draws from [`GameState::snapshot`].

pub mod config;
pub mod medal;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use medal::Medal;
pub use sim::{GameEvent, GamePhase, GameState, Snapshot};

/// Game configuration constants (reference behaviour)
pub mod consts {
    /// Frame period of the reference driver (~60 Hz)
    pub const TICK_MS: u64 = 16;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Height of the ground band at the bottom of the screen
    pub const GROUND_HEIGHT: f32 = 70.0;
    /// Period of the scrolling ground pattern
    pub const GROUND_TILE: f32 = 24.0;

    /// Bird physics (units per tick)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_VELOCITY: f32 = -8.5;
    pub const BIRD_X: f32 = 80.0;
    pub const BIRD_SIZE: f32 = 30.0;
    /// Hitbox is inset from the drawn circle on every side
    pub const BIRD_HITBOX_INSET: f32 = 4.0;

    /// Tilt is velocity * factor, clamped to [min, max] degrees
    pub const TILT_FACTOR: f32 = 3.0;
    pub const TILT_MIN: f32 = -30.0;
    pub const TILT_MAX: f32 = 70.0;

    /// Pipe geometry
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 150.0;
    pub const MIN_GAP_Y: f32 = 80.0;
    /// Lowest gap top is screen height minus this margin
    pub const GAP_BOTTOM_MARGIN: f32 = 200.0;

    /// Difficulty curve
    pub const INITIAL_SPEED: u32 = 3;
    pub const MAX_SPEED: u32 = 6;
    pub const SPEED_STEP_EVERY: u32 = 5;
    pub const INITIAL_SPAWN_INTERVAL: u32 = 100;
    pub const MIN_SPAWN_INTERVAL: u32 = 70;
    pub const SPAWN_INTERVAL_STEP: u32 = 5;
    pub const SPAWN_STEP_EVERY: u32 = 10;

    /// Crash flash (alpha 0-255 scale)
    pub const FLASH_MAX: f32 = 200.0;
    pub const FLASH_DECAY: f32 = 15.0;

    /// Menu idle animation
    pub const MENU_BOB_RATE: f32 = 0.05;
    pub const MENU_BOB_AMPLITUDE: f32 = 15.0;
    pub const MENU_GROUND_SPEED: f32 = 2.0;
}
