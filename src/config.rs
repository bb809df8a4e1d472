//! Simulation tuning
//!
//! Every gameplay number lives here so a run can be re-tuned from a JSON file
//! without touching the simulation. `Default` reproduces the reference game.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`SimConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Simulation tuning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Ground band height; the bird crashes once its bottom edge enters it
    pub ground_height: f32,
    /// Period of the scrolling ground pattern
    pub ground_tile: f32,

    // === Bird ===
    /// Added to vertical velocity every Playing tick
    pub gravity: f32,
    /// Velocity set (not added) by a flap
    pub jump_velocity: f32,
    pub bird_x: f32,
    pub bird_size: f32,
    pub bird_hitbox_inset: f32,

    // === Pipes ===
    pub pipe_width: f32,
    pub gap_height: f32,
    pub min_gap_y: f32,
    pub gap_bottom_margin: f32,

    // === Difficulty ===
    pub initial_speed: u32,
    pub max_speed: u32,
    /// Speed goes up by one every this many points
    pub speed_step_every: u32,
    pub initial_spawn_interval: u32,
    pub min_spawn_interval: u32,
    pub spawn_interval_step: u32,
    /// Spawn interval shrinks every this many points
    pub spawn_step_every: u32,

    // === Presentation hints ===
    pub flash_max: f32,
    pub flash_decay: f32,
    pub menu_bob_rate: f32,
    pub menu_bob_amplitude: f32,
    pub menu_ground_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            ground_tile: GROUND_TILE,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            bird_x: BIRD_X,
            bird_size: BIRD_SIZE,
            bird_hitbox_inset: BIRD_HITBOX_INSET,

            pipe_width: PIPE_WIDTH,
            gap_height: PIPE_GAP,
            min_gap_y: MIN_GAP_Y,
            gap_bottom_margin: GAP_BOTTOM_MARGIN,

            initial_speed: INITIAL_SPEED,
            max_speed: MAX_SPEED,
            speed_step_every: SPEED_STEP_EVERY,
            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            spawn_interval_step: SPAWN_INTERVAL_STEP,
            spawn_step_every: SPAWN_STEP_EVERY,

            flash_max: FLASH_MAX,
            flash_decay: FLASH_DECAY,
            menu_bob_rate: MENU_BOB_RATE,
            menu_bob_amplitude: MENU_BOB_AMPLITUDE,
            menu_ground_speed: MENU_GROUND_SPEED,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Top edge of the ground band
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Lowest allowed gap top
    #[inline]
    pub fn max_gap_y(&self) -> f32 {
        self.screen_height - self.gap_bottom_margin
    }

    /// Bird resting height: vertically centred on screen
    #[inline]
    pub fn bird_start_y(&self) -> f32 {
        self.screen_height / 2.0 - self.bird_size / 2.0
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(msg: impl Into<String>) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(msg.into()))
        }

        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ground_tile", self.ground_tile),
            ("bird_size", self.bird_size),
            ("pipe_width", self.pipe_width),
            ("gap_height", self.gap_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return invalid(format!("{name} must be positive, got {value}"));
            }
        }

        if !(0.0..self.screen_height).contains(&self.ground_height) {
            return invalid("ground_height must lie inside the screen");
        }
        if self.bird_hitbox_inset < 0.0 || self.bird_hitbox_inset * 2.0 >= self.bird_size {
            return invalid("bird_hitbox_inset must leave a non-empty hitbox");
        }

        // Sampled gap tops are whole units
        let min_gap = self.min_gap_y.ceil();
        let max_gap = self.max_gap_y().floor();
        if min_gap < 0.0 || min_gap > max_gap {
            return invalid(format!(
                "gap range [{}, {}] is empty or off screen",
                self.min_gap_y,
                self.max_gap_y()
            ));
        }
        if max_gap + self.gap_height > self.screen_height {
            return invalid("gap must end above the bottom of the screen");
        }

        if self.initial_speed == 0 || self.max_speed < self.initial_speed {
            return invalid("speeds must satisfy 0 < initial_speed <= max_speed");
        }
        if self.min_spawn_interval == 0 || self.min_spawn_interval > self.initial_spawn_interval {
            return invalid(
                "intervals must satisfy 0 < min_spawn_interval <= initial_spawn_interval",
            );
        }
        if self.speed_step_every == 0 || self.spawn_step_every == 0 {
            return invalid("difficulty step periods must be non-zero");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ground_y(), 530.0);
        assert_eq!(config.max_gap_y(), 400.0);
        assert_eq!(config.bird_start_y(), 285.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimConfig::from_json(r#"{ "gravity": 0.4, "max_speed": 8 }"#).unwrap();
        assert_eq!(config.gravity, 0.4);
        assert_eq!(config.max_speed, 8);
        assert_eq!(config.screen_width, SCREEN_WIDTH);
        assert_eq!(config.initial_spawn_interval, INITIAL_SPAWN_INTERVAL);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = SimConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_empty_gap_range() {
        let err = SimConfig::from_json(r#"{ "min_gap_y": 450.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_speed_and_interval() {
        let config = SimConfig {
            initial_speed: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimConfig {
            min_spawn_interval: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimConfig {
            min_spawn_interval: 120,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
