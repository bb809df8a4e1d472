//! Game state and core simulation types
//!
//! `GameState` exclusively owns the bird, the pipe list and all counters.
//! Everything outside the `sim` module reads it through accessors or a
//! [`Snapshot`](super::Snapshot); only `tick` and `activate` mutate it.

use std::collections::VecDeque;
use std::collections::vec_deque::Drain;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::collision::Crash;
use super::pipe::Pipe;
use super::scenery::Scenery;
use crate::config::{ConfigError, SimConfig};
use crate::medal::Medal;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, bird bobs in place
    #[default]
    Menu,
    /// Active run
    Playing,
    /// Run ended, waiting for confirm
    GameOver,
}

/// Notable things that happened during a tick or activation.
///
/// Informational only: the simulation never reads them back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    Flapped,
    PipeSpawned { gap_top: f32 },
    Scored { score: u32 },
    SpeedIncreased { speed: u32 },
    SpawnIntervalShortened { interval: u32 },
    Crashed {
        crash: Crash,
        score: u32,
        best_score: u32,
        new_best: bool,
    },
    ReturnedToMenu,
}

/// Oldest events are dropped once this many are pending
pub const MAX_PENDING_EVENTS: usize = 256;

/// Complete simulation state (deterministic for a given config and seed)
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) config: SimConfig,
    /// Run seed for reproducibility
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) phase: GamePhase,
    pub(crate) bird: Bird,
    /// Spawn order, which is also left-to-right on screen
    pub(crate) pipes: Vec<Pipe>,
    pub(crate) score: u32,
    /// Best score this process has seen; never decreases
    pub(crate) best_score: u32,
    /// Pipe scroll speed (units per tick)
    pub(crate) speed: u32,
    /// Ticks between pipe spawns
    pub(crate) spawn_interval: u32,
    /// Ticks since the last spawn
    pub(crate) spawn_timer: u32,
    /// Cause of the last crash, cleared on reset
    pub(crate) last_crash: Option<Crash>,
    pub(crate) scenery: Scenery,
    /// Total ticks since construction
    pub(crate) time_ticks: u64,
    pub(crate) events: VecDeque<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(SimConfig::default(), 0)
    }
}

impl GameState {
    /// Validate `config`, then create a new game in the menu phase
    pub fn try_new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, seed))
    }

    /// Create a new game in the menu phase.
    ///
    /// The config is not validated; degenerate difficulty periods are clamped
    /// when applied. Use [`GameState::try_new`] to reject them up front.
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            phase: GamePhase::Menu,
            bird: Bird::new(&config),
            pipes: Vec::new(),
            score: 0,
            best_score: 0,
            speed: config.initial_speed,
            spawn_interval: config.initial_spawn_interval,
            spawn_timer: 0,
            last_crash: None,
            scenery: Scenery::default(),
            time_ticks: 0,
            events: VecDeque::new(),
            config,
        }
    }

    /// Default tuning with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SimConfig::default(), seed)
    }

    /// Advance the simulation by one frame
    pub fn tick(&mut self) {
        super::tick::tick(self);
    }

    /// Jump/confirm input; meaning depends on the phase
    pub fn activate(&mut self) {
        super::tick::activate(self);
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn spawn_interval(&self) -> u32 {
        self.spawn_interval
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    pub fn last_crash(&self) -> Option<Crash> {
        self.last_crash
    }

    pub fn scenery(&self) -> &Scenery {
        &self.scenery
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Top edge of the ground band
    pub fn ground_y(&self) -> f32 {
        self.config.ground_y()
    }

    /// Medal for the finished run (GameOver only)
    pub fn medal(&self) -> Option<Medal> {
        match self.phase {
            GamePhase::GameOver => Medal::for_score(self.score),
            _ => None,
        }
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Fresh bird, no pipes, score and difficulty back to their initial values.
    /// `best_score` survives.
    pub(crate) fn reset_run(&mut self) {
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.score = 0;
        self.speed = self.config.initial_speed;
        self.spawn_interval = self.config.initial_spawn_interval;
        self.spawn_timer = 0;
        self.last_crash = None;
    }
}
