//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `tick()`
//! - Seeded RNG only
//! - Stable iteration order (pipes in spawn order)
//! - No rendering, input or platform dependencies

pub mod bird;
pub mod collision;
pub mod pipe;
pub mod rect;
pub mod scenery;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use bird::{Bird, tilt_for_velocity};
pub use collision::{Crash, check_bounds, check_collision, check_pipes};
pub use pipe::{Pipe, sample_gap_top};
pub use rect::Rect;
pub use scenery::{Cloud, Scenery};
pub use snapshot::{BirdView, PipeView, Snapshot};
pub use state::{GameEvent, GamePhase, GameState, MAX_PENDING_EVENTS};
pub use tick::{activate, tick};
