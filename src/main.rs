//! Flappy headless driver
//!
//! Runs the simulation on a fixed-step clock with a simple autopilot standing in
//! for the player, and logs each run. Set `RUST_LOG=debug` for per-event output.
//!
//! Usage: `flappy-sim [CONFIG_JSON] [SEED] [--fast]`

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use flappy_sim::consts::TICK_MS;
use flappy_sim::sim::{GameEvent, GamePhase, GameState};
use flappy_sim::{ConfigError, Medal, SimConfig};

/// Runs to play before exiting
const MAX_RUNS: u32 = 3;
/// Safety cap so a perfect autopilot still terminates (about five minutes at 60 Hz)
const MAX_TICKS_PER_RUN: u64 = 60 * 60 * 5;
/// Maximum catch-up ticks per frame to prevent a spiral of death
const MAX_SUBSTEPS: u32 = 8;
/// Menu/game-over dwell before the autopilot confirms
const DWELL_TICKS: u64 = 30;

/// Headless flappy simulation driver
#[derive(Debug, Parser)]
#[command(name = "flappy-sim", about = "Run the flappy simulation headless with an autopilot")]
struct Args {
    /// JSON tuning file; defaults to the reference game
    config: Option<PathBuf>,
    /// RNG seed for pipe placement
    #[arg(default_value_t = 0)]
    seed: u64,
    /// Tick as fast as possible instead of at ~60 Hz
    #[arg(long)]
    fast: bool,
}

/// Flap when the bird sinks below the centre of the next gap
fn autopilot_wants_flap(state: &GameState) -> bool {
    let bird = state.bird();
    let target_y = state
        .pipes()
        .iter()
        .find(|pipe| pipe.trailing_edge() >= bird.x)
        .map(|pipe| (pipe.gap_top() + pipe.gap_bottom()) / 2.0)
        .unwrap_or(state.config().screen_height / 2.0);

    bird.vel_y >= 0.0 && bird.center().y > target_y + 10.0
}

/// Fixed-step accumulator driving the simulation from wall-clock time
struct Driver {
    state: GameState,
    accumulator: Duration,
    last_time: Instant,
    phase_ticks: u64,
    runs: u32,
    stopped: bool,
}

impl Driver {
    fn new(state: GameState) -> Self {
        Self {
            state,
            accumulator: Duration::ZERO,
            last_time: Instant::now(),
            phase_ticks: 0,
            runs: 0,
            stopped: false,
        }
    }

    fn finished(&self) -> bool {
        self.stopped || (self.runs >= MAX_RUNS && self.state.phase() != GamePhase::Playing)
    }

    /// Feed input for this step, advance one tick, report events
    fn step(&mut self) {
        let phase = self.state.phase();
        let confirm = match phase {
            GamePhase::Menu | GamePhase::GameOver => self.phase_ticks >= DWELL_TICKS,
            GamePhase::Playing => autopilot_wants_flap(&self.state),
        };
        if confirm && !self.finished() {
            self.state.activate();
        }

        self.state.tick();

        if phase == GamePhase::Playing && self.phase_ticks >= MAX_TICKS_PER_RUN {
            log::warn!("Run {} hit the tick cap, stopping", self.runs + 1);
            self.stopped = true;
        }

        self.phase_ticks = if self.state.phase() == phase {
            self.phase_ticks + 1
        } else {
            0
        };

        for event in self.state.drain_events() {
            match event {
                GameEvent::Crashed {
                    crash,
                    score,
                    best_score,
                    new_best,
                } => {
                    self.runs += 1;
                    let medal = Medal::for_score(score).map_or("no medal", |m| m.as_str());
                    log::info!(
                        "Run {}: score {} ({:?}, {}), best {}{}",
                        self.runs,
                        score,
                        crash,
                        medal,
                        best_score,
                        if new_best { " - new best!" } else { "" }
                    );
                }
                GameEvent::SpeedIncreased { speed } => log::info!("Speed {speed}"),
                other => log::debug!("{other:?}"),
            }
        }
    }

    /// Run as many ticks as wall-clock time allows
    fn update(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_time).min(Duration::from_millis(100));
        self.last_time = now;
        self.accumulator += dt;

        let tick = Duration::from_millis(TICK_MS);
        let mut substeps = 0;
        while self.accumulator >= tick && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= tick;
            substeps += 1;
        }
    }
}

fn run(args: Args) -> Result<(), ConfigError> {
    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    log::info!("Flappy (headless) starting with seed {}", args.seed);
    let mut driver = Driver::new(GameState::try_new(config, args.seed)?);

    while !driver.finished() {
        if args.fast {
            driver.step();
        } else {
            driver.update();
            std::thread::sleep(Duration::from_millis(TICK_MS / 4));
        }
    }

    let final_frame = driver.state.snapshot();
    match final_frame.to_json() {
        Ok(json) => log::debug!("Final frame: {json}"),
        Err(e) => log::warn!("Could not serialise final frame: {e}"),
    }
    log::info!(
        "Done after {} runs, best score {}",
        driver.runs,
        driver.state.best_score()
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["flappy-sim"]).unwrap();
        assert_eq!(args.config, None);
        assert_eq!(args.seed, 0);
        assert!(!args.fast);
    }

    #[test]
    fn test_args_config_seed_and_fast() {
        let args = Args::try_parse_from(["flappy-sim", "tuning.json", "42", "--fast"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("tuning.json")));
        assert_eq!(args.seed, 42);
        assert!(args.fast);
    }

    #[test]
    fn test_args_reject_bad_seed_and_extras() {
        assert!(Args::try_parse_from(["flappy-sim", "tuning.json", "12abc"]).is_err());
        assert!(Args::try_parse_from(["flappy-sim", "a.json", "1", "extra"]).is_err());
    }

    #[test]
    fn test_autopilot_flaps_below_target() {
        let mut state = GameState::with_seed(1);
        state.activate();
        // Rising bird never flaps
        assert!(!autopilot_wants_flap(&state));
        while state.bird().vel_y < 0.0 {
            state.tick();
        }
        // Apex at 217 is above the screen centre
        assert!(!autopilot_wants_flap(&state));
        while state.bird().center().y <= 310.0 {
            state.tick();
        }
        assert!(autopilot_wants_flap(&state));
    }
}
