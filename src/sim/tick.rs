//! Fixed-step simulation tick
//!
//! One handler per phase for both entry points. A tick in `Playing` runs, in order:
//! bird physics, ground scroll, spawning, pipe scroll with scoring and culling,
//! then the crash check.

use super::collision::{Crash, check_collision};
use super::pipe::Pipe;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;

    // Ambient decorations run in every phase
    let width = state.config.screen_width;
    state.scenery.drift_clouds(width);
    state.scenery.fade_flash(state.config.flash_decay);

    match state.phase {
        GamePhase::Menu => tick_menu(state),
        GamePhase::Playing => tick_playing(state),
        // Frozen until the player confirms
        GamePhase::GameOver => {}
    }
}

/// Handle a jump/confirm input
pub fn activate(state: &mut GameState) {
    match state.phase {
        GamePhase::Menu => {
            start_run(state);
            flap(state);
        }
        GamePhase::Playing => flap(state),
        GamePhase::GameOver => return_to_menu(state),
    }
}

fn tick_menu(state: &mut GameState) {
    let offset = state
        .scenery
        .advance_bob(state.config.menu_bob_rate, state.config.menu_bob_amplitude);
    state.bird.y = state.config.bird_start_y() + offset;
    state
        .scenery
        .scroll_ground(state.config.menu_ground_speed, state.config.ground_tile);
}

fn tick_playing(state: &mut GameState) {
    state.bird.integrate(state.config.gravity);
    state
        .scenery
        .scroll_ground(state.speed as f32, state.config.ground_tile);

    state.spawn_timer += 1;
    if state.spawn_timer >= state.spawn_interval {
        spawn_pipe(state);
        state.spawn_timer = 0;
    }

    advance_pipes(state);

    if let Some(crash) = check_collision(&state.bird, &state.pipes, state.config.ground_y()) {
        end_run(state, crash);
    }
}

fn spawn_pipe(state: &mut GameState) {
    let pipe = Pipe::spawn(&mut state.rng, &state.config);
    log::debug!("Pipe spawned with gap top {}", pipe.gap_top());
    state.push_event(GameEvent::PipeSpawned {
        gap_top: pipe.gap_top(),
    });
    state.pipes.push(pipe);
}

/// Scroll every pipe, score the ones the bird has passed, drop the ones off screen.
///
/// Scoring is evaluated before culling so a pipe leaving the screen on the same
/// tick it is passed still counts.
fn advance_pipes(state: &mut GameState) {
    let bird_x = state.bird.x;
    for i in 0..state.pipes.len() {
        // Speed is re-read per pipe: a difficulty step applies to the rest of this tick
        let speed = state.speed as f32;
        let pipe = &mut state.pipes[i];
        pipe.advance(speed);
        if pipe.trailing_edge() < bird_x && pipe.mark_scored() {
            award_point(state);
        }
    }
    state.pipes.retain(|pipe| !pipe.is_offscreen());
}

/// Add one point and apply the stepped difficulty curve
pub(crate) fn award_point(state: &mut GameState) {
    state.score += 1;
    let score = state.score;
    log::debug!("Scored: {score}");
    state.push_event(GameEvent::Scored { score });

    // Zero periods are rejected by validation; clamp them for unvalidated configs
    let speed_every = state.config.speed_step_every.max(1);
    let spawn_every = state.config.spawn_step_every.max(1);

    if score % speed_every == 0 && state.speed < state.config.max_speed {
        state.speed += 1;
        let speed = state.speed;
        log::debug!("Speed up to {speed}");
        state.push_event(GameEvent::SpeedIncreased { speed });
    }

    let config = &state.config;
    if score % spawn_every == 0 && state.spawn_interval > config.min_spawn_interval {
        state.spawn_interval = state
            .spawn_interval
            .saturating_sub(config.spawn_interval_step)
            .max(config.min_spawn_interval)
            .max(1);
        let interval = state.spawn_interval;
        log::debug!("Spawn interval down to {interval}");
        state.push_event(GameEvent::SpawnIntervalShortened { interval });
    }
}

fn flap(state: &mut GameState) {
    state.bird.flap(state.config.jump_velocity);
    state.push_event(GameEvent::Flapped);
}

fn start_run(state: &mut GameState) {
    state.reset_run();
    state.scenery.flash = 0.0;
    state.phase = GamePhase::Playing;
    log::info!("Run started (seed {}, tick {})", state.seed, state.time_ticks);
    state.push_event(GameEvent::RunStarted);
}

fn end_run(state: &mut GameState, crash: Crash) {
    let new_best = state.score > state.best_score;
    state.best_score = state.best_score.max(state.score);
    state.phase = GamePhase::GameOver;
    state.last_crash = Some(crash);
    state.scenery.trigger_flash(state.config.flash_max);

    log::info!(
        "Crashed ({:?}) with score {} (best {})",
        crash,
        state.score,
        state.best_score
    );
    state.push_event(GameEvent::Crashed {
        crash,
        score: state.score,
        best_score: state.best_score,
        new_best,
    });
}

fn return_to_menu(state: &mut GameState) {
    state.reset_run();
    state.scenery.reset_for_menu();
    state.phase = GamePhase::Menu;
    log::info!("Back to menu (best {})", state.best_score);
    state.push_event(GameEvent::ReturnedToMenu);
}
