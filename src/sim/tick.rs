//! Per-tick update
//!
//! The host's frame loop calls [`tick`] once per frame with the elapsed
//! seconds. All state mutation happens synchronously inside that call;
//! collaborator side effects are queued as [`GameEvent`]s.

use glam::Vec2;

use super::collision::{hits_wall, player_hitbox};
use super::state::{GameEvent, GamePhase, GameState};

/// Input sampled by the host for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// World-space position of a pointer press that began this frame
    pub pointer: Option<Vec2>,
    /// Direction-toggle key (or equivalent discrete event) pressed this frame
    pub toggle_direction: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => {
            // Only the play button matters here; presses outside it (or
            // out-of-range coordinates) fail the hit-test and are ignored
            if let Some(p) = input.pointer {
                if state.play_button().contains(p) {
                    state.events.push(GameEvent::ButtonPressed);
                    state.restart();
                }
            }
        }
        GamePhase::Playing => update(state, input, dt),
    }
}

fn update(state: &mut GameState, input: &TickInput, dt: f32) {
    // Background scroll, wrapping after one full image height
    state.background_y -= state.speeds.scroll * dt;
    if state.background_y <= -state.tuning.background_height {
        state.background_y = 0.0;
    }

    // Game music fade-in ramp
    if state.music_fading_in {
        state.music_volume += state.tuning.music_fade_rate * dt;
        if state.music_volume >= state.tuning.music_target_volume {
            state.music_volume = state.tuning.music_target_volume;
            state.music_fading_in = false;
        }
    }

    // Ship movement: constant speed, bounce at the world edges
    let dir = if state.moving_right { 1.0 } else { -1.0 };
    state.player_pos.x += dir * state.speeds.player * dt;

    let right_bound = state.world.x - state.tuning.player_size;
    if state.player_pos.x <= 0.0 {
        state.player_pos.x = 0.0;
        state.moving_right = true;
    } else if state.player_pos.x >= right_bound {
        state.player_pos.x = right_bound;
        state.moving_right = false;
    }

    // Player-driven toggle, independent of the bounds
    if input.toggle_direction {
        state.moving_right = !state.moving_right;
    }

    // Advance the wall field (recycles anchor to the pre-tick maximum)
    {
        let GameState {
            walls,
            rng,
            tuning,
            world,
            speeds,
            ..
        } = &mut *state;
        walls.advance_all(dt, speeds.wall, world.x, tuning, rng);
    }

    // Scoring: a wall counts once its top edge drops below the ship
    let player_y = state.player_pos.y;
    let wall_height = state.tuning.wall_height;
    for wall in state.walls.walls_mut() {
        if !wall.passed && wall.top(wall_height) < player_y {
            wall.passed = true;
            state.score += 1;
            state.events.push(GameEvent::WallPassed { score: state.score });
            log::debug!("Score: {}", state.score);
        }
    }

    // Collision: first hit freezes everything and ends the run
    let hitbox = player_hitbox(state.player_pos, &state.tuning);
    for wall in state.walls.walls() {
        if hits_wall(&hitbox, wall, state.world.x, &state.tuning) {
            state.speeds.zero();
            state.music_fading_in = false;
            state.events.push(GameEvent::RunEnded { score: state.score });

            if state.score > state.high_score {
                state.high_score = state.score;
                state.events.push(GameEvent::NewHighScore(state.score));
                log::info!("New high score: {}", state.high_score);
            }

            state.phase = GamePhase::GameOver;
            log::info!("Game over at score {}", state.score);
            return;
        }
    }
}
