//! Per-frame simulation step
//!
//! One call advances the whole simulation by one frame. Speeds are in units
//! per invocation; the host's scheduler sets the real-world cadence.

use crate::input::{InputState, Key};

use super::collision;
use super::state::{Direction, GameState};

/// Advance the simulation by one frame.
///
/// Phases, in order: ball motion, manual paddle from key state, autonomous
/// paddle tracking `balls[0]`, paddle collision resolution, horizontal-exit
/// resets.
pub fn tick(state: &mut GameState, input: &InputState) {
    let arena = state.arena;

    for ball in &mut state.balls {
        ball.step(&arena);
    }

    // Both keys are independent checks; holding both fires both moves in the
    // same frame.
    if input.is_pressed(Key::MoveUp) {
        state.left_paddle.shift(Direction::Up, &arena);
    }
    if input.is_pressed(Key::MoveDown) {
        state.left_paddle.shift(Direction::Down, &arena);
    }

    // The autonomous paddle chases the first ball only, whatever the others
    // are doing.
    if let Some(target) = state.balls.first().map(|b| b.pos.y) {
        state.right_paddle.track(target, &arena);
    }

    // Both paddle tests run for every ball; a ball matching both in one
    // frame gets two inversions (net no change).
    for ball in &mut state.balls {
        if collision::hits_left(ball, &state.left_paddle) {
            ball.vel.x = -ball.vel.x;
        }
        if collision::hits_right(ball, &state.right_paddle) {
            ball.vel.x = -ball.vel.x;
        }
    }

    for ball in &mut state.balls {
        if ball.pos.x - ball.radius <= 0.0 || ball.pos.x + ball.radius >= arena.width {
            ball.reset(&arena);
        }
    }
}
