//! Game state and core simulation types
//!
//! Every entity owns its own motion behavior; the arena is an immutable
//! bounds value passed in by reference and never mutated here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};

/// The rectangular simulation bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Arena center point (ball respawn position)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Opaque color identity, consumed by the render adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Red,
    Yellow,
    Green,
    Purple,
    Orange,
    White,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::White => "white",
        }
    }
}

/// Vertical movement request for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Who drives a paddle each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    /// Driven by the host's key state
    Manual,
    /// Tracks a designated ball's vertical center
    Autonomous,
}

/// A ball entity
///
/// `pos` is the center of the circle. Balls are never destroyed; leaving the
/// arena horizontally triggers an in-place [`Ball::reset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Advance one frame: integrate velocity, then reflect off the top or
    /// bottom wall by flipping `vel.y`.
    ///
    /// The wall check runs against the post-move position and only flips the
    /// sign; the position is not corrected back in bounds, so a ball can sit
    /// partially outside the wall for one frame before the reflected motion
    /// pulls it back.
    pub fn step(&mut self, arena: &Arena) {
        self.pos += self.vel;

        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= arena.height {
            self.vel.y = -self.vel.y;
        }
    }

    /// Respawn at the arena center with horizontal direction reversed.
    ///
    /// Only `vel.x` flips; `vel.y`, radius, and color are untouched. Because
    /// the flip is unconditional, successive resets of the same ball
    /// alternate its exit direction.
    pub fn reset(&mut self, arena: &Arena) {
        self.pos = arena.center();
        self.vel.x = -self.vel.x;
    }
}

/// A paddle entity
///
/// `pos` is the top-left corner; `size` is width x height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub control: ControlMode,
    /// Fixed step per frame
    pub speed: f32,
}

impl Paddle {
    /// Vertical center of the paddle face
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Move one step up or down, rejecting the whole move if the strict
    /// boundary check blocks it (no clamping, no partial step).
    pub fn shift(&mut self, dir: Direction, arena: &Arena) {
        match dir {
            Direction::Up if self.pos.y > 0.0 => self.pos.y -= self.speed,
            Direction::Down if self.pos.y + self.size.y < arena.height => {
                self.pos.y += self.speed
            }
            _ => {}
        }
    }

    /// Chase a target y: step toward it, stand still when the target sits
    /// exactly on the paddle center. Delegates to [`Paddle::shift`], so the
    /// move silently no-ops at the arena edges.
    pub fn track(&mut self, target_y: f32, arena: &Arena) {
        if target_y < self.center_y() {
            self.shift(Direction::Up, arena);
        } else if target_y > self.center_y() {
            self.shift(Direction::Down, arena);
        }
    }
}

/// Complete simulation state (deterministic, serializable)
///
/// Ball order is construction order; index 0 is the autonomous paddle's
/// tracking target. The host reads these fields directly to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub balls: Vec<Ball>,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
}

impl GameState {
    /// Build a state from a validated configuration.
    ///
    /// This is the only constructor; it rejects configurations whose
    /// invariants would make the boundary checks unsatisfiable (see
    /// [`GameConfig::validate`]).
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let arena = config.arena;
        let balls = config
            .balls
            .iter()
            .map(|b| {
                Ball::new(
                    Vec2::new(b.x, b.y),
                    Vec2::new(b.speed_x, b.speed_y),
                    b.radius,
                    b.color,
                )
            })
            .collect();

        Ok(Self {
            arena,
            balls,
            left_paddle: config.left_paddle.build(ControlMode::Manual),
            right_paddle: config.right_paddle.build(ControlMode::Autonomous),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0)
    }

    fn ball(x: f32, y: f32, radius: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), radius, Color::Blue)
    }

    fn paddle(y: f32, height: f32) -> Paddle {
        Paddle {
            pos: Vec2::new(10.0, y),
            size: Vec2::new(10.0, height),
            color: Color::Orange,
            control: ControlMode::Manual,
            speed: 5.0,
        }
    }

    #[test]
    fn ball_step_integrates_velocity() {
        let mut b = ball(100.0, 100.0, 10.0, 3.0, 3.0);
        b.step(&arena());
        assert_eq!(b.pos, Vec2::new(103.0, 103.0));
        assert_eq!(b.vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn ball_step_reflects_off_top_using_post_move_position() {
        // y - radius = -6 <= 0 before the move; the check still runs after
        // integration, so the ball ends at (8, 7) with vel.y flipped.
        let mut b = ball(5.0, 4.0, 10.0, 3.0, 3.0);
        b.step(&arena());
        assert_eq!(b.pos, Vec2::new(8.0, 7.0));
        assert_eq!(b.vel, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn ball_step_reflects_off_bottom() {
        let mut b = ball(100.0, 595.0, 10.0, 2.0, 4.0);
        b.step(&arena());
        // 599 + 10 >= 600
        assert_eq!(b.pos, Vec2::new(102.0, 599.0));
        assert_eq!(b.vel.y, -4.0);
    }

    #[test]
    fn ball_step_no_reflection_in_open_field() {
        let mut b = ball(400.0, 300.0, 10.0, -3.0, -3.0);
        b.step(&arena());
        assert_eq!(b.vel, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn ball_reset_lands_at_center_and_flips_heading() {
        let mut b = ball(795.0, 123.0, 10.0, 3.0, 5.0);
        b.reset(&arena());
        assert_eq!(b.pos, Vec2::new(400.0, 300.0));
        assert_eq!(b.vel, Vec2::new(-3.0, 5.0));
    }

    #[test]
    fn ball_double_reset_restores_heading() {
        let mut b = ball(795.0, 123.0, 10.0, 3.0, 5.0);
        b.reset(&arena());
        b.reset(&arena());
        assert_eq!(b.vel.x, 3.0);
    }

    #[test]
    fn paddle_shift_up_blocked_exactly_at_top() {
        let mut p = paddle(0.0, 150.0);
        p.shift(Direction::Up, &arena());
        assert_eq!(p.pos.y, 0.0);
    }

    #[test]
    fn paddle_shift_up_allowed_one_step_from_top() {
        let mut p = paddle(5.0, 150.0);
        p.shift(Direction::Up, &arena());
        assert_eq!(p.pos.y, 0.0);
    }

    #[test]
    fn paddle_shift_down_blocked_exactly_at_bottom() {
        let mut p = paddle(450.0, 150.0);
        p.shift(Direction::Down, &arena());
        assert_eq!(p.pos.y, 450.0);
    }

    #[test]
    fn paddle_track_holds_still_on_exact_center() {
        let mut p = paddle(225.0, 150.0);
        p.track(300.0, &arena());
        assert_eq!(p.pos.y, 225.0);
    }

    #[test]
    fn paddle_track_steps_toward_target() {
        let mut p = paddle(225.0, 150.0);
        p.track(100.0, &arena());
        assert_eq!(p.pos.y, 220.0);
        p.track(500.0, &arena());
        assert_eq!(p.pos.y, 225.0);
    }

    #[test]
    fn paddle_track_noops_at_edge() {
        let mut p = paddle(0.0, 150.0);
        p.track(-50.0, &arena());
        assert_eq!(p.pos.y, 0.0);
    }

    proptest! {
        /// A paddle starting in bounds on a step-aligned y never leaves
        /// [0, height - size.y] under any move sequence.
        #[test]
        fn paddle_stays_in_bounds(
            start_step in 0u32..=90,
            dirs in proptest::collection::vec(proptest::bool::ANY, 0..200),
        ) {
            let a = arena();
            let mut p = paddle(start_step as f32 * 5.0, 150.0);
            for up in dirs {
                let dir = if up { Direction::Up } else { Direction::Down };
                p.shift(dir, &a);
                prop_assert!(p.pos.y >= 0.0);
                prop_assert!(p.pos.y + p.size.y <= a.height);
            }
        }

        /// Reset is position-idempotent and heading-involutive.
        #[test]
        fn reset_round_trips_heading(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            vx in -10.0f32..10.0,
            vy in -10.0f32..10.0,
        ) {
            let a = arena();
            let mut b = ball(x, y, 10.0, vx, vy);
            b.reset(&a);
            prop_assert_eq!(b.pos, a.center());
            prop_assert_eq!(b.vel.y, vy);
            b.reset(&a);
            prop_assert_eq!(b.vel.x, vx);
        }
    }
}
