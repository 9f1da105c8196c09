//! Paddle-ball collision detection
//!
//! Pure predicates; the response (flipping `vel.x`) is applied by the tick.
//! The vertical test uses only the ball's center against the paddle's y-range
//! (inclusive at both ends), ignoring the radius. That coarseness is part of
//! the simulation's contract, not something to tighten into a full
//! circle-rectangle test.

use super::state::{Ball, Paddle};

/// Has the ball reached the left paddle's front face while its center is
/// level with the paddle?
///
/// There is no far-side bound: a ball that has travelled past the paddle
/// line keeps matching until it leaves the arena and resets.
pub fn hits_left(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x - ball.radius <= paddle.pos.x + paddle.size.x
        && ball.pos.y >= paddle.pos.y
        && ball.pos.y <= paddle.pos.y + paddle.size.y
}

/// Mirror test against the right paddle's front face.
pub fn hits_right(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x + ball.radius >= paddle.pos.x
        && ball.pos.y >= paddle.pos.y
        && ball.pos.y <= paddle.pos.y + paddle.size.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Color, ControlMode};
    use glam::Vec2;

    fn ball_at(x: f32, y: f32, radius: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(3.0, 3.0), radius, Color::Blue)
    }

    fn left_paddle() -> Paddle {
        Paddle {
            pos: Vec2::new(10.0, 225.0),
            size: Vec2::new(10.0, 150.0),
            color: Color::Orange,
            control: ControlMode::Manual,
            speed: 5.0,
        }
    }

    fn right_paddle() -> Paddle {
        Paddle {
            pos: Vec2::new(780.0, 250.0),
            size: Vec2::new(10.0, 100.0),
            color: Color::White,
            control: ControlMode::Autonomous,
            speed: 5.0,
        }
    }

    #[test]
    fn left_hit_at_front_face() {
        // 20 - 10 = 10 <= 10 + 10, center y 300 within [225, 375]
        assert!(hits_left(&ball_at(20.0, 300.0, 10.0), &left_paddle()));
    }

    #[test]
    fn left_miss_when_clear_of_face() {
        assert!(!hits_left(&ball_at(31.0, 300.0, 10.0), &left_paddle()));
    }

    #[test]
    fn vertical_test_is_center_only() {
        // Circle overlaps the paddle's top edge but the center sits above
        // the y-range, so no hit.
        assert!(!hits_left(&ball_at(15.0, 220.0, 10.0), &left_paddle()));
        // Center exactly on the edge is inclusive.
        assert!(hits_left(&ball_at(15.0, 225.0, 10.0), &left_paddle()));
        assert!(hits_left(&ball_at(15.0, 375.0, 10.0), &left_paddle()));
    }

    #[test]
    fn right_hit_at_front_face() {
        assert!(hits_right(&ball_at(772.0, 300.0, 10.0), &right_paddle()));
        assert!(!hits_right(&ball_at(769.0, 300.0, 10.0), &right_paddle()));
    }

    #[test]
    fn right_miss_outside_y_range() {
        assert!(!hits_right(&ball_at(772.0, 249.0, 10.0), &right_paddle()));
    }
}
