//! Initial object parameters
//!
//! The default configuration reproduces the reference scenario exactly: five
//! balls with distinct radius/speed/color tuples, a larger manual paddle on
//! the left, a standard autonomous paddle on the right. Alternate scenarios
//! can be built in tests or loaded from JSON.
//!
//! Validation runs once, at [`crate::sim::GameState::new`]. Past that point
//! the simulation has no recoverable-error surface.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::state::{Arena, Color, ControlMode, Paddle};

/// Which paddle a configuration error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Rejected configurations
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Arena has a non-positive dimension.
    EmptyArena { width: f32, height: f32 },
    /// A ball was configured with a non-positive radius.
    BallRadius { index: usize, radius: f32 },
    /// A paddle has a non-positive width or height.
    PaddleSize { side: Side, width: f32, height: f32 },
    /// A paddle taller than the arena can never satisfy the movement
    /// boundary checks, so it would be stuck forever.
    PaddleTallerThanArena { side: Side, height: f32 },
    /// A paddle's starting y places it outside the arena.
    PaddleOutOfBounds { side: Side, y: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyArena { width, height } => {
                write!(f, "arena dimensions must be positive, got {width}x{height}")
            }
            ConfigError::BallRadius { index, radius } => {
                write!(f, "ball {index} has non-positive radius {radius}")
            }
            ConfigError::PaddleSize {
                side,
                width,
                height,
            } => {
                write!(f, "{side} paddle has non-positive size {width}x{height}")
            }
            ConfigError::PaddleTallerThanArena { side, height } => {
                write!(
                    f,
                    "{side} paddle height {height} exceeds the arena, it could never move"
                )
            }
            ConfigError::PaddleOutOfBounds { side, y } => {
                write!(f, "{side} paddle starts out of bounds at y={y}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// One ball's starting tuple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallParams {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub color: Color,
}

/// One paddle's starting tuple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddleParams {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub speed: f32,
}

impl PaddleParams {
    pub(crate) fn build(&self, control: ControlMode) -> Paddle {
        Paddle {
            pos: Vec2::new(self.x, self.y),
            size: Vec2::new(self.width, self.height),
            color: self.color,
            control,
            speed: self.speed,
        }
    }
}

/// Full initial configuration: arena bounds, ball table, two paddles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub arena: Arena,
    pub balls: Vec<BallParams>,
    pub left_paddle: PaddleParams,
    pub right_paddle: PaddleParams,
}

impl Default for GameConfig {
    fn default() -> Self {
        let ball = |x, y, radius, speed_x, speed_y, color| BallParams {
            x,
            y,
            radius,
            speed_x,
            speed_y,
            color,
        };
        Self {
            arena: Arena::new(ARENA_WIDTH, ARENA_HEIGHT),
            balls: vec![
                ball(100.0, 100.0, 10.0, 3.0, 3.0, Color::Blue),
                ball(200.0, 200.0, 20.0, 2.0, 2.0, Color::Red),
                ball(300.0, 300.0, 15.0, 4.0, 4.0, Color::Yellow),
                ball(400.0, 100.0, 12.0, 5.0, 2.0, Color::Green),
                ball(500.0, 400.0, 8.0, 3.0, 5.0, Color::Purple),
            ],
            left_paddle: PaddleParams {
                x: LEFT_PADDLE_X,
                y: ARENA_HEIGHT / 2.0 - LEFT_PADDLE_HEIGHT / 2.0,
                width: PADDLE_WIDTH,
                height: LEFT_PADDLE_HEIGHT,
                color: Color::Orange,
                speed: PADDLE_SPEED,
            },
            right_paddle: PaddleParams {
                x: ARENA_WIDTH - RIGHT_PADDLE_INSET,
                y: ARENA_HEIGHT / 2.0 - RIGHT_PADDLE_HEIGHT / 2.0,
                width: PADDLE_WIDTH,
                height: RIGHT_PADDLE_HEIGHT,
                color: Color::White,
                speed: PADDLE_SPEED,
            },
        }
    }
}

impl GameConfig {
    /// Parse a full configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the construction-time invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            return Err(ConfigError::EmptyArena {
                width: self.arena.width,
                height: self.arena.height,
            });
        }

        for (index, ball) in self.balls.iter().enumerate() {
            if ball.radius <= 0.0 {
                return Err(ConfigError::BallRadius {
                    index,
                    radius: ball.radius,
                });
            }
        }

        for (side, paddle) in [
            (Side::Left, &self.left_paddle),
            (Side::Right, &self.right_paddle),
        ] {
            if paddle.width <= 0.0 || paddle.height <= 0.0 {
                return Err(ConfigError::PaddleSize {
                    side,
                    width: paddle.width,
                    height: paddle.height,
                });
            }
            if paddle.height > self.arena.height {
                return Err(ConfigError::PaddleTallerThanArena {
                    side,
                    height: paddle.height,
                });
            }
            if paddle.y < 0.0 || paddle.y + paddle.height > self.arena.height {
                return Err(ConfigError::PaddleOutOfBounds { side, y: paddle.y });
            }
        }

        Ok(())
    }
}
