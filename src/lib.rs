//! Multi Pong - a deterministic multi-ball Pong simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, paddle control, collisions)
//! - `config`: Initial object parameters and construction-time validation
//! - `input`: Persistent key state fed in by the host's input adapter
//!
//! Rendering, raw input devices, and frame scheduling live in the host layer;
//! the host calls [`sim::tick`] once per frame and reads the public fields of
//! [`sim::GameState`] to draw.

pub mod config;
pub mod input;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use input::{InputState, Key};
pub use sim::{Arena, Ball, GameState, Paddle, tick};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (matching the reference 800x600 canvas)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults - both paddles share width and per-frame step size
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 5.0;

    /// The manual (left) paddle is larger than the autonomous one
    pub const LEFT_PADDLE_HEIGHT: f32 = 150.0;
    pub const RIGHT_PADDLE_HEIGHT: f32 = 100.0;

    /// Horizontal placement: left paddle inset from the left wall, right
    /// paddle inset from the right wall
    pub const LEFT_PADDLE_X: f32 = 10.0;
    pub const RIGHT_PADDLE_INSET: f32 = 20.0;
}
