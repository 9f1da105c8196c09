//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per invocation, no wall-clock time
//! - Stable ball iteration order (construction order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{hits_left, hits_right};
pub use state::{Arena, Ball, Color, ControlMode, Direction, GameState, Paddle};
pub use tick::tick;
