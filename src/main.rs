//! Multi Pong headless entry point
//!
//! Runs the simulation without a renderer: build a state (default config, or
//! a JSON file given as the first argument), advance a fixed number of
//! frames, and log where everything ended up. Useful for eyeballing
//! determinism and exercising the library end to end.

use std::env;
use std::error::Error;
use std::fs;

use multi_pong::GameConfig;
use multi_pong::input::InputState;
use multi_pong::sim::{GameState, tick};

/// Frames to simulate (10 seconds at a 60 Hz host cadence)
const DEMO_FRAMES: u32 = 600;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {path}");
            GameConfig::from_json(&fs::read_to_string(&path)?)?
        }
        None => GameConfig::default(),
    };

    let mut state = GameState::new(config)?;
    let input = InputState::default();

    for _ in 0..DEMO_FRAMES {
        tick(&mut state, &input);
    }

    log::info!("Simulated {DEMO_FRAMES} frames");
    for ball in &state.balls {
        log::info!(
            "ball {:>6}: pos=({:.0}, {:.0}) vel=({}, {})",
            ball.color.as_str(),
            ball.pos.x,
            ball.pos.y,
            ball.vel.x,
            ball.vel.y,
        );
    }
    log::info!(
        "paddles: left y={} right y={}",
        state.left_paddle.pos.y,
        state.right_paddle.pos.y
    );

    Ok(())
}
