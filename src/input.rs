//! Persistent key state
//!
//! The host's input adapter translates raw key-down/key-up events into this
//! boolean state; the simulation reads it once per tick. State persists
//! across frames until an explicit release, it is never auto-cleared.

/// Logical keys the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move the manual paddle up
    MoveUp,
    /// Move the manual paddle down
    MoveDown,
}

/// Pressed/released state per logical key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    up: bool,
    down: bool,
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        *self.slot(key) = true;
    }

    pub fn release(&mut self, key: Key) {
        *self.slot(key) = false;
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::MoveUp => self.up,
            Key::MoveDown => self.down,
        }
    }

    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::MoveUp => &mut self.up,
            Key::MoveDown => &mut self.down,
        }
    }
}
