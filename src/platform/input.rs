//! Live keyboard state
//!
//! Key-down/key-up events from the host flip booleans here; control ticks
//! read them. Nothing is queued, so a tap shorter than one control tick can
//! be missed, same as a polled keyboard.

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Left,
    Down,
    Right,
    Attack,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" | "ArrowUp" => Some(Key::Up),
            "a" | "A" | "ArrowLeft" => Some(Key::Left),
            "s" | "S" | "ArrowDown" => Some(Key::Down),
            "d" | "D" | "ArrowRight" => Some(Key::Right),
            " " | "Spacebar" => Some(Key::Attack),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardState {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
    pub attack: bool,
}

impl KeyboardState {
    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Up => self.up = pressed,
            Key::Left => self.left = pressed,
            Key::Down => self.down = pressed,
            Key::Right => self.right = pressed,
            Key::Attack => self.attack = pressed,
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Left => self.left,
            Key::Down => self.down,
            Key::Right => self.right,
            Key::Attack => self.attack,
        }
    }

    /// Handle a host key-down event. Unknown keys are ignored.
    pub fn key_down(&mut self, name: &str) {
        if let Some(key) = Key::from_key_name(name) {
            self.set(key, true);
        }
    }

    /// Handle a host key-up event. Unknown keys are ignored.
    pub fn key_up(&mut self, name: &str) {
        if let Some(key) = Key::from_key_name(name) {
            self.set(key, false);
        }
    }

    /// Release everything (focus loss)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_events() {
        let mut kb = KeyboardState::default();
        kb.key_down("w");
        kb.key_down(" ");
        kb.key_down("q");
        assert!(kb.is_down(Key::Up));
        assert!(kb.attack);
        assert!(!kb.left);

        kb.key_up("W");
        assert!(!kb.up);
        kb.release_all();
        assert_eq!(kb, KeyboardState::default());
    }
}
