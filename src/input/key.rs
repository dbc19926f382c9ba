//! Abstract key events.

use std::str::FromStr;

use derive_more::{Display, Error};

use crate::core::Direction;

/// A key press, independent of the device that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Space,
    Undo,
    Swap,
    Delete,
}

impl Key {
    /// The move direction of an arrow key.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Left => Some(Direction::Left),
            Key::Up => Some(Direction::Up),
            Key::Right => Some(Direction::Right),
            Key::Down => Some(Direction::Down),
            _ => None,
        }
    }
}

/// A token that names no key.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown key {_0:?}")]
pub struct UnknownKey(#[error(not(source))] pub String);

/// Parses the tokens typed at the line prompt: WASD or arrow names, `enter`
/// (or an empty line), `esc`, `space`, and `u`/`i`/`o` for the powerups.
impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let key = match token.trim().to_ascii_lowercase().as_str() {
            "w" | "up" => Key::Up,
            "s" | "down" => Key::Down,
            "a" | "left" => Key::Left,
            "d" | "right" => Key::Right,
            "" | "enter" => Key::Enter,
            "esc" | "escape" => Key::Escape,
            "space" => Key::Space,
            "u" | "undo" => Key::Undo,
            "i" | "swap" => Key::Swap,
            "o" | "delete" => Key::Delete,
            _ => return Err(UnknownKey(token.to_string())),
        };
        Ok(key)
    }
}
