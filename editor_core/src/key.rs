//! Platform-independent key representation
//!
//! Hosts deliver raw key identifiers (`"h"`, `"ArrowLeft"`, `"Escape"`, `" "`).
//! There are no chorded modifiers: the only multi-key convention is the
//! space prefix handled by the session router.

use serde::{Deserialize, Serialize};

/// Platform-independent key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A single printable character, including `' '`
    Char(char),

    // Navigation
    Left,
    Right,
    Up,
    Down,

    // Special keys
    Enter,
    Backspace,
    Escape,
    Tab,
}

impl Key {
    /// Parse a raw host key identifier.
    ///
    /// Returns `None` for identifiers the engine does not model (function
    /// keys, modifier keys and so on); those never reach the router.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            "Enter" | "Return" => Some(Key::Enter),
            "Backspace" => Some(Key::Backspace),
            "Escape" | "Esc" => Some(Key::Escape),
            "Tab" => Some(Key::Tab),
            "Space" => Some(Key::Char(' ')),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if !ch.is_control() => Some(Key::Char(ch)),
                    _ => None,
                }
            }
        }
    }

    pub fn is_char(&self, expected: char) -> bool {
        matches!(self, Key::Char(ch) if *ch == expected)
    }
}
