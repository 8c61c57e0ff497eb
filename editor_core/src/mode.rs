//! Editor modes and the transition table between them

use crate::key::Key;
use serde::{Deserialize, Serialize};

/// Editor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EditorMode {
    /// Normal mode (navigation and commands)
    #[default]
    Normal,
    /// Insert mode (text entry)
    Insert,
    /// Visual mode (no selection model, only exits)
    Visual,
    /// Command mode (external command surface is open)
    Command,
}

/// Side effect attached to a mode transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEffect {
    None,
    /// Open an empty line below the cursor line and move into it
    OpenLineBelow,
    /// Show the external command surface
    OpenCommandSurface,
    /// Hide whatever command surface is showing
    CloseCommandSurface,
}

/// A single row of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    pub to: EditorMode,
    pub effect: TransitionEffect,
}

impl ModeTransition {
    const fn new(to: EditorMode, effect: TransitionEffect) -> Self {
        Self { to, effect }
    }
}

impl EditorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorMode::Normal => "NORMAL",
            EditorMode::Insert => "INSERT",
            EditorMode::Visual => "VISUAL",
            EditorMode::Command => "COMMAND",
        }
    }

    /// Look up the transition triggered by `key` in this mode.
    ///
    /// Returns `None` when the key does not change modes. Command mode leaves
    /// on any key.
    pub fn transition(self, key: &Key) -> Option<ModeTransition> {
        use EditorMode::*;
        use TransitionEffect as Fx;

        match (self, key) {
            (Normal, Key::Char('i')) => Some(ModeTransition::new(Insert, Fx::None)),
            (Normal, Key::Char('o')) => Some(ModeTransition::new(Insert, Fx::OpenLineBelow)),
            (Normal, Key::Char('v')) => Some(ModeTransition::new(Visual, Fx::None)),
            (Normal, Key::Char(':')) => {
                Some(ModeTransition::new(Command, Fx::OpenCommandSurface))
            }
            (Insert, Key::Escape) | (Visual, Key::Escape) => {
                Some(ModeTransition::new(Normal, Fx::None))
            }
            (Command, _) => Some(ModeTransition::new(Normal, Fx::CloseCommandSurface)),
            _ => None,
        }
    }
}
