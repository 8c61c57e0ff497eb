//! Read-only view of a session for presentation layers

use editor_core::{EditorMode, Position};
use serde::{Deserialize, Serialize};

use crate::focus::FocusTarget;
use crate::save_status::SaveStatus;
use crate::session::Surface;

/// One row of the flattened file tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRow {
    pub name: String,
    pub depth: usize,
    pub is_folder: bool,
}

/// Everything a renderer needs after a state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub lines: Vec<String>,
    pub cursor: Position,
    pub mode: EditorMode,
    pub focus: FocusTarget,
    pub tree: Vec<TreeRow>,
    /// Selected index into `tree`
    pub selection: usize,
    pub save_status: SaveStatus,
    pub save_message: String,
    pub active_file: Option<String>,
    /// Language id of the active file, for highlighting
    pub language: Option<String>,
    pub surface: Option<Surface>,
    pub dirty: bool,
}

impl RenderSnapshot {
    /// `Mode: NORMAL | File: index.ts`
    pub fn status_line(&self) -> String {
        format!(
            "Mode: {} | File: {}",
            self.mode.as_str(),
            self.active_file.as_deref().unwrap_or("None")
        )
    }

    /// `Cursor 3:7`, followed by the save message when there is one
    pub fn cursor_line(&self) -> String {
        let mut line = format!("Cursor {}:{}", self.cursor.row + 1, self.cursor.col + 1);
        if !self.save_message.is_empty() {
            line.push_str(" * ");
            line.push_str(&self.save_message);
        }
        line
    }
}
