//! EditorCore state machine
//!
//! Dispatches editor-focused keys by mode and applies recognized gestures.
//! Focus, the space chord and persistence belong to the host session.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    buffer::TextBuffer,
    cursor::{Cursor, Position},
    gesture::Gesture,
    key::Key,
    mode::{EditorMode, TransitionEffect},
    snapshot::EditorSnapshot,
};

/// Outcome from applying a key to the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreOutcome {
    /// Key not handled in this mode (no state change)
    Continue,
    /// State changed (buffer modified, cursor moved, mode changed)
    Changed,
    /// Request IO operation from host
    RequestIo(CoreIoRequest),
    /// Show or hide an external surface
    Surface(SurfaceRequest),
}

/// IO request from editor core to host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreIoRequest {
    /// Save the buffer to the current file
    Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRequest {
    OpenCommandLine,
    Close,
}

/// The single-entry pseudo-undo log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedLine {
    pub row: usize,
    pub text: String,
    /// The line was the only one and got cleared rather than removed
    pub cleared: bool,
}

/// Editor core state machine
#[derive(Debug, Clone)]
pub struct EditorCore {
    mode: EditorMode,
    buffer: TextBuffer,
    cursor: Cursor,
    auto_symbols: bool,
    dirty: bool,
    revision: u64,
    last_deleted: Option<DeletedLine>,
}

impl EditorCore {
    /// Create a new empty editor
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Normal,
            buffer: TextBuffer::new(),
            cursor: Cursor::new(),
            auto_symbols: true,
            dirty: false,
            revision: 0,
            last_deleted: None,
        }
    }

    pub fn with_auto_symbols(mut self, enabled: bool) -> Self {
        self.auto_symbols = enabled;
        self
    }

    /// Apply a key event and return the outcome
    pub fn apply_key(&mut self, key: Key) -> CoreOutcome {
        match self.mode {
            EditorMode::Normal => self.handle_normal_mode(key),
            EditorMode::Insert => self.handle_insert_mode(key),
            EditorMode::Visual | EditorMode::Command => self.apply_transition(&key),
        }
    }

    /// Apply a gesture recognized by the host's gesture window
    pub fn apply_gesture(&mut self, gesture: Gesture) -> CoreOutcome {
        match gesture {
            Gesture::DeleteLine => self.delete_cursor_line(),
            Gesture::RestoreLine => self.restore_line(),
        }
    }

    /// Get a complete snapshot of editor state
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            mode: self.mode,
            cursor: self.cursor.position(),
            buffer_lines: self.buffer.lines().to_vec(),
            dirty: self.dirty,
        }
    }

    // Public accessors for rendering/testing
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Force a mode without running transition side effects
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Position {
        self.cursor.position()
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Counter bumped by every buffer mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last_deleted(&self) -> Option<&DeletedLine> {
        self.last_deleted.as_ref()
    }

    // Private mode handlers

    fn handle_normal_mode(&mut self, key: Key) -> CoreOutcome {
        match key {
            // Navigation
            Key::Char('h') | Key::Left => self.move_cursor(-1, 0),
            Key::Char('j') | Key::Down => self.move_cursor(0, 1),
            Key::Char('k') | Key::Up => self.move_cursor(0, -1),
            Key::Char('l') | Key::Right => self.move_cursor(1, 0),

            Key::Char('w') => CoreOutcome::RequestIo(CoreIoRequest::Save),

            _ => self.apply_transition(&key),
        }
    }

    fn handle_insert_mode(&mut self, key: Key) -> CoreOutcome {
        match key {
            Key::Escape => self.apply_transition(&key),
            Key::Enter => self.split_line(),
            Key::Backspace => self.delete_backward(),
            Key::Left => self.move_cursor(-1, 0),
            Key::Right => self.move_cursor(1, 0),
            Key::Up => self.move_cursor(0, -1),
            Key::Down => self.move_cursor(0, 1),
            Key::Char(ch) => self.insert_char(ch),
            Key::Tab => CoreOutcome::Continue,
        }
    }

    fn apply_transition(&mut self, key: &Key) -> CoreOutcome {
        let Some(transition) = self.mode.transition(key) else {
            return CoreOutcome::Continue;
        };

        tracing::debug!(from = self.mode.as_str(), to = transition.to.as_str(), "mode transition");
        self.mode = transition.to;

        match transition.effect {
            TransitionEffect::None => CoreOutcome::Changed,
            TransitionEffect::OpenLineBelow => {
                self.open_line_below();
                CoreOutcome::Changed
            }
            TransitionEffect::OpenCommandSurface => {
                CoreOutcome::Surface(SurfaceRequest::OpenCommandLine)
            }
            TransitionEffect::CloseCommandSurface => CoreOutcome::Surface(SurfaceRequest::Close),
        }
    }

    // Editing primitives

    fn insert_char(&mut self, ch: char) -> CoreOutcome {
        let pos = self.cursor.position();
        let inserted = if self.auto_symbols {
            self.buffer.insert_char(pos, ch)
        } else {
            self.buffer.insert_char_verbatim(pos, ch)
        };

        if !inserted {
            return CoreOutcome::Continue;
        }
        self.cursor.set_position(Position::new(pos.row, pos.col + 1));
        self.cursor.clamp_to_line(&self.buffer);
        self.mark_modified();
        CoreOutcome::Changed
    }

    fn split_line(&mut self) -> CoreOutcome {
        let pos = self.cursor.position();
        if !self.buffer.insert_newline(pos) {
            return CoreOutcome::Continue;
        }
        self.cursor.set_position(Position::new(pos.row + 1, 0));
        self.mark_modified();
        CoreOutcome::Changed
    }

    fn open_line_below(&mut self) {
        let row = self.cursor.position().row;
        let end = Position::new(row, self.buffer.line_length(row));
        if self.buffer.insert_newline(end) {
            self.cursor.set_position(Position::new(row + 1, 0));
            self.mark_modified();
        }
    }

    fn delete_backward(&mut self) -> CoreOutcome {
        match self.buffer.backspace(self.cursor.position()) {
            Some(new_pos) => {
                self.cursor.set_position(new_pos);
                self.mark_modified();
                CoreOutcome::Changed
            }
            None => CoreOutcome::Continue,
        }
    }

    fn delete_cursor_line(&mut self) -> CoreOutcome {
        let row = self.cursor.position().row;
        let cleared = self.buffer.line_count() == 1;
        let Some(text) = self.buffer.delete_line(row) else {
            return CoreOutcome::Continue;
        };

        tracing::debug!(row, "line deleted");
        self.last_deleted = Some(DeletedLine { row, text, cleared });
        self.cursor.set_position(Position::new(row, 0));
        self.cursor.clamp_to_line(&self.buffer);
        self.mark_modified();
        CoreOutcome::Changed
    }

    fn restore_line(&mut self) -> CoreOutcome {
        if let Some(deleted) = self.last_deleted.take() {
            let row = if deleted.cleared && self.buffer.is_empty() {
                self.buffer.set_line(0, deleted.text);
                0
            } else {
                let row = deleted.row.min(self.buffer.line_count());
                self.buffer.insert_line(row, deleted.text);
                row
            };
            self.cursor
                .set_position(Position::new(row, self.buffer.line_length(row)));
            self.mark_modified();
            return CoreOutcome::Changed;
        }

        // Nothing recorded: fall back to re-inserting the cursor line in place
        let row = self.cursor.position().row;
        if row == 0 || !self.buffer.restore_line(row, row) {
            return CoreOutcome::Continue;
        }
        self.cursor
            .set_position(Position::new(row, self.buffer.line_length(row)));
        CoreOutcome::Changed
    }

    // Cursor movement

    fn move_cursor(&mut self, dx: isize, dy: isize) -> CoreOutcome {
        let before = self.cursor.position();
        if dy != 0 {
            self.cursor.move_vertical(dy, &self.buffer);
        }
        if dx != 0 {
            self.cursor.move_horizontal(dx, &self.buffer);
        }

        if self.cursor.position() == before {
            CoreOutcome::Continue
        } else {
            CoreOutcome::Changed
        }
    }

    fn mark_modified(&mut self) {
        self.dirty = true;
        self.revision += 1;
    }

    // Public API for loading content

    /// Replace the buffer wholesale and reset the cursor to the origin
    pub fn load_lines(&mut self, lines: Vec<String>) {
        self.buffer = TextBuffer::from_lines(lines);
        self.cursor.reset();
        self.dirty = false;
        self.revision += 1;
        self.last_deleted = None;
    }

    /// Clear the dirty flag if no edit happened since `revision`
    pub fn mark_saved(&mut self, revision: u64) -> bool {
        if self.revision == revision {
            self.dirty = false;
            true
        } else {
            false
        }
    }
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new()
    }
}
