//! Cursor position and motion

use crate::buffer::TextBuffer;
use serde::{Deserialize, Serialize};

/// Cursor position in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// Cursor state
///
/// Invariant after every motion: `row < line_count` and `col <= line_length(row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    position: Position,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            position: Position::zero(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, pos: Position) {
        self.position = pos;
    }

    pub fn reset(&mut self) {
        self.position = Position::zero();
    }

    /// Pull the cursor back inside the buffer
    pub fn clamp_to_line(&mut self, buffer: &TextBuffer) {
        self.position.row = self.position.row.min(buffer.last_line_index());
        let line_len = buffer.line_length(self.position.row);
        if self.position.col > line_len {
            self.position.col = line_len;
        }
    }

    /// Move within the current line; never crosses line boundaries
    pub fn move_horizontal(&mut self, delta: isize, buffer: &TextBuffer) {
        let line_len = buffer.line_length(self.position.row);
        self.position.col = offset_clamped(self.position.col, delta, line_len);
    }

    /// Move between lines, keeping the column where the new line allows it
    pub fn move_vertical(&mut self, delta: isize, buffer: &TextBuffer) {
        self.position.row = offset_clamped(self.position.row, delta, buffer.last_line_index());
        self.clamp_to_line(buffer);
    }
}

fn offset_clamped(value: usize, delta: isize, max: usize) -> usize {
    let moved = if delta.is_negative() {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta.unsigned_abs())
    };
    moved.min(max)
}
