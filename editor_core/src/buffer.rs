//! Text buffer with line-based storage
//!
//! Columns are character indices, not byte offsets: the list glyphs written
//! by auto-symbol substitution are multi-byte in UTF-8.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::cursor::Position;

/// Glyph substituted for a leading `-`
pub const BULLET: char = '•';
/// Glyph substituted for a leading `x`
pub const CHECKED_BOX: char = '☒';

/// Text buffer with line-based storage.
///
/// Always holds at least one line so a cursor can exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            return Self::new();
        }
        Self { lines }
    }

    pub fn from_string(content: &str) -> Self {
        Self::from_lines(content.lines().map(String::from).collect())
    }

    pub fn as_string(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn last_line_index(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Length of a line in characters (0 for rows past the end)
    pub fn line_length(&self, row: usize) -> usize {
        self.lines.get(row).map(|s| s.chars().count()).unwrap_or(0)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Insert a character at position, then run auto-symbol substitution on
    /// that line.
    pub fn insert_char(&mut self, pos: Position, ch: char) -> bool {
        if !self.insert_char_verbatim(pos, ch) {
            return false;
        }
        self.substitute_list_marker(pos.row);
        true
    }

    /// Insert a character at position without substitution
    pub fn insert_char_verbatim(&mut self, pos: Position, ch: char) -> bool {
        let Some(line) = self.lines.get_mut(pos.row) else {
            return false;
        };
        let Some(offset) = byte_offset(line, pos.col) else {
            return false;
        };

        line.insert(offset, ch);
        true
    }

    /// Replace a leading `-` or `x` marker (after indentation) with its glyph.
    ///
    /// Only the marker character changes, so the line keeps its length in
    /// characters. Returns true if the line was rewritten.
    pub fn substitute_list_marker(&mut self, row: usize) -> bool {
        let Some(line) = self.lines.get_mut(row) else {
            return false;
        };

        let indent = line.len() - line.trim_start().len();
        let glyph = match line[indent..].chars().next() {
            Some('-') => BULLET,
            Some('x') => CHECKED_BOX,
            _ => return false,
        };

        let mut encoded = [0u8; 4];
        line.replace_range(indent..indent + 1, glyph.encode_utf8(&mut encoded));
        true
    }

    /// Split the line at position; the tail becomes a new line right after it
    pub fn insert_newline(&mut self, pos: Position) -> bool {
        let Some(line) = self.lines.get_mut(pos.row) else {
            return false;
        };
        let Some(offset) = byte_offset(line, pos.col) else {
            return false;
        };

        let rest = line.split_off(offset);
        self.lines.insert(pos.row + 1, rest);
        true
    }

    /// Delete character before position (backspace)
    ///
    /// Returns the new cursor position, or `None` at the start of the buffer.
    pub fn backspace(&mut self, pos: Position) -> Option<Position> {
        if pos.row >= self.lines.len() {
            return None;
        }

        if pos.col > 0 {
            let line = &mut self.lines[pos.row];
            let offset = byte_offset(line, pos.col - 1)?;
            line.remove(offset);
            Some(Position::new(pos.row, pos.col - 1))
        } else if pos.row > 0 {
            // Join with previous line
            let current_line = self.lines.remove(pos.row);
            let prev_line = &mut self.lines[pos.row - 1];
            let new_col = prev_line.chars().count();
            prev_line.push_str(&current_line);
            Some(Position::new(pos.row - 1, new_col))
        } else {
            None
        }
    }

    /// Delete entire line at row, returning its content.
    ///
    /// Deleting the only line clears it instead, so the buffer never empties.
    pub fn delete_line(&mut self, row: usize) -> Option<String> {
        if row >= self.lines.len() {
            return None;
        }

        if self.lines.len() > 1 {
            Some(self.lines.remove(row))
        } else {
            Some(core::mem::take(&mut self.lines[0]))
        }
    }

    /// Insert a whole line before `row` (`row == line_count()` appends)
    pub fn insert_line(&mut self, row: usize, text: String) -> bool {
        if row > self.lines.len() {
            return false;
        }
        self.lines.insert(row, text);
        true
    }

    pub fn set_line(&mut self, row: usize, text: String) -> bool {
        match self.lines.get_mut(row) {
            Some(line) => {
                *line = text;
                true
            }
            None => false,
        }
    }

    /// Re-insert the line currently at `from` at index `to`.
    ///
    /// This is the narrow "undo-line" primitive: it moves one existing line
    /// and keeps no history. `to` is clamped to the last line.
    pub fn restore_line(&mut self, from: usize, to: usize) -> bool {
        if from >= self.lines.len() {
            return false;
        }
        let line = self.lines.remove(from);
        let to = to.min(self.lines.len());
        self.lines.insert(to, line);
        true
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of character column `col`, allowing the end-of-line column
fn byte_offset(line: &str, col: usize) -> Option<usize> {
    if col == 0 {
        return Some(0);
    }
    match line.char_indices().nth(col) {
        Some((offset, _)) => Some(offset),
        None if line.chars().count() == col => Some(line.len()),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn buffer(lines: &[&str]) -> TextBuffer {
        TextBuffer::from_lines(lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_text_buffer_new() {
        let buffer = TextBuffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), Some(""));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_from_empty_lines_keeps_one_line() {
        let buffer = TextBuffer::from_lines(Vec::new());
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), Some(""));
    }

    #[test]
    fn test_from_string() {
        let buffer = TextBuffer::from_string("hello\nworld");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.as_string(), "hello\nworld");
    }

    #[test]
    fn test_insert_char() {
        let mut buffer = buffer(&["hello"]);
        assert!(buffer.insert_char(Position::new(0, 5), '!'));
        assert_eq!(buffer.line(0), Some("hello!"));
    }

    #[test]
    fn test_insert_char_out_of_range() {
        let mut buffer = buffer(&["hi"]);
        assert!(!buffer.insert_char(Position::new(0, 3), '!'));
        assert!(!buffer.insert_char(Position::new(1, 0), '!'));
        assert_eq!(buffer.line(0), Some("hi"));
    }

    #[test]
    fn test_insert_after_multibyte_glyph() {
        let mut buffer = buffer(&["• a"]);
        assert!(buffer.insert_char(Position::new(0, 3), 'b'));
        assert_eq!(buffer.line(0), Some("• ab"));
        assert_eq!(buffer.line_length(0), 4);
    }

    #[test]
    fn test_dash_becomes_bullet() {
        let mut buffer = TextBuffer::new();
        buffer.insert_char(Position::new(0, 0), '-');
        buffer.insert_char(Position::new(0, 1), ' ');
        assert_eq!(buffer.line(0), Some("• "));
    }

    #[test]
    fn test_x_becomes_checked_box() {
        let mut buffer = TextBuffer::new();
        buffer.insert_char(Position::new(0, 0), 'x');
        assert_eq!(buffer.line(0), Some("☒"));
    }

    #[test]
    fn test_substitution_keeps_indentation() {
        let mut buffer = buffer(&["  "]);
        buffer.insert_char(Position::new(0, 2), '-');
        assert_eq!(buffer.line(0), Some("  •"));
        assert_eq!(buffer.line_length(0), 3);
    }

    #[test]
    fn test_substitution_rescans_existing_line() {
        // Typing anywhere on a line that starts with a marker rewrites it
        let mut buffer = buffer(&["xyz"]);
        buffer.insert_char(Position::new(0, 3), '!');
        assert_eq!(buffer.line(0), Some("☒yz!"));
    }

    #[test]
    fn test_no_substitution_mid_line() {
        let mut buffer = buffer(&["a"]);
        buffer.insert_char(Position::new(0, 1), '-');
        assert_eq!(buffer.line(0), Some("a-"));
    }

    #[test]
    fn test_verbatim_insert_skips_substitution() {
        let mut buffer = TextBuffer::new();
        buffer.insert_char_verbatim(Position::new(0, 0), '-');
        assert_eq!(buffer.line(0), Some("-"));
    }

    #[test]
    fn test_insert_newline() {
        let mut buffer = buffer(&["abc", "def"]);
        assert!(buffer.insert_newline(Position::new(0, 3)));
        assert_eq!(buffer.lines(), &["abc", "", "def"]);
    }

    #[test]
    fn test_insert_newline_mid_line() {
        let mut buffer = buffer(&["hello"]);
        assert!(buffer.insert_newline(Position::new(0, 2)));
        assert_eq!(buffer.lines(), &["he", "llo"]);
    }

    #[test]
    fn test_backspace() {
        let mut buffer = buffer(&["hello"]);
        let new_pos = buffer.backspace(Position::new(0, 5));
        assert_eq!(new_pos, Some(Position::new(0, 4)));
        assert_eq!(buffer.line(0), Some("hell"));
    }

    #[test]
    fn test_backspace_line_join() {
        let mut buffer = buffer(&["hello", "world"]);
        let new_pos = buffer.backspace(Position::new(1, 0));
        assert_eq!(new_pos, Some(Position::new(0, 5)));
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), Some("helloworld"));
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut buffer = buffer(&["hello"]);
        assert_eq!(buffer.backspace(Position::zero()), None);
        assert_eq!(buffer.line(0), Some("hello"));
    }

    #[test]
    fn test_split_then_join_round_trip() {
        let mut buffer = buffer(&["hello world"]);
        buffer.insert_newline(Position::new(0, 5));
        let pos = buffer.backspace(Position::new(1, 0));
        assert_eq!(pos, Some(Position::new(0, 5)));
        assert_eq!(buffer.lines(), &["hello world"]);
    }

    #[test]
    fn test_delete_line() {
        let mut buffer = buffer(&["line1", "line2", "line3"]);
        assert_eq!(buffer.delete_line(1).as_deref(), Some("line2"));
        assert_eq!(buffer.lines(), &["line1", "line3"]);
    }

    #[test]
    fn test_delete_last_line() {
        let mut buffer = buffer(&["only"]);
        assert_eq!(buffer.delete_line(0).as_deref(), Some("only"));
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), Some(""));
    }

    #[test]
    fn test_delete_line_out_of_range() {
        let mut buffer = buffer(&["a"]);
        assert_eq!(buffer.delete_line(3), None);
    }

    #[test]
    fn test_restore_line_moves_one_line() {
        let mut buffer = buffer(&["a", "b", "c"]);
        assert!(buffer.restore_line(0, 2));
        assert_eq!(buffer.lines(), &["b", "c", "a"]);
    }

    #[test]
    fn test_restore_line_same_index_is_stable() {
        let mut buffer = buffer(&["a", "b"]);
        assert!(buffer.restore_line(1, 1));
        assert_eq!(buffer.lines(), &["a", "b"]);
        assert!(!buffer.restore_line(5, 0));
    }

    #[test]
    fn test_insert_and_set_line() {
        let mut buffer = buffer(&["a"]);
        assert!(buffer.insert_line(1, "b".to_string()));
        assert!(buffer.set_line(0, "z".to_string()));
        assert!(!buffer.insert_line(5, "q".to_string()));
        assert_eq!(buffer.lines(), &["z", "b"]);
    }
}
