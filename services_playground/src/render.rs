//! Plain-text rendering of a session snapshot

use crate::focus::FocusTarget;
use crate::session::Surface;
use crate::snapshot::RenderSnapshot;

/// Text view of a session
///
/// Draws the file list, a fixed-height buffer viewport and the two status
/// lines. Output is deterministic, which makes it usable in test
/// assertions and scripted runs.
pub struct PlaygroundView {
    /// Number of buffer lines to show
    viewport_lines: usize,
}

impl PlaygroundView {
    pub fn new(viewport_lines: usize) -> Self {
        Self { viewport_lines }
    }

    /// Render a full frame
    pub fn render(&self, snapshot: &RenderSnapshot) -> String {
        let mut output = String::new();

        for line in self.render_tree(snapshot) {
            output.push_str(&line);
            output.push('\n');
        }
        output.push_str("----\n");

        let first_row = self.first_visible_row(snapshot);
        for row in first_row..first_row + self.viewport_lines {
            match snapshot.lines.get(row) {
                Some(line) => {
                    let show_cursor =
                        snapshot.focus == FocusTarget::Editor && row == snapshot.cursor.row;
                    let text = if show_cursor {
                        render_line_with_cursor(line, snapshot.cursor.col)
                    } else {
                        line.clone()
                    };
                    output.push_str(&format!("{:>3} {}", row + 1, text));
                }
                None => output.push('~'),
            }
            output.push('\n');
        }

        if let Some(surface) = snapshot.surface {
            output.push_str(match surface {
                Surface::CommandLine => "[command line]\n",
                Surface::ThemePicker => "[theme picker]\n",
            });
        }
        output.push_str(&snapshot.status_line());
        output.push('\n');
        output.push_str(&snapshot.cursor_line());
        output
    }

    /// One line per flattened tree entry, selection marked with `>`
    pub fn render_tree(&self, snapshot: &RenderSnapshot) -> Vec<String> {
        snapshot
            .tree
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let marker = if index == snapshot.selection {
                    if snapshot.focus == FocusTarget::FileTree {
                        '>'
                    } else {
                        '-'
                    }
                } else {
                    ' '
                };
                let suffix = if row.is_folder { "/" } else { "" };
                format!("{} {}{}{}", marker, "  ".repeat(row.depth), row.name, suffix)
            })
            .collect()
    }

    /// Scroll so the cursor row stays inside the viewport
    fn first_visible_row(&self, snapshot: &RenderSnapshot) -> usize {
        let cursor_row = snapshot.cursor.row;
        if cursor_row < self.viewport_lines {
            0
        } else {
            cursor_row + 1 - self.viewport_lines
        }
    }
}

impl Default for PlaygroundView {
    fn default() -> Self {
        Self::new(20)
    }
}

fn render_line_with_cursor(line: &str, col: usize) -> String {
    let mut result = String::new();
    let mut len = 0;
    for (i, ch) in line.chars().enumerate() {
        if i == col {
            result.push_str(&format!("[{}]", ch));
        } else {
            result.push(ch);
        }
        len += 1;
    }
    // Cursor at end of line
    if col >= len {
        result.push_str("[ ]");
    }
    result
}
