//! # Input Script Parser
//!
//! A small line-based format for driving the playground without a terminal.
//!
//! ## Format
//!
//! - Key names: `Enter`, `Escape`, `Backspace`, `Tab`, `Space`
//! - Arrow keys: `Up`, `Down`, `Left`, `Right`
//! - Single characters: `i`, `d`, `:`
//! - Text strings: `"- [ ] milk"` (one key press per character)
//! - Delays: `wait 250ms`, `wait 3s` (advance the clock)
//! - Frames: `frame` (print the current frame)
//! - Comments: `# This is a comment`, also after a key on the same line
//!
//! A literal `#` key is typed inside a quoted string. Inside quotes, `\"`
//! types a double quote and `\\` a backslash.
//!
//! ## Example
//!
//! ```text
//! Space
//! e                    # focus the tree
//! Down
//! Down
//! Enter                # open index.ts
//! wait 250ms
//! "dd"
//! wait 250ms           # let the gesture fire
//! frame
//! ```

use editor_core::Key;
use std::collections::VecDeque;
use thiserror::Error;

/// Input script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputScriptError {
    #[error("Invalid key name: {0}")]
    InvalidKeyName(String),

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Empty script")]
    EmptyScript,

    #[error("Invalid delay format: {0}")]
    InvalidDelay(String),
}

/// A single scripted input action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedInput {
    /// A single key press
    Key(Key),
    /// Advance the clock (in milliseconds)
    Wait(u64),
    /// Emit the current frame
    Frame,
}

/// Parsed input script
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    inputs: VecDeque<ScriptedInput>,
}

impl InputScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, InputScriptError> {
        let mut inputs = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            inputs.extend(Self::parse_line(line, line_num + 1)?);
        }

        if inputs.is_empty() {
            return Err(InputScriptError::EmptyScript);
        }

        Ok(Self { inputs })
    }

    fn parse_line(line: &str, line_num: usize) -> Result<Vec<ScriptedInput>, InputScriptError> {
        if let Some(rest) = line.strip_prefix('"') {
            let (text, tail) = split_quoted(rest).ok_or_else(|| InputScriptError::ParseError {
                line: line_num,
                message: "unterminated string".to_string(),
            })?;
            Self::expect_only_comment(tail, line_num)?;
            return Ok(text.chars().map(Self::char_to_input).collect());
        }

        let line = strip_trailing_comment(line);

        if line == "frame" {
            return Ok(vec![ScriptedInput::Frame]);
        }

        if let Some(duration) = line.strip_prefix("wait ") {
            let millis =
                Self::parse_duration(duration).map_err(|e| InputScriptError::ParseError {
                    line: line_num,
                    message: e.to_string(),
                })?;
            return Ok(vec![ScriptedInput::Wait(millis)]);
        }

        let key = Self::parse_key(line).map_err(|e| InputScriptError::ParseError {
            line: line_num,
            message: e.to_string(),
        })?;
        Ok(vec![ScriptedInput::Key(key)])
    }

    fn expect_only_comment(rest: &str, line_num: usize) -> Result<(), InputScriptError> {
        let rest = rest.trim();
        if rest.is_empty() || rest.starts_with('#') {
            Ok(())
        } else {
            Err(InputScriptError::ParseError {
                line: line_num,
                message: format!("unexpected text after string: {}", rest),
            })
        }
    }

    /// Parses a key name, case-insensitive for named keys
    fn parse_key(name: &str) -> Result<Key, InputScriptError> {
        let named = match name.to_lowercase().as_str() {
            "enter" | "return" => Some(Key::Enter),
            "escape" | "esc" => Some(Key::Escape),
            "backspace" | "back" => Some(Key::Backspace),
            "tab" => Some(Key::Tab),
            "space" => Some(Key::Char(' ')),
            "up" | "arrowup" => Some(Key::Up),
            "down" | "arrowdown" => Some(Key::Down),
            "left" | "arrowleft" => Some(Key::Left),
            "right" | "arrowright" => Some(Key::Right),
            _ => None,
        };

        named
            .or_else(|| Key::from_name(name))
            .ok_or_else(|| InputScriptError::InvalidKeyName(name.to_string()))
    }

    fn char_to_input(ch: char) -> ScriptedInput {
        match ch {
            '\n' => ScriptedInput::Key(Key::Enter),
            '\t' => ScriptedInput::Key(Key::Tab),
            other => ScriptedInput::Key(Key::Char(other)),
        }
    }

    /// Parses a duration string (e.g., "100ms", "1s")
    fn parse_duration(s: &str) -> Result<u64, InputScriptError> {
        let s = s.trim().to_lowercase();

        if let Some(ms) = s.strip_suffix("ms") {
            ms.trim()
                .parse::<u64>()
                .map_err(|_| InputScriptError::InvalidDelay(s.clone()))
        } else if let Some(secs) = s.strip_suffix('s') {
            secs.trim()
                .parse::<u64>()
                .ok()
                .and_then(|secs| secs.checked_mul(1000))
                .ok_or_else(|| InputScriptError::InvalidDelay(s.clone()))
        } else {
            Err(InputScriptError::InvalidDelay(s))
        }
    }

    /// Returns the next input, if any
    pub fn next_input(&mut self) -> Option<ScriptedInput> {
        self.inputs.pop_front()
    }

    pub fn has_more(&self) -> bool {
        !self.inputs.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

/// Reads a quoted string body up to the first unescaped `"`.
///
/// Returns the unescaped text and whatever follows the closing quote, or
/// `None` if the string never closes.
fn split_quoted(rest: &str) -> Option<(String, &str)> {
    let mut text = String::new();
    let mut chars = rest.char_indices();
    while let Some((at, ch)) = chars.next() {
        match ch {
            '"' => return Some((text, &rest[at + 1..])),
            '\\' => match chars.next() {
                Some((_, escaped @ ('"' | '\\'))) => text.push(escaped),
                Some((_, other)) => {
                    text.push('\\');
                    text.push(other);
                }
                None => return None,
            },
            other => text.push(other),
        }
    }
    None
}

/// Drops a ` # comment` suffix. Lines that start with `#` never get here.
fn strip_trailing_comment(line: &str) -> &str {
    match line.find(" #") {
        Some(at) => line[..at].trim_end(),
        None => line,
    }
}
