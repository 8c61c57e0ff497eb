//! Multi-key gesture recognition
//!
//! Keys pressed in Normal mode accumulate until the idle window passes with
//! no further key. The window restarts on every key and fires at most once;
//! the pending keys are cleared whether or not they formed a gesture.

use alloc::vec::Vec;

use crate::key::Key;
use crate::time::{Duration, Instant};

/// Default idle window before pending keys are interpreted
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(200);

/// A recognized gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// `dd`: delete the cursor line
    DeleteLine,
    /// `u`: put back the last deleted line
    RestoreLine,
}

impl Gesture {
    /// Interpret a completed key sequence
    pub fn classify(keys: &[Key]) -> Option<Self> {
        let contains = |ch| keys.iter().any(|key| key.is_char(ch));

        if keys.len() == 2 && contains('d') {
            Some(Gesture::DeleteLine)
        } else if contains('u') {
            Some(Gesture::RestoreLine)
        } else {
            None
        }
    }
}

/// Pending keys plus the deadline at which they are interpreted
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    window: Duration,
    pending: Vec<Key>,
    deadline: Option<Instant>,
}

impl GestureRecognizer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: Vec::new(),
            deadline: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn pending(&self) -> &[Key] {
        &self.pending
    }

    /// When the pending keys will be interpreted, if any are pending
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Append a key and restart the idle window
    pub fn record(&mut self, key: Key, now: Instant) {
        self.pending.push(key);
        self.deadline = Some(now + self.window);
    }

    /// Fire the window if it has elapsed.
    ///
    /// Returns the recognized gesture, if the window fired and the pending
    /// keys formed one. Pending keys are cleared whenever the window fires.
    pub fn poll(&mut self, now: Instant) -> Option<Gesture> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                let gesture = Gesture::classify(&self.pending);
                tracing::trace!(keys = self.pending.len(), ?gesture, "gesture window elapsed");
                self.cancel();
                gesture
            }
            _ => None,
        }
    }

    /// Drop pending keys without interpreting them
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.deadline = None;
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
