//! Save status indicator

use editor_core::{Duration, Instant};
use serde::{Deserialize, Serialize};

pub const SAVING_MESSAGE: &str = "Saving...";
pub const SAVED_MESSAGE: &str = "File saved successfully!";
pub const SAVE_FAILED_MESSAGE: &str = "Error saving file.";

/// Outcome of the latest save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Succeeded,
    Failed,
}

impl SaveStatus {
    pub fn message(&self) -> &'static str {
        match self {
            SaveStatus::Idle => "",
            SaveStatus::Saving => SAVING_MESSAGE,
            SaveStatus::Succeeded => SAVED_MESSAGE,
            SaveStatus::Failed => SAVE_FAILED_MESSAGE,
        }
    }
}

/// Save status with its auto-clear deadline
///
/// A finished save (either way) returns to `Idle` once `clear_after` has
/// passed. Starting another save cancels the pending clear.
#[derive(Debug, Clone)]
pub struct SaveIndicator {
    status: SaveStatus,
    clear_after: Duration,
    clear_at: Option<Instant>,
}

impl SaveIndicator {
    pub fn new(clear_after: Duration) -> Self {
        Self {
            status: SaveStatus::Idle,
            clear_after,
            clear_at: None,
        }
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.status.message()
    }

    pub fn clear_at(&self) -> Option<Instant> {
        self.clear_at
    }

    pub fn begin(&mut self) {
        self.status = SaveStatus::Saving;
        self.clear_at = None;
    }

    pub fn finish(&mut self, succeeded: bool, now: Instant) {
        self.status = if succeeded {
            SaveStatus::Succeeded
        } else {
            SaveStatus::Failed
        };
        self.clear_at = Some(now + self.clear_after);
    }

    /// Returns true if the status went back to `Idle`
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.status = SaveStatus::Idle;
                self.clear_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_success_cycle() {
        let mut indicator = SaveIndicator::new(Duration::from_millis(3000));
        assert_eq!(indicator.message(), "");

        indicator.begin();
        assert_eq!(indicator.message(), "Saving...");
        assert!(!indicator.tick(at(10_000)), "no clear while saving");

        indicator.finish(true, at(100));
        assert_eq!(indicator.message(), "File saved successfully!");
        assert!(!indicator.tick(at(3099)));
        assert!(indicator.tick(at(3100)));
        assert_eq!(indicator.status(), SaveStatus::Idle);
    }

    #[test]
    fn test_failure_message() {
        let mut indicator = SaveIndicator::new(Duration::from_millis(10));
        indicator.begin();
        indicator.finish(false, at(0));
        assert_eq!(indicator.status(), SaveStatus::Failed);
        assert_eq!(indicator.message(), "Error saving file.");
        assert_eq!(indicator.clear_at(), Some(at(10)));
    }

    #[test]
    fn test_new_save_cancels_clear() {
        let mut indicator = SaveIndicator::new(Duration::from_millis(10));
        indicator.finish(true, at(0));
        indicator.begin();
        assert!(!indicator.tick(at(50)));
        assert_eq!(indicator.status(), SaveStatus::Saving);
    }
}
