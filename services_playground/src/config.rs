//! Session configuration

use editor_core::Duration;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::focus::FocusTarget;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be greater than zero")]
    ZeroWindow { field: &'static str },
}

/// Tunables for an editing session
///
/// Missing fields take their defaults; unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaygroundConfig {
    /// Idle window before pending Normal-mode keys are interpreted
    pub gesture_window_ms: u64,
    /// How long a finished save keeps its message
    pub save_status_clear_ms: u64,
    /// Rewrite leading `-` and `x` into list glyphs while typing
    pub auto_symbols: bool,
    pub initial_focus: FocusTarget,
}

impl PlaygroundConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PlaygroundConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gesture_window_ms == 0 {
            return Err(ConfigError::ZeroWindow {
                field: "gesture_window_ms",
            });
        }
        Ok(())
    }

    pub fn gesture_window(&self) -> Duration {
        Duration::from_millis(self.gesture_window_ms)
    }

    pub fn save_status_clear(&self) -> Duration {
        Duration::from_millis(self.save_status_clear_ms)
    }
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            gesture_window_ms: 200,
            save_status_clear_ms: 3000,
            auto_symbols: true,
            initial_focus: FocusTarget::Editor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlaygroundConfig::default();
        assert_eq!(config.gesture_window(), Duration::from_millis(200));
        assert_eq!(config.save_status_clear(), Duration::from_millis(3000));
        assert!(config.auto_symbols);
        assert_eq!(config.initial_focus, FocusTarget::Editor);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            PlaygroundConfig::from_json_str(r#"{"auto_symbols": false, "initial_focus": "file_tree"}"#)
                .unwrap();
        assert!(!config.auto_symbols);
        assert_eq!(config.initial_focus, FocusTarget::FileTree);
        assert_eq!(config.gesture_window_ms, 200);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = PlaygroundConfig::from_json_str(r#"{"gesture_window": 10}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_window_rejected() {
        let result = PlaygroundConfig::from_json_str(r#"{"gesture_window_ms": 0}"#);
        assert!(matches!(result, Err(ConfigError::ZeroWindow { .. })));
    }

    #[test]
    fn test_huge_clear_delay_saturates() {
        let config =
            PlaygroundConfig::from_json_str(r#"{"save_status_clear_ms": 18446744073709551}"#)
                .unwrap();
        assert_eq!(config.save_status_clear().as_nanos(), u64::MAX);

        let session = crate::session::EditorSession::new(config, file_tree::sample_project());
        assert_eq!(session.save_status(), crate::save_status::SaveStatus::Idle);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("playground.json");
        std::fs::write(&path, r#"{"save_status_clear_ms": 50}"#).unwrap();

        let config = PlaygroundConfig::load(&path).unwrap();
        assert_eq!(config.save_status_clear_ms, 50);
    }
}
