//! Focus target

use serde::{Deserialize, Serialize};

/// Which pane receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    FileTree,
    #[default]
    Editor,
}

impl FocusTarget {
    pub fn toggled(self) -> Self {
        match self {
            FocusTarget::FileTree => FocusTarget::Editor,
            FocusTarget::Editor => FocusTarget::FileTree,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FocusTarget::FileTree => "files",
            FocusTarget::Editor => "editor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(FocusTarget::Editor.toggled(), FocusTarget::FileTree);
        assert_eq!(FocusTarget::FileTree.toggled(), FocusTarget::Editor);
        assert_eq!(FocusTarget::default(), FocusTarget::Editor);
    }
}
