//! File and folder nodes

use serde::{Deserialize, Serialize};

/// A single node of the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileNode {
    /// A file with its default content, one string per line
    File { name: String, content: Vec<String> },
    /// A folder with its ordered children
    Folder { name: String, children: Vec<FileNode> },
}

impl FileNode {
    pub fn file(name: impl Into<String>, content: Vec<String>) -> Self {
        FileNode::File {
            name: name.into(),
            content,
        }
    }

    pub fn folder(name: impl Into<String>, children: Vec<FileNode>) -> Self {
        FileNode::Folder {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FileNode::File { name, .. } | FileNode::Folder { name, .. } => name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, FileNode::Folder { .. })
    }

    /// Default content of a file, `None` for folders
    pub fn content(&self) -> Option<&[String]> {
        match self {
            FileNode::File { content, .. } => Some(content),
            FileNode::Folder { .. } => None,
        }
    }

    pub fn children(&self) -> &[FileNode] {
        match self {
            FileNode::File { .. } => &[],
            FileNode::Folder { children, .. } => children,
        }
    }

    /// Number of nodes in this subtree, including itself
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(FileNode::subtree_len).sum::<usize>()
    }
}
