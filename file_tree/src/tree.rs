//! The tree and its flattened pre-order view

use crate::node::FileNode;
use std::path::Path;
use thiserror::Error;

/// Errors raised when building or updating a tree
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read tree file: {0}")]
    Io(#[from] std::io::Error),

    /// Flattened index past the end of the tree
    #[error("No entry at index {0}")]
    OutOfRange(usize),

    /// Content can only be replaced on file nodes
    #[error("Entry {0} is a folder")]
    NotAFile(usize),
}

/// One row of the flattened tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatEntry<'a> {
    /// Position in pre-order
    pub index: usize,
    /// Nesting depth, roots are 0
    pub depth: usize,
    pub node: &'a FileNode,
}

/// An ordered forest of file nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    roots: Vec<FileNode>,
}

impl FileTree {
    pub fn new(roots: Vec<FileNode>) -> Self {
        Self { roots }
    }

    /// Parse a JSON array of nodes
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let roots: Vec<FileNode> = serde_json::from_str(json)?;
        Ok(Self::new(roots))
    }

    pub fn load(path: &Path) -> Result<Self, TreeError> {
        let json = std::fs::read_to_string(path)?;
        let tree = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), entries = tree.len(), "loaded file tree");
        Ok(tree)
    }

    /// Pre-order walk: each folder comes before its descendants.
    ///
    /// Every call starts a fresh walk, so the order is stable across calls.
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten {
            stack: vec![(self.roots.iter(), 0)],
            next_index: 0,
        }
    }

    /// Number of flattened entries
    pub fn len(&self) -> usize {
        self.roots.iter().map(FileNode::subtree_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<FlatEntry<'_>> {
        self.flatten().nth(index)
    }

    /// Replace the content of the file at flattened `index`
    pub fn set_content(&mut self, index: usize, lines: Vec<String>) -> Result<(), TreeError> {
        let mut remaining = index;
        match node_at_mut(&mut self.roots, &mut remaining) {
            Some(FileNode::File { content, .. }) => {
                *content = lines;
                Ok(())
            }
            Some(FileNode::Folder { .. }) => Err(TreeError::NotAFile(index)),
            None => Err(TreeError::OutOfRange(index)),
        }
    }
}

fn node_at_mut<'a>(nodes: &'a mut [FileNode], remaining: &mut usize) -> Option<&'a mut FileNode> {
    for node in nodes {
        if *remaining == 0 {
            return Some(node);
        }
        *remaining -= 1;

        let size = node.subtree_len() - 1;
        if *remaining < size {
            return match node {
                FileNode::Folder { children, .. } => node_at_mut(children, remaining),
                FileNode::File { .. } => None,
            };
        }
        *remaining -= size;
    }
    None
}

/// Lazy pre-order iterator over a [`FileTree`]
#[derive(Debug, Clone)]
pub struct Flatten<'a> {
    stack: Vec<(std::slice::Iter<'a, FileNode>, usize)>,
    next_index: usize,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = FlatEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (siblings, depth) = self.stack.last_mut()?;
            let depth = *depth;

            let Some(node) = siblings.next() else {
                self.stack.pop();
                continue;
            };

            let entry = FlatEntry {
                index: self.next_index,
                depth,
                node,
            };
            self.next_index += 1;

            if let FileNode::Folder { children, .. } = node {
                self.stack.push((children.iter(), depth + 1));
            }
            return Some(entry);
        }
    }
}
