//! # File Tree
//!
//! The hierarchical file listing shown beside the editor.
//!
//! ## Philosophy
//!
//! - **Shape is fixed**: Folders keep the children they were built with; only file content changes
//! - **Identity is positional**: Names may repeat, so entries are addressed by flattened index
//! - **Navigation is linear**: Folders and files share one index space, no expand/collapse state
//!
//! ## Design
//!
//! - `FileNode` is a sum type over files and folders
//! - `FileTree::flatten` walks the roots in pre-order, lazily and restartably
//! - `TreeCursor` is the clamped selection index into that flattened order

pub mod cursor;
pub mod node;
pub mod sample;
pub mod tree;

pub use cursor::TreeCursor;
pub use node::FileNode;
pub use sample::sample_project;
pub use tree::{FileTree, FlatEntry, Flatten, TreeError};
