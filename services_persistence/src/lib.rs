//! # Persistence Services
//!
//! Asynchronous load/save of a file's lines, keyed by file name.
//!
//! ## Philosophy
//!
//! - **Adapter, not authority**: The editing engine never touches storage; hosts drive adapters
//! - **Failures are values**: Every operation returns a `Result`, nothing panics on I/O
//! - **Name-keyed**: Two files with the same name share one slot in the store
//!
//! ## Adapters
//!
//! - `MemoryStore`: process-local map, used by tests and ephemeral sessions
//! - `JsonFileStore`: one versioned JSON document holding every file
//! - `FailingStore`: wraps another adapter and injects failures by policy

pub mod failing;
pub mod json_file;
pub mod memory;

pub use failing::{FailingStore, FailurePolicy};
pub use json_file::{JsonFileStore, StoreData};
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store document is malformed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported store version: {0}")]
    UnsupportedVersion(u32),

    /// The backend refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// A stored record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub name: String,
    pub content: Vec<String>,
}

/// Asynchronous line storage keyed by file name.
///
/// `load` returns `Ok(None)` when nothing is stored under `name`.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    async fn load(&self, name: &str) -> PersistenceResult<Option<Vec<String>>>;

    async fn save(&self, name: &str, lines: &[String]) -> PersistenceResult<()>;
}

#[async_trait]
impl<A: PersistenceAdapter + ?Sized> PersistenceAdapter for Arc<A> {
    async fn load(&self, name: &str) -> PersistenceResult<Option<Vec<String>>> {
        (**self).load(name).await
    }

    async fn save(&self, name: &str, lines: &[String]) -> PersistenceResult<()> {
        (**self).save(name, lines).await
    }
}
