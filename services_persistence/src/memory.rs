//! In-memory store

use crate::{PersistenceAdapter, PersistenceResult, StoredFile};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Process-local store backed by a map
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<String, Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store
    pub fn with_files(files: impl IntoIterator<Item = StoredFile>) -> Self {
        let files = files
            .into_iter()
            .map(|file| (file.name, file.content))
            .collect();
        Self {
            files: Mutex::new(files),
        }
    }

    /// Synchronous peek, for inspection in tests and hosts
    pub fn get(&self, name: &str) -> Option<Vec<String>> {
        self.files.lock().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.lock().is_empty()
    }
}

#[async_trait]
impl PersistenceAdapter for MemoryStore {
    async fn load(&self, name: &str) -> PersistenceResult<Option<Vec<String>>> {
        Ok(self.get(name))
    }

    async fn save(&self, name: &str, lines: &[String]) -> PersistenceResult<()> {
        self.files.lock().insert(name.to_string(), lines.to_vec());
        Ok(())
    }
}
