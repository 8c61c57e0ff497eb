//! JSON document store
//!
//! Every file lives in one versioned document. Writes go to a sibling
//! temporary file first and are renamed over the document, so a crash
//! mid-write leaves the previous document intact.

use crate::{PersistenceAdapter, PersistenceError, PersistenceResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// On-disk document
///
/// Uses BTreeMap so the serialized document is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreData {
    /// Version of the document format
    pub version: u32,
    pub files: BTreeMap<String, Vec<String>>,
}

impl StoreData {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            files: BTreeMap::new(),
        }
    }

    pub fn from_slice(bytes: &[u8]) -> PersistenceResult<Self> {
        let data: StoreData = serde_json::from_slice(bytes)?;
        if data.version != Self::CURRENT_VERSION {
            return Err(PersistenceError::UnsupportedVersion(data.version));
        }
        Ok(data)
    }

    pub fn to_vec(&self) -> PersistenceResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

impl Default for StoreData {
    fn default() -> Self {
        Self::new()
    }
}

/// Store backed by a single JSON document on disk
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the document
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> PersistenceResult<StoreData> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => StoreData::from_slice(&bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(StoreData::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_document(&self, data: &StoreData) -> PersistenceResult<()> {
        let bytes = data.to_vec()?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl PersistenceAdapter for JsonFileStore {
    async fn load(&self, name: &str) -> PersistenceResult<Option<Vec<String>>> {
        let data = self.read_document().await?;
        Ok(data.files.get(name).cloned())
    }

    async fn save(&self, name: &str, lines: &[String]) -> PersistenceResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut data = self.read_document().await?;
        data.files.insert(name.to_string(), lines.to_vec());
        self.write_document(&data).await?;
        tracing::debug!(name, path = %self.path.display(), "stored file");
        Ok(())
    }
}
