//! Command-line arguments and the pieces built from them

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use editor_core::Duration;
use file_tree::{sample_project, FileTree};
use services_persistence::{JsonFileStore, MemoryStore, PersistenceAdapter};
use services_playground::PlaygroundConfig;

use crate::runtime::{OutputFormat, RuntimeConfig};

/// Replay a key script against the editor playground and print frames
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Key script to replay
    pub script: PathBuf,

    /// Playground settings (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Persist files in this JSON document instead of in memory
    #[arg(short, long, env = "PLAYGROUND_STORE")]
    pub store: Option<PathBuf>,

    /// File tree to browse (JSON array of nodes); defaults to a sample project
    #[arg(short, long)]
    pub tree: Option<PathBuf>,

    /// Print render snapshots as JSON instead of text frames
    #[arg(long)]
    pub json: bool,

    /// Buffer lines per text frame
    #[arg(long, default_value_t = 20)]
    pub viewport: usize,

    /// Virtual milliseconds between key presses
    #[arg(long, default_value_t = 10)]
    pub key_interval_ms: u64,

    /// Log everything at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn playground_config(&self) -> anyhow::Result<PlaygroundConfig> {
        match &self.config {
            Some(path) => PlaygroundConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            None => Ok(PlaygroundConfig::default()),
        }
    }

    pub fn file_tree(&self) -> anyhow::Result<FileTree> {
        match &self.tree {
            Some(path) => FileTree::load(path)
                .with_context(|| format!("Failed to load file tree {}", path.display())),
            None => Ok(sample_project()),
        }
    }

    pub fn adapter(&self) -> Arc<dyn PersistenceAdapter> {
        match &self.store {
            Some(path) => {
                tracing::info!(path = %path.display(), "using JSON file store");
                Arc::new(JsonFileStore::new(path.clone()))
            }
            None => Arc::new(MemoryStore::new()),
        }
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            viewport_lines: self.viewport,
            key_interval: Duration::from_millis(self.key_interval_ms),
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}
