//! # Host Runtime
//!
//! Replays a key script against a session host and writes frames.
//!
//! Time is virtual: every key advances a `ManualClock` by a fixed interval
//! and `wait` advances it by the given amount. Outstanding persistence work
//! is settled after each input, so a run is deterministic for a given
//! script and adapter.

use std::io::Write;
use std::sync::Arc;

use editor_core::{Duration, Key};
use services_persistence::PersistenceAdapter;
use services_playground::{
    EditorSession, HostError, ManualClock, PlaygroundView, RenderSnapshot, SessionHost,
};
use thiserror::Error;

use crate::input_script::{InputScript, ScriptedInput};

/// Host runtime error types
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Snapshot encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// How frames are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain-text frame from `PlaygroundView`
    #[default]
    Text,
    /// The `RenderSnapshot` as pretty JSON
    Json,
}

/// Host runtime configuration
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Buffer lines shown in a text frame
    pub viewport_lines: usize,
    /// Virtual time between consecutive key presses
    pub key_interval: Duration,
    pub format: OutputFormat,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            viewport_lines: 20,
            key_interval: Duration::from_millis(10),
            format: OutputFormat::Text,
        }
    }
}

/// Scripted host for one session
pub struct PlaygroundRuntime {
    host: SessionHost<ManualClock>,
    clock: ManualClock,
    view: PlaygroundView,
    config: RuntimeConfig,
    step_count: usize,
}

impl PlaygroundRuntime {
    /// Create a runtime. Must be called from within a Tokio runtime.
    pub fn new(
        session: EditorSession,
        adapter: Arc<dyn PersistenceAdapter>,
        config: RuntimeConfig,
    ) -> Result<Self, RuntimeError> {
        let clock = ManualClock::new();
        let host = SessionHost::new(session, adapter, clock.clone())?;
        Ok(Self {
            host,
            clock,
            view: PlaygroundView::new(config.viewport_lines),
            config,
            step_count: 0,
        })
    }

    /// Run a whole script, then write the final frame
    pub async fn run(
        &mut self,
        mut script: InputScript,
        out: &mut impl Write,
    ) -> Result<usize, RuntimeError> {
        tracing::info!(inputs = script.remaining(), "running script");

        while let Some(input) = script.next_input() {
            self.step(input, out).await?;
        }
        self.write_frame(out)?;

        tracing::info!(steps = self.step_count, "script finished");
        Ok(self.step_count)
    }

    /// Apply one scripted input
    pub async fn step(
        &mut self,
        input: ScriptedInput,
        out: &mut impl Write,
    ) -> Result<(), RuntimeError> {
        match input {
            ScriptedInput::Key(key) => self.press(key).await,
            ScriptedInput::Wait(millis) => {
                self.clock.advance(Duration::from_millis(millis));
                self.host.tick();
                self.host.settle().await;
            }
            ScriptedInput::Frame => self.write_frame(out)?,
        }
        self.step_count += 1;
        Ok(())
    }

    async fn press(&mut self, key: Key) {
        self.clock.advance(self.config.key_interval);
        let effects = self.host.press(key);
        tracing::debug!(?key, effects = effects.len(), "key");
        self.host.settle().await;
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.host.snapshot()
    }

    /// Render the current state in the configured format
    pub fn render(&self) -> Result<String, RuntimeError> {
        let snapshot = self.snapshot();
        match self.config.format {
            OutputFormat::Text => Ok(self.view.render(&snapshot)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&snapshot)?),
        }
    }

    fn write_frame(&self, out: &mut impl Write) -> Result<(), RuntimeError> {
        let frame = self.render()?;
        writeln!(out, "{}", frame)?;
        writeln!(out)?;
        Ok(())
    }

    pub fn host(&self) -> &SessionHost<ManualClock> {
        &self.host
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }
}
