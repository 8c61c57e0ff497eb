//! Async host for a session
//!
//! Runs persistence requests on the Tokio runtime while the session keeps
//! taking keys. Completions come back over a channel and are applied on the
//! host's own thread, so the session itself is never shared.
//!
//! Saves to the same file name are chained: each one starts only after the
//! previous save of that name has finished.
//!
//! Adapter calls run in their own task. If one panics, the session gets an
//! `Unavailable` error for that request instead of waiting forever.

use std::collections::HashMap;
use std::sync::Arc;

use editor_core::Key;
use services_persistence::{PersistenceAdapter, PersistenceError};
use thiserror::Error;
use tokio::runtime::{Handle, TryCurrentError};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};

use crate::clock::Clock;
use crate::io::{PersistenceCompletion, PersistenceRequest, RequestId};
use crate::session::{EditorSession, SessionEffect};
use crate::snapshot::RenderSnapshot;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Session host needs a Tokio runtime: {0}")]
    NoRuntime(#[from] TryCurrentError),
}

/// Drives an `EditorSession` against a persistence adapter
pub struct SessionHost<C> {
    session: EditorSession,
    adapter: Arc<dyn PersistenceAdapter>,
    clock: C,
    runtime: Handle,
    completions_tx: mpsc::UnboundedSender<PersistenceCompletion>,
    completions_rx: mpsc::UnboundedReceiver<PersistenceCompletion>,
    save_chains: HashMap<String, JoinHandle<()>>,
    in_flight: usize,
}

impl<C: Clock> SessionHost<C> {
    /// Create a host on the current Tokio runtime
    pub fn new(
        session: EditorSession,
        adapter: Arc<dyn PersistenceAdapter>,
        clock: C,
    ) -> Result<Self, HostError> {
        let runtime = Handle::try_current()?;
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Ok(Self {
            session,
            adapter,
            clock,
            runtime,
            completions_tx,
            completions_rx,
            save_chains: HashMap::new(),
            in_flight: 0,
        })
    }

    /// Deliver a key press. Persistence requests are started in the
    /// background; all effects are returned for the caller to inspect.
    pub fn press(&mut self, key: Key) -> Vec<SessionEffect> {
        self.drain();
        let effects = self.session.handle_key(key, self.clock.now());
        for effect in &effects {
            if let SessionEffect::Persist(request) = effect {
                self.dispatch(request.clone());
            }
        }
        effects
    }

    /// Advance session timers to the clock's current time
    pub fn tick(&mut self) -> bool {
        self.drain();
        self.session.tick(self.clock.now())
    }

    /// Apply every completion that has already arrived
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    /// Wait until every outstanding request has completed and been applied
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.completions_rx.recv().await {
                Some(completion) => self.apply(completion),
                None => break,
            }
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.session.snapshot()
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn apply(&mut self, completion: PersistenceCompletion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.session.complete(completion, self.clock.now());
    }

    fn dispatch(&mut self, request: PersistenceRequest) {
        let adapter = Arc::clone(&self.adapter);
        let tx = self.completions_tx.clone();
        self.in_flight += 1;

        match request {
            PersistenceRequest::Load { id, name } => {
                let runtime = self.runtime.clone();
                self.runtime.spawn(async move {
                    let load = runtime.spawn(async move { adapter.load(&name).await });
                    let result = load.await.unwrap_or_else(|err| Err(task_failed(id, err)));
                    // Receiver only goes away with the host
                    let _ = tx.send(PersistenceCompletion::Loaded { id, result });
                });
            }
            PersistenceRequest::Save { id, name, lines } => {
                self.save_chains.retain(|_, task| !task.is_finished());
                let previous = self.save_chains.remove(&name);
                let key = name.clone();

                let runtime = self.runtime.clone();
                let task = self.runtime.spawn(async move {
                    if let Some(previous) = previous {
                        let _ = previous.await;
                    }
                    let save = runtime.spawn(async move { adapter.save(&name, &lines).await });
                    let result = save.await.unwrap_or_else(|err| Err(task_failed(id, err)));
                    let _ = tx.send(PersistenceCompletion::Saved { id, result });
                });
                self.save_chains.insert(key, task);
            }
        }
    }
}

fn task_failed(id: RequestId, err: JoinError) -> PersistenceError {
    tracing::error!(%id, %err, "persistence task did not finish");
    PersistenceError::Unavailable(format!("persistence task failed: {}", err))
}
