//! # Failing Store
//!
//! A PersistenceAdapter wrapper that can simulate failures for testing how
//! sessions fall back on load errors and report save errors.

use crate::{PersistenceAdapter, PersistenceError, PersistenceResult};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Policy for when failures should occur
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Never fail (passthrough)
    Never,
    /// Fail every operation
    Always,
    /// Fail loads only
    Loads,
    /// Fail saves only
    Saves,
    /// Fail saves after N successful saves
    AfterSaves(usize),
    /// Fail every operation on the listed names
    OnNames(Vec<String>),
}

#[derive(Debug, Default)]
struct Counters {
    loads: usize,
    saves: usize,
}

/// Wrapper around a PersistenceAdapter that can simulate failures
#[derive(Debug)]
pub struct FailingStore<S> {
    inner: S,
    policy: Mutex<FailurePolicy>,
    counters: Mutex<Counters>,
}

impl<S: PersistenceAdapter> FailingStore<S> {
    pub fn new(inner: S, policy: FailurePolicy) -> Self {
        Self {
            inner,
            policy: Mutex::new(policy),
            counters: Mutex::new(Counters::default()),
        }
    }

    /// Get the underlying store (for inspection)
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Replace the failure policy and reset counters
    pub fn set_policy(&self, policy: FailurePolicy) {
        *self.policy.lock() = policy;
        *self.counters.lock() = Counters::default();
    }

    /// Number of saves that reached the inner store
    pub fn save_count(&self) -> usize {
        self.counters.lock().saves
    }

    pub fn load_count(&self) -> usize {
        self.counters.lock().loads
    }

    fn should_fail_load(&self, name: &str) -> bool {
        match &*self.policy.lock() {
            FailurePolicy::Always | FailurePolicy::Loads => true,
            FailurePolicy::OnNames(names) => names.iter().any(|n| n == name),
            FailurePolicy::Never | FailurePolicy::Saves | FailurePolicy::AfterSaves(_) => false,
        }
    }

    fn should_fail_save(&self, name: &str) -> bool {
        match &*self.policy.lock() {
            FailurePolicy::Always | FailurePolicy::Saves => true,
            FailurePolicy::AfterSaves(n) => self.counters.lock().saves >= *n,
            FailurePolicy::OnNames(names) => names.iter().any(|n| n == name),
            FailurePolicy::Never | FailurePolicy::Loads => false,
        }
    }
}

#[async_trait]
impl<S: PersistenceAdapter> PersistenceAdapter for FailingStore<S> {
    async fn load(&self, name: &str) -> PersistenceResult<Option<Vec<String>>> {
        if self.should_fail_load(name) {
            return Err(PersistenceError::Unavailable(format!("load of {name} rejected")));
        }
        self.counters.lock().loads += 1;
        self.inner.load(name).await
    }

    async fn save(&self, name: &str, lines: &[String]) -> PersistenceResult<()> {
        if self.should_fail_save(name) {
            return Err(PersistenceError::Unavailable(format!("save of {name} rejected")));
        }
        self.counters.lock().saves += 1;
        self.inner.save(name, lines).await
    }
}
