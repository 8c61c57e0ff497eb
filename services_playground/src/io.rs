//! Persistence requests issued by a session
//!
//! The session never performs I/O. It hands out requests tagged with a
//! `RequestId`, and the host feeds the matching completion back.

use serde::{Deserialize, Serialize};
use services_persistence::PersistenceResult;
use std::fmt;

/// Identifies one request for matching its completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(u64);

impl RequestId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Work the host must perform against a PersistenceAdapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceRequest {
    Load {
        id: RequestId,
        name: String,
    },
    /// `lines` is the buffer captured when the save was requested
    Save {
        id: RequestId,
        name: String,
        lines: Vec<String>,
    },
}

impl PersistenceRequest {
    pub fn id(&self) -> RequestId {
        match self {
            PersistenceRequest::Load { id, .. } | PersistenceRequest::Save { id, .. } => *id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PersistenceRequest::Load { name, .. } | PersistenceRequest::Save { name, .. } => name,
        }
    }
}

/// Result of a request, delivered back to the session
#[derive(Debug)]
pub enum PersistenceCompletion {
    Loaded {
        id: RequestId,
        result: PersistenceResult<Option<Vec<String>>>,
    },
    Saved {
        id: RequestId,
        result: PersistenceResult<()>,
    },
}

impl PersistenceCompletion {
    pub fn id(&self) -> RequestId {
        match self {
            PersistenceCompletion::Loaded { id, .. } | PersistenceCompletion::Saved { id, .. } => {
                *id
            }
        }
    }
}

/// Allocates request ids in issue order
#[derive(Debug, Default)]
pub(crate) struct RequestIds {
    next: u64,
}

impl RequestIds {
    pub(crate) fn next(&mut self) -> RequestId {
        self.next += 1;
        RequestId(self.next)
    }
}
