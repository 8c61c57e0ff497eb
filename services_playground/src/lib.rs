//! # Playground Session Service
//!
//! This crate turns the editing core into an interactive session: a file
//! tree beside a modal editor, with asynchronous load and save.
//!
//! ## Philosophy
//!
//! - **Explicit session**: Focus, mode and pending keys live in one owned object, not in globals
//! - **Injected time**: Every timed behavior reads an `Instant` passed in by the host
//! - **I/O as effects**: The session emits persistence requests and never blocks on them
//! - **Testable**: Whole workflows run from key traces and a manual clock
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A syntax highlighter (only the language id is exposed)
//! - A theme engine (the theme picker is an external surface)
//! - A multi-buffer editor
//!
//! ## Design
//!
//! - `EditorSession` routes keys by focus and mode, and runs the space chord
//! - `SessionEffect` carries persistence requests and surface changes to the host
//! - `SessionHost` executes requests on Tokio, serializing saves per file name
//! - `RenderSnapshot` and `PlaygroundView` are the read-only presentation boundary

pub mod clock;
pub mod config;
pub mod focus;
pub mod host;
pub mod io;
pub mod language;
pub mod render;
pub mod save_status;
pub mod session;
pub mod snapshot;

pub use clock::{Clock, ManualClock};
pub use config::{ConfigError, PlaygroundConfig};
pub use focus::FocusTarget;
pub use host::{HostError, SessionHost};
pub use io::{PersistenceCompletion, PersistenceRequest, RequestId};
pub use language::language_for;
pub use render::PlaygroundView;
pub use save_status::{SaveIndicator, SaveStatus};
pub use session::{EditorSession, SessionEffect, Surface};
pub use snapshot::{RenderSnapshot, TreeRow};
