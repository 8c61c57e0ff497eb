#![no_std]

//! # Editor Core
//!
//! The modal editing engine behind the playground.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same key trace and clock readings => same editor state
//! - **Modal editing**: Normal, Insert, Visual, Command modes
//! - **Mechanism over policy**: Core provides editing primitives, hosts decide rendering
//! - **No ambient authority**: Save requests are returned to the host, never performed here
//!
//! ## Design
//!
//! The core provides:
//! - TextBuffer: line storage and every mutation primitive
//! - Cursor: a clamped (line, column) position
//! - EditorMode: the mode state machine and its transition table
//! - GestureRecognizer: multi-key gestures over an injected clock
//! - EditorCore: dispatch of editor-focused keys by mode
//! - EditorSnapshot: Deterministic state for rendering and parity testing

extern crate alloc;

pub mod buffer;
pub mod cursor;
pub mod editor;
pub mod gesture;
pub mod key;
pub mod mode;
pub mod snapshot;
pub mod time;

pub use buffer::{TextBuffer, BULLET, CHECKED_BOX};
pub use editor::{CoreIoRequest, CoreOutcome, DeletedLine, EditorCore, SurfaceRequest};
pub use cursor::{Cursor, Position};
pub use gesture::{Gesture, GestureRecognizer};
pub use key::Key;
pub use mode::{EditorMode, ModeTransition, TransitionEffect};
pub use snapshot::EditorSnapshot;
pub use time::{Duration, Instant};
