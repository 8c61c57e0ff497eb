//! # Playground Host
//!
//! Command-line host for the editor playground.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The session never prints or touches the disk itself
//! - **Output is snapshot rendering**: Frames are drawn from `RenderSnapshot`, not terminal state
//! - **Input is explicit events**: Keys come from a script, not raw stdin
//! - **Deterministic by default**: Scripted runs use a manual clock
//!
//! ## Responsibilities
//!
//! The host:
//! - Builds a session from a config file and a file tree
//! - Picks the persistence adapter (in-memory or a JSON file)
//! - Replays a key script and prints frames
//!
//! ## Non-Responsibilities
//!
//! The host does NOT:
//! - Provide terminal emulation (ANSI/VT codes)
//! - Read live keyboard input
//! - Implement the command line or theme picker surfaces

pub mod cli;
pub mod input_script;
pub mod logging;
pub mod runtime;

pub use cli::Cli;
pub use input_script::{InputScript, InputScriptError, ScriptedInput};
pub use runtime::{OutputFormat, PlaygroundRuntime, RuntimeConfig, RuntimeError};
