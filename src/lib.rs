//! TUI Runner (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_runner::{core,input,term,types}` and
//! adds the launch configuration used by the binary.

pub mod config;

pub use tui_runner_core as core;
pub use tui_runner_input as input;
pub use tui_runner_term as term;
pub use tui_runner_types as types;
