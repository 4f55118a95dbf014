//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond crossterm's event
//! types. It maps key events into the closed [`crate::types::InputEvent`]
//! vocabulary once, at the boundary, and exposes a non-blocking
//! [`InputSource`] that the game loop polls every frame.

pub mod map;
pub mod source;

pub use tui_runner_types as types;

pub use map::map_key_event;
pub use source::{EventBatch, InputSource, ScriptedInput, TerminalInput, MAX_EVENTS_PER_FRAME};
