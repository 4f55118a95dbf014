//! Terminal rendering for the runner.
//!
//! No widget toolkit: frames are composed in a plain framebuffer by
//! [`SceneView`] and flushed by [`TerminalRenderer`], which only re-sends the
//! cells that changed since the previous frame.

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_runner_core as core;
pub use tui_runner_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use view::{character_sprite, death_cue_intensity, SceneView, Sprite, Viewport};
