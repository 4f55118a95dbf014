//! Per-frame input polling.
//!
//! Sources never block: each poll drains whatever is pending into a fixed
//! capacity batch and returns.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key_event;
use crate::types::InputEvent;

/// Upper bound on events handled in one frame; extra events wait for the next poll.
pub const MAX_EVENTS_PER_FRAME: usize = 32;

pub type EventBatch = ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>;

/// Something that yields input events once per frame.
pub trait InputSource {
    /// Append pending events to `out` without blocking.
    fn poll(&mut self, out: &mut EventBatch) -> Result<()>;
}

/// Reads key presses from the terminal via crossterm.
#[derive(Debug, Default)]
pub struct TerminalInput {
    resized: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once after the terminal was resized.
    pub fn take_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, out: &mut EventBatch) -> Result<()> {
        while !out.is_full() && event::poll(Duration::ZERO)? {
            match event::read()? {
                // Auto-repeat and releases are ignored; one press, one event.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(ev) = map_key_event(key) {
                        out.push(ev);
                    }
                }
                Event::Resize(_, _) => self.resized = true,
                _ => {}
            }
        }
        Ok(())
    }
}

/// Replays a fixed script, one batch per poll, then nothing.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, out: &mut EventBatch) -> Result<()> {
        if let Some(frame) = self.frames.pop_front() {
            for ev in frame {
                if out.try_push(ev).is_err() {
                    break;
                }
            }
        }
        Ok(())
    }
}
