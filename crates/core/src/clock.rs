//! Time sources and fixed-rate frame pacing.
//!
//! The session only ever sees plain millisecond timestamps. The binary feeds it
//! from [`MonotonicClock`]; tests use [`ManualClock`].

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic elapsed time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.now_ms.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

/// Fixed-rate tick pacing.
///
/// Tracks the deadline of the current frame. The caller asks how long is left
/// (to block on input polling or sleep) and marks the frame finished.
#[derive(Debug, Clone)]
pub struct FramePacer {
    tick: Duration,
    deadline: Instant,
}

impl FramePacer {
    pub fn new(tick_ms: u32, now: Instant) -> Self {
        let tick = Duration::from_millis(tick_ms.max(1) as u64);
        Self {
            tick,
            deadline: now + tick,
        }
    }

    /// Budget left in the current frame.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Start the next frame.
    ///
    /// If the loop fell more than a whole frame behind, the schedule restarts
    /// from `now` instead of bursting through the backlog.
    pub fn advance(&mut self, now: Instant) {
        self.deadline += self.tick;
        if self.deadline + self.tick < now {
            self.deadline = now + self.tick;
        }
    }

    /// Block the thread until the frame budget elapses, then start the next frame.
    pub fn wait(&mut self) {
        let now = Instant::now();
        let left = self.remaining(now);
        if !left.is_zero() {
            std::thread::sleep(left);
        }
        self.advance(Instant::now());
    }
}
