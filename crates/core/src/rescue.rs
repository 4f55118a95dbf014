//! Rescue challenge - the timed multiplication offered as a second chance
//!
//! A challenge is created the instant a collision is detected and lives until
//! it resolves:
//!
//! ```text
//! Active ──(Confirm, exact answer)──────────────▶ Succeeded
//!    │
//!    ├──(Confirm, wrong or unparsable input)────▶ Failed
//!    └──(now > deadline, checked first)─────────▶ Failed
//! ```
//!
//! Operands are drawn independently from `[level, level + 3]`, and the player
//! has [`RESCUE_TIMEOUT_MS`] to type the product and confirm.
//!
//! # Example
//!
//! ```
//! use tui_runner_core::{RescueChallenge, RescueOutcome};
//! use tui_runner_types::InputEvent;
//!
//! let mut challenge = RescueChallenge::with_operands(2, 3, 0);
//! assert_eq!(challenge.expected(), 6);
//!
//! let outcome = challenge.tick(100, &[InputEvent::Digit(6), InputEvent::Confirm]);
//! assert_eq!(outcome, RescueOutcome::Succeeded);
//! ```

use crate::rng::GameRng;
use crate::types::{InputEvent, RESCUE_OPERAND_SPAN, RESCUE_TIMEOUT_MS};

/// Why a challenge failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RescueFailure {
    WrongAnswer,
    /// Buffer was empty or not a number when confirmed
    Unparsable,
    TimedOut,
}

/// State of a rescue challenge. `Succeeded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RescueOutcome {
    Active,
    Succeeded,
    Failed(RescueFailure),
}

impl RescueOutcome {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, RescueOutcome::Active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescueChallenge {
    operand_a: u32,
    operand_b: u32,
    expected: u64,
    deadline_ms: u64,
    input: String,
    outcome: RescueOutcome,
}

impl RescueChallenge {
    /// Draw a challenge for `level`, starting at `now_ms`.
    pub fn new(level: u32, now_ms: u64, rng: &mut GameRng) -> Self {
        let hi = level.saturating_add(RESCUE_OPERAND_SPAN);
        let a = rng.range_u32(level, hi);
        let b = rng.range_u32(level, hi);
        Self::with_operands(a, b, now_ms)
    }

    /// Challenge with fixed operands.
    pub fn with_operands(operand_a: u32, operand_b: u32, now_ms: u64) -> Self {
        Self {
            operand_a,
            operand_b,
            expected: operand_a as u64 * operand_b as u64,
            deadline_ms: now_ms.saturating_add(RESCUE_TIMEOUT_MS),
            input: String::new(),
            outcome: RescueOutcome::Active,
        }
    }

    /// Swap in fixed operands. The deadline and anything typed so far are kept.
    pub fn replace_operands(&mut self, operand_a: u32, operand_b: u32) {
        self.operand_a = operand_a;
        self.operand_b = operand_b;
        self.expected = operand_a as u64 * operand_b as u64;
    }

    pub fn operands(&self) -> (u32, u32) {
        (self.operand_a, self.operand_b)
    }

    pub fn expected(&self) -> u64 {
        self.expected
    }

    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }

    /// Digits typed so far
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn outcome(&self) -> RescueOutcome {
        self.outcome
    }

    /// Question shown to the player, e.g. `"2 x 3 = ?"`
    pub fn prompt(&self) -> String {
        format!("{} x {} = ?", self.operand_a, self.operand_b)
    }

    /// Whole seconds shown on the countdown (never below 1 while active).
    pub fn seconds_left(&self, now_ms: u64) -> u64 {
        self.deadline_ms.saturating_sub(now_ms) / 1000 + 1
    }

    /// Process one tick: deadline first, then the frame's input in order.
    pub fn tick(&mut self, now_ms: u64, events: &[InputEvent]) -> RescueOutcome {
        if self.outcome.is_resolved() {
            return self.outcome;
        }

        if now_ms > self.deadline_ms {
            self.outcome = RescueOutcome::Failed(RescueFailure::TimedOut);
            return self.outcome;
        }

        for &event in events {
            self.handle(event);
            if self.outcome.is_resolved() {
                break;
            }
        }
        self.outcome
    }

    fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Backspace => {
                self.input.pop();
            }
            InputEvent::Digit(d) if d <= 9 => {
                self.input.push(char::from(b'0' + d));
            }
            InputEvent::Confirm => {
                self.outcome = match self.input.parse::<u64>() {
                    Ok(answer) if answer == self.expected => RescueOutcome::Succeeded,
                    Ok(_) => RescueOutcome::Failed(RescueFailure::WrongAnswer),
                    Err(_) => RescueOutcome::Failed(RescueFailure::Unparsable),
                };
            }
            _ => {}
        }
    }
}
