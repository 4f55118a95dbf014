//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed, timestamps and input produce identical runs
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`clock`]: Millisecond time sources and fixed-rate frame pacing
//! - [`player`]: Jump impulse and per-tick gravity
//! - [`obstacle`]: Ground/flying obstacles and the interval spawner
//! - [`collision`]: Bounding-box overlap between player and obstacles
//! - [`rescue`]: Timed multiplication challenge offered on collision
//! - [`session`]: One run: spawning, scoring, levels, pause, rescue, death cue
//! - [`menu`]: Screen state machine that configures and drives sessions
//! - [`rng`]: Seedable random source for every random decision
//!
//! # Game Rules
//!
//! - **Scoring**: +1 for every obstacle that leaves the screen
//! - **Levels**: `level = score / 10 + 1`; obstacles spawned afterwards move at
//!   `base_speed + level - 1`
//! - **Rescue**: a collision pauses the world and asks for `A x B` with both
//!   operands in `[level, level + 3]`; 5 seconds to answer
//! - **Death cue**: a failed rescue ends the run after 60 more ticks
//!
//! # Example
//!
//! ```
//! use tui_runner_core::{GameSession, SessionConfig, SessionStatus};
//! use tui_runner_types::InputEvent;
//!
//! let mut session = GameSession::new(SessionConfig::default(), 0);
//!
//! // Jump on the first frame.
//! let status = session.tick(16, &[InputEvent::Jump]);
//! assert_eq!(status, SessionStatus::Running);
//! assert!(session.player().is_airborne());
//!
//! assert_eq!(session.score(), 0);
//! assert_eq!(session.level(), 1);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep: every loop runs at 60 ticks per second and
//! physics is integrated per tick, not per elapsed millisecond. Timestamps are
//! only used for the spawn interval and the rescue deadline.

pub mod clock;
pub mod collision;
pub mod menu;
pub mod obstacle;
pub mod player;
pub mod rescue;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_runner_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, FramePacer, ManualClock, MonotonicClock};
pub use collision::any_collision;
pub use menu::{wrap_index, Control, MenuSettings, MenuSnapshot, MenuStateMachine, Screen};
pub use obstacle::{Obstacle, ObstacleSpawner};
pub use player::Player;
pub use rescue::{RescueChallenge, RescueFailure, RescueOutcome};
pub use rng::GameRng;
pub use session::{level_for_score, GameSession, SessionConfig, SessionStatus};
pub use snapshot::{ObstacleSnapshot, RescueSnapshot, SessionSnapshot};
