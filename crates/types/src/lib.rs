//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # World Geometry
//!
//! The simulation runs in a fixed pixel-like coordinate space; the renderer
//! scales it to whatever terminal size is available.
//!
//! - **Screen**: 1200 x 600 units, origin top-left, y grows downward
//! - **Ground line**: y = 550
//! - **Player**: 60 x 60 at x = 100, resting at y = 490
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `RESCUE_TIMEOUT_MS` | 5000 | Time allowed to answer a rescue challenge |
//! | `DEATH_CUE_TICKS` | 60 | Length of the terminal death cue |
//! | `POINTS_PER_LEVEL` | 10 | Cleared obstacles per level |
//!
//! # Difficulty Catalog
//!
//! | Name | Base speed | Spawn interval |
//! |------|------------|----------------|
//! | Easy | 4 | 2000ms |
//! | Medium | 6 | 1500ms |
//! | Hard | 8 | 1200ms |
//! | Impossible | 12 | 800ms |
//!
//! # Examples
//!
//! ```
//! use tui_runner_types::{DifficultyProfile, InputEvent, Rect};
//!
//! let hard = DifficultyProfile::from_name("hard").unwrap();
//! assert_eq!(hard.base_speed, 8);
//! assert_eq!(hard.spawn_interval_ms, 1200);
//!
//! assert_eq!(InputEvent::from_digit_char('7'), Some(InputEvent::Digit(7)));
//!
//! let a = Rect::new(0, 0, 10, 10);
//! assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
//! assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
//! ```

/// World width in units
pub const SCREEN_WIDTH: i32 = 1200;

/// World height in units
pub const SCREEN_HEIGHT: i32 = 600;

/// Y coordinate of the ground line
pub const GROUND_Y: i32 = 550;

/// Fixed frame rate of every loop (menu, session, rescue, death cue)
pub const FPS: u32 = 60;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

pub const PLAYER_X: i32 = 100;
pub const PLAYER_WIDTH: i32 = 60;
pub const PLAYER_HEIGHT: i32 = 60;

/// Lowest y the player's top edge may reach (standing on the ground line)
pub const PLAYER_GROUND_LIMIT: i32 = GROUND_Y - PLAYER_HEIGHT;

/// Velocity added every tick, not scaled by elapsed time
pub const GRAVITY: f32 = 1.0;

/// Vertical velocity set by a jump (negative is up)
pub const JUMP_VELOCITY: f32 = -20.0;

pub const GROUND_OBSTACLE_WIDTH: i32 = 30;
pub const GROUND_OBSTACLE_HEIGHT: i32 = 60;
pub const FLYING_OBSTACLE_WIDTH: i32 = 70;
pub const FLYING_OBSTACLE_HEIGHT: i32 = 60;

/// Inclusive band of extra lift applied to flying obstacles
pub const FLYING_LIFT_MIN: i32 = 20;
pub const FLYING_LIFT_MAX: i32 = 120;

/// Obstacles cleared per level
pub const POINTS_PER_LEVEL: u32 = 10;

/// Time allowed to answer a rescue challenge
pub const RESCUE_TIMEOUT_MS: u64 = 5000;

/// Operands of a rescue challenge are drawn from `[level, level + RESCUE_OPERAND_SPAN]`
pub const RESCUE_OPERAND_SPAN: u32 = 3;

/// Ticks the terminal death cue plays before control returns to the menu
pub const DEATH_CUE_TICKS: u32 = 60;

/// Columns of the character selection grid
pub const CHARACTER_GRID_COLUMNS: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcade_parity_geometry_defaults() {
        assert_eq!(SCREEN_WIDTH, 1200);
        assert_eq!(GROUND_Y, 550);
        assert_eq!(PLAYER_GROUND_LIMIT, 490);
        assert_eq!(GRAVITY, 1.0);
        assert_eq!(JUMP_VELOCITY, -20.0);
        assert_eq!(RESCUE_TIMEOUT_MS, 5000);
        assert_eq!(DEATH_CUE_TICKS, 60);
    }

    #[test]
    fn difficulty_catalog_matches_tiers() {
        let names: Vec<_> = DIFFICULTIES.iter().map(|d| d.name).collect();
        assert_eq!(names, ["Easy", "Medium", "Hard", "Impossible"]);
        assert_eq!(DifficultyProfile::default().name, "Medium");
        assert_eq!(DifficultyProfile::from_name("IMPOSSIBLE").unwrap().spawn_interval_ms, 800);
        assert_eq!(DifficultyProfile::from_name("nightmare"), None);
    }

    #[test]
    fn digit_chars_map_to_digit_events() {
        assert_eq!(InputEvent::from_digit_char('0'), Some(InputEvent::Digit(0)));
        assert_eq!(InputEvent::from_digit_char('9'), Some(InputEvent::Digit(9)));
        assert_eq!(InputEvent::from_digit_char('x'), None);
    }

    #[test]
    fn rect_touching_edges_do_not_intersect() {
        let a = Rect::new(100, 490, 60, 60);
        assert!(!a.intersects(&Rect::new(160, 490, 30, 60)));
        assert!(a.intersects(&Rect::new(159, 490, 30, 60)));
        assert!(!a.intersects(&Rect::new(100, 430, 60, 60)));
        assert_eq!(a.right(), 160);
        assert_eq!(a.bottom(), 550);
    }

    #[test]
    fn character_lookup_is_bounded() {
        assert_eq!(CharacterId::from_index(3), Some(CharacterId(3)));
        assert_eq!(CharacterId::from_index(CHARACTERS.len()), None);
        assert_eq!(CharacterId::default().name(), "dino_1");
    }
}

/// Axis-aligned bounding box in world units.
///
/// `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Overlap test on both axes; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Discrete input events, produced once at the input boundary
///
/// Every screen and the session consume this same closed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Cancel,
    Jump,
    TogglePause,
    /// A decimal digit, always in `0..=9`
    Digit(u8),
    Backspace,
    /// Terminates the process from any screen
    Quit,
}

impl InputEvent {
    /// Classify a character as a digit event.
    pub fn from_digit_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| InputEvent::Digit(d as u8))
    }
}

/// Obstacle archetype
///
/// - **Ground**: rests on the ground line, must be jumped over
/// - **Flying**: hovers in a randomized band above player height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Ground,
    Flying,
}

impl ObstacleKind {
    /// Spawn geometry (width, height) of this archetype
    pub fn size(&self) -> (i32, i32) {
        match self {
            ObstacleKind::Ground => (GROUND_OBSTACLE_WIDTH, GROUND_OBSTACLE_HEIGHT),
            ObstacleKind::Flying => (FLYING_OBSTACLE_WIDTH, FLYING_OBSTACLE_HEIGHT),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Ground => "ground",
            ObstacleKind::Flying => "flying",
        }
    }
}

/// Named {speed, spawn interval} pair selected before a session.
///
/// Immutable once chosen; a running session keeps its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultyProfile {
    pub name: &'static str,
    /// Obstacle speed at level 1, in units per tick
    pub base_speed: i32,
    pub spawn_interval_ms: u64,
}

/// The fixed difficulty catalog, in menu order.
pub const DIFFICULTIES: [DifficultyProfile; 4] = [
    DifficultyProfile {
        name: "Easy",
        base_speed: 4,
        spawn_interval_ms: 2000,
    },
    DifficultyProfile {
        name: "Medium",
        base_speed: 6,
        spawn_interval_ms: 1500,
    },
    DifficultyProfile {
        name: "Hard",
        base_speed: 8,
        spawn_interval_ms: 1200,
    },
    DifficultyProfile {
        name: "Impossible",
        base_speed: 12,
        spawn_interval_ms: 800,
    },
];

impl DifficultyProfile {
    /// Look up a catalog entry by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        DIFFICULTIES
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .copied()
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        DIFFICULTIES[1]
    }
}

/// Character identifiers offered by the asset catalog.
pub const CHARACTERS: [&str; 4] = ["dino_1", "dino_2", "dino_3", "dino_4"];

/// Opaque handle to an entry of [`CHARACTERS`].
///
/// The core only carries it around; the renderer decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharacterId(pub usize);

impl CharacterId {
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CHARACTERS.len()).then_some(CharacterId(index))
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn name(&self) -> &'static str {
        CHARACTERS[self.0 % CHARACTERS.len()]
    }
}

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainMenuOption {
    StartGame,
    Instructions,
    ChooseDifficulty,
    ChooseCharacter,
    Quit,
}

impl MainMenuOption {
    pub const ALL: [MainMenuOption; 5] = [
        MainMenuOption::StartGame,
        MainMenuOption::Instructions,
        MainMenuOption::ChooseDifficulty,
        MainMenuOption::ChooseCharacter,
        MainMenuOption::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainMenuOption::StartGame => "Start Game",
            MainMenuOption::Instructions => "Instructions",
            MainMenuOption::ChooseDifficulty => "Choose Difficulty",
            MainMenuOption::ChooseCharacter => "Choose Character",
            MainMenuOption::Quit => "Quit",
        }
    }
}

/// Label of the trailing entry on the difficulty screen
pub const DIFFICULTY_BACK_LABEL: &str = "Back";

/// Number of entries on the difficulty screen (catalog + Back)
pub const DIFFICULTY_OPTION_COUNT: usize = DIFFICULTIES.len() + 1;

/// Lines shown on the instructions screen
pub const INSTRUCTIONS: [&str; 4] = [
    "Use SPACE or UP to jump.",
    "Avoid cactuses and pterodactyls.",
    "Press P to pause.",
    "Press ESC to return.",
];
