//! Menu state machine - the outer control flow of the game
//!
//! A single controller owns every screen, including the running session. The
//! binary calls [`MenuStateMachine::tick`] once per frame with the frame's
//! input and renders whatever screen is current; no screen runs its own loop.
//!
//! ```text
//! MainMenu ──Start Game──────────▶ InSession ──run over──▶ GameOver
//!    ▲  ├──Instructions──────▶ Instructions ─┐              │  │
//!    │  ├──Choose Difficulty─▶ DifficultySelect ┤  Confirm ◀─┘  │ Cancel
//!    │  └──Choose Character──▶ CharacterSelect ─┤  (restart)    │
//!    └───────────────── Cancel / selection ─────┴───────────────┘
//! ```
//!
//! `Quit` anywhere ends the process.

use crate::rng::GameRng;
use crate::session::{GameSession, SessionConfig, SessionStatus};
use crate::types::{
    CharacterId, DifficultyProfile, InputEvent, MainMenuOption, CHARACTERS,
    CHARACTER_GRID_COLUMNS, DIFFICULTIES, DIFFICULTY_OPTION_COUNT,
};

/// Screens of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    MainMenu,
    Instructions,
    DifficultySelect,
    CharacterSelect,
    InSession,
    GameOver,
}

/// Whether the outer loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Continue,
    Quit,
}

/// Wrap `index + delta` into `0..len`.
///
/// `len` must be non-zero; every option list in the game is fixed and non-empty.
pub fn wrap_index(index: usize, delta: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    (index as isize + delta).rem_euclid(len as isize) as usize
}

/// Initial selections, usually from launch options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuSettings {
    pub difficulty: DifficultyProfile,
    pub character: CharacterId,
    pub seed: u64,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            difficulty: DifficultyProfile::default(),
            character: CharacterId::default(),
            seed: 1,
        }
    }
}

/// Read-only view of the menu layer for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuSnapshot {
    pub screen: Screen,
    /// Highlighted entry on the current list screen
    pub selected: usize,
    pub difficulty: DifficultyProfile,
    pub character: CharacterId,
    pub last_score: u32,
}

#[derive(Debug, Clone)]
pub struct MenuStateMachine {
    screen: Screen,
    selected: usize,
    difficulty: DifficultyProfile,
    character: CharacterId,
    session: Option<GameSession>,
    last_score: u32,
    rng: GameRng,
}

impl MenuStateMachine {
    pub fn new(settings: MenuSettings) -> Self {
        Self {
            screen: Screen::MainMenu,
            selected: 0,
            difficulty: settings.difficulty,
            character: settings.character,
            session: None,
            last_score: 0,
            rng: GameRng::new(settings.seed),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn difficulty(&self) -> DifficultyProfile {
        self.difficulty
    }

    pub fn character(&self) -> CharacterId {
        self.character
    }

    pub fn last_score(&self) -> u32 {
        self.last_score
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot {
            screen: self.screen,
            selected: self.selected,
            difficulty: self.difficulty,
            character: self.character,
            last_score: self.last_score,
        }
    }

    /// Advance one frame.
    ///
    /// Events are handled in order; a screen change drops the rest of the batch.
    pub fn tick(&mut self, now_ms: u64, events: &[InputEvent]) -> Control {
        if events.contains(&InputEvent::Quit) {
            log::info!("quit requested on {:?}", self.screen);
            return Control::Quit;
        }

        if self.screen == Screen::InSession {
            self.tick_session(now_ms, events);
            return Control::Continue;
        }

        for &event in events {
            let before = self.screen;
            if self.handle(now_ms, event) == Control::Quit {
                return Control::Quit;
            }
            if self.screen != before {
                log::debug!("screen {:?} -> {:?}", before, self.screen);
                break;
            }
        }
        Control::Continue
    }

    fn tick_session(&mut self, now_ms: u64, events: &[InputEvent]) {
        let Some(session) = self.session.as_mut() else {
            self.screen = Screen::MainMenu;
            return;
        };

        if let SessionStatus::Over { score } = session.tick(now_ms, events) {
            log::info!("session over with score {}", score);
            self.last_score = score;
            self.session = None;
            self.enter(Screen::GameOver);
        }
    }

    fn handle(&mut self, now_ms: u64, event: InputEvent) -> Control {
        match self.screen {
            Screen::MainMenu => return self.handle_main_menu(now_ms, event),
            Screen::Instructions => {
                if event == InputEvent::Cancel {
                    self.enter(Screen::MainMenu);
                }
            }
            Screen::DifficultySelect => self.handle_difficulty(event),
            Screen::CharacterSelect => self.handle_character(event),
            Screen::GameOver => match event {
                InputEvent::Confirm => self.start_session(now_ms),
                InputEvent::Cancel => self.enter(Screen::MainMenu),
                _ => {}
            },
            Screen::InSession => {}
        }
        Control::Continue
    }

    fn handle_main_menu(&mut self, now_ms: u64, event: InputEvent) -> Control {
        let len = MainMenuOption::ALL.len();
        match event {
            InputEvent::MoveUp => self.selected = wrap_index(self.selected, -1, len),
            InputEvent::MoveDown => self.selected = wrap_index(self.selected, 1, len),
            InputEvent::Confirm => match MainMenuOption::ALL[self.selected] {
                MainMenuOption::StartGame => self.start_session(now_ms),
                MainMenuOption::Instructions => self.enter(Screen::Instructions),
                MainMenuOption::ChooseDifficulty => self.enter(Screen::DifficultySelect),
                MainMenuOption::ChooseCharacter => self.enter(Screen::CharacterSelect),
                MainMenuOption::Quit => return Control::Quit,
            },
            _ => {}
        }
        Control::Continue
    }

    fn handle_difficulty(&mut self, event: InputEvent) {
        match event {
            InputEvent::MoveUp => {
                self.selected = wrap_index(self.selected, -1, DIFFICULTY_OPTION_COUNT)
            }
            InputEvent::MoveDown => {
                self.selected = wrap_index(self.selected, 1, DIFFICULTY_OPTION_COUNT)
            }
            InputEvent::Confirm => {
                // The entry past the catalog is "Back".
                if let Some(profile) = DIFFICULTIES.get(self.selected) {
                    self.difficulty = *profile;
                    log::info!("difficulty set to {}", profile.name);
                }
                self.enter(Screen::MainMenu);
            }
            InputEvent::Cancel => self.enter(Screen::MainMenu),
            _ => {}
        }
    }

    fn handle_character(&mut self, event: InputEvent) {
        let len = CHARACTERS.len();
        let cols = CHARACTER_GRID_COLUMNS as isize;
        match event {
            InputEvent::MoveRight => self.selected = wrap_index(self.selected, 1, len),
            InputEvent::MoveLeft => self.selected = wrap_index(self.selected, -1, len),
            InputEvent::MoveDown => self.selected = wrap_index(self.selected, cols, len),
            InputEvent::MoveUp => self.selected = wrap_index(self.selected, -cols, len),
            InputEvent::Confirm => {
                self.character = CharacterId(self.selected);
                log::info!("character set to {}", self.character.name());
                self.enter(Screen::MainMenu);
            }
            InputEvent::Cancel => self.enter(Screen::MainMenu),
            _ => {}
        }
    }

    fn start_session(&mut self, now_ms: u64) {
        let config = SessionConfig {
            difficulty: self.difficulty,
            character: self.character,
            seed: self.rng.next_seed(),
        };
        self.session = Some(GameSession::new(config, now_ms));
        self.enter(Screen::InSession);
    }

    fn enter(&mut self, screen: Screen) {
        self.screen = screen;
        self.selected = 0;
    }
}

impl Default for MenuStateMachine {
    fn default() -> Self {
        Self::new(MenuSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use InputEvent::*;

    fn machine() -> MenuStateMachine {
        MenuStateMachine::default()
    }

    #[test]
    fn test_wrap_index_both_directions() {
        assert_eq!(wrap_index(4, 1, 5), 0);
        assert_eq!(wrap_index(0, -1, 5), 4);
        assert_eq!(wrap_index(1, -4, 4), 1);
        assert_eq!(wrap_index(3, 4, 4), 3);
        assert_eq!(wrap_index(0, 0, 1), 0);
    }

    #[test]
    fn test_main_menu_navigation_wraps() {
        let mut m = machine();
        m.tick(0, &[MoveUp]);
        assert_eq!(m.selected(), 4);
        m.tick(0, &[MoveDown]);
        assert_eq!(m.selected(), 0);
    }

    #[test]
    fn test_start_game_enters_session() {
        let mut m = machine();
        assert_eq!(m.tick(0, &[Confirm]), Control::Continue);
        assert_eq!(m.screen(), Screen::InSession);
        let session = m.session().unwrap();
        assert_eq!(session.config().difficulty.name, "Medium");
        assert_eq!(session.level(), 1);
    }

    #[test]
    fn test_quit_option_and_quit_event() {
        let mut m = machine();
        assert_eq!(m.tick(0, &[MoveUp, Confirm]), Control::Quit);

        let mut m = machine();
        m.tick(0, &[MoveDown, Confirm]);
        assert_eq!(m.screen(), Screen::Instructions);
        assert_eq!(m.tick(0, &[Quit]), Control::Quit);
    }

    #[test]
    fn test_instructions_return_on_cancel_only() {
        let mut m = machine();
        m.tick(0, &[MoveDown, Confirm]);
        m.tick(0, &[Confirm, MoveDown]);
        assert_eq!(m.screen(), Screen::Instructions);
        m.tick(0, &[Cancel]);
        assert_eq!(m.screen(), Screen::MainMenu);
        assert_eq!(m.selected(), 0);
    }

    #[test]
    fn test_choose_hard_difficulty() {
        let mut m = machine();
        m.tick(0, &[MoveDown, MoveDown, Confirm]);
        assert_eq!(m.screen(), Screen::DifficultySelect);

        m.tick(0, &[MoveDown, MoveDown, Confirm]);
        assert_eq!(m.screen(), Screen::MainMenu);
        assert_eq!(m.difficulty().name, "Hard");
        assert_eq!(m.difficulty().base_speed, 8);
        assert_eq!(m.difficulty().spawn_interval_ms, 1200);
    }

    #[test]
    fn test_difficulty_back_and_cancel_keep_choice() {
        let mut m = machine();
        m.tick(0, &[MoveDown, MoveDown, Confirm]);
        // Up from Easy wraps to Back.
        m.tick(0, &[MoveUp, Confirm]);
        assert_eq!(m.screen(), Screen::MainMenu);
        assert_eq!(m.difficulty().name, "Medium");

        m.tick(0, &[MoveDown, MoveDown, Confirm]);
        m.tick(0, &[MoveDown, MoveDown, MoveDown, Cancel]);
        assert_eq!(m.difficulty().name, "Medium");
    }

    #[test]
    fn test_character_grid_navigation() {
        let mut m = machine();
        m.tick(0, &[MoveUp, MoveUp, Confirm]);
        assert_eq!(m.screen(), Screen::CharacterSelect);

        m.tick(0, &[MoveLeft]);
        assert_eq!(m.selected(), 3);
        m.tick(0, &[MoveRight]);
        assert_eq!(m.selected(), 0);
        // One row of four: vertical moves land on the same cell.
        m.tick(0, &[MoveRight, MoveDown]);
        assert_eq!(m.selected(), 1);
        m.tick(0, &[MoveUp]);
        assert_eq!(m.selected(), 1);

        m.tick(0, &[MoveRight, Confirm]);
        assert_eq!(m.character(), CharacterId(2));
        assert_eq!(m.screen(), Screen::MainMenu);
    }

    #[test]
    fn test_character_cancel_keeps_choice() {
        let mut m = machine();
        m.tick(0, &[MoveUp, MoveUp, Confirm]);
        m.tick(0, &[MoveRight, Cancel]);
        assert_eq!(m.character(), CharacterId(0));
    }

    #[test]
    fn test_selection_does_not_touch_running_session() {
        let mut m = MenuStateMachine::new(MenuSettings {
            difficulty: DIFFICULTIES[0],
            ..MenuSettings::default()
        });
        m.tick(0, &[Confirm]);
        m.difficulty = DIFFICULTIES[3];
        assert_eq!(m.session().unwrap().config().difficulty.name, "Easy");
    }

    #[test]
    fn test_events_after_transition_are_dropped() {
        let mut m = machine();
        m.tick(0, &[Confirm, Jump]);
        assert_eq!(m.screen(), Screen::InSession);
        assert!(!m.session().unwrap().player().is_airborne());
    }

    #[test]
    fn test_session_over_shows_game_over_then_restart() {
        let mut m = machine();
        m.tick(0, &[Confirm]);

        // Wait for the first obstacle to reach the idle player.
        let mut now = 0;
        while m.session().unwrap().rescue().is_none() {
            now += 16;
            m.tick(now, &[]);
            assert!(now < 60_000, "no collision happened");
        }
        let score = m.session().unwrap().score();

        // Let the challenge time out, then play out the death cue.
        now += 5001;
        m.tick(now, &[]);
        let mut ticks = 0;
        while m.screen() == Screen::InSession {
            now += 16;
            m.tick(now, &[]);
            ticks += 1;
        }
        assert_eq!(ticks, 60);
        assert_eq!(m.screen(), Screen::GameOver);
        assert_eq!(m.last_score(), score);
        assert!(m.session().is_none());

        m.tick(now, &[Confirm]);
        assert_eq!(m.screen(), Screen::InSession);
        assert_eq!(m.session().unwrap().config().difficulty.name, "Medium");
        assert_eq!(m.session().unwrap().score(), 0);
    }

    #[test]
    fn test_game_over_cancel_returns_to_menu() {
        let mut m = machine();
        m.screen = Screen::GameOver;
        m.tick(0, &[Cancel]);
        assert_eq!(m.screen(), Screen::MainMenu);
    }

    #[test]
    fn test_sessions_get_distinct_seeds() {
        let mut m = machine();
        m.tick(0, &[Confirm]);
        let first = m.session().unwrap().config().seed;
        m.screen = Screen::GameOver;
        m.session = None;
        m.tick(0, &[Confirm]);
        assert_ne!(m.session().unwrap().config().seed, first);
    }
}
