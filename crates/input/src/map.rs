//! Key mapping from terminal events to input events.

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to an input event.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up => Some(InputEvent::MoveUp),
        KeyCode::Down => Some(InputEvent::MoveDown),
        KeyCode::Left => Some(InputEvent::MoveLeft),
        KeyCode::Right => Some(InputEvent::MoveRight),
        KeyCode::Enter => Some(InputEvent::Confirm),
        KeyCode::Esc => Some(InputEvent::Cancel),

        // Gameplay
        KeyCode::Char(' ') => Some(InputEvent::Jump),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputEvent::TogglePause),

        // Rescue answer entry
        KeyCode::Char(ch) if ch.is_ascii_digit() => InputEvent::from_digit_char(ch),
        KeyCode::Backspace => Some(InputEvent::Backspace),

        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),

        _ => None,
    }
}
