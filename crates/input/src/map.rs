//! Key mapping from terminal events to frontend actions.

use crate::types::{Direction, InputAction, REVEAL_CHOICES};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to frontend actions.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    // Terminals with the keyboard enhancement protocol also report releases.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        // Cursor
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(InputAction::Move(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(InputAction::Move(Direction::Right)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(InputAction::Move(Direction::Down)),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(InputAction::Move(Direction::Up)),

        // Click
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::Activate),

        // Reveal choices are numbered from 1 on screen.
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as u8 - b'1';
            (usize::from(index) < REVEAL_CHOICES).then_some(InputAction::Choose(index))
        }

        KeyCode::Char('n') | KeyCode::Char('N') => Some(InputAction::NewRound),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(InputAction::ToggleHint),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('B') => {
            Some(InputAction::Back)
        }

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
