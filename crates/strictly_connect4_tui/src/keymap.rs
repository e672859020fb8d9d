//! Key mapping from terminal events to game input.
//!
//! Each mapping is a plain validation step: keys that mean nothing at the
//! current prompt map to `None` and the caller keeps waiting.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps a digit key to a 1-based column number.
///
/// `0` passes through; whether a number names a playable column is decided
/// by the game loop.
pub fn column_from_key(key: KeyEvent) -> Option<usize> {
    match key.code {
        KeyCode::Char(c) => c.to_digit(10).map(|digit| digit as usize),
        _ => None,
    }
}

/// Maps the restart prompt keys: `1` plays again, `0` declines.
pub fn restart_from_key(key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('1') => Some(true),
        KeyCode::Char('0') => Some(false),
        _ => None,
    }
}

/// Check if key should leave the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
