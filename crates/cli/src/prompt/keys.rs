//! Raw terminal key events to engine keypresses.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use term_pick_core::key::KeyPress;

/// Maps a crossterm key event onto the engine's key alphabet.
///
/// Digits become direct jumps, every other printable character feeds the
/// type-ahead search (which is why there is no vim-style j/k navigation
/// here). Keys the engine has no reaction to map to `None`.
#[must_use]
pub fn classify(key_event: &KeyEvent) -> Option<KeyPress> {
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key_event.code {
        KeyCode::Enter => Some(KeyPress::Enter),
        KeyCode::Up => Some(KeyPress::Up),
        KeyCode::Down => Some(KeyPress::Down),
        KeyCode::Backspace => Some(KeyPress::Backspace),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Some(KeyPress::Digit(c as u8 - b'0'))
        }
        KeyCode::Char(c) if !c.is_control() => Some(KeyPress::Char(c)),
        _ => None,
    }
}

/// Ctrl-C cancels the whole prompt rather than reaching the engine.
#[must_use]
pub fn is_interrupt(key_event: &KeyEvent) -> bool {
    key_event.code == KeyCode::Char('c')
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
}
