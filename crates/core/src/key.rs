//! Classified key events.
//!
//! The engine never looks at raw terminal events. The owning frontend
//! classifies whatever its event source produces into a [`KeyPress`] and
//! feeds that to [`Select::handle_key`](crate::select::Select::handle_key).
//! This keeps the state machine independent of any particular terminal
//! backend and makes it trivially drivable from tests.

/// A keypress the selection engine knows how to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Enter,
    Up,
    Down,
    /// A digit key, `0`..=`9`. `1` jumps to the first item.
    Digit(u8),
    Backspace,
    /// Any other printable character, fed to the type-ahead search.
    Char(char),
}
