//! Glyph selection with a plain-ASCII fallback.
//!
//! The engine is unaffected by which set is active; only the rendered
//! frames differ.

use std::env;

/// The marker characters one prompt renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    /// Cursor in front of the active choice.
    pub pointer: &'static str,
    /// Header icon while the prompt is pending.
    pub pending: &'static str,
    /// Header icon once a choice has been submitted.
    pub done: &'static str,
    /// Marker in front of a disabled choice.
    pub dash: &'static str,
    /// Default separator label when none is given.
    pub rule: &'static str,
}

pub const UNICODE: GlyphSet = GlyphSet {
    pointer: "❯",
    pending: "?",
    done: "✔",
    dash: "-",
    rule: "──────────",
};

pub const ASCII: GlyphSet = GlyphSet {
    pointer: ">",
    pending: "?",
    done: "√",
    dash: "-",
    rule: "----------",
};

/// Picks the glyph set for the current terminal.
#[must_use]
pub fn detect() -> &'static GlyphSet {
    if supports_unicode() {
        &UNICODE
    } else {
        &ASCII
    }
}

/// Environment-based probe for unicode glyph support.
///
/// `PICK_ASCII` forces the fallback. On unix the locale variables decide;
/// on Windows only the modern terminals are trusted.
#[must_use]
pub fn supports_unicode() -> bool {
    if env::var_os("PICK_ASCII").is_some() {
        return false;
    }

    if cfg!(windows) {
        return env::var_os("WT_SESSION").is_some()
            || env::var("TERM_PROGRAM").is_ok_and(|v| v == "vscode");
    }

    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|name| env::var(name).ok().filter(|value| !value.is_empty()))
        .is_some_and(|value| locale_says_unicode(&value))
}

fn locale_says_unicode(locale: &str) -> bool {
    locale.to_uppercase().contains("UTF")
}
