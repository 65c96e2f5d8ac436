//! Semantic text roles to decorated terminal text.
//!
//! The renderer composes roles and never inspects the decoration, so a
//! theme with colors disabled produces the same frames minus the escape
//! codes. That is also what the unit tests assert against.

use std::env;
use std::io::{stderr, IsTerminal};

use crossterm::style::{Color, Stylize};

pub struct Theme {
    highlight_color: Color,
    answer_color: Color,
    icon_color: Color,
    /// When false every role renders as plain text.
    color_enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            highlight_color: Color::Cyan,
            answer_color: Color::Cyan,
            icon_color: Color::Green,
            color_enabled: true,
        }
    }
}

impl Theme {
    /// A theme that honours `NO_COLOR` and a redirected stderr (the
    /// stream the prompt frames are drawn on).
    #[must_use]
    pub fn detect() -> Self {
        Self {
            color_enabled: env::var_os("NO_COLOR").is_none() && stderr().is_terminal(),
            ..Self::default()
        }
    }

    /// All roles render unstyled. Used by tests and piped output.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color_enabled: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = color;
        self
    }

    #[must_use]
    pub fn with_answer_color(mut self, color: Color) -> Self {
        self.answer_color = color;
        self
    }

    pub fn message(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn help(&self, text: &str) -> String {
        if self.color_enabled {
            text.dim().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn answer(&self, text: &str) -> String {
        if self.color_enabled {
            text.with(self.answer_color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn highlight(&self, text: &str) -> String {
        if self.color_enabled {
            text.with(self.highlight_color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn disabled(&self, text: &str) -> String {
        if self.color_enabled {
            text.dim().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn separator(&self, text: &str) -> String {
        if self.color_enabled {
            text.dim().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn icon(&self, text: &str) -> String {
        if self.color_enabled {
            text.with(self.icon_color).to_string()
        } else {
            text.to_string()
        }
    }
}
