//! Frame assembly for the prompt.
//!
//! Builds the complete multi-line text for the current session state:
//! header, paginated body and the active choice's description while the
//! prompt is pending, or a single collapsed answer line once it is done.
//! Rendering is idempotent for identical state; the only cross-frame
//! memory is the one-time help hint.

use std::fmt::Display;

use term_pick_core::item::Item;
use term_pick_core::paginator;
use term_pick_core::select::{Select, Status};

use super::glyphs::GlyphSet;
use super::theme::Theme;

const HELP_HINT: &str = "(Use arrow keys)";

pub struct Renderer {
    theme: Theme,
    glyphs: &'static GlyphSet,
    help_hint_pending: bool,
}

impl Renderer {
    #[must_use]
    pub fn new(theme: Theme, glyphs: &'static GlyphSet) -> Self {
        Self {
            theme,
            glyphs,
            help_hint_pending: true,
        }
    }

    /// The full frame for the session's current state.
    pub fn frame<T: Display>(&mut self, select: &Select<T>) -> String {
        match select.status() {
            Status::Pending => self.pending_frame(select),
            Status::Done => self.done_frame(select),
        }
    }

    fn pending_frame<T: Display>(&mut self, select: &Select<T>) -> String {
        let mut header = format!(
            "{} {}",
            self.theme.icon(self.glyphs.pending),
            self.theme.message(select.message())
        );

        // Shown on the very first frame only, and only when the whole list
        // fits in one page.
        if self.help_hint_pending && select.items().len() <= select.page_size() {
            header.push(' ');
            header.push_str(&self.theme.help(HELP_HINT));
        }
        self.help_hint_pending = false;

        let body = paginator::render_window(
            select.items(),
            select.active_index(),
            select.page_size(),
            select.wraps(),
            |item, is_active| self.item_line(item, is_active),
        );

        let mut frame = format!("{header}\n{body}");
        if let Some(description) = &select.active_choice().description {
            frame.push('\n');
            frame.push_str(&self.theme.help(description));
        }
        frame
    }

    fn item_line<T: Display>(&self, item: &Item<T>, is_active: bool) -> String {
        match item {
            Item::Separator(label) => {
                let label = if label.is_empty() {
                    self.glyphs.rule
                } else {
                    label.as_str()
                };
                self.theme.separator(&format!("  {label}"))
            }
            Item::Choice(choice) => {
                let label = choice.to_string();
                match choice.disabled.label() {
                    Some(marker) => self
                        .theme
                        .disabled(&format!("{} {label} {marker}", self.glyphs.dash)),
                    None if is_active => self
                        .theme
                        .highlight(&format!("{} {label}", self.glyphs.pointer)),
                    None => format!("  {label}"),
                }
            }
        }
    }

    fn done_frame<T: Display>(&self, select: &Select<T>) -> String {
        format!(
            "{} {} {}",
            self.theme.icon(self.glyphs.done),
            self.theme.message(select.message()),
            self.theme.answer(&select.active_choice().to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use term_pick_core::item::Choice;
    use term_pick_core::key::KeyPress;

    use super::super::glyphs::ASCII;
    use super::*;

    fn renderer() -> Renderer {
        Renderer::new(Theme::plain(), &ASCII)
    }

    fn fruit_select() -> Select<&'static str> {
        Select::new(
            "Pick a fruit",
            vec![
                Item::choice("apple"),
                Item::choice("banana"),
                Item::choice("cherry"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_first_frame_shows_help_hint_once() {
        let select = fruit_select();
        let mut renderer = renderer();

        let first = renderer.frame(&select);
        assert!(first.contains("(Use arrow keys)"));

        let second = renderer.frame(&select);
        assert!(!second.contains("(Use arrow keys)"));
    }

    #[test]
    fn test_no_help_hint_when_list_overflows_page() {
        let items = (0..10).map(Item::choice).collect();
        let select = Select::new("Pick a number", items).unwrap();
        let mut renderer = renderer();

        assert!(!renderer.frame(&select).contains("(Use arrow keys)"));
    }

    #[test]
    fn test_pending_frame_marks_active_row() {
        let select = fruit_select();
        let frame = renderer().frame(&select);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines[1], "> apple");
        assert_eq!(lines[2], "  banana");
        assert_eq!(lines[3], "  cherry");
    }

    #[test]
    fn test_disabled_and_separator_rows() {
        let items = vec![
            Item::separator(""),
            Item::separator("extras"),
            Item::Choice(Choice::new("a").disabled()),
            Item::Choice(Choice::new("b").disabled_because("sold out")),
            Item::choice("c"),
        ];
        let select = Select::new("Pick", items).unwrap();
        let frame = renderer().frame(&select);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines[1], "  ----------");
        assert_eq!(lines[2], "  extras");
        assert_eq!(lines[3], "- a (disabled)");
        assert_eq!(lines[4], "- b sold out");
        assert_eq!(lines[5], "> c");
    }

    #[test]
    fn test_active_description_is_appended() {
        let items = vec![
            Item::Choice(Choice::new("a").described("the first letter")),
            Item::choice("b"),
        ];
        let mut select = Select::new("Pick", items).unwrap();
        let mut renderer = renderer();

        assert!(renderer.frame(&select).ends_with("the first letter"));

        select.handle_key(KeyPress::Down, Instant::now());
        assert!(!renderer.frame(&select).contains("the first letter"));
    }

    #[test]
    fn test_done_frame_collapses_to_answer_line() {
        let mut select = fruit_select();
        let mut renderer = renderer();
        renderer.frame(&select);

        select.handle_key(KeyPress::Down, Instant::now());
        select.handle_key(KeyPress::Enter, Instant::now());

        assert_eq!(renderer.frame(&select), "√ Pick a fruit banana");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let select = fruit_select();
        let mut renderer = renderer();
        renderer.frame(&select); // swallow the one-time hint

        assert_eq!(renderer.frame(&select), renderer.frame(&select));
    }
}
