//! The single-select session state machine.
//!
//! A [`Select`] owns the choice list for the lifetime of one prompt. It is
//! driven by classified [`KeyPress`] events and mutates exactly two pieces
//! of state: the active index and the pending/done status. Everything else
//! (bounds, page size, wrap flag, message) is fixed at construction.
//!
//! Every keypress is total: out-of-range digit jumps, backspace on an empty
//! buffer and navigation at a non-wrapping boundary are no-ops, never
//! errors. Once the session is done it ignores all further events.

use std::fmt::Display;
use std::time::Instant;

use log::debug;

use crate::error::{Error, Result};
use crate::item::{Choice, Item};
use crate::key::KeyPress;
use crate::search::SearchState;

/// Items shown per page unless overridden.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Indices of the first and last selectable items, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub first: usize,
    pub last: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    /// Terminal: reached exactly once, on submit.
    Done,
}

/// What a keypress did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The active choice was resolved; the session is now done.
    Submitted,
    /// Visible state changed, the frontend should repaint.
    Updated,
    /// Nothing visible changed.
    Ignored,
}

enum Direction {
    Up,
    Down,
}

/// One running single-select prompt session.
pub struct Select<T> {
    message: String,
    items: Vec<Item<T>>,
    bounds: Bounds,
    active: usize,
    status: Status,
    search: SearchState,
    page_size: usize,
    wrap: bool,
}

fn compute_bounds<T>(items: &[Item<T>]) -> Result<Bounds> {
    let first = items.iter().position(Item::is_selectable);
    let last = items.iter().rposition(Item::is_selectable);
    match (first, last) {
        (Some(first), Some(last)) => Ok(Bounds { first, last }),
        _ => Err(Error::NoSelectableChoice),
    }
}

impl<T: Display> Select<T> {
    /// Creates a session over `items` with the cursor on the first
    /// selectable item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSelectableChoice`] when the list is empty or
    /// contains only separators and disabled choices.
    pub fn new(message: impl Into<String>, items: Vec<Item<T>>) -> Result<Self> {
        let bounds = compute_bounds(&items)?;

        Ok(Self {
            message: message.into(),
            active: bounds.first,
            items,
            bounds,
            status: Status::Pending,
            search: SearchState::new(),
            page_size: DEFAULT_PAGE_SIZE,
            wrap: true,
        })
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Whether Up at the first selectable item wraps to the last one (and
    /// vice versa). On by default.
    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Starts the cursor on the selectable choice whose value equals
    /// `default`. Without a match the cursor stays on the first selectable
    /// item.
    #[must_use]
    pub fn with_default(mut self, default: &T) -> Self
    where
        T: PartialEq,
    {
        let matched = self.items.iter().enumerate().find(|(_, item)| {
            item.is_selectable()
                && item
                    .as_choice()
                    .is_some_and(|choice| choice.value == *default)
        });

        if let Some((index, _)) = matched {
            self.active = index;
        } else {
            debug!("default value matches no selectable choice, keeping first");
        }
        self
    }

    /// Applies one classified keypress. `now` anchors the search expiry
    /// deadline; pass the current instant.
    pub fn handle_key(&mut self, key: KeyPress, now: Instant) -> Outcome {
        if self.status == Status::Done {
            return Outcome::Ignored;
        }

        match key {
            KeyPress::Enter => self.submit(),
            KeyPress::Up => self.step(&Direction::Up),
            KeyPress::Down => self.step(&Direction::Down),
            KeyPress::Digit(digit) => self.jump(digit),
            KeyPress::Backspace => {
                // Reset the buffer only; the cursor stays put and the
                // buffer itself is never displayed.
                self.search.clear();
                Outcome::Ignored
            }
            KeyPress::Char(character) => self.type_ahead(character, now),
        }
    }

    fn submit(&mut self) -> Outcome {
        self.search.clear();
        self.status = Status::Done;
        debug!("submitted choice at index {}", self.active);
        Outcome::Submitted
    }

    fn step(&mut self, direction: &Direction) -> Outcome {
        self.search.clear();

        let at_edge = match direction {
            Direction::Up => self.active == self.bounds.first,
            Direction::Down => self.active == self.bounds.last,
        };
        if !self.wrap && at_edge {
            return Outcome::Ignored;
        }

        let len = self.items.len();
        let stride = match direction {
            Direction::Up => len - 1,
            Direction::Down => 1,
        };

        // At least one selectable item exists, so this terminates.
        let mut index = (self.active + stride) % len;
        while !self.items[index].is_selectable() {
            index = (index + stride) % len;
        }

        debug!("moved from {} to {}", self.active, index);
        self.active = index;
        Outcome::Updated
    }

    fn jump(&mut self, digit: u8) -> Outcome {
        self.search.clear();

        if digit == 0 {
            return Outcome::Ignored;
        }
        let target = usize::from(digit) - 1;

        match self.items.get(target) {
            Some(item) if item.is_selectable() => {
                debug!("digit jump to index {target}");
                self.active = target;
                Outcome::Updated
            }
            _ => Outcome::Ignored,
        }
    }

    fn type_ahead(&mut self, character: char, now: Instant) -> Outcome {
        self.search.push(character, now);
        let needle = self.search.buffer().to_lowercase();

        // Always first-match-from-start, not nearest to the cursor: the
        // same prefix lands on the same earliest match every time.
        let matched = self.items.iter().enumerate().find(|(_, item)| {
            item.is_selectable() && item.label().to_lowercase().starts_with(&needle)
        });

        match matched {
            Some((index, _)) if index != self.active => {
                debug!("search {needle:?} matched index {index}");
                self.active = index;
                Outcome::Updated
            }
            _ => Outcome::Ignored,
        }
    }

    /// When the pending type-ahead buffer should expire, if one is pending.
    /// Event loops use this as their poll timeout.
    #[must_use]
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Clears the type-ahead buffer if its deadline has passed. Returns
    /// whether it was cleared.
    pub fn expire_search(&mut self, now: Instant) -> bool {
        self.search.expire(now)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn wraps(&self) -> bool {
        self.wrap
    }

    /// The choice under the cursor. The active index is kept on a
    /// selectable choice at all times, so this never points at a separator.
    #[must_use]
    pub fn active_choice(&self) -> &Choice<T> {
        match &self.items[self.active] {
            Item::Choice(choice) => choice,
            Item::Separator(_) => {
                unreachable!("active index always refers to a selectable choice")
            }
        }
    }

    /// Consumes the session and returns the active choice's value.
    #[must_use]
    pub fn into_value(mut self) -> T {
        match self.items.swap_remove(self.active) {
            Item::Choice(choice) => choice.value,
            Item::Separator(_) => {
                unreachable!("active index always refers to a selectable choice")
            }
        }
    }
}
