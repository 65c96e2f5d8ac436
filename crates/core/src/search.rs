//! Type-ahead search buffer with timed expiry.
//!
//! Printable keys accumulate into a transient buffer that is matched as a
//! case-insensitive prefix against choice labels. The buffer expires on its
//! own after [`SEARCH_EXPIRY`] so a stale half-typed prefix does not swallow
//! the next unrelated keystroke.
//!
//! The engine is single threaded, so the "timer" is not a thread or a
//! callback: it is a deadline owned by the search state. The owning event
//! loop reads the deadline through
//! [`Select::search_deadline`](crate::select::Select::search_deadline),
//! uses it as its poll timeout, and calls
//! [`Select::expire_search`](crate::select::Select::expire_search) once the
//! deadline passes. Replacing the deadline reschedules the timer; dropping
//! it cancels. At most one deadline is ever pending.

use std::time::{Duration, Instant};

/// How long a type-ahead prefix stays alive without further input.
pub const SEARCH_EXPIRY: Duration = Duration::from_millis(700);

/// A pending buffer-expiry deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryTimer {
    deadline: Instant,
}

impl ExpiryTimer {
    #[must_use]
    pub fn starting_at(now: Instant) -> Self {
        Self {
            deadline: now + SEARCH_EXPIRY,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// The transient type-ahead state: the typed prefix and its expiry deadline.
#[derive(Debug, Default)]
pub struct SearchState {
    buffer: String,
    timer: Option<ExpiryTimer>,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cancels any pending timer and empties the buffer. Idempotent.
    pub fn clear(&mut self) {
        self.timer = None;
        self.buffer.clear();
    }

    /// Appends a character and reschedules the expiry timer, replacing any
    /// pending one.
    pub fn push(&mut self, character: char, now: Instant) {
        self.timer = None;
        self.buffer.push(character);
        self.timer = Some(ExpiryTimer::starting_at(now));
    }

    /// The instant the buffer should expire, if a timer is pending.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.map(|timer| timer.deadline())
    }

    /// Clears the buffer if its timer has fired. Returns whether anything
    /// was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.timer {
            Some(timer) if timer.is_expired(now) => {
                self.clear();
                true
            }
            _ => false,
        }
    }
}
