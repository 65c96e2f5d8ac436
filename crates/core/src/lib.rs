//! Term Pick Core Library
//!
//! This crate provides the selection engine for term-pick, a single-select
//! interactive list prompt for terminal tools. It owns everything with real
//! invariants: the keyboard-driven state machine, selectable-bounds
//! computation, type-ahead search with timed expiry, and the pagination
//! window that decides which items are visible.
//!
//! # Key Features
//!
//! - **Choice List Model**: choices, separators and disabled entries with
//!   selectable-bounds computation
//! - **Selection State Machine**: arrow navigation, digit jumps and submit,
//!   with total keypress handling
//! - **Type-ahead Search**: case-insensitive prefix matching with a 700 ms
//!   expiry deadline
//! - **Pagination**: a stable-cursor window over lists larger than one page
//!
//! The crate performs no terminal I/O. A frontend classifies raw key events
//! into [`key::KeyPress`] values, feeds them to [`select::Select`], and
//! repaints whenever a keypress reports [`select::Outcome::Updated`].
//!
//! # Examples
//!
//! ```
//! use std::time::Instant;
//! use term_pick_core::item::Item;
//! use term_pick_core::key::KeyPress;
//! use term_pick_core::select::{Outcome, Select};
//!
//! let items = vec![
//!     Item::choice("red"),
//!     Item::choice("green"),
//!     Item::choice("blue"),
//! ];
//! let mut select = Select::new("Favourite colour?", items)?;
//!
//! select.handle_key(KeyPress::Down, Instant::now());
//! let outcome = select.handle_key(KeyPress::Enter, Instant::now());
//! assert_eq!(outcome, Outcome::Submitted);
//! assert_eq!(select.into_value(), "green");
//! # Ok::<(), term_pick_core::error::Error>(())
//! ```

pub mod error;
pub mod item;
pub mod key;
pub mod paginator;
pub mod search;
pub mod select;
