//! Term Pick CLI Library
//!
//! This crate provides the terminal frontend for term-pick's single-select
//! prompt. It classifies raw crossterm key events for the engine in
//! `term-pick-core`, renders the paginated list inline, and ships the
//! `pick` binary that runs a prompt from a YAML menu definition and prints
//! the selected value.
//!
//! # Key Features
//!
//! - **Inline Prompt**: repaints in place and collapses to one answer line
//! - **Menu Files**: YAML menu definitions with separators, disabled
//!   choices, defaults and color overrides
//! - **Glyph Fallback**: unicode markers degrade to ASCII where needed
//!
//! # Examples
//!
//! Driving a prompt from code rather than a menu file:
//!
//! ```no_run
//! use term_pick_cli::prompt::{self, Theme};
//! use term_pick_cli::prompt::glyphs;
//! use term_pick_core::item::Item;
//! use term_pick_core::select::Select;
//!
//! let select = Select::new(
//!     "Favourite colour?",
//!     vec![Item::choice("red"), Item::choice("blue")],
//! )?;
//! let colour = prompt::run(select, Theme::detect(), glyphs::detect())?;
//! println!("{colour}");
//! # Ok::<(), term_pick_cli::error::Error>(())
//! ```

pub mod cli_args;
pub mod error;
pub mod menu;
pub mod prompt;
