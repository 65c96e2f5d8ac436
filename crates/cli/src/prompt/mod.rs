//! Terminal frontend for the selection engine.
//!
//! This module owns everything between the raw terminal and the engine:
//! keypress classification, glyph selection with an ASCII fallback, the
//! theme that decorates semantic text roles, frame assembly, and the
//! event loop that repaints the prompt in place.
//!
//! # Key Features
//!
//! - **Inline Rendering**: the prompt repaints over itself and collapses
//!   to a single answer line on submit
//! - **Type-ahead Expiry**: the engine's search deadline becomes the event
//!   poll timeout, so stale prefixes clear themselves
//! - **Capability Fallback**: unicode glyphs degrade to ASCII based on an
//!   environment probe
//! - **Theming**: semantic roles (message, help, answer, highlight,
//!   disabled) resolved through one [`theme::Theme`]

pub mod colors;
pub mod glyphs;
pub mod keys;
pub mod render;
pub mod theme;
pub mod ui;

// Re-exports for convenience
pub use render::Renderer;
pub use theme::Theme;
pub use ui::run;
