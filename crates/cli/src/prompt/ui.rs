//! The terminal event loop driving one selection session.
//!
//! The engine is synchronous: each key event runs the full transition and
//! repaint cycle before the next one is read. The only timed element is
//! the type-ahead expiry, which surfaces here as the poll timeout.
//!
//! Frames repaint in place (cursor up, clear down) rather than in an
//! alternate screen, so the prompt composes inline with whatever the host
//! program prints around it. Frames go to stderr: stdout stays clean for
//! the resolved value, which is what makes `$(pick menu.yml)` work.

use std::fmt::Display;
use std::io::{stderr, Stderr, Write};
use std::time::Instant;

use crossterm::cursor;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{queue, ExecutableCommand};
use log::debug;

use term_pick_core::select::{Outcome, Select};

use super::glyphs::GlyphSet;
use super::keys::{classify, is_interrupt};
use super::render::Renderer;
use super::theme::Theme;
use crate::error::{Error, Result};

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Restore the terminal on drop, including on early error returns
        let _ = disable_raw_mode();
        let _ = stderr().execute(cursor::Show);
    }
}

/// Runs the prompt to completion and resolves to the selected value.
///
/// # Errors
///
/// Returns [`Error::Interrupted`] on Ctrl-C, or an IO error if the
/// terminal cannot be driven.
pub fn run<T: Display>(
    mut select: Select<T>,
    theme: Theme,
    glyphs: &'static GlyphSet,
) -> Result<T> {
    let mut stderr = stderr();

    enable_raw_mode()?;
    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled
    stderr.execute(cursor::Hide)?;

    let mut renderer = Renderer::new(theme, glyphs);
    let mut painted_lines = 0usize;
    paint(&mut stderr, &renderer.frame(&select), &mut painted_lines)?;

    loop {
        let timeout = select
            .search_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()));

        let next_event = match timeout {
            Some(timeout) => {
                if event::poll(timeout)? {
                    Some(event::read()?)
                } else {
                    None
                }
            }
            // No deadline pending, block until the next event
            None => Some(event::read()?),
        };
        let now = Instant::now();

        match next_event {
            None => {
                // The type-ahead deadline passed with no further input. The
                // buffer is invisible, so there is nothing to repaint.
                select.expire_search(now);
                debug!("type-ahead buffer expired");
            }
            Some(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                if is_interrupt(&key_event) {
                    return Err(Error::Interrupted);
                }
                let Some(key) = classify(&key_event) else {
                    continue;
                };

                match select.handle_key(key, now) {
                    Outcome::Submitted => {
                        paint(&mut stderr, &renderer.frame(&select), &mut painted_lines)?;
                        break;
                    }
                    Outcome::Updated => {
                        paint(&mut stderr, &renderer.frame(&select), &mut painted_lines)?;
                    }
                    Outcome::Ignored => {}
                }
            }
            Some(Event::Resize(_, _)) => {
                paint(&mut stderr, &renderer.frame(&select), &mut painted_lines)?;
            }
            Some(_) => {}
        }
    }

    queue!(stderr, Print("\r\n"))?;
    stderr.flush()?;

    Ok(select.into_value())
}

/// Repaints the prompt in place: back up over the previous frame, clear
/// it, and write the new one.
fn paint(stderr: &mut Stderr, frame: &str, painted_lines: &mut usize) -> Result<()> {
    queue!(stderr, cursor::MoveToColumn(0))?;
    if *painted_lines > 1 {
        queue!(stderr, cursor::MoveUp((*painted_lines - 1) as u16))?;
    }
    queue!(stderr, Clear(ClearType::FromCursorDown))?;

    // Raw mode needs explicit carriage returns
    for (index, line) in frame.lines().enumerate() {
        if index > 0 {
            queue!(stderr, Print("\r\n"))?;
        }
        queue!(stderr, Print(line))?;
    }
    stderr.flush()?;

    *painted_lines = frame.lines().count();
    Ok(())
}
