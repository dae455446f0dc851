//! Line Editor Module
//!
//! Raw-mode, character-at-a-time line reading: one read owns the terminal's
//! raw mode through an RAII guard, interprets key events, mutates the line
//! buffer and history navigation, and triggers a full-line redraw after
//! every state change. Escape-sequence decoding is delegated to crossterm's
//! event parser, so arrow keys arrive as distinct key codes and a lone
//! Escape keypress is simply ignored.
//!
//! When raw mode cannot be established (piped stdin, unsupported terminal)
//! the read degrades to plain buffered input.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Stylize;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::buffer::{CursorMove, LineBuffer};
use super::complete::{self, Completion};
use super::history::History;
use super::interrupt;
use super::render;

/// Result of one line read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The user accepted a line with Enter
    Line(String),
    /// End of input; the caller treats this as an exit request
    Eof,
}

/// Scoped raw-mode acquisition; Drop restores the previous terminal mode
/// on every exit path out of the read.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> Option<Self> {
        enable_raw_mode().ok().map(|_| Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

enum Step {
    Continue,
    Accept,
    Eof,
}

/// Read one line from the terminal. The prompt has already been printed by
/// the caller; it is passed in so redraws can repaint the whole line.
pub fn read_line(prompt: &str, history: &mut History) -> io::Result<ReadOutcome> {
    history.reset_nav();

    let guard = RawModeGuard::acquire();
    if guard.is_none() {
        // Raw mode unavailable; fall back to line-buffered input
        return read_line_buffered();
    }

    let mut buffer = LineBuffer::new();
    loop {
        match event::poll(Duration::from_millis(100)) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(_) => return finish_eof(),
        }
        let key = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(_) => return finish_eof(),
        };
        match handle_key(key, prompt, &mut buffer, history) {
            Step::Continue => {}
            Step::Accept => {
                print_raw("\r\n");
                return Ok(ReadOutcome::Line(buffer.text()));
            }
            Step::Eof => return finish_eof(),
        }
    }
}

fn finish_eof() -> io::Result<ReadOutcome> {
    print_raw("\r\n");
    Ok(ReadOutcome::Eof)
}

/// Apply one key event to the editor state. Every mutating transition ends
/// in a full-line redraw; render failures are absorbed here and never reach
/// the outer loop.
fn handle_key(key: KeyEvent, prompt: &str, buffer: &mut LineBuffer, history: &mut History) -> Step {
    match key {
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => return Step::Accept,

        // Raw mode swallows SIGINT; Ctrl+C arrives as a key event and runs
        // the same newline + fresh-prompt behavior as the signal handler.
        // The buffer is retained and repainted on the next mutation.
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => interrupt::fire(),

        KeyEvent {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            if buffer.is_empty() {
                return Step::Eof;
            }
        }

        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => {
            if buffer.backspace() {
                redraw(prompt, buffer);
            }
        }

        KeyEvent {
            code: KeyCode::Delete,
            ..
        } => {
            if buffer.delete_forward() {
                redraw(prompt, buffer);
            }
        }

        KeyEvent {
            code: KeyCode::Tab, ..
        } => complete_at_cursor(prompt, buffer),

        KeyEvent {
            code: KeyCode::Left,
            ..
        } => {
            if buffer.move_cursor(CursorMove::Left) {
                redraw(prompt, buffer);
            }
        }
        KeyEvent {
            code: KeyCode::Right,
            ..
        } => {
            if buffer.move_cursor(CursorMove::Right) {
                redraw(prompt, buffer);
            }
        }
        KeyEvent {
            code: KeyCode::Home,
            ..
        } => {
            if buffer.move_cursor(CursorMove::Home) {
                redraw(prompt, buffer);
            }
        }
        KeyEvent {
            code: KeyCode::End, ..
        } => {
            if buffer.move_cursor(CursorMove::End) {
                redraw(prompt, buffer);
            }
        }

        KeyEvent {
            code: KeyCode::Up, ..
        } => {
            recall_up(buffer, history);
            redraw(prompt, buffer);
        }
        KeyEvent {
            code: KeyCode::Down,
            ..
        } => {
            recall_down(buffer, history);
            redraw(prompt, buffer);
        }

        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } => {
            buffer.insert(ch);
            redraw(prompt, buffer);
        }

        // Remaining control characters and escape keys are ignored
        _ => {}
    }
    Step::Continue
}

/// History recall backward: bulk-replace with the recalled entry, cursor at
/// its end. A no-op on empty history.
fn recall_up(buffer: &mut LineBuffer, history: &mut History) {
    if let Some(entry) = history.up() {
        let entry = entry.to_string();
        buffer.replace_with(&entry);
    }
}

/// History recall forward: past the newest entry the buffer clears and
/// navigation resets to "not browsing".
fn recall_down(buffer: &mut LineBuffer, history: &mut History) {
    match history.down() {
        Some(entry) => {
            let entry = entry.to_string();
            buffer.replace_with(&entry);
        }
        None => buffer.clear(),
    }
}

/// Tab completion against the working directory. A single match replaces
/// the word under the cursor; multiple matches are listed below the prompt
/// with the buffer left untouched; no matches is a no-op.
fn complete_at_cursor(prompt: &str, buffer: &mut LineBuffer) {
    let candidates = complete::scan_dir(Path::new("."));
    match complete::complete_word(buffer.chars(), buffer.cursor(), &candidates) {
        Completion::None => {}
        Completion::Single { replacement, .. } => {
            let start = complete::word_start(buffer.chars(), buffer.cursor());
            let end = buffer.cursor();
            buffer.replace_range(start, end, &replacement);
            redraw(prompt, buffer);
        }
        Completion::Multiple(matches) => {
            let mut listing = String::from("\r\n");
            for candidate in &matches {
                if candidate.is_dir {
                    listing.push_str(&format!("{}  ", format!("{}/", candidate.name).blue().bold()));
                } else {
                    listing.push_str(&candidate.name);
                    listing.push_str("  ");
                }
            }
            listing.push_str("\r\n");
            print_raw(&listing);
            redraw(prompt, buffer);
        }
    }
}

fn redraw(prompt: &str, buffer: &LineBuffer) {
    let _ = render::redraw_line(prompt, &buffer.text(), buffer.cursor());
}

fn print_raw(text: &str) {
    let mut out = io::stdout();
    let _ = out.write_all(text.as_bytes());
    let _ = out.flush();
}

/// Degraded read for streams where raw mode is unavailable
fn read_line_buffered() -> io::Result<ReadOutcome> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line)? {
        0 => Ok(ReadOutcome::Eof),
        _ => Ok(ReadOutcome::Line(line.trim_end_matches(['\n', '\r']).to_string())),
    }
}
