//! Render Module
//!
//! Full-line redraws of prompt + buffer using carriage return, clear-to-end
//! and cursor-left escape sequences. Erase-then-paint keeps a shorter new
//! line from leaving artifacts of a longer old one.

use std::io::{self, Write};

/// Redraw the prompt and buffer, leaving the terminal cursor at `cursor`
/// characters into the line.
pub fn redraw_line(prompt: &str, line: &str, cursor: usize) -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "\r{}\x1B[K{}", prompt, line)?;
    let tail = line.chars().count().saturating_sub(cursor);
    if tail > 0 {
        write!(out, "\x1B[{}D", tail)?;
    }
    out.flush()
}

/// Print a fresh prompt at the start of the current line
pub fn print_prompt(prompt: &str) -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "\r{}", prompt)?;
    out.flush()
}

/// Clear the screen and home the cursor
pub fn clear_screen() -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "\x1B[2J\x1B[1;1H")?;
    out.flush()
}
