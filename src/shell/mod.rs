//! Interactive Shell Module
//!
//! A themed command shell built around a raw-mode line editor: character-at-
//! a-time input with cursor management, history navigation, filename
//! completion and full-line redraws, plus the fixed command surface the
//! outer loop dispatches to.
//!
//! ## Module Structure
//!
//! - `buffer` - Single-line editable buffer with cursor management
//! - `history` - Append-only command history with navigation cursor
//! - `complete` - Case-insensitive filename completion
//! - `render` - Prompt and line redraw escape sequences
//! - `editor` - The raw-mode line reading state machine
//! - `interrupt` - Process-wide SIGINT handling with an injectable prompt hook
//! - `prompt` - Theme registry and prompt composition
//! - `commands` - Built-in command parsing and handlers
//! - `config` - Session configuration
//! - `session` - The outer read-eval loop

pub mod buffer;
pub mod commands;
pub mod complete;
pub mod config;
pub mod editor;
pub mod history;
pub mod interrupt;
pub mod prompt;
pub mod render;
pub mod session;

// Re-export main types for convenience
pub use buffer::{CursorMove, LineBuffer};
pub use commands::ShellCommand;
pub use complete::{Candidate, Completion};
pub use config::ShellConfig;
pub use editor::ReadOutcome;
pub use history::History;
pub use prompt::{Theme, ThemeRegistry};
pub use session::Shell;
