//! oxsh - A themed interactive command shell
//!
//! This library implements a small command shell whose core is an
//! interactive raw-mode line editor: a cursor-managed line buffer, command
//! history with up/down navigation, case-insensitive filename completion,
//! and full-line terminal redraws after every edit. The outer loop
//! dispatches a fixed set of filesystem and git commands and falls back to
//! the host shell for anything it does not recognize.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use oxsh::shell::Shell;
//!
//! # async fn run() -> std::io::Result<()> {
//! let mut shell = Shell::new()?;
//! shell.run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Line editing**: insert/delete at cursor, arrow navigation, Home/End
//! - **History**: append-only with consecutive-duplicate collapsing
//! - **Completion**: Tab completes filenames; multiple matches are listed
//! - **Themes**: six 24-bit RGB prompt themes, switchable at runtime
//! - **Git awareness**: branch and rebase/merge state in the prompt
//! - **Interrupt safety**: Ctrl+C reprints the prompt without touching the
//!   in-progress line

pub mod shell;

// Re-export commonly used types for convenience
pub use shell::{History, LineBuffer, ReadOutcome, Shell, ShellCommand, ShellConfig};
