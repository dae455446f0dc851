//! Command History Module
//!
//! Append-only history of accepted lines with a separately tracked
//! navigation cursor. Entries are never removed or reordered; consecutive
//! duplicates are collapsed. Nothing is persisted across sessions.

/// Command history with up/down navigation state
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    /// Index currently displayed, or None when not browsing
    nav: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted line. Empty lines and duplicates of the most
    /// recent entry are skipped.
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() && self.entries.last().map(String::as_str) != Some(line) {
            self.entries.push(line.to_string());
        }
        self.nav = None;
    }

    /// Navigate backward (up arrow). From the sentinel this jumps to the
    /// newest entry; further presses walk toward the oldest, clamped at 0.
    pub fn up(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.nav {
            None => self.entries.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.nav = Some(idx);
        self.entries.get(idx).map(String::as_str)
    }

    /// Navigate forward (down arrow). Past the newest entry the navigation
    /// resets to the sentinel and None is returned; the caller clears the
    /// line buffer.
    pub fn down(&mut self) -> Option<&str> {
        match self.nav {
            Some(idx) if idx + 1 < self.entries.len() => {
                self.nav = Some(idx + 1);
                self.entries.get(idx + 1).map(String::as_str)
            }
            _ => {
                self.nav = None;
                None
            }
        }
    }

    /// Reset navigation to "not browsing"; called at the start of every read
    pub fn reset_nav(&mut self) {
        self.nav = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in chronological order, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Current navigation index, if browsing
    pub fn nav_index(&self) -> Option<usize> {
        self.nav
    }
}
