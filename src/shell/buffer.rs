//! Line Buffer Module
//!
//! Single-line editable character buffer with cursor management.
//! All edit operations maintain the invariant `0 <= cursor <= content.len()`.

/// Cursor movement directions within the line
#[derive(Debug, Clone, Copy)]
pub enum CursorMove {
    Left,
    Right,
    Home,
    End,
}

/// Editable line buffer owned by a single line-read invocation
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    content: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    /// Create an empty buffer with the cursor at position 0
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
            cursor: 0,
        }
    }

    /// Get the buffer content as a String
    pub fn text(&self) -> String {
        self.content.iter().collect()
    }

    /// Current cursor offset in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the buffer
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Insert a character at the cursor position
    pub fn insert(&mut self, ch: char) {
        self.content.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace).
    /// Returns false when the cursor is already at the start.
    pub fn backspace(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
            true
        } else {
            false
        }
    }

    /// Delete the character at the cursor (delete key).
    /// Returns false when the cursor is at the end.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
            true
        } else {
            false
        }
    }

    /// Move the cursor, clamped to the buffer bounds.
    /// Returns true when the cursor actually moved.
    pub fn move_cursor(&mut self, direction: CursorMove) -> bool {
        match direction {
            CursorMove::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    return true;
                }
            }
            CursorMove::Right => {
                if self.cursor < self.content.len() {
                    self.cursor += 1;
                    return true;
                }
            }
            CursorMove::Home => {
                if self.cursor != 0 {
                    self.cursor = 0;
                    return true;
                }
            }
            CursorMove::End => {
                if self.cursor != self.content.len() {
                    self.cursor = self.content.len();
                    return true;
                }
            }
        }
        false
    }

    /// Bulk-replace the entire content, cursor moves to the end.
    /// Used by history recall.
    pub fn replace_with(&mut self, text: &str) {
        self.content = text.chars().collect();
        self.cursor = self.content.len();
    }

    /// Replace the character range `[start, end)` with `text`, leaving the
    /// cursor at the end of the inserted text. Used by completion.
    pub fn replace_range(&mut self, start: usize, end: usize, text: &str) {
        let end = end.min(self.content.len());
        let start = start.min(end);
        let replacement: Vec<char> = text.chars().collect();
        let inserted = replacement.len();
        self.content.splice(start..end, replacement);
        self.cursor = start + inserted;
    }

    /// Clear the buffer and reset the cursor
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Borrow the raw character content
    pub fn chars(&self) -> &[char] {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace_round_trip() {
        let mut buffer = LineBuffer::new();

        buffer.insert('g');
        buffer.insert('i');
        buffer.insert('t');
        assert_eq!(buffer.text(), "git");
        assert_eq!(buffer.cursor(), 3);

        assert!(buffer.backspace());
        assert!(buffer.backspace());
        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "");
        assert_eq!(buffer.cursor(), 0);

        // Backspace on empty buffer is a no-op
        assert!(!buffer.backspace());
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_cursor_invariant_under_edits() {
        let mut buffer = LineBuffer::new();

        for ch in "hello world".chars() {
            buffer.insert(ch);
            assert!(buffer.cursor() <= buffer.len());
        }
        for _ in 0..4 {
            buffer.move_cursor(CursorMove::Left);
            assert!(buffer.cursor() <= buffer.len());
        }
        buffer.insert('X');
        assert_eq!(buffer.text(), "hello woXrld");
        buffer.delete_forward();
        assert_eq!(buffer.text(), "hello woXld");
        assert!(buffer.cursor() <= buffer.len());

        // Moves clamp at the boundaries
        for _ in 0..50 {
            buffer.move_cursor(CursorMove::Right);
        }
        assert_eq!(buffer.cursor(), buffer.len());
        for _ in 0..50 {
            buffer.move_cursor(CursorMove::Left);
        }
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_mid_line_insert() {
        let mut buffer = LineBuffer::new();
        buffer.replace_with("ct");
        buffer.move_cursor(CursorMove::Home);
        buffer.move_cursor(CursorMove::Right);
        buffer.insert('a');
        assert_eq!(buffer.text(), "cat");
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn test_replace_with_moves_cursor_to_end() {
        let mut buffer = LineBuffer::new();
        buffer.insert('x');
        buffer.replace_with("git status");
        assert_eq!(buffer.text(), "git status");
        assert_eq!(buffer.cursor(), 10);
    }

    #[test]
    fn test_replace_range_for_completion() {
        let mut buffer = LineBuffer::new();
        buffer.replace_with("cd do");
        buffer.replace_range(3, 5, "docs/");
        assert_eq!(buffer.text(), "cd docs/");
        assert_eq!(buffer.cursor(), 8);
    }

    #[test]
    fn test_clear() {
        let mut buffer = LineBuffer::new();
        buffer.replace_with("something");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_unicode_content() {
        let mut buffer = LineBuffer::new();
        buffer.insert('ñ');
        buffer.insert('á');
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.cursor(), 2);
        buffer.backspace();
        assert_eq!(buffer.text(), "ñ");
    }
}
