//! Rope-backed logical text.
//!
//! The surface's flattened text is copied into a [`LogicalText`] whenever
//! text has to be spliced by char offset, such as inserting a `[Name]`
//! token at a cached caret position.

use std::fmt;

use ropey::Rope;

/// Logical text with char-indexed editing.
#[derive(Clone, Debug, Default)]
pub struct LogicalText {
    rope: Rope,
}

impl LogicalText {
    /// Create text from a string.
    #[must_use]
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Insert text at a character position, clamped to the end.
    ///
    /// Returns the position actually used.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> usize {
        let at = char_idx.min(self.len_chars());
        self.rope.insert(at, text);
        at
    }
}

impl fmt::Display for LogicalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl From<&str> for LogicalText {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl From<String> for LogicalText {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}
