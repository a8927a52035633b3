//! Unicode helpers for caret movement and display width.
//!
//! Anchor indices count chars (Unicode scalar values). Caret movement and
//! deletion step over whole grapheme clusters so a combining sequence or
//! emoji is never split by a single keypress.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Byte offset of char index `char_idx` in `s`, clamped to `s.len()`.
#[must_use]
pub fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(b, _)| b)
}

/// Char index of byte offset `byte_idx` in `s`, clamped to the char count.
///
/// `byte_idx` must lie on a char boundary (or past the end).
#[must_use]
pub fn byte_to_char(s: &str, byte_idx: usize) -> usize {
    s.get(..byte_idx.min(s.len()))
        .map_or_else(|| s.chars().count(), |prefix| prefix.chars().count())
}

/// Char index of the grapheme boundary before `char_idx`.
///
/// Returns 0 at the start of the string. A position inside a cluster
/// moves to the start of that cluster.
#[must_use]
pub fn prev_grapheme_boundary(s: &str, char_idx: usize) -> usize {
    let byte = char_to_byte(s, char_idx);
    let mut prev = 0;
    for (start, _) in s.grapheme_indices(true) {
        if start >= byte {
            break;
        }
        prev = start;
    }
    byte_to_char(s, prev)
}

/// Char index of the grapheme boundary after `char_idx`.
///
/// Returns the char count at the end of the string.
#[must_use]
pub fn next_grapheme_boundary(s: &str, char_idx: usize) -> usize {
    let byte = char_to_byte(s, char_idx);
    s.grapheme_indices(true)
        .map(|(start, _)| start)
        .find(|&start| start > byte)
        .map_or_else(|| s.chars().count(), |start| byte_to_char(s, start))
}

/// Display width of a string in terminal columns.
#[must_use]
pub fn display_width(s: &str) -> usize {
    s.width()
}
