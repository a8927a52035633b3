//! Plain text to segment rendering.

use std::mem;

use crate::markup::{Markup, Segment};
use crate::names::{KnownNames, is_token};
use crate::style::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    OutsideToken,
    InsideToken,
}

/// Render logical text into a segment sequence.
///
/// Single left-to-right scan. A `[` starts a candidate run (flushing any
/// pending text as plain); the next `]` closes it, and the run becomes a
/// token if its inner text is a recognized name, plain otherwise. Trailing
/// text, including an unterminated `[`, is kept as plain.
///
/// Concatenating the displayed text of the result always yields `text`,
/// no segment is empty, and tokens never nest.
#[must_use]
pub fn render(text: &str, names: &KnownNames, token_style: Style) -> Markup {
    let mut segments = Vec::new();
    let mut pending = String::new();
    let mut state = ScanState::OutsideToken;

    for c in text.chars() {
        match (c, state) {
            ('[', _) => {
                if !pending.is_empty() {
                    segments.push(Segment::Plain(mem::take(&mut pending)));
                }
                pending.push('[');
                state = ScanState::InsideToken;
            }
            (']', ScanState::InsideToken) => {
                pending.push(']');
                let run = mem::take(&mut pending);
                if is_token(&run, names) {
                    segments.push(Segment::token(run, token_style));
                } else {
                    segments.push(Segment::Plain(run));
                }
                state = ScanState::OutsideToken;
            }
            _ => pending.push(c),
        }
    }

    if !pending.is_empty() {
        segments.push(Segment::Plain(pending));
    }

    Markup::from_segments(segments)
}
