//! Rendered segments: plain runs and styled token spans.

use crate::style::Style;

/// A styled token wrapper holding exactly one text leaf.
///
/// The leaf is the caret-bearing node; the wrapper only carries the style.
/// There is no way to give a token more than one leaf or nest another
/// segment inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenSpan {
    leaf: String,
    style: Style,
}

impl TokenSpan {
    /// Create a token span. `text` is the displayed text, brackets included.
    #[must_use]
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            leaf: text.into(),
            style,
        }
    }

    /// Displayed text of the single leaf.
    #[must_use]
    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// Style applied to the wrapper.
    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// Inner name without the surrounding brackets.
    ///
    /// Returns the leaf unchanged if it was edited out of bracket form.
    #[must_use]
    pub fn name(&self) -> &str {
        self.leaf
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(&self.leaf)
    }
}

/// One contiguous run of the logical text.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// Raw text, rendered as-is. The segment itself is the text node.
    Plain(String),
    /// A recognized mention rendered as a styled wrapper around one leaf.
    Token(TokenSpan),
}

impl Segment {
    /// Create a plain segment.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Create a token segment.
    #[must_use]
    pub fn token(text: impl Into<String>, style: Style) -> Self {
        Self::Token(TokenSpan::new(text, style))
    }

    /// Displayed text (for tokens, the leaf text including brackets).
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Token(span) => span.leaf(),
        }
    }

    /// Displayed length in chars.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.text().chars().count()
    }

    /// Check if the displayed text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Check if this is a token segment.
    #[must_use]
    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    /// Style of the segment (`Style::NONE` for plain runs).
    #[must_use]
    pub fn style(&self) -> Style {
        match self {
            Self::Plain(_) => Style::NONE,
            Self::Token(span) => span.style(),
        }
    }

    /// Mutable access to the caret-bearing text, for in-place edits.
    pub(crate) fn text_mut(&mut self) -> &mut String {
        match self {
            Self::Plain(text) => text,
            Self::Token(span) => &mut span.leaf,
        }
    }
}
