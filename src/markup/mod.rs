//! Markup: the rendered structure of the logical text.
//!
//! Logical text is a plain string with literal bracketed tokens. Rendering
//! splits it into an ordered sequence of [`Segment`]s: plain runs and
//! styled token spans. The structure never goes deeper than two levels:
//! a segment, and for tokens a single text leaf.
//!
//! # Examples
//!
//! ```
//! use mention_input::{KnownNames, Style, markup::render};
//!
//! let names = KnownNames::from_names(["Alice"]);
//! let markup = render("[Alice] went somewhere.", &names, Style::bold());
//!
//! assert_eq!(markup.len(), 2);
//! assert!(markup.segments()[0].is_token());
//! assert_eq!(markup.text(), "[Alice] went somewhere.");
//! ```

mod render;
mod segment;

pub use render::render;
pub use segment::{Segment, TokenSpan};

use std::fmt;

/// Ordered sequence of top-level segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Markup {
    segments: Vec<Segment>,
}

impl Markup {
    /// Create empty markup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create markup from prebuilt segments.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The top-level segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Iterate over segments.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Number of top-level segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total displayed length in chars.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.segments.iter().map(Segment::len_chars).sum()
    }

    /// Flattened displayed text.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Number of token segments.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_token()).count()
    }

    /// Names of the tokens, in order of appearance.
    pub fn token_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Token(span) => Some(span.name()),
            Segment::Plain(_) => None,
        })
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

impl<'a> IntoIterator for &'a Markup {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::KnownNames;
    use crate::style::Style;

    #[test]
    fn test_markup_accessors() {
        let names = KnownNames::from_names(["Alice", "Bob"]);
        let markup = render("[Alice] and [Bob] and [Eve]", &names, Style::NONE);

        // " and " and "[Eve]" stay separate plain runs.
        assert_eq!(markup.len(), 5);
        assert_eq!(markup.token_count(), 2);
        assert_eq!(markup.token_names().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
        assert_eq!(markup.len_chars(), 27);
        assert_eq!(markup.to_string(), markup.text());
    }

    #[test]
    fn test_empty_markup() {
        let markup = Markup::new();
        assert!(markup.is_empty());
        assert_eq!(markup.text(), "");
        assert!(markup.get(0).is_none());
    }
}
