//! The editable surface.
//!
//! [`Surface`] models the editable area the controller drives: it holds the
//! current [`Markup`], a collapsed selection addressed by [`Caret`], and a
//! focus flag. Its edit primitives behave like a browser editing a
//! contenteditable element: text is changed in place inside whatever node
//! holds the caret, without re-rendering. Re-deriving the markup from the
//! edited text is the controller's job.
//!
//! # Examples
//!
//! ```
//! use mention_input::{KnownNames, Style, Surface, markup::render};
//! use mention_input::caret::{Caret, NodeRef};
//!
//! let names = KnownNames::from_names(["Alice"]);
//! let mut surface = Surface::with_markup(render("[Alice]!", &names, Style::NONE));
//!
//! surface.set_selection(Caret::new(NodeRef::Leaf(0), 6));
//! surface.insert_at_selection("x");
//!
//! // The token leaf was edited in place and still sits in its wrapper.
//! assert_eq!(surface.markup().segments()[0].text(), "[Alicex]");
//! assert_eq!(surface.text(), "[Alicex]!");
//! ```

use crate::caret::{self, Caret, NodeRef};
use crate::markup::{Markup, Segment};
use crate::unicode;

/// Caret movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Start,
    End,
}

/// Editable area holding rendered markup and a collapsed selection.
#[derive(Clone, Debug, Default)]
pub struct Surface {
    markup: Markup,
    selection: Option<Caret>,
    focused: bool,
}

impl Surface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface showing `markup`.
    #[must_use]
    pub fn with_markup(markup: Markup) -> Self {
        Self {
            markup,
            ..Self::default()
        }
    }

    /// Current rendered structure.
    #[must_use]
    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    /// Flattened displayed text.
    #[must_use]
    pub fn text(&self) -> String {
        self.markup.text()
    }

    /// Displayed length in chars.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.markup.len_chars()
    }

    /// Replace the contents wholesale.
    ///
    /// Every old node is gone afterwards, so the selection is dropped.
    pub fn replace_contents(&mut self, markup: Markup) {
        self.markup = markup;
        self.selection = None;
    }

    /// Current selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Caret> {
        self.selection
    }

    /// Set the selection. The caret is stored as given, even if it does
    /// not address a live node.
    pub fn set_selection(&mut self, caret: Caret) {
        self.selection = Some(caret);
    }

    /// Remove the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Check if the surface has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Set the focus flag.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Anchor index of the current selection.
    #[must_use]
    pub fn caret_index(&self) -> usize {
        caret::locate(&self.markup, self.selection)
    }

    /// Caret-bearing node of the segment at `index`.
    #[must_use]
    pub fn caret_node(&self, index: usize) -> Option<NodeRef> {
        self.markup
            .get(index)
            .map(|segment| NodeRef::caret_bearing(index, segment))
    }

    /// Length of a node in its own offset units.
    ///
    /// Text nodes count chars; the container and token wrappers count
    /// children. `None` if the node does not exist.
    #[must_use]
    pub fn node_len(&self, node: NodeRef) -> Option<usize> {
        match node {
            NodeRef::Container => Some(self.markup.len()),
            NodeRef::Segment(i) => self.markup.get(i).map(|segment| match segment {
                Segment::Plain(_) => segment.len_chars(),
                Segment::Token(_) => 1,
            }),
            NodeRef::Leaf(i) => match self.markup.get(i) {
                Some(segment @ Segment::Token(_)) => Some(segment.len_chars()),
                _ => None,
            },
        }
    }

    /// Move the caret to the anchor index `anchor` (clamped).
    pub fn set_caret_index(&mut self, anchor: usize) {
        let anchor = caret::clamp_anchor(anchor, &self.markup);
        self.selection = Some(caret::rehome(anchor, &self.markup));
    }

    /// Move the caret by one grapheme cluster or to either end.
    pub fn move_caret(&mut self, direction: Direction) {
        let text = self.text();
        let anchor = self.caret_index();
        let target = match direction {
            Direction::Left => unicode::prev_grapheme_boundary(&text, anchor),
            Direction::Right => unicode::next_grapheme_boundary(&text, anchor),
            Direction::Start => 0,
            Direction::End => self.len_chars(),
        };
        self.set_caret_index(target);
    }

    /// Insert `text` at the caret, inside the node that holds it.
    pub fn insert_at_selection(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let inserted = text.chars().count();

        let Some((index, offset)) = self.edit_position() else {
            self.markup.push(Segment::plain(text));
            let index = self.markup.len() - 1;
            self.selection = self
                .caret_node(index)
                .map(|node| Caret::new(node, inserted));
            return;
        };

        if let Some(segment) = self.markup.get_mut(index) {
            let node_text = segment.text_mut();
            let at = unicode::char_to_byte(node_text, offset);
            node_text.insert_str(at, text);
        }
        self.selection = self
            .caret_node(index)
            .map(|node| Caret::new(node, offset + inserted));
    }

    /// Delete the grapheme cluster before the caret.
    ///
    /// At the start of a node the deletion reaches into the nearest
    /// non-empty node before it. Returns `false` if nothing was deleted.
    pub fn delete_backward(&mut self) -> bool {
        let Some((index, offset)) = self.edit_position() else {
            return false;
        };

        let (index, end) = if offset > 0 {
            (index, offset)
        } else {
            match (0..index).rev().find(|&i| self.segment_len(i) > 0) {
                Some(prev) => (prev, self.segment_len(prev)),
                None => return false,
            }
        };

        let Some(segment) = self.markup.get_mut(index) else {
            return false;
        };
        let node_text = segment.text_mut();
        let start = unicode::prev_grapheme_boundary(node_text, end);
        remove_chars(node_text, start, end);
        self.selection = self.caret_node(index).map(|node| Caret::new(node, start));
        true
    }

    /// Delete the grapheme cluster after the caret.
    ///
    /// At the end of a node the deletion reaches into the nearest
    /// non-empty node after it; the caret stays where it is. Returns
    /// `false` if nothing was deleted.
    pub fn delete_forward(&mut self) -> bool {
        let Some((index, offset)) = self.edit_position() else {
            return false;
        };

        let (target, start) = if offset < self.segment_len(index) {
            (index, offset)
        } else {
            match (index + 1..self.markup.len()).find(|&i| self.segment_len(i) > 0) {
                Some(next) => (next, 0),
                None => return false,
            }
        };

        let Some(segment) = self.markup.get_mut(target) else {
            return false;
        };
        let node_text = segment.text_mut();
        let end = unicode::next_grapheme_boundary(node_text, start);
        remove_chars(node_text, start, end);
        self.selection = self.caret_node(index).map(|node| Caret::new(node, offset));
        true
    }

    fn segment_len(&self, index: usize) -> usize {
        self.markup.get(index).map_or(0, Segment::len_chars)
    }

    /// Segment index and char offset where an edit at the caret applies.
    ///
    /// A caret already on a text node is used as is. Any other caret
    /// (container, token wrapper, stale node, no selection) is flattened
    /// and rehomed onto a text node first. `None` means there is no text
    /// node at all.
    fn edit_position(&self) -> Option<(usize, usize)> {
        if let Some(caret) = self.selection {
            match (caret.node, caret.node.segment_index().and_then(|i| self.markup.get(i))) {
                (NodeRef::Segment(i), Some(segment @ Segment::Plain(_)))
                | (NodeRef::Leaf(i), Some(segment @ Segment::Token(_))) => {
                    return Some((i, caret.offset.min(segment.len_chars())));
                }
                _ => {}
            }
        }

        let anchor = self.caret_index();
        match caret::rehome(anchor, &self.markup) {
            Caret {
                node: NodeRef::Segment(i) | NodeRef::Leaf(i),
                offset,
            } => Some((i, offset)),
            Caret {
                node: NodeRef::Container,
                ..
            } => None,
        }
    }
}

fn remove_chars(s: &mut String, start: usize, end: usize) {
    let from = unicode::char_to_byte(s, start);
    let to = unicode::char_to_byte(s, end);
    s.replace_range(from..to, "");
}
