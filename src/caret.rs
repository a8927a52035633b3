//! Caret location and rehoming across re-renders.
//!
//! A re-render replaces every node of the surface, so a caret expressed as
//! (node, offset) does not survive it. The caret is first flattened to an
//! anchor index into the displayed text with [`locate`], and after the new
//! markup is in place it is mapped back to a node with [`rehome`].
//!
//! Node addressing follows the two-level structure of [`Markup`]:
//!
//! - [`NodeRef::Container`]: the surface itself; offsets count segments
//! - [`NodeRef::Segment`]: a top-level segment; for plain runs this is the
//!   text node, for tokens it is the styled wrapper (offsets count its one
//!   child)
//! - [`NodeRef::Leaf`]: the single text leaf inside a token wrapper
//!
//! # Examples
//!
//! ```
//! use mention_input::{KnownNames, Style, markup::render};
//! use mention_input::caret::{Caret, NodeRef, locate, rehome};
//!
//! let names = KnownNames::from_names(["Alice"]);
//! let markup = render("Hi [Alice]!", &names, Style::NONE);
//!
//! let caret = rehome(5, &markup);
//! assert_eq!(caret, Caret::new(NodeRef::Leaf(1), 2));
//! assert_eq!(locate(&markup, Some(caret)), 5);
//! ```

use crate::markup::{Markup, Segment};

/// Reference to a node of the rendered surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRef {
    /// The editable container.
    Container,
    /// Top-level segment at the given index.
    Segment(usize),
    /// Text leaf of the token segment at the given index.
    Leaf(usize),
}

impl NodeRef {
    /// The node that holds the caret inside `segment` at `index`.
    #[must_use]
    pub fn caret_bearing(index: usize, segment: &Segment) -> Self {
        match segment {
            Segment::Plain(_) => Self::Segment(index),
            Segment::Token(_) => Self::Leaf(index),
        }
    }

    /// Segment index this node belongs to, if any.
    #[must_use]
    pub fn segment_index(self) -> Option<usize> {
        match self {
            Self::Container => None,
            Self::Segment(i) | Self::Leaf(i) => Some(i),
        }
    }
}

/// A collapsed selection: anchor node plus offset within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caret {
    pub node: NodeRef,
    pub offset: usize,
}

impl Caret {
    /// Create a caret.
    #[must_use]
    pub const fn new(node: NodeRef, offset: usize) -> Self {
        Self { node, offset }
    }

    /// Caret on the container before child `offset`.
    #[must_use]
    pub const fn container(offset: usize) -> Self {
        Self {
            node: NodeRef::Container,
            offset,
        }
    }
}

/// Compute the anchor index of `selection` within `markup`.
///
/// Walks the segments, summing their displayed lengths, until the one that
/// is (or wraps) the anchor node, then adds the offset inside it. With no
/// selection, or a node that is not part of `markup`, the total length is
/// returned.
#[must_use]
pub fn locate(markup: &Markup, selection: Option<Caret>) -> usize {
    let Some(caret) = selection else {
        return markup.len_chars();
    };

    let mut anchor = 0;
    for (index, segment) in markup.iter().enumerate() {
        let len = segment.len_chars();
        match (caret.node, segment) {
            (NodeRef::Container, _) if caret.offset == index => return anchor,
            (NodeRef::Segment(i), Segment::Plain(_)) | (NodeRef::Leaf(i), Segment::Token(_))
                if i == index =>
            {
                return anchor + caret.offset.min(len);
            }
            // Wrapper offsets count children: before or after the leaf.
            (NodeRef::Segment(i), Segment::Token(_)) if i == index => {
                return anchor + if caret.offset == 0 { 0 } else { len };
            }
            _ => {}
        }
        anchor += len;
    }
    anchor
}

/// Map an anchor index onto the caret-bearing node of `markup`.
///
/// The first segment whose end reaches the anchor wins, so an anchor on a
/// boundary lands at the end of the earlier segment. An anchor past the
/// end (or any anchor on empty markup) falls back to the container, after
/// its last child.
#[must_use]
pub fn rehome(anchor: usize, markup: &Markup) -> Caret {
    let mut running = 0;
    for (index, segment) in markup.iter().enumerate() {
        let len = segment.len_chars();
        if running + len >= anchor {
            return Caret::new(NodeRef::caret_bearing(index, segment), anchor - running);
        }
        running += len;
    }
    Caret::container(markup.len())
}

/// Clamp an anchor index into `[0, markup.len_chars()]`.
#[must_use]
pub fn clamp_anchor(anchor: usize, markup: &Markup) -> usize {
    anchor.min(markup.len_chars())
}
