//! Property-based tests for markup rendering and caret mapping.
//!
//! Uses proptest to verify invariants that must hold across all inputs.

use mention_input::caret::{Caret, NodeRef, clamp_anchor, locate, rehome};
use mention_input::markup::render;
use mention_input::{KnownNames, Segment, Style, Surface};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

const NAMES: [&str; 3] = ["Alice", "Bob", "张三"];

fn names() -> KnownNames {
    KnownNames::from_names(NAMES)
}

/// Arbitrary UTF-8 strings.
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,80}"
}

/// Strings built from mention-heavy fragments, so tokens, stray brackets
/// and multi-byte text show up often.
fn mention_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "[Alice]", "[Bob]", "[张三]", "[Eve]", "[", "]", "[]", " ", "went to ", "理塘",
            "e\u{301}", "\n", "Al", "ice",
        ]),
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![utf8_string(), mention_string()]
}

// ============================================================================
// Rendering Properties
// ============================================================================

proptest! {
    /// Concatenated segment text reproduces the input.
    #[test]
    fn render_round_trips(text in any_text()) {
        let markup = render(&text, &names(), Style::bold());
        prop_assert_eq!(markup.text(), text.clone());
        prop_assert_eq!(markup.len_chars(), text.chars().count());
    }

    /// No segment is empty.
    #[test]
    fn render_has_no_empty_segments(text in any_text()) {
        let markup = render(&text, &names(), Style::NONE);
        for segment in &markup {
            prop_assert!(!segment.is_empty());
        }
    }

    /// Every token is a single bracket pair around a recognized name.
    #[test]
    fn tokens_are_recognized_single_pairs(text in mention_string()) {
        let names = names();
        for segment in &render(&text, &names, Style::NONE) {
            if let Segment::Token(span) = segment {
                let leaf = span.leaf();
                prop_assert!(leaf.starts_with('['));
                prop_assert!(leaf.ends_with(']'));
                prop_assert_eq!(leaf.matches('[').count(), 1);
                prop_assert_eq!(leaf.matches(']').count(), 1);
                prop_assert!(names.is_recognized(span.name()));
            }
        }
    }

    /// Rendering the rendered text again gives the same structure.
    #[test]
    fn render_is_idempotent(text in any_text()) {
        let names = names();
        let once = render(&text, &names, Style::NONE);
        let twice = render(&once.text(), &names, Style::NONE);
        prop_assert_eq!(once, twice);
    }

    /// Without known names nothing is ever a token.
    #[test]
    fn no_names_no_tokens(text in mention_string()) {
        let markup = render(&text, &KnownNames::new(), Style::NONE);
        prop_assert_eq!(markup.token_count(), 0);
    }
}

// ============================================================================
// Caret Properties
// ============================================================================

proptest! {
    /// Locating a rehomed anchor gives the anchor back.
    #[test]
    fn locate_inverts_rehome(text in any_text(), seed in any::<usize>()) {
        let markup = render(&text, &names(), Style::NONE);
        let anchor = seed % (markup.len_chars() + 1);
        let caret = rehome(anchor, &markup);
        prop_assert_eq!(locate(&markup, Some(caret)), anchor);
    }

    /// Rehoming is total and never points outside the markup.
    #[test]
    fn rehome_is_total(text in any_text(), anchor in 0usize..200) {
        let markup = render(&text, &names(), Style::NONE);
        let caret = rehome(anchor, &markup);
        match caret.node {
            NodeRef::Container => {
                prop_assert!(anchor > markup.len_chars() || markup.is_empty());
                prop_assert_eq!(caret.offset, markup.len());
            }
            node => {
                let index = node.segment_index().unwrap();
                let segment = markup.get(index).unwrap();
                prop_assert_eq!(node, NodeRef::caret_bearing(index, segment));
                prop_assert!(caret.offset <= segment.len_chars());
            }
        }
        prop_assert_eq!(locate(&markup, Some(caret)), clamp_anchor(anchor, &markup));
    }

    /// Any caret, valid or stale, locates to an index within the text.
    #[test]
    fn locate_is_bounded(text in any_text(), index in 0usize..40, offset in 0usize..40) {
        let markup = render(&text, &names(), Style::NONE);
        for node in [NodeRef::Container, NodeRef::Segment(index), NodeRef::Leaf(index)] {
            let anchor = locate(&markup, Some(Caret::new(node, offset)));
            prop_assert!(anchor <= markup.len_chars());
        }
        prop_assert_eq!(locate(&markup, None), markup.len_chars());
    }

    /// The caret survives a rebuild from the same text.
    #[test]
    fn caret_survives_rerender(text in any_text(), seed in any::<usize>()) {
        let names = names();
        let before = render(&text, &names, Style::NONE);
        let anchor = seed % (before.len_chars() + 1);
        let caret = rehome(anchor, &before);

        let after = render(&before.text(), &names, Style::NONE);
        let restored = rehome(locate(&before, Some(caret)), &after);
        prop_assert_eq!(locate(&after, Some(restored)), anchor);
    }
}

// ============================================================================
// Surface Edit Properties
// ============================================================================

proptest! {
    /// Inserting at the caret splices into the logical text and advances
    /// the caret by the inserted length.
    #[test]
    fn insert_splices_at_caret(text in mention_string(), insert in "[a-z\\[\\]]{1,6}", seed in any::<usize>()) {
        let mut surface = Surface::with_markup(render(&text, &names(), Style::NONE));
        let anchor = seed % (surface.len_chars() + 1);
        surface.set_caret_index(anchor);
        surface.insert_at_selection(&insert);

        let mut expected: Vec<char> = text.chars().collect();
        expected.splice(anchor..anchor, insert.chars());
        prop_assert_eq!(surface.text(), expected.into_iter().collect::<String>());
        prop_assert_eq!(surface.caret_index(), anchor + insert.chars().count());
    }

    /// Deleting backward then re-inserting the removed text restores it.
    #[test]
    fn backspace_removes_one_cluster(text in mention_string(), seed in any::<usize>()) {
        let mut surface = Surface::with_markup(render(&text, &names(), Style::NONE));
        let anchor = seed % (surface.len_chars() + 1);
        surface.set_caret_index(anchor);

        let deleted = surface.delete_backward();
        prop_assert_eq!(deleted, anchor > 0);
        let removed = anchor - surface.caret_index();
        prop_assert_eq!(surface.len_chars() + removed, text.chars().count());
        prop_assert!(removed <= 2);
    }
}
