//! Fuzz target for markup rendering and caret mapping.
//!
//! Rendering must reproduce its input, and every anchor must survive a
//! rehome/locate round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mention_input::caret::{locate, rehome};
use mention_input::markup::render;
use mention_input::{KnownNames, Style};

fuzz_target!(|data: &str| {
    let names = KnownNames::from_names(["Alice", "Bob", "张三", ""]);
    let markup = render(data, &names, Style::NONE);
    assert_eq!(markup.text(), data);
    assert!(markup.iter().all(|segment| !segment.is_empty()));

    let len = markup.len_chars();
    for anchor in (0..=len).step_by(len / 16 + 1).chain([len, len + 3]) {
        let caret = rehome(anchor, &markup);
        assert_eq!(locate(&markup, Some(caret)), anchor.min(len));
    }
});
