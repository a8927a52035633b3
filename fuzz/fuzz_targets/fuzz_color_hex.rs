//! Fuzz target for token color parsing.
//!
//! `Rgba::from_hex` and `EditorOptions::with_token_color_hex` must handle
//! arbitrary strings without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mention_input::{EditorOptions, Rgba};

fuzz_target!(|data: &str| {
    let parsed = Rgba::from_hex(data);
    let options = EditorOptions::default().with_token_color_hex(data);
    assert_eq!(parsed.is_some(), options.is_ok());

    if !data.starts_with('#') {
        let _ = Rgba::from_hex(&format!("#{data}"));
    }

    // Suffixes and prefixes on char boundaries
    for (i, _) in data.char_indices().take(10) {
        let _ = Rgba::from_hex(&data[i..]);
        let _ = Rgba::from_hex(&data[..i]);
    }
});
