//! Fuzz target for editor operation sequences.
//!
//! Drives an `EditController` with arbitrary typing, deletion, caret moves,
//! blur and insert triggers. The caret must stay within the text and the
//! markup must always match the logical text.

#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mention_input::timer::ManualClock;
use mention_input::{EditController, EditorOptions};

#[derive(Arbitrary, Debug)]
enum Op {
    Type(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Caret(u16),
    Focus,
    Blur,
    Wait(u16),
    Insert(u8),
}

#[derive(Arbitrary, Debug)]
struct Input {
    initial: String,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let clock = ManualClock::new();
    let options = EditorOptions::default().with_initial_text(input.initial);
    let mut editor = EditController::with_clock(options, clock.clone());
    let names = ["Alice", "Bob", "Charlie", "Eve"];

    for op in input.ops.into_iter().take(64) {
        match op {
            Op::Type(text) => editor.type_text(&text),
            Op::Backspace => {
                editor.backspace();
            }
            Op::Delete => {
                editor.delete_forward();
            }
            Op::Left => editor.move_left(),
            Op::Right => editor.move_right(),
            Op::Home => editor.move_to_start(),
            Op::End => editor.move_to_end(),
            Op::Caret(n) => editor.set_caret_index(usize::from(n)),
            Op::Focus => editor.on_focus(),
            Op::Blur => {
                editor.on_blur();
            }
            Op::Wait(ms) => {
                clock.advance(Duration::from_millis(u64::from(ms)));
                editor.poll_timers();
            }
            Op::Insert(i) => {
                editor.insert_name(names[usize::from(i) % names.len()]);
            }
        }

        let text = editor.text();
        assert!(editor.caret_index() <= text.chars().count());
        assert_eq!(editor.markup().text(), text);
    }
});
