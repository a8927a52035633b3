#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Once;

use mention_input::timer::ManualClock;
use mention_input::{EditController, EditorOptions, KnownNames, LogLevel, set_log_callback};

/// Install a tracing subscriber and route controller logs into it.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        set_log_callback(|level, message| match level {
            LogLevel::Debug => tracing::debug!(target: "mention_input", "{message}"),
            LogLevel::Info => tracing::info!(target: "mention_input", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "mention_input", "{message}"),
            LogLevel::Error => tracing::error!(target: "mention_input", "{message}"),
        });
    });
}

/// Controller on a manual clock, mounted with `text` and the default names.
pub fn editor(text: &str) -> (EditController<ManualClock>, ManualClock) {
    editor_with_names(text, &EditorOptions::DEFAULT_NAMES)
}

/// Controller on a manual clock, mounted with `text` and the given names.
pub fn editor_with_names(text: &str, names: &[&str]) -> (EditController<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let options = EditorOptions::default()
        .with_known_names(KnownNames::from_names(names.iter().copied()))
        .with_initial_text(text);
    (EditController::with_clock(options, clock.clone()), clock)
}

/// Make escape sequences readable in snapshots.
pub fn visible_escapes(s: &str) -> String {
    s.replace('\x1b', "^[")
}
