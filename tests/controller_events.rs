//! Controller events and logs reach the registered callbacks.
//!
//! Callbacks are process-global, so everything runs in one test.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use mention_input::event::{
    CARET_CACHE_EXPIRED, CARET_CACHED, NAME_INSERTED, clear_event_callback, clear_log_callback,
};
use mention_input::timer::ManualClock;
use mention_input::{EditController, EditorOptions, LogLevel, set_event_callback, set_log_callback};

#[test]
fn test_controller_emits_events_and_logs() {
    let events: Arc<Mutex<Vec<(String, String)>>> = Arc::default();
    let logs: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::default();

    let sink = Arc::clone(&events);
    set_event_callback(move |name, data| {
        sink.lock().unwrap().push((name.to_string(), data.to_string()));
    });
    let sink = Arc::clone(&logs);
    set_log_callback(move |level, message| {
        sink.lock().unwrap().push((level, message.to_string()));
    });

    let clock = ManualClock::new();
    let options = EditorOptions::default().with_initial_text("Hello world");
    let mut editor = EditController::with_clock(options, clock.clone());

    editor.set_caret_index(5);
    editor.on_blur();
    editor.insert_name("Alice");

    editor.on_blur();
    clock.advance(Duration::from_secs(2));
    editor.poll_timers();

    editor.insert_name("Nobody");
    editor.type_text("!");

    clear_event_callback();
    clear_log_callback();

    let events = events.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            (CARET_CACHED.to_string(), "offset=5".to_string()),
            (NAME_INSERTED.to_string(), "name=Alice offset=5".to_string()),
            (CARET_CACHED.to_string(), "offset=18".to_string()),
            (CARET_CACHE_EXPIRED.to_string(), String::new()),
            (NAME_INSERTED.to_string(), "name=Nobody offset=18".to_string()),
        ]
    );

    let logs = logs.lock().unwrap().clone();
    assert!(
        logs.iter()
            .any(|(level, msg)| *level == LogLevel::Warn && msg.contains("Nobody"))
    );
    assert!(
        logs.iter()
            .any(|(level, msg)| *level == LogLevel::Debug && msg.starts_with("re-rendered"))
    );
    assert!(!logs.iter().any(|(level, _)| *level == LogLevel::Error));
}
